use std::sync::Arc;

///
/// Context
///
/// Capability seam between constructed instances and the transport
/// collaborator. A transport exposes its actions (move a member, mute
/// a member, ...) as narrow traits with `Context` as the supertrait and
/// injects one shared handle at construction time; this crate only
/// stores the handle and hands it back. It is a back-reference for
/// calling out: never serialized, never validated, only ever read.
///

pub trait Context: Send + Sync {}

/// Shared handle to the injected context, cheap to clone into nested
/// instances.
pub type ContextHandle = Arc<dyn Context>;
