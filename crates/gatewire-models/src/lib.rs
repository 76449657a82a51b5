//! Declarative model catalog for the chat API surface.
//!
//! Every model here is a static schema table built from the core's
//! `model_schema!`/`enum_table!` macros; constructing an instance is
//! `SCHEMA.construct(payload, context)`. Business methods that call
//! back into the API (kick, mute, move, ...) belong to the transport
//! collaborator and are out of scope here.

pub mod channel;
pub mod guild;
pub mod user;

pub use channel::{CHANNEL, CHANNEL_TYPE};
pub use guild::{
    ACTIVITY, ACTIVITY_TYPE, BAN, EMOJI, EXPLICIT_CONTENT_FILTER_LEVEL, GUILD, GUILD_MEMBER,
    MESSAGE_NOTIFICATION_LEVEL, MFA_LEVEL, PRESENCE, ROLE, VERIFICATION_LEVEL, VOICE_REGION,
    VOICE_STATE,
};
pub use user::USER;
