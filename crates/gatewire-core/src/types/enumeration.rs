///
/// EnumMember
/// One declared (label, code) pair of an enum table.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumMember {
    pub label: &'static str,
    pub code: i64,
}

///
/// EnumTable
///
/// Closed mapping between symbolic labels and small integer wire codes,
/// plus the passthrough rule for codes this build does not know about.
/// The wire protocol is versioned independently of any client release,
/// so an unrecognized code must decode, carry its raw value, and encode
/// back unchanged instead of failing the payload.
///

#[derive(Debug)]
pub struct EnumTable {
    /// Fully-qualified type path (for diagnostics).
    pub path: &'static str,
    /// Declared members, in declaration order.
    pub members: &'static [EnumMember],
}

impl EnumTable {
    /// Resolve a wire code. Unknown codes yield a label-less
    /// passthrough value preserving the raw integer.
    #[must_use]
    pub fn from_wire(&self, code: i64) -> EnumValue {
        let label = self.members.iter().find(|m| m.code == code).map(|m| m.label);

        if label.is_none() {
            tracing::debug!(table = self.path, code, "unrecognized enum code, passing through");
        }

        EnumValue { code, label }
    }

    /// Resolve a declared member by its symbolic label.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<EnumValue> {
        self.members
            .iter()
            .find(|m| m.label == label)
            .map(|m| EnumValue {
                code: m.code,
                label: Some(m.label),
            })
    }

    /// Returns true when the code belongs to a declared member.
    #[must_use]
    pub fn declares(&self, code: i64) -> bool {
        self.members.iter().any(|m| m.code == code)
    }
}

///
/// EnumValue
///
/// A resolved enum value: either a declared member (labeled) or a
/// passthrough for an unrecognized code (label-less).
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EnumValue {
    pub code: i64,
    pub label: Option<&'static str>,
}

impl EnumValue {
    /// Re-encode for the wire: always the original code, unchanged.
    #[must_use]
    pub const fn to_wire(self) -> i64 {
        self.code
    }

    #[must_use]
    pub const fn is_unrecognized(self) -> bool {
        self.label.is_none()
    }
}

///
/// enum_table
/// Declare a static enum table from (label, code) pairs.
///
#[macro_export]
macro_rules! enum_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $ident:ident, path = $path:expr, members = [
            $( $label:literal = $code:expr ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        $vis static $ident: $crate::types::EnumTable = $crate::types::EnumTable {
            path: $path,
            members: &[
                $( $crate::types::EnumMember { label: $label, code: $code } ),+
            ],
        };
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    enum_table! {
        static VERIFICATION, path = "tests::Verification", members = [
            "NONE" = 0,
            "LOW" = 1,
            "MEDIUM" = 2,
            "HIGH" = 3,
            "VERY_HIGH" = 4,
        ]
    }

    #[test]
    fn declared_codes_resolve_to_their_label() {
        let value = VERIFICATION.from_wire(2);

        assert_eq!(value.label, Some("MEDIUM"));
        assert_eq!(value.to_wire(), 2);
        assert!(!value.is_unrecognized());
    }

    #[test]
    fn every_declared_member_round_trips() {
        for member in VERIFICATION.members {
            assert_eq!(VERIFICATION.from_wire(member.code).to_wire(), member.code);
        }
    }

    #[test]
    fn unknown_codes_pass_through_label_less() {
        let value = VERIFICATION.from_wire(99);

        assert!(value.is_unrecognized());
        assert_eq!(value.label, None);
        assert_eq!(value.to_wire(), 99);
    }

    #[test]
    fn label_lookup_covers_declared_members_only() {
        assert_eq!(VERIFICATION.by_label("HIGH").map(|v| v.code), Some(3));
        assert_eq!(VERIFICATION.by_label("ULTRA"), None);
    }

    #[test]
    fn declares_checks_membership() {
        assert!(VERIFICATION.declares(0));
        assert!(!VERIFICATION.declares(-1));
    }
}
