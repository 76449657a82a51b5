//! The guild aggregate: the deepest object graph the API ships, and
//! the reason nested model coercion exists. A full guild payload nests
//! roles, emojis, voice states, members (each wrapping a user),
//! channels, and presences.

use crate::{channel::CHANNEL, user::USER};
use gatewire_core::{
    enum_table,
    model::{FieldKind, WireDefault},
    model_schema,
};

enum_table! {
    pub static MESSAGE_NOTIFICATION_LEVEL,
    path = "gatewire_models::guild::MessageNotificationLevel", members = [
        "ALL_MESSAGES" = 0,
        "ONLY_MENTIONS" = 1,
    ]
}

enum_table! {
    pub static VERIFICATION_LEVEL,
    path = "gatewire_models::guild::VerificationLevel", members = [
        "NONE" = 0,
        "LOW" = 1,
        "MEDIUM" = 2,
        "HIGH" = 3,
        "VERY_HIGH" = 4,
    ]
}

enum_table! {
    pub static EXPLICIT_CONTENT_FILTER_LEVEL,
    path = "gatewire_models::guild::ExplicitContentFilterLevel", members = [
        "DISABLED" = 0,
        "MEMBERS_WITHOUT_ROLES" = 1,
        "ALL_MEMBERS" = 2,
    ]
}

enum_table! {
    pub static MFA_LEVEL,
    path = "gatewire_models::guild::MfaLevel", members = [
        "NONE" = 0,
        "ELEVATED" = 1,
    ]
}

enum_table! {
    pub static ACTIVITY_TYPE,
    path = "gatewire_models::guild::ActivityType", members = [
        "GAME" = 0,
        "STREAMING" = 1,
        "LISTENING" = 2,
    ]
}

model_schema! {
    pub static ROLE {
        path: "gatewire_models::guild::Role",
        name: "role",
        repr: ["id", "name"],
        fields: [
            ("id", FieldKind::Snowflake, One),
            ("name", FieldKind::Text, One),
            ("color", FieldKind::Int, Opt),
            ("hoist", FieldKind::Bool, Opt),
            ("position", FieldKind::Int, Opt),
            // Raw permission bits; bitmask semantics live outside this
            // layer.
            ("permissions", FieldKind::Int, Opt),
            ("managed", FieldKind::Bool, Opt),
            ("mentionable", FieldKind::Bool, Opt),
        ],
    }
}

model_schema! {
    pub static GUILD_MEMBER {
        path: "gatewire_models::guild::GuildMember",
        name: "guild_member",
        repr: ["user"],
        fields: [
            ("user", FieldKind::Model(&USER), Opt),
            ("guild_id", FieldKind::Snowflake, Opt),
            ("nick", FieldKind::Text, Opt),
            ("roles", FieldKind::Snowflake, Many),
            ("joined_at", FieldKind::Timestamp, Opt),
            ("deaf", FieldKind::Bool, Opt),
            ("mute", FieldKind::Bool, Opt),
        ],
    }
}

model_schema! {
    pub static VOICE_STATE {
        path: "gatewire_models::guild::VoiceState",
        name: "voice_state",
        repr: ["user_id", "channel_id"],
        fields: [
            ("guild_id", FieldKind::Snowflake, Opt),
            ("channel_id", FieldKind::Snowflake, Opt),
            ("user_id", FieldKind::Snowflake, Opt),
            ("session_id", FieldKind::Text, Opt),
            ("deaf", FieldKind::Bool, Opt),
            ("mute", FieldKind::Bool, Opt),
            ("self_deaf", FieldKind::Bool, Opt),
            ("self_mute", FieldKind::Bool, Opt),
            ("suppress", FieldKind::Bool, Opt),
        ],
    }
}

model_schema! {
    pub static ACTIVITY {
        path: "gatewire_models::guild::Activity",
        name: "activity",
        repr: ["name", "type"],
        fields: [
            ("name", FieldKind::Text, Opt),
            ("type", FieldKind::Enum(&ACTIVITY_TYPE), Opt),
            ("url", FieldKind::Text, Opt),
            ("application_id", FieldKind::Int, Opt),
            ("details", FieldKind::Text, Opt),
            ("state", FieldKind::Text, Opt),
        ],
    }
}

model_schema! {
    pub static PRESENCE {
        path: "gatewire_models::guild::Presence",
        name: "presence",
        repr: ["user"],
        fields: [
            ("user", FieldKind::Model(&USER), Opt),
            ("game", FieldKind::Model(&ACTIVITY), Opt),
            ("guild_id", FieldKind::Snowflake, Opt),
            ("status", FieldKind::Text, Opt),
        ],
    }
}

model_schema! {
    pub static BAN {
        path: "gatewire_models::guild::Ban",
        name: "ban",
        repr: ["user"],
        fields: [
            ("reason", FieldKind::Text, Opt),
            ("user", FieldKind::Model(&USER), Opt),
        ],
    }
}

model_schema! {
    pub static VOICE_REGION {
        path: "gatewire_models::guild::VoiceRegion",
        name: "voice_region",
        repr: ["id", "name"],
        fields: [
            ("id", FieldKind::Text, Opt),
            ("name", FieldKind::Text, Opt),
            ("vip", FieldKind::Bool, Opt),
            ("optimal", FieldKind::Bool, Opt),
            ("deprecated", FieldKind::Bool, Opt),
            ("custom", FieldKind::Bool, Opt),
        ],
    }
}

model_schema! {
    pub static EMOJI {
        path: "gatewire_models::guild::Emoji",
        name: "emoji",
        repr: ["id", "name"],
        fields: [
            ("id", FieldKind::Snowflake, One),
            ("name", FieldKind::Text, One),
            ("roles", FieldKind::Model(&ROLE), Many),
            ("user", FieldKind::Model(&USER), Many),
            ("require_colons", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ("managed", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ("animated", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
        ],
    }
}

model_schema! {
    pub static GUILD {
        path: "gatewire_models::guild::Guild",
        name: "guild",
        repr: ["id", "name"],
        fields: [
            ("id", FieldKind::Snowflake, One),
            ("name", FieldKind::Text, Opt),
            ("icon", FieldKind::Text, Opt),
            ("splash", FieldKind::Text, Opt),
            ("owner", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ("owner_id", FieldKind::Snowflake, Opt),
            ("permissions", FieldKind::Int, Opt),
            ("region", FieldKind::Text, Opt),
            ("afk_channel_id", FieldKind::Snowflake, Opt),
            ("afk_timeout", FieldKind::Int, Opt),
            ("embed_enabled", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ("embed_channel_id", FieldKind::Snowflake, Opt),
            ("verification_level", FieldKind::Enum(&VERIFICATION_LEVEL), Opt),
            ("default_message_notifications", FieldKind::Enum(&MESSAGE_NOTIFICATION_LEVEL), Opt),
            ("explicit_content_filter", FieldKind::Enum(&EXPLICIT_CONTENT_FILTER_LEVEL), Opt),
            ("roles", FieldKind::Model(&ROLE), Many),
            ("emojis", FieldKind::Model(&EMOJI), Many),
            ("features", FieldKind::Text, Many),
            ("mfa_level", FieldKind::Enum(&MFA_LEVEL), Opt),
            ("application_id", FieldKind::Snowflake, Opt),
            ("widget_enabled", FieldKind::Bool, Opt),
            ("widget_channel_id", FieldKind::Snowflake, Opt),
            ("system_channel_id", FieldKind::Snowflake, Opt),
            ("joined_at", FieldKind::Timestamp, Opt),
            ("large", FieldKind::Bool, Opt),
            ("unavailable", FieldKind::Bool, Opt),
            ("member_count", FieldKind::Int, Opt),
            ("voice_states", FieldKind::Model(&VOICE_STATE), Many),
            ("members", FieldKind::Model(&GUILD_MEMBER), Many),
            ("channels", FieldKind::Model(&CHANNEL), Many),
            ("presences", FieldKind::Model(&PRESENCE), Many),
        ],
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use gatewire_core::value::Value;
    use serde_json::json;

    #[test]
    fn role_requires_id_and_name() {
        let raw = json!({"id": "41771983423143936"});

        let err = ROLE.construct(raw.as_object().unwrap(), None).unwrap_err();

        assert_eq!(
            err,
            gatewire_core::error::ModelError::MissingRequiredField { field: "name" }
        );
    }

    #[test]
    fn member_roles_are_snowflake_lists() {
        let raw = json!({
            "nick": "cool nick",
            "roles": ["41771983423143936", "41771983423143937"],
        });

        let member = GUILD_MEMBER.construct(raw.as_object().unwrap(), None).unwrap();
        let roles = member.get("roles").and_then(Value::as_list).unwrap();

        assert_eq!(roles.len(), 2);
        assert!(roles.iter().all(|r| r.as_snowflake().is_some()));
    }

    #[test]
    fn ban_wraps_the_banned_user() {
        let raw = json!({
            "reason": "mashing the caps lock",
            "user": {"id": "80351110224678912", "username": "Nelly"},
        });

        let ban = BAN.construct(raw.as_object().unwrap(), None).unwrap();
        let user = ban.get("user").and_then(Value::as_model).unwrap();

        assert_eq!(user.get("username").and_then(Value::as_text), Some("Nelly"));
    }

    #[test]
    fn voice_region_is_flat_and_fully_optional() {
        let raw = json!({"id": "us-east", "name": "US East", "vip": false, "optimal": true});

        let region = VOICE_REGION.construct(raw.as_object().unwrap(), None).unwrap();

        assert_eq!(region.get("optimal"), Some(&Value::Bool(true)));
        assert!(region.get("deprecated").unwrap().is_unset());
    }

    #[test]
    fn unknown_verification_level_passes_through() {
        let raw = json!({"id": "41771983423143937", "verification_level": 9});

        let guild = GUILD.construct(raw.as_object().unwrap(), None).unwrap();
        let level = guild.get("verification_level").and_then(Value::as_enum).unwrap();

        assert!(level.is_unrecognized());
        assert_eq!(level.to_wire(), 9);
    }
}
