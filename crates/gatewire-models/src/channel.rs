use gatewire_core::{
    enum_table,
    model::{FieldKind, WireDefault},
    model_schema,
};

enum_table! {
    pub static CHANNEL_TYPE, path = "gatewire_models::channel::ChannelType", members = [
        "GUILD_TEXT" = 0,
        "DM" = 1,
        "GUILD_VOICE" = 2,
        "GROUP_DM" = 3,
        "GUILD_CATEGORY" = 4,
    ]
}

model_schema! {
    pub static CHANNEL {
        path: "gatewire_models::channel::Channel",
        name: "channel",
        repr: ["id", "name"],
        fields: [
            ("id", FieldKind::Snowflake, One),
            ("type", FieldKind::Enum(&CHANNEL_TYPE), Opt),
            ("guild_id", FieldKind::Snowflake, Opt),
            ("position", FieldKind::Int, Opt),
            ("name", FieldKind::Text, Opt),
            ("topic", FieldKind::Text, Opt),
            ("nsfw", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ("last_message_id", FieldKind::Snowflake, Opt),
            ("bitrate", FieldKind::Int, Opt),
            ("user_limit", FieldKind::Int, Opt),
            ("parent_id", FieldKind::Snowflake, Opt),
        ],
    }
}

///
/// TESTS
///
