use gatewire_core::{
    model::{FieldKind, WireDefault},
    model_schema,
};

model_schema! {
    /// Account reachable through the API. Referenced by members,
    /// presences, and bans; never owns a back-pointer to them.
    pub static USER {
        path: "gatewire_models::user::User",
        name: "user",
        repr: ["id", "username"],
        fields: [
            ("id", FieldKind::Snowflake, One),
            ("username", FieldKind::Text, Opt),
            ("discriminator", FieldKind::Text, Opt),
            ("avatar", FieldKind::Text, Opt),
            ("bot", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
        ],
    }
}

///
/// TESTS
///
