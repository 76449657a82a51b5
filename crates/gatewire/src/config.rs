//! Client configuration: a YAML document merged over built-in
//! defaults, then structurally validated before it is handed out as a
//! typed struct. Violations are collected and returned together rather
//! than raised one at a time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json, json};
use std::{fmt, fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("config document must be a mapping")]
    NotAMapping,

    #[error("config validation failed with {} issue(s)", issues.len())]
    Invalid { issues: Vec<ConfigIssue> },
}

///
/// ConfigIssue
/// One structural violation, located by key path.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

///
/// Config
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Config {
    /// API token; the only key with no usable default.
    pub token: String,
    /// Prefix that marks a message as a command.
    pub command_prefix: String,
    pub log_level: String,
    /// Status line advertised on connect, if any.
    pub status: Option<String>,
    /// Ids of accounts allowed to run owner-only commands.
    pub owner_ids: Vec<u64>,
}

impl Config {
    /// Load a YAML config file, merge it over the defaults, validate,
    /// and deserialize.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Same as [`load`](Self::load), from an in-memory document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let user: Json = serde_yaml_ng::from_str(text)?;
        let Json::Object(user) = user else {
            return Err(ConfigError::NotAMapping);
        };

        let merged = merge_defaults(user);

        let issues = validate(&merged);
        if !issues.is_empty() {
            return Err(ConfigError::Invalid { issues });
        }

        tracing::debug!(keys = merged.len(), "config validated");

        // Validation guarantees the shape, so this cannot fail.
        serde_json::from_value(Json::Object(merged)).map_err(|err| ConfigError::Invalid {
            issues: vec![ConfigIssue {
                path: String::new(),
                message: err.to_string(),
            }],
        })
    }

    /// Collect every structural violation in a document without
    /// constructing a config.
    #[must_use]
    pub fn check(text: &str) -> Vec<ConfigIssue> {
        match serde_yaml_ng::from_str::<Json>(text) {
            Ok(Json::Object(user)) => validate(&merge_defaults(user)),
            Ok(_) => vec![ConfigIssue {
                path: String::new(),
                message: "config document must be a mapping".to_string(),
            }],
            Err(err) => vec![ConfigIssue {
                path: String::new(),
                message: err.to_string(),
            }],
        }
    }
}

/// Built-in defaults; user-supplied keys win on merge.
fn defaults() -> Map<String, Json> {
    let mut map = Map::new();
    map.insert("command_prefix".to_string(), json!("!"));
    map.insert("log_level".to_string(), json!("info"));
    map.insert("status".to_string(), Json::Null);
    map.insert("owner_ids".to_string(), json!([]));

    map
}

fn merge_defaults(user: Map<String, Json>) -> Map<String, Json> {
    let mut merged = defaults();
    for (key, value) in user {
        merged.insert(key, value);
    }

    merged
}

/// Structural checks mirroring the schema the wire config promises.
/// All violations are collected; nothing short-circuits.
fn validate(doc: &Map<String, Json>) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let mut issue = |path: &str, message: String| {
        issues.push(ConfigIssue {
            path: path.to_string(),
            message,
        });
    };

    match doc.get("token") {
        None | Some(Json::Null) => issue("token", "required key is missing".to_string()),
        Some(Json::String(s)) if s.is_empty() => issue("token", "must not be empty".to_string()),
        Some(Json::String(_)) => {}
        Some(other) => issue("token", format!("expected string, found {other}")),
    }

    for key in ["command_prefix", "log_level"] {
        match doc.get(key) {
            Some(Json::String(_)) | None => {}
            Some(other) => issue(key, format!("expected string, found {other}")),
        }
    }

    match doc.get("status") {
        Some(Json::String(_) | Json::Null) | None => {}
        Some(other) => issue("status", format!("expected string or null, found {other}")),
    }

    if let Some(value) = doc.get("owner_ids") {
        match value {
            Json::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_u64() {
                        issue(
                            &format!("owner_ids[{index}]"),
                            format!("expected unsigned integer, found {item}"),
                        );
                    }
                }
            }
            other => issue("owner_ids", format!("expected list, found {other}")),
        }
    }

    issues
}

///
/// TESTS
///
