//! Single parameter specification

use serde::{Deserialize, Serialize};

/// How a parameter value is encoded in its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Free text (URLs, paths, names)
    #[default]
    Text,
    /// Credential; never echoed back in listings
    Secret,
    /// Comma-separated list (e.g. `code,repo,pr`)
    List,
    /// Key/value pairs (e.g. `{key:value},{key:value}` or a JSON object)
    Map,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::Text => write!(f, "text"),
            ParamKind::Secret => write!(f, "secret"),
            ParamKind::List => write!(f, "list"),
            ParamKind::Map => write!(f, "map"),
        }
    }
}

/// Schema entry for one parameter.
///
/// Only `mandatory` decides whether a tool is valid. `default` seeds new
/// descriptors and `kind` tells factories and listings how to read the value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParamSpec {
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn mandatory() -> Self {
        Self {
            mandatory: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    /// Value a freshly created descriptor starts with.
    pub fn initial_value(&self) -> String {
        self.default.clone().unwrap_or_default()
    }
}
