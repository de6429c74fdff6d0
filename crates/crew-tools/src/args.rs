//! Arguments handed to a tool factory

use std::collections::BTreeMap;

use crate::descriptor::ToolDescriptor;
use crate::encoding;
use crate::runtime::RuntimeConfig;

/// Merged parameter view passed to a [`ToolFactory`](crate::ToolFactory).
///
/// Built from a descriptor's parameters overlaid with runtime overrides.
/// Empty strings read as absent everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    values: BTreeMap<String, String>,
}

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `runtime` on top of the descriptor's parameters.
    pub fn merge(descriptor: &ToolDescriptor, runtime: &RuntimeConfig) -> Self {
        let mut values = descriptor.parameters().clone();
        for (name, value) in runtime.iter() {
            values.insert(name.to_string(), value.to_string());
        }
        Self { values }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Non-empty value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Comma-separated list parameter, leniently parsed.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).and_then(encoding::parse_list)
    }

    /// `{key:value}` pairs parameter, leniently parsed.
    pub fn pairs(&self, name: &str) -> Option<BTreeMap<String, String>> {
        self.get(name).and_then(encoding::parse_pairs)
    }

    /// JSON object parameter, leniently parsed.
    pub fn json_object(&self, name: &str) -> Option<BTreeMap<String, String>> {
        self.get(name).and_then(encoding::parse_json_object)
    }
}
