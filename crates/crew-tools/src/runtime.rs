//! Runtime overrides injected at instantiation time

use std::collections::BTreeMap;

use crew_meta::RuntimeSection;

/// Parameter values that override a descriptor's own values when a tool
/// is instantiated, typically credentials that are not stored with the tool.
///
/// Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    overrides: BTreeMap<String, String>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[runtime]` config section, reading credentials from
    /// the process environment.
    pub fn from_section(section: &RuntimeSection) -> Self {
        Self::from_section_with(section, |name| std::env::var(name).ok())
    }

    /// Build from the `[runtime]` config section with a custom variable
    /// lookup. Explicit overrides win over environment values.
    pub fn from_section_with(
        section: &RuntimeSection,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::new();
        for (env_name, param) in &section.credential_env {
            if let Some(value) = lookup(env_name) {
                tracing::debug!(env = %env_name, param = %param, "credential from environment");
                config.set(param.clone(), value);
            }
        }
        for (param, value) in &section.overrides {
            config.set(param.clone(), value.clone());
        }
        config
    }

    pub fn with_override(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.overrides.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
