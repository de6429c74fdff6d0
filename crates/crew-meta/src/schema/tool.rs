//! Ordered parameter schema of a tool type

use serde::{Deserialize, Serialize};

use super::ParamSpec;

/// A named parameter in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
    #[serde(flatten)]
    pub spec: ParamSpec,
}

/// Ordered mapping from parameter name to [`ParamSpec`].
///
/// Declaration order is preserved; the first parameter labels a tool
/// in listings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolSchema {
    params: Vec<ParamDef>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder pattern). A repeated name replaces the
    /// earlier entry in place.
    pub fn param(mut self, name: impl Into<String>, spec: ParamSpec) -> Self {
        let name = name.into();
        match self.params.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.spec = spec,
            None => self.params.push(ParamDef { name, spec }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_mandatory(&self, name: &str) -> bool {
        self.get(name).is_some_and(|spec| spec.mandatory)
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn mandatory_names(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.spec.mandatory)
            .map(|p| p.name.as_str())
    }

    pub fn first(&self) -> Option<&ParamDef> {
        self.params.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamDef> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
