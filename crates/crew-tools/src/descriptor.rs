//! Configured tool instances

use std::collections::BTreeMap;

use crew_meta::{ParamKind, ToolRecord, ToolSchema};

use crate::encoding::{self, EncodingError};
use crate::registry::ToolRegistration;

/// Generate a fresh tool id.
pub fn new_tool_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One configured tool: a registered type plus its current parameter values.
///
/// The schema travels with the descriptor so validity can be computed
/// without the registry, but it is never persisted; [`ToolRecord`] carries
/// only `id`, `type_name` and `parameters`.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    id: String,
    type_name: String,
    display_name: String,
    description: String,
    parameters: BTreeMap<String, String>,
    schema: ToolSchema,
}

impl ToolDescriptor {
    /// Seed every schema parameter with its default, then overlay `initial`.
    pub(crate) fn new(
        id: String,
        registration: &ToolRegistration,
        initial: BTreeMap<String, String>,
    ) -> Self {
        let mut parameters: BTreeMap<String, String> = registration
            .schema
            .iter()
            .map(|def| (def.name.clone(), def.spec.initial_value()))
            .collect();
        parameters.extend(initial);

        Self {
            id,
            type_name: registration.type_name.clone(),
            display_name: registration.display_name.clone(),
            description: registration.description.clone(),
            parameters,
            schema: registration.schema.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Non-empty value of a parameter.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn set_parameters<K, V>(&mut self, updates: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in updates {
            self.set_parameter(name, value);
        }
    }

    /// Mandatory parameters that are empty or absent, in schema order.
    pub fn missing_parameters(&self) -> Vec<&str> {
        self.schema
            .mandatory_names()
            .filter(|name| self.parameter(name).is_none())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_parameters().is_empty()
    }

    /// Structured parameters that fail strict parsing.
    ///
    /// Lists must have no blank entries. Maps must be a JSON object or
    /// braced `{key:value}` pairs.
    pub fn encoding_errors(&self) -> Vec<(&str, EncodingError)> {
        self.schema
            .iter()
            .filter_map(|def| {
                let raw = self.parameter(&def.name)?;
                let checked = match def.spec.kind {
                    ParamKind::List => encoding::parse_list_strict(raw).map(drop),
                    ParamKind::Map => encoding::parse_json_object_strict(raw)
                        .map(drop)
                        .or_else(|_| encoding::parse_pairs_strict(raw).map(drop)),
                    ParamKind::Text | ParamKind::Secret => Ok(()),
                };
                checked.err().map(|e| (def.name.as_str(), e))
            })
            .collect()
    }

    /// `"{type_name} ({first parameter value or id})"`, used in listings.
    /// Secrets are never shown; the id stands in for them.
    pub fn label(&self) -> String {
        let first = self
            .schema
            .first()
            .filter(|def| def.spec.kind != ParamKind::Secret)
            .and_then(|def| self.parameter(&def.name));
        format!("{} ({})", self.type_name, first.unwrap_or(self.id.as_str()))
    }

    pub fn to_record(&self) -> ToolRecord {
        ToolRecord {
            id: self.id.clone(),
            type_name: self.type_name.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

/// Descriptors are equal when their persisted parts are equal.
impl PartialEq for ToolDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.type_name == other.type_name
            && self.parameters == other.parameters
    }
}

impl Eq for ToolDescriptor {}
