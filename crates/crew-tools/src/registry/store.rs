//! Tool registry storage and operations

use std::collections::{BTreeMap, HashMap};

use crew_meta::{ToolRecord, ToolSchema};

use super::{ToolCategory, ToolRegistration};
use crate::args::ToolArgs;
use crate::descriptor::{ToolDescriptor, new_tool_id};
use crate::error::{Error, Result};
use crate::handle::ToolHandle;
use crate::runtime::RuntimeConfig;

/// Central registry of tool types.
///
/// The single source of truth for which parameters a tool type takes and
/// how to build one. Read-only after start-up, so a shared reference can
/// be used from several callers at once.
pub struct ToolRegistry {
    tools: HashMap<String, ToolRegistration>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            if let Err(e) = registry.register(reg) {
                tracing::error!(error = %e, "skipping built-in tool");
            }
        }
        registry
    }

    /// Register a tool type. Fails if the type name is taken.
    pub fn register(&mut self, reg: ToolRegistration) -> Result<()> {
        if self.tools.contains_key(&reg.type_name) {
            return Err(Error::DuplicateType {
                type_name: reg.type_name,
            });
        }
        tracing::debug!(type_name = %reg.type_name, "registered tool type");
        self.tools.insert(reg.type_name.clone(), reg);
        Ok(())
    }

    /// Remove a tool type. Existing descriptors of that type become
    /// unusable with this registry.
    pub fn deregister(&mut self, type_name: &str) -> Option<ToolRegistration> {
        self.tools.remove(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&ToolRegistration> {
        self.tools.get(type_name)
    }

    fn registration(&self, type_name: &str) -> Result<&ToolRegistration> {
        self.get(type_name)
            .ok_or_else(|| Error::unknown_type(type_name))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.tools.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All registered type names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Type names in a category (sorted).
    pub fn by_category(&self, cat: ToolCategory) -> Vec<&str> {
        let mut names: Vec<_> = self
            .tools
            .iter()
            .filter(|(_, r)| r.category == cat)
            .map(|(s, _)| s.as_str())
            .collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRegistration> {
        self.tools.values()
    }

    pub fn get_schema(&self, type_name: &str) -> Result<&ToolSchema> {
        Ok(&self.registration(type_name)?.schema)
    }

    /// Create a descriptor with a fresh id.
    ///
    /// Every schema parameter starts at its default. Initial parameters
    /// outside the schema are kept but play no part in validation.
    pub fn create_descriptor<K, V>(
        &self,
        type_name: &str,
        initial: impl IntoIterator<Item = (K, V)>,
    ) -> Result<ToolDescriptor>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let reg = self.registration(type_name)?;
        let initial: BTreeMap<String, String> = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Ok(ToolDescriptor::new(new_tool_id(), reg, initial))
    }

    /// Rebuild a descriptor from its persisted record.
    pub fn from_record(&self, record: ToolRecord) -> Result<ToolDescriptor> {
        let reg = self.registration(&record.type_name)?;
        Ok(ToolDescriptor::new(record.id, reg, record.parameters))
    }

    /// Mandatory parameters of `descriptor` that are empty, per this
    /// registry's schema for its type.
    pub fn missing_parameters(&self, descriptor: &ToolDescriptor) -> Result<Vec<String>> {
        let schema = self.get_schema(descriptor.type_name())?;
        Ok(schema
            .mandatory_names()
            .filter(|name| descriptor.parameter(name).is_none())
            .map(str::to_string)
            .collect())
    }

    /// Whether every mandatory parameter of `descriptor` is set.
    ///
    /// Only fails if the descriptor's type has been deregistered.
    pub fn is_valid(&self, descriptor: &ToolDescriptor) -> Result<bool> {
        Ok(self.missing_parameters(descriptor)?.is_empty())
    }

    /// Build a tool handle from a descriptor.
    ///
    /// Validation runs first; the factory is never called for an invalid
    /// descriptor. The factory sees the descriptor's parameters overlaid
    /// with `runtime`.
    pub fn instantiate(
        &self,
        descriptor: &ToolDescriptor,
        runtime: &RuntimeConfig,
    ) -> Result<Box<dyn ToolHandle>> {
        let reg = self.registration(descriptor.type_name())?;

        let missing = self.missing_parameters(descriptor)?;
        if !missing.is_empty() {
            return Err(Error::MissingMandatoryParameter {
                type_name: reg.type_name.clone(),
                missing,
            });
        }

        let args = ToolArgs::merge(descriptor, runtime);
        let handle = reg
            .factory
            .build(&args)
            .map_err(|source| Error::ToolConstruction {
                type_name: reg.type_name.clone(),
                source,
            })?;

        tracing::info!(
            type_name = %reg.type_name,
            id = %descriptor.id(),
            "instantiated tool"
        );
        Ok(handle)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
