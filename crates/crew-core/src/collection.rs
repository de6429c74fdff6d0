//! Ordered collection of configured tools

use crew_meta::ToolRecord;
use crew_tools::{ToolDescriptor, ToolRegistry};

use crate::{Error, Result};

/// The tools configured in a workspace, in insertion order.
///
/// Ids are unique. Agents refer to tools by id only; removing a tool here
/// does not touch any agent.
#[derive(Debug, Clone, Default)]
pub struct ToolCollection {
    tools: Vec<ToolDescriptor>,
}

/// Validation result for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub id: String,
    pub label: String,
    /// Empty mandatory parameters; empty when the tool is valid
    pub missing: Vec<String>,
}

impl ToolStatus {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl ToolCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a descriptor of `type_name` and append it. Returns its id.
    pub fn add<K, V>(
        &mut self,
        registry: &ToolRegistry,
        type_name: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let descriptor = registry.create_descriptor(type_name, params)?;
        let id = descriptor.id().to_string();
        self.insert(descriptor)?;
        Ok(id)
    }

    /// Append an existing descriptor.
    pub fn insert(&mut self, descriptor: ToolDescriptor) -> Result<()> {
        if self.contains(descriptor.id()) {
            return Err(Error::DuplicateToolId {
                id: descriptor.id().to_string(),
            });
        }
        tracing::debug!(id = %descriptor.id(), type_name = %descriptor.type_name(), "added tool");
        self.tools.push(descriptor);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|d| d.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Set the given parameters on one tool. Other parameters are untouched.
    pub fn update_parameters<K, V>(
        &mut self,
        id: &str,
        updates: impl IntoIterator<Item = (K, V)>,
    ) -> Result<&ToolDescriptor>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let descriptor = self
            .tools
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or_else(|| Error::ToolNotFound { id: id.to_string() })?;
        descriptor.set_parameters(updates);
        Ok(descriptor)
    }

    /// Remove a tool. Agents still holding its id are left as they are.
    pub fn remove(&mut self, id: &str) -> Option<ToolDescriptor> {
        let pos = self.tools.iter().position(|d| d.id() == id)?;
        Some(self.tools.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|d| d.id())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// `"{type_name} ({first parameter value or id})"` for a tool.
    pub fn display_label(&self, id: &str) -> Result<String> {
        self.get(id)
            .map(ToolDescriptor::label)
            .ok_or_else(|| Error::ToolNotFound { id: id.to_string() })
    }

    /// Validation status of every tool, in collection order.
    pub fn check(&self, registry: &ToolRegistry) -> Result<Vec<ToolStatus>> {
        self.tools
            .iter()
            .map(|d| {
                Ok(ToolStatus {
                    id: d.id().to_string(),
                    label: d.label(),
                    missing: registry.missing_parameters(d)?,
                })
            })
            .collect()
    }

    pub fn to_records(&self) -> Vec<ToolRecord> {
        self.tools.iter().map(ToolDescriptor::to_record).collect()
    }

    /// Rebuild a collection from persisted records.
    ///
    /// Records of unregistered types are skipped with a warning. Duplicate
    /// ids are an error.
    pub fn from_records(
        registry: &ToolRegistry,
        records: impl IntoIterator<Item = ToolRecord>,
    ) -> Result<Self> {
        let mut collection = Self::new();
        for record in records {
            if !registry.contains(&record.type_name) {
                tracing::warn!(
                    id = %record.id,
                    type_name = %record.type_name,
                    "skipping tool of unknown type"
                );
                continue;
            }
            collection.insert(registry.from_record(record)?)?;
        }
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, type_name: &str) -> ToolRecord {
        ToolRecord {
            id: id.to_string(),
            type_name: type_name.to_string(),
            parameters: Default::default(),
        }
    }

    #[test]
    fn test_add_keeps_order() {
        let registry = ToolRegistry::with_builtins();
        let mut tools = ToolCollection::new();
        let a = tools
            .add(&registry, "WebsiteSearchTool", [("website", "https://a.dev")])
            .unwrap();
        let b = tools
            .add(&registry, "PGSearchTool", Vec::<(String, String)>::new())
            .unwrap();

        assert_eq!(tools.ids().collect::<Vec<_>>(), vec![a.as_str(), b.as_str()]);
        assert_eq!(
            tools.display_label(&a).unwrap(),
            "WebsiteSearchTool (https://a.dev)"
        );
    }

    #[test]
    fn test_update_parameters_only_touches_given_keys() {
        let registry = ToolRegistry::with_builtins();
        let mut tools = ToolCollection::new();
        let id = tools
            .add(&registry, "PGSearchTool", [("table_name", "papers")])
            .unwrap();

        let d = tools
            .update_parameters(&id, [("db_uri", "postgres://db")])
            .unwrap();
        assert_eq!(d.parameter("db_uri"), Some("postgres://db"));
        assert_eq!(d.parameter("table_name"), Some("papers"));

        assert!(matches!(
            tools.update_parameters("missing", [("a", "b")]),
            Err(Error::ToolNotFound { .. })
        ));
    }

    #[test]
    fn test_check_reports_missing() {
        let registry = ToolRegistry::with_builtins();
        let mut tools = ToolCollection::new();
        tools
            .add(&registry, "PGSearchTool", Vec::<(String, String)>::new())
            .unwrap();
        tools
            .add(&registry, "FileReadTool", Vec::<(String, String)>::new())
            .unwrap();

        let report = tools.check(&registry).unwrap();
        assert_eq!(report[0].missing, vec!["db_uri".to_string()]);
        assert!(!report[0].is_valid());
        assert!(report[1].is_valid());
    }

    #[test]
    fn test_from_records_skips_unknown_types() {
        let registry = ToolRegistry::with_builtins();
        let tools = ToolCollection::from_records(
            &registry,
            [record("t1", "FileReadTool"), record("t2", "RetiredTool")],
        )
        .unwrap();
        assert_eq!(tools.len(), 1);
        assert!(tools.contains("t1"));
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let registry = ToolRegistry::with_builtins();
        let err = ToolCollection::from_records(
            &registry,
            [record("t1", "FileReadTool"), record("t1", "CSVSearchTool")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateToolId { ref id } if id == "t1"));
    }

    #[test]
    fn test_remove() {
        let registry = ToolRegistry::with_builtins();
        let mut tools = ToolCollection::from_records(&registry, [record("t1", "FileReadTool")])
            .unwrap();
        assert_eq!(tools.remove("t1").map(|d| d.id().to_string()), Some("t1".to_string()));
        assert!(tools.remove("t1").is_none());
        assert!(tools.is_empty());
    }
}
