//! Agents and their tool references

use crew_meta::AgentRecord;
use crew_tools::{RuntimeConfig, ToolDescriptor, ToolHandle, ToolRegistry};

use crate::collection::ToolCollection;
use crate::{Error, Result};

/// An agent persona plus the ids of the tools it may use.
///
/// Tool ids are lookups into a [`ToolCollection`]. An id whose tool has
/// been removed is "dangling": it resolves to nothing until pruned.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    record: AgentRecord,
}

impl Agent {
    /// Wrap a record. An unknown `llm_provider_model` is reset to the default.
    pub fn new(mut record: AgentRecord) -> Self {
        record.validate_llm_provider_model();
        Self { record }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn role(&self) -> &str {
        &self.record.role
    }

    pub fn goal(&self) -> &str {
        &self.record.goal
    }

    pub fn llm_provider_model(&self) -> &str {
        &self.record.llm_provider_model
    }

    pub fn tool_ids(&self) -> &[String] {
        &self.record.tool_ids
    }

    pub fn record(&self) -> &AgentRecord {
        &self.record
    }

    pub fn into_record(self) -> AgentRecord {
        self.record
    }

    /// Add a tool id. Returns `false` if it was already assigned.
    pub fn assign_tool(&mut self, tool_id: impl Into<String>) -> bool {
        let tool_id = tool_id.into();
        if self.record.tool_ids.contains(&tool_id) {
            return false;
        }
        self.record.tool_ids.push(tool_id);
        true
    }

    pub fn unassign_tool(&mut self, tool_id: &str) -> bool {
        let before = self.record.tool_ids.len();
        self.record.tool_ids.retain(|id| id != tool_id);
        self.record.tool_ids.len() != before
    }

    /// Tools this agent refers to, skipping dangling ids.
    pub fn resolve_tools<'a>(&self, collection: &'a ToolCollection) -> Vec<&'a ToolDescriptor> {
        self.record
            .tool_ids
            .iter()
            .filter_map(|id| {
                let found = collection.get(id);
                if found.is_none() {
                    tracing::debug!(agent = %self.id(), tool = %id, "dangling tool id");
                }
                found
            })
            .collect()
    }

    /// Assigned ids with no tool in `collection`.
    pub fn dangling_tool_ids(&self, collection: &ToolCollection) -> Vec<&str> {
        self.record
            .tool_ids
            .iter()
            .filter(|id| !collection.contains(id))
            .map(String::as_str)
            .collect()
    }

    /// Resolved tools that fail validation.
    pub fn invalid_tools<'a>(
        &self,
        registry: &ToolRegistry,
        collection: &'a ToolCollection,
    ) -> Result<Vec<&'a ToolDescriptor>> {
        let mut invalid = Vec::new();
        for descriptor in self.resolve_tools(collection) {
            if !registry.is_valid(descriptor)? {
                invalid.push(descriptor);
            }
        }
        Ok(invalid)
    }

    /// Whether every resolved tool is valid.
    pub fn is_valid(&self, registry: &ToolRegistry, collection: &ToolCollection) -> Result<bool> {
        Ok(self.invalid_tools(registry, collection)?.is_empty())
    }

    /// Instantiate every resolved tool, stopping at the first failure.
    pub fn instantiate_tools(
        &self,
        registry: &ToolRegistry,
        collection: &ToolCollection,
        runtime: &RuntimeConfig,
    ) -> Result<Vec<Box<dyn ToolHandle>>> {
        self.resolve_tools(collection)
            .into_iter()
            .map(|d| registry.instantiate(d, runtime).map_err(Error::from))
            .collect()
    }
}

impl From<AgentRecord> for Agent {
    fn from(record: AgentRecord) -> Self {
        Self::new(record)
    }
}

/// The agents of a workspace, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AgentRoster {
    agents: Vec<Agent>,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent. Returns its id.
    pub fn add(&mut self, agent: impl Into<Agent>) -> Result<String> {
        let agent = agent.into();
        if self.get(agent.id()).is_some() {
            return Err(Error::DuplicateAgentId {
                id: agent.id().to_string(),
            });
        }
        let id = agent.id().to_string();
        tracing::debug!(id = %id, role = %agent.role(), "added agent");
        self.agents.push(agent);
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Agent> {
        let pos = self.agents.iter().position(|a| a.id() == id)?;
        Some(self.agents.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Give an agent access to a tool that exists in `collection`.
    pub fn assign_tool(
        &mut self,
        agent_id: &str,
        tool_id: &str,
        collection: &ToolCollection,
    ) -> Result<bool> {
        if !collection.contains(tool_id) {
            return Err(Error::ToolNotFound {
                id: tool_id.to_string(),
            });
        }
        let agent = self.get_mut(agent_id).ok_or_else(|| Error::AgentNotFound {
            id: agent_id.to_string(),
        })?;
        Ok(agent.assign_tool(tool_id))
    }

    /// Drop dangling tool ids from every agent. Returns how many were removed.
    pub fn prune_dangling(&mut self, collection: &ToolCollection) -> usize {
        let mut removed = 0;
        for agent in &mut self.agents {
            let before = agent.record.tool_ids.len();
            agent.record.tool_ids.retain(|id| collection.contains(id));
            removed += before - agent.record.tool_ids.len();
        }
        if removed > 0 {
            tracing::info!(removed, "pruned dangling tool ids");
        }
        removed
    }

    pub fn to_records(&self) -> Vec<AgentRecord> {
        self.agents.iter().map(|a| a.record.clone()).collect()
    }

    pub fn from_records(records: impl IntoIterator<Item = AgentRecord>) -> Result<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.add(record)?;
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup() -> (ToolRegistry, ToolCollection, String, String) {
        let registry = ToolRegistry::with_builtins();
        let mut tools = ToolCollection::new();
        let site = tools
            .add(&registry, "WebsiteSearchTool", [("website", "https://a.dev")])
            .unwrap();
        let pg = tools
            .add(&registry, "PGSearchTool", Vec::<(String, String)>::new())
            .unwrap();
        (registry, tools, site, pg)
    }

    #[test]
    fn test_dangling_ids_resolve_to_nothing() {
        let (_, mut tools, site, pg) = setup();
        let agent = Agent::new(AgentRecord::new().with_tool(&site).with_tool(&pg));

        tools.remove(&pg);

        let resolved = agent.resolve_tools(&tools);
        let ids: Vec<_> = resolved.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![site.as_str()]);
        assert_eq!(agent.dangling_tool_ids(&tools), vec![pg.as_str()]);
        assert_eq!(agent.tool_ids().len(), 2);
    }

    #[test]
    fn test_invalid_tools_and_instantiation() {
        let (registry, mut tools, site, pg) = setup();
        let agent = Agent::new(AgentRecord::new().with_tool(&site).with_tool(&pg));

        let invalid: Vec<_> = agent
            .invalid_tools(&registry, &tools)
            .unwrap()
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(invalid, vec![pg.clone()]);
        assert!(!agent.is_valid(&registry, &tools).unwrap());
        assert!(matches!(
            agent.instantiate_tools(&registry, &tools, &RuntimeConfig::new()),
            Err(Error::Tools(crew_tools::Error::MissingMandatoryParameter { .. }))
        ));

        tools
            .update_parameters(&pg, [("db_uri", "postgres://localhost/db")])
            .unwrap();
        let handles = agent
            .instantiate_tools(&registry, &tools, &RuntimeConfig::new())
            .unwrap();
        assert_eq!(handles.len(), 2);
    }

    #[test]
    fn test_roster_assign_and_prune() {
        let (_, mut tools, site, pg) = setup();
        let mut roster = AgentRoster::new();
        let id = roster.add(AgentRecord::new()).unwrap();

        assert!(roster.assign_tool(&id, &site, &tools).unwrap());
        assert!(roster.assign_tool(&id, &pg, &tools).unwrap());
        assert!(!roster.assign_tool(&id, &pg, &tools).unwrap());
        assert!(matches!(
            roster.assign_tool(&id, "nope", &tools),
            Err(Error::ToolNotFound { .. })
        ));
        assert!(matches!(
            roster.assign_tool("A_missing", &site, &tools),
            Err(Error::AgentNotFound { .. })
        ));

        tools.remove(&site);
        assert_eq!(roster.get(&id).unwrap().tool_ids().len(), 2);
        assert_eq!(roster.prune_dangling(&tools), 1);
        assert_eq!(roster.get(&id).unwrap().tool_ids(), [pg]);
    }

    #[test]
    fn test_roster_rejects_duplicate_agent() {
        let mut roster = AgentRoster::new();
        let record = AgentRecord::new();
        roster.add(record.clone()).unwrap();
        assert!(matches!(
            roster.add(record),
            Err(Error::DuplicateAgentId { .. })
        ));
        assert_eq!(roster.len(), 1);
    }
}
