//! Persisted records
//!
//! These are the shapes written to `.crew/tools.json` and
//! `.crew/agents.json`. Schemas are not part of a tool record; they are
//! derived from `type_name` when the record is loaded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized form of one configured tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub type_name: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

pub const DEFAULT_ROLE: &str = "Senior Researcher";
pub const DEFAULT_GOAL: &str = "Uncover groundbreaking technologies in AI";
pub const DEFAULT_BACKSTORY: &str = "Driven by curiosity, you're at the forefront of innovation, \
    eager to explore and share knowledge that could change the world.";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_ITER: u32 = 25;

/// Selectable `"Provider: model"` entries. The first one is the fallback.
pub const LLM_PROVIDER_MODELS: &[&str] = &["OpenAI: gpt-3.5-turbo", "OpenAI: gpt-4"];

/// Serialized form of one agent.
///
/// `tool_ids` are lookups into the tool collection. They are not owned:
/// removing a tool leaves the id here until it is pruned explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_backstory")]
    pub backstory: String,
    #[serde(default)]
    pub tool_ids: Vec<String>,
    #[serde(default)]
    pub allow_delegation: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_true")]
    pub cache: bool,
    #[serde(default = "default_llm_provider_model")]
    pub llm_provider_model: String,
    #[serde(default = "default_max_iter")]
    pub max_iter: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}

fn default_backstory() -> String {
    DEFAULT_BACKSTORY.to_string()
}

fn default_true() -> bool {
    true
}

fn default_llm_provider_model() -> String {
    LLM_PROVIDER_MODELS[0].to_string()
}

fn default_max_iter() -> u32 {
    DEFAULT_MAX_ITER
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

/// Generate a fresh agent id (`A_` + UUID v4).
pub fn new_agent_id() -> String {
    format!("A_{}", uuid::Uuid::new_v4())
}

impl AgentRecord {
    /// Create an agent with the stock researcher persona and no tools.
    pub fn new() -> Self {
        Self {
            id: new_agent_id(),
            role: default_role(),
            goal: default_goal(),
            backstory: default_backstory(),
            tool_ids: Vec::new(),
            allow_delegation: false,
            verbose: false,
            cache: true,
            llm_provider_model: default_llm_provider_model(),
            max_iter: DEFAULT_MAX_ITER,
            temperature: DEFAULT_TEMPERATURE,
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    pub fn with_tool(mut self, tool_id: impl Into<String>) -> Self {
        self.tool_ids.push(tool_id.into());
        self
    }

    pub fn with_llm_provider_model(mut self, provider_model: impl Into<String>) -> Self {
        self.llm_provider_model = provider_model.into();
        self.validate_llm_provider_model();
        self
    }

    /// Reset `llm_provider_model` to the first known entry if it is not
    /// one of [`LLM_PROVIDER_MODELS`]. Returns true if it was reset.
    pub fn validate_llm_provider_model(&mut self) -> bool {
        if LLM_PROVIDER_MODELS.contains(&self.llm_provider_model.as_str()) {
            return false;
        }
        tracing::debug!(
            agent = %self.id,
            value = %self.llm_provider_model,
            "unknown llm provider/model, using default"
        );
        self.llm_provider_model = default_llm_provider_model();
        true
    }

    /// Model part of `llm_provider_model` (`"OpenAI: gpt-4"` gives `"gpt-4"`).
    pub fn model_name(&self) -> &str {
        self.llm_provider_model
            .split_once(':')
            .map_or(self.llm_provider_model.as_str(), |(_, model)| model.trim())
    }
}

impl Default for AgentRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_agent_defaults() {
        let agent = AgentRecord::new();
        assert!(agent.id.starts_with("A_"));
        assert_eq!(agent.role, DEFAULT_ROLE);
        assert_eq!(agent.goal, DEFAULT_GOAL);
        assert_eq!(agent.max_iter, 25);
        assert!(!agent.verbose);
        assert!(agent.cache);
        assert_eq!(agent.llm_provider_model, LLM_PROVIDER_MODELS[0]);
        assert!(!agent.allow_delegation);
        assert!(agent.tool_ids.is_empty());
    }

    #[test]
    fn test_agent_ids_unique() {
        assert_ne!(AgentRecord::new().id, AgentRecord::new().id);
    }

    #[test]
    fn test_agent_minimal_json_fills_defaults() {
        let agent: AgentRecord = serde_json::from_str(r#"{"id":"A_1"}"#).unwrap();
        assert_eq!(agent.id, "A_1");
        assert_eq!(agent.role, DEFAULT_ROLE);
        assert_eq!(agent.temperature, DEFAULT_TEMPERATURE);
        assert!(!agent.verbose);
        assert!(agent.cache);
        assert_eq!(agent.llm_provider_model, "OpenAI: gpt-3.5-turbo");
    }

    #[test]
    fn test_agent_round_trip_keeps_cache_and_model() {
        let mut agent = AgentRecord::new().with_llm_provider_model("OpenAI: gpt-4");
        agent.cache = false;

        let json = serde_json::to_string(&agent).unwrap();
        let restored: AgentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, agent);
        assert!(!restored.cache);
        assert_eq!(restored.model_name(), "gpt-4");
    }

    #[test]
    fn test_unknown_provider_model_falls_back_to_first() {
        let agent = AgentRecord::new().with_llm_provider_model("Acme: turbo-9");
        assert_eq!(agent.llm_provider_model, LLM_PROVIDER_MODELS[0]);
        assert_eq!(agent.model_name(), "gpt-3.5-turbo");

        let mut stored: AgentRecord =
            serde_json::from_str(r#"{"id":"A_1","llm_provider_model":"nope"}"#).unwrap();
        assert!(stored.validate_llm_provider_model());
        assert_eq!(stored.llm_provider_model, LLM_PROVIDER_MODELS[0]);
        assert!(!stored.validate_llm_provider_model());
    }

    #[test]
    fn test_tool_record_without_parameters() {
        let record: ToolRecord =
            serde_json::from_str(r#"{"id":"t","type_name":"CodeInterpreterTool"}"#).unwrap();
        assert!(record.parameters.is_empty());
    }

    #[test]
    fn test_builder() {
        let agent = AgentRecord::new()
            .with_role("Analyst")
            .with_goal("Summarize")
            .with_backstory("Short")
            .with_tool("t-1");
        assert_eq!(agent.role, "Analyst");
        assert_eq!(agent.goal, "Summarize");
        assert_eq!(agent.backstory, "Short");
        assert_eq!(agent.tool_ids, vec!["t-1".to_string()]);
    }

    #[rstest]
    #[case("OpenAI: gpt-3.5-turbo", "OpenAI: gpt-3.5-turbo")]
    #[case("OpenAI: gpt-4", "OpenAI: gpt-4")]
    #[case("", "OpenAI: gpt-3.5-turbo")]
    #[case("openai: gpt-4", "OpenAI: gpt-3.5-turbo")]
    fn test_provider_model_validation(#[case] requested: &str, #[case] expected: &str) {
        let agent = AgentRecord::new().with_llm_provider_model(requested);
        assert_eq!(agent.llm_provider_model, expected);
    }
}
