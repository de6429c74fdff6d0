//! On-disk workspace: `.crew/` config, tools and agents
//!
//! ```text
//! <root>/.crew/
//!   config.toml   core version, storage file names, runtime overrides
//!   tools.json    [ToolRecord]
//!   agents.json   [AgentRecord]
//! ```
//!
//! Missing `tools.json` / `agents.json` read as empty. All writes go
//! through [`ConfigStore`], which writes atomically under a lock.

use crew_fs::{ConfigStore, CrewPath, NormalizedPath};
use crew_meta::{AgentRecord, CrewConfig, ToolRecord};
use crew_tools::{RuntimeConfig, ToolRegistry};

use crate::agents::AgentRoster;
use crate::collection::ToolCollection;
use crate::{Error, Result};

/// A loaded workspace. Edits are in memory until [`Workspace::save`].
#[derive(Debug, Clone)]
pub struct Workspace {
    root: NormalizedPath,
    config: CrewConfig,
    pub tools: ToolCollection,
    pub agents: AgentRoster,
}

impl Workspace {
    /// Create `.crew/` with a default config and empty collections.
    ///
    /// Refuses if the config or either default data file is already
    /// present, so saved tools and agents are never replaced by empty lists.
    pub fn init(root: impl Into<NormalizedPath>) -> Result<Self> {
        let root = root.into();
        let existing = [CrewPath::ConfigFile, CrewPath::ToolsFile, CrewPath::AgentsFile]
            .into_iter()
            .map(|file| root.crew_file(file.as_str()))
            .find(NormalizedPath::exists);
        if let Some(path) = existing {
            tracing::debug!(path = %path, "workspace file already present");
            return Err(Error::WorkspaceExists {
                path: root.to_native(),
            });
        }

        let workspace = Self {
            root,
            config: CrewConfig::default(),
            tools: ToolCollection::new(),
            agents: AgentRoster::new(),
        };
        workspace.save()?;
        tracing::info!(root = %workspace.root, "initialized crew workspace");
        Ok(workspace)
    }

    /// Load an existing workspace. Tool records are resolved against `registry`.
    pub fn open(root: impl Into<NormalizedPath>, registry: &ToolRegistry) -> Result<Self> {
        let root = root.into();
        let config = crew_meta::load_config(&root).map_err(|e| match e {
            crew_meta::Error::ConfigNotFound { .. } => Error::WorkspaceNotFound {
                path: root.to_native(),
            },
            other => Error::Meta(other),
        })?;

        let store = ConfigStore::new();
        let tools_path = root.crew_file(&config.storage.tools_file);
        let tool_records: Vec<ToolRecord> = load_list(&store, &tools_path)?;
        let tools = ToolCollection::from_records(registry, tool_records)?;

        let agents_path = root.crew_file(&config.storage.agents_file);
        let agent_records: Vec<AgentRecord> = load_list(&store, &agents_path)?;
        let agents = AgentRoster::from_records(agent_records)?;

        tracing::debug!(
            root = %root,
            tools = tools.len(),
            agents = agents.len(),
            "opened crew workspace"
        );
        Ok(Self {
            root,
            config,
            tools,
            agents,
        })
    }

    /// Write config, tools and agents.
    pub fn save(&self) -> Result<()> {
        crew_meta::save_config(&self.root, &self.config)?;
        let store = ConfigStore::new();
        store.save(&self.tools_path(), &self.tools.to_records())?;
        store.save(&self.agents_path(), &self.agents.to_records())?;
        tracing::debug!(root = %self.root, "saved crew workspace");
        Ok(())
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &CrewConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CrewConfig {
        &mut self.config
    }

    pub fn crew_dir(&self) -> NormalizedPath {
        self.root.crew_dir()
    }

    pub fn tools_path(&self) -> NormalizedPath {
        self.root.crew_file(&self.config.storage.tools_file)
    }

    pub fn agents_path(&self) -> NormalizedPath {
        self.root.crew_file(&self.config.storage.agents_file)
    }

    /// Runtime overrides from `[runtime]` plus mapped environment variables.
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig::from_section(&self.config.runtime)
    }

    /// Remove a tool and, if `prune` is set, its id from every agent.
    pub fn remove_tool(&mut self, id: &str, prune: bool) -> Result<()> {
        self.tools
            .remove(id)
            .ok_or_else(|| Error::ToolNotFound { id: id.to_string() })?;
        if prune {
            self.agents.prune_dangling(&self.tools);
        }
        Ok(())
    }
}

fn load_list<T: serde::de::DeserializeOwned>(
    store: &ConfigStore,
    path: &NormalizedPath,
) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    Ok(store.load(path)?)
}
