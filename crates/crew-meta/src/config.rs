//! Workspace configuration
//!
//! Types for `.crew/config.toml`:
//!
//! ```toml
//! [core]
//! version = "1"
//!
//! [storage]
//! tools_file = "tools.json"
//! agents_file = "agents.json"
//!
//! [runtime]
//! credential_env = { SERPER_API_KEY = "SERPER_API_KEY", GITHUB_TOKEN = "gh_token" }
//!
//! [runtime.overrides]
//! EXA_API_KEY = "..."
//! ```

use std::collections::BTreeMap;

use crew_fs::{ConfigStore, CrewPath, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper bound on the size of `config.toml`.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Complete `.crew/config.toml` contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrewConfig {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub runtime: RuntimeSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Configuration schema version
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

/// File names, relative to `.crew/`, of the persisted collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_tools_file")]
    pub tools_file: String,
    #[serde(default = "default_agents_file")]
    pub agents_file: String,
}

fn default_tools_file() -> String {
    CrewPath::ToolsFile.as_str().to_string()
}

fn default_agents_file() -> String {
    CrewPath::AgentsFile.as_str().to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tools_file: default_tools_file(),
            agents_file: default_agents_file(),
        }
    }
}

/// Values injected into tool factories at instantiation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSection {
    /// Parameter overrides applied to every instantiated tool
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Environment variable name -> parameter name
    #[serde(default = "default_credential_env")]
    pub credential_env: BTreeMap<String, String>,
}

fn default_credential_env() -> BTreeMap<String, String> {
    [
        ("SERPER_API_KEY", "SERPER_API_KEY"),
        ("EXA_API_KEY", "EXA_API_KEY"),
        ("GITHUB_TOKEN", "gh_token"),
        ("OPENAI_API_KEY", "OPENAI_API_KEY"),
    ]
    .into_iter()
    .map(|(env, param)| (env.to_string(), param.to_string()))
    .collect()
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            credential_env: default_credential_env(),
        }
    }
}

/// Path of `config.toml` for a workspace root.
pub fn config_path(root: &NormalizedPath) -> NormalizedPath {
    root.crew_file(CrewPath::ConfigFile.as_str())
}

/// Load `.crew/config.toml` under `root`.
pub fn load_config(root: &NormalizedPath) -> Result<CrewConfig> {
    let path = config_path(root);
    let native = path.to_native();

    let metadata = match std::fs::metadata(&native) {
        Ok(m) => m,
        Err(_) => return Err(Error::ConfigNotFound { path: native }),
    };
    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: native,
            size: metadata.len(),
            max: MAX_CONFIG_SIZE,
        });
    }

    let config: CrewConfig = ConfigStore::new().load(&path).map_err(|e| match e {
        crew_fs::Error::ConfigParse { message, .. } => Error::InvalidConfig {
            path: native.clone(),
            message,
        },
        other => Error::Fs(other),
    })?;

    tracing::debug!(path = %path, version = %config.core.version, "loaded config");
    Ok(config)
}

/// Write `.crew/config.toml` under `root`.
pub fn save_config(root: &NormalizedPath, config: &CrewConfig) -> Result<()> {
    ConfigStore::new().save(&config_path(root), config)?;
    Ok(())
}
