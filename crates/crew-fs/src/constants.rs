//! Well-known locations inside a Crew Studio workspace.

use std::path::Path;

/// Standard workspace markers and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewPath {
    /// The `.crew` directory (workspace root marker)
    CrewDir,
    /// `config.toml` inside `.crew`
    ConfigFile,
    /// Default tool collection file
    ToolsFile,
    /// Default agent roster file
    AgentsFile,
}

impl CrewPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrewDir => ".crew",
            Self::ConfigFile => "config.toml",
            Self::ToolsFile => "tools.json",
            Self::AgentsFile => "agents.json",
        }
    }
}

impl AsRef<Path> for CrewPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for CrewPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CrewPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
