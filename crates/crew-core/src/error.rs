//! Error types for crew-core

use std::path::PathBuf;

/// Result type for crew-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in crew-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tool with this id is already in the collection
    #[error("Duplicate tool id: {id}")]
    DuplicateToolId { id: String },

    /// An agent with this id is already in the roster
    #[error("Duplicate agent id: {id}")]
    DuplicateAgentId { id: String },

    #[error("Tool not found: {id}")]
    ToolNotFound { id: String },

    #[error("Agent not found: {id}")]
    AgentNotFound { id: String },

    /// No `.crew/config.toml` under the given root
    #[error("No crew workspace at {path} (run `crew init`)")]
    WorkspaceNotFound { path: PathBuf },

    #[error("Crew workspace already exists at {path}")]
    WorkspaceExists { path: PathBuf },

    #[error("Research topic is empty")]
    EmptyTopic,

    /// A research step produced nothing usable
    #[error("{message}")]
    Research { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from crew-fs
    #[error(transparent)]
    Fs(#[from] crew_fs::Error),

    /// Metadata error from crew-meta
    #[error(transparent)]
    Meta(#[from] crew_meta::Error),

    /// Tools error from crew-tools
    #[error(transparent)]
    Tools(#[from] crew_tools::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::DuplicateToolId {
            id: "t1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate tool id: t1");
        assert_eq!(Error::EmptyTopic.to_string(), "Research topic is empty");
    }

    #[test]
    fn test_tools_error_is_transparent() {
        let err: Error = crew_tools::Error::unknown_type("Nope").into();
        assert_eq!(
            err.to_string(),
            crew_tools::Error::unknown_type("Nope").to_string()
        );
    }
}
