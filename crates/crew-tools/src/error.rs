//! Error types for crew-tools

use crate::encoding::EncodingError;

pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by tool factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool type: {type_name}")]
    UnknownType { type_name: String },

    #[error("Unknown tool category: {name}")]
    UnknownCategory { name: String },

    #[error("Tool type already registered: {type_name}")]
    DuplicateType { type_name: String },

    #[error("Tool {type_name} is missing mandatory parameter(s): {}", .missing.join(", "))]
    MissingMandatoryParameter {
        type_name: String,
        missing: Vec<String>,
    },

    #[error("Failed to construct {type_name}: {source}")]
    ToolConstruction {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("Tool {tool} failed: {message}")]
    ToolExecution { tool: String, message: String },

    #[error("Invalid parameter encoding: {0}")]
    Encoding(#[from] EncodingError),
}

impl Error {
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }
}
