//! Core types for the tool registry

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crew_meta::ToolSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::factory::ToolFactory;

/// Tool category for filtering and for routing research steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Web search and scraping
    Web,
    /// Video and channel search
    Media,
    /// Files, directories and document formats
    Document,
    /// Code, repositories and interpreters
    Code,
    /// Databases and data feeds
    Data,
    /// User-configured API and file tools
    Custom,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 6] = [
        ToolCategory::Web,
        ToolCategory::Media,
        ToolCategory::Document,
        ToolCategory::Code,
        ToolCategory::Data,
        ToolCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Web => "web",
            ToolCategory::Media => "media",
            ToolCategory::Document => "document",
            ToolCategory::Code => "code",
            ToolCategory::Data => "data",
            ToolCategory::Custom => "custom",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Complete registration of a tool type.
#[derive(Clone)]
pub struct ToolRegistration {
    /// Registry key (e.g. "PGSearchTool")
    pub type_name: String,
    /// Human-readable name (e.g. "Postgres Search")
    pub display_name: String,
    pub description: String,
    pub category: ToolCategory,
    pub schema: ToolSchema,
    pub factory: Arc<dyn ToolFactory>,
}

impl ToolRegistration {
    pub fn new(
        type_name: impl Into<String>,
        display_name: impl Into<String>,
        category: ToolCategory,
        schema: ToolSchema,
        factory: impl ToolFactory + 'static,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            display_name: display_name.into(),
            description: String::new(),
            category,
            schema,
            factory: Arc::new(factory),
        }
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Debug for ToolRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistration")
            .field("type_name", &self.type_name)
            .field("display_name", &self.display_name)
            .field("category", &self.category)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
