//! Tool handles produced by factories

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::registry::ToolCategory;

static NO_SETTINGS: BTreeMap<String, Setting> = BTreeMap::new();

/// An instantiated tool: callable with a textual query, returns text.
///
/// The registry treats handles as opaque; orchestration code only relies
/// on [`ToolHandle::run`].
pub trait ToolHandle: Send + Sync + fmt::Debug {
    /// Tool type name (e.g. `"WebsiteSearchTool"`)
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn category(&self) -> ToolCategory;

    /// Primary resource the tool is bound to, if any (URL, file, table...)
    fn target(&self) -> Option<&str> {
        None
    }

    /// Parsed configuration the tool was built with.
    fn settings(&self) -> &BTreeMap<String, Setting> {
        &NO_SETTINGS
    }

    fn run(&self, query: &str) -> Result<String>;
}

/// A parsed configuration value held by a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Text(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
    Seconds(u64),
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Text(s) => write!(f, "{s}"),
            Setting::List(items) => write!(f, "{}", items.join(",")),
            Setting::Map(map) => {
                let pairs: Vec<_> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "{}", pairs.join(";"))
            }
            Setting::Seconds(n) => write!(f, "{n}s"),
        }
    }
}

/// Offline stand-in for an external tool.
///
/// Answers every query with deterministic text naming the tool, the query
/// and the bound target, so that pipelines can run without network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTool {
    name: String,
    description: String,
    category: ToolCategory,
    target: Option<String>,
    settings: BTreeMap<String, Setting>,
}

impl SimulatedTool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            target: None,
            settings: BTreeMap::new(),
        }
    }

    pub fn with_target(mut self, target: Option<impl Into<String>>) -> Self {
        self.target = target.map(Into::into);
        self
    }

    /// Record a setting; `None` leaves it unset.
    pub fn with_setting(mut self, name: impl Into<String>, value: Option<Setting>) -> Self {
        if let Some(value) = value {
            self.settings.insert(name.into(), value);
        }
        self
    }

    pub fn boxed(self) -> Box<dyn ToolHandle> {
        Box::new(self)
    }
}

impl ToolHandle for SimulatedTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> ToolCategory {
        self.category
    }

    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn settings(&self) -> &BTreeMap<String, Setting> {
        &self.settings
    }

    fn run(&self, query: &str) -> Result<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::ToolExecution {
                tool: self.name.clone(),
                message: "empty query".to_string(),
            });
        }
        let scope = match &self.target {
            Some(target) => format!(" from {target}"),
            None => String::new(),
        };
        tracing::debug!(tool = %self.name, query, "running simulated tool");
        Ok(format!("{}: results for \"{}\"{}.", self.name, query, scope))
    }
}
