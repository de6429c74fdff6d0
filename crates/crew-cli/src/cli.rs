//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Crew Studio - configure tools and agents for research crews
#[derive(Parser, Debug)]
#[command(name = "crew")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, env = "CREW_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a new crew workspace
    ///
    /// Creates a .crew/ directory with config.toml, tools.json and agents.json.
    Init,

    /// List available tool types
    ListTypes {
        /// Only show one category (web, media, document, code, data, custom)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the parameters a tool type accepts
    Schema {
        /// Tool type name (use 'crew list-types' to see options)
        type_name: String,
    },

    /// Add a configured tool
    ///
    /// Examples:
    ///   crew add-tool WebsiteSearchTool -p website=https://docs.rs
    ///   crew add-tool PGSearchTool -p db_uri=postgres://localhost/db -p table_name=papers
    AddTool {
        /// Tool type name
        type_name: String,

        /// Parameter assignment (name=value), repeatable
        #[arg(short = 'p', long = "param", value_parser = parse_assignment)]
        params: Vec<(String, String)>,
    },

    /// Set parameters on a configured tool
    SetParam {
        /// Tool id
        id: String,

        /// Parameter assignments (name=value)
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,
    },

    /// Remove a configured tool
    ///
    /// Agents keep the id unless --prune is given.
    RemoveTool {
        /// Tool id
        id: String,

        /// Also drop the id from every agent
        #[arg(long)]
        prune: bool,
    },

    /// List configured tools
    ListTools {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate configured tools and agents
    Check {
        /// Also reject malformed list and map parameters
        #[arg(long)]
        strict: bool,
    },

    /// Instantiate a tool and run one query
    RunTool {
        /// Tool id
        id: String,

        /// Query text
        query: String,
    },

    /// Add an agent
    AddAgent {
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        backstory: Option<String>,

        /// LLM as "Provider: model"; unknown values fall back to the default
        #[arg(long)]
        model: Option<String>,

        /// Tool id to assign, repeatable
        #[arg(short = 't', long = "tool")]
        tools: Vec<String>,
    },

    /// List agents and their tools
    ListAgents,

    /// Remove an agent
    RemoveAgent {
        /// Agent id
        id: String,
    },

    /// Research a topic with the configured tools
    Research {
        /// Topic to research
        topic: String,

        /// Use only this agent's tools
        #[arg(long)]
        agent: Option<String>,

        /// Maximum sources per discovery round
        #[arg(long, default_value_t = crew_core::DEFAULT_MAX_SOURCES)]
        max_sources: usize,

        /// Run a second discovery round
        #[arg(long)]
        expand: bool,
    },
}

/// Parse `name=value`. The value may be empty or contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
