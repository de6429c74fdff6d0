//! Workspace-level orchestration for Crew Studio
//!
//! - **Tool collection**: ordered, id-unique set of configured tools
//! - **Agent roster**: agents referring to tools by id, with explicit pruning
//!   of dangling references
//! - **Workspace**: `.crew/` persistence of config, tools and agents
//! - **Research**: a pipeline that queries tool handles by source channel
//!   and summarizes the results
//!
//! # Architecture
//!
//! ```text
//!            crew-cli
//!               |
//!           crew-core
//!               |
//!     +---------+---------+
//!     |         |         |
//! crew-fs   crew-meta  crew-tools
//! ```

pub mod agents;
pub mod collection;
pub mod error;
pub mod research;
pub mod workspace;

pub use agents::{Agent, AgentRoster};
pub use collection::{ToolCollection, ToolStatus};
pub use error::{Error, Result};
pub use research::{
    DEFAULT_MAX_POINTS, DEFAULT_MAX_SOURCES, KeyPointSummarizer, ResearchOutcome, ResearchReport,
    Researcher, SourceChannel, SourceDigest, Summarizer,
};
pub use workspace::Workspace;
