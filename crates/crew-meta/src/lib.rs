//! Tool schemas, persisted records and configuration for Crew Studio.
//!
//! Everything in this crate is plain data: it can be serialized to and
//! from the `.crew/` directory and carries no behavior beyond lookups.

pub mod config;
pub mod error;
pub mod record;
pub mod schema;

pub use config::{CoreConfig, CrewConfig, RuntimeSection, StorageConfig, load_config, save_config};
pub use error::{Error, Result};
pub use record::{AgentRecord, ToolRecord};
pub use schema::{ParamDef, ParamKind, ParamSpec, ToolSchema};
