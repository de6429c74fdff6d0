//! Parameter schemas for tool types
//!
//! A schema is the ordered list of named parameters a tool type accepts,
//! each flagged mandatory or optional. Schemas are fixed per type and are
//! never persisted with a tool; they are looked up by type name.

pub mod param;
pub mod tool;

pub use param::{ParamKind, ParamSpec};
pub use tool::{ParamDef, ToolSchema};
