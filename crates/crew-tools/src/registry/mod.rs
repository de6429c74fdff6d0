//! Tool type registry
//!
//! Maps a type name to its schema and factory. The built-in set is
//! registered once at start-up; see [`builtin_registrations`].

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::ToolRegistry;
pub use types::{ToolCategory, ToolRegistration};
