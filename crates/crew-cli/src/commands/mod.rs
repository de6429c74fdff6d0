//! Command implementations for crew-cli

pub mod agents;
pub mod check;
pub mod init;
pub mod research;
pub mod tools;
pub mod types;

pub use agents::{run_add_agent, run_list_agents, run_remove_agent};
pub use check::run_check;
pub use init::run_init;
pub use research::run_research;
pub use tools::{run_add_tool, run_list_tools, run_remove_tool, run_run_tool, run_set_param};
pub use types::{run_list_types, run_schema};

use crew_meta::ParamKind;
use crew_tools::ToolDescriptor;

/// Shown in place of secret parameter values.
pub const MASK: &str = "********";

/// A parameter value as it may be printed: secrets are masked.
pub fn display_value(descriptor: &ToolDescriptor, name: &str, value: &str) -> String {
    let secret = descriptor
        .schema()
        .get(name)
        .is_some_and(|spec| spec.kind == ParamKind::Secret);
    if secret && !value.is_empty() {
        MASK.to_string()
    } else {
        value.to_string()
    }
}
