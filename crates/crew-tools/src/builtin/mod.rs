//! Built-in tool types
//!
//! Each submodule provides `*_registration()` constructors for one family
//! of tools. The registry collects them in
//! [`builtin_registrations`](crate::registry::builtin_registrations).
//!
//! Built-in factories return [`SimulatedTool`] handles: they parse and
//! check their parameters the way the real integrations would, but answer
//! queries offline.

pub mod code;
pub mod custom;
pub mod data;
pub mod document;
pub mod media;
pub mod web;

use crew_meta::{ParamSpec, ToolSchema};

use crate::args::ToolArgs;
use crate::factory::FactoryResult;
use crate::handle::SimulatedTool;
use crate::registry::{ToolCategory, ToolRegistration};

/// Registration for a tool bound to at most one resource parameter.
///
/// Most search tools take a single optional target (a URL, a file, a
/// channel handle); their factories differ only in which parameter that is.
pub(crate) fn targeted(
    type_name: &'static str,
    display_name: &'static str,
    category: ToolCategory,
    description: &'static str,
    param: &'static str,
    spec: ParamSpec,
) -> ToolRegistration {
    ToolRegistration::new(
        type_name,
        display_name,
        category,
        ToolSchema::new().param(param, spec),
        move |args: &ToolArgs| -> FactoryResult {
            Ok(SimulatedTool::new(type_name, description, category)
                .with_target(args.get(param))
                .boxed())
        },
    )
    .with_description(description)
}

/// Registration for a tool that takes no parameters.
pub(crate) fn bare(
    type_name: &'static str,
    display_name: &'static str,
    category: ToolCategory,
    description: &'static str,
) -> ToolRegistration {
    ToolRegistration::new(
        type_name,
        display_name,
        category,
        ToolSchema::new(),
        move |_: &ToolArgs| -> FactoryResult {
            Ok(SimulatedTool::new(type_name, description, category).boxed())
        },
    )
    .with_description(description)
}
