//! Tool registry, validation and instantiation for Crew Studio.
//!
//! # Architecture
//!
//! A [`ToolRegistry`] maps a tool type name to a [`ToolRegistration`]:
//! display metadata, a parameter schema and a factory. Callers create
//! [`ToolDescriptor`]s from the registry, edit their parameters, and call
//! [`ToolRegistry::instantiate`] to get an opaque [`ToolHandle`].
//!
//! Validation always runs before a factory is invoked: a descriptor with an
//! empty mandatory parameter never reaches its factory.
//!
//! Two parameter shapes use a lenient legacy string encoding (comma lists
//! and `{key:value}` pairs); see [`encoding`].

pub mod args;
pub mod builtin;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod handle;
pub mod logging;
pub mod registry;
pub mod runtime;

pub use args::ToolArgs;
pub use descriptor::ToolDescriptor;
pub use error::{BoxError, Error, Result};
pub use factory::{FactoryResult, ToolFactory};
pub use handle::{Setting, SimulatedTool, ToolHandle};
pub use registry::{BUILTIN_COUNT, ToolCategory, ToolRegistration, ToolRegistry};
pub use runtime::RuntimeConfig;
