//! Filesystem helpers for Crew Studio
//!
//! Provides normalized paths, atomic writes and a format-agnostic
//! config store used to persist the tool collection and agent roster.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::CrewPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
