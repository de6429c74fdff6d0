//! Shared test utilities for the Crew Studio workspace.
//!
//! Dev-dependency only. Provides [`TestWorkspace`], a temporary directory
//! that can be seeded with a raw `.crew/` layout without going through the
//! crates under test.

pub mod workspace;

pub use workspace::TestWorkspace;
