//! Core utilities for the streaming catalog CLI
//!
//! This module consolidates the process-wide plumbing used by every command:
//! - `paths`: Database location resolution
//! - `logging`: Tracing subscriber setup

pub mod logging;
pub mod paths;


// Re-export commonly used items for convenience
pub use logging::{default_directive, init_logging};
pub use paths::{default_database_path, resolve_database_path};
