//! Storage layer for the streaming catalog
//!
//! This module wraps the SQLite database, organized into logical components:
//! - `models`: Row types, write outcomes and report rows
//! - `schema`: Connection factory and table definitions
//! - `queries`: Write operations with existence pre-checks
//! - `reports`: Fixed join/aggregate reporting queries
//! - `import`: Bulk CSV loading

pub mod import;
pub mod models;
pub mod queries;
pub mod reports;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{StreamingDatabase, Table};
