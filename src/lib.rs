//! Streaming Platform Catalog Library
//!
//! Manages the relational schema of a video-streaming service (users,
//! producers, viewers, releases, movies, series, videos, sessions, reviews)
//! on top of SQLite, with the write and reporting operations exposed by the
//! `streamdb` command-line tool.
//!
//! ## Features
//!
//! - **Schema management**: Nine tables with cascading foreign keys enforced by the engine
//! - **Bulk import**: Replace the catalog from a directory of CSV files in one transaction
//! - **Guarded writes**: Inserts, updates and deletes with duplicate and foreign-key pre-checks
//! - **Reports**: Reviewed releases, popular releases, session titles, active viewers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use streamdb::{storage::StreamingDatabase, ReleaseId};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut db = StreamingDatabase::open(std::path::Path::new("streaming.db"))?;
//! let outcome = db.insert_movie(ReleaseId::new(10), "https://example.com/movie")?;
//! println!("{}", if outcome.is_applied() { "Success" } else { "Fail" });
//!
//! for release in db.popular_releases(5)? {
//!     println!("{} {} ({} reviews)", release.rid, release.title, release.review_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point every command at the same database without passing `--db`:
//! ```bash
//! export STREAMDB_DATABASE=/srv/streaming/catalog.db
//! export STREAMDB_LOG=streamdb=debug
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    Date, Device, EpisodeNumber, GenreList, Quality, ReleaseId, SessionId,
    Subscription, Timestamp, UserId,
};
pub use error::{Result, StreamError};

pub const DATABASE_ENV_VAR: &str = "STREAMDB_DATABASE";
pub const LOG_ENV_VAR: &str = "STREAMDB_LOG";
