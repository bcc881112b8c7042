//! Type-safe wrappers and enums for streaming catalog data.

pub mod genres;
pub mod ids;
pub mod media;
pub mod time;

#[cfg(test)]
mod tests;

pub use genres::GenreList;
pub use ids::{EpisodeNumber, ReleaseId, SessionId, UserId};
pub use media::{Device, Quality, Subscription};
pub use time::{Date, Timestamp};
