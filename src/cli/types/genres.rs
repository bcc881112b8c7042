//! Favorite-genre lists, stored on the user row as a `;`-delimited string.

use crate::error::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const GENRE_SEPARATOR: char = ';';

/// An ordered, duplicate-free list of lower-cased genre names.
///
/// # Examples
///
/// ```rust
/// use streamdb::GenreList;
///
/// let genres = GenreList::from_stored(Some("drama; Comedy;drama"));
/// assert_eq!(genres.to_string(), "drama;comedy");
/// assert!(genres.contains(" COMEDY"));
/// assert_eq!(
///     GenreList::append_stored(genres.to_stored().as_deref(), "horror"),
///     "drama;comedy;horror"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreList(Vec<String>);

impl GenreList {
    /// Parse the stored column value. `NULL` and blank strings are empty lists.
    pub fn from_stored(stored: Option<&str>) -> Self {
        let mut list = Self::default();
        if let Some(raw) = stored {
            for genre in raw.split(GENRE_SEPARATOR).filter(|g| !g.trim().is_empty()) {
                let normalized = genre.trim().to_lowercase();
                if !list.contains(&normalized) {
                    list.0.push(normalized);
                }
            }
        }
        list
    }

    /// Trim and lower-case a single genre name.
    pub fn normalize(genre: &str) -> Result<String> {
        let normalized = genre.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(StreamError::EmptyGenre);
        }
        Ok(normalized)
    }

    pub fn contains(&self, genre: &str) -> bool {
        let needle = genre.trim().to_lowercase();
        self.0.iter().any(|g| *g == needle)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an already normalized genre to a stored column value, leaving
    /// the existing entries exactly as they are.
    pub fn append_stored(stored: Option<&str>, genre: &str) -> String {
        match stored.map(|s| s.trim_end_matches(GENRE_SEPARATOR)) {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{}{}{}", existing, GENRE_SEPARATOR, genre)
            }
            _ => genre.to_string(),
        }
    }

    /// Column value to write back; an empty list is stored as `NULL`.
    pub fn to_stored(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for GenreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, genre) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", GENRE_SEPARATOR)?;
            }
            f.write_str(genre)?;
        }
        Ok(())
    }
}
