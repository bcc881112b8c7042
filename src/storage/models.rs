//! Data models for the storage layer

use crate::cli::types::{
    Date, Device, EpisodeNumber, GenreList, Quality, ReleaseId, SessionId, Subscription,
    Timestamp, UserId,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// User row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uid: UserId,
    pub email: String,
    pub joined_date: String,
    pub nickname: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub genres: GenreList,
}

/// Release row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub rid: ReleaseId,
    pub producer_uid: UserId,
    pub title: String,
    pub genre: String,
    pub release_date: String,
}

/// A viewer to register: the user row plus its viewer specialization
#[derive(Debug, Clone)]
pub struct NewViewer {
    pub uid: UserId,
    pub email: String,
    pub nickname: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub genres: GenreList,
    pub joined_date: Date,
    pub first: String,
    pub last: String,
    pub subscription: Subscription,
}

/// A viewer watching one video episode over a time interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub sid: SessionId,
    pub uid: UserId,
    pub rid: ReleaseId,
    pub ep_num: EpisodeNumber,
    pub initiate_at: Timestamp,
    pub leave_at: Timestamp,
    pub quality: Quality,
    pub device: Device,
}

/// Result of a write operation that ran to completion.
///
/// Failures of the statements themselves are errors; `Rejected` means a
/// pre-check stopped the write before anything was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Why a write was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UserExists(UserId),
    UnknownUser(UserId),
    NotViewerOrProducer(UserId),
    UnknownViewer(UserId),
    EmptyGenre,
    GenreAlreadyListed { uid: UserId, genre: String },
    MovieExists(ReleaseId),
    UnknownRelease(ReleaseId),
    UnknownVideo(ReleaseId, EpisodeNumber),
    SessionExists(SessionId),
    MissingImportDir(PathBuf),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UserExists(uid) => write!(f, "user {} already exists", uid),
            Rejection::UnknownUser(uid) => write!(f, "user {} does not exist", uid),
            Rejection::NotViewerOrProducer(uid) => {
                write!(f, "user {} is neither a viewer nor a producer", uid)
            }
            Rejection::UnknownViewer(uid) => write!(f, "viewer {} does not exist", uid),
            Rejection::EmptyGenre => write!(f, "genre is empty"),
            Rejection::GenreAlreadyListed { uid, genre } => {
                write!(f, "user {} already lists genre '{}'", uid, genre)
            }
            Rejection::MovieExists(rid) => write!(f, "movie {} already exists", rid),
            Rejection::UnknownRelease(rid) => write!(f, "release {} does not exist", rid),
            Rejection::UnknownVideo(rid, ep) => {
                write!(f, "video {} episode {} does not exist", rid, ep)
            }
            Rejection::SessionExists(sid) => write!(f, "session {} already exists", sid),
            Rejection::MissingImportDir(dir) => {
                write!(f, "import directory {} does not exist", dir.display())
            }
        }
    }
}

/// A report row printable as one comma-separated line
pub trait ReportRow: Serialize {
    fn to_line(&self) -> String;
}

/// A release reviewed by a given viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedRelease {
    pub rid: ReleaseId,
    pub genre: String,
    pub title: String,
}

impl ReportRow for ReviewedRelease {
    fn to_line(&self) -> String {
        format!("{},{},{}", self.rid, self.genre, self.title)
    }
}

/// A release with its number of reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularRelease {
    pub rid: ReleaseId,
    pub title: String,
    pub review_count: u64,
}

impl ReportRow for PopularRelease {
    fn to_line(&self) -> String {
        format!("{},{},{}", self.rid, self.title, self.review_count)
    }
}

/// The release and episode a session watched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTitle {
    pub rid: ReleaseId,
    pub release_title: String,
    pub genre: String,
    pub video_title: String,
    pub ep_num: EpisodeNumber,
    pub length: i64,
}

impl ReportRow for SessionTitle {
    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.rid, self.release_title, self.genre, self.video_title, self.ep_num, self.length
        )
    }
}

/// A viewer with enough sessions in a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveViewer {
    pub uid: UserId,
    pub first: String,
    pub last: String,
}

impl ReportRow for ActiveViewer {
    fn to_line(&self) -> String {
        format!("{},{},{}", self.uid, self.first, self.last)
    }
}

/// A video of a release with its count of distinct viewers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoViewership {
    pub rid: ReleaseId,
    pub ep_num: EpisodeNumber,
    pub title: String,
    pub length: i64,
    pub viewer_count: u64,
}

impl ReportRow for VideoViewership {
    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.rid, self.ep_num, self.title, self.length, self.viewer_count
        )
    }
}
