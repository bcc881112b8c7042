//! CLI argument definitions and parsing.
//!
//! Verbs keep their camelCase names (`insertViewer`, `popularRelease`, …)
//! and take positional arguments only.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{
    Date, Device, EpisodeNumber, Quality, ReleaseId, SessionId, Subscription, Timestamp, UserId,
};

#[derive(Debug, Parser)]
#[clap(name = "streamdb", about = "Streaming platform catalog CLI", version)]
pub struct StreamCli {
    /// Database file (or set `STREAMDB_DATABASE` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// More log output on stderr: -v info, -vv debug, -vvv trace.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace all data with the CSV files found in a directory
    ///
    /// Reads users.csv, producers.csv, viewers.csv, releases.csv, movies.csv,
    /// series.csv, videos.csv, reviews.csv and sessions.csv; missing files
    /// leave their table empty.
    #[clap(name = "import")]
    Import {
        /// Directory holding the CSV files
        dir: PathBuf,
    },

    /// Create any missing tables without touching existing rows
    #[clap(name = "createTables")]
    CreateTables,

    /// Register a new user as a viewer
    #[clap(name = "insertViewer")]
    InsertViewer {
        uid: UserId,
        email: String,
        nickname: String,
        /// Empty string for none
        street: String,
        /// Empty string for none
        city: String,
        /// Empty string for none
        state: String,
        /// Empty string for none
        zip: String,
        /// `;`-separated favorite genres, empty string for none
        genres: String,
        /// YYYY-MM-DD
        joined_date: Date,
        first: String,
        last: String,
        /// free | monthly | yearly
        subscription: Subscription,
    },

    /// Register an existing release as a movie
    #[clap(name = "insertMovie")]
    InsertMovie { rid: ReleaseId, website_url: String },

    /// Rename a release
    #[clap(name = "updateRelease")]
    UpdateRelease { rid: ReleaseId, title: String },

    /// Add a genre to a user's favorites
    #[clap(name = "addGenre")]
    AddGenre { uid: UserId, genre: String },

    /// Delete a viewer or producer and everything that depends on them
    #[clap(name = "deleteViewer")]
    DeleteViewer { uid: UserId },

    /// Record a viewing session
    #[clap(name = "insertSession")]
    InsertSession {
        sid: SessionId,
        uid: UserId,
        rid: ReleaseId,
        ep_num: EpisodeNumber,
        /// YYYY-MM-DD HH:MM:SS
        initiate_at: Timestamp,
        /// YYYY-MM-DD HH:MM:SS
        leave_at: Timestamp,
        /// 480p | 720p | 1080p
        quality: Quality,
        /// mobile | desktop
        device: Device,
    },

    /// List the releases a viewer has reviewed
    #[clap(name = "listReleases")]
    ListReleases {
        uid: UserId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the k most reviewed releases
    #[clap(name = "popularRelease")]
    PopularRelease {
        k: u32,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the release and episode a session watched
    #[clap(name = "releaseTitle")]
    ReleaseTitle {
        sid: SessionId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List viewers with at least n sessions started between two dates
    #[clap(name = "activeViewer")]
    ActiveViewer {
        n: u32,
        /// YYYY-MM-DD, inclusive
        start: Date,
        /// YYYY-MM-DD, inclusive
        end: Date,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Count distinct viewers for each episode of a release
    #[clap(name = "videosViewed")]
    VideosViewed {
        rid: ReleaseId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
