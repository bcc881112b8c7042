//! Reporting commands
//!
//! Query failures propagate as errors; there is no `Fail` line for reports.

use super::{open_database, write_report};
use crate::{
    cli::types::{Date, ReleaseId, SessionId, UserId},
    Result,
};
use std::io::Write;
use std::path::Path;

pub const NO_REVIEWS: &str = "No reviews found.";
pub const NOTHING_FOUND: &str = "Nothing found";

/// Handle the listReleases command
pub fn handle_list_releases<W: Write>(
    out: &mut W,
    db_path: &Path,
    uid: UserId,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let releases = db.releases_reviewed_by(uid)?;
    write_report(out, &releases, NO_REVIEWS, as_json)
}

/// Handle the popularRelease command
pub fn handle_popular_release<W: Write>(
    out: &mut W,
    db_path: &Path,
    k: u32,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let releases = db.popular_releases(k)?;
    write_report(out, &releases, NOTHING_FOUND, as_json)
}

/// Handle the releaseTitle command
pub fn handle_release_title<W: Write>(
    out: &mut W,
    db_path: &Path,
    sid: SessionId,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let titles = db.release_title_for_session(sid)?;
    write_report(out, &titles, NOTHING_FOUND, as_json)
}

/// Handle the activeViewer command
pub fn handle_active_viewer<W: Write>(
    out: &mut W,
    db_path: &Path,
    min_sessions: u32,
    start: Date,
    end: Date,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let viewers = db.active_viewers(min_sessions, start, end)?;
    write_report(out, &viewers, NOTHING_FOUND, as_json)
}

/// Handle the videosViewed command
pub fn handle_videos_viewed<W: Write>(
    out: &mut W,
    db_path: &Path,
    rid: ReleaseId,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let videos = db.videos_viewed(rid)?;
    write_report(out, &videos, NOTHING_FOUND, as_json)
}
