//! Read-only reporting queries

use super::{models::*, schema::StreamingDatabase};
use crate::cli::types::{Date, EpisodeNumber, ReleaseId, SessionId, UserId};
use anyhow::Result;
use rusqlite::params;

impl StreamingDatabase {
    /// Distinct releases a viewer has reviewed, ordered by title
    pub fn releases_reviewed_by(&self, uid: UserId) -> Result<Vec<ReviewedRelease>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT r.rid, r.genre, r.title
             FROM Releases r
             JOIN Reviews rv ON r.rid = rv.rid
             WHERE rv.uid = ?
             ORDER BY r.title ASC",
        )?;

        let rows = stmt.query_map(params![uid.as_i64()], |row| {
            Ok(ReviewedRelease {
                rid: ReleaseId::new(row.get(0)?),
                genre: row.get(1)?,
                title: row.get(2)?,
            })
        })?;

        let mut releases = Vec::new();
        for row in rows {
            releases.push(row?);
        }
        Ok(releases)
    }

    /// The `limit` most reviewed releases.
    ///
    /// Ties on review count are broken by the higher release id first.
    pub fn popular_releases(&self, limit: u32) -> Result<Vec<PopularRelease>> {
        let mut stmt = self.conn.prepare(
            "SELECT rel.rid, rel.title, COUNT(rev.rvid) AS total
             FROM Releases rel
             JOIN Reviews rev ON rel.rid = rev.rid
             GROUP BY rel.rid, rel.title
             ORDER BY total DESC, rel.rid DESC
             LIMIT ?",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            Ok(PopularRelease {
                rid: ReleaseId::new(row.get(0)?),
                title: row.get(1)?,
                review_count: row.get::<_, i64>(2)? as u64,
            })
        })?;

        let mut releases = Vec::new();
        for row in rows {
            releases.push(row?);
        }
        Ok(releases)
    }

    /// Release and video details for the episode a session watched
    pub fn release_title_for_session(&self, sid: SessionId) -> Result<Vec<SessionTitle>> {
        let mut stmt = self.conn.prepare(
            "SELECT r.rid, r.title, r.genre, v.title, v.ep_num, v.length
             FROM Sessions s
             JOIN Videos v ON s.rid = v.rid AND s.ep_num = v.ep_num
             JOIN Releases r ON v.rid = r.rid
             WHERE s.sid = ?
             ORDER BY r.title ASC",
        )?;

        let rows = stmt.query_map(params![sid.as_i64()], |row| {
            Ok(SessionTitle {
                rid: ReleaseId::new(row.get(0)?),
                release_title: row.get(1)?,
                genre: row.get(2)?,
                video_title: row.get(3)?,
                ep_num: EpisodeNumber::new(row.get(4)?),
                length: row.get(5)?,
            })
        })?;

        let mut titles = Vec::new();
        for row in rows {
            titles.push(row?);
        }
        Ok(titles)
    }

    /// Viewers who started at least `min_sessions` sessions between `start`
    /// and `end`, both days inclusive
    pub fn active_viewers(
        &self,
        min_sessions: u32,
        start: Date,
        end: Date,
    ) -> Result<Vec<ActiveViewer>> {
        let mut stmt = self.conn.prepare(
            "SELECT v.uid, v.first, v.last
             FROM Viewers v
             JOIN Sessions s ON s.uid = v.uid
             WHERE date(s.initiate_at) BETWEEN ? AND ?
             GROUP BY v.uid, v.first, v.last
             HAVING COUNT(s.sid) >= ?
             ORDER BY v.uid ASC",
        )?;

        let rows = stmt.query_map(
            params![start.to_string(), end.to_string(), min_sessions],
            |row| {
                Ok(ActiveViewer {
                    uid: UserId::new(row.get(0)?),
                    first: row.get(1)?,
                    last: row.get(2)?,
                })
            },
        )?;

        let mut viewers = Vec::new();
        for row in rows {
            viewers.push(row?);
        }
        Ok(viewers)
    }

    /// Every episode of a release with its number of distinct viewers
    pub fn videos_viewed(&self, rid: ReleaseId) -> Result<Vec<VideoViewership>> {
        let mut stmt = self.conn.prepare(
            "SELECT v.rid, v.ep_num, v.title, v.length, COUNT(DISTINCT s.uid) AS viewers
             FROM Videos v
             LEFT JOIN Sessions s ON s.rid = v.rid AND s.ep_num = v.ep_num
             WHERE v.rid = ?
             GROUP BY v.rid, v.ep_num, v.title, v.length
             ORDER BY v.ep_num DESC",
        )?;

        let rows = stmt.query_map(params![rid.as_i64()], |row| {
            Ok(VideoViewership {
                rid: ReleaseId::new(row.get(0)?),
                ep_num: EpisodeNumber::new(row.get(1)?),
                title: row.get(2)?,
                length: row.get(3)?,
                viewer_count: row.get::<_, i64>(4)? as u64,
            })
        })?;

        let mut videos = Vec::new();
        for row in rows {
            videos.push(row?);
        }
        Ok(videos)
    }
}
