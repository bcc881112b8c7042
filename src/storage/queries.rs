//! Write operations with existence pre-checks
//!
//! Every operation runs in its own transaction. Returning early (a rejected
//! pre-check) or bailing out with `?` drops the transaction uncommitted,
//! which rolls it back.

use super::{models::*, schema::StreamingDatabase};
use crate::cli::types::{GenreList, ReleaseId, UserId};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Params};

/// True if `sql` returns at least one row
fn row_exists<P: Params>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<bool> {
    Ok(conn.query_row(sql, params, |_| Ok(())).optional()?.is_some())
}

/// Log and wrap a rejected pre-check
fn reject(operation: &str, rejection: Rejection) -> Result<Outcome> {
    tracing::warn!(operation, reason = %rejection, "rejected");
    Ok(Outcome::Rejected(rejection))
}

impl StreamingDatabase {
    /// Insert a user and its viewer specialization
    pub fn insert_viewer(&mut self, viewer: &NewViewer) -> Result<Outcome> {
        let tx = self.conn.transaction()?;

        if row_exists(
            &tx,
            "SELECT uid FROM Users WHERE uid = ?",
            params![viewer.uid.as_i64()],
        )? {
            return reject("insert_viewer", Rejection::UserExists(viewer.uid));
        }

        tx.execute(
            "INSERT INTO Users (uid, email, nickname, street, city, state, zip, genres, joined_date)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                viewer.uid.as_i64(),
                viewer.email,
                viewer.nickname,
                viewer.street,
                viewer.city,
                viewer.state,
                viewer.zip,
                viewer.genres.to_stored(),
                viewer.joined_date.to_string(),
            ],
        )?;

        tx.execute(
            "INSERT INTO Viewers (uid, subscription, first, last) VALUES (?, ?, ?, ?)",
            params![
                viewer.uid.as_i64(),
                viewer.subscription.as_str(),
                viewer.first,
                viewer.last
            ],
        )?;

        tx.commit()?;
        tracing::info!(uid = %viewer.uid, "inserted viewer");
        Ok(Outcome::Applied)
    }

    /// Add a genre to a user's favorite list
    pub fn add_genre(&mut self, uid: UserId, genre: &str) -> Result<Outcome> {
        let genre = match GenreList::normalize(genre) {
            Ok(g) => g,
            Err(_) => return reject("add_genre", Rejection::EmptyGenre),
        };

        let tx = self.conn.transaction()?;

        let stored: Option<Option<String>> = tx
            .query_row(
                "SELECT genres FROM Users WHERE uid = ?",
                params![uid.as_i64()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(stored) = stored else {
            return reject("add_genre", Rejection::UnknownUser(uid));
        };

        if GenreList::from_stored(stored.as_deref()).contains(&genre) {
            return reject("add_genre", Rejection::GenreAlreadyListed { uid, genre });
        }

        let updated = GenreList::append_stored(stored.as_deref(), &genre);
        tx.execute(
            "UPDATE Users SET genres = ? WHERE uid = ?",
            params![updated, uid.as_i64()],
        )?;

        tx.commit()?;
        tracing::info!(%uid, %genre, "added genre");
        Ok(Outcome::Applied)
    }

    /// Delete a viewer (or producer) and the user row it specializes.
    ///
    /// Cascades remove the user's sessions, reviews and, for producers,
    /// their releases with everything hanging off them.
    pub fn delete_viewer(&mut self, uid: UserId) -> Result<Outcome> {
        let tx = self.conn.transaction()?;

        let is_viewer = row_exists(
            &tx,
            "SELECT uid FROM Viewers WHERE uid = ?",
            params![uid.as_i64()],
        )?;
        let is_producer = row_exists(
            &tx,
            "SELECT uid FROM Producers WHERE uid = ?",
            params![uid.as_i64()],
        )?;
        tracing::debug!(%uid, is_viewer, is_producer, "delete pre-check");

        if !is_viewer && !is_producer {
            return reject("delete_viewer", Rejection::NotViewerOrProducer(uid));
        }

        if is_viewer {
            tx.execute("DELETE FROM Viewers WHERE uid = ?", params![uid.as_i64()])?;
        }
        if is_producer {
            tx.execute("DELETE FROM Producers WHERE uid = ?", params![uid.as_i64()])?;
        }
        tx.execute("DELETE FROM Users WHERE uid = ?", params![uid.as_i64()])?;

        tx.commit()?;
        tracing::info!(%uid, "deleted user");
        Ok(Outcome::Applied)
    }

    /// Register an existing release as a movie
    pub fn insert_movie(&mut self, rid: ReleaseId, website_url: &str) -> Result<Outcome> {
        let tx = self.conn.transaction()?;

        if row_exists(
            &tx,
            "SELECT rid FROM Movies WHERE rid = ?",
            params![rid.as_i64()],
        )? {
            return reject("insert_movie", Rejection::MovieExists(rid));
        }

        if !row_exists(
            &tx,
            "SELECT rid FROM Releases WHERE rid = ?",
            params![rid.as_i64()],
        )? {
            return reject("insert_movie", Rejection::UnknownRelease(rid));
        }

        tx.execute(
            "INSERT INTO Movies (rid, website_url) VALUES (?, ?)",
            params![rid.as_i64(), website_url],
        )?;

        tx.commit()?;
        tracing::info!(%rid, "inserted movie");
        Ok(Outcome::Applied)
    }

    /// Record a viewing session
    pub fn insert_session(&mut self, session: &Session) -> Result<Outcome> {
        let tx = self.conn.transaction()?;

        if !row_exists(
            &tx,
            "SELECT uid FROM Viewers WHERE uid = ?",
            params![session.uid.as_i64()],
        )? {
            return reject("insert_session", Rejection::UnknownViewer(session.uid));
        }

        if !row_exists(
            &tx,
            "SELECT rid, ep_num FROM Videos WHERE rid = ? AND ep_num = ?",
            params![session.rid.as_i64(), session.ep_num.as_i64()],
        )? {
            return reject(
                "insert_session",
                Rejection::UnknownVideo(session.rid, session.ep_num),
            );
        }

        if row_exists(
            &tx,
            "SELECT sid FROM Sessions WHERE sid = ?",
            params![session.sid.as_i64()],
        )? {
            return reject("insert_session", Rejection::SessionExists(session.sid));
        }

        tx.execute(
            "INSERT INTO Sessions (sid, uid, rid, ep_num, initiate_at, leave_at, quality, device)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                session.sid.as_i64(),
                session.uid.as_i64(),
                session.rid.as_i64(),
                session.ep_num.as_i64(),
                session.initiate_at.to_string(),
                session.leave_at.to_string(),
                session.quality.as_str(),
                session.device.as_str(),
            ],
        )?;

        tx.commit()?;
        tracing::info!(sid = %session.sid, "inserted session");
        Ok(Outcome::Applied)
    }

    /// Rename a release
    pub fn update_release(&mut self, rid: ReleaseId, title: &str) -> Result<Outcome> {
        let tx = self.conn.transaction()?;

        if !row_exists(
            &tx,
            "SELECT rid FROM Releases WHERE rid = ?",
            params![rid.as_i64()],
        )? {
            return reject("update_release", Rejection::UnknownRelease(rid));
        }

        tx.execute(
            "UPDATE Releases SET title = ? WHERE rid = ?",
            params![title, rid.as_i64()],
        )?;

        tx.commit()?;
        tracing::info!(%rid, "updated release title");
        Ok(Outcome::Applied)
    }

    /// Look up a user by id
    pub fn get_user(&self, uid: UserId) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT uid, email, joined_date, nickname, street, city, state, zip, genres
                 FROM Users WHERE uid = ?",
                params![uid.as_i64()],
                |row| {
                    let genres: Option<String> = row.get(8)?;
                    Ok(User {
                        uid: UserId::new(row.get(0)?),
                        email: row.get(1)?,
                        joined_date: row.get(2)?,
                        nickname: row.get(3)?,
                        street: row.get(4)?,
                        city: row.get(5)?,
                        state: row.get(6)?,
                        zip: row.get(7)?,
                        genres: GenreList::from_stored(genres.as_deref()),
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Look up a release by id
    pub fn get_release(&self, rid: ReleaseId) -> Result<Option<Release>> {
        let release = self
            .conn
            .query_row(
                "SELECT rid, producer_uid, title, genre, release_date FROM Releases WHERE rid = ?",
                params![rid.as_i64()],
                |row| {
                    Ok(Release {
                        rid: ReleaseId::new(row.get(0)?),
                        producer_uid: UserId::new(row.get(1)?),
                        title: row.get(2)?,
                        genre: row.get(3)?,
                        release_date: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(release)
    }
}
