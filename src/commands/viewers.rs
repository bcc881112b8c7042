//! Viewer and user commands

use super::{non_empty, open_database, write_outcome};
use crate::{
    cli::types::{Date, GenreList, Subscription, UserId},
    storage::NewViewer,
    Result,
};
use std::io::Write;
use std::path::Path;

/// Parameters for the insertViewer command, as given on the command line
#[derive(Debug)]
pub struct InsertViewerParams {
    pub uid: UserId,
    pub email: String,
    pub nickname: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub genres: String,
    pub joined_date: Date,
    pub first: String,
    pub last: String,
    pub subscription: Subscription,
}

impl From<InsertViewerParams> for NewViewer {
    fn from(params: InsertViewerParams) -> Self {
        NewViewer {
            uid: params.uid,
            email: params.email,
            nickname: params.nickname,
            street: non_empty(params.street),
            city: non_empty(params.city),
            state: non_empty(params.state),
            zip: non_empty(params.zip),
            genres: GenreList::from_stored(Some(params.genres.as_str())),
            joined_date: params.joined_date,
            first: params.first,
            last: params.last,
            subscription: params.subscription,
        }
    }
}

/// Handle the insertViewer command
pub fn handle_insert_viewer<W: Write>(
    out: &mut W,
    db_path: &Path,
    params: InsertViewerParams,
) -> Result<bool> {
    let mut db = open_database(db_path)?;
    let viewer = NewViewer::from(params);
    write_outcome(out, "insertViewer", db.insert_viewer(&viewer))
}

/// Handle the addGenre command
pub fn handle_add_genre<W: Write>(
    out: &mut W,
    db_path: &Path,
    uid: UserId,
    genre: &str,
) -> Result<bool> {
    let mut db = open_database(db_path)?;
    write_outcome(out, "addGenre", db.add_genre(uid, genre))
}

/// Handle the deleteViewer command
pub fn handle_delete_viewer<W: Write>(out: &mut W, db_path: &Path, uid: UserId) -> Result<bool> {
    let mut db = open_database(db_path)?;
    write_outcome(out, "deleteViewer", db.delete_viewer(uid))
}
