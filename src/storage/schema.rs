//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fmt;
use std::path::Path;

/// Connection to the streaming catalog database.
///
/// One value is opened per operation and dropped when the operation ends.
pub struct StreamingDatabase {
    pub(crate) conn: Connection,
}

/// Every table in the catalog, in dependency order (parents first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Producers,
    Viewers,
    Releases,
    Movies,
    Series,
    Videos,
    Reviews,
    Sessions,
}

impl Table {
    /// Creation and bulk-load order. Dropping walks it in reverse.
    pub const ALL: [Table; 9] = [
        Table::Users,
        Table::Producers,
        Table::Viewers,
        Table::Releases,
        Table::Movies,
        Table::Series,
        Table::Videos,
        Table::Reviews,
        Table::Sessions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "Users",
            Table::Producers => "Producers",
            Table::Viewers => "Viewers",
            Table::Releases => "Releases",
            Table::Movies => "Movies",
            Table::Series => "Series",
            Table::Videos => "Videos",
            Table::Reviews => "Reviews",
            Table::Sessions => "Sessions",
        }
    }

    /// File read for this table by the bulk importer
    pub fn csv_file(&self) -> &'static str {
        match self {
            Table::Users => "users.csv",
            Table::Producers => "producers.csv",
            Table::Viewers => "viewers.csv",
            Table::Releases => "releases.csv",
            Table::Movies => "movies.csv",
            Table::Series => "series.csv",
            Table::Videos => "videos.csv",
            Table::Reviews => "reviews.csv",
            Table::Sessions => "sessions.csv",
        }
    }

    fn create_sql(&self) -> &'static str {
        match self {
            Table::Users => {
                "CREATE TABLE IF NOT EXISTS Users (
                    uid INTEGER,
                    email TEXT NOT NULL,
                    joined_date DATE NOT NULL,
                    nickname TEXT NOT NULL,
                    street TEXT,
                    city TEXT,
                    state TEXT,
                    zip TEXT,
                    genres TEXT,
                    PRIMARY KEY (uid)
                )"
            }
            Table::Producers => {
                "CREATE TABLE IF NOT EXISTS Producers (
                    uid INTEGER,
                    bio TEXT,
                    company TEXT,
                    PRIMARY KEY (uid),
                    FOREIGN KEY (uid) REFERENCES Users(uid) ON DELETE CASCADE
                )"
            }
            Table::Viewers => {
                "CREATE TABLE IF NOT EXISTS Viewers (
                    uid INTEGER,
                    subscription TEXT CHECK (subscription IN ('free', 'monthly', 'yearly')),
                    first TEXT NOT NULL,
                    last TEXT NOT NULL,
                    PRIMARY KEY (uid),
                    FOREIGN KEY (uid) REFERENCES Users(uid) ON DELETE CASCADE
                )"
            }
            Table::Releases => {
                "CREATE TABLE IF NOT EXISTS Releases (
                    rid INTEGER,
                    producer_uid INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    genre TEXT NOT NULL,
                    release_date DATE NOT NULL,
                    PRIMARY KEY (rid),
                    FOREIGN KEY (producer_uid) REFERENCES Producers(uid) ON DELETE CASCADE
                )"
            }
            Table::Movies => {
                "CREATE TABLE IF NOT EXISTS Movies (
                    rid INTEGER,
                    website_url TEXT,
                    PRIMARY KEY (rid),
                    FOREIGN KEY (rid) REFERENCES Releases(rid) ON DELETE CASCADE
                )"
            }
            Table::Series => {
                "CREATE TABLE IF NOT EXISTS Series (
                    rid INTEGER,
                    introduction TEXT,
                    PRIMARY KEY (rid),
                    FOREIGN KEY (rid) REFERENCES Releases(rid) ON DELETE CASCADE
                )"
            }
            Table::Videos => {
                "CREATE TABLE IF NOT EXISTS Videos (
                    rid INTEGER,
                    ep_num INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    length INTEGER NOT NULL,
                    PRIMARY KEY (rid, ep_num),
                    FOREIGN KEY (rid) REFERENCES Releases(rid) ON DELETE CASCADE
                )"
            }
            Table::Reviews => {
                "CREATE TABLE IF NOT EXISTS Reviews (
                    rvid INTEGER,
                    uid INTEGER NOT NULL,
                    rid INTEGER NOT NULL,
                    rating DECIMAL(2, 1) NOT NULL CHECK (rating BETWEEN 0 AND 5),
                    body TEXT,
                    posted_at DATETIME NOT NULL,
                    PRIMARY KEY (rvid),
                    FOREIGN KEY (uid) REFERENCES Viewers(uid) ON DELETE CASCADE,
                    FOREIGN KEY (rid) REFERENCES Releases(rid) ON DELETE CASCADE
                )"
            }
            Table::Sessions => {
                "CREATE TABLE IF NOT EXISTS Sessions (
                    sid INTEGER,
                    uid INTEGER NOT NULL,
                    rid INTEGER NOT NULL,
                    ep_num INTEGER NOT NULL,
                    initiate_at DATETIME NOT NULL,
                    leave_at DATETIME NOT NULL,
                    quality TEXT CHECK (quality IN ('480p', '720p', '1080p')),
                    device TEXT CHECK (device IN ('mobile', 'desktop')),
                    PRIMARY KEY (sid),
                    FOREIGN KEY (uid) REFERENCES Viewers(uid) ON DELETE CASCADE,
                    FOREIGN KEY (rid, ep_num) REFERENCES Videos(rid, ep_num) ON DELETE CASCADE
                )"
            }
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create every missing table. Existing tables and rows are left alone.
pub(crate) fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    for table in Table::ALL {
        conn.execute(table.create_sql(), [])?;
    }
    Ok(())
}

/// Drop every table, children first so cascades never see a dangling parent.
pub(crate) fn drop_tables(conn: &Connection) -> rusqlite::Result<()> {
    for table in Table::ALL.iter().rev() {
        conn.execute(&format!("DROP TABLE IF EXISTS {}", table.name()), [])?;
    }
    Ok(())
}

impl StreamingDatabase {
    /// Open the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("could not create database directory {}", parent.display())
                })?;
            }
        }

        tracing::debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)
            .with_context(|| format!("could not open database {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database (used by tests)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Cascades are only honored with foreign keys switched on per connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub fn initialize_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        create_tables(&tx)?;
        tx.commit()?;
        Ok(())
    }

    /// Number of rows currently in `table`
    pub fn row_count(&self, table: Table) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table.name()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}
