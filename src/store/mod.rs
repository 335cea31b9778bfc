//! SQLite-backed card store.
//!
//! All cards live in a single table:
//!
//! ```sql
//! CREATE TABLE tests (id INTEGER PRIMARY KEY, question TEXT, answer TEXT)
//! ```
//!
//! The store is append-only from the application's point of view: cards are
//! inserted and read, never updated or deleted. Navigation relies on four
//! single-row id queries (min, max, next above, previous below).
//!
//! # Example
//!
//! ```
//! use cardquill::store::CardStore;
//!
//! let store = CardStore::open_in_memory().unwrap();
//! let first = store.insert("What is 2 + 2?", "4").unwrap();
//! let second = store.insert("Capital of France?", "Paris").unwrap();
//!
//! assert_eq!(store.min_id().unwrap(), Some(first));
//! assert_eq!(store.next_id_after(first).unwrap(), Some(second));
//! assert_eq!(store.next_id_after(second).unwrap(), None);
//! ```

mod card;

pub use card::{Card, CardId};

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::{Result, StoreError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tests
    (id INTEGER PRIMARY KEY, question TEXT, answer TEXT)";

/// An open card database.
///
/// Dropping the store closes its connection.
pub struct CardStore {
    conn: Connection,
    path: Option<PathBuf>, // None => memory
}

impl CardStore {
    /// Opens the database at `path`, creating the file and the `tests`
    /// table when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] when the file cannot be
    /// opened, created or initialised (unwritable directory, not a database).
    pub fn create_or_open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| unavailable(path, source))?;
        conn.execute(SCHEMA, [])
            .map_err(|source| unavailable(path, source))?;

        info!("opened card store {}", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens an existing database without creating it or touching its schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] when the file is missing,
    /// unreadable, or not a SQLite database.
    pub fn open_existing<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn =
            Connection::open_with_flags(path, flags).map_err(|source| unavailable(path, source))?;
        // SQLite opens lazily; reading the schema surfaces "file is not a database".
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|source| unavailable(path, source))?;

        info!("loaded card store {}", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Transient in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn, path: None })
    }

    /// Backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends a new card and returns its id.
    ///
    /// Content is stored verbatim; empty sides are allowed.
    pub fn insert(&self, question: &str, answer: &str) -> Result<CardId> {
        self.conn.execute(
            "INSERT INTO tests (question, answer) VALUES (?1, ?2)",
            params![question, answer],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("inserted card {}", id);
        Ok(id)
    }

    /// Reads a whole card.
    pub fn get(&self, id: CardId) -> Result<Card> {
        self.conn
            .query_row(
                "SELECT id, question, answer FROM tests WHERE id = ?1",
                [id],
                |row| {
                    Ok(Card {
                        id: row.get(0)?,
                        question: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        answer: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Reads only the answer side of a card.
    pub fn answer(&self, id: CardId) -> Result<String> {
        self.conn
            .query_row("SELECT answer FROM tests WHERE id = ?1", [id], |row| {
                row.get::<_, Option<String>>(0)
            })
            .optional()?
            .map(Option::unwrap_or_default)
            .ok_or(StoreError::NotFound(id))
    }

    /// Smallest stored id, `None` when the table is empty.
    pub fn min_id(&self) -> Result<Option<CardId>> {
        self.aggregate_id("SELECT MIN(id) FROM tests")
    }

    /// Largest stored id, `None` when the table is empty.
    pub fn max_id(&self) -> Result<Option<CardId>> {
        self.aggregate_id("SELECT MAX(id) FROM tests")
    }

    /// Closest id strictly greater than `id`.
    pub fn next_id_after(&self, id: CardId) -> Result<Option<CardId>> {
        self.neighbour_id(
            "SELECT id FROM tests WHERE id > ?1 ORDER BY id ASC LIMIT 1",
            id,
        )
    }

    /// Closest id strictly less than `id`.
    pub fn prev_id_before(&self, id: CardId) -> Result<Option<CardId>> {
        self.neighbour_id(
            "SELECT id FROM tests WHERE id < ?1 ORDER BY id DESC LIMIT 1",
            id,
        )
    }

    /// Number of stored cards.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM tests", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn aggregate_id(&self, sql: &str) -> Result<Option<CardId>> {
        // MIN/MAX always yield one row, NULL on an empty table
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }

    fn neighbour_id(&self, sql: &str, id: CardId) -> Result<Option<CardId>> {
        Ok(self
            .conn
            .query_row(sql, [id], |row| row.get(0))
            .optional()?)
    }
}

fn unavailable(path: &Path, source: rusqlite::Error) -> StoreError {
    StoreError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    }
}
