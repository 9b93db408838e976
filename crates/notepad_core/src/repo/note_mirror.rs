//! Durable mirror contracts and implementations.
//!
//! # Responsibility
//! - Persist the entire note collection as one JSON blob under a single
//!   storage key.
//! - Keep SQL and encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The blob is read once at store open and rewritten wholesale on save.
//! - `load` distinguishes "no blob yet" (`None`) from "blob unreadable"
//!   (`Corrupt`); the recovery policy belongs to the caller.

use crate::db::DbError;
use crate::model::note::Note;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Storage key the whole collection is persisted under.
pub const MIRROR_KEY: &str = "notepad-notes";

pub type MirrorResult<T> = Result<T, MirrorError>;

/// Mirror error for persistence and blob decoding operations.
#[derive(Debug)]
pub enum MirrorError {
    /// Storage transport failure.
    Db(DbError),
    /// Persisted blob exists but cannot be decoded into notes.
    Corrupt(String),
    /// Collection could not be encoded for writing.
    Serialize(serde_json::Error),
}

impl Display for MirrorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "corrupt note mirror: {message}"),
            Self::Serialize(err) => write!(f, "failed to encode note mirror: {err}"),
        }
    }
}

impl Error for MirrorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for MirrorError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for MirrorError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence capability for the note collection.
pub trait NoteMirror {
    /// Reads the persisted collection. `None` means no blob exists yet.
    fn load(&self) -> MirrorResult<Option<Vec<Note>>>;
    /// Overwrites the persisted collection wholesale.
    fn save(&self, notes: &[Note]) -> MirrorResult<()>;
}

/// SQLite-backed mirror storing the blob under [`MIRROR_KEY`].
pub struct SqliteNoteMirror<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteMirror<'conn> {
    /// Constructs a mirror from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteMirror for SqliteNoteMirror<'_> {
    fn load(&self) -> MirrorResult<Option<Vec<Note>>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM mirror WHERE key = ?1;",
                [MIRROR_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(raw) => decode_blob(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, notes: &[Note]) -> MirrorResult<()> {
        let blob = encode_blob(notes)?;
        self.conn.execute(
            "INSERT INTO mirror (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![MIRROR_KEY, blob],
        )?;
        Ok(())
    }
}

/// In-process mirror holding the serialized blob in memory.
///
/// Runs the identical encode/decode path as the SQLite mirror, so tests
/// exercise the real wire format without a database. Clones share the
/// same underlying blob, so a test can keep a probe handle on the mirror
/// it hands to a store.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteMirror {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryNoteMirror {
    /// Creates an empty mirror (no blob yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mirror pre-seeded with a raw blob, valid or not.
    pub fn with_raw(blob: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(blob.into()))),
        }
    }

    /// Returns a copy of the currently persisted raw blob.
    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl NoteMirror for MemoryNoteMirror {
    fn load(&self) -> MirrorResult<Option<Vec<Note>>> {
        match self.blob.borrow().as_deref() {
            Some(raw) => decode_blob(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, notes: &[Note]) -> MirrorResult<()> {
        let blob = encode_blob(notes)?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}

fn encode_blob(notes: &[Note]) -> MirrorResult<String> {
    serde_json::to_string(notes).map_err(MirrorError::Serialize)
}

fn decode_blob(raw: &str) -> MirrorResult<Vec<Note>> {
    serde_json::from_str(raw).map_err(|err| MirrorError::Corrupt(err.to_string()))
}
