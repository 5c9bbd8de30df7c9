//! Key-value persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Serialize collections to JSON and write them under their key.
//! - Read persisted values back, treating corruption as absence.
//!
//! # Invariants
//! - `load_json` never fails on a malformed value; the caller falls back
//!   to seed data instead.
//! - Write failures are reported to the caller; in-memory state is the
//!   store's concern and is not rolled back here.

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence adapter error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize value: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value contract the content store persists through.
pub trait KvStore {
    /// Reads the raw serialized value under `key`, if present.
    fn load_raw(&self, key: &str) -> RepoResult<Option<String>>;

    /// Writes the raw serialized value under `key`, replacing any
    /// previous value.
    fn save_raw(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Removes `key`; removing an absent key is not an error.
    fn remove(&self, key: &str) -> RepoResult<()>;

    /// Deserializes the value under `key`.
    ///
    /// Returns `None` both for an absent key and for a value that no
    /// longer parses; corruption downgrades to a seed-data reload.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> RepoResult<Option<T>> {
        let Some(raw) = self.load_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("event=kv_load module=repo status=corrupt key={key} error={err}");
                Ok(None)
            }
        }
    }

    /// Serializes `value` as JSON and writes it under `key`.
    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> RepoResult<()> {
        let raw = serde_json::to_string(value).map_err(RepoError::Serialize)?;
        self.save_raw(key, &raw)
    }
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Consumes the adapter and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl KvStore for SqliteKvStore {
    fn load_raw(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save_raw(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
