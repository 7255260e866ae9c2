use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

use super::{RoundStore, StorageError};
use crate::model::Round;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS rounds (
    round_id TEXT PRIMARY KEY,
    document TEXT NOT NULL
);";

/// Local store: one sqlite table of JSON round documents. Writes are
/// `INSERT OR REPLACE`, so the last save for a round id wins.
pub struct SqliteRoundStore {
    conn: Mutex<Connection>,
}

impl SqliteRoundStore {
    /// # Errors
    ///
    /// Will return `Err` if the database file cannot be opened or the
    /// schema cannot be applied.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        Self::init(Connection::open(path)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Db("sqlite connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl RoundStore for SqliteRoundStore {
    async fn load_round(&self, round_id: &str) -> Result<Option<Round>, StorageError> {
        let conn = self.lock()?;
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM rounds WHERE round_id = ?1",
                params![round_id],
                |row| row.get(0),
            )
            .optional()?;
        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        let document = serde_json::to_string(round)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO rounds (round_id, document) VALUES (?1, ?2)",
            params![round.round_id, document],
        )?;
        Ok(())
    }

    async fn delete_round(&self, round_id: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM rounds WHERE round_id = ?1", params![round_id])?;
        Ok(())
    }

    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT round_id FROM rounds ORDER BY round_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }
}
