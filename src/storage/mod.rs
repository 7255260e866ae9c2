pub mod fallback;
pub mod memory;
pub mod remote;
pub mod sqlite;

pub use fallback::*;
pub use memory::*;
pub use remote::*;
pub use sqlite::*;

use crate::model::Round;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("db error: {0}")]
    Db(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for StorageError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for StorageError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

/// Round persistence. Rounds are whole documents keyed by round id; the
/// last write wins. The aggregator never touches a store itself, handlers
/// load a round, derive, and save the result back.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn load_round(&self, round_id: &str) -> Result<Option<Round>, StorageError>;
    async fn save_round(&self, round: &Round) -> Result<(), StorageError>;
    async fn delete_round(&self, round_id: &str) -> Result<(), StorageError>;
    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError>;
}
