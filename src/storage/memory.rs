use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{RoundStore, StorageError};
use crate::model::Round;

/// In-memory store used by tests and as a default when no durable backend
/// is wired up.
#[derive(Default)]
pub struct MemoryRoundStore {
    rounds: RwLock<HashMap<String, Round>>,
}

impl MemoryRoundStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoundStore for MemoryRoundStore {
    async fn load_round(&self, round_id: &str) -> Result<Option<Round>, StorageError> {
        Ok(self.rounds.read().await.get(round_id).cloned())
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        self.rounds
            .write()
            .await
            .insert(round.round_id.clone(), round.clone());
        Ok(())
    }

    async fn delete_round(&self, round_id: &str) -> Result<(), StorageError> {
        self.rounds.write().await.remove(round_id);
        Ok(())
    }

    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut ids: Vec<String> = self.rounds.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
