use async_trait::async_trait;
use tracing::warn;

use super::{RoundStore, StorageError};
use crate::model::Round;

/// API-first persistence with silent local fallback. Reads try the remote
/// store and degrade to local when it fails; writes always land locally so
/// a flaky network never loses a score, with the remote write attempted
/// best-effort afterwards. Failures on the remote side are logged, never
/// surfaced to the scoring flow.
pub struct FallbackRoundStore<R, L> {
    remote: R,
    local: L,
}

impl<R: RoundStore, L: RoundStore> FallbackRoundStore<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl<R: RoundStore, L: RoundStore> RoundStore for FallbackRoundStore<R, L> {
    async fn load_round(&self, round_id: &str) -> Result<Option<Round>, StorageError> {
        match self.remote.load_round(round_id).await {
            Ok(round) => Ok(round),
            Err(e) => {
                warn!(round_id, error = %e, "remote load failed, falling back to local store");
                self.local.load_round(round_id).await
            }
        }
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        self.local.save_round(round).await?;
        if let Err(e) = self.remote.save_round(round).await {
            warn!(round_id = %round.round_id, error = %e, "remote save failed, kept local copy");
        }
        Ok(())
    }

    async fn delete_round(&self, round_id: &str) -> Result<(), StorageError> {
        self.local.delete_round(round_id).await?;
        if let Err(e) = self.remote.delete_round(round_id).await {
            warn!(round_id, error = %e, "remote delete failed, removed local copy");
        }
        Ok(())
    }

    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError> {
        match self.remote.list_round_ids().await {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(error = %e, "remote listing failed, falling back to local store");
                self.local.list_round_ids().await
            }
        }
    }
}
