use async_trait::async_trait;
use reqwest::StatusCode;

use super::{RoundStore, StorageError};
use crate::model::Round;

/// Round documents over a JSON API: `GET/PUT/DELETE {base}/rounds/{id}`.
pub struct RemoteRoundStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteRoundStore {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn round_url(&self, round_id: &str) -> String {
        format!("{}/rounds/{round_id}", self.base_url)
    }
}

#[async_trait]
impl RoundStore for RemoteRoundStore {
    async fn load_round(&self, round_id: &str) -> Result<Option<Round>, StorageError> {
        let response = self.client.get(self.round_url(round_id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let round = response.error_for_status()?.json::<Round>().await?;
        Ok(Some(round))
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        self.client
            .put(self.round_url(&round.round_id))
            .json(round)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_round(&self, round_id: &str) -> Result<(), StorageError> {
        let response = self.client.delete(self.round_url(round_id)).send().await?;
        if response.status() != StatusCode::NOT_FOUND {
            response.error_for_status()?;
        }
        Ok(())
    }

    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError> {
        let ids = self
            .client
            .get(format!("{}/rounds", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<String>>()
            .await?;
        Ok(ids)
    }
}
