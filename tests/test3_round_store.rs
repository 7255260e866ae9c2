use async_trait::async_trait;
use fairway_score::model::{CourseDetails, Round};
use fairway_score::score::record_score;
use fairway_score::storage::{
    FallbackRoundStore, MemoryRoundStore, RoundStore, SqliteRoundStore, StorageError,
};

fn sample_round(round_id: &str) -> Round {
    let round = Round::new(
        round_id,
        Some(CourseDetails {
            name: "Pebble Creek".to_string(),
            holes: Some(18),
            par: Some(72),
        }),
    );
    record_score(&round, "amy", 1, 4)
}

#[tokio::test]
async fn sqlite_store_round_trips_a_round() -> Result<(), StorageError> {
    let store = SqliteRoundStore::open_in_memory()?;

    assert!(store.load_round("r1").await?.is_none());

    let round = sample_round("r1");
    store.save_round(&round).await?;

    let loaded = store.load_round("r1").await?.expect("round saved above");
    assert_eq!(loaded.round_id, "r1");
    assert_eq!(loaded.player_scores("amy"), round.player_scores("amy"));
    assert_eq!(loaded.course_details, round.course_details);
    Ok(())
}

#[tokio::test]
async fn sqlite_store_last_write_wins() -> Result<(), StorageError> {
    let store = SqliteRoundStore::open_in_memory()?;

    let round = sample_round("r1");
    store.save_round(&round).await?;
    let rescored = record_score(&round, "amy", 2, 7);
    store.save_round(&rescored).await?;

    let loaded = store.load_round("r1").await?.expect("round saved above");
    assert_eq!(loaded.player_scores("amy").len(), 2);
    Ok(())
}

#[tokio::test]
async fn sqlite_store_delete_and_list() -> Result<(), StorageError> {
    let store = SqliteRoundStore::open_in_memory()?;
    store.save_round(&sample_round("r2")).await?;
    store.save_round(&sample_round("r1")).await?;

    assert_eq!(store.list_round_ids().await?, ["r1", "r2"]);

    store.delete_round("r1").await?;
    assert_eq!(store.list_round_ids().await?, ["r2"]);
    assert!(store.load_round("r1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn memory_store_round_trips_a_round() -> Result<(), StorageError> {
    let store = MemoryRoundStore::new();
    store.save_round(&sample_round("r1")).await?;
    assert!(store.load_round("r1").await?.is_some());
    store.delete_round("r1").await?;
    assert!(store.load_round("r1").await?.is_none());
    Ok(())
}

/// Remote stand-in that is always down.
struct UnreachableStore;

#[async_trait]
impl RoundStore for UnreachableStore {
    async fn load_round(&self, _round_id: &str) -> Result<Option<Round>, StorageError> {
        Err(StorageError::Network("connection refused".to_string()))
    }

    async fn save_round(&self, _round: &Round) -> Result<(), StorageError> {
        Err(StorageError::Network("connection refused".to_string()))
    }

    async fn delete_round(&self, _round_id: &str) -> Result<(), StorageError> {
        Err(StorageError::Network("connection refused".to_string()))
    }

    async fn list_round_ids(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Network("connection refused".to_string()))
    }
}

#[tokio::test]
async fn fallback_store_degrades_to_local_silently() -> Result<(), StorageError> {
    let store = FallbackRoundStore::new(UnreachableStore, MemoryRoundStore::new());

    // writes succeed even though the remote side is down
    store.save_round(&sample_round("r1")).await?;

    let loaded = store.load_round("r1").await?;
    assert!(loaded.is_some());
    assert_eq!(store.list_round_ids().await?, ["r1"]);

    store.delete_round("r1").await?;
    assert!(store.load_round("r1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn fallback_store_prefers_remote_reads() -> Result<(), StorageError> {
    // remote has the fresher copy; local is stale
    let remote = MemoryRoundStore::new();
    let local = MemoryRoundStore::new();

    let stale = sample_round("r1");
    local.save_round(&stale).await?;
    let fresh = record_score(&stale, "amy", 2, 5);
    remote.save_round(&fresh).await?;

    let store = FallbackRoundStore::new(remote, local);
    let loaded = store.load_round("r1").await?.expect("seeded above");
    assert_eq!(loaded.player_scores("amy").len(), 2);
    Ok(())
}
