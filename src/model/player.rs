use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub player_id: String,
    pub name: String,
}

/// Points already computed upstream for one tournament, keyed by player id.
/// Opaque to the aggregator: summed, never interpreted.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentPoints {
    pub tournament_id: String,
    pub points: HashMap<String, i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TournamentResult {
    pub tournament_id: String,
    pub points: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub total_points: i64,
    pub tournament_results: Vec<TournamentResult>,
}
