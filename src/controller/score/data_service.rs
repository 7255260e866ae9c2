use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{HoleScore, Round, format_updated_ago};
use crate::score::{
    DEFAULT_HOLE_COUNT, first_incomplete_hole, format_score_to_par, record_score, score_to_par,
    total_score,
};
use crate::storage::{RoundStore, StorageError};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerSummary {
    pub player_id: String,
    pub total: i32,
    pub to_par: Option<i32>,
    pub to_par_display: String,
    pub holes: Vec<HoleScore>,
}

/// Everything the scorecard page needs, derived fresh from a round on
/// every request.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScorecardData {
    pub round_id: String,
    pub course_name: Option<String>,
    pub hole_count: i32,
    pub players: Vec<PlayerSummary>,
    pub current_hole: i32,
    pub last_updated: String,
}

#[must_use]
pub fn build_scorecard(round: &Round) -> ScorecardData {
    let hole_count = round
        .course_details
        .as_ref()
        .and_then(|d| d.holes)
        .unwrap_or(DEFAULT_HOLE_COUNT);

    let mut player_ids: Vec<String> = round.scores.keys().cloned().collect();
    player_ids.sort();

    let mut players: Vec<PlayerSummary> = player_ids
        .iter()
        .map(|player_id| {
            let to_par = score_to_par(round, player_id);
            PlayerSummary {
                player_id: player_id.clone(),
                total: total_score(round, player_id),
                to_par,
                to_par_display: format_score_to_par(to_par),
                holes: round.player_scores(player_id).to_vec(),
            }
        })
        .collect();
    // rank by score-to-par so partial rounds compare fairly; players with
    // no to-par yet sort last
    players.sort_by(|a, b| {
        let key = |p: &PlayerSummary| (p.to_par.is_none(), p.to_par.unwrap_or(0));
        key(a)
            .cmp(&key(b))
            .then_with(|| a.total.cmp(&b.total))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    ScorecardData {
        round_id: round.round_id.clone(),
        course_name: round.course_details.as_ref().map(|d| d.name.clone()),
        hole_count,
        current_hole: first_incomplete_hole(round, &player_ids, hole_count, None),
        last_updated: format_updated_ago(Utc::now() - round.updated_at),
        players,
    }
}

/// # Errors
///
/// Will return `Err` if the store fails or the round does not exist.
pub async fn get_data_for_scores_page(
    round_id: &str,
    store: &dyn RoundStore,
) -> Result<ScorecardData, StorageError> {
    let round = store
        .load_round(round_id)
        .await?
        .ok_or_else(|| StorageError::NotFound(format!("round {round_id}")))?;
    Ok(build_scorecard(&round))
}

/// Applies one score to a stored round and persists the result before
/// returning the refreshed scorecard.
///
/// # Errors
///
/// Will return `Err` if the store fails or the round does not exist.
pub async fn record_score_and_save(
    round_id: &str,
    player_id: &str,
    hole_number: i32,
    strokes: i32,
    store: &dyn RoundStore,
) -> Result<ScorecardData, StorageError> {
    let round = store
        .load_round(round_id)
        .await?
        .ok_or_else(|| StorageError::NotFound(format!("round {round_id}")))?;

    let mut updated = record_score(&round, player_id, hole_number, strokes);
    updated.updated_at = Utc::now();
    store.save_round(&updated).await?;

    Ok(build_scorecard(&updated))
}
