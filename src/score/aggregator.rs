use crate::model::{HoleScore, Round};

/// Hole count assumed when a round knows its total par but not how many
/// holes it has.
pub const DEFAULT_HOLE_COUNT: i32 = 18;

/// Per-hole par derived by spreading the course total evenly across the
/// holes (integer floor). `None` unless both the total par and the hole
/// count are known. The derived value is the same for every hole; the hole
/// number is part of the signature because callers derive par at record
/// time, per hole.
#[must_use]
pub fn derived_hole_par(round: &Round, _hole_number: i32) -> Option<i32> {
    let details = round.course_details.as_ref()?;
    let par = details.par?;
    let holes = details.holes?;
    if holes <= 0 {
        return None;
    }
    Some(par / holes)
}

/// Returns a new round with `strokes` recorded for the player at
/// `hole_number`. The player's scorecard is extended with `Unset`
/// placeholders so the target slot exists; earlier recorded holes are left
/// untouched.
///
/// `hole_number` below 1 is clamped to 1. No upper bound is enforced
/// against `course_details.holes`: recording hole 19 on an 18-hole round
/// simply extends the scorecard, matching the permissive behavior callers
/// rely on. Persisting the result is the caller's job.
#[must_use]
pub fn record_score(round: &Round, player_id: &str, hole_number: i32, strokes: i32) -> Round {
    let par = derived_hole_par(round, hole_number);
    let slot = (hole_number.max(1) as usize) - 1;

    let mut updated = round.clone();
    let scorecard = updated.scores.entry(player_id.to_string()).or_default();
    while scorecard.len() <= slot {
        scorecard.push(HoleScore::Unset);
    }
    scorecard[slot] = HoleScore::Recorded { strokes, par };
    updated
}

/// Sum of recorded strokes; unset holes contribute 0, unknown players
/// total 0.
#[must_use]
pub fn total_score(round: &Round, player_id: &str) -> i32 {
    round
        .player_scores(player_id)
        .iter()
        .filter_map(HoleScore::strokes)
        .sum()
}

/// Strokes relative to par over the holes played so far. Only recorded
/// holes contribute to both sides of the subtraction, so partial rounds
/// compare fairly. `None` when the course total par is unknown or the
/// player has not recorded a single hole.
#[must_use]
pub fn score_to_par(round: &Round, player_id: &str) -> Option<i32> {
    let details = round.course_details.as_ref()?;
    let course_par = details.par?;
    let hole_count = details.holes.unwrap_or(DEFAULT_HOLE_COUNT);
    let fallback_par = course_par / hole_count.max(1);

    let mut total_strokes = 0;
    let mut total_par = 0;
    let mut any_recorded = false;
    for hole in round.player_scores(player_id) {
        if let HoleScore::Recorded { strokes, par } = hole {
            any_recorded = true;
            total_strokes += strokes;
            total_par += par.unwrap_or(fallback_par);
        }
    }

    if any_recorded {
        Some(total_strokes - total_par)
    } else {
        None
    }
}

/// `None` and 0 render as even; positive gains an explicit sign.
#[must_use]
pub fn format_score_to_par(n: Option<i32>) -> String {
    match n {
        None | Some(0) => "E".to_string(),
        Some(n) if n > 0 => format!("+{n}"),
        Some(n) => n.to_string(),
    }
}

/// True iff every listed player has a recorded score at `hole_number`.
#[must_use]
pub fn is_hole_complete(round: &Round, group_players: &[String], hole_number: i32) -> bool {
    if hole_number < 1 {
        return false;
    }
    let slot = (hole_number as usize) - 1;
    group_players.iter().all(|player_id| {
        round
            .player_scores(player_id)
            .get(slot)
            .is_some_and(HoleScore::is_recorded)
    })
}

/// Hole to select when a scoring session opens: the first hole not yet
/// complete for the whole group, scanning in order. When every hole is
/// complete the current selection is kept (hole 1 if never set).
#[must_use]
pub fn first_incomplete_hole(
    round: &Round,
    group_players: &[String],
    hole_count: i32,
    current: Option<i32>,
) -> i32 {
    for hole_number in 1..=hole_count {
        if !is_hole_complete(round, group_players, hole_number) {
            return hole_number;
        }
    }
    current.unwrap_or(1)
}
