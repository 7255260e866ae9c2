use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One slot on a player's scorecard. The slot's position in the sequence
/// encodes the hole number (slot `i` is hole `i + 1`), so an `Unset`
/// placeholder carries no data of its own.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HoleScore {
    Recorded { strokes: i32, par: Option<i32> },
    Unset,
}

impl HoleScore {
    #[must_use]
    pub fn strokes(&self) -> Option<i32> {
        match self {
            Self::Recorded { strokes, .. } => Some(*strokes),
            Self::Unset => None,
        }
    }

    #[must_use]
    pub fn par(&self) -> Option<i32> {
        match self {
            Self::Recorded { par, .. } => *par,
            Self::Unset => None,
        }
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseDetails {
    pub name: String,
    /// Hole count for the round, one of 9, 18, 27, 36 when known.
    pub holes: Option<i32>,
    /// Total par for the course; per-hole par is derived from this when a
    /// richer course record is not attached.
    pub par: Option<i32>,
}

/// One scored session of play within a tournament or tour.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    pub round_id: String,
    pub course_details: Option<CourseDetails>,
    /// Player id -> scorecard. Sequences may be shorter than the hole count;
    /// trailing holes are treated as unset.
    pub scores: HashMap<String, Vec<HoleScore>>,
    pub updated_at: DateTime<Utc>,
}

impl Round {
    #[must_use]
    pub fn new(round_id: impl Into<String>, course_details: Option<CourseDetails>) -> Self {
        Self {
            round_id: round_id.into(),
            course_details,
            scores: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// The player's scorecard, or an empty slice for an unknown player.
    #[must_use]
    pub fn player_scores(&self, player_id: &str) -> &[HoleScore] {
        self.scores.get(player_id).map_or(&[], Vec::as_slice)
    }
}

/// Golf naming for a single hole's strokes relative to par, used by the
/// scorecard view to pick a cell style.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyOrWorse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            _ => ScoreDisplay::TripleBogeyOrWorse,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::TripleBogeyOrWorse => "triple-bogey",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(diff: i32) -> Self {
        Self::from_diff(diff)
    }
}
