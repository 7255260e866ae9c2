use crate::model::HoleInfo;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParTotals {
    pub front: i32,
    pub back: i32,
    pub total: i32,
}

/// Front nine, back nine, and total par. Derived on demand whenever a
/// hole's par changes; there is no stored total to keep in sync.
#[must_use]
pub fn calculate_total_par(holes: &[HoleInfo]) -> ParTotals {
    let front: i32 = holes.iter().take(9).map(|h| h.par).sum();
    let back: i32 = holes.iter().skip(9).take(9).map(|h| h.par).sum();
    ParTotals {
        front,
        back,
        total: front + back,
    }
}
