use crate::controller::score::ScorecardData;
use crate::model::{HoleScore, ScoreDisplay};
use maud::{Markup, html};

struct HoleCell {
    label: String,
    class: &'static str,
}

fn hole_cell(slot: Option<&HoleScore>) -> HoleCell {
    match slot {
        Some(HoleScore::Recorded { strokes, par }) => HoleCell {
            label: strokes.to_string(),
            class: par
                .map(|p| ScoreDisplay::from_diff(strokes - p).css_class())
                .unwrap_or("unknown-par"),
        },
        _ => HoleCell {
            label: "-".to_string(),
            class: "unset",
        },
    }
}

/// Per-hole grid: one column per hole, one row per player. Cells are
/// classed by the golf name of the hole result (birdie, bogey, ...) when
/// the hole's par is known.
#[must_use]
pub fn render_linescore(data: &ScorecardData) -> Markup {
    html! {
        h3 { "Holes" }
        table class="styled-table linescore" {
            thead {
                tr {
                    th { "Player" }
                    @for hole in 1..=data.hole_count {
                        th { (hole) }
                    }
                }
            }
            tbody {
                @for player in &data.players {
                    tr {
                        td { (player.player_id) }
                        @for slot in 0..data.hole_count as usize {
                            @let cell = hole_cell(player.holes.get(slot));
                            td class=(cell.class) { (cell.label) }
                        }
                    }
                }
            }
        }
    }
}
