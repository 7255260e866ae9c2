use crate::model::LeaderboardEntry;
use maud::{Markup, html};

#[must_use]
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> Markup {
    html! {
        h3 { "Leaderboard" }
        table class="styled-table" {
            thead {
                tr {
                    th { "PLACE" }
                    th { "PLAYER" }
                    th { "POINTS" }
                    th { "TOURNAMENTS" }
                }
            }
            tbody {
                @for (i, entry) in entries.iter().enumerate() {
                    tr {
                        td { (i + 1) }
                        td { (entry.player_name) }
                        td { (entry.total_points) }
                        td { (entry.tournament_results.len()) }
                    }
                }
            }
        }
    }
}
