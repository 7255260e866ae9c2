use crate::controller::score::ScorecardData;
use maud::{Markup, html};

#[must_use]
pub fn render_standings(data: &ScorecardData) -> Markup {
    html! {
        @if !data.players.is_empty() {
            h3 { "Standings" }

            table class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        th { "TOTAL" }
                        th { "TO PAR" }
                    }
                }
                tbody {
                    @for (i, player) in data.players.iter().enumerate() {
                        tr {
                            td { (i + 1) }
                            td { (player.player_id) }
                            td { (player.total) }
                            td { (player.to_par_display) }
                        }
                    }
                }
            }
        }
        @else {
            p { "No scores recorded yet" }
        }
    }
}
