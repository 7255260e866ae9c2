use super::{render_linescore, render_standings};
use crate::HTMX_PATH;
use crate::controller::score::ScorecardData;
use maud::{DOCTYPE, Markup, html};

#[must_use]
pub fn render_scores_template(data: &ScorecardData) -> Markup {
    let title = data.course_name.as_deref().unwrap_or("Scorecard");
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(HTMX_PATH) {}
                link rel="stylesheet" href="/static/styles.css";
            }
            body {
                h1 { (title) }
                p class="refresh" {
                    "Round " (data.round_id)
                    " · hole " (data.current_hole)
                    " · updated " (data.last_updated)
                }
                (render_standings(data))
                (render_linescore(data))
            }
        }
    }
}
