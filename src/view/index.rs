use crate::HTMX_PATH;
use maud::{DOCTYPE, Markup, html};

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
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
                form action="/scores" method="get" {
                    label for="round" { "Round id" }
                    input type="text" id="round" name="round";
                    button type="submit" { "Open scorecard" }
                }
            }
        }
    }
}
