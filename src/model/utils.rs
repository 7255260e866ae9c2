use chrono::Duration as ChronoDuration;

/// Compact "time since last save" label for the scorecard header.
#[must_use]
pub fn format_updated_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    if secs >= DAY {
        let days = secs / DAY;
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else if secs >= HOUR {
        let hours = secs / HOUR;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    } else if secs >= MINUTE {
        let minutes = secs / MINUTE;
        let seconds = secs % MINUTE;
        format!("{minutes}m, {seconds}s ago")
    } else if secs == 1 {
        "1 second ago".to_string()
    } else {
        format!("{secs} seconds ago")
    }
}
