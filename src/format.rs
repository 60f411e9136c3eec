use chrono::{NaiveDate, NaiveTime};

/// Renders a release date as e.g. `Monday, Sep 1, 2025`; absent dates render
/// as the empty string so optional form fields stay blank in the prompt.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%A, %b %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// Renders a release time in 12-hour form with no space before the meridiem,
/// e.g. `14:05` becomes `2:05PM`; absent times render as the empty string.
pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format("%-I:%M%p").to_string(),
        None => String::new(),
    }
}
