//! Formatting helpers for presenting durations.

pub fn format_hours(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0} h")
    } else {
        format!("{value:.1} h")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
