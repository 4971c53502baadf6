//! CSV ingestion for the Plex history export.
//!
//! Parsing is forgiving about the two date columns (a cell that doesn't
//! parse becomes `None` and the row is kept) and strict about everything
//! structural: a missing file or a missing required column aborts startup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::history::PlayEvent;

/// Fixed location of the export, relative to the server's working
/// directory. Read once at startup.
pub const HISTORY_CSV_PATH: &str = "data/plex_history.csv";

/// Columns the export must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "User Alias",
    "Device",
    "Type",
    "Originally Available",
    "Viewed At",
    "Duration_Hrs",
];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't open history export {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("history export is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error("couldn't read history export: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "User Alias")]
    user: String,
    #[serde(rename = "Device")]
    device: String,
    #[serde(rename = "Type")]
    media_type: String,
    #[serde(rename = "Originally Available")]
    originally_available: String,
    #[serde(rename = "Viewed At")]
    viewed_at: String,
    #[serde(rename = "Duration_Hrs")]
    duration_hours: f64,
}

impl HistoryRow {
    fn into_event(self) -> PlayEvent {
        PlayEvent {
            viewed_at: parse_datetime(&self.viewed_at),
            originally_available: parse_date(&self.originally_available),
            user: self.user,
            device: self.device,
            media_type: self.media_type,
            duration_hours: self.duration_hours,
        }
    }
}

/// Load the export from disk.
pub fn load_history(path: &Path) -> Result<Vec<PlayEvent>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_history(file)
}

/// Load the export from any reader. Tests feed byte slices through this.
pub fn read_history<R: Read>(reader: R) -> Result<Vec<PlayEvent>, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);

    let headers = csv.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut events = Vec::new();
    let mut coerced = 0usize;
    for row in csv.deserialize::<HistoryRow>() {
        let row = row?;
        let had_timestamp = !row.viewed_at.trim().is_empty();
        let event = row.into_event();
        if had_timestamp && event.viewed_at.is_none() {
            coerced += 1;
        }
        events.push(event);
    }

    tracing::info!(
        rows = events.len(),
        coerced_timestamps = coerced,
        "loaded history export"
    );
    Ok(events)
}

/// Parse a `Viewed At` cell. Accepts `YYYY-MM-DD HH:MM:SS`, the `T`
/// separated variant (a trailing `Z` is dropped), or a bare date.
fn parse_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    let trimmed = raw.trim().trim_end_matches('Z');
    if trimmed.is_empty() {
        return None;
    }
    PrimitiveDateTime::parse(
        trimmed,
        &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            trimmed,
            &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .ok()
    .or_else(|| parse_date(trimmed).map(Date::midnight))
}

/// Parse an `Originally Available` cell (`YYYY-MM-DD`).
fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Date::parse(trimmed, &format_description!("[year]-[month]-[day]")).ok()
}
