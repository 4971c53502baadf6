//! Playback-history data model shared between the server and the UI.

use serde::{Deserialize, Serialize};
use time::{Date, Month, PrimitiveDateTime};

/// One playback session from the Plex history export.
///
/// Rows are immutable once loaded; the dashboard only ever filters the
/// full collection into derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    /// Display alias of the account that watched.
    pub user: String,
    /// Name of the playback device or client.
    pub device: String,
    /// Media kind as exported, e.g. `movie` or `episode`.
    pub media_type: String,
    /// Original release date of the item, when the export carried one.
    pub originally_available: Option<Date>,
    /// When playback happened. `None` when the export cell didn't parse;
    /// such rows stay in the dataset but carry no month or year.
    pub viewed_at: Option<PrimitiveDateTime>,
    /// Session length in hours.
    pub duration_hours: f64,
}

impl PlayEvent {
    /// Calendar year of playback, if the timestamp survived parsing.
    pub fn year(&self) -> Option<i32> {
        self.viewed_at.map(|ts| ts.year())
    }

    /// Calendar month of playback, if the timestamp survived parsing.
    pub fn month(&self) -> Option<Month> {
        self.viewed_at.map(|ts| ts.month())
    }
}
