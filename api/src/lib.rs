//! Server-side history loading and the server-fn bridge to the UI.

pub mod history;
pub mod loader;

pub use history::PlayEvent;
pub use loader::{LoadError, HISTORY_CSV_PATH};

use dioxus::prelude::*;

#[cfg(feature = "server")]
mod served {
    use std::path::Path;

    use once_cell::sync::OnceCell;

    use crate::history::PlayEvent;
    use crate::loader::{self, LoadError, HISTORY_CSV_PATH};

    static HISTORY: OnceCell<Vec<PlayEvent>> = OnceCell::new();

    /// Load the export into the process-wide cache. The launcher calls
    /// this once before serving so a broken export fails startup instead
    /// of the first request.
    pub fn bootstrap() -> Result<&'static [PlayEvent], LoadError> {
        history().map(Vec::as_slice)
    }

    pub(crate) fn history() -> Result<&'static Vec<PlayEvent>, LoadError> {
        HISTORY.get_or_try_init(|| loader::load_history(Path::new(HISTORY_CSV_PATH)))
    }
}

#[cfg(feature = "server")]
pub use served::bootstrap;

/// Hand the full loaded history to the client. The dataset is loaded once
/// per process; every call serves the same collection.
#[server]
pub async fn fetch_history() -> Result<Vec<PlayEvent>, ServerFnError> {
    let events = served::history().map_err(|err| ServerFnError::new(err.to_string()))?;
    Ok(events.clone())
}
