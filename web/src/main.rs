use dioxus::prelude::*;

use ui::views::Dashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();

    // The history export is a startup dependency: refuse to serve
    // without it.
    #[cfg(feature = "server")]
    preload_history();

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn preload_history() {
    use dioxus::logger::tracing::{error, info};

    match api::bootstrap() {
        Ok(events) => info!(rows = events.len(), "viewing history ready"),
        Err(err) => {
            error!("failed to load viewing history: {err}");
            std::process::exit(1);
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Dashboard {}
    }
}
