use api::PlayEvent;
use dioxus::prelude::*;

use crate::core::filter::{FilterState, YearChoice};
use crate::dashboard::{
    build_charts, DashboardContext, DeviceShareCard, MediaTypeCard, MonthlyBreakdownCard,
    UserSelect, WatchHoursCard, YearSelect,
};

/// Top-level dashboard page: fetches the history once, then hands the
/// rows to the reactive body.
#[component]
pub fn Dashboard() -> Element {
    let history = use_resource(|| api::fetch_history());

    rsx! {
        section { class: "page page-dashboard",
            h1 { class: "page-dashboard__title", "Plex Review" }

            match &*history.read_unchecked() {
                None => rsx! {
                    p { class: "page-dashboard__status", "Loading viewing history…" }
                },
                Some(Err(err)) => rsx! {
                    p { class: "page-dashboard__status page-dashboard__status--error",
                        "Couldn't load viewing history: {err}"
                    }
                },
                Some(Ok(events)) => rsx! {
                    DashboardBody { events: events.clone() }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(events: Vec<PlayEvent>) -> Element {
    // Derived once from the unfiltered rows; filter changes never rebuild
    // the palette, so colors stay stable even when a filtered view omits
    // some users or devices entirely.
    let ctx = use_memo(move || DashboardContext::new(events.clone()));

    let year = use_signal(YearChoice::default);
    let selected_users = use_signal(|| ctx().users.clone());

    // The whole filter → aggregate → build pass reruns on any control
    // change and swaps all four panels in one step.
    let chart_set = use_memo(move || {
        let filter = FilterState {
            year: year(),
            users: selected_users(),
        };
        build_charts(&ctx(), &filter)
    });

    let context = ctx();
    let charts = chart_set();

    rsx! {
        div { class: "dashboard__controls",
            YearSelect { years: context.years.clone(), selection: year }
            UserSelect { users: context.users.clone(), selection: selected_users }
        }

        div { class: "dashboard__row",
            WatchHoursCard { spec: charts.watch_hours.clone() }
            MonthlyBreakdownCard { spec: charts.monthly.clone() }
        }
        div { class: "dashboard__row",
            MediaTypeCard { spec: charts.media_type.clone() }
            DeviceShareCard { spec: charts.devices.clone() }
        }
    }
}
