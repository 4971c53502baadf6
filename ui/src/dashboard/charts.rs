use dioxus::prelude::*;

use crate::core::charts::{BarSpec, PieSpec, StackedBarSpec};

use super::svg::{BarSvg, PieSvg, StackedBarSvg};

#[component]
pub fn WatchHoursCard(spec: BarSpec) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { "{spec.title}" }
            }
            if spec.bars.is_empty() {
                p { class: "chart-card__placeholder", "No playback matches the current filters." }
            } else {
                BarSvg { spec: spec.clone() }
            }
        }
    }
}

#[component]
pub fn MonthlyBreakdownCard(spec: StackedBarSpec) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { "{spec.title}" }
            }
            if spec.series.is_empty() {
                p { class: "chart-card__placeholder", "No playback matches the current filters." }
            } else {
                StackedBarSvg { spec: spec.clone() }
            }
        }
    }
}

#[component]
pub fn MediaTypeCard(spec: StackedBarSpec) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { "{spec.title}" }
            }
            if spec.series.is_empty() {
                p { class: "chart-card__placeholder", "No playback matches the current filters." }
            } else {
                StackedBarSvg { spec: spec.clone() }
            }
        }
    }
}

#[component]
pub fn DeviceShareCard(spec: PieSpec) -> Element {
    let total: f64 = spec.slices.iter().map(|slice| slice.value.max(0.0)).sum();

    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { "{spec.title}" }
            }
            if total <= 0.0 {
                p { class: "chart-card__placeholder", "No playback matches the current filters." }
            } else {
                PieSvg { spec: spec.clone() }
            }
        }
    }
}
