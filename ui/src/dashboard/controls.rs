use dioxus::prelude::*;

use crate::core::filter::YearChoice;

/// Single-select year dropdown: "ALL" plus every observed year.
#[component]
pub fn YearSelect(years: Vec<i32>, selection: Signal<YearChoice>) -> Element {
    let mut selection = selection;
    let current = match selection() {
        YearChoice::All => "ALL".to_string(),
        YearChoice::Year(year) => year.to_string(),
    };

    rsx! {
        div { class: "dashboard__control",
            label { class: "dashboard__control-label", "Year:" }
            select {
                class: "dashboard__select",
                value: "{current}",
                onchange: move |event| {
                    let choice = match event.value().parse::<i32>() {
                        Ok(year) => YearChoice::Year(year),
                        Err(_) => YearChoice::All,
                    };
                    selection.set(choice);
                },
                option { value: "ALL", "ALL" }
                for year in years.iter() {
                    option { value: "{year}", "{year}" }
                }
            }
        }
    }
}

/// Multi-select user control rendered as checkbox chips; all users start
/// selected. Unchecking everyone leaves the view unfiltered by user.
#[component]
pub fn UserSelect(users: Vec<String>, selection: Signal<Vec<String>>) -> Element {
    let selected = selection();

    rsx! {
        div { class: "dashboard__control",
            label { class: "dashboard__control-label", "User:" }
            div { class: "dashboard__chips",
                for user in users.iter() {
                    {render_chip(user.clone(), selected.iter().any(|u| u == user), selection)}
                }
            }
        }
    }
}

fn render_chip(user: String, checked: bool, mut selection: Signal<Vec<String>>) -> Element {
    let toggle_user = user.clone();

    rsx! {
        label {
            class: format!(
                "dashboard__chip {}",
                if checked { "dashboard__chip--on" } else { "" }
            ),
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| {
                    let mut next = selection();
                    if let Some(position) = next.iter().position(|u| u == &toggle_user) {
                        next.remove(position);
                    } else {
                        next.push(toggle_user.clone());
                    }
                    selection.set(next);
                },
            }
            "{user}"
        }
    }
}
