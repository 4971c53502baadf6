//! Deterministic color assignment for users and devices.
//!
//! Both maps are built exactly once, from the *unfiltered* dataset, in
//! first-seen row order. Filtered views reuse them, so a user or device
//! keeps its color no matter which filters are active.

use std::collections::{HashMap, HashSet};

use api::PlayEvent;

/// Fallback for keys that never made it into a map.
pub const FALLBACK_COLOR: &str = "grey";

/// Qualitative palette for user series.
pub const USER_PALETTE: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

/// Softer palette for device slices.
pub const DEVICE_PALETTE: [&str; 12] = [
    "#66c5cc", "#f6cf71", "#f89c74", "#dcb0f2", "#87c55f", "#9eb9f3", "#fe88b1", "#c9db74",
    "#8be0a4", "#b497e7", "#d3b484", "#b3b3b3",
];

/// Default series colors for charts without a custom map (media types).
pub const SERIES_PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Categorical key → CSS color, fixed for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    colors: HashMap<String, &'static str>,
}

impl ColorMap {
    /// Assign `palette[i % palette.len()]` to each key in order. Callers
    /// pass the first-seen distinct list, so assignment is deterministic
    /// and row-order dependent, not alphabetical.
    pub fn assign<I, S>(keys: I, palette: &'static [&'static str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key.into(), palette[i % palette.len()]))
            .collect();
        Self { colors }
    }

    pub fn color(&self, key: &str) -> &'static str {
        self.colors.get(key).copied().unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Distinct values of one field in first-seen row order.
pub fn first_seen<'a, F>(events: &'a [PlayEvent], mut field: F) -> Vec<String>
where
    F: FnMut(&'a PlayEvent) -> &'a str,
{
    let mut index = HashSet::new();
    let mut ordered = Vec::new();
    for event in events {
        let value = field(event);
        if index.insert(value) {
            ordered.push(value.to_string());
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(user: &str, device: &str) -> PlayEvent {
        PlayEvent {
            user: user.into(),
            device: device.into(),
            media_type: "movie".into(),
            originally_available: None,
            viewed_at: None,
            duration_hours: 1.0,
        }
    }

    #[test]
    fn first_seen_keeps_row_order() {
        let events = vec![
            event("Miles", "iPhone"),
            event("Emma", "TV"),
            event("Miles", "TV"),
            event("Priya", "iPhone"),
        ];
        assert_eq!(
            first_seen(&events, |e| e.user.as_str()),
            vec!["Miles", "Emma", "Priya"]
        );
        assert_eq!(
            first_seen(&events, |e| e.device.as_str()),
            vec!["iPhone", "TV"]
        );
    }

    #[test]
    fn assigns_palette_colors_in_order() {
        let map = ColorMap::assign(["Miles", "Emma"], &USER_PALETTE);
        assert_eq!(map.color("Miles"), USER_PALETTE[0]);
        assert_eq!(map.color("Emma"), USER_PALETTE[1]);
    }

    #[test]
    fn palette_wraps_when_exhausted() {
        let keys: Vec<String> = (0..USER_PALETTE.len() + 2)
            .map(|i| format!("user-{i}"))
            .collect();
        let map = ColorMap::assign(keys.iter().cloned(), &USER_PALETTE);
        assert_eq!(map.color(&keys[USER_PALETTE.len()]), USER_PALETTE[0]);
        assert_eq!(map.color(&keys[USER_PALETTE.len() + 1]), USER_PALETTE[1]);
    }

    #[test]
    fn unknown_keys_fall_back_to_grey() {
        let map = ColorMap::assign(["Emma"], &USER_PALETTE);
        assert_eq!(map.color("nobody"), FALLBACK_COLOR);
        assert_eq!(ColorMap::default().color("anyone"), FALLBACK_COLOR);
    }
}
