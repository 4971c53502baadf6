//! Year / user filter state applied before each recomputation.

use api::PlayEvent;

/// The year control: everything, or one specific calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearChoice {
    #[default]
    All,
    Year(i32),
}

/// The current control selection. Owned by the dashboard view's signals
/// and read once per recompute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub year: YearChoice,
    /// Selected user aliases. An empty selection applies no user
    /// constraint at all: clearing every checkbox shows everyone.
    pub users: Vec<String>,
}

impl FilterState {
    pub fn matches(&self, event: &PlayEvent) -> bool {
        if let YearChoice::Year(year) = self.year {
            // Rows whose timestamp didn't parse carry no year and never
            // match a concrete selection.
            if event.year() != Some(year) {
                return false;
            }
        }
        if !self.users.is_empty() && !self.users.iter().any(|user| user == &event.user) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, events: &'a [PlayEvent]) -> Vec<&'a PlayEvent> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::PrimitiveDateTime;

    fn event(user: &str, viewed_at: Option<PrimitiveDateTime>) -> PlayEvent {
        PlayEvent {
            user: user.into(),
            device: "TV".into(),
            media_type: "movie".into(),
            originally_available: None,
            viewed_at,
            duration_hours: 1.0,
        }
    }

    #[test]
    fn default_filter_keeps_everything() {
        let events = vec![
            event("Emma", Some(datetime!(2023-01-01 10:00:00))),
            event("Miles", None),
        ];
        assert_eq!(FilterState::default().apply(&events).len(), 2);
    }

    #[test]
    fn year_filter_excludes_other_years_and_missing_timestamps() {
        let events = vec![
            event("Emma", Some(datetime!(2023-01-01 10:00:00))),
            event("Emma", Some(datetime!(2024-01-01 10:00:00))),
            event("Emma", None),
        ];
        let filter = FilterState {
            year: YearChoice::Year(2023),
            users: Vec::new(),
        };
        let kept = filter.apply(&events);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].year(), Some(2023));
    }

    #[test]
    fn user_filter_keeps_only_members() {
        let events = vec![event("Emma", None), event("Miles", None)];
        let filter = FilterState {
            year: YearChoice::All,
            users: vec!["Miles".into()],
        };
        let kept = filter.apply(&events);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].user, "Miles");
    }

    #[test]
    fn empty_user_selection_applies_no_constraint() {
        let events = vec![event("Emma", None), event("Miles", None)];
        let filter = FilterState {
            year: YearChoice::All,
            users: Vec::new(),
        };
        assert_eq!(filter.apply(&events).len(), 2);
    }

    #[test]
    fn no_matching_year_yields_empty_set() {
        let events = vec![event("Emma", Some(datetime!(2023-01-01 10:00:00)))];
        let filter = FilterState {
            year: YearChoice::Year(1999),
            users: Vec::new(),
        };
        assert!(filter.apply(&events).is_empty());
    }
}
