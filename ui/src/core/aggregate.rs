//! The aggregation pipeline. Every chart derives from one of the four
//! tables produced here; the whole pass reruns over the filtered
//! collection on each filter change, with no incremental state.

use std::collections::{BTreeMap, BTreeSet};

use api::PlayEvent;
use time::Month;

/// Calendar-ordered months; the monthly pivot is always indexed by
/// exactly these twelve rows, whether or not they hold data.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

fn month_index(month: Month) -> usize {
    u8::from(month) as usize - 1
}

/// A pivoted aggregate: `cells[row][column]`, zero-filled for
/// combinations with no activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Values of one column across all rows, in row order.
    pub fn column_values(&self, column: usize) -> Vec<f64> {
        self.cells
            .iter()
            .map(|row| row.get(column).copied().unwrap_or(0.0))
            .collect()
    }
}

/// Watch hours by (user, calendar month). Rows whose timestamp didn't
/// parse carry no month and are excluded here — and only here.
pub fn hours_by_user_month<'a, I>(events: I) -> PivotTable
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut by_user: BTreeMap<&str, [f64; 12]> = BTreeMap::new();
    for event in events {
        if let Some(ts) = event.viewed_at {
            by_user.entry(event.user.as_str()).or_insert([0.0; 12])[month_index(ts.month())] +=
                event.duration_hours;
        }
    }

    let rows = MONTHS.iter().map(|m| month_name(*m).to_string()).collect();
    let columns = by_user.keys().map(|user| user.to_string()).collect();
    let cells = (0..MONTHS.len())
        .map(|month| by_user.values().map(|per_month| per_month[month]).collect())
        .collect();
    PivotTable {
        rows,
        columns,
        cells,
    }
}

/// Total watch hours per user, descending. The sort is stable, so ties
/// keep the grouped (lexicographic) order.
pub fn hours_by_user<'a, I>(events: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for event in events {
        *grouped.entry(event.user.as_str()).or_insert(0.0) += event.duration_hours;
    }

    let mut totals: Vec<(String, f64)> = grouped
        .into_iter()
        .map(|(user, hours)| (user.to_string(), hours))
        .collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Watch hours by (user, media type), pivoted to one row per user with
/// one column per type observed anywhere in the input.
pub fn hours_by_user_type<'a, I>(events: I) -> PivotTable
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut by_user: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    let mut types: BTreeSet<&str> = BTreeSet::new();
    for event in events {
        types.insert(event.media_type.as_str());
        *by_user
            .entry(event.user.as_str())
            .or_default()
            .entry(event.media_type.as_str())
            .or_insert(0.0) += event.duration_hours;
    }

    let rows: Vec<String> = by_user.keys().map(|user| user.to_string()).collect();
    let cells = by_user
        .values()
        .map(|per_type| {
            types
                .iter()
                .map(|ty| per_type.get(ty).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();
    let columns = types.into_iter().map(|ty| ty.to_string()).collect();
    PivotTable {
        rows,
        columns,
        cells,
    }
}

/// Total watch hours per device, in lexicographic device order.
pub fn hours_by_device<'a, I>(events: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for event in events {
        *grouped.entry(event.device.as_str()).or_insert(0.0) += event.duration_hours;
    }
    grouped
        .into_iter()
        .map(|(device, hours)| (device.to_string(), hours))
        .collect()
}
