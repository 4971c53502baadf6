//! End-to-end properties of the filter → aggregate → chart pass, checked
//! over assorted filter combinations.

use api::PlayEvent;
use time::macros::datetime;
use time::PrimitiveDateTime;
use ui::core::filter::{FilterState, YearChoice};
use ui::dashboard::{build_charts, DashboardContext};

fn event(
    user: &str,
    device: &str,
    media_type: &str,
    viewed_at: Option<PrimitiveDateTime>,
    hours: f64,
) -> PlayEvent {
    PlayEvent {
        user: user.into(),
        device: device.into(),
        media_type: media_type.into(),
        originally_available: None,
        viewed_at,
        duration_hours: hours,
    }
}

fn sample_events() -> Vec<PlayEvent> {
    vec![
        event(
            "Emma",
            "Living Room TV",
            "movie",
            Some(datetime!(2023-03-04 20:00:00)),
            2.0,
        ),
        event(
            "Miles",
            "iPhone",
            "episode",
            Some(datetime!(2023-03-05 08:30:00)),
            0.7,
        ),
        event(
            "Miles",
            "Shield",
            "movie",
            Some(datetime!(2023-04-10 21:00:00)),
            2.3,
        ),
        event(
            "Emma",
            "iPhone",
            "episode",
            Some(datetime!(2024-01-13 08:00:00)),
            0.8,
        ),
        event(
            "Priya",
            "Chrome",
            "movie",
            Some(datetime!(2024-02-09 21:30:00)),
            1.9,
        ),
        // Timestamp that failed to parse: no month or year, still watched.
        event("Priya", "Chrome", "movie", None, 1.7),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assorted_filters() -> Vec<FilterState> {
    vec![
        FilterState::default(),
        FilterState {
            year: YearChoice::Year(2023),
            users: Vec::new(),
        },
        FilterState {
            year: YearChoice::All,
            users: vec!["Miles".into(), "Priya".into()],
        },
        FilterState {
            year: YearChoice::Year(2024),
            users: vec!["Emma".into()],
        },
        FilterState {
            year: YearChoice::Year(1999),
            users: Vec::new(),
        },
    ]
}

#[test]
fn displayed_totals_match_filtered_sums() {
    let ctx = DashboardContext::new(sample_events());

    for filter in assorted_filters() {
        let charts = build_charts(&ctx, &filter);
        let filtered = filter.apply(&ctx.events);

        let filtered_sum: f64 = filtered.iter().map(|e| e.duration_hours).sum();
        let bars_sum: f64 = charts.watch_hours.bars.iter().map(|b| b.value).sum();
        assert!(
            close(bars_sum, filtered_sum),
            "watch-hours total {bars_sum} != filtered total {filtered_sum} for {filter:?}"
        );

        for bar in &charts.watch_hours.bars {
            let expected: f64 = filtered
                .iter()
                .filter(|e| e.user == bar.label)
                .map(|e| e.duration_hours)
                .sum();
            assert!(close(bar.value, expected), "user {} mismatch", bar.label);
        }

        let slice_sum: f64 = charts.devices.slices.iter().map(|s| s.value).sum();
        assert!(close(slice_sum, filtered_sum));

        // The media-type pivot covers every filtered row as well.
        let media_sum: f64 = charts
            .media_type
            .series
            .iter()
            .flat_map(|series| series.values.iter())
            .sum();
        assert!(close(media_sum, filtered_sum));
    }
}

#[test]
fn user_totals_are_non_increasing() {
    let ctx = DashboardContext::new(sample_events());

    for filter in assorted_filters() {
        let charts = build_charts(&ctx, &filter);
        let values: Vec<f64> = charts.watch_hours.bars.iter().map(|b| b.value).collect();
        assert!(
            values.windows(2).all(|pair| pair[0] >= pair[1]),
            "bars not sorted for {filter:?}: {values:?}"
        );
    }
}

#[test]
fn monthly_pivot_always_spans_the_calendar() {
    let ctx = DashboardContext::new(sample_events());

    for filter in assorted_filters() {
        let charts = build_charts(&ctx, &filter);
        assert_eq!(charts.monthly.x_labels.len(), 12);
        assert_eq!(charts.monthly.x_labels[0], "January");
        assert_eq!(charts.monthly.x_labels[11], "December");
        for series in &charts.monthly.series {
            assert_eq!(series.values.len(), 12);
        }
    }
}

#[test]
fn colors_are_invariant_across_filters() {
    let ctx = DashboardContext::new(sample_events());
    let unfiltered = build_charts(&ctx, &FilterState::default());

    let color_of = |charts: &ui::dashboard::ChartSet, user: &str| {
        charts
            .watch_hours
            .bars
            .iter()
            .find(|bar| bar.label == user)
            .map(|bar| bar.color.clone())
    };

    for filter in assorted_filters() {
        let charts = build_charts(&ctx, &filter);
        for bar in &charts.watch_hours.bars {
            assert_eq!(Some(bar.color.clone()), color_of(&unfiltered, &bar.label));
        }
        for slice in &charts.devices.slices {
            assert_eq!(slice.color, ctx.device_colors.color(&slice.label));
        }
    }
}

#[test]
fn year_with_no_rows_renders_empty_charts() {
    let ctx = DashboardContext::new(sample_events());
    let filter = FilterState {
        year: YearChoice::Year(1999),
        users: Vec::new(),
    };
    let charts = build_charts(&ctx, &filter);

    assert!(charts.watch_hours.bars.is_empty());
    assert!(charts.monthly.series.is_empty());
    assert_eq!(charts.monthly.x_labels.len(), 12);
    assert!(charts.media_type.series.is_empty());
    assert!(charts.devices.slices.is_empty());
}

#[test]
fn empty_user_selection_behaves_like_all_users() {
    let ctx = DashboardContext::new(sample_events());

    let none_selected = build_charts(
        &ctx,
        &FilterState {
            year: YearChoice::Year(2023),
            users: Vec::new(),
        },
    );
    let all_selected = build_charts(
        &ctx,
        &FilterState {
            year: YearChoice::Year(2023),
            users: ctx.users.clone(),
        },
    );

    assert_eq!(none_selected, all_selected);
}
