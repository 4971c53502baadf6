mod controls;
pub use controls::{UserSelect, YearSelect};

mod charts;
pub use charts::{DeviceShareCard, MediaTypeCard, MonthlyBreakdownCard, WatchHoursCard};

mod svg;

use api::PlayEvent;

use crate::core::aggregate;
use crate::core::charts::{self as core_charts, BarSpec, PieSpec, StackedBarSpec};
use crate::core::filter::FilterState;
use crate::core::palette::{first_seen, ColorMap, DEVICE_PALETTE, USER_PALETTE};

/// Everything the dashboard derives exactly once from the unfiltered
/// dataset. Filter changes never touch this, which is what keeps user and
/// device colors stable across selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardContext {
    pub events: Vec<PlayEvent>,
    /// Distinct users in first-seen order (drives the user control and
    /// the palette).
    pub users: Vec<String>,
    /// Distinct playback years in first-seen order (drives the year
    /// control).
    pub years: Vec<i32>,
    pub user_colors: ColorMap,
    pub device_colors: ColorMap,
}

impl DashboardContext {
    pub fn new(events: Vec<PlayEvent>) -> Self {
        let users = first_seen(&events, |event| event.user.as_str());
        let devices = first_seen(&events, |event| event.device.as_str());
        let user_colors = ColorMap::assign(users.iter().cloned(), &USER_PALETTE);
        let device_colors = ColorMap::assign(devices, &DEVICE_PALETTE);
        let years = distinct_years(&events);
        Self {
            events,
            users,
            years,
            user_colors,
            device_colors,
        }
    }
}

fn distinct_years(events: &[PlayEvent]) -> Vec<i32> {
    let mut years = Vec::new();
    for event in events {
        if let Some(year) = event.year() {
            if !years.contains(&year) {
                years.push(year);
            }
        }
    }
    years
}

/// One recompute pass: all four chart specs, swapped in together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub watch_hours: BarSpec,
    pub monthly: StackedBarSpec,
    pub media_type: StackedBarSpec,
    pub devices: PieSpec,
}

/// Filter → aggregate → build, shared by the initial render and every
/// control change.
pub fn build_charts(ctx: &DashboardContext, filter: &FilterState) -> ChartSet {
    let filtered = filter.apply(&ctx.events);
    ChartSet {
        watch_hours: core_charts::watch_hours_chart(
            &aggregate::hours_by_user(filtered.iter().copied()),
            &ctx.user_colors,
        ),
        monthly: core_charts::monthly_breakdown_chart(
            &aggregate::hours_by_user_month(filtered.iter().copied()),
            &ctx.user_colors,
        ),
        media_type: core_charts::media_type_chart(&aggregate::hours_by_user_type(
            filtered.iter().copied(),
        )),
        devices: core_charts::device_share_chart(
            &aggregate::hours_by_device(filtered.iter().copied()),
            &ctx.device_colors,
        ),
    }
}
