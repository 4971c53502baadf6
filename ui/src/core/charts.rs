//! Chart-spec builders: pure mappings from aggregate tables to the values
//! the SVG components render. No computation happens here beyond what the
//! aggregation pipeline already produced, and every builder accepts an
//! empty table.

use crate::core::aggregate::PivotTable;
use crate::core::palette::{ColorMap, SERIES_PALETTE};

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    /// One value per x slot, zero-filled.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedBarSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<BarSeries>,
    pub rotate_x_labels: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Bars in display order (already sorted by the pipeline).
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Stacked bar of watch hours by month, one series per user, months in
/// fixed calendar order with rotated labels.
pub fn monthly_breakdown_chart(pivot: &PivotTable, user_colors: &ColorMap) -> StackedBarSpec {
    StackedBarSpec {
        title: "Monthly Breakdown per User".into(),
        x_title: "Month".into(),
        y_title: "Duration in Hours".into(),
        legend_title: "User".into(),
        x_labels: pivot.rows.clone(),
        series: pivot
            .columns
            .iter()
            .enumerate()
            .map(|(i, user)| BarSeries {
                name: user.clone(),
                color: user_colors.color(user).to_string(),
                values: pivot.column_values(i),
            })
            .collect(),
        rotate_x_labels: true,
    }
}

/// One bar per user in the pipeline's descending-duration order.
pub fn watch_hours_chart(totals: &[(String, f64)], user_colors: &ColorMap) -> BarSpec {
    BarSpec {
        title: "Screen Time: User Watch Hour Statistics".into(),
        x_title: "User".into(),
        y_title: "Duration in Hours".into(),
        bars: totals
            .iter()
            .map(|(user, hours)| Bar {
                label: user.clone(),
                value: *hours,
                color: user_colors.color(user).to_string(),
            })
            .collect(),
    }
}

/// Stacked bar of watch hours by media type, one x slot per user. Media
/// types use the default series palette, not the per-user map.
pub fn media_type_chart(pivot: &PivotTable) -> StackedBarSpec {
    StackedBarSpec {
        title: "User Preferences in Content Type and Movie Genres".into(),
        x_title: "Users".into(),
        y_title: "Duration in Hours".into(),
        legend_title: "Media Type".into(),
        x_labels: pivot.rows.clone(),
        series: pivot
            .columns
            .iter()
            .enumerate()
            .map(|(i, media_type)| BarSeries {
                name: media_type.clone(),
                color: SERIES_PALETTE[i % SERIES_PALETTE.len()].to_string(),
                values: pivot.column_values(i),
            })
            .collect(),
        rotate_x_labels: false,
    }
}

/// Pie of watch hours per device. Slice colors come from the
/// process-lifetime device map, keyed by device name, so a filtered
/// subset keeps the colors of the full view.
pub fn device_share_chart(totals: &[(String, f64)], device_colors: &ColorMap) -> PieSpec {
    PieSpec {
        title: "Hours Spent Across Viewing Platforms".into(),
        slices: totals
            .iter()
            .map(|(device, hours)| PieSlice {
                label: device.clone(),
                value: *hours,
                color: device_colors.color(device).to_string(),
            })
            .collect(),
    }
}
