//! Inline-SVG renderers for the chart specs. All layout math happens up
//! front in plain structs; the rsx blocks only place what was computed.

use std::f64::consts::{PI, TAU};

use dioxus::prelude::*;

use crate::core::charts::{BarSpec, PieSpec, StackedBarSpec};
use crate::core::format;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_LEFT: f64 = 56.0;

struct PlotRect {
    x: String,
    y: String,
    width: String,
    height: String,
    color: String,
    tooltip: String,
}

struct Tick {
    y: String,
    label: String,
}

struct AxisLabel {
    x: String,
    y: String,
    text: String,
}

impl AxisLabel {
    fn new(x: f64, y: f64, text: String) -> Self {
        Self {
            x: fmt_coord(x),
            y: fmt_coord(y),
            text,
        }
    }
}

struct LegendEntry {
    y: f64,
    name: String,
    color: String,
}

/// Stacked bars with a right-hand legend; x labels optionally rotated.
#[component]
pub fn StackedBarSvg(spec: StackedBarSpec) -> Element {
    let margin_right = 150.0;
    let margin_bottom = if spec.rotate_x_labels { 84.0 } else { 56.0 };
    let plot_w = WIDTH - MARGIN_LEFT - margin_right;
    let plot_h = HEIGHT - MARGIN_TOP - margin_bottom;
    let baseline = MARGIN_TOP + plot_h;

    let slots = spec.x_labels.len();
    let stack_totals: Vec<f64> = (0..slots)
        .map(|i| {
            spec.series
                .iter()
                .map(|series| series.values.get(i).copied().unwrap_or(0.0).max(0.0))
                .sum()
        })
        .collect();
    let y_max = nice_max(stack_totals.iter().copied().fold(0.0, f64::max));

    let slot_w = if slots > 0 { plot_w / slots as f64 } else { plot_w };
    let bar_w = slot_w * 0.68;

    let mut rects = Vec::new();
    for (i, label) in spec.x_labels.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot_w + (slot_w - bar_w) / 2.0;
        let mut cumulative = 0.0;
        for series in &spec.series {
            let value = series.values.get(i).copied().unwrap_or(0.0).max(0.0);
            if value <= 0.0 {
                continue;
            }
            let y_bottom = y_on_scale(cumulative, y_max, plot_h);
            let y_top = y_on_scale(cumulative + value, y_max, plot_h);
            rects.push(PlotRect {
                x: fmt_coord(x),
                y: fmt_coord(y_top),
                width: fmt_coord(bar_w),
                height: fmt_coord(y_bottom - y_top),
                color: series.color.clone(),
                tooltip: format!("{} · {} · {}", series.name, label, format::format_hours(value)),
            });
            cumulative += value;
        }
    }

    let ticks = axis_ticks(y_max, plot_h);
    let x_labels: Vec<AxisLabel> = spec
        .x_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            AxisLabel::new(
                MARGIN_LEFT + i as f64 * slot_w + slot_w / 2.0,
                baseline + 16.0,
                label.clone(),
            )
        })
        .collect();
    let legend: Vec<LegendEntry> = spec
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| LegendEntry {
            y: MARGIN_TOP + 22.0 + i as f64 * 18.0,
            name: series.name.clone(),
            color: series.color.clone(),
        })
        .collect();
    let legend_x = WIDTH - margin_right + 16.0;
    let rotate = spec.rotate_x_labels;

    rsx! {
        svg {
            class: "chart-card__plot",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            role: "img",

            // y axis grid and tick labels
            for tick in ticks.iter() {
                line {
                    x1: "{MARGIN_LEFT}",
                    x2: "{MARGIN_LEFT + plot_w}",
                    y1: "{tick.y}",
                    y2: "{tick.y}",
                    class: "chart-card__grid",
                }
                text {
                    x: "{MARGIN_LEFT - 8.0}",
                    y: "{tick.y}",
                    class: "chart-card__tick",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }

            for rect in rects.iter() {
                rect {
                    x: "{rect.x}",
                    y: "{rect.y}",
                    width: "{rect.width}",
                    height: "{rect.height}",
                    fill: "{rect.color}",
                    title { "{rect.tooltip}" }
                }
            }

            line {
                x1: "{MARGIN_LEFT}",
                x2: "{MARGIN_LEFT + plot_w}",
                y1: "{baseline}",
                y2: "{baseline}",
                class: "chart-card__axis",
            }

            for label in x_labels.iter() {
                if rotate {
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        class: "chart-card__tick",
                        text_anchor: "end",
                        transform: "rotate(-45 {label.x} {label.y})",
                        "{label.text}"
                    }
                } else {
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        class: "chart-card__tick",
                        text_anchor: "middle",
                        "{label.text}"
                    }
                }
            }

            text {
                x: "{MARGIN_LEFT + plot_w / 2.0}",
                y: "{HEIGHT - 6.0}",
                class: "chart-card__axis-title",
                text_anchor: "middle",
                "{spec.x_title}"
            }
            text {
                x: "14",
                y: "{MARGIN_TOP + plot_h / 2.0}",
                class: "chart-card__axis-title",
                text_anchor: "middle",
                transform: "rotate(-90 14 {MARGIN_TOP + plot_h / 2.0})",
                "{spec.y_title}"
            }

            // legend
            text {
                x: "{legend_x}",
                y: "{MARGIN_TOP + 6.0}",
                class: "chart-card__legend-title",
                "{spec.legend_title}"
            }
            for entry in legend.iter() {
                rect {
                    x: "{legend_x}",
                    y: "{entry.y - 9.0}",
                    width: "12",
                    height: "12",
                    fill: "{entry.color}",
                }
                text {
                    x: "{legend_x + 18.0}",
                    y: "{entry.y}",
                    class: "chart-card__legend-label",
                    dominant_baseline: "middle",
                    "{entry.name}"
                }
            }
        }
    }
}

/// Plain bars in the order they arrive, value label on top.
#[component]
pub fn BarSvg(spec: BarSpec) -> Element {
    let margin_right = 24.0;
    let margin_bottom = 56.0;
    let plot_w = WIDTH - MARGIN_LEFT - margin_right;
    let plot_h = HEIGHT - MARGIN_TOP - margin_bottom;
    let baseline = MARGIN_TOP + plot_h;

    let y_max = nice_max(
        spec.bars
            .iter()
            .map(|bar| bar.value.max(0.0))
            .fold(0.0, f64::max),
    );
    let slots = spec.bars.len();
    let slot_w = if slots > 0 { plot_w / slots as f64 } else { plot_w };
    let bar_w = slot_w * 0.6;

    let mut rects = Vec::new();
    let mut value_labels = Vec::new();
    let mut x_labels = Vec::new();
    for (i, bar) in spec.bars.iter().enumerate() {
        let value = bar.value.max(0.0);
        let x = MARGIN_LEFT + i as f64 * slot_w + (slot_w - bar_w) / 2.0;
        let y_top = y_on_scale(value, y_max, plot_h);
        rects.push(PlotRect {
            x: fmt_coord(x),
            y: fmt_coord(y_top),
            width: fmt_coord(bar_w),
            height: fmt_coord(baseline - y_top),
            color: bar.color.clone(),
            tooltip: format!("{} · {}", bar.label, format::format_hours(value)),
        });
        value_labels.push(AxisLabel::new(
            x + bar_w / 2.0,
            y_top - 6.0,
            format::format_hours(value),
        ));
        x_labels.push(AxisLabel::new(
            MARGIN_LEFT + i as f64 * slot_w + slot_w / 2.0,
            baseline + 16.0,
            bar.label.clone(),
        ));
    }
    let ticks = axis_ticks(y_max, plot_h);

    rsx! {
        svg {
            class: "chart-card__plot",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            role: "img",

            for tick in ticks.iter() {
                line {
                    x1: "{MARGIN_LEFT}",
                    x2: "{MARGIN_LEFT + plot_w}",
                    y1: "{tick.y}",
                    y2: "{tick.y}",
                    class: "chart-card__grid",
                }
                text {
                    x: "{MARGIN_LEFT - 8.0}",
                    y: "{tick.y}",
                    class: "chart-card__tick",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }

            for rect in rects.iter() {
                rect {
                    x: "{rect.x}",
                    y: "{rect.y}",
                    width: "{rect.width}",
                    height: "{rect.height}",
                    fill: "{rect.color}",
                    title { "{rect.tooltip}" }
                }
            }

            line {
                x1: "{MARGIN_LEFT}",
                x2: "{MARGIN_LEFT + plot_w}",
                y1: "{baseline}",
                y2: "{baseline}",
                class: "chart-card__axis",
            }

            for label in value_labels.iter() {
                text {
                    x: "{label.x}",
                    y: "{label.y}",
                    class: "chart-card__value",
                    text_anchor: "middle",
                    "{label.text}"
                }
            }
            for label in x_labels.iter() {
                text {
                    x: "{label.x}",
                    y: "{label.y}",
                    class: "chart-card__tick",
                    text_anchor: "middle",
                    "{label.text}"
                }
            }

            text {
                x: "{MARGIN_LEFT + plot_w / 2.0}",
                y: "{HEIGHT - 6.0}",
                class: "chart-card__axis-title",
                text_anchor: "middle",
                "{spec.x_title}"
            }
            text {
                x: "14",
                y: "{MARGIN_TOP + plot_h / 2.0}",
                class: "chart-card__axis-title",
                text_anchor: "middle",
                transform: "rotate(-90 14 {MARGIN_TOP + plot_h / 2.0})",
                "{spec.y_title}"
            }
        }
    }
}

struct SliceGeom {
    /// `None` renders as a full circle (a single-slice pie).
    path: Option<String>,
    center_x: String,
    center_y: String,
    label_x: String,
    label_y: String,
    anchor: &'static str,
    label: String,
    color: String,
    tooltip: String,
}

/// Pie with every slice slightly pulled from the center and a
/// name-plus-percentage label beside it.
#[component]
pub fn PieSvg(spec: PieSpec) -> Element {
    let center_x = 230.0;
    let center_y = HEIGHT / 2.0;
    let radius = 128.0;
    let pull = 0.08;

    let total: f64 = spec.slices.iter().map(|slice| slice.value.max(0.0)).sum();
    let positive: Vec<_> = spec
        .slices
        .iter()
        .filter(|slice| slice.value > 0.0)
        .collect();

    let mut slices = Vec::new();
    let mut start = -PI / 2.0;
    for slice in &positive {
        let fraction = slice.value / total;
        let sweep = fraction * TAU;
        let end = start + sweep;
        let mid = (start + end) / 2.0;

        let (offset_x, offset_y) = polar(mid, radius * pull);
        let cx = center_x + offset_x;
        let cy = center_y + offset_y;
        let (label_dx, label_dy) = polar(mid, radius + 18.0);
        let anchor = if label_dx < 0.0 { "end" } else { "start" };

        let wedge = if positive.len() == 1 {
            None
        } else {
            Some(arc_path(cx, cy, radius, start, end))
        };

        slices.push(SliceGeom {
            path: wedge,
            center_x: fmt_coord(cx),
            center_y: fmt_coord(cy),
            label_x: fmt_coord(cx + label_dx),
            label_y: fmt_coord(cy + label_dy),
            anchor,
            label: format!(
                "{} {}",
                slice.label,
                format::format_percent(fraction * 100.0)
            ),
            color: slice.color.clone(),
            tooltip: format!("{} · {}", slice.label, format::format_hours(slice.value)),
        });
        start = end;
    }

    let legend: Vec<LegendEntry> = spec
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| LegendEntry {
            y: MARGIN_TOP + 22.0 + i as f64 * 18.0,
            name: slice.label.clone(),
            color: slice.color.clone(),
        })
        .collect();
    let legend_x = WIDTH - 180.0;

    rsx! {
        svg {
            class: "chart-card__plot",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            role: "img",

            for slice in slices.iter() {
                if let Some(wedge) = slice.path.as_ref() {
                    path {
                        d: "{wedge}",
                        fill: "{slice.color}",
                        class: "chart-card__slice",
                        title { "{slice.tooltip}" }
                    }
                } else {
                    circle {
                        cx: "{slice.center_x}",
                        cy: "{slice.center_y}",
                        r: "{radius}",
                        fill: "{slice.color}",
                        class: "chart-card__slice",
                        title { "{slice.tooltip}" }
                    }
                }
                text {
                    x: "{slice.label_x}",
                    y: "{slice.label_y}",
                    class: "chart-card__value",
                    text_anchor: "{slice.anchor}",
                    dominant_baseline: "middle",
                    "{slice.label}"
                }
            }

            for entry in legend.iter() {
                rect {
                    x: "{legend_x}",
                    y: "{entry.y - 9.0}",
                    width: "12",
                    height: "12",
                    fill: "{entry.color}",
                }
                text {
                    x: "{legend_x + 18.0}",
                    y: "{entry.y}",
                    class: "chart-card__legend-label",
                    dominant_baseline: "middle",
                    "{entry.name}"
                }
            }
        }
    }
}

/// Round a data maximum up to a 1/2/2.5/5 step so tick labels land on
/// friendly values. Zero stays zero (an all-empty plot).
fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let magnitude = 10.0_f64.powf(max.log10().floor());
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

fn y_on_scale(value: f64, y_max: f64, plot_h: f64) -> f64 {
    let bottom = MARGIN_TOP + plot_h;
    if y_max <= 0.0 {
        return bottom;
    }
    bottom - plot_h * (value / y_max).clamp(0.0, 1.0)
}

fn axis_ticks(y_max: f64, plot_h: f64) -> Vec<Tick> {
    const DIVISIONS: usize = 4;
    (0..=DIVISIONS)
        .map(|i| {
            let value = y_max * i as f64 / DIVISIONS as f64;
            Tick {
                y: fmt_coord(y_on_scale(value, y_max, plot_h)),
                label: tick_label(value),
            }
        })
        .collect()
}

fn tick_label(value: f64) -> String {
    if value >= 10.0 || value == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn fmt_coord(value: f64) -> String {
    format!("{value:.2}")
}

/// Point at `angle` radians and distance `r` from the origin. Angle 0 is
/// 3 o'clock; the pie starts at 12 o'clock with -π/2.
fn polar(angle: f64, r: f64) -> (f64, f64) {
    (r * angle.cos(), r * angle.sin())
}

/// A filled wedge from `start` to `end` radians around (cx, cy).
fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (sx, sy) = polar(start, r);
    let (ex, ey) = polar(end, r);
    let large_arc = i32::from(end - start > PI);
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx,
        cy,
        cx + sx,
        cy + sy,
        r,
        r,
        large_arc,
        cx + ex,
        cy + ey,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nice_max_rounds_up_to_friendly_steps() {
        assert_eq!(nice_max(0.0), 0.0);
        assert!(close(nice_max(0.7), 1.0));
        assert!(close(nice_max(3.0), 5.0));
        assert!(close(nice_max(17.0), 20.0));
        assert!(close(nice_max(20.0), 20.0));
        assert!(close(nice_max(23.0), 25.0));
        assert!(close(nice_max(99.0), 100.0));
    }

    #[test]
    fn y_on_scale_pins_zero_to_the_baseline() {
        let plot_h = 300.0;
        assert_eq!(y_on_scale(0.0, 10.0, plot_h), MARGIN_TOP + plot_h);
        assert_eq!(y_on_scale(10.0, 10.0, plot_h), MARGIN_TOP);
        // Degenerate all-zero plots collapse to the baseline.
        assert_eq!(y_on_scale(5.0, 0.0, plot_h), MARGIN_TOP + plot_h);
    }

    #[test]
    fn arc_path_flags_reflex_sweeps() {
        let minor = arc_path(0.0, 0.0, 10.0, 0.0, PI / 2.0);
        assert!(minor.contains(" 0 1 "));
        let major = arc_path(0.0, 0.0, 10.0, 0.0, 1.5 * PI);
        assert!(major.contains(" 1 1 "));
        assert!(!minor.contains("NaN"));
    }
}
