//! Inline SVG charts: grouped bars, lines and stacked areas.
//!
//! All three share one frame: a fixed viewBox, a y axis scaled to a rounded
//! ceiling with `GRID_LINES` dashed grid lines, and one x slot per label.

use maud::{html, Markup};

use crate::models::dashboard::Accent;
use crate::services::format::format_count;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const GRID_LINES: u32 = 4;

/// One plotted quantity, aligned with the chart's labels.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub label: &'static str,
    pub accent: Accent,
    pub values: Vec<u64>,
}

/// Smallest "nice" axis maximum (1, 1.5, 2, 2.5 or 5 times a power of ten,
/// per grid step) that is at least `max`.
pub fn nice_ceiling(max: f64) -> f64 {
    let lines = f64::from(GRID_LINES);
    if max <= 0.0 {
        return lines;
    }
    let raw = max / lines;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 1.5, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude)
        .max(1.0);
    step * lines
}

struct Frame {
    max: f64,
    slots: usize,
}

impl Frame {
    fn new(max: u64, slots: usize) -> Self {
        Self {
            max: nice_ceiling(max as f64),
            slots: slots.max(1),
        }
    }

    fn plot_width() -> f64 {
        WIDTH - PAD_LEFT - PAD_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - PAD_TOP - PAD_BOTTOM
    }

    fn baseline() -> f64 {
        PAD_TOP + Self::plot_height()
    }

    fn y(&self, value: f64) -> f64 {
        PAD_TOP + Self::plot_height() * (1.0 - value / self.max)
    }

    fn slot_width(&self) -> f64 {
        Self::plot_width() / self.slots as f64
    }

    fn slot_center(&self, index: usize) -> f64 {
        PAD_LEFT + self.slot_width() * (index as f64 + 0.5)
    }

    /// Grid, y tick labels and x labels.
    fn axes(&self, labels: &[String]) -> Markup {
        let step = self.max / f64::from(GRID_LINES);
        html! {
            g.grid {
                @for i in 0..=GRID_LINES {
                    @let value = step * f64::from(i);
                    @let y = px(self.y(value));
                    line x1=(px(PAD_LEFT)) x2=(px(WIDTH - PAD_RIGHT)) y1=(y) y2=(y)
                        stroke-dasharray="3 3" {}
                    text.axis x=(px(PAD_LEFT - 6.0)) y=(y) text-anchor="end"
                        dominant-baseline="middle" { (format_count(value.round() as u64)) }
                }
            }
            g.x-axis {
                @for (i, label) in labels.iter().enumerate() {
                    text.axis x=(px(self.slot_center(i))) y=(px(HEIGHT - 8.0))
                        text-anchor="middle" { (label) }
                }
            }
        }
    }
}

fn px(v: f64) -> String {
    format!("{v:.1}")
}

fn max_value(datasets: &[Dataset]) -> u64 {
    datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .max()
        .unwrap_or(0)
}

fn svg(body: Markup) -> Markup {
    html! {
        svg.chart viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img"
            preserveAspectRatio="xMidYMid meet" {
            (body)
        }
    }
}

/// Legend listing each dataset with its colour.
pub fn legend(datasets: &[Dataset]) -> Markup {
    html! {
        ul.legend {
            @for d in datasets {
                li { span class=(format!("swatch {}", d.accent.css_class())) {} (d.label) }
            }
        }
    }
}

/// Grouped vertical bars, one group per label.
pub fn bar_chart(labels: &[String], datasets: &[Dataset]) -> Markup {
    let frame = Frame::new(max_value(datasets), labels.len());
    let group_width = frame.slot_width() * 0.7;
    let bar_width = group_width / datasets.len().max(1) as f64;

    svg(html! {
        (frame.axes(labels))
        @for (i, label) in labels.iter().enumerate() {
            @let left = frame.slot_center(i) - group_width / 2.0;
            @for (k, d) in datasets.iter().enumerate() {
                @let value = d.values.get(i).copied().unwrap_or(0);
                @let top = frame.y(value as f64);
                rect class=(d.accent.css_class()) x=(px(left + bar_width * k as f64))
                    y=(px(top)) width=(px(bar_width)) height=(px(Frame::baseline() - top)) {
                    title { (label) " " (d.label) ": " (format_count(value)) }
                }
            }
        }
    })
}

/// One polyline per dataset with a marker on every point.
pub fn line_chart(labels: &[String], datasets: &[Dataset]) -> Markup {
    let frame = Frame::new(max_value(datasets), labels.len());
    let lines: Vec<(&Dataset, Vec<(f64, f64, u64)>)> = datasets
        .iter()
        .map(|d| {
            let points = (0..labels.len())
                .map(|i| {
                    let value = d.values.get(i).copied().unwrap_or(0);
                    (frame.slot_center(i), frame.y(value as f64), value)
                })
                .collect();
            (d, points)
        })
        .collect();

    svg(html! {
        (frame.axes(labels))
        @for (d, points) in &lines {
            @let path = points
                .iter()
                .map(|(x, y, _)| format!("{},{}", px(*x), px(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            g class=(d.accent.css_class()) {
                polyline fill="none" stroke-width="2" points=(path) {}
                @for (i, (x, y, value)) in points.iter().enumerate() {
                    circle cx=(px(*x)) cy=(px(*y)) r="3" {
                        title { (labels[i]) " " (d.label) ": " (format_count(*value)) }
                    }
                }
            }
        }
    })
}

/// Areas stacked in dataset order; the first dataset sits on the baseline.
pub fn stacked_area_chart(labels: &[String], datasets: &[Dataset]) -> Markup {
    let totals: Vec<u64> = (0..labels.len())
        .map(|i| {
            datasets
                .iter()
                .map(|d| d.values.get(i).copied().unwrap_or(0))
                .fold(0u64, u64::saturating_add)
        })
        .collect();
    let frame = Frame::new(totals.iter().copied().max().unwrap_or(0), labels.len());

    let mut lower = vec![0u64; labels.len()];
    let mut layers = Vec::with_capacity(datasets.len());
    for d in datasets {
        let upper: Vec<u64> = lower
            .iter()
            .enumerate()
            .map(|(i, base)| base.saturating_add(d.values.get(i).copied().unwrap_or(0)))
            .collect();
        let mut outline: Vec<String> = upper
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{},{}", px(frame.slot_center(i)), px(frame.y(*v as f64))))
            .collect();
        outline.extend(
            lower
                .iter()
                .enumerate()
                .rev()
                .map(|(i, v)| format!("{},{}", px(frame.slot_center(i)), px(frame.y(*v as f64)))),
        );
        layers.push((d, outline.join(" ")));
        lower = upper;
    }

    svg(html! {
        (frame.axes(labels))
        @for (d, outline) in &layers {
            polygon class=(format!("area {}", d.accent.css_class())) points=(outline) {
                title { (d.label) }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn dataset(label: &'static str, values: &[u64]) -> Dataset {
        Dataset {
            label,
            accent: Accent::Primary,
            values: values.to_vec(),
        }
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(0.0), 4.0);
        assert_eq!(nice_ceiling(1.0), 4.0);
        assert_eq!(nice_ceiling(120.0), 200.0);
        assert_eq!(nice_ceiling(450.0), 600.0);
        assert_eq!(nice_ceiling(4800.0), 6000.0);
    }

    #[test]
    fn nice_ceiling_covers_max() {
        for max in [3.0, 17.0, 99.0, 101.0, 999.0, 92_000.0] {
            assert!(nice_ceiling(max) >= max, "ceiling below {max}");
        }
    }

    #[test]
    fn bar_chart_draws_one_rect_per_value() {
        let markup = bar_chart(
            &labels(&["Mumbai", "Delhi"]),
            &[dataset("Deals", &[120, 95]), dataset("Users", &[450, 380])],
        )
        .into_string();
        assert_eq!(markup.matches("<rect").count(), 4);
        assert!(markup.contains("Mumbai Users: 450"));
    }

    #[test]
    fn line_chart_draws_markers() {
        let markup = line_chart(&labels(&["Jan", "Feb", "Mar"]), &[dataset("Users", &[1, 2, 3])])
            .into_string();
        assert_eq!(markup.matches("<polyline").count(), 1);
        assert_eq!(markup.matches("<circle").count(), 3);
    }

    #[test]
    fn stacked_area_draws_one_polygon_per_dataset() {
        let markup = stacked_area_chart(
            &labels(&["Food", "Home"]),
            &[dataset("Deals", &[28, 18]), dataset("Claims", &[25, 15])],
        )
        .into_string();
        assert_eq!(markup.matches("<polygon").count(), 2);
    }

    #[test]
    fn stacked_area_saturates_huge_counts() {
        let markup = stacked_area_chart(
            &labels(&["Food"]),
            &[dataset("Deals", &[u64::MAX]), dataset("Claims", &[1])],
        )
        .into_string();
        assert_eq!(markup.matches("<polygon").count(), 2);
        assert!(!markup.contains("NaN"));
    }

    #[test]
    fn empty_chart_still_renders_axes() {
        let markup = bar_chart(&[], &[]).into_string();
        assert!(markup.contains("<svg"));
        assert_eq!(markup.matches("<rect").count(), 0);
    }

    #[test]
    fn legend_lists_datasets() {
        let markup = legend(&[dataset("Deals", &[]), dataset("Claims", &[])]).into_string();
        assert!(markup.contains("Deals"));
        assert!(markup.contains("Claims"));
    }
}
