//! Recent-form line chart rendered as inline SVG.

use super::node::{el, Element};

/// Number of gameweeks plotted.
pub const RECENT_GAMEWEEKS: usize = 5;

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 150.0;
const PAD: f64 = 20.0;

/// Points per gameweek in plotting order, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    labels: Vec<String>,
    values: Vec<i64>,
}

impl LineChart {
    /// Build from newest-first totals: keep the most recent five, then
    /// reverse so the first plotted point is the oldest.
    pub fn from_recent(points: &[i64]) -> Self {
        let mut values: Vec<i64> = points.iter().take(RECENT_GAMEWEEKS).copied().collect();
        values.reverse();

        let n = values.len();
        let labels = (0..n)
            .map(|i| match n - 1 - i {
                0 => "GW".to_string(),
                back => format!("GW-{back}"),
            })
            .collect();

        Self { labels, values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// SVG coordinates for each value, left to right.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        let n = self.values.len();
        let min = self.values.iter().copied().min().unwrap_or(0);
        let max = self.values.iter().copied().max().unwrap_or(0);
        let span = (max - min) as f64;
        let inner_w = WIDTH - 2.0 * PAD;
        let inner_h = HEIGHT - 2.0 * PAD;

        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = if n > 1 {
                    PAD + inner_w * i as f64 / (n - 1) as f64
                } else {
                    WIDTH / 2.0
                };
                let y = if span > 0.0 {
                    HEIGHT - PAD - inner_h * (v - min) as f64 / span
                } else {
                    HEIGHT / 2.0
                };
                (x, y)
            })
            .collect()
    }

    pub fn render(&self) -> Element {
        if self.is_empty() {
            return el("p")
                .class("chart-empty")
                .text("No recent gameweek data");
        }

        let coords = self.coordinates();
        let polyline = coords
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let data_points = self
            .values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let markers = coords.iter().zip(&self.values).map(|((x, y), v)| {
            el("circle")
                .class("chart-point")
                .attr("cx", format!("{x:.1}"))
                .attr("cy", format!("{y:.1}"))
                .attr("r", "3")
                .attr("data-value", v.to_string())
        });
        let labels = coords.iter().zip(&self.labels).map(|((x, _), label)| {
            el("text")
                .class("chart-label")
                .attr("x", format!("{x:.1}"))
                .attr("y", format!("{:.1}", HEIGHT - 4.0))
                .attr("text-anchor", "middle")
                .text(label.as_str())
        });

        el("svg")
            .class("performance-chart")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("viewBox", format!("0 0 {WIDTH} {HEIGHT}"))
            .attr("role", "img")
            .attr("aria-label", "Points in recent gameweeks")
            .attr("data-points", data_points)
            .child(
                el("polyline")
                    .attr("fill", "none")
                    .attr("stroke", "currentColor")
                    .attr("stroke-width", "2")
                    .attr("points", polyline),
            )
            .children(markers)
            .children(labels)
    }
}
