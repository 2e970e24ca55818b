// File: crates/progress-chart/src/grid.rs
// Summary: Horizontal gridline layout with interpolated score labels.

use crate::geometry::PlotRect;
use crate::scale::ScoreBounds;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gridline {
    pub y: f32,
    /// Interpolated score at this line, before rounding.
    pub value: f64,
    pub label: String,
}

/// `intervals + 1` lines from the plot top to its bottom, labelled from `max` down to `min`.
pub fn gridlines(plot: &PlotRect, bounds: &ScoreBounds, intervals: u32) -> Vec<Gridline> {
    let intervals = intervals.max(1);
    linspace(plot.top as f64, plot.bottom as f64, intervals as usize + 1)
        .into_iter()
        .enumerate()
        .map(|(i, y)| {
            let value = bounds.max - (i as f64 / intervals as f64) * bounds.range();
            Gridline { y: y as f32, value, label: format!("{}", value.round() as i64) }
        })
        .collect()
}
