// File: crates/progress-chart/src/plan.rs
// Summary: Pure layout pass: series + config -> positioned axes, gridlines, path, markers, labels.

use crate::axis::{format_date, label_indices};
use crate::geometry::{PlotRect, Point};
use crate::grid::{gridlines, Gridline};
use crate::scale::{IndexScale, ScoreBounds, ScoreScale};
use crate::series::Series;
use crate::types::RenderConfig;

/// Distance of the milestone dot above its marker.
pub const MILESTONE_OFFSET: f32 = 12.0;
/// Gap between the plot edge and tick labels.
pub const LABEL_GAP: f32 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub center: Point,
    /// Position of the secondary dot; present only for annotated points.
    pub milestone: Option<Point>,
}

impl Marker {
    pub fn is_annotated(&self) -> bool { self.milestone.is_some() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub index: usize,
    pub at: Point,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPlan {
    pub plot: PlotRect,
    pub bounds: ScoreBounds,
    pub gridlines: Vec<Gridline>,
    /// Polyline through every point, in series order.
    pub line: Vec<Point>,
    /// `line` closed back along the baseline.
    pub area: Vec<Point>,
    pub markers: Vec<Marker>,
    pub x_labels: Vec<XLabel>,
}

impl ChartPlan {
    /// Lay out `series` in `config`. Returns `None` when the series has fewer than two points.
    pub fn build(series: &Series, config: &RenderConfig) -> Option<Self> {
        if !series.is_renderable() {
            return None;
        }
        let bounds = ScoreBounds::from_series(series)?;
        if bounds.is_degenerate() {
            log::debug!("score range collapsed at {}; drawing a flat mid-line", bounds.min);
        }

        let plot = PlotRect::from_config(config);
        let xs = IndexScale::new(&plot, series.len());
        let ys = ScoreScale::new(&plot, bounds);

        let line = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(xs.to_px(i), ys.to_px(p.score)))
            .collect::<Vec<_>>();

        let mut area = line.clone();
        if let Some(last) = line.last() {
            area.push(Point::new(last.x, plot.bottom));
        }
        area.push(plot.bottom_left());

        let markers = series
            .points
            .iter()
            .zip(&line)
            .enumerate()
            .map(|(index, (p, &center))| Marker {
                index,
                center,
                milestone: p.is_milestone().then(|| center.offset(0.0, -MILESTONE_OFFSET)),
            })
            .collect();

        let x_labels = label_indices(series.len())
            .into_iter()
            .map(|i| XLabel {
                index: i,
                at: Point::new(line[i].x, plot.bottom + LABEL_GAP),
                text: format_date(series.points[i].date),
            })
            .collect();

        Some(Self {
            plot,
            bounds,
            gridlines: gridlines(&plot, &bounds, config.grid_intervals()),
            line,
            area,
            markers,
            x_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ScorePoint;
    use chrono::NaiveDate;

    fn series(scores: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2023, 9, 20).unwrap();
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScorePoint::try_new(start + chrono::Days::new(i as u64 * 7), s).unwrap())
            .collect()
    }

    #[test]
    fn single_point_is_not_planned() {
        assert!(ChartPlan::build(&series(&[70.0]), &RenderConfig::default()).is_none());
        assert!(ChartPlan::build(&Series::new(), &RenderConfig::default()).is_none());
    }

    #[test]
    fn reference_series_layout() {
        let cfg = RenderConfig::default();
        let plan = ChartPlan::build(&series(&[65.0, 68.0, 72.0, 75.0]), &cfg).unwrap();
        assert_eq!(plan.bounds, ScoreBounds { min: 60.0, max: 80.0 });
        let draw_h = cfg.draw_height();
        assert!((plan.line[2].y - (20.0 + 0.4 * draw_h)).abs() < 1e-4);
        assert_eq!(plan.line[0].x, 40.0);
        assert_eq!(plan.line[3].x, 580.0);
    }

    #[test]
    fn area_closes_along_baseline() {
        let plan = ChartPlan::build(&series(&[50.0, 60.0, 55.0]), &RenderConfig::default()).unwrap();
        assert_eq!(plan.area.len(), plan.line.len() + 2);
        assert_eq!(plan.area[plan.area.len() - 2], Point::new(580.0, 160.0));
        assert_eq!(plan.area[plan.area.len() - 1], Point::new(40.0, 160.0));
    }

    #[test]
    fn milestone_sits_above_annotated_marker() {
        let mut s = series(&[50.0, 60.0, 55.0]);
        s.points[1].note = Some("Added vitamin C".into());
        let plan = ChartPlan::build(&s, &RenderConfig::default()).unwrap();
        let annotated = plan.markers.iter().filter(|m| m.is_annotated()).collect::<Vec<_>>();
        assert_eq!(annotated.len(), 1);
        let m = annotated[0];
        assert_eq!(m.index, 1);
        assert_eq!(m.milestone, Some(m.center.offset(0.0, -MILESTONE_OFFSET)));
    }

    #[test]
    fn x_labels_sit_below_plot() {
        let plan = ChartPlan::build(&series(&[50.0, 60.0]), &RenderConfig::default()).unwrap();
        let texts = plan.x_labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["Sep 20", "Sep 27"]);
        assert!(plan.x_labels.iter().all(|l| l.at.y == 165.0));
    }
}
