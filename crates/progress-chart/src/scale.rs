// File: crates/progress-chart/src/scale.rs
// Summary: Score bounds (padded + clamped) and the index (X) / score (Y) affine maps into pixels.

use crate::geometry::{clamp, PlotRect};
use crate::series::{Series, SCORE_MAX, SCORE_MIN};

/// Headroom added above the highest and below the lowest score.
pub const SCORE_PADDING: f64 = 5.0;

/// Vertical data range of a chart after padding and clamping to 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

impl ScoreBounds {
    /// Bounds for the series scores; `None` for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        series.score_extent().map(|(lo, hi)| Self::from_extent(lo, hi))
    }

    pub fn from_extent(lo: f64, hi: f64) -> Self {
        Self {
            min: clamp(lo - SCORE_PADDING, SCORE_MIN, SCORE_MAX),
            max: clamp(hi + SCORE_PADDING, SCORE_MIN, SCORE_MAX),
        }
    }

    pub fn range(&self) -> f64 { self.max - self.min }

    /// True when the range is too small to divide by. Valid scores always
    /// leave at least `SCORE_PADDING`, so this needs out-of-contract input.
    pub fn is_degenerate(&self) -> bool { self.range() <= f64::EPSILON }
}

/// Horizontal scale: point index to pixel, evenly spaced across the plot width.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub spacing: f32,
}

impl IndexScale {
    /// Scale for `count` points; `count` must be at least 2.
    pub fn new(plot: &PlotRect, count: usize) -> Self {
        debug_assert!(count >= 2, "index scale needs two or more points");
        let gaps = count.saturating_sub(1).max(1);
        Self { left_px: plot.left, spacing: plot.width() / gaps as f32 }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.spacing
    }
}

/// Vertical scale: score to pixel, `bounds.max` at `top_px` and `bounds.min` at `bottom_px`.
#[derive(Clone, Copy, Debug)]
pub struct ScoreScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub bounds: ScoreBounds,
}

impl ScoreScale {
    pub fn new(plot: &PlotRect, bounds: ScoreBounds) -> Self {
        Self { top_px: plot.top, bottom_px: plot.bottom, bounds }
    }

    #[inline]
    pub fn to_px(&self, score: f64) -> f32 {
        let height = self.bottom_px - self.top_px;
        if self.bounds.is_degenerate() {
            // flat series: park every value on the mid-line
            return self.top_px + height * 0.5;
        }
        let frac = ((score - self.bounds.min) / self.bounds.range()) as f32;
        self.top_px + height - frac * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> PlotRect { PlotRect::from_ltrb(40.0, 20.0, 580.0, 160.0) }

    #[test]
    fn bounds_pad_and_clamp() {
        assert_eq!(ScoreBounds::from_extent(65.0, 75.0), ScoreBounds { min: 60.0, max: 80.0 });
        assert_eq!(ScoreBounds::from_extent(2.0, 98.0), ScoreBounds { min: 0.0, max: 100.0 });
        let flat = ScoreBounds::from_extent(100.0, 100.0);
        assert_eq!(flat, ScoreBounds { min: 95.0, max: 100.0 });
        assert!(!flat.is_degenerate());
    }

    #[test]
    fn degenerate_only_out_of_contract() {
        let b = ScoreBounds::from_extent(110.0, 110.0);
        assert_eq!(b, ScoreBounds { min: 100.0, max: 100.0 });
        assert!(b.is_degenerate());
        let y = ScoreScale::new(&plot(), b).to_px(110.0);
        assert_eq!(y, 90.0);
    }

    #[test]
    fn score_72_in_60_80_maps_to_forty_percent() {
        let s = ScoreScale::new(&plot(), ScoreBounds { min: 60.0, max: 80.0 });
        let expect = 20.0 + 0.4 * 140.0;
        assert!((s.to_px(72.0) - expect).abs() < 1e-4);
        assert_eq!(s.to_px(80.0), 20.0);
        assert_eq!(s.to_px(60.0), 160.0);
    }

    #[test]
    fn index_scale_spans_plot() {
        let x = IndexScale::new(&plot(), 4);
        assert_eq!(x.to_px(0), 40.0);
        assert_eq!(x.to_px(3), 580.0);
        assert_eq!(x.spacing, 180.0);
    }
}
