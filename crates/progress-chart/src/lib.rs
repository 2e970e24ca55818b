// File: crates/progress-chart/src/lib.rs
// Summary: Core library entry point; exports the score-series model, layout plan, surfaces and renderers.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod plan;
pub mod raster;
pub mod scale;
pub mod series;
pub mod summary;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{ProgressChart, RenderOptions, RenderStatus, PLACEHOLDER_TEXT};
pub use geometry::Point;
pub use plan::ChartPlan;
pub use raster::{RenderError, RgbaFrame, SkiaSurface};
pub use scale::ScoreBounds;
pub use series::{ScorePoint, Series, SeriesError};
pub use summary::{Milestone, ProgressSummary, TimeRange};
pub use surface::{DrawOp, Recorder, Surface};
pub use svg::SvgSurface;
pub use theme::Theme;
pub use types::{Insets, RenderConfig, Rgba};
