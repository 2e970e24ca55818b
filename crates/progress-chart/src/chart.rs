// File: crates/progress-chart/src/chart.rs
// Summary: ProgressChart façade: clear-then-redraw of a score series onto any Surface,
// plus SVG and Skia-raster (PNG/RGBA) output helpers.

use std::path::Path;

use anyhow::{Context, Result};

use crate::geometry::Point;
use crate::plan::{ChartPlan, LABEL_GAP};
use crate::series::Series;
use crate::raster::{RenderError, RgbaFrame, SkiaSurface};
use crate::surface::{LinearGradient, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::svg::SvgSurface;
use crate::theme::Theme;
use crate::types::{RenderConfig, Rgba};

/// Text callers show in place of a chart that cannot be drawn.
pub const PLACEHOLDER_TEXT: &str = "Not enough data to display chart";

pub const MARKER_RADIUS: f32 = 4.0;
pub const MARKER_CORE_RADIUS: f32 = 2.0;
pub const MILESTONE_RADIUS: f32 = 2.0;
pub const LINE_WIDTH: f32 = 2.0;
pub const GRID_WIDTH: f32 = 1.0;
pub const LABEL_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub config: RenderConfig,
    pub theme: Theme,
    /// Device pixels per logical pixel.
    pub scale_factor: f32,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            theme: Theme::glow(),
            scale_factor: 1.0,
            draw_labels: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// The surface was cleared and redrawn with `ops` primitive calls.
    Drawn { ops: usize },
    /// Fewer than two points; the surface was left untouched.
    InsufficientData,
}

impl RenderStatus {
    pub fn is_drawn(&self) -> bool { matches!(self, RenderStatus::Drawn { .. }) }
}

#[derive(Clone, Debug, Default)]
pub struct ProgressChart {
    pub series: Series,
}

impl ProgressChart {
    pub fn new(series: Series) -> Self { Self { series } }

    /// Clear `surface` and draw the chart. With fewer than two points no surface
    /// call is made at all.
    pub fn render(&self, opts: &RenderOptions, surface: &mut dyn Surface) -> RenderStatus {
        let Some(plan) = ChartPlan::build(&self.series, &opts.config) else {
            log::debug!("{} point(s): insufficient data", self.series.len());
            return RenderStatus::InsufficientData;
        };
        let mut counted = Counting { inner: surface, ops: 0 };
        draw_plan(&plan, opts, &mut counted);
        RenderStatus::Drawn { ops: counted.ops }
    }

    /// Render to an SVG document; `None` when there is not enough data.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Option<String> {
        let mut svg = SvgSurface::new(opts.config.width, opts.config.height, opts.scale_factor);
        self.render(opts, &mut svg).is_drawn().then(|| svg.finish())
    }

    /// Write an SVG file at `path`. Nothing is written for insufficient data.
    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<RenderStatus> {
        let path = path.as_ref();
        let mut svg = SvgSurface::new(opts.config.width, opts.config.height, opts.scale_factor);
        let status = self.render(opts, &mut svg);
        if status.is_drawn() {
            write_creating_parent(path, svg.finish().as_bytes())?;
            log::info!("wrote {}", path.display());
        }
        Ok(status)
    }

    /// Rasterize on a Skia CPU surface and return the RGBA8 pixels.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Option<RgbaFrame>, RenderError> {
        let mut surface = SkiaSurface::new(opts.config.width, opts.config.height, opts.scale_factor)?;
        if !self.render(opts, &mut surface).is_drawn() {
            return Ok(None);
        }
        surface.to_rgba8().map(Some)
    }

    /// Rasterize and encode as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Option<Vec<u8>>, RenderError> {
        let mut surface = SkiaSurface::new(opts.config.width, opts.config.height, opts.scale_factor)?;
        if !self.render(opts, &mut surface).is_drawn() {
            return Ok(None);
        }
        surface.encode_png().map(Some)
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<RenderStatus> {
        let path = path.as_ref();
        let mut surface = SkiaSurface::new(opts.config.width, opts.config.height, opts.scale_factor)?;
        let status = self.render(opts, &mut surface);
        if status.is_drawn() {
            let bytes = surface.encode_png()?;
            write_creating_parent(path, &bytes)?;
            log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        }
        Ok(status)
    }
}

fn write_creating_parent(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

// ---- drawing ----------------------------------------------------------------

fn draw_plan(plan: &ChartPlan, opts: &RenderOptions, surface: &mut dyn Surface) {
    let theme = &opts.theme;
    surface.clear(theme.background);

    draw_axes(surface, plan, theme);
    draw_grid(surface, plan, theme, opts.draw_labels);

    surface.stroke_polyline(&plan.line, Stroke { color: theme.line_stroke, width: LINE_WIDTH });
    surface.fill_polygon(
        &plan.area,
        LinearGradient { y0: plan.plot.top, y1: plan.plot.bottom, from: theme.fill_top, to: theme.fill_bottom },
    );

    draw_markers(surface, plan, theme);
    if opts.draw_labels {
        draw_x_labels(surface, plan, theme);
    }
}

fn draw_axes(surface: &mut dyn Surface, plan: &ChartPlan, theme: &Theme) {
    let stroke = Stroke { color: theme.axis_line, width: GRID_WIDTH };
    let p = &plan.plot;
    surface.stroke_polyline(&[p.bottom_left(), p.bottom_right()], stroke);
    surface.stroke_polyline(&[p.top_left(), p.bottom_left()], stroke);
}

fn draw_grid(surface: &mut dyn Surface, plan: &ChartPlan, theme: &Theme, labels: bool) {
    let stroke = Stroke { color: theme.grid, width: GRID_WIDTH };
    let style = label_style(theme.tick_label, TextAlign::Right, TextBaseline::Middle);
    for g in &plan.gridlines {
        surface.stroke_polyline(&[Point::new(plan.plot.left, g.y), Point::new(plan.plot.right, g.y)], stroke);
        if labels {
            surface.draw_text(&g.label, Point::new(plan.plot.left - LABEL_GAP, g.y), style);
        }
    }
}

fn draw_markers(surface: &mut dyn Surface, plan: &ChartPlan, theme: &Theme) {
    for m in &plan.markers {
        let fill = if m.is_annotated() { theme.marker_annotated } else { theme.marker };
        surface.fill_circle(m.center, MARKER_RADIUS, fill);
        surface.fill_circle(m.center, MARKER_CORE_RADIUS, theme.marker_core);
        if let Some(dot) = m.milestone {
            surface.fill_circle(dot, MILESTONE_RADIUS, theme.milestone);
        }
    }
}

fn draw_x_labels(surface: &mut dyn Surface, plan: &ChartPlan, theme: &Theme) {
    let style = label_style(theme.tick_label, TextAlign::Center, TextBaseline::Top);
    for l in &plan.x_labels {
        surface.draw_text(&l.text, l.at, style);
    }
}

fn label_style(color: Rgba, align: TextAlign, baseline: TextBaseline) -> TextStyle {
    TextStyle { size: LABEL_SIZE, color, align, baseline }
}

/// Pass-through surface that counts primitive calls.
struct Counting<'a> {
    inner: &'a mut dyn Surface,
    ops: usize,
}

impl Surface for Counting<'_> {
    fn clear(&mut self, color: Rgba) {
        self.ops += 1;
        self.inner.clear(color);
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.ops += 1;
        self.inner.stroke_polyline(points, stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], fill: LinearGradient) {
        self.ops += 1;
        self.inner.fill_polygon(points, fill);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.ops += 1;
        self.inner.fill_circle(center, radius, color);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.ops += 1;
        self.inner.draw_text(text, at, style);
    }
}
