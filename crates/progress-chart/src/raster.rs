// File: crates/progress-chart/src/raster.rs
// Summary: Skia CPU raster surface; RGBA readback and PNG encoding through the `image` crate.

use std::io::Cursor;

use skia_safe as skia;
use thiserror::Error;

use crate::geometry::Point;
use crate::surface::{LinearGradient, Stroke, Surface, TextStyle};
use crate::text::TextShaper;
use crate::types::Rgba;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Tightly packed, unpremultiplied RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    /// Allocate a raster surface of `width * scale` by `height * scale` device pixels;
    /// drawing happens in logical pixels.
    pub fn new(width: f32, height: f32, scale: f32) -> Result<Self, RenderError> {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let w = (width * scale).round().max(1.0) as i32;
        let h = (height * scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        surface.canvas().scale((scale, scale));
        Ok(Self { surface, shaper: TextShaper::new(), width: w, height: h })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn to_rgba8(&mut self) -> Result<RgbaFrame, RenderError> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok(RgbaFrame { pixels, width: self.width as u32, height: self.height as u32, stride })
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, RenderError> {
        let frame = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
            .ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn path_through(points: &[Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if close {
            path.close();
        }
    }
    path
}

impl Surface for SkiaSurface {
    fn clear(&mut self, c: Rgba) {
        self.surface.canvas().clear(color(c));
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(color(stroke.color));
        self.surface.canvas().draw_path(&path_through(points, false), &paint);
    }

    fn fill_polygon(&mut self, points: &[Point], fill: LinearGradient) {
        let colors = [color(fill.from), color(fill.to)];
        let shader = skia::Shader::linear_gradient(
            ((0.0, fill.y0), (0.0, fill.y1)),
            &colors[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        match shader {
            Some(s) => {
                paint.set_shader(s);
            }
            // degenerate gradient (y0 == y1): flat top color
            None => {
                paint.set_color(color(fill.from));
            }
        }
        self.surface.canvas().draw_path(&path_through(points, true), &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, c: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color(c));
        self.surface.canvas().draw_circle((center.x, center.y), radius, &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at.x, at.y, style.size, color(style.color), style.align, style.baseline);
    }
}
