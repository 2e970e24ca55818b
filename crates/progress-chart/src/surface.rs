// File: crates/progress-chart/src/surface.rs
// Summary: Backend-agnostic drawing surface trait, primitive op model, and a recording surface.

use crate::geometry::Point;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

/// Vertical linear gradient between two y positions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub y0: f32,
    pub y1: f32,
    pub from: Rgba,
    pub to: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Target of a render call. Coordinates are logical pixels; backends apply
/// their own device scale.
pub trait Surface {
    /// Discard prior contents.
    fn clear(&mut self, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);
    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], fill: LinearGradient);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle);
}

/// One primitive call, as recorded by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rgba),
    StrokePolyline { points: Vec<Point>, stroke: Stroke },
    FillPolygon { points: Vec<Point>, fill: LinearGradient },
    FillCircle { center: Point, radius: f32, color: Rgba },
    Text { text: String, at: Point, style: TextStyle },
}

/// Surface that keeps every op in call order. Clearing drops what was recorded
/// before, mirroring what a pixel surface would keep.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
    issued: usize,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    /// Ops that survive since the last clear (the clear itself included).
    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Total ops received over the recorder's lifetime.
    pub fn issued(&self) -> usize { self.issued }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillCircle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, TextStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, at, style } => Some((text.as_str(), *at, *style)),
            _ => None,
        })
    }

    fn record(&mut self, op: DrawOp) {
        self.issued += 1;
        self.ops.push(op);
    }
}

impl Surface for Recorder {
    fn clear(&mut self, color: Rgba) {
        self.ops.clear();
        self.record(DrawOp::Clear(color));
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.record(DrawOp::StrokePolyline { points: points.to_vec(), stroke });
    }

    fn fill_polygon(&mut self, points: &[Point], fill: LinearGradient) {
        self.record(DrawOp::FillPolygon { points: points.to_vec(), fill });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.record(DrawOp::FillCircle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.record(DrawOp::Text { text: text.to_string(), at, style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_ops() {
        let mut r = Recorder::new();
        r.fill_circle(Point::new(1.0, 1.0), 4.0, Rgba::WHITE);
        r.clear(Rgba::TRANSPARENT);
        r.fill_circle(Point::new(2.0, 2.0), 4.0, Rgba::WHITE);
        assert_eq!(r.ops().len(), 2);
        assert_eq!(r.issued(), 3);
        assert_eq!(r.circles().count(), 1);
    }
}
