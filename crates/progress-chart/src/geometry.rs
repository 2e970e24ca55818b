// File: crates/progress-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::RenderConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn offset(self, dx: f32, dy: f32) -> Self { Self::new(self.x + dx, self.y + dy) }
}

/// Plot area inside the surface padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_config(cfg: &RenderConfig) -> Self {
        let left = cfg.padding.left;
        let top = cfg.padding.top;
        Self::from_ltrb(left, top, left + cfg.draw_width(), top + cfg.draw_height())
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn bottom_left(&self) -> Point { Point::new(self.left, self.bottom) }
    pub fn bottom_right(&self) -> Point { Point::new(self.right, self.bottom) }
    pub fn top_left(&self) -> Point { Point::new(self.left, self.top) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
