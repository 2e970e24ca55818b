// File: crates/progress-chart/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings, render config).

/// Default logical surface width in pixels.
pub const WIDTH: f32 = 600.0;
/// Default logical surface height in pixels.
pub const HEIGHT: f32 = 200.0;
/// Default number of horizontal grid intervals (lines drawn = count + 1).
pub const GRID_LINES: u32 = 5;

/// Screen margins reserved for axes and labels, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// Create new insets; negative values are clamped to zero.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 40.0)
    }
}

/// Caller-supplied geometry for one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub padding: Insets,
    /// Number of grid intervals. Zero is treated as one.
    pub grid_line_count: u32,
}

impl RenderConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_grid_lines(mut self, count: u32) -> Self {
        self.grid_line_count = count;
        self
    }

    /// Usable plot width; never negative.
    pub fn draw_width(&self) -> f32 { (self.width - self.padding.hsum()).max(0.0) }
    /// Usable plot height; never negative.
    pub fn draw_height(&self) -> f32 { (self.height - self.padding.vsum()).max(0.0) }

    /// Grid interval count with the zero case folded into one.
    pub fn grid_intervals(&self) -> u32 { self.grid_line_count.max(1) }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Insets::default(),
            grid_line_count: GRID_LINES,
        }
    }
}

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self { Self::new(r, g, b, 255) }

    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }

    /// `#rrggbb` without alpha; pair with [`Rgba::opacity`] where needed.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_area_excludes_padding() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.draw_width(), 540.0);
        assert_eq!(cfg.draw_height(), 140.0);
    }

    #[test]
    fn oversized_padding_collapses_plot() {
        let cfg = RenderConfig::new(30.0, 30.0);
        assert_eq!(cfg.draw_width(), 0.0);
        assert_eq!(cfg.draw_height(), 0.0);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Rgba::new(14, 165, 233, 51).opacity(), 0.2);
        assert_eq!(Rgba::opaque(14, 165, 233).to_hex_rgb(), "#0ea5e9");
    }
}
