// File: crates/progress-chart/src/theme.rs
// Summary: Color palettes for progress chart rendering.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Color the surface is cleared to before drawing.
    pub background: Rgba,
    pub axis_line: Rgba,
    pub grid: Rgba,
    pub tick_label: Rgba,
    pub line_stroke: Rgba,
    /// Area gradient color at the plot top.
    pub fill_top: Rgba,
    /// Area gradient color at the baseline.
    pub fill_bottom: Rgba,
    pub marker: Rgba,
    pub marker_annotated: Rgba,
    pub marker_core: Rgba,
    pub milestone: Rgba,
}

impl Theme {
    /// Sky-blue accent on white, the product's default look.
    pub fn glow() -> Self {
        let accent = Rgba::opaque(0x0e, 0xa5, 0xe9);
        Self {
            name: "glow",
            background: Rgba::TRANSPARENT,
            axis_line: Rgba::opaque(0xe5, 0xe7, 0xeb),
            grid: Rgba::opaque(0xe5, 0xe7, 0xeb),
            tick_label: Rgba::opaque(0x6b, 0x72, 0x80),
            line_stroke: accent,
            fill_top: accent.with_alpha(51), // 0.2
            fill_bottom: accent.with_alpha(0),
            marker: Rgba::opaque(0xba, 0xe6, 0xfd),
            marker_annotated: accent,
            marker_core: Rgba::WHITE,
            milestone: accent,
        }
    }

    pub fn dark() -> Self {
        let accent = Rgba::opaque(0x38, 0xbd, 0xf8);
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            axis_line: Rgba::opaque(60, 60, 68),
            grid: Rgba::opaque(40, 40, 45),
            tick_label: Rgba::opaque(160, 160, 172),
            line_stroke: accent,
            fill_top: accent.with_alpha(72),
            fill_bottom: accent.with_alpha(0),
            marker: Rgba::opaque(0x07, 0x59, 0x85),
            marker_annotated: accent,
            marker_core: Rgba::opaque(18, 18, 20),
            milestone: accent,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Rgba::opaque(0xff, 0xff, 0xff),
            axis_line: Rgba::opaque(0x00, 0x00, 0x00),
            grid: Rgba::opaque(0x99, 0x99, 0x99),
            tick_label: Rgba::opaque(0x00, 0x00, 0x00),
            line_stroke: Rgba::opaque(0x00, 0x4c, 0xcc),
            fill_top: Rgba::new(0x00, 0x4c, 0xcc, 90),
            fill_bottom: Rgba::new(0x00, 0x4c, 0xcc, 0),
            marker: Rgba::opaque(0x66, 0x99, 0xff),
            marker_annotated: Rgba::opaque(0xcc, 0x33, 0x00),
            marker_core: Rgba::opaque(0xff, 0xff, 0xff),
            milestone: Rgba::opaque(0xcc, 0x33, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::glow() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::glow(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to glow.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            log::warn!("unknown theme `{name}`, using glow");
            Theme::glow()
        })
}
