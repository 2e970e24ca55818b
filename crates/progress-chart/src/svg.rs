// File: crates/progress-chart/src/svg.rs
// Summary: SVG document surface. Deterministic text output, no font or GPU dependency.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::surface::{LinearGradient, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::types::Rgba;

pub struct SvgSurface {
    width: f32,
    height: f32,
    scale: f32,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    /// `width`/`height` are logical pixels; the document is sized in device
    /// pixels (`* scale`) with a logical view box.
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self { width, height, scale: if scale > 0.0 { scale } else { 1.0 }, body: String::new(), gradients: 0 }
    }

    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 160);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            num(self.width * self.scale),
            num(self.height * self.scale),
            num(self.width),
            num(self.height),
        );
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        self.gradients = 0;
        if color.a > 0 {
            let _ = writeln!(
                self.body,
                r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
                num(self.width),
                num(self.height),
                paint_attr("fill", color),
            );
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none"{} stroke-width="{}" stroke-linejoin="round"/>"#,
            points_attr(points),
            paint_attr("stroke", stroke.color),
            num(stroke.width),
        );
    }

    fn fill_polygon(&mut self, points: &[Point], fill: LinearGradient) {
        let id = format!("fill{}", self.gradients);
        self.gradients += 1;
        let _ = writeln!(
            self.body,
            r#"<defs><linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}"><stop offset="0"{}/><stop offset="1"{}/></linearGradient></defs>"#,
            num(fill.y0),
            num(fill.y1),
            stop_attr(fill.from),
            stop_attr(fill.to),
        );
        let _ = writeln!(self.body, r#"<polygon points="{}" fill="url(#{id})"/>"#, points_attr(points));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(radius),
            paint_attr("fill", color),
        );
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let anchor = match style.align {
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="Inter, sans-serif" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}"{}>{}</text>"#,
            num(at.x),
            num(at.y),
            num(style.size),
            paint_attr("fill", style.color),
            escape(text),
        );
    }
}

/// Up to two decimals, trailing zeros trimmed.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn points_attr(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect::<Vec<_>>().join(" ")
}

fn paint_attr(attr: &str, c: Rgba) -> String {
    if c.a == 255 {
        format!(r#" {attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(r#" {attr}="{}" {attr}-opacity="{}""#, c.to_hex_rgb(), num(c.opacity()))
    }
}

fn stop_attr(c: Rgba) -> String {
    format!(r#" stop-color="{}" stop-opacity="{}""#, c.to_hex_rgb(), num(c.opacity()))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
