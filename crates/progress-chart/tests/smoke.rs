// File: crates/progress-chart/tests/smoke.rs
// Purpose: End-to-end raster renders: PNG file + bytes, RGBA buffer shape, insufficient data.

use chrono::NaiveDate;
use progress_chart::{ProgressChart, RenderOptions, RenderStatus, Rgba, ScorePoint, Series, Theme};

fn weekly(scores: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2023, 9, 20).unwrap();
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| ScorePoint::try_new(start + chrono::Days::new(7 * i as u64), s).unwrap())
        .collect()
}

#[test]
fn render_smoke_png() {
    let chart = ProgressChart::new(weekly(&[65.0, 68.0, 72.0, 75.0, 79.0]));
    let opts = RenderOptions::default();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/smoke.png");
    let status = chart.render_to_png(&opts, &out).expect("render should succeed");
    assert!(status.is_drawn());
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes").expect("drawn");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let chart = ProgressChart::new(weekly(&[40.0, 60.0]));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.theme = Theme::dark();
    opts.scale_factor = 2.0;

    let frame = chart.render_to_rgba8(&opts).expect("rgba render").expect("drawn");
    assert_eq!((frame.width, frame.height), (1200, 400));
    assert_eq!(frame.pixels.len(), frame.width as usize * frame.height as usize * 4);
    assert_eq!(frame.stride, frame.width as usize * 4);

    // top-left corner is outside the plot: pure background
    let bg = Theme::dark().background;
    assert_eq!(frame.pixel(0, 0), Some([bg.r, bg.g, bg.b, 255]));
}

#[test]
fn glow_background_is_transparent() {
    let chart = ProgressChart::new(weekly(&[40.0, 60.0]));
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let frame = chart.render_to_rgba8(&opts).unwrap().unwrap();
    assert_eq!(Theme::glow().background, Rgba::TRANSPARENT);
    assert_eq!(frame.pixel(2, 2).map(|p| p[3]), Some(0));
}

#[test]
fn insufficient_data_writes_nothing() {
    let chart = ProgressChart::new(weekly(&[70.0]));
    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("one.png");
    let svg = dir.path().join("one.svg");

    assert_eq!(chart.render_to_png(&opts, &png).unwrap(), RenderStatus::InsufficientData);
    assert_eq!(chart.render_to_svg(&opts, &svg).unwrap(), RenderStatus::InsufficientData);
    assert!(!png.exists());
    assert!(!svg.exists());
    assert!(chart.render_to_png_bytes(&opts).unwrap().is_none());
}
