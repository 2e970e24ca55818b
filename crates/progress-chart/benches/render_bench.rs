use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use progress_chart::{ChartPlan, ProgressChart, Recorder, RenderConfig, RenderOptions, ScorePoint, Series};

fn build_series(n: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let score = 50.0 + (i as f64 * 0.01).sin() * 30.0;
            let p = ScorePoint::try_new(start + chrono::Days::new(i as u64), score).unwrap();
            if i % 97 == 0 { p.with_note("checkpoint") } else { p }
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_build");
    for &n in &[1_000usize, 10_000usize] {
        let series = build_series(n);
        let cfg = RenderConfig::new(1200.0, 400.0);
        group.bench_function(format!("points_{n}"), |b| {
            b.iter(|| black_box(ChartPlan::build(black_box(&series), &cfg)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[1_000usize, 10_000usize] {
        let chart = ProgressChart::new(build_series(n));
        let opts = RenderOptions::default();
        group.bench_function(format!("recorder_{n}"), |b| {
            b.iter(|| {
                let mut rec = Recorder::new();
                black_box(chart.render(&opts, &mut rec))
            });
        });
        group.bench_function(format!("svg_{n}"), |b| {
            b.iter(|| black_box(chart.render_to_svg_string(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan, bench_render);
criterion_main!(benches);
