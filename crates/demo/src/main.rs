// File: crates/demo/src/main.rs
// Summary: Demo CLI: renders a progress chart from CSV or fixtures, chats with and uploads to the backend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glow_client::{AnalysisState, ChatSession, ClientConfig, DataSource, Fixtures, ImageUpload, Sender, SkincareClient};
use progress_chart::{
    ProgressChart, ProgressSummary, RenderConfig, RenderOptions, RenderStatus, Series, TimeRange, PLACEHOLDER_TEXT,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "glow-demo", version, about = "Skin progress charts and backend demo", arg_required_else_help = true)]
struct Cli {
    /// Client config file (defaults to ./glow.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the progress chart to PNG (or SVG).
    Chart {
        /// CSV with `date,score[,note]` columns; built-in sample data when omitted.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long, value_name = "PATH", default_value = "target/out/progress.png")]
        out: PathBuf,
        /// Write SVG instead of PNG.
        #[arg(long)]
        svg: bool,
        #[arg(long, default_value_t = 600.0)]
        width: f32,
        #[arg(long, default_value_t = 200.0)]
        height: f32,
        #[arg(long, default_value = "glow")]
        theme: String,
        /// Device pixels per logical pixel.
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        /// Look-back window (1m, 3m, 6m, 1y) ending at the latest point; whole series when omitted.
        #[arg(long, value_name = "RANGE")]
        range: Option<TimeRange>,
    },
    /// Send one message to the assistant.
    Chat { message: String },
    /// Upload a selfie for analysis.
    Analyze { image: PathBuf },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Chart { input, out, svg, width, height, theme, scale, range } => {
            let mut series = match &input {
                Some(path) => Series::from_csv_path(path)
                    .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
                None => Fixtures::default().progress_series(),
            };
            log::info!("loaded {} points ({} milestones)", series.len(), series.annotated_count());
            if let (Some(range), Some(latest)) = (range, series.points.last().map(|p| p.date)) {
                series = range.filter(&series, latest);
                log::info!("{}: {} points since {}", range.label(), series.len(), range.cutoff(latest));
            }

            let summary = ProgressSummary::of(&series);
            if let Some(latest) = summary.latest {
                let trend = match (summary.improvement, summary.change > 0.0) {
                    (true, _) => "up",
                    (false, true) => "down",
                    (false, false) => "flat",
                };
                println!("Current score {latest}, {trend} {} over {} entries", summary.change, summary.count);
            }
            for m in &summary.milestones {
                println!("  {} ({}): {}", m.date, m.score, m.note);
            }

            let opts = RenderOptions {
                config: RenderConfig::new(width, height),
                theme: progress_chart::theme::find(&theme),
                scale_factor: scale,
                ..RenderOptions::default()
            };
            render_chart(ProgressChart::new(series), &opts, &out, svg)
        }
        Command::Chat { message } => {
            let client = client(cli.config.as_deref())?;
            let mut session = ChatSession::with_greeting();
            session.send(&client, &message);
            for m in session.messages() {
                let who = match m.sender {
                    Sender::User => "you",
                    Sender::Ai => "glow",
                };
                println!("{who:>4}: {}", m.content);
            }
            Ok(())
        }
        Command::Analyze { image } => {
            let client = client(cli.config.as_deref())?;
            let upload = ImageUpload::from_path(&image)
                .with_context(|| format!("failed to read image '{}'", image.display()))?;
            let state = AnalysisState::run(&client, &upload);
            let Some(analysis) = state.analysis() else {
                println!("{}", state.error().unwrap_or_default());
                return Ok(());
            };
            log::info!(
                "analysis received: {} concerns, {} recommendations",
                analysis.concerns.len(),
                analysis.recommendations.len()
            );
            if let Some(skin_type) = &analysis.skin_type {
                println!("Skin type: {skin_type}");
            }
            println!("Concerns: {}", analysis.concerns.join(", "));
            for rec in &analysis.recommendations {
                println!("  - {}", rec.title);
            }
            Ok(())
        }
    }
}

fn render_chart(chart: ProgressChart, opts: &RenderOptions, out: &Path, svg: bool) -> Result<()> {
    let out = if svg { out.with_extension("svg") } else { out.to_path_buf() };
    let status = if svg { chart.render_to_svg(opts, &out)? } else { chart.render_to_png(opts, &out)? };
    match status {
        RenderStatus::Drawn { ops } => {
            log::info!("rendered {ops} draw ops");
            println!("Wrote {}", out.display());
        }
        RenderStatus::InsufficientData => {
            log::info!("fewer than two points, nothing drawn");
            println!("{PLACEHOLDER_TEXT}");
        }
    }
    Ok(())
}

fn client(config: Option<&Path>) -> Result<SkincareClient> {
    let cfg = match config {
        Some(path) => ClientConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ClientConfig::load_default(),
    };
    Ok(SkincareClient::new(cfg)?)
}
