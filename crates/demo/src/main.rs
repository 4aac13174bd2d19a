// File: crates/demo/src/main.rs
// Summary: Demo fetches the course waitlist CSV, applies a filter and optional zoom, and writes chart.png + chart.svg.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use waitlist_chart::svg::to_svg;
use waitlist_chart::{Chart, ChartConfig, DataSource, LoadOutcome, LoadState, ZoomEvent, ZoomTransform};
use waitlist_render_skia::SkiaRenderer;

#[derive(Parser, Debug)]
#[command(name = "waitlist-demo")]
#[command(about = "Render course waitlist counts over time to PNG and SVG")]
struct Args {
    /// CSV source, URL or local path (overrides config)
    #[arg(long)]
    source: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Course search term
    #[arg(long, default_value = "")]
    filter: String,
    /// Zoom as `K,X`: scale factor and horizontal translate in pixels
    #[arg(long, value_parser = parse_zoom)]
    zoom: Option<ZoomArg>,
    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    /// Theme preset name (overrides config)
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Clone, Copy, Debug)]
struct ZoomArg {
    k: f64,
    x: f64,
}

fn parse_zoom(raw: &str) -> std::result::Result<ZoomArg, String> {
    let (k, x) = raw.split_once(',').ok_or_else(|| format!("expected K,X but got `{raw}`"))?;
    let k = k.trim().parse::<f64>().map_err(|e| format!("bad scale `{k}`: {e}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad translate `{x}`: {e}"))?;
    Ok(ZoomArg { k, x })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut cfg = ChartConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(source) = args.source {
        cfg.data.source = source;
    }
    if let Some(theme) = args.theme {
        cfg.theme.name = theme;
    }
    let mut chart = Chart::from_config(&cfg).context("invalid configuration")?;

    let source = DataSource::parse(&cfg.data.source);
    if let DataSource::File(path) = &source {
        if !path.exists() {
            anyhow::bail!("file not found: {}", path.display());
        }
    }
    tracing::info!(%source, "loading dataset");

    let ticket = chart.begin_load();
    let result = source.load().await;
    if chart.apply_load(&ticket, result) == LoadOutcome::Applied {
        tracing::info!(records = chart.records().len(), courses = chart.colors().len(), "dataset ready");
    }

    chart.set_filter(&args.filter);
    if let Some(z) = args.zoom {
        let t = chart.on_zoom_event(ZoomEvent::Set(ZoomTransform::new(z.k, z.x, 0.0)));
        tracing::info!(transform = %t, "zoom applied");
    }

    let (png, svg) = write_outputs(&chart, &args.out)?;
    println!("Wrote {}", png.display());
    println!("Wrote {}", svg.display());
    println!(
        "  filter {:?}: {} series drawn, {} courses loaded",
        chart.filter_term(),
        chart.scene().path_count(),
        chart.colors().len()
    );

    if let LoadState::Failed(message) = chart.state() {
        anyhow::bail!("{message}");
    }
    Ok(())
}

fn write_outputs(chart: &Chart, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let png = dir.join("chart.png");
    let svg = dir.join("chart.svg");
    SkiaRenderer::new().render_to_png(chart.scene(), &png)?;
    std::fs::write(&svg, to_svg(chart.scene())).with_context(|| format!("writing {}", svg.display()))?;
    Ok((png, svg))
}
