// File: crates/benchplot/src/main.rs
// Summary: CLI glue; reads benchmark stdout, renders the full and zoom charts.

use anyhow::{Context, Result};
use benchplot_core::{BenchTable, Chart, RenderOptions};
use chrono::Local;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// The high-magnitude series excluded from the zoom chart so the remaining
/// series stay visually legible.
const ZOOM_EXCLUDED_SERIES: &str = "NthElement";

const ALL_PNG: &str = "stats_all.png";
const ZOOM_PNG: &str = "stats_zoom.png";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let path = std::env::args()
        .nth(1)
        .context("usage: benchplot <benchmark-stdout-file>")?;

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read '{path}'"))?;
    let mut table = BenchTable::parse(text.lines())
        .with_context(|| format!("failed to parse benchmark table in '{path}'"))?;
    info!(
        rows = table.rows(),
        series = table.stats.len(),
        "parsed benchmark table"
    );

    let title = format!(
        "1D Moving Median Filter Benchmark ({})",
        Local::now().format("%Y-%m-%d")
    );
    let opts = RenderOptions::default();

    Chart::from_table(&table, &title).render_to_png(&opts, ALL_PNG)?;
    info!("wrote {ALL_PNG}");

    table.remove_series(ZOOM_EXCLUDED_SERIES)?;
    Chart::from_table(&table, &title).render_to_png(&opts, ZOOM_PNG)?;
    info!("wrote {ZOOM_PNG}");

    Ok(())
}
