// File: crates/demo/src/main.rs
// Summary: Demo plots sin(x) over [0, 2π) or a two-column CSV, rendering through gnuplot.
// Usage: lineplot-demo [input.csv] [output.(pdf|png)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lineplot_core::{linspace, DataSeries, OutputFormat, PlotSession, SessionConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let output = args.next().unwrap_or_else(|| "plot.pdf".to_string());

    let series = match &input {
        Some(raw) => {
            let path = resolve_path(raw)?;
            info!("Using input file: {}", path.display());
            load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sine_series()?,
    };
    info!("Loaded {} points", series.len());
    if series.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let config = SessionConfig::from_env();
    info!(data_dir = %config.data_dir.display(), script_dir = %config.script_dir.display(), "session directories");

    let mut session = PlotSession::with_config(config);
    session
        .set_output_file(output.as_str(), OutputFormat::Auto)
        .set_title("Title for the plot")
        .set_xlabel("x-axis")
        .set_ylabel("y-axis");
    session.plot_series(series)?;

    let artifact = session
        .save()
        .with_context(|| format!("failed to render '{output}'"))?;
    info!(
        "Wrote {} (x {}, y {}) from script {}",
        output,
        artifact.xrange,
        artifact.yrange,
        artifact.script_path.display()
    );
    Ok(())
}

fn sine_series() -> Result<DataSeries> {
    let x = linspace(0.0, 2.0 * std::f64::consts::PI, 100)?;
    let y = x.iter().map(|v| v.sin()).collect();
    Ok(DataSeries::new(x, y, "sin(x)")?)
}

/// Resolve path, trying the `.csv`/`.tsv` sibling if the given one is missing.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    for ext in ["csv", "tsv"] {
        let alt = p.with_extension(ext);
        if alt.exists() {
            warn!("{} not found, using {}", p.display(), alt.display());
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load an X/Y series. Uses columns named `x`/`y` when the header has them,
/// otherwise the first two columns. Rows that fail to parse are skipped.
fn load_xy_csv(path: &Path) -> Result<DataSeries> {
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!("Headers: {:?}", headers);

    let idx = |names: &[&str], fallback: usize| -> usize {
        headers
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .unwrap_or(fallback)
    };
    let i_x = idx(&["x", "time", "t"], 0);
    let i_y = idx(&["y", "value", "v"], 1);

    let legend = headers.get(i_y).cloned().unwrap_or_default();
    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => pairs.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} unparseable rows");
    }
    Ok(DataSeries::from_pairs(&pairs, legend))
}
