// File: crates/lineplot-examples/src/bin/lines.rs
// Summary: Minimal example that renders a simple line plot to PNG through gnuplot.

use anyhow::Result;
use lineplot_core::{OutputFormat, PlotSession, SessionConfig};

fn main() -> Result<()> {
    // Build a simple line series
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![0.0, 1.2, 0.8, 1.8, 1.4, 2.0];

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    std::fs::create_dir_all(out.parent().unwrap_or(std::path::Path::new(".")))?;

    let mut session = PlotSession::with_config(SessionConfig::rooted_at("target/out"));
    session
        .set_output_file(out.display().to_string(), OutputFormat::Auto)
        .set_xlabel("X")
        .set_ylabel("Y")
        .set_yrange(0.0, 2.2);
    session.plot(x, y, "example")?;
    session.save()?;
    println!("Wrote {}", out.display());
    Ok(())
}
