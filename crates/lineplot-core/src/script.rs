// File: crates/lineplot-core/src/script.rs
// Summary: Gnuplot script assembly from the plot configuration and resolved ranges.

use std::path::Path;

use crate::axis::AxisRange;
use crate::config::PlotConfiguration;
use crate::error::{PlotError, Result};
use crate::format::OutputFormat;

/// Everything the assembler needs, already resolved by the session.
#[derive(Clone, Copy, Debug)]
pub struct ScriptInputs<'a> {
    pub config: &'a PlotConfiguration,
    pub output_file: &'a str,
    pub format: OutputFormat,
    pub xrange: AxisRange,
    pub yrange: AxisRange,
    pub data_path: &'a Path,
    pub legend: &'a str,
}

/// Build the ordered directive list. Terminal and output come first, ranges
/// and labels before style, and the `plot` line is always last.
pub fn assemble_script(inputs: &ScriptInputs<'_>) -> Result<Vec<String>> {
    let terminal = inputs.format.terminal().ok_or_else(|| PlotError::UnknownFormat {
        file_name: inputs.output_file.to_string(),
        extension: None,
    })?;
    let cfg = inputs.config;

    let mut lines = vec![
        format!("set terminal {terminal} enhanced notransparent"),
        format!("set output {}", quote(inputs.output_file)),
        format!("set xrange {}", inputs.xrange),
        format!("set yrange {}", inputs.yrange),
        format!("set xlabel {}", quote(&cfg.xlabel)),
        format!("set ylabel {}", quote(&cfg.ylabel)),
        format!("set title {}", quote(&cfg.title)),
    ];
    lines.extend(cfg.line_style.directives());
    lines.push(format!(
        "plot {} with lines title {}",
        quote(&inputs.data_path.to_string_lossy()),
        quote(inputs.legend)
    ));
    Ok(lines)
}

/// Single-quote `s` for gnuplot: embedded quotes are doubled and line breaks
/// become spaces so one directive stays on one line.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\n' | '\r' => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
