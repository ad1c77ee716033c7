// File: crates/lineplot-core/src/format.rs
// Summary: Output format selection (raster vs. vector) and the matching gnuplot terminal.

use std::fmt;
use std::path::Path;

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Guess from the output file extension.
    #[default]
    Auto,
    Raster,
    Vector,
}

impl OutputFormat {
    /// Gnuplot terminal selected for this format. `None` for [`OutputFormat::Auto`].
    pub fn terminal(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Auto => None,
            OutputFormat::Raster => Some("pngcairo"),
            OutputFormat::Vector => Some("pdfcairo"),
        }
    }

    /// Map a bare extension (no dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        const KNOWN: [(&str, OutputFormat); 2] = [
            ("pdf", OutputFormat::Vector),
            ("png", OutputFormat::Raster),
        ];
        KNOWN
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|&(_, kind)| kind)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Raster => "raster",
            OutputFormat::Vector => "vector",
        };
        f.write_str(name)
    }
}

/// Where the rendered plot goes and in which format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputTarget {
    pub file_name: String,
    pub format: OutputFormat,
}

impl OutputTarget {
    pub fn new(file_name: impl Into<String>, format: OutputFormat) -> Self {
        Self { file_name: file_name.into(), format }
    }

    pub fn resolve(&self) -> Result<OutputFormat> {
        resolve_format(&self.file_name, self.format)
    }
}

/// Return `override_format` unless it is `Auto`, else deduce from the extension
/// of `file_name`.
pub fn resolve_format(file_name: &str, override_format: OutputFormat) -> Result<OutputFormat> {
    if override_format != OutputFormat::Auto {
        return Ok(override_format);
    }
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty());
    match ext {
        Some(e) => OutputFormat::from_extension(e).ok_or_else(|| PlotError::UnknownFormat {
            file_name: file_name.to_string(),
            extension: Some(e.to_string()),
        }),
        None => Err(PlotError::UnknownFormat { file_name: file_name.to_string(), extension: None }),
    }
}
