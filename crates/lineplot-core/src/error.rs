// File: crates/lineplot-core/src/error.rs
// Summary: Error type shared by every plot session operation.

use std::path::PathBuf;

use thiserror::Error;

use crate::axis::AxisKind;

pub type Result<T, E = PlotError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot(): x size ({x_len}) and y size ({y_len}) differ")]
    SizeMismatch { x_len: usize, y_len: usize },

    #[error("failed to create output directory '{}'", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open file '{}'", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("minimum {axis} value ({min}) is equal to or larger than maximum {axis} value ({max})")]
    InvalidRange { axis: AxisKind, min: f64, max: f64 },

    #[error("{}", unknown_format_message(file_name, extension.as_deref()))]
    UnknownFormat {
        file_name: String,
        extension: Option<String>,
    },

    #[error("save(): no data has been plotted yet")]
    NoData,

    #[error("save(): no output file has been set")]
    NoOutputTarget,

    #[error("render failed for `{command}`: {reason}")]
    RenderFailure { command: String, reason: String },

    #[error("linspace(): max ({max}) is smaller than min ({min})")]
    InvalidBounds { min: f64, max: f64 },
}

fn unknown_format_message(file_name: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!(
            "file extension '{ext}' of '{file_name}' isn't recognized; use a known extension or override the output format"
        ),
        None => format!(
            "failed to deduce the output format of '{file_name}'; add an extension to the file name or override the output format"
        ),
    }
}
