// File: crates/lineplot-core/src/lib.rs
// Summary: Core library entry point; exports the plot session and its building blocks.

pub mod axis;
pub mod config;
pub mod error;
pub mod files;
pub mod format;
pub mod grid;
pub mod number;
pub mod render;
pub mod script;
pub mod series;
pub mod session;
pub mod style;

pub use axis::{resolve_range, AxisKind, AxisRange};
pub use config::{PlotConfiguration, SessionConfig};
pub use error::{PlotError, Result};
pub use format::{resolve_format, OutputFormat, OutputTarget};
pub use grid::{generate, linspace, linspace_inclusive};
pub use render::{FnRenderer, GnuplotRenderer, RecordingRenderer, Renderer};
pub use series::DataSeries;
pub use session::{PlotArtifact, PlotSession, SessionState};
pub use style::LineStyle;
