// File: crates/lineplot-core/src/config.rs
// Summary: Session-level settings (directories, engine) and the per-plot configuration.

use std::path::{Path, PathBuf};

use crate::axis::AxisRange;
use crate::format::OutputTarget;
use crate::style::LineStyle;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_SCRIPT_DIR: &str = "scripts";
pub const DEFAULT_SCRIPT_NAME: &str = "script.gplt";
pub const DEFAULT_ENGINE: &str = "gnuplot";

pub const ENV_DATA_DIR: &str = "LINEPLOT_DATA_DIR";
pub const ENV_SCRIPT_DIR: &str = "LINEPLOT_SCRIPT_DIR";
pub const ENV_ENGINE: &str = "LINEPLOT_GNUPLOT";

/// Where a session keeps its files and which engine binary it launches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    pub script_dir: PathBuf,
    pub script_name: String,
    pub engine: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            script_dir: PathBuf::from(DEFAULT_SCRIPT_DIR),
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            engine: PathBuf::from(DEFAULT_ENGINE),
        }
    }
}

impl SessionConfig {
    /// Defaults, overridden by `LINEPLOT_DATA_DIR`, `LINEPLOT_SCRIPT_DIR` and
    /// `LINEPLOT_GNUPLOT` when set and non-empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        let mut cfg = Self::default();
        if let Some(dir) = var(ENV_DATA_DIR) { cfg.data_dir = dir; }
        if let Some(dir) = var(ENV_SCRIPT_DIR) { cfg.script_dir = dir; }
        if let Some(bin) = var(ENV_ENGINE) { cfg.engine = bin; }
        cfg
    }

    /// Place both managed directories under `root` (e.g. a temp dir in tests).
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_dir: root.join(DEFAULT_DATA_DIR),
            script_dir: root.join(DEFAULT_SCRIPT_DIR),
            ..Self::default()
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self { self.data_dir = dir.into(); self }
    pub fn with_script_dir(mut self, dir: impl Into<PathBuf>) -> Self { self.script_dir = dir.into(); self }
    pub fn with_script_name(mut self, name: impl Into<String>) -> Self { self.script_name = name.into(); self }
    pub fn with_engine(mut self, engine: impl Into<PathBuf>) -> Self { self.engine = engine.into(); self }

    pub fn script_path(&self) -> PathBuf {
        self.script_dir.join(&self.script_name)
    }
}

/// Labels, ranges, output target and style of the plot being built.
/// Validation is deferred to [`crate::PlotSession::save`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotConfiguration {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// `None` infers the range from the data.
    pub xrange: Option<AxisRange>,
    pub yrange: Option<AxisRange>,
    pub output: Option<OutputTarget>,
    pub line_style: LineStyle,
}
