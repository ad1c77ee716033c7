// File: crates/lineplot-core/src/session.rs
// Summary: PlotSession: configure, submit data, then save to render through gnuplot.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::axis::{resolve_range, AxisKind, AxisRange};
use crate::config::{PlotConfiguration, SessionConfig};
use crate::error::{PlotError, Result};
use crate::files::FileManager;
use crate::format::{OutputFormat, OutputTarget};
use crate::render::{GnuplotRenderer, Renderer};
use crate::script::{assemble_script, ScriptInputs};
use crate::series::DataSeries;
use crate::style::LineStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unconfigured,
    OutputTargetSet,
    DataSubmitted,
    Saved,
}

/// What one successful [`PlotSession::save`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotArtifact {
    pub data_path: PathBuf,
    pub script_path: PathBuf,
    pub directives: Vec<String>,
    pub xrange: AxisRange,
    pub yrange: AxisRange,
    pub format: OutputFormat,
}

/// A single-plot gnuplot session. Not thread-safe; drive it from one thread.
pub struct PlotSession<R: Renderer = GnuplotRenderer> {
    config: PlotConfiguration,
    files: FileManager,
    renderer: R,
    series: Option<DataSeries>,
    data_path: Option<PathBuf>,
    state: SessionState,
}

impl PlotSession<GnuplotRenderer> {
    /// Session configured from the environment (see [`SessionConfig::from_env`]).
    pub fn new() -> Self {
        Self::with_config(SessionConfig::from_env())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let renderer = GnuplotRenderer::new(config.engine.clone());
        Self::with_renderer(config, renderer)
    }
}

impl Default for PlotSession<GnuplotRenderer> {
    fn default() -> Self { Self::new() }
}

impl<R: Renderer> PlotSession<R> {
    pub fn with_renderer(config: SessionConfig, renderer: R) -> Self {
        Self {
            config: PlotConfiguration::default(),
            files: FileManager::new(&config),
            renderer,
            series: None,
            data_path: None,
            state: SessionState::Unconfigured,
        }
    }

    pub fn state(&self) -> SessionState { self.state }
    pub fn config(&self) -> &PlotConfiguration { &self.config }
    pub fn config_mut(&mut self) -> &mut PlotConfiguration { &mut self.config }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn series(&self) -> Option<&DataSeries> { self.series.as_ref() }
    pub fn data_path(&self) -> Option<&Path> { self.data_path.as_deref() }
    /// Number of data files written by this session.
    pub fn plot_count(&self) -> u32 { self.files.plot_count() }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.config.title = title.into();
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.xlabel = label.into();
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.ylabel = label.into();
        self
    }

    /// Fix the x range. Checked (`min < max`) when saving.
    pub fn set_xrange(&mut self, min: f64, max: f64) -> &mut Self {
        self.config.xrange = Some(AxisRange::new(min, max));
        self
    }

    pub fn set_yrange(&mut self, min: f64, max: f64) -> &mut Self {
        self.config.yrange = Some(AxisRange::new(min, max));
        self
    }

    /// Go back to inferring the x range from data.
    pub fn clear_xrange(&mut self) -> &mut Self {
        self.config.xrange = None;
        self
    }

    pub fn clear_yrange(&mut self) -> &mut Self {
        self.config.yrange = None;
        self
    }

    pub fn set_line_style(&mut self, style: LineStyle) -> &mut Self {
        self.config.line_style = style;
        self
    }

    /// Set the output file. With [`OutputFormat::Auto`] the format is deduced
    /// from the extension when saving.
    pub fn set_output_file(&mut self, file_name: impl Into<String>, format: OutputFormat) -> &mut Self {
        self.config.output = Some(OutputTarget::new(file_name, format));
        if self.state == SessionState::Unconfigured {
            self.state = SessionState::OutputTargetSet;
        }
        self
    }

    /// Replace the plotted series with `x`/`y` and write it to a fresh data file.
    pub fn plot(&mut self, x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>, legend: impl Into<String>) -> Result<&Path> {
        let series = DataSeries::new(x.into(), y.into(), legend)?;
        self.plot_series(series)
    }

    pub fn plot_series(&mut self, series: DataSeries) -> Result<&Path> {
        let path = self.files.write_data_file(&series)?;
        debug!(legend = series.legend(), path = %path.display(), "series submitted");
        self.series = Some(series);
        self.state = SessionState::DataSubmitted;
        Ok(self.data_path.insert(path).as_path())
    }

    /// Resolve ranges and format, write the script and render it.
    /// Can be called again after a successful save to re-render.
    pub fn save(&mut self) -> Result<PlotArtifact> {
        let (series, data_path) = match (&self.series, &self.data_path) {
            (Some(s), Some(p)) => (s, p),
            _ => return Err(PlotError::NoData),
        };
        let target = self.config.output.as_ref().ok_or(PlotError::NoOutputTarget)?;

        let format = target.resolve()?;
        let xrange = resolve_range(AxisKind::X, self.config.xrange, series.x())?;
        let yrange = resolve_range(AxisKind::Y, self.config.yrange, series.y())?;

        let directives = assemble_script(&ScriptInputs {
            config: &self.config,
            output_file: &target.file_name,
            format,
            xrange,
            yrange,
            data_path,
            legend: series.legend(),
        })?;
        let script_path = self.files.write_script_file(&directives)?;

        info!(
            renderer = self.renderer.id(),
            output = %target.file_name,
            %format,
            "rendering plot"
        );
        self.renderer.render(&script_path, &directives)?;

        let artifact = PlotArtifact {
            data_path: data_path.clone(),
            script_path,
            directives,
            xrange,
            yrange,
            format,
        };
        self.state = SessionState::Saved;
        Ok(artifact)
    }
}
