// File: crates/lineplot-core/src/render.rs
// Summary: Renderer capability: the gnuplot subprocess and an in-memory recorder.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::config::DEFAULT_ENGINE;
use crate::error::{PlotError, Result};

/// Turns a written script into a plot. Called after the script file is closed.
pub trait Renderer {
    fn id(&self) -> &'static str;
    fn render(&self, script_path: &Path, directives: &[String]) -> Result<()>;
}

/// Adapts a closure into a [`Renderer`].
pub struct FnRenderer<F>(pub F);

impl<F> Renderer for FnRenderer<F>
where
    F: Fn(&Path, &[String]) -> Result<()>,
{
    fn id(&self) -> &'static str { "fn" }

    fn render(&self, script_path: &Path, directives: &[String]) -> Result<()> {
        (self.0)(script_path, directives)
    }
}

/// Runs `<binary> <script>` and blocks until it exits. No timeout.
#[derive(Clone, Debug)]
pub struct GnuplotRenderer {
    binary: PathBuf,
}

impl Default for GnuplotRenderer {
    fn default() -> Self { Self::new(DEFAULT_ENGINE) }
}

impl GnuplotRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into() }
    }

    pub fn binary(&self) -> &Path { &self.binary }

    pub fn command_line(&self, script_path: &Path) -> String {
        format!("{} {}", self.binary.display(), script_path.display())
    }
}

impl Renderer for GnuplotRenderer {
    fn id(&self) -> &'static str { "gnuplot" }

    fn render(&self, script_path: &Path, _directives: &[String]) -> Result<()> {
        let command = self.command_line(script_path);
        info!(%command, "invoking plot engine");

        let status = Command::new(&self.binary).arg(script_path).status().map_err(|e| {
            warn!(%command, error = %e, "failed to launch plot engine");
            PlotError::RenderFailure {
                command: command.clone(),
                reason: format!("failed to launch engine ({e}); is it on your PATH?"),
            }
        })?;

        if !status.success() {
            warn!(%command, %status, "plot engine failed");
            return Err(PlotError::RenderFailure { command, reason: format!("engine exited with {status}") });
        }
        Ok(())
    }
}

/// One captured render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedScript {
    pub script_path: PathBuf,
    pub directives: Vec<String>,
}

/// Test double: records each script instead of launching a process.
/// Not `Sync`; sessions are single-threaded.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<RenderedScript>>,
    fail_with: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self { Self::default() }

    /// Record calls but report every one as a render failure with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self { calls: RefCell::default(), fail_with: Some(reason.into()) }
    }

    pub fn calls(&self) -> Vec<RenderedScript> { self.calls.borrow().clone() }

    pub fn call_count(&self) -> usize { self.calls.borrow().len() }

    pub fn last(&self) -> Option<RenderedScript> { self.calls.borrow().last().cloned() }
}

impl Renderer for RecordingRenderer {
    fn id(&self) -> &'static str { "recording" }

    fn render(&self, script_path: &Path, directives: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(RenderedScript {
            script_path: script_path.to_path_buf(),
            directives: directives.to_vec(),
        });
        match &self.fail_with {
            Some(reason) => Err(PlotError::RenderFailure {
                command: format!("recording {}", script_path.display()),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
