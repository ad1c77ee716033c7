// File: crates/lineplot-core/src/files.rs
// Summary: Managed data/script directories and scoped writers for both files.
// Notes:
// - Every writer lives inside the function that opens it and is flushed
//   explicitly, so handles are closed on success and on every `?` exit.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SessionConfig;
use crate::error::{PlotError, Result};
use crate::number::format_number;
use crate::series::DataSeries;

#[derive(Debug)]
pub struct FileManager {
    data_dir: PathBuf,
    script_path: PathBuf,
    plot_num: u32,
}

impl FileManager {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            script_path: config.script_path(),
            plot_num: 0,
        }
    }

    /// Number of data files allocated so far.
    pub fn plot_count(&self) -> u32 { self.plot_num }

    pub fn script_path(&self) -> &Path { &self.script_path }

    /// Write `series` to the next `data<N>.dat` file and return its path.
    pub fn write_data_file(&mut self, series: &DataSeries) -> Result<PathBuf> {
        ensure_dir(&self.data_dir)?;
        self.plot_num += 1;
        let path = self.data_dir.join(format!("data{}.dat", self.plot_num));

        let file = open(&path)?;
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(BufWriter::new(file));

        for (x, y) in series.points() {
            wtr.write_record([format_number(x), format_number(y)])
                .map_err(|e| write_err(&path, e.into()))?;
        }
        wtr.flush().map_err(|e| write_err(&path, e))?;

        debug!(path = %path.display(), points = series.len(), "wrote data file");
        Ok(path)
    }

    /// Write `directives` one per line to the script file and return its path.
    pub fn write_script_file(&self, directives: &[String]) -> Result<PathBuf> {
        if let Some(dir) = self.script_path.parent() {
            ensure_dir(dir)?;
        }
        let path = self.script_path.clone();
        let mut out = BufWriter::new(open(&path)?);
        for line in directives {
            writeln!(out, "{line}").map_err(|e| write_err(&path, e))?;
        }
        out.flush().map_err(|e| write_err(&path, e))?;

        debug!(path = %path.display(), lines = directives.len(), "wrote script file");
        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| PlotError::Directory { path: dir.to_path_buf(), source })
}

fn open(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| PlotError::FileOpen { path: path.to_path_buf(), source })
}

fn write_err(path: &Path, source: std::io::Error) -> PlotError {
    PlotError::Write { path: path.to_path_buf(), source }
}
