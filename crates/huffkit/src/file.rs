//! File-level compress and decompress.
//!
//! Inputs are read whole into memory. Output is written to a uniquely named
//! temp file in the output directory and persisted over the output path once
//! complete, so a failed call never leaves a partial file at the output path
//! and never touches any other file.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use huffkit_core::{CompressionStats, Error, Result};
use huffkit_huffman::{compress, decompress};

use crate::config::Config;

/// Direction of a file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    /// Noun used in status messages.
    fn noun(self) -> &'static str {
        match self {
            Mode::Compress => "Compression",
            Mode::Decompress => "Decompression",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}

/// What a successful file operation did.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Sizes are always original vs artifact, whichever direction ran.
    pub stats: CompressionStats,
}

/// Success flag and human readable status for a finished operation.
#[derive(Debug)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub report: Option<Report>,
}

impl Outcome {
    /// Summarize the result of [`compress_file`] or [`decompress_file`].
    pub fn new(mode: Mode, result: Result<Report>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                message: format!("{} successful", mode.noun()),
                report: Some(report),
            },
            Err(Error::EmptyInput) if mode == Mode::Compress => Self {
                success: false,
                message: "File is empty".to_string(),
                report: None,
            },
            Err(e) => Self {
                success: false,
                message: format!("{} failed: {e}", mode.noun()),
                report: None,
            },
        }
    }
}

/// Output path used when none is given.
///
/// Compress appends `.{extension}`. Decompress strips `.{extension}` when the
/// input ends with it, otherwise appends `.{decompressed_suffix}`.
pub fn default_output_path(input: &Path, mode: Mode, config: &Config) -> PathBuf {
    match mode {
        Mode::Compress => append_extension(input, &config.extension),
        Mode::Decompress => {
            if input.extension().is_some_and(|ext| ext == config.extension.as_str()) {
                input.with_extension("")
            } else {
                append_extension(input, &config.decompressed_suffix)
            }
        }
    }
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Compress the file at `input` into an artifact at `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<Report> {
    run(Mode::Compress, input, output, |data, writer| {
        let artifact = compress(data)?;
        artifact
            .write_to(writer)
            .map_err(|e| Error::file("writing", output, e))?;
        Ok(artifact.encoded_len())
    })
}

/// Decompress the artifact at `input` into `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<Report> {
    run(Mode::Decompress, input, output, |data, writer| {
        let original = decompress(data)?;
        writer
            .write_all(&original)
            .map_err(|e| Error::file("writing", output, e))?;
        Ok(original.len())
    })
}

/// Read `input`, let `transform` write to a temp file, then move it to
/// `output`. `transform` returns the number of bytes it wrote.
fn run<F>(mode: Mode, input: &Path, output: &Path, transform: F) -> Result<Report>
where
    F: FnOnce(&[u8], &mut BufWriter<NamedTempFile>) -> Result<usize>,
{
    let start = Instant::now();
    let data = read_input(input)?;
    debug!(%mode, input = %input.display(), bytes = data.len(), "read input");

    let result = write_atomic(output, |writer| transform(&data, writer));

    let written = match result {
        Ok(written) => written,
        Err(e) => {
            warn!(%mode, input = %input.display(), error = %e, "operation failed");
            return Err(e);
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let stats = match mode {
        Mode::Compress => CompressionStats::from_operation(data.len(), written, elapsed),
        Mode::Decompress => CompressionStats::from_operation(written, data.len(), elapsed),
    };
    info!(
        %mode,
        input = %input.display(),
        output = %output.display(),
        "{}",
        stats.summary()
    );

    Ok(Report {
        mode,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::file("input file does not exist:", path, e),
        _ => Error::file("reading", path, e),
    })
}

/// Write through `fill` into a fresh temp file next to `path`, then persist
/// it over `path`. The temp file is deleted on drop if any step fails.
fn write_atomic<T, F>(path: &Path, fill: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> Result<T>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp =
        NamedTempFile::new_in(dir).map_err(|e| Error::file("creating temp file in", dir, e))?;

    let mut writer = BufWriter::new(tmp);
    let value = fill(&mut writer)?;
    let tmp = writer
        .into_inner()
        .map_err(|e| Error::file("writing", path, e.into_error()))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::file("syncing", tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| Error::file("persisting", path, e.error))?;
    Ok(value)
}
