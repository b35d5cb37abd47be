//! Huffkit command-line tool.
//!
//! ## Usage
//!
//! ```bash
//! # Writes notes.txt.huff
//! huffkit compress notes.txt
//!
//! # Writes notes.txt
//! huffkit decompress notes.txt.huff
//!
//! # Explicit output and verbose logging
//! huffkit --log-level debug decompress archive.huff -o restored.bin
//! ```

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use huffkit::{Config, Mode, Outcome, compress_file, decompress_file, default_output_path};

#[derive(Parser, Debug)]
#[command(name = "huffkit")]
#[command(version)]
#[command(about = "Lossless Huffman file compression", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Configuration file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output path (default: INPUT.huff)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a .huff artifact
    Decompress {
        /// Artifact to decompress
        input: PathBuf,

        /// Output path (default: INPUT without .huff, or INPUT.decompressed)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(?config, "loaded configuration");

    let (mode, input, output) = match args.command {
        Command::Compress { input, output } => (Mode::Compress, input, output),
        Command::Decompress { input, output } => (Mode::Decompress, input, output),
    };
    let output = output.unwrap_or_else(|| default_output_path(&input, mode, &config));

    let result = match mode {
        Mode::Compress => compress_file(&input, &output),
        Mode::Decompress => decompress_file(&input, &output),
    };
    let outcome = Outcome::new(mode, result);

    if !outcome.success {
        eprintln!("{}", outcome.message);
        process::exit(1);
    }

    println!("{}", outcome.message);
    if let Some(report) = &outcome.report {
        println!("  {} -> {}", report.input.display(), report.output.display());
        println!("  {}", report.stats.summary());
    }

    Ok(())
}
