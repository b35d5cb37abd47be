//! # Huffkit
//!
//! Lossless byte-oriented Huffman compression.
//!
//! The codec lives in [`huffkit_huffman`]; this crate re-exports it and adds
//! the file layer used by the `huffkit` command-line tool.
//!
//! ## Quick Start
//!
//! ```
//! use huffkit::{Codec, Compressor, Decompressor, HuffmanCodec};
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(b"Hello, Huffman!")?;
//! let original = codec.decompress(&compressed)?;
//! assert_eq!(original, b"Hello, Huffman!");
//! assert!(codec.verify_roundtrip(b"abracadabra")?);
//! # Ok::<(), huffkit::Error>(())
//! ```
//!
//! ## Files
//!
//! ```no_run
//! use huffkit::{Config, Mode, Outcome, compress_file, default_output_path};
//! use std::path::Path;
//!
//! let input = Path::new("notes.txt");
//! let output = default_output_path(input, Mode::Compress, &Config::default());
//! let outcome = Outcome::new(Mode::Compress, compress_file(input, &output));
//! println!("{}", outcome.message);
//! ```

pub mod config;
pub mod file;

pub use config::Config;
pub use file::{Mode, Outcome, Report, compress_file, decompress_file, default_output_path};

// Core
pub use huffkit_core::{
    Codec, CompressionRatio, CompressionStats, Compressor, Decompressor, Error, Result,
};

// Codec
pub use huffkit_huffman::{
    CompressedArtifact, FrequencyTable, HuffmanCodec, HuffmanTree, compress, decompress,
};
