//! # Huffkit Core
//!
//! Core traits, types, and error handling for the huffkit compression codec.
//!
//! ## Design Philosophy
//!
//! - **Stateless codecs**: Every call builds and consumes its own tables
//! - **Explicit formats**: Artifacts are plain bytes with a documented layout
//! - **Tagged failures**: Every error is a [`Error`] variant, never a panic
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use huffkit_core::Codec;
//! use huffkit_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;
