//! # Huffkit Huffman
//!
//! Byte-oriented Huffman compression with an explicit, portable artifact
//! format.
//!
//! ## Pipeline
//!
//! ```text
//! compress:   FrequencyTable -> HuffmanTree -> CodeTable -> PackedPayload -> CompressedArtifact
//! decompress: CompressedArtifact -> BitSequence -> DecodeTrie walk -> bytes
//! ```
//!
//! Tree construction breaks weight ties by creation order (leaves are created
//! in ascending symbol order), so the same input always produces the same
//! artifact bytes.
//!
//! ## Example
//!
//! ```
//! use huffkit_huffman::{compress, decompress};
//!
//! let artifact = compress(b"aaabbc")?;
//! let bytes = artifact.to_bytes();
//! assert_eq!(decompress(&bytes)?, b"aaabbc");
//! # Ok::<(), huffkit_core::Error>(())
//! ```

pub mod bits;
pub mod code;
pub mod codec;
pub mod container;
pub mod frequency;
pub mod tree;

// Re-export main types
pub use bits::{BitSequence, PackedPayload, pack, unpack};
pub use code::{Code, CodeTable, DecodeTrie, ReverseCodeTable, generate_codes};
pub use codec::{HuffmanCodec, compress, decompress};
pub use container::{CompressedArtifact, decode_payload};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, TreeNode};
