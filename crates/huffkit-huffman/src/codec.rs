//! One-shot compress/decompress entry points and the `HuffmanCodec` type.

use huffkit_core::{Codec, Compressor, Decompressor, Error, Result};
use tracing::debug;

use crate::bits::pack;
use crate::code::{MAX_CODE_LEN, generate_codes};
use crate::container::CompressedArtifact;
use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use crate::tree::HuffmanTree;

/// Compress `input` into an artifact.
///
/// Fails with [`Error::EmptyInput`] when `input` has no bytes.
pub fn compress(input: &[u8]) -> Result<CompressedArtifact> {
    let frequencies = FrequencyTable::from_bytes(input);
    let tree = HuffmanTree::build(&frequencies).ok_or(Error::EmptyInput)?;
    let (table, reverse) = generate_codes(&tree);
    drop(tree);

    let payload = pack(input, &table)?;
    debug!(
        input_len = input.len(),
        symbols = table.len(),
        max_code_len = table.max_len(),
        payload_bits = payload.bit_len(),
        padding = payload.padding(),
        "compressed"
    );

    Ok(CompressedArtifact::new(reverse, payload))
}

/// Reconstruct the original bytes from a serialized artifact.
pub fn decompress(artifact: &[u8]) -> Result<Vec<u8>> {
    let (artifact, output) = CompressedArtifact::decode_bytes(artifact)?;
    debug!(
        symbols = artifact.reverse_table().len(),
        payload_bits = artifact.payload().bit_len(),
        output_len = output.len(),
        "decompressed"
    );
    Ok(output)
}

/// Huffman codec over serialized artifacts.
///
/// Holds no state; every call builds its own tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input).map(|artifact| artifact.to_bytes())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Full alphabet with every code at the length limit, then every input
        // byte at the length limit.
        let table = 2 + ALPHABET_SIZE * (2 + MAX_CODE_LEN.div_ceil(8));
        let payload = 1 + input_len.saturating_mul(MAX_CODE_LEN).div_ceil(8);
        table.saturating_add(payload)
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}

impl Codec for HuffmanCodec {}
