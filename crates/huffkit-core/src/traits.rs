//! Core traits for compression and decompression.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Compressor / Decompressor  (one-shot operations)
//!       ↓
//! Codec  (combined compress + decompress)
//! ```
//!
//! All methods take `&self`: implementations keep no per-call state, so one
//! codec value can serve any number of unrelated inputs.

use crate::error::{Error, Result};
use crate::types::CompressionRatio;

/// One-shot compression operations.
pub trait Compressor {
    /// Compress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to compress
    ///
    /// # Returns
    /// Serialized artifact as a vector.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Compress data into existing buffer.
    ///
    /// # Arguments
    /// * `input` - Data to compress
    /// * `output` - Buffer to write compressed data
    ///
    /// # Returns
    /// Number of bytes written to output.
    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let compressed = self.compress(input)?;
        copy_into(&compressed, output)
    }

    /// Calculate maximum compressed size for input length.
    /// Useful for pre-allocating output buffers.
    fn max_compressed_size(&self, input_len: usize) -> usize;
}

/// One-shot decompression operations.
pub trait Decompressor {
    /// Decompress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Serialized artifact
    ///
    /// # Returns
    /// Decompressed data as a vector.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress data into existing buffer.
    ///
    /// # Returns
    /// Number of bytes written to output.
    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decompressed = self.decompress(input)?;
        copy_into(&decompressed, output)
    }
}

/// Combined codec for both compression and decompression.
pub trait Codec: Compressor + Decompressor {
    /// Round-trip test: compress then decompress.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let compressed = self.compress(data)?;
        let decompressed = self.decompress(&compressed)?;
        Ok(data == decompressed.as_slice())
    }

    /// Get compression ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let compressed = self.compress(data)?;
        Ok(CompressionRatio::new(data.len(), compressed.len()))
    }
}

fn copy_into(data: &[u8], output: &mut [u8]) -> Result<usize> {
    if data.len() > output.len() {
        return Err(Error::buffer_too_small(data.len(), output.len()));
    }
    output[..data.len()].copy_from_slice(data);
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity codec used to exercise the provided methods.
    struct Passthrough;

    impl Compressor for Passthrough {
        fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }

        fn max_compressed_size(&self, input_len: usize) -> usize {
            input_len
        }
    }

    impl Decompressor for Passthrough {
        fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }
    }

    impl Codec for Passthrough {}

    #[test]
    fn test_compress_to_fits() {
        let mut out = [0u8; 8];
        let written = Passthrough.compress_to(b"abc", &mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(&out[..3], b"abc");
    }

    #[test]
    fn test_compress_to_too_small() {
        let mut out = [0u8; 2];
        let err = Passthrough.compress_to(b"abcd", &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall {
                required: 4,
                provided: 2
            }
        ));
    }

    #[test]
    fn test_verify_roundtrip() {
        assert!(Passthrough.verify_roundtrip(b"roundtrip").unwrap());
        let ratio = Passthrough.measure_ratio(b"roundtrip").unwrap();
        assert_eq!(ratio.original_size, ratio.compressed_size);
    }
}
