//! Statistics for compression operations.

use crate::types::CompressionRatio;

/// Statistics from a compression/decompression operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Compressed (artifact) size in bytes.
    pub compressed_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stats from a completed operation.
    pub fn from_operation(original_size: usize, compressed_size: usize, time_us: u64) -> Self {
        CompressionStats {
            original_size,
            compressed_size,
            time_us,
        }
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} bytes (ratio: {:.2}x, saved {:.1}%) in {} us",
            self.original_size,
            self.compressed_size,
            self.ratio().ratio(),
            self.savings_percent(),
            self.time_us,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        let stats = CompressionStats::from_operation(2_000_000, 1_000_000, 1_000_000);
        assert_eq!(stats.throughput_bps(), 2_000_000.0);
        assert_eq!(stats.throughput_mbs(), 2.0);
        assert_eq!(stats.savings_percent(), 50.0);
    }

    #[test]
    fn test_zero_time() {
        let stats = CompressionStats::from_operation(100, 50, 0);
        assert_eq!(stats.throughput_bps(), 0.0);
    }

    #[test]
    fn test_summary() {
        let stats = CompressionStats::from_operation(100, 50, 7);
        assert_eq!(
            stats.summary(),
            "100 -> 50 bytes (ratio: 2.00x, saved 50.0%) in 7 us"
        );
    }
}
