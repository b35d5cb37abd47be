//! Byte frequency analysis.

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for every byte value of an input.
///
/// Invariant: the counts sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `data` exactly once.
    pub fn from_bytes(data: &[u8]) -> Self {
        // 4 interleaved histograms so consecutive equal bytes don't serialize
        // on the same counter.
        let mut freq0 = [0u64; ALPHABET_SIZE];
        let mut freq1 = [0u64; ALPHABET_SIZE];
        let mut freq2 = [0u64; ALPHABET_SIZE];
        let mut freq3 = [0u64; ALPHABET_SIZE];

        let chunks = data.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            freq0[chunk[0] as usize] += 1;
            freq1[chunk[1] as usize] += 1;
            freq2[chunk[2] as usize] += 1;
            freq3[chunk[3] as usize] += 1;
        }

        for &byte in remainder {
            freq0[byte as usize] += 1;
        }

        for i in 0..ALPHABET_SIZE {
            freq0[i] += freq1[i] + freq2[i] + freq3[i];
        }

        Self {
            counts: freq0,
            total: data.len() as u64,
        }
    }

    /// Occurrences of `symbol`.
    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols present.
    pub fn alphabet_size(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Present symbols with their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            total: 0,
        }
    }
}
