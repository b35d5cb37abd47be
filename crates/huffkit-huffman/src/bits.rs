//! Bit packing and unpacking.
//!
//! Codes are written most-significant-bit first. A packed payload is one
//! header byte holding the number of zero filler bits (0-7) appended to the
//! last data byte, followed by the data bytes:
//!
//! ```text
//! +---------+------------------------------+
//! | padding | code bits ... | 0 x padding  |
//! +---------+------------------------------+
//! ```

use huffkit_core::{Error, Result};

use crate::code::{Code, CodeTable};

/// Largest valid padding count.
pub const MAX_PADDING: u8 = 7;

/// Bit writer, MSB first.
pub struct BitWriter {
    data: Vec<u8>,
    bit_buf: u64,
    bit_count: u8,
}

impl BitWriter {
    /// Create a new bit writer.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Create with capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            bit_buf: 0,
            bit_count: 0,
        }
    }

    /// Write the low `n` bits of `value`, highest of them first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);
        if n == 0 {
            return;
        }
        let value = (value as u64) & ((1u64 << n) - 1);
        self.bit_buf = (self.bit_buf << n) | value;
        self.bit_count += n;

        while self.bit_count >= 8 {
            self.bit_count -= 8;
            self.data.push((self.bit_buf >> self.bit_count) as u8);
        }
        self.bit_buf &= (1u64 << self.bit_count) - 1;
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u32, 1);
    }

    /// Write every bit of a Huffman code.
    #[inline]
    pub fn write_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.write_bit(bit);
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 + self.bit_count as usize
    }

    /// Flush remaining bits, zero-filling the last byte.
    ///
    /// Returns the bytes and the number of filler bits added (0-7).
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let mut padding = 0;
        if self.bit_count > 0 {
            padding = 8 - self.bit_count;
            self.data.push((self.bit_buf << padding) as u8);
        }
        (self.data, padding)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit reader, MSB first, over a borrowed byte slice with an exact bit length.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Read `bit_len` bits from `data`.
    pub fn new(data: &'a [u8], bit_len: usize) -> Self {
        debug_assert!(bit_len <= data.len() * 8);
        Self {
            data,
            pos: 0,
            bit_len,
        }
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bit_len - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let bit = self.data[self.pos / 8] & (0x80 >> (self.pos % 8)) != 0;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// The exact code bit sequence of a payload, filler bits excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSequence<'a> {
    data: &'a [u8],
    bit_len: usize,
}

impl<'a> BitSequence<'a> {
    /// Number of code bits.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> BitReader<'a> {
        BitReader::new(self.data, self.bit_len)
    }
}

impl<'a> IntoIterator for BitSequence<'a> {
    type Item = bool;
    type IntoIter = BitReader<'a>;

    fn into_iter(self) -> BitReader<'a> {
        self.iter()
    }
}

/// Bit-packed encoding with its padding header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPayload {
    padding: u8,
    data: Vec<u8>,
}

impl PackedPayload {
    /// Number of zero filler bits at the end of the data (0-7).
    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// Packed data bytes, header excluded.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encoded size: header byte plus data.
    pub fn encoded_len(&self) -> usize {
        1 + self.data.len()
    }

    /// Number of code bits carried.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 - self.padding as usize
    }

    /// View the code bits.
    pub fn bits(&self) -> BitSequence<'_> {
        BitSequence {
            data: &self.data,
            bit_len: self.bit_len(),
        }
    }

    /// Header byte followed by data.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.push(self.padding);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    /// Parse and validate a payload section.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bits = unpack(bytes)?;
        Ok(Self {
            padding: bytes[0],
            data: bits.data.to_vec(),
        })
    }
}

/// Concatenate the code of every input byte and pack the result.
pub fn pack(input: &[u8], table: &CodeTable) -> Result<PackedPayload> {
    let mut writer = BitWriter::with_capacity(input.len() / 2 + 1);

    for (offset, &byte) in input.iter().enumerate() {
        let code = table.get(byte).ok_or_else(|| {
            Error::corrupted_at(
                format!("code table has no entry for byte 0x{byte:02x}"),
                offset,
            )
        })?;
        writer.write_code(code);
    }

    let (data, padding) = writer.finish();
    Ok(PackedPayload { padding, data })
}

/// Validate a serialized payload and expose its exact code bits.
///
/// Fails with `CorruptArtifact` if the header is missing, the padding count
/// exceeds 7, the payload has no code bits, or a filler bit is set.
pub fn unpack(payload: &[u8]) -> Result<BitSequence<'_>> {
    let (&padding, data) = payload
        .split_first()
        .ok_or_else(|| Error::corrupted("payload is missing its padding header"))?;

    if padding > MAX_PADDING {
        return Err(Error::corrupted(format!(
            "padding count {padding} out of range 0..={MAX_PADDING}"
        )));
    }

    let total_bits = data.len() * 8;
    if total_bits <= padding as usize {
        return Err(Error::corrupted(format!(
            "payload of {} bytes carries no code bits with padding {padding}",
            data.len()
        )));
    }

    if padding > 0 {
        let filler_mask = (1u8 << padding) - 1;
        if data[data.len() - 1] & filler_mask != 0 {
            return Err(Error::corrupted("non-zero padding bits"));
        }
    }

    Ok(BitSequence {
        data,
        bit_len: total_bits - padding as usize,
    })
}
