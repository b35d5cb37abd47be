//! Artifact container: reverse code table plus packed payload.
//!
//! ## Layout
//!
//! All multi-byte integers are big-endian.
//!
//! ```text
//! u16                entry count (1..=256)
//! per entry, ascending symbol order:
//!   u8               symbol
//!   u8               code length in bits (1..=255)
//!   [u8; ceil(len/8)] code bits, MSB first, zero-filled
//! u8                 padding count (0..=7)
//! [u8]               packed code bits until end of artifact
//! ```

use std::io::{self, Cursor, Read, Write};

use huffkit_core::{Error, Result};

use crate::bits::{PackedPayload, unpack};
use crate::code::{Code, DecodeTrie, ReverseCodeTable};
use crate::frequency::ALPHABET_SIZE;

/// Size of the entry count field.
const ENTRY_COUNT_SIZE: usize = 2;

/// Complete output of one compress call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    reverse: ReverseCodeTable,
    payload: PackedPayload,
}

impl CompressedArtifact {
    /// Combine a reverse table and the payload it encodes.
    pub fn new(reverse: ReverseCodeTable, payload: PackedPayload) -> Self {
        Self { reverse, payload }
    }

    pub fn reverse_table(&self) -> &ReverseCodeTable {
        &self.reverse
    }

    pub fn payload(&self) -> &PackedPayload {
        &self.payload
    }

    /// Size of the code-table section in bytes.
    pub fn table_section_len(&self) -> usize {
        ENTRY_COUNT_SIZE
            + self
                .reverse
                .iter()
                .map(|(code, _)| 2 + code.len().div_ceil(8))
                .sum::<usize>()
    }

    /// Serialized size in bytes.
    pub fn encoded_len(&self) -> usize {
        self.table_section_len() + self.payload.encoded_len()
    }

    /// Serialize to the artifact layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut bytes);
        bytes
    }

    /// Serialize into a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let count = self.reverse.len() as u16;
        writer.write_all(&count.to_be_bytes())?;

        for (symbol, code) in self.reverse.by_symbol() {
            writer.write_all(&[symbol, code.len() as u8])?;
            writer.write_all(&code.to_packed())?;
        }

        writer.write_all(&[self.payload.padding()])?;
        writer.write_all(self.payload.data())?;
        Ok(())
    }

    /// Parse and validate an artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes).map(|(artifact, _)| artifact)
    }

    /// Parse an artifact and decode its payload, building the decode trie
    /// once.
    pub fn decode_bytes(bytes: &[u8]) -> Result<(Self, Vec<u8>)> {
        let (artifact, trie) = Self::parse(bytes)?;
        let output = artifact.decode_with(&trie)?;
        Ok((artifact, output))
    }

    /// Parse and validate, returning the trie built while checking that the
    /// table is prefix-free.
    fn parse(bytes: &[u8]) -> Result<(Self, DecodeTrie)> {
        let mut cursor = Cursor::new(bytes);

        let mut count_bytes = [0u8; ENTRY_COUNT_SIZE];
        read_section(&mut cursor, &mut count_bytes, "entry count")?;
        let count = u16::from_be_bytes(count_bytes) as usize;
        if count == 0 || count > ALPHABET_SIZE {
            return Err(Error::corrupted_at(
                format!("code table entry count {count} out of range 1..={ALPHABET_SIZE}"),
                0,
            ));
        }

        let mut reverse = ReverseCodeTable::new();
        for _ in 0..count {
            let offset = cursor.position() as usize;

            let mut header = [0u8; 2];
            read_section(&mut cursor, &mut header, "code table entry")?;
            let [symbol, len] = header;
            if len == 0 {
                return Err(Error::corrupted_at(
                    format!("zero-length code for symbol 0x{symbol:02x}"),
                    offset,
                ));
            }

            let mut packed = vec![0u8; (len as usize).div_ceil(8)];
            read_section(&mut cursor, &mut packed, "code bits")?;
            let code = Code::from_packed(&packed, len as usize).ok_or_else(|| {
                Error::corrupted_at(
                    format!("non-zero filler bits in code for symbol 0x{symbol:02x}"),
                    offset,
                )
            })?;

            reverse.insert(code, symbol).map_err(|e| match e {
                Error::CorruptArtifact { message, .. } => Error::corrupted_at(message, offset),
                other => other,
            })?;
        }

        // Rejects tables that are not prefix-free.
        let trie = DecodeTrie::build(&reverse)?;

        let payload_offset = cursor.position() as usize;
        let payload = PackedPayload::from_bytes(&bytes[payload_offset..]).map_err(|e| match e {
            Error::CorruptArtifact { message, .. } => {
                Error::corrupted_at(message, payload_offset)
            }
            other => other,
        })?;

        Ok((Self { reverse, payload }, trie))
    }

    /// Decode the payload back to the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        self.decode_with(&DecodeTrie::build(&self.reverse)?)
    }

    fn decode_with(&self, trie: &DecodeTrie) -> Result<Vec<u8>> {
        decode_bits(trie, self.payload.bits().iter(), self.payload.bit_len())
    }
}

/// Decode a serialized payload section with a reverse table.
pub fn decode_payload(reverse: &ReverseCodeTable, payload: &[u8]) -> Result<Vec<u8>> {
    let trie = DecodeTrie::build(reverse)?;
    let bits = unpack(payload)?;
    decode_bits(&trie, bits.iter(), bits.len())
}

/// Walk the trie bit by bit, emitting a symbol at every leaf.
///
/// Each unmatched step means the bits so far form no prefix of any code, which
/// is reported as `UnknownSymbol` at the offset where that candidate started.
/// Bits left over after the last complete code are `CorruptArtifact`.
fn decode_bits(
    trie: &DecodeTrie,
    bits: impl Iterator<Item = bool>,
    bit_len: usize,
) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(bit_len / 2);
    let mut node = DecodeTrie::ROOT;
    let mut candidate_start = 0;

    for (offset, bit) in bits.enumerate() {
        node = trie
            .step(node, bit)
            .ok_or_else(|| Error::unknown_symbol(candidate_start))?;

        if let Some(symbol) = trie.symbol(node) {
            output.push(symbol);
            node = DecodeTrie::ROOT;
            candidate_start = offset + 1;
        }
    }

    if node != DecodeTrie::ROOT {
        return Err(Error::corrupted(format!(
            "{} trailing bits at bit offset {candidate_start} do not form a complete code",
            bit_len - candidate_start
        )));
    }

    Ok(output)
}

fn read_section(cursor: &mut Cursor<&[u8]>, buf: &mut [u8], what: &str) -> Result<()> {
    let offset = cursor.position() as usize;
    cursor.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::corrupted_at(format!("truncated {what}"), offset),
        _ => Error::Io(e),
    })
}
