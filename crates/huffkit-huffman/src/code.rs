//! Code assignment and the forward/reverse code tables.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use huffkit_core::{Error, Result};

use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use crate::tree::{HuffmanTree, TreeNode};

/// Maximum code length representable in an artifact entry.
pub const MAX_CODE_LEN: usize = u8::MAX as usize;

/// A variable-length bit string, first bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Empty code. Only valid as a traversal prefix, never as a table entry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Pack MSB-first, zero-filled to a whole number of bytes.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut packed = vec![0u8; self.bits.len().div_ceil(8)];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                packed[i / 8] |= 0x80 >> (i % 8);
            }
        }
        packed
    }

    /// Read `len` bits MSB-first from `packed`.
    ///
    /// Returns `None` if `packed` is not exactly `ceil(len / 8)` bytes or any
    /// filler bit after the code is set.
    pub fn from_packed(packed: &[u8], len: usize) -> Option<Self> {
        if packed.len() != len.div_ceil(8) {
            return None;
        }
        let bit_at = |i: usize| packed[i / 8] & (0x80 >> (i % 8)) != 0;
        if (len..packed.len() * 8).any(bit_at) {
            return None;
        }
        Some(Self {
            bits: (0..len).map(bit_at).collect(),
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::corrupted(format!("invalid bit character {other:?}"))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Code::from_bits)
    }
}

/// Symbol -> code mapping used for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Table with no entries.
    pub fn new() -> Self {
        Self {
            codes: vec![None; ALPHABET_SIZE],
        }
    }

    /// Code for `symbol`, if it is part of the alphabet.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Longest code length in bits.
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Number of bits needed to encode an input with these frequencies.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| frequencies.count(symbol) * code.len() as u64)
            .sum()
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Build the exact inverse mapping.
    pub fn reverse(&self) -> ReverseCodeTable {
        ReverseCodeTable {
            entries: self.iter().map(|(symbol, c)| (c.clone(), symbol)).collect(),
        }
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        self.codes[symbol as usize] = Some(code);
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Code -> symbol mapping used for decoding and persisted in artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseCodeTable {
    entries: BTreeMap<Code, u8>,
}

impl ReverseCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, rejecting empty codes, duplicate codes and duplicate
    /// symbols.
    pub fn insert(&mut self, code: Code, symbol: u8) -> Result<()> {
        if code.is_empty() {
            return Err(Error::corrupted(format!(
                "empty code for symbol 0x{symbol:02x}"
            )));
        }
        if code.len() > MAX_CODE_LEN {
            return Err(Error::corrupted(format!(
                "code for symbol 0x{symbol:02x} is {} bits long",
                code.len()
            )));
        }
        if self.entries.values().any(|&s| s == symbol) {
            return Err(Error::corrupted(format!(
                "duplicate entry for symbol 0x{symbol:02x}"
            )));
        }
        if self.entries.contains_key(&code) {
            return Err(Error::corrupted(format!("duplicate code {code}")));
        }
        self.entries.insert(code, symbol);
        Ok(())
    }

    /// Symbol for an exact code match.
    pub fn get(&self, code: &Code) -> Option<u8> {
        self.entries.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&Code, u8)> + '_ {
        self.entries.iter().map(|(c, &s)| (c, s))
    }

    /// Entries sorted by ascending symbol, the artifact order.
    pub fn by_symbol(&self) -> Vec<(u8, &Code)> {
        let mut entries: Vec<(u8, &Code)> = self.iter().map(|(c, s)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }

    /// Forward table with the same entries.
    pub fn to_code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        for (code, symbol) in self.iter() {
            table.insert(symbol, code.clone());
        }
        table
    }
}

/// Assign codes by walking the tree: `0` for left, `1` for right.
///
/// A tree whose root is a leaf (single-symbol input) assigns the one-bit code
/// `0` to that symbol, so every occurrence still costs exactly one bit.
pub fn generate_codes(tree: &HuffmanTree) -> (CodeTable, ReverseCodeTable) {
    let mut table = CodeTable::new();
    match tree.root() {
        TreeNode::Leaf { symbol, .. } => table.insert(*symbol, Code::from_bits(vec![false])),
        root => assign(root, &mut Vec::new(), &mut table),
    }
    let reverse = table.reverse();
    (table, reverse)
}

fn assign(node: &TreeNode, prefix: &mut Vec<bool>, table: &mut CodeTable) {
    match node {
        TreeNode::Leaf { symbol, .. } => table.insert(*symbol, Code::from_bits(prefix.clone())),
        TreeNode::Internal { left, right, .. } => {
            prefix.push(false);
            assign(left, prefix, table);
            prefix.pop();

            prefix.push(true);
            assign(right, prefix, table);
            prefix.pop();
        }
    }
}

/// Binary trie over a reverse table for bit-at-a-time decoding.
///
/// Building it validates that the table is prefix-free.
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    /// Child indices; 0 means absent (the root is never a child).
    children: [u32; 2],
    symbol: Option<u8>,
}

impl DecodeTrie {
    /// Index of the root node.
    pub const ROOT: usize = 0;

    pub fn build(table: &ReverseCodeTable) -> Result<Self> {
        let mut nodes = vec![TrieNode::default()];

        for (code, symbol) in table.iter() {
            if code.is_empty() {
                return Err(Error::corrupted("empty code in table"));
            }

            let mut index = Self::ROOT;
            for &bit in code.bits() {
                if nodes[index].symbol.is_some() {
                    return Err(Error::corrupted(format!(
                        "code table is not prefix-free: {code} extends another code"
                    )));
                }
                let slot = nodes[index].children[bit as usize];
                index = if slot == 0 {
                    let next = nodes.len();
                    nodes.push(TrieNode::default());
                    nodes[index].children[bit as usize] = next as u32;
                    next
                } else {
                    slot as usize
                };
            }

            if nodes[index].symbol.is_some() || nodes[index].children != [0, 0] {
                return Err(Error::corrupted(format!(
                    "code table is not prefix-free: {code} is a prefix of another code"
                )));
            }
            nodes[index].symbol = Some(symbol);
        }

        Ok(Self { nodes })
    }

    /// Follow one bit from `node`. `None` if no code continues this way.
    #[inline]
    pub fn step(&self, node: usize, bit: bool) -> Option<usize> {
        match self.nodes[node].children[bit as usize] {
            0 => None,
            next => Some(next as usize),
        }
    }

    /// Symbol completed at `node`, if it is a leaf.
    #[inline]
    pub fn symbol(&self, node: usize) -> Option<u8> {
        self.nodes[node].symbol
    }
}
