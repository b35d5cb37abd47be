//! Huffman tree construction.
//!
//! Greedy pairwise merging over a min-priority queue. Queue entries are
//! ordered by `(weight, sequence)` where `sequence` is the creation order of
//! the node: leaves get sequences `0..n` in ascending symbol order, merged
//! nodes continue from `n`. Ties are therefore never left to the heap.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::trace;

use crate::frequency::FrequencyTable;

/// Node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Combined frequency of the subtree.
    pub fn weight(&self) -> u64 {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Smaller node goes left.
    fn merge(left: TreeNode, right: TreeNode) -> TreeNode {
        TreeNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Priority queue entry.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    sequence: u64,
    node: TreeNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A built Huffman tree. Owns its whole node graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: TreeNode,
}

impl HuffmanTree {
    /// Build a tree from symbol frequencies.
    ///
    /// Returns `None` when the table is empty. A single-symbol table yields a
    /// tree whose root is that leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::new();
        let mut sequence = 0u64;

        for (symbol, weight) in frequencies.iter() {
            heap.push(Reverse(QueueEntry {
                weight,
                sequence,
                node: TreeNode::Leaf { symbol, weight },
            }));
            sequence += 1;
        }

        loop {
            let Reverse(first) = heap.pop()?;
            let Some(Reverse(second)) = heap.pop() else {
                let tree = HuffmanTree { root: first.node };
                trace!(
                    leaves = tree.root.leaf_count(),
                    depth = tree.root.depth(),
                    "built huffman tree"
                );
                return Some(tree);
            };

            let merged = TreeNode::merge(first.node, second.node);
            heap.push(Reverse(QueueEntry {
                weight: merged.weight(),
                sequence,
                node: merged,
            }));
            sequence += 1;
        }
    }

    /// Root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Total weight, equal to the input length.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
}
