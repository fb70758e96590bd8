//! Huffman tree construction by repeated minimum-pair merging.

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;
use crate::common::{Result, StegError};

/// A node of the Huffman tree. Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        freq: u64,
        symbol: char,
    },
    /// `right` is `None` only for the synthetic root of a one-symbol alphabet.
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Option<Box<Node>>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    if let Some(right) = right {
                        stack.push(right);
                    }
                }
            }
        }
        count
    }
}

/// Heap entry ordered so `BinaryHeap` pops the lowest frequency first and,
/// among equal frequencies, the lowest sequence number first.
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

/// Build the Huffman tree for `table`.
///
/// Leaves get sequence numbers in ascending symbol order and every merged
/// node takes the next number, so ties on frequency always resolve the same
/// way. The first node popped becomes the left child.
///
/// A single-symbol table yields an internal root with the leaf on the left
/// and no right child, so that symbol still receives a one-bit codeword.
pub fn build_tree(table: &FrequencyTable) -> Result<Node> {
    if table.is_empty() {
        return Err(StegError::InvalidInput(
            "cannot build a Huffman tree from an empty frequency table".to_string(),
        ));
    }

    let mut heap: BinaryHeap<HeapEntry> = table
        .iter()
        .zip(0u64..)
        .map(|((symbol, freq), seq)| HeapEntry {
            freq,
            seq,
            node: Node::Leaf { freq, symbol },
        })
        .collect();
    let mut next_seq = heap.len() as u64;

    if heap.len() == 1 {
        if let Some(entry) = heap.pop() {
            debug!("Single-symbol alphabet, using synthetic root");
            return Ok(Node::Internal {
                freq: entry.freq,
                left: Box::new(entry.node),
                right: None,
            });
        }
    }

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let freq = left.freq + right.freq;
        heap.push(HeapEntry {
            freq,
            seq: next_seq,
            node: Node::Internal {
                freq,
                left: Box::new(left.node),
                right: Some(Box::new(right.node)),
            },
        });
        next_seq += 1;
    }

    let root = heap
        .pop()
        .ok_or_else(|| StegError::InvalidInput("Huffman heap drained during merge".to_string()))?;
    debug!(
        "Built Huffman tree: {} leaves, total weight {}",
        table.len(),
        root.freq
    );
    Ok(root.node)
}
