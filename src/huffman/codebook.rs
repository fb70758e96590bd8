//! Symbol ↔ codeword tables derived from a Huffman tree.
//!
//! A [`Codebook`] serializes to JSON as a plain object mapping each symbol to
//! its codeword string (`{"a":"10","b":"11","c":"0"}`). Deserialization
//! validates the table, so a hand-edited or truncated file cannot produce an
//! ambiguous code.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::bits::Codeword;
use super::frequency::FrequencyTable;
use super::tree::{build_tree, Node};
use crate::common::{Result, StegError};

/// Mapping from symbol to a non-empty, prefix-free codeword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<char, Codeword>",
    into = "BTreeMap<char, Codeword>"
)]
pub struct Codebook {
    codes: BTreeMap<char, Codeword>,
}

/// Exact inverse of a [`Codebook`], used for decoding.
#[derive(Debug, Clone, Default)]
pub struct ReverseCodebook {
    symbols: HashMap<Codeword, char>,
    max_len: usize,
}

impl Codebook {
    /// Build a validated codebook from an explicit table.
    pub fn from_codes(codes: BTreeMap<char, Codeword>) -> Result<Self> {
        let codebook = Self { codes };
        codebook.validate()?;
        Ok(codebook)
    }

    /// Count `text`, build its tree and walk it into a codebook.
    pub fn from_text(text: &str) -> Result<Self> {
        let table = FrequencyTable::from_text(text);
        let root = build_tree(&table)?;
        Ok(generate_codebook(&root))
    }

    pub fn get(&self, symbol: char) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Codeword)> + '_ {
        self.codes.iter().map(|(&symbol, codeword)| (symbol, codeword))
    }

    /// Check that every codeword is non-empty and none is a prefix of another
    /// (which also rules out duplicates).
    pub fn validate(&self) -> Result<()> {
        if let Some((symbol, _)) = self.codes.iter().find(|(_, c)| c.is_empty()) {
            return Err(StegError::InvalidInput(format!(
                "symbol {:?} has an empty codeword",
                symbol
            )));
        }

        // After sorting, any prefix sits directly before one of its extensions.
        let mut sorted: Vec<(&Codeword, char)> =
            self.codes.iter().map(|(&s, c)| (c, s)).collect();
        sorted.sort();
        for pair in sorted.windows(2) {
            let (a, sym_a) = pair[0];
            let (b, sym_b) = pair[1];
            if a == b || a.is_proper_prefix_of(b) {
                return Err(StegError::InvalidInput(format!(
                    "codeword {} of {:?} is a prefix of codeword {} of {:?}",
                    a, sym_a, b, sym_b
                )));
            }
        }
        Ok(())
    }

    /// Build the decoding table. Fails if two symbols share a codeword.
    pub fn reverse(&self) -> Result<ReverseCodebook> {
        ReverseCodebook::from_codebook(self)
    }
}

impl TryFrom<BTreeMap<char, Codeword>> for Codebook {
    type Error = StegError;

    fn try_from(codes: BTreeMap<char, Codeword>) -> Result<Self> {
        Self::from_codes(codes)
    }
}

impl From<Codebook> for BTreeMap<char, Codeword> {
    fn from(codebook: Codebook) -> Self {
        codebook.codes
    }
}

impl ReverseCodebook {
    pub fn from_codebook(codebook: &Codebook) -> Result<Self> {
        let mut reverse = Self::default();
        for (symbol, codeword) in codebook.iter() {
            if let Some(previous) = reverse.symbols.insert(codeword.clone(), symbol) {
                return Err(StegError::InvalidInput(format!(
                    "codeword {} is shared by {:?} and {:?}",
                    codeword, previous, symbol
                )));
            }
            reverse.max_len = reverse.max_len.max(codeword.len());
        }
        Ok(reverse)
    }

    /// Symbol whose codeword is exactly `bits`.
    pub fn get(&self, bits: &[bool]) -> Option<char> {
        self.symbols.get(bits).copied()
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Walk the tree depth-first, appending `0` for every left edge and `1` for
/// every right edge, and record the path at each leaf.
///
/// Uses an explicit stack, so alphabet size does not bound recursion depth.
/// Every call starts from a fresh table.
pub fn generate_codebook(root: &Node) -> Codebook {
    let mut codes = BTreeMap::new();
    let mut stack: Vec<(&Node, Vec<bool>)> = vec![(root, Vec::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Codeword::new(path));
            }
            Node::Internal { left, right, .. } => {
                if let Some(right) = right {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right, right_path));
                }
                let mut left_path = path;
                left_path.push(false);
                stack.push((left, left_path));
            }
        }
    }

    debug!("Generated codebook for {} symbols", codes.len());
    Codebook { codes }
}

/// Generate both the encoding and the decoding table from one tree.
pub fn generate_codebooks(root: &Node) -> Result<(Codebook, ReverseCodebook)> {
    let codebook = generate_codebook(root);
    let reverse = codebook.reverse()?;
    Ok((codebook, reverse))
}
