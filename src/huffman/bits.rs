//! Bit sequences: the [`Bitstream`] produced by encoding and the
//! [`Codeword`] assigned to a single symbol.
//!
//! Both render as strings of `'0'`/`'1'`, which is also the on-disk form of
//! codewords in a persisted codebook.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::common::StegError;

fn parse_bits(s: &str) -> Result<Vec<bool>, StegError> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(StegError::InvalidInput(format!(
                "bit string contains {:?}, expected only '0' and '1'",
                other
            ))),
        })
        .collect()
}

fn fmt_bits(bits: &[bool], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &bit in bits {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

/// An ordered, finite sequence of bits with an exactly known length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<bool>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn extend_from_slice(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl FromIterator<bool> for Bitstream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bits(&self.bits, f)
    }
}

impl FromStr for Bitstream {
    type Err = StegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            bits: parse_bits(s)?,
        })
    }
}

/// The bit string one symbol maps to. Never empty when it comes out of a
/// [`Codebook`](super::Codebook).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Codeword(Vec<bool>);

impl Codeword {
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Codeword) -> bool {
        self.len() < other.len() && other.0.starts_with(&self.0)
    }
}

// Lets a `HashMap<Codeword, _>` be probed with the decoder's `&[bool]` accumulator.
impl Borrow<[bool]> for Codeword {
    fn borrow(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bits(&self.0, f)
    }
}

impl FromStr for Codeword {
    type Err = StegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_bits(s)?))
    }
}

impl TryFrom<String> for Codeword {
    type Error = StegError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Codeword> for String {
    fn from(codeword: Codeword) -> Self {
        codeword.to_string()
    }
}
