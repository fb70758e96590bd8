//! # Huffman Coding Engine
//!
//! Compresses a text message into a prefix-free bitstream and back.
//!
//! ## Pipeline
//! 1. [`FrequencyTable`]: count every symbol in the message
//! 2. [`build_tree`]: merge the two lightest nodes until one root remains
//! 3. [`generate_codebook`]: walk the tree, `0` for left and `1` for right
//! 4. [`encode`] / [`decode`]: map symbols to codewords and back
//!
//! Tree construction breaks frequency ties by insertion order, so the same
//! message always yields the same codebook.

pub mod bits;
pub mod codebook;
pub mod codec;
pub mod frequency;
pub mod tree;

pub use bits::{Bitstream, Codeword};
pub use codebook::{generate_codebook, generate_codebooks, Codebook, ReverseCodebook};
pub use codec::{decode, encode};
pub use frequency::FrequencyTable;
pub use tree::{build_tree, Node};
