//! # Error Types
//!
//! Every failure the Huffman engine and the LSB codec can report. Outer layers
//! (file I/O, CLI) wrap these in `anyhow::Error`.

use thiserror::Error;

/// Errors raised by the coding and embedding pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegError {
    /// Empty message, empty frequency table or a malformed codebook.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The text contains a symbol the codebook has no codeword for.
    #[error("symbol {0:?} has no codeword in the codebook")]
    UnknownSymbol(char),

    /// Bits left over that do not form a complete codeword.
    #[error("corrupt encoding: {0}")]
    CorruptEncoding(String),

    /// A bit-slot index past the end of the pixel channel.
    #[error("bit slot {index} is beyond channel capacity of {capacity} slots")]
    CapacityExceeded { index: usize, capacity: usize },

    /// The image cannot hold the length header plus the payload.
    #[error("image too small: need {needed} bit slots but only {available} available")]
    ImageTooSmall { needed: usize, available: usize },

    /// A length that does not fit the 32-bit header, or no room for the header.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, StegError>;
