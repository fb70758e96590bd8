//! # Image Processing and Steganography
//!
//! This module hides Huffman-coded text in images using LSB (Least
//! Significant Bit) steganography.
//!
//! - [`grid`]: in-memory pixel data
//! - [`channel`]: bit-level access to color-channel LSBs
//! - [`header`]: the 32-bit payload length header
//! - [`steganography`]: embed and extract
//! - [`storage`]: PNG and codebook files

pub mod channel;
pub mod grid;
pub mod header;
pub mod steganography;
pub mod storage;

// Re-export main functions for convenience
pub use channel::PixelBitChannel;
pub use grid::PixelGrid;
pub use steganography::{embed, extract, hide_message, payload_capacity, reveal_message};
