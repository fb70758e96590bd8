//! # huffsteg
//!
//! Hides a text message in an image: the text is compressed with a Huffman
//! code and the resulting bits are written into the least significant bit of
//! every color channel, behind a 32-bit length header.
//!
//! ```rust,ignore
//! use huffsteg::{hide_message, reveal_message, PixelGrid};
//!
//! let (stego, codebook) = hide_message(&cover, "meet at noon")?;
//! assert_eq!(reveal_message(&stego, &codebook)?, "meet at noon");
//! ```
//!
//! The codebook is not stored in the image; keep it alongside (see
//! [`processing::storage::save_codebook`]).

pub mod common;
pub mod huffman;
pub mod processing;

pub use common::{Result, StegError};
pub use huffman::{Codebook, ReverseCodebook};
pub use processing::{embed, extract, hide_message, payload_capacity, reveal_message, PixelGrid};
