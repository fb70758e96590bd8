//! # LSB Steganography Implementation
//!
//! Hides a Huffman-coded message in the least significant bit of each color
//! channel (R, G, B) of an image's pixels.
//!
//! ## Layout
//!
//! | Slots        | Content                                         |
//! |--------------|-------------------------------------------------|
//! | 0..32        | payload length in bits, u32 big-endian          |
//! | 32           | unused, left as in the cover image              |
//! | 33..33+len   | Huffman bitstream                               |
//! | rest         | untouched                                       |
//!
//! ### Encoding Process
//! 1. Encode the text with the codebook into a bitstream
//! 2. Check that header plus payload fit the image
//! 3. Write the length header, then the bitstream, into the LSBs
//!
//! ### Decoding Process
//! 1. Read the 32-bit header to get the payload length
//! 2. Read exactly that many bits starting at slot 33
//! 3. Decode the bits with the reverse codebook
//!
//! The codebook is not stored in the image. Extraction needs the same
//! codebook that was used to embed.

use log::{debug, info, warn};

use super::channel::PixelBitChannel;
use super::grid::PixelGrid;
use super::header::{read_header, write_header, PAYLOAD_OFFSET};
use crate::common::{Result, StegError};
use crate::huffman::{decode, encode, Bitstream, Codebook, ReverseCodebook};

/// Number of payload bits `grid` can carry after the reserved header pixels.
pub fn payload_capacity(grid: &PixelGrid) -> usize {
    PixelBitChannel::new(grid)
        .capacity()
        .saturating_sub(PAYLOAD_OFFSET)
}

/// Embed `text` into a copy of `grid`.
///
/// # Errors
/// - `InvalidInput` if `text` is empty
/// - `UnknownSymbol` if `text` uses a symbol missing from `codebook`
/// - `ImageTooSmall` if header and payload do not fit
/// - `ValueOutOfRange` if the payload length overflows the 32-bit header
///
/// On error `grid` is unchanged and no output grid is produced.
pub fn embed(grid: &PixelGrid, codebook: &Codebook, text: &str) -> Result<PixelGrid> {
    if text.is_empty() {
        return Err(StegError::InvalidInput(
            "cannot embed an empty message".to_string(),
        ));
    }

    let stream = encode(text, codebook)?;

    let available = PixelBitChannel::new(grid).capacity();
    let needed = PAYLOAD_OFFSET + stream.len();
    if needed > available {
        return Err(StegError::ImageTooSmall { needed, available });
    }

    let mut channel = PixelBitChannel::new(grid.clone());
    write_header(&mut channel, stream.len())?;
    channel.write_bits(PAYLOAD_OFFSET, stream.iter())?;

    info!(
        "Embedded {} symbols as {} bits ({} of {} slots used)",
        text.chars().count(),
        stream.len(),
        needed,
        available
    );
    Ok(channel.into_inner())
}

/// Recover the text hidden in `grid`.
///
/// # Errors
/// - `ValueOutOfRange` if the image cannot even hold a header
/// - `ImageTooSmall` if the header declares more bits than the image holds
/// - `CorruptEncoding` if the bits do not decode with `reverse`
pub fn extract(grid: &PixelGrid, reverse: &ReverseCodebook) -> Result<String> {
    let channel = PixelBitChannel::new(grid);
    let length = read_header(&channel)?;
    debug!("Header declares {} payload bits", length);

    let available = channel.capacity();
    let needed = PAYLOAD_OFFSET.saturating_add(length);
    if needed > available {
        return Err(StegError::ImageTooSmall { needed, available });
    }
    if length == 0 {
        warn!("Header declares an empty payload");
    }

    let stream: Bitstream = channel
        .read_bits(PAYLOAD_OFFSET, length)?
        .into_iter()
        .collect();
    let text = decode(&stream, reverse)?;

    info!(
        "Extracted {} symbols from {} bits",
        text.chars().count(),
        length
    );
    Ok(text)
}

/// Build a codebook from `text` itself and embed with it.
///
/// Returns the stego grid together with the codebook needed to reveal it.
pub fn hide_message(grid: &PixelGrid, text: &str) -> Result<(PixelGrid, Codebook)> {
    let codebook = Codebook::from_text(text)?;
    let stego = embed(grid, &codebook, text)?;
    Ok((stego, codebook))
}

/// Extract using the forward codebook that was used to embed.
pub fn reveal_message(grid: &PixelGrid, codebook: &Codebook) -> Result<String> {
    let reverse = codebook.reverse()?;
    extract(grid, &reverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-row grid with a varied byte pattern.
    fn cover(pixels: usize) -> PixelGrid {
        let data = (0..pixels * 3).map(|i| (i * 37 % 251) as u8).collect();
        PixelGrid::from_raw(pixels as u32, 1, 3, data).unwrap()
    }

    #[test]
    fn test_embed_extract_roundtrip() {
        let text = "aabbbcccc";
        let codebook = Codebook::from_text(text).unwrap();
        let grid = cover(64);

        let stego = embed(&grid, &codebook, text).unwrap();
        let reverse = codebook.reverse().unwrap();
        assert_eq!(extract(&stego, &reverse).unwrap(), text);
    }

    #[test]
    fn test_exact_fit() {
        // "aabbbcccc" encodes to 14 bits: 33 + 14 = 47 slots, 16 pixels = 48 slots.
        let text = "aabbbcccc";
        let codebook = Codebook::from_text(text).unwrap();

        let grid = cover(16);
        assert_eq!(payload_capacity(&grid), 15);
        let stego = embed(&grid, &codebook, text).unwrap();
        assert_eq!(reveal_message(&stego, &codebook).unwrap(), text);

        let smaller = PixelGrid::from_raw(15, 1, 3, vec![0; 45]).unwrap();
        assert_eq!(
            embed(&smaller, &codebook, text),
            Err(StegError::ImageTooSmall {
                needed: 47,
                available: 45
            })
        );
    }

    #[test]
    fn test_payload_layout() {
        let text = "aabbbcccc";
        let codebook = Codebook::from_text(text).unwrap();
        let grid = cover(20);
        let stego = embed(&grid, &codebook, text).unwrap();

        let channel = PixelBitChannel::new(&stego);
        assert_eq!(read_header(&channel).unwrap(), 14);
        let payload: Bitstream = channel
            .read_bits(PAYLOAD_OFFSET, 14)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(payload.to_string(), "10101111110000");

        // Slot 32 and everything past the payload is the cover's.
        let original = PixelBitChannel::new(&grid);
        assert_eq!(channel.read_bit(32).unwrap(), original.read_bit(32).unwrap());
        for slot in PAYLOAD_OFFSET + 14..channel.capacity() {
            assert_eq!(
                channel.read_bit(slot).unwrap(),
                original.read_bit(slot).unwrap()
            );
        }
    }

    #[test]
    fn test_upper_bits_preserved() {
        let grid = cover(100);
        let (stego, _) = hide_message(&grid, "the quick brown fox").unwrap();
        for (a, b) in grid.as_raw().iter().zip(stego.as_raw()) {
            assert_eq!(a & 0xFE, b & 0xFE);
        }
    }

    #[test]
    fn test_empty_message_rejected() {
        let codebook = Codebook::from_text("abc").unwrap();
        assert!(matches!(
            embed(&cover(64), &codebook, ""),
            Err(StegError::InvalidInput(_))
        ));
        assert!(hide_message(&cover(64), "").is_err());
    }

    #[test]
    fn test_unknown_symbol_propagates() {
        let codebook = Codebook::from_text("abc").unwrap();
        assert_eq!(
            embed(&cover(64), &codebook, "abx"),
            Err(StegError::UnknownSymbol('x'))
        );
    }

    #[test]
    fn test_declared_length_beyond_image() {
        let mut grid = cover(12);
        {
            let mut channel = PixelBitChannel::new(&mut grid);
            write_header(&mut channel, 100).unwrap();
        }
        let reverse = Codebook::from_text("ab").unwrap().reverse().unwrap();
        assert_eq!(
            extract(&grid, &reverse),
            Err(StegError::ImageTooSmall {
                needed: 133,
                available: 36
            })
        );
    }

    #[test]
    fn test_wrong_codebook_is_corrupt() {
        let (stego, _) = hide_message(&cover(64), "aab").unwrap();
        // Only codeword is "0"; the embedded stream contains ones.
        let other = Codebook::from_text("zzz").unwrap();
        assert!(matches!(
            reveal_message(&stego, &other),
            Err(StegError::CorruptEncoding(_))
        ));
    }

    #[test]
    fn test_header_too_small_on_extract() {
        let grid = cover(5);
        let reverse = Codebook::from_text("ab").unwrap().reverse().unwrap();
        assert!(matches!(
            extract(&grid, &reverse),
            Err(StegError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_single_symbol_message() {
        let (stego, codebook) = hide_message(&cover(40), "aaaa").unwrap();
        assert_eq!(codebook.get('a').map(|c| c.len()), Some(1));
        assert_eq!(reveal_message(&stego, &codebook).unwrap(), "aaaa");
    }
}
