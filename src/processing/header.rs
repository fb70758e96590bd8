//! # Length Header
//!
//! The payload length, in bits, is stored as a 32-bit unsigned big-endian
//! value in the first 32 bit-slots of the channel, most significant bit first.
//! Those slots span the first 11 pixels; the 33rd slot in that range (blue of
//! pixel 11) is left untouched and the payload starts at slot 33.

use std::borrow::{Borrow, BorrowMut};

use super::channel::PixelBitChannel;
use super::grid::PixelGrid;
use crate::common::{Result, StegError};

/// Bit-slots holding the length value.
pub const HEADER_BITS: usize = 32;

/// Pixels reserved for the header.
pub const HEADER_PIXELS: usize = 11;

/// First slot of the payload.
pub const PAYLOAD_OFFSET: usize = HEADER_PIXELS * super::channel::CHANNELS_PER_PIXEL;

fn ensure_header_fits<G: Borrow<PixelGrid>>(channel: &PixelBitChannel<G>) -> Result<()> {
    if channel.capacity() < HEADER_BITS {
        return Err(StegError::ValueOutOfRange(format!(
            "channel has {} bit slots, the length header needs {}",
            channel.capacity(),
            HEADER_BITS
        )));
    }
    Ok(())
}

/// Write `length` into the header slots.
pub fn write_header<G: BorrowMut<PixelGrid>>(
    channel: &mut PixelBitChannel<G>,
    length: usize,
) -> Result<()> {
    let length = u32::try_from(length).map_err(|_| {
        StegError::ValueOutOfRange(format!(
            "payload of {} bits does not fit a 32-bit length header",
            length
        ))
    })?;
    ensure_header_fits(channel)?;

    let bits = (0..HEADER_BITS).map(|i| (length >> (HEADER_BITS - 1 - i)) & 1 == 1);
    channel.write_bits(0, bits)
}

/// Read the payload length from the header slots.
pub fn read_header<G: Borrow<PixelGrid>>(channel: &PixelBitChannel<G>) -> Result<usize> {
    ensure_header_fits(channel)?;

    let mut length: u32 = 0;
    for bit in channel.read_bits(0, HEADER_BITS)? {
        length = (length << 1) | bit as u32;
    }
    Ok(length as usize)
}
