//! Bit-level view over the color-channel LSBs of a [`PixelGrid`].
//!
//! Slot `i` is the least significant bit of color value `i % 3` (R, G, B) of
//! pixel `i / 3`, pixels taken in row-major order.

use std::borrow::{Borrow, BorrowMut};

use super::grid::PixelGrid;
use crate::common::{Result, StegError};

/// Number of usable color values per pixel (alpha is never used).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Addressable sequence of single bits, one per color value.
///
/// Reads need only a shared borrow of the grid, writes need a mutable one:
/// `PixelBitChannel::new(&grid)` for extraction, `PixelBitChannel::new(&mut grid)`
/// or an owned grid for embedding.
#[derive(Debug)]
pub struct PixelBitChannel<G> {
    grid: G,
}

impl<G: Borrow<PixelGrid>> PixelBitChannel<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    /// Total bit slots: three per pixel.
    pub fn capacity(&self) -> usize {
        self.grid.borrow().pixel_count() * CHANNELS_PER_PIXEL
    }

    fn offset(&self, index: usize) -> Result<usize> {
        let capacity = self.capacity();
        if index >= capacity {
            return Err(StegError::CapacityExceeded { index, capacity });
        }
        Ok(self
            .grid
            .borrow()
            .offset(index / CHANNELS_PER_PIXEL, index % CHANNELS_PER_PIXEL))
    }

    /// LSB of the color value at slot `index`.
    pub fn read_bit(&self, index: usize) -> Result<bool> {
        let offset = self.offset(index)?;
        Ok(self.grid.borrow().value(offset) & 1 == 1)
    }

    /// Read `count` consecutive slots starting at `start`.
    pub fn read_bits(&self, start: usize, count: usize) -> Result<Vec<bool>> {
        (start..start + count).map(|i| self.read_bit(i)).collect()
    }

    pub fn grid(&self) -> &PixelGrid {
        self.grid.borrow()
    }

    pub fn into_inner(self) -> G {
        self.grid
    }
}

impl<G: BorrowMut<PixelGrid>> PixelBitChannel<G> {
    /// Set the LSB of the color value at slot `index`, keeping its upper 7 bits.
    pub fn write_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        let offset = self.offset(index)?;
        let value = self.grid.borrow_mut().value_mut(offset);
        *value = (*value & 0xFE) | bit as u8;
        Ok(())
    }

    /// Write `bits` to consecutive slots starting at `start`.
    ///
    /// The whole range is checked first, so on failure nothing is written.
    pub fn write_bits<I>(&mut self, start: usize, bits: I) -> Result<()>
    where
        I: ExactSizeIterator<Item = bool>,
    {
        let capacity = self.capacity();
        let end = start + bits.len();
        if end > capacity {
            return Err(StegError::CapacityExceeded {
                index: end - 1,
                capacity,
            });
        }
        for (index, bit) in (start..).zip(bits) {
            self.write_bit(index, bit)?;
        }
        Ok(())
    }
}
