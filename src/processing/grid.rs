//! In-memory pixel data handed over by the image I/O layer.

use crate::common::{Result, StegError};

/// Row-major pixels, each 3 (RGB) or 4 (RGBA) 8-bit channel values.
///
/// Only the red, green and blue values are ever touched by embedding; an
/// alpha value travels through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap raw interleaved channel data.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if channels != 3 && channels != 4 {
            return Err(StegError::InvalidInput(format!(
                "unsupported channel count {}, expected 3 (RGB) or 4 (RGBA)",
                channels
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(StegError::InvalidInput(format!(
                "pixel data holds {} bytes, {}x{}x{} needs {}",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build an RGB grid from pixel triples in row-major order.
    pub fn from_rgb(width: u32, height: u32, pixels: &[[u8; 3]]) -> Result<Self> {
        let data = pixels.iter().flat_map(|p| p.iter().copied()).collect();
        Self::from_raw(width, height, 3, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 3 for RGB, 4 for RGBA.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// RGB triple of the pixel at row-major `index`.
    pub fn rgb(&self, index: usize) -> Option<[u8; 3]> {
        let start = index.checked_mul(self.channels as usize)?;
        let px = self.data.get(start..start + 3)?;
        Some([px[0], px[1], px[2]])
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of color value `channel` (0 = R, 1 = G, 2 = B) of pixel `pixel`.
    pub(crate) fn offset(&self, pixel: usize, channel: usize) -> usize {
        pixel * self.channels as usize + channel
    }

    pub(crate) fn value(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    pub(crate) fn value_mut(&mut self, offset: usize) -> &mut u8 {
        &mut self.data[offset]
    }
}
