//! # Image and Codebook Storage
//!
//! Moves [`PixelGrid`]s and [`Codebook`]s between memory and disk. Images are
//! decoded with the `image` crate (any format it reads) and always written
//! back as PNG, since a lossy format would destroy the hidden bits.

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage, RgbaImage};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::grid::PixelGrid;
use crate::huffman::Codebook;

/// Convert a decoded image into a grid, keeping alpha if the image has it.
pub fn grid_from_image(img: &DynamicImage) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    let grid = if img.color().has_alpha() {
        PixelGrid::from_raw(width, height, 4, img.to_rgba8().into_raw())?
    } else {
        PixelGrid::from_raw(width, height, 3, img.to_rgb8().into_raw())?
    };
    Ok(grid)
}

/// Convert a grid back into an image buffer.
pub fn grid_to_image(grid: &PixelGrid) -> Result<DynamicImage> {
    let (width, height) = (grid.width(), grid.height());
    let data = grid.as_raw().to_vec();
    let img = if grid.has_alpha() {
        RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8)
    } else {
        RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8)
    };
    img.ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", width, height))
}

/// Load an image file into a grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).with_context(|| format!("opening image {}", path.display()))?;
    let grid = grid_from_image(&img)?;
    debug!(
        "Loaded {}x{} image ({} channels) from {}",
        grid.width(),
        grid.height(),
        grid.channels(),
        path.display()
    );
    Ok(grid)
}

/// Decode image bytes (any format supported by `image`) into a grid.
pub fn load_grid_from_memory(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes).context("decoding image bytes")?;
    grid_from_image(&img)
}

/// Encode a grid as PNG bytes.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let img = grid_to_image(grid)?;
    let mut output_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)
        .context("encoding PNG")?;
    Ok(output_bytes)
}

/// Write a grid to `path` as PNG.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    let bytes = encode_png(grid)?;
    fs::write(path, bytes).with_context(|| format!("writing image {}", path.display()))?;
    debug!("Saved image to {}", path.display());
    Ok(())
}

/// Write the codebook as a JSON object of symbol → codeword string.
pub fn save_codebook(codebook: &Codebook, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(codebook)?;
    fs::write(path, json).with_context(|| format!("writing codebook {}", path.display()))?;
    Ok(())
}

/// Read and validate a codebook written by [`save_codebook`].
pub fn load_codebook(path: &Path) -> Result<Codebook> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading codebook {}", path.display()))?;
    let codebook: Codebook = serde_json::from_str(&json)
        .with_context(|| format!("parsing codebook {}", path.display()))?;
    debug!("Loaded codebook with {} symbols", codebook.len());
    Ok(codebook)
}
