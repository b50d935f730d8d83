// Rendering of the palette swatch image and its PNG encoding
use std::io::Write;

use anyhow::{ensure, Result};
use log::debug;
use png::{BitDepth, ColorType, Compression, Encoder};

use crate::{
    common::{ColorRGBA, BLOCK_DIM, GRID_COLS, GRID_ROWS, IMAGE_HEIGHT, IMAGE_WIDTH},
    helpers::grid_color,
};

const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 pixel buffer, stored row-major.
pub struct PaletteImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PaletteImage {
    pub fn new(width: u32, height: u32) -> Self {
        PaletteImage {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> ColorRGBA {
        let i = self.offset(x, y);
        let p = &self.data[i..i + BYTES_PER_PIXEL];
        (p[0], p[1], p[2], p[3])
    }

    /// Overwrites the rectangle `[x0, x0 + w) x [y0, y0 + h)` with `color`.
    /// No blending is done, the alpha channel is copied as-is.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, w: u32, h: u32, color: ColorRGBA) {
        let (r, g, b, a) = color;
        let x1 = (x0 + w).min(self.width);
        let y1 = (y0 + h).min(self.height);
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1, y);
            for px in self.data[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&[r, g, b, a]);
            }
        }
    }
}

pub fn render_palette() -> PaletteImage {
    let mut image = PaletteImage::new(IMAGE_WIDTH, IMAGE_HEIGHT);
    for y in 0..GRID_ROWS {
        for x in 0..GRID_COLS {
            let color = grid_color(x, y);
            debug!("block ({}, {}): {:?}", x, y, color);
            image.fill_rect(x * BLOCK_DIM, y * BLOCK_DIM, BLOCK_DIM, BLOCK_DIM, color);
        }
    }
    image
}

pub fn encode_png<W: Write>(image: &PaletteImage, out: W) -> Result<()> {
    ensure!(
        image.data.len() == image.width as usize * image.height as usize * BYTES_PER_PIXEL,
        "image buffer does not match {}x{} RGBA",
        image.width,
        image.height
    );
    let mut encoder = Encoder::new(out, image.width, image.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;
    Ok(())
}
