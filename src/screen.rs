use anyhow::{Context, Result, bail};
use bytemuck::cast_slice;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::Color;

/// Color target of the rasterizer. Pixels are packed RGBA words, row-major,
/// with row 0 at the top until [`ScreenSpace::flip_vertically`] is applied.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    rgba: Vec<u32>,
}

const TGA_HEADER_LEN: usize = 18;
const TGA_TRUECOLOR: u8 = 2;
// 8 alpha bits, rows stored top to bottom
const TGA_DESCRIPTOR: u8 = 0x08 | 0x20;

fn pack(color: Color) -> u32 {
    u32::from_ne_bytes(color.to_bytes())
}

fn unpack(word: u32) -> Color {
    let [r, g, b, a] = word.to_ne_bytes();
    Color { r, g, b, a }
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width as usize) * (height as usize);
        Self {
            width,
            height,
            rgba: vec![pack(Color::BLACK); size_calc],
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + x as usize)
    }

    /// Callers must stay inside the image; the rasterizer guarantees this by
    /// clamping its bounding box.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < self.width && y < self.height, "pixel write ({x}, {y}) outside {}x{}", self.width, self.height);
        if let Some(i) = self.index(x, y) {
            self.rgba[i] = pack(color);
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| unpack(self.rgba[i]))
    }

    pub fn clear(&mut self, color: Color) {
        self.rgba.fill(pack(color));
    }

    /// Reverses the row order so that y = 0 ends up as the bottom row of the file.
    pub fn flip_vertically(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        for y in 0..h / 2 {
            let (upper, lower) = self.rgba.split_at_mut((h - 1 - y) * w);
            upper[y * w..(y + 1) * w].swap_with_slice(&mut lower[..w]);
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        cast_slice(&self.rgba)
    }

    /// Writes an uncompressed 32-bit true-color TGA: fixed header, then BGRA rows.
    pub fn write_tga<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut file = BufWriter::new(file);
        self.encode_tga(&mut file)?;
        file.flush()?;
        Ok(())
    }

    pub fn encode_tga<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.width > u16::MAX as u32 || self.height > u16::MAX as u32 {
            bail!("{}x{} is too large for a TGA image", self.width, self.height);
        }
        let mut header = [0u8; TGA_HEADER_LEN];
        header[2] = TGA_TRUECOLOR;
        header[12..14].copy_from_slice(&(self.width as u16).to_le_bytes());
        header[14..16].copy_from_slice(&(self.height as u16).to_le_bytes());
        header[16] = 32;
        header[17] = TGA_DESCRIPTOR;
        out.write_all(&header)?;

        let mut row = Vec::with_capacity(self.width as usize * 4);
        for line in self.rgba.chunks_exact(self.width.max(1) as usize) {
            row.clear();
            for &word in line {
                let c = unpack(word);
                row.extend_from_slice(&[c.b, c.g, c.r, c.a]);
            }
            out.write_all(&row)?;
        }
        Ok(())
    }

    /// Saves by extension: `.tga` goes through [`ScreenSpace::write_tga`], anything
    /// else is encoded by the `image` crate.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tga"));
        if is_tga {
            return self.write_tga(path);
        }
        image::save_buffer(path, self.as_bytes(), self.width, self.height, image::ExtendedColorType::Rgba8)
            .with_context(|| format!("saving {}", path.display()))
    }
}
