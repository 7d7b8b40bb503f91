use std::path::Path;
use anyhow::{Result, ensure};
use image::{DynamicImage, GenericImageView};

use crate::color::Color;
use crate::point2d::Point2Df;

/// Diffuse texture, stored bottom row first so texel y grows upward like screen y.
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> image::ImageResult<Self> {
        let img: DynamicImage = image::open(path)?;
        let (width, height) = img.dimensions();
        let rgba_img = img.to_rgba8();
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in (0..height).rev() {
            let row_start = (y * width * 4) as usize;
            let row_end = row_start + (width * 4) as usize;
            rgba.extend_from_slice(&rgba_img.as_raw()[row_start..row_end]);
        }
        Ok(Self { width, height, rgba })
    }

    /// Texture from raw RGBA rows, bottom row first.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        ensure!(width > 0 && height > 0, "texture must not be empty");
        ensure!(
            rgba.len() == (width as usize) * (height as usize) * 4,
            "expected {} bytes for a {width}x{height} texture, got {}",
            (width as usize) * (height as usize) * 4,
            rgba.len()
        );
        Ok(Self { width, height, rgba })
    }

    pub fn solid(color: Color) -> Self {
        Self { width: 1, height: 1, rgba: color.to_bytes().to_vec() }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color at a texel coordinate measured in texture pixels. Coordinates are
    /// floored and clamped to the texture edge. An empty texture samples as
    /// transparent black.
    pub fn sample_texel(&self, texel: Point2Df) -> Color {
        let clamp = |v: f32, size: u32| -> usize {
            if v.is_nan() { 0 } else { (v.floor().max(0.0) as usize).min((size as usize).saturating_sub(1)) }
        };
        let x = clamp(texel.x, self.width);
        let y = clamp(texel.y, self.height);
        let idx = (y * self.width as usize + x) * 4;
        match self.rgba.get(idx..idx + 4) {
            Some(&[r, g, b, a]) => Color { r, g, b, a },
            _ => Color::rgba(0, 0, 0, 0),
        }
    }
}
