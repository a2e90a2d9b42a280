use crate::foundation::{
    core::{Rect, Rgba8},
    error::{KisekaeError, KisekaeResult},
};

/// Owned raster image: straight RGBA8 pixels, row-major, top-to-bottom.
///
/// `pixels.len() == width * height` always holds; every constructor checks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelImage {
    /// Allocate a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Allocate an image with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![px; (width as usize) * (height as usize)],
        }
    }

    /// Wrap an existing pixel vector.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> KisekaeResult<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(KisekaeError::validation(format!(
                "pixel buffer holds {} pixels, expected {width}x{height}={expected}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap tightly packed RGBA8 bytes.
    pub fn from_rgba8_bytes(width: u32, height: u32, bytes: &[u8]) -> KisekaeResult<Self> {
        if !bytes.len().is_multiple_of(4) {
            return Err(KisekaeError::validation(
                "rgba8 byte buffer length must be a multiple of 4",
            ));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index_of(x, y)])
    }

    /// Copy the pixels of `rect` out, row-major.
    pub fn read_rect(&self, rect: Rect) -> KisekaeResult<Vec<Rgba8>> {
        self.check_rect(rect)?;
        let mut out = Vec::with_capacity(rect.area());
        for row in rect.y..rect.y + rect.height {
            let start = self.index_of(rect.x, row);
            out.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Ok(out)
    }

    /// Overwrite the pixels of `rect` with `data` (row-major, exactly `rect.area()` pixels).
    ///
    /// This is a raw replace, not an alpha blend: transparent source pixels clear the target.
    pub fn write_rect(&mut self, rect: Rect, data: &[Rgba8]) -> KisekaeResult<()> {
        self.check_rect(rect)?;
        if data.len() != rect.area() {
            return Err(KisekaeError::invalid_argument(format!(
                "write_rect expects {} pixels for {}x{}, got {}",
                rect.area(),
                rect.width,
                rect.height,
                data.len()
            )));
        }
        let w = rect.width as usize;
        for (i, src_row) in data.chunks_exact(w.max(1)).enumerate() {
            let start = self.index_of(rect.x, rect.y + i as u32);
            self.pixels[start..start + w].copy_from_slice(src_row);
        }
        Ok(())
    }

    /// Tightly packed RGBA8 bytes.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert into an `image` crate buffer.
    pub fn to_rgba_image(&self) -> KisekaeResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8_bytes())
            .ok_or_else(|| KisekaeError::validation("pixel buffer does not match dimensions"))
    }

    /// Convert from an `image` crate buffer.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    fn check_rect(&self, rect: Rect) -> KisekaeResult<()> {
        if !rect.fits_within(self.width, self.height) {
            return Err(KisekaeError::invalid_argument(format!(
                "rect ({}, {}, {}, {}) exceeds {}x{} image",
                rect.x, rect.y, rect.width, rect.height, self.width, self.height
            )));
        }
        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/pixmap.rs"]
mod tests;
