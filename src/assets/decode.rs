use std::io::Cursor;

use anyhow::Context;

use crate::{assets::pixmap::PixelImage, foundation::error::KisekaeResult};

/// Decode any raster format supported by `image` into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> KisekaeResult<PixelImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(PixelImage::from_rgba_image(&dyn_img.to_rgba8()))
}

/// Encode an image as PNG bytes.
pub fn encode_png(img: &PixelImage) -> KisekaeResult<Vec<u8>> {
    let rgba = img.to_rgba_image()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
