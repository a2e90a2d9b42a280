use crate::{
    assets::pixmap::PixelImage,
    foundation::{core::Rect, error::KisekaeResult},
    sprite::grid::GridSpec,
};

/// Overwrite sprite `target_index` of `target` with sprite `source_index` of `source`.
///
/// Both sheets are addressed with the same `grid`, so the copied regions always have equal size.
/// Nothing is written unless both regions are valid. Returns the rectangle written in `target`.
pub fn patch_sprite(
    target: &mut PixelImage,
    source: &PixelImage,
    source_index: u32,
    target_index: u32,
    grid: GridSpec,
) -> KisekaeResult<Rect> {
    let src_rect = grid.rect_within(source_index, source.width(), source.height())?;
    let dst_rect = grid.rect_within(target_index, target.width(), target.height())?;
    let data = source.read_rect(src_rect)?;
    target.write_rect(dst_rect, &data)?;
    Ok(dst_rect)
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/patch.rs"]
mod tests;
