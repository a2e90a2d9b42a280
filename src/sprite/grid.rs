use crate::foundation::{
    core::Rect,
    error::{KisekaeError, KisekaeResult},
};

/// Nominal row height that adjusted (bottom-aligned) slivers are anchored to.
///
/// Independent of the grid's cell height: a sliver of height `h` starts `32 - h` pixels below the
/// top of its row.
pub const REFERENCE_ROW_HEIGHT: u32 = 32;

/// Default cell width of the character spritesheets.
pub const DEFAULT_CELL_WIDTH: u32 = 96;

/// Default cell height of the character spritesheets.
pub const DEFAULT_CELL_HEIGHT: u32 = 672;

/// Fixed-size grid layout of a spritesheet, cells numbered left-to-right, top-to-bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpec {
    cell_width: u32,
    cell_height: u32,
    adjusted_height: Option<u32>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            adjusted_height: None,
        }
    }
}

impl GridSpec {
    /// Grid of full cells. Both dimensions must be non-zero.
    pub fn new(cell_width: u32, cell_height: u32) -> KisekaeResult<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(KisekaeError::invalid_argument(format!(
                "grid cell size must be > 0, got {cell_width}x{cell_height}"
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
            adjusted_height: None,
        })
    }

    /// Copy only a bottom-aligned sliver of `height` pixels per cell; `0` means the full cell.
    pub fn with_adjusted_height(mut self, height: u32) -> KisekaeResult<Self> {
        if height == 0 {
            self.adjusted_height = None;
            return Ok(self);
        }
        if height > self.cell_height || height > REFERENCE_ROW_HEIGHT {
            return Err(KisekaeError::invalid_argument(format!(
                "adjusted height {height} exceeds cell height {} or reference row {REFERENCE_ROW_HEIGHT}",
                self.cell_height
            )));
        }
        self.adjusted_height = Some(height);
        Ok(self)
    }

    /// Cell width in pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cell height in pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Sliver height, `None` for full-cell copies.
    pub fn adjusted_height(&self) -> Option<u32> {
        self.adjusted_height
    }

    /// Number of reachable columns in an image `image_width` pixels wide.
    ///
    /// A trailing partial column is ignored.
    pub fn columns(&self, image_width: u32) -> u32 {
        image_width / self.cell_width
    }

    /// Rectangle addressed by sprite `index` in an image `image_width` pixels wide.
    ///
    /// Only the column count is checked; use [`GridSpec::rect_within`] to also bound the row.
    pub fn rect(&self, index: u32, image_width: u32) -> KisekaeResult<Rect> {
        let columns = self.columns(image_width);
        if columns == 0 {
            return Err(KisekaeError::invalid_argument(format!(
                "image width {image_width} is narrower than one {}px cell",
                self.cell_width
            )));
        }

        let x = (index % columns) * self.cell_width;
        let row_top = u64::from(index / columns) * u64::from(self.cell_height);
        let (y, height) = match self.adjusted_height {
            None => (row_top, self.cell_height),
            Some(h) => (row_top + u64::from(REFERENCE_ROW_HEIGHT - h), h),
        };
        let y = u32::try_from(y).map_err(|_| {
            KisekaeError::invalid_argument(format!("sprite index {index} row offset overflows"))
        })?;

        Ok(Rect::new(x, y, self.cell_width, height))
    }

    /// Like [`GridSpec::rect`], but fails when `index` is past the last full cell of a
    /// `image_width` x `image_height` image or the region would leave the image.
    pub fn rect_within(
        &self,
        index: u32,
        image_width: u32,
        image_height: u32,
    ) -> KisekaeResult<Rect> {
        let rows = image_height / self.cell_height;
        let total = u64::from(self.columns(image_width)) * u64::from(rows);
        if u64::from(index) >= total {
            return Err(KisekaeError::invalid_argument(format!(
                "sprite index {index} out of range: {image_width}x{image_height} sheet holds {total} \
                 {}x{} cells",
                self.cell_width, self.cell_height
            )));
        }
        let rect = self.rect(index, image_width)?;
        if !rect.fits_within(image_width, image_height) {
            return Err(KisekaeError::invalid_argument(format!(
                "sprite index {index} region leaves the {image_width}x{image_height} sheet"
            )));
        }
        Ok(rect)
    }
}

/// Free-function form of [`GridSpec::rect`]: `(index, image_width, cell_w, cell_h, adjusted_h)`.
pub fn sprite_rect(
    index: u32,
    image_width: u32,
    cell_width: u32,
    cell_height: u32,
    adjusted_height: u32,
) -> KisekaeResult<Rect> {
    GridSpec::new(cell_width, cell_height)?
        .with_adjusted_height(adjusted_height)?
        .rect(index, image_width)
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/grid.rs"]
mod tests;
