use std::fmt;

use crate::{
    assets::pixmap::PixelImage,
    catalog::reference::ReferenceImageProvider,
    foundation::error::{KisekaeError, KisekaeResult},
};

/// Number of discrete values of each palette-index color attribute.
pub const COLOR_CHOICES: u32 = 1 << 6;

/// Customizable visual attribute of a character.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AttributeKind {
    /// Skin tone, one per row of the skin color sheet.
    Skin,
    /// Hairstyle.
    Hair,
    /// Shirt.
    Shirt,
    /// Accessory (beard, glasses, ...).
    Accessory,
    /// Eye color.
    EyeColor,
    /// Hair color.
    HairColor,
    /// Bottoms color.
    BottomsColor,
    /// Face variant (base texture override).
    Face,
    /// Nose variant (base texture override).
    Nose,
    /// Bottoms style (base texture override).
    Bottoms,
    /// Shoes style (base texture override).
    Shoes,
    /// Shoe color, one per row of the shoe color sheet.
    ShoeColor,
}

impl AttributeKind {
    /// Every attribute, in declaration order.
    pub const ALL: [AttributeKind; 12] = [
        AttributeKind::Skin,
        AttributeKind::Hair,
        AttributeKind::Shirt,
        AttributeKind::Accessory,
        AttributeKind::EyeColor,
        AttributeKind::HairColor,
        AttributeKind::BottomsColor,
        AttributeKind::Face,
        AttributeKind::Nose,
        AttributeKind::Bottoms,
        AttributeKind::Shoes,
        AttributeKind::ShoeColor,
    ];

    /// The attributes encoded in a base-texture key, in key order.
    pub const BASE_TEXTURE: [AttributeKind; 4] = [
        AttributeKind::Face,
        AttributeKind::Nose,
        AttributeKind::Bottoms,
        AttributeKind::Shoes,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::Skin => "skin",
            AttributeKind::Hair => "hair",
            AttributeKind::Shirt => "shirt",
            AttributeKind::Accessory => "accessory",
            AttributeKind::EyeColor => "eye_color",
            AttributeKind::HairColor => "hair_color",
            AttributeKind::BottomsColor => "bottoms_color",
            AttributeKind::Face => "face",
            AttributeKind::Nose => "nose",
            AttributeKind::Bottoms => "bottoms",
            AttributeKind::Shoes => "shoes",
            AttributeKind::ShoeColor => "shoe_color",
        }
    }

    /// Count for attributes that do not depend on a reference sheet.
    pub fn fixed_count(self) -> Option<u32> {
        match self {
            AttributeKind::EyeColor | AttributeKind::HairColor | AttributeKind::BottomsColor => {
                Some(COLOR_CHOICES)
            }
            AttributeKind::Face => Some(2),
            AttributeKind::Nose => Some(3),
            AttributeKind::Bottoms => Some(12),
            AttributeKind::Shoes => Some(4),
            _ => None,
        }
    }

    /// Layout of the reference sheet that sizes this attribute, if it is sheet-derived.
    pub fn sheet_layout(self) -> Option<SheetLayout> {
        match self {
            AttributeKind::Skin | AttributeKind::ShoeColor => Some(SheetLayout::Rows),
            AttributeKind::Hair => Some(SheetLayout::Grid {
                row_unit: 32 * 3,
                col_unit: 16,
            }),
            AttributeKind::Shirt => Some(SheetLayout::Grid {
                row_unit: 8 * 4,
                col_unit: 8,
            }),
            AttributeKind::Accessory => Some(SheetLayout::Grid {
                row_unit: 16 * 2,
                col_unit: 16,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a reference sheet's pixel dimensions translate into a number of choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetLayout {
    /// One choice per pixel row (palette strips).
    Rows,
    /// `(height / row_unit) * (width / col_unit)` cells.
    Grid {
        /// Pixel height of one choice.
        row_unit: u32,
        /// Pixel width of one choice.
        col_unit: u32,
    },
}

impl SheetLayout {
    /// Number of whole choices in a `width` x `height` sheet.
    pub fn count(self, width: u32, height: u32) -> u32 {
        match self {
            SheetLayout::Rows => height,
            SheetLayout::Grid { row_unit, col_unit } => {
                (height / row_unit).saturating_mul(width / col_unit)
            }
        }
    }
}

/// Count the choices `attr` has in `sheet`. Fixed attributes ignore the sheet.
pub fn count_from_sheet(attr: AttributeKind, sheet: &PixelImage) -> KisekaeResult<u32> {
    if let Some(n) = attr.fixed_count() {
        return Ok(n);
    }
    let layout = attr
        .sheet_layout()
        .ok_or_else(|| KisekaeError::invalid_argument(format!("{attr} has no sheet layout")))?;
    let n = layout.count(sheet.width(), sheet.height());
    if n == 0 {
        return Err(KisekaeError::validation(format!(
            "{attr} reference sheet ({}x{}) holds no whole choice",
            sheet.width(),
            sheet.height()
        )));
    }
    Ok(n)
}

/// Lookup of how many discrete choices each attribute offers.
#[derive(Debug)]
pub struct AttributeCatalog<P> {
    provider: P,
}

impl<P: ReferenceImageProvider> AttributeCatalog<P> {
    /// Catalog reading sheet-derived counts through `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Number of valid choices for `attr`.
    ///
    /// Fixed attributes never touch the provider; sheet-derived ones fail with
    /// [`KisekaeError::NotFound`] when the provider cannot supply the sheet.
    pub fn count_for(&self, attr: AttributeKind) -> KisekaeResult<u32> {
        if let Some(n) = attr.fixed_count() {
            return Ok(n);
        }
        let sheet = self.provider.reference_image(attr)?;
        count_from_sheet(attr, &sheet)
    }

    /// Whether `value` is a valid choice for `attr`.
    pub fn contains(&self, attr: AttributeKind, value: u32) -> KisekaeResult<bool> {
        Ok(value < self.count_for(attr)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/attributes.rs"]
mod tests;
