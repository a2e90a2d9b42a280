//! Kisekae patches a character's composite base spritesheet at runtime.
//!
//! Rectangular sprite regions are copied from override sheets into a private copy of a clean base
//! texture, driven by a small configuration (face, nose, bottoms, shoes) per sex.
//!
//! # Pipeline overview
//!
//! 1. **Route**: an asset key such as `KisekaeBase_male_1_2_3_0` is classified by
//!    [`AssetRouter`]; out-of-range or malformed numeric fields are clamped to 0.
//! 2. **Load**: the override sheets `<sex>_face<f>_nose<n>.png`, `<sex>_shoes<s>.png` and
//!    `<sex>_bottoms.png` are read through an [`ImageLoader`].
//! 3. **Compose**: sprites are addressed with [`GridSpec`] and blitted over a copy of the clean
//!    base; shoe rows copy only a bottom-aligned sliver whose height comes from a per-sex table.
//!
//! [`Wardrobe`] ties the steps together behind the `can_handle` / `resolve` contract a host asset
//! pipeline expects.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod compose;
mod config;
mod content;
mod foundation;
mod router;
mod sprite;

pub use assets::decode::{decode_image, encode_png};
pub use assets::loader::{FsImageLoader, ImageLoader, MemoryImageLoader, asset_file_name};
pub use assets::pixmap::PixelImage;
pub use catalog::attributes::{
    AttributeCatalog, AttributeKind, COLOR_CHOICES, SheetLayout, count_from_sheet,
};
pub use catalog::reference::{NoReferenceImages, ReferenceImageProvider, SheetReferenceImages};
pub use compose::base::{
    BOTTOMS_TARGET_CELL, BaseTextures, FACE_TARGET_CELL, OverrideSheets, SHOE_TARGET_STRIDE,
    bottoms_sheet_name, compose_base, compose_with_sheets, face_nose_sheet_name, shoes_sheet_name,
};
pub use compose::shoes::{FEMALE_SHOE_HEIGHTS, MALE_SHOE_HEIGHTS, SHOE_ROWS, shoe_heights};
pub use config::saved::SavedAppearance;
pub use config::settings::{ReferenceSheetNames, Settings};
pub use content::player::PlayerHandle;
pub use content::wardrobe::{DelegateAction, Resolution, Wardrobe};
pub use foundation::core::{AppearanceConfig, Rect, Rgba8, Sex};
pub use foundation::error::{KisekaeError, KisekaeResult};
pub use router::key::{BASE_KEY_PREFIX, BaseKey, encode_base_key, parse_base_key};
pub use router::request::{AssetRequest, AssetRouter, asset_name_eq};
pub use sprite::grid::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, GridSpec, REFERENCE_ROW_HEIGHT, sprite_rect,
};
pub use sprite::patch::patch_sprite;
