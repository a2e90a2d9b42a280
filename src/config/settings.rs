use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{
    catalog::attributes::AttributeKind,
    foundation::error::{KisekaeError, KisekaeResult},
};

/// Asset names and locations. Every field defaults to the stock naming scheme.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the override sheets.
    pub overrides_dir: PathBuf,
    /// Clean male base sheet, relative to `overrides_dir`.
    pub male_base: String,
    /// Clean female base sheet, relative to `overrides_dir`.
    pub female_base: String,
    /// Asset name of the customization menu spritesheet (also its file name).
    pub menu_sheet: String,
    /// Host asset name that is redirected to the accessory override.
    pub accessories_asset: String,
    /// Override asset served in place of `accessories_asset`.
    pub accessories_override: String,
    /// Host asset used when a base-texture key names no known sex.
    pub fallback_base: String,
    /// Sheets that size the sheet-derived attributes.
    pub reference_sheets: ReferenceSheetNames,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overrides_dir: PathBuf::from("overrides"),
            male_base: "farmer_base".to_string(),
            female_base: "farmer_girl_base".to_string(),
            menu_sheet: "menuTextures".to_string(),
            accessories_asset: "Characters/Farmer/accessories".to_string(),
            accessories_override: "overrides/accessories".to_string(),
            fallback_base: "Characters/Farmer/farmer_base".to_string(),
            reference_sheets: ReferenceSheetNames::default(),
        }
    }
}

impl Settings {
    /// Read settings JSON from `path`.
    ///
    /// A relative `overrides_dir` is resolved against the directory containing `path`.
    pub fn from_path(path: impl AsRef<Path>) -> KisekaeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KisekaeError::validation(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        let mut settings = Self::from_reader(BufReader::new(f))?;
        if settings.overrides_dir.is_relative()
            && let Some(parent) = path.parent()
        {
            settings.overrides_dir = parent.join(&settings.overrides_dir);
        }
        Ok(settings)
    }

    /// Parse settings JSON.
    pub fn from_reader(r: impl Read) -> KisekaeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KisekaeError::validation(format!("parse settings JSON: {e}")))
    }
}

/// File names of the attribute reference sheets.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReferenceSheetNames {
    /// Skin color strip.
    pub skin: String,
    /// Hairstyle sheet.
    pub hair: String,
    /// Shirt sheet.
    pub shirt: String,
    /// Accessory sheet.
    pub accessory: String,
    /// Shoe color strip.
    pub shoe_color: String,
}

impl Default for ReferenceSheetNames {
    fn default() -> Self {
        Self {
            skin: "skinColors".to_string(),
            hair: "hairstyles".to_string(),
            shirt: "shirts".to_string(),
            accessory: "accessories".to_string(),
            shoe_color: "shoeColors".to_string(),
        }
    }
}

impl ReferenceSheetNames {
    /// Sheet name for a sheet-derived attribute, `None` for fixed-count ones.
    pub fn name_for(&self, attr: AttributeKind) -> Option<&str> {
        match attr {
            AttributeKind::Skin => Some(&self.skin),
            AttributeKind::Hair => Some(&self.hair),
            AttributeKind::Shirt => Some(&self.shirt),
            AttributeKind::Accessory => Some(&self.accessory),
            AttributeKind::ShoeColor => Some(&self.shoe_color),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
