use crate::{
    catalog::{attributes::AttributeCatalog, reference::ReferenceImageProvider},
    config::settings::Settings,
    foundation::{
        core::{AppearanceConfig, Sex},
        error::KisekaeResult,
    },
    router::key::{BASE_KEY_PREFIX, BaseKey, parse_base_key},
};

/// What to do with an asset request this crate handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetRequest {
    /// Serve the customization menu spritesheet.
    MenuSpritesheet,
    /// Forward the host's accessory sheet to the accessory override unchanged.
    AccessoryOverride,
    /// Compose a base texture.
    ComposeBase {
        /// Selected base image and shoe-height table.
        sex: Sex,
        /// Clamped configuration.
        config: AppearanceConfig,
    },
    /// Serve the host's unmodified base texture.
    FallbackBase,
}

/// Maps asset names onto [`AssetRequest`]s.
#[derive(Clone, Debug)]
pub struct AssetRouter {
    menu_sheet: String,
    accessories_asset: String,
}

impl AssetRouter {
    /// Router for the asset names configured in `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self {
            menu_sheet: settings.menu_sheet.clone(),
            accessories_asset: settings.accessories_asset.clone(),
        }
    }

    /// Whether `key` is one of the handled asset names.
    pub fn can_handle(&self, key: &str) -> bool {
        asset_name_eq(key, &self.menu_sheet)
            || asset_name_eq(key, &self.accessories_asset)
            || key.starts_with(BASE_KEY_PREFIX)
    }

    /// Classify `key`; `None` when it is not handled here.
    pub fn route<P: ReferenceImageProvider>(
        &self,
        key: &str,
        catalog: &AttributeCatalog<P>,
    ) -> KisekaeResult<Option<AssetRequest>> {
        if asset_name_eq(key, &self.menu_sheet) {
            return Ok(Some(AssetRequest::MenuSpritesheet));
        }
        if asset_name_eq(key, &self.accessories_asset) {
            return Ok(Some(AssetRequest::AccessoryOverride));
        }
        Ok(parse_base_key(key, catalog)?.map(|k| match k {
            BaseKey::Compose { sex, config } => AssetRequest::ComposeBase { sex, config },
            BaseKey::Fallback => AssetRequest::FallbackBase,
        }))
    }
}

/// Host asset-name equality: path separators are interchangeable and case is ignored.
pub fn asset_name_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .all(|(x, y)| fold_name_byte(x) == fold_name_byte(y))
}

fn fold_name_byte(c: u8) -> u8 {
    if c == b'\\' { b'/' } else { c.to_ascii_lowercase() }
}

#[cfg(test)]
#[path = "../../tests/unit/router/request.rs"]
mod tests;
