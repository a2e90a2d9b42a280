use crate::{
    catalog::{
        attributes::{AttributeCatalog, AttributeKind},
        reference::ReferenceImageProvider,
    },
    foundation::{
        core::{AppearanceConfig, Sex},
        error::KisekaeResult,
    },
};

/// Prefix of every base-texture asset key.
pub const BASE_KEY_PREFIX: &str = "KisekaeBase_";

/// Decoded `KisekaeBase_<sex>_<face>_<nose>_<bottoms>_<shoes>` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseKey {
    /// Compose a base texture for `sex` with `config`.
    Compose {
        /// Selected base image and shoe-height table.
        sex: Sex,
        /// Clamped configuration.
        config: AppearanceConfig,
    },
    /// The sex field is missing or unknown: serve the host's unmodified base image.
    Fallback,
}

/// Build the asset key for `sex` and `config`.
pub fn encode_base_key(sex: Sex, config: AppearanceConfig) -> String {
    format!(
        "{BASE_KEY_PREFIX}{}_{}_{}_{}_{}",
        sex.prefix(),
        config.face,
        config.nose,
        config.bottoms,
        config.shoes
    )
}

/// Decode a base-texture key; `None` when `key` does not carry [`BASE_KEY_PREFIX`].
///
/// Numeric fields that fail to parse, are negative, or are not below the catalog count for their
/// attribute are replaced with 0. Missing trailing fields are 0 and extra fields are ignored.
pub fn parse_base_key<P: ReferenceImageProvider>(
    key: &str,
    catalog: &AttributeCatalog<P>,
) -> KisekaeResult<Option<BaseKey>> {
    if !key.starts_with(BASE_KEY_PREFIX) {
        return Ok(None);
    }

    let parts: Vec<&str> = key.split('_').collect();
    let Some(sex) = parts.get(1).and_then(|s| Sex::from_prefix(s)) else {
        return Ok(Some(BaseKey::Fallback));
    };

    let mut values = [0u32; 4];
    for (slot, attr) in AttributeKind::BASE_TEXTURE.into_iter().enumerate() {
        let Some(raw) = parts.get(slot + 2) else {
            break;
        };
        let count = catalog.count_for(attr)?;
        values[slot] = match raw.parse::<i64>() {
            Ok(n) if n >= 0 && n < i64::from(count) => n as u32,
            Ok(n) => {
                tracing::warn!(key, %attr, value = n, count, "base key field out of range, using 0");
                0
            }
            Err(_) => {
                tracing::warn!(key, %attr, raw = *raw, "base key field is not an integer, using 0");
                0
            }
        };
    }

    Ok(Some(BaseKey::Compose {
        sex,
        config: AppearanceConfig::from_array(values),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/router/key.rs"]
mod tests;
