use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::foundation::{
    core::AppearanceConfig,
    error::{KisekaeError, KisekaeResult},
};

/// Player-chosen base-texture configurations, one per saved slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SavedAppearance {
    /// Patch players through an encoded asset key instead of an in-place texture swap, so
    /// every client in a shared session resolves the same texture.
    pub multiplayer_fix: bool,
    /// Saved configurations; slot 0 is the active one.
    pub slots: Vec<AppearanceConfig>,
}

impl SavedAppearance {
    /// Read saved appearance JSON from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> KisekaeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KisekaeError::validation(format!("open appearance JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse saved appearance JSON.
    pub fn from_reader(r: impl Read) -> KisekaeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KisekaeError::validation(format!("parse appearance JSON: {e}")))
    }

    /// Configuration saved in `slot`.
    pub fn slot(&self, slot: usize) -> KisekaeResult<AppearanceConfig> {
        self.slots.get(slot).copied().ok_or_else(|| {
            KisekaeError::invalid_argument(format!(
                "appearance slot {slot} out of range ({} saved)",
                self.slots.len()
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/saved.rs"]
mod tests;
