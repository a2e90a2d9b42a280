use crate::{
    assets::{loader::ImageLoader, pixmap::PixelImage},
    config::saved::SavedAppearance,
    content::wardrobe::Wardrobe,
    foundation::{core::Sex, error::KisekaeResult},
    router::key::encode_base_key,
};

/// Host-side player whose base texture can be replaced.
pub trait PlayerHandle {
    /// Whether the player uses the male base texture.
    fn is_male(&self) -> bool;

    /// Point the player's renderer at a named asset; the host resolves it through its pipeline.
    fn set_texture_name(&mut self, name: String);

    /// Replace the texture the player's renderer currently draws with.
    fn set_rendered_base_texture(&mut self, texture: PixelImage);
}

impl<L: ImageLoader> Wardrobe<L> {
    /// Apply the configuration saved in `slot` to `player`.
    ///
    /// With `multiplayer_fix` the player is given an encoded base-texture key, otherwise the
    /// texture is composed now and swapped in. On error the player is left unchanged.
    pub fn patch_base_texture<P: PlayerHandle + ?Sized>(
        &self,
        player: &mut P,
        saved: &SavedAppearance,
        slot: usize,
    ) -> KisekaeResult<()> {
        let config = saved.slot(slot)?;
        let sex = Sex::from_is_male(player.is_male());
        if saved.multiplayer_fix {
            let key = encode_base_key(sex, config);
            tracing::debug!(%key, "setting player texture name");
            player.set_texture_name(key);
        } else {
            let texture = self.compose(sex, config)?;
            tracing::debug!(%sex, ?config, "swapping player base texture");
            player.set_rendered_base_texture(texture);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/player.rs"]
mod tests;
