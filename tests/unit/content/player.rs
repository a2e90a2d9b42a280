use super::*;
use crate::{
    assets::loader::MemoryImageLoader,
    compose::base::{bottoms_sheet_name, face_nose_sheet_name, shoes_sheet_name},
    config::settings::Settings,
    foundation::{core::AppearanceConfig, error::KisekaeError},
};

#[derive(Default)]
struct FakePlayer {
    male: bool,
    texture_name: Option<String>,
    texture: Option<PixelImage>,
}

impl PlayerHandle for FakePlayer {
    fn is_male(&self) -> bool {
        self.male
    }

    fn set_texture_name(&mut self, name: String) {
        self.texture_name = Some(name);
    }

    fn set_rendered_base_texture(&mut self, texture: PixelImage) {
        self.texture = Some(texture);
    }
}

fn wardrobe() -> Wardrobe<MemoryImageLoader> {
    let loader = MemoryImageLoader::new()
        .with("farmer_base", PixelImage::new(384, 672))
        .unwrap()
        .with(&face_nose_sheet_name(Sex::Male, 1, 0), PixelImage::new(96, 672))
        .unwrap()
        .with(&shoes_sheet_name(Sex::Male, 2), PixelImage::new(96, 672))
        .unwrap()
        .with(&bottoms_sheet_name(Sex::Male), PixelImage::new(96 * 12, 672))
        .unwrap();
    Wardrobe::new(loader, Settings::default())
}

fn saved(multiplayer_fix: bool) -> SavedAppearance {
    SavedAppearance {
        multiplayer_fix,
        slots: vec![AppearanceConfig::default(), AppearanceConfig::new(1, 0, 4, 2)],
    }
}

#[test]
fn multiplayer_mode_sets_encoded_texture_name() {
    let w = wardrobe();
    let mut player = FakePlayer::default();
    w.patch_base_texture(&mut player, &saved(true), 1).unwrap();
    assert_eq!(
        player.texture_name.as_deref(),
        Some("KisekaeBase_female_1_0_4_2")
    );
    assert!(player.texture.is_none());
}

#[test]
fn local_mode_swaps_in_composed_texture() {
    let w = wardrobe();
    let mut player = FakePlayer {
        male: true,
        ..FakePlayer::default()
    };
    w.patch_base_texture(&mut player, &saved(false), 1).unwrap();
    assert_eq!(
        player.texture.as_ref().map(|t| t.dimensions()),
        Some((384, 672))
    );
    assert!(player.texture_name.is_none());
}

#[test]
fn failures_leave_the_player_unchanged() {
    let w = wardrobe();
    let mut player = FakePlayer {
        male: true,
        ..FakePlayer::default()
    };
    // slot 0 needs male_face0_nose0.png, which is missing
    assert!(
        w.patch_base_texture(&mut player, &saved(false), 0)
            .unwrap_err()
            .is_not_found()
    );
    assert!(matches!(
        w.patch_base_texture(&mut player, &saved(true), 5),
        Err(KisekaeError::InvalidArgument(_))
    ));
    assert!(player.texture.is_none());
    assert!(player.texture_name.is_none());
}
