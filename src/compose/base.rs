use crate::{
    assets::{loader::ImageLoader, pixmap::PixelImage},
    compose::shoes::shoe_heights,
    config::settings::Settings,
    foundation::{
        core::{AppearanceConfig, Sex},
        error::{KisekaeError, KisekaeResult},
    },
    sprite::{
        grid::{GridSpec, REFERENCE_ROW_HEIGHT},
        patch::patch_sprite,
    },
};

/// Base-texture cell receiving the face/nose sprite.
pub const FACE_TARGET_CELL: u32 = 0;

/// Base-texture cell receiving the bottoms sprite.
pub const BOTTOMS_TARGET_CELL: u32 = 3;

/// Base-texture cells per shoe row: shoe row `i` lands in cell `i * SHOE_TARGET_STRIDE` of the
/// 96x32 grid, i.e. the first column of a four-column base texture.
pub const SHOE_TARGET_STRIDE: u32 = 4;

/// Override file holding the combined face and nose sprite.
pub fn face_nose_sheet_name(sex: Sex, face: u32, nose: u32) -> String {
    format!("{}_face{face}_nose{nose}.png", sex.prefix())
}

/// Override file holding one shoes variant, one row per sprite row.
pub fn shoes_sheet_name(sex: Sex, shoes: u32) -> String {
    format!("{}_shoes{shoes}.png", sex.prefix())
}

/// Override file holding every bottoms variant.
pub fn bottoms_sheet_name(sex: Sex) -> String {
    format!("{}_bottoms.png", sex.prefix())
}

/// The three override sheets one composition reads.
#[derive(Clone, Debug)]
pub struct OverrideSheets {
    /// `<sex>_face<face>_nose<nose>.png`.
    pub face_nose: PixelImage,
    /// `<sex>_shoes<shoes>.png`.
    pub shoes: PixelImage,
    /// `<sex>_bottoms.png`.
    pub bottoms: PixelImage,
}

impl OverrideSheets {
    /// Load every sheet needed for `config`; fails on the first missing one.
    pub fn load<L: ImageLoader>(
        loader: &L,
        sex: Sex,
        config: AppearanceConfig,
    ) -> KisekaeResult<Self> {
        Ok(Self {
            face_nose: loader.load(&face_nose_sheet_name(sex, config.face, config.nose))?,
            shoes: loader.load(&shoes_sheet_name(sex, config.shoes))?,
            bottoms: loader.load(&bottoms_sheet_name(sex))?,
        })
    }
}

/// Splice face/nose, shoes and bottoms from `sheets` into a copy of `base`.
///
/// `base` is never modified. On error the partially patched copy is dropped, so callers only ever
/// see fully composed textures.
pub fn compose_with_sheets(
    base: &PixelImage,
    sex: Sex,
    config: AppearanceConfig,
    sheets: &OverrideSheets,
) -> KisekaeResult<PixelImage> {
    let mut out = base.clone();
    let cell = GridSpec::default();

    patch_sprite(&mut out, &sheets.face_nose, 0, FACE_TARGET_CELL, cell)?;
    tracing::debug!(%sex, face = config.face, nose = config.nose, "patched face and nose");

    let row = GridSpec::new(cell.cell_width(), REFERENCE_ROW_HEIGHT)?;
    for (i, &height) in shoe_heights(sex).iter().enumerate() {
        let i = i as u32;
        patch_sprite(
            &mut out,
            &sheets.shoes,
            i,
            i * SHOE_TARGET_STRIDE,
            row.with_adjusted_height(height)?,
        )?;
    }
    tracing::debug!(%sex, shoes = config.shoes, "patched shoes");

    patch_sprite(&mut out, &sheets.bottoms, config.bottoms, BOTTOMS_TARGET_CELL, cell)?;
    tracing::debug!(%sex, bottoms = config.bottoms, "patched bottoms");

    Ok(out)
}

/// Load the override sheets for `config` through `loader` and compose them over `base`.
///
/// Every call re-reads the sheets; nothing is cached between calls.
#[tracing::instrument(skip(loader, base))]
pub fn compose_base<L: ImageLoader>(
    loader: &L,
    base: &PixelImage,
    sex: Sex,
    config: AppearanceConfig,
) -> KisekaeResult<PixelImage> {
    let sheets = OverrideSheets::load(loader, sex, config)?;
    compose_with_sheets(base, sex, config, &sheets)
}

/// Clean base textures, loaded once and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct BaseTextures {
    male: Option<PixelImage>,
    female: Option<PixelImage>,
}

impl BaseTextures {
    /// Wrap already-loaded base textures.
    pub fn new(male: PixelImage, female: PixelImage) -> Self {
        Self {
            male: Some(male),
            female: Some(female),
        }
    }

    /// Load both base textures named in `settings`.
    ///
    /// A missing texture is logged and left empty; requests for it later fail with
    /// [`KisekaeError::NotFound`].
    pub fn load<L: ImageLoader>(loader: &L, settings: &Settings) -> Self {
        let load = |name: &str| match loader.load(name) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::error!(name, %err, "could not load base texture");
                None
            }
        };
        Self {
            male: load(&settings.male_base),
            female: load(&settings.female_base),
        }
    }

    /// Shared clean base texture for `sex`.
    pub fn get(&self, sex: Sex) -> KisekaeResult<&PixelImage> {
        let slot = match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        };
        slot.as_ref()
            .ok_or_else(|| KisekaeError::not_found(format!("{sex} base texture")))
    }

    /// Private copy of the clean base texture for `sex`.
    pub fn copy_of(&self, sex: Sex) -> KisekaeResult<PixelImage> {
        self.get(sex).cloned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/base.rs"]
mod tests;
