use crate::{
    assets::{loader::ImageLoader, pixmap::PixelImage},
    catalog::{attributes::AttributeCatalog, reference::SheetReferenceImages},
    compose::base::{BaseTextures, compose_base},
    config::settings::Settings,
    foundation::{
        core::{AppearanceConfig, Sex},
        error::{KisekaeError, KisekaeResult},
    },
    router::request::{AssetRequest, AssetRouter},
};

/// Asset the host should load instead of receiving pixels directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DelegateAction {
    /// Load this override asset unchanged in place of the accessory sheet.
    AccessoryOverride(String),
    /// Load the host's own unmodified base texture.
    FallbackBase(String),
}

/// Result of resolving a handled asset key.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// Freshly produced pixels owned by the caller.
    Image(PixelImage),
    /// The host must load another asset.
    Delegate(DelegateAction),
}

/// Serves the menu sheet, accessory redirect and composed base textures to a host asset
/// pipeline.
///
/// Base textures and the menu sheet are loaded once in [`Wardrobe::new`] and only read
/// afterwards; every request works on its own copy, so a `Wardrobe` can be shared across threads
/// when its loader can.
#[derive(Debug)]
pub struct Wardrobe<L> {
    loader: L,
    settings: Settings,
    router: AssetRouter,
    bases: BaseTextures,
    menu: Option<PixelImage>,
}

impl<L: ImageLoader> Wardrobe<L> {
    /// Load the base textures and menu sheet through `loader`.
    ///
    /// Missing sheets are logged; requests that need them later fail with
    /// [`KisekaeError::NotFound`].
    pub fn new(loader: L, settings: Settings) -> Self {
        let bases = BaseTextures::load(&loader, &settings);
        let menu = match loader.load(&settings.menu_sheet) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::error!(name = %settings.menu_sheet, %err, "could not load menu sheet");
                None
            }
        };
        Self {
            router: AssetRouter::new(&settings),
            loader,
            settings,
            bases,
            menu,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loader used for override and reference sheets.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Attribute catalog backed by the reference sheets in the overrides directory.
    pub fn catalog(&self) -> AttributeCatalog<SheetReferenceImages<&L>> {
        AttributeCatalog::new(SheetReferenceImages::new(
            &self.loader,
            self.settings.reference_sheets.clone(),
        ))
    }

    /// Whether `key` is served by [`Wardrobe::resolve`].
    pub fn can_handle(&self, key: &str) -> bool {
        self.router.can_handle(key)
    }

    /// Resolve a handled asset key; `Ok(None)` for keys this wardrobe does not handle.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, key: &str) -> KisekaeResult<Option<Resolution>> {
        let Some(request) = self.router.route(key, &self.catalog())? else {
            return Ok(None);
        };
        let resolution = match request {
            AssetRequest::MenuSpritesheet => Resolution::Image(
                self.menu
                    .clone()
                    .ok_or_else(|| KisekaeError::not_found(format!("menu sheet '{key}'")))?,
            ),
            AssetRequest::AccessoryOverride => Resolution::Delegate(
                DelegateAction::AccessoryOverride(self.settings.accessories_override.clone()),
            ),
            AssetRequest::FallbackBase => Resolution::Delegate(DelegateAction::FallbackBase(
                self.settings.fallback_base.clone(),
            )),
            AssetRequest::ComposeBase { sex, config } => {
                Resolution::Image(self.compose(sex, config)?)
            }
        };
        Ok(Some(resolution))
    }

    /// Compose a base texture for `sex` with `config`.
    pub fn compose(&self, sex: Sex, config: AppearanceConfig) -> KisekaeResult<PixelImage> {
        compose_base(&self.loader, self.bases.get(sex)?, sex, config)
    }

    /// Private copy of the clean base texture for `sex`.
    pub fn base_texture(&self, sex: Sex) -> KisekaeResult<PixelImage> {
        self.bases.copy_of(sex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/wardrobe.rs"]
mod tests;
