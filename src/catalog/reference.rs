use crate::{
    assets::{loader::ImageLoader, pixmap::PixelImage},
    catalog::attributes::AttributeKind,
    config::settings::ReferenceSheetNames,
    foundation::error::{KisekaeError, KisekaeResult},
};

/// Supplies the spritesheets that size the sheet-derived attributes.
pub trait ReferenceImageProvider {
    /// Reference sheet for `attr`, or [`KisekaeError::NotFound`].
    fn reference_image(&self, attr: AttributeKind) -> KisekaeResult<PixelImage>;
}

impl<P: ReferenceImageProvider + ?Sized> ReferenceImageProvider for &P {
    fn reference_image(&self, attr: AttributeKind) -> KisekaeResult<PixelImage> {
        (**self).reference_image(attr)
    }
}

/// Provider with no sheets; only fixed-count attributes can be answered.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReferenceImages;

impl ReferenceImageProvider for NoReferenceImages {
    fn reference_image(&self, attr: AttributeKind) -> KisekaeResult<PixelImage> {
        Err(KisekaeError::not_found(format!(
            "no reference sheet available for {attr}"
        )))
    }
}

/// Reads reference sheets through an [`ImageLoader`] using configurable sheet names.
#[derive(Debug)]
pub struct SheetReferenceImages<L> {
    loader: L,
    names: ReferenceSheetNames,
}

impl<L: ImageLoader> SheetReferenceImages<L> {
    /// Provider resolving sheet names through `loader`.
    pub fn new(loader: L, names: ReferenceSheetNames) -> Self {
        Self { loader, names }
    }
}

impl<L: ImageLoader> ReferenceImageProvider for SheetReferenceImages<L> {
    fn reference_image(&self, attr: AttributeKind) -> KisekaeResult<PixelImage> {
        let name = self.names.name_for(attr).ok_or_else(|| {
            KisekaeError::not_found(format!("{attr} is not sized by a reference sheet"))
        })?;
        self.loader.load(name)
    }
}
