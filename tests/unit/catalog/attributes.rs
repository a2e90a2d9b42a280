use std::cell::Cell;

use super::*;

struct CountingSheets {
    width: u32,
    height: u32,
    calls: Cell<usize>,
}

impl ReferenceImageProvider for CountingSheets {
    fn reference_image(&self, _attr: AttributeKind) -> KisekaeResult<PixelImage> {
        self.calls.set(self.calls.get() + 1);
        Ok(PixelImage::new(self.width, self.height))
    }
}

#[test]
fn fixed_counts_match_the_base_texture_overrides() {
    let catalog = AttributeCatalog::new(crate::catalog::reference::NoReferenceImages);
    assert_eq!(catalog.count_for(AttributeKind::Face).unwrap(), 2);
    assert_eq!(catalog.count_for(AttributeKind::Nose).unwrap(), 3);
    assert_eq!(catalog.count_for(AttributeKind::Bottoms).unwrap(), 12);
    assert_eq!(catalog.count_for(AttributeKind::Shoes).unwrap(), 4);
    for attr in [
        AttributeKind::EyeColor,
        AttributeKind::HairColor,
        AttributeKind::BottomsColor,
    ] {
        assert_eq!(catalog.count_for(attr).unwrap(), 64);
    }
}

#[test]
fn sheet_counts_divide_by_cell_units() {
    let sheets = CountingSheets {
        width: 128,
        height: 672,
        calls: Cell::new(0),
    };
    let catalog = AttributeCatalog::new(&sheets);

    // 672/96 * 128/16
    assert_eq!(catalog.count_for(AttributeKind::Hair).unwrap(), 56);
    // 672/32 * 128/8
    assert_eq!(catalog.count_for(AttributeKind::Shirt).unwrap(), 336);
    // 672/32 * 128/16
    assert_eq!(catalog.count_for(AttributeKind::Accessory).unwrap(), 168);
    assert_eq!(catalog.count_for(AttributeKind::Skin).unwrap(), 672);
    assert_eq!(catalog.count_for(AttributeKind::ShoeColor).unwrap(), 672);
    assert_eq!(sheets.calls.get(), 5);

    catalog.count_for(AttributeKind::Face).unwrap();
    assert_eq!(sheets.calls.get(), 5);
}

#[test]
fn missing_sheet_is_not_found() {
    let catalog = AttributeCatalog::new(crate::catalog::reference::NoReferenceImages);
    let err = catalog.count_for(AttributeKind::Hair).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn undersized_sheet_is_rejected() {
    let sheet = PixelImage::new(15, 200);
    assert!(matches!(
        count_from_sheet(AttributeKind::Hair, &sheet),
        Err(KisekaeError::Validation(_))
    ));
}

#[test]
fn every_attribute_is_either_fixed_or_sheet_derived() {
    for attr in AttributeKind::ALL {
        assert_ne!(
            attr.fixed_count().is_some(),
            attr.sheet_layout().is_some(),
            "{attr}"
        );
    }
}

#[test]
fn contains_checks_upper_bound() {
    let catalog = AttributeCatalog::new(crate::catalog::reference::NoReferenceImages);
    assert!(catalog.contains(AttributeKind::Face, 1).unwrap());
    assert!(!catalog.contains(AttributeKind::Face, 2).unwrap());
}
