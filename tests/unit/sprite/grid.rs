use super::*;

#[test]
fn full_cell_at_origin() {
    assert_eq!(
        sprite_rect(0, 96, 96, 672, 0).unwrap(),
        Rect::new(0, 0, 96, 672)
    );
}

#[test]
fn adjusted_height_is_bottom_aligned_to_reference_row() {
    // 5 * 32 + (32 - 15)
    assert_eq!(
        sprite_rect(5, 96, 96, 32, 15).unwrap(),
        Rect::new(0, 177, 96, 15)
    );
}

#[test]
fn columns_wrap_left_to_right_then_down() {
    let grid = GridSpec::new(96, 32).unwrap();
    assert_eq!(grid.rect(3, 384).unwrap(), Rect::new(288, 0, 96, 32));
    assert_eq!(grid.rect(4, 384).unwrap(), Rect::new(0, 32, 96, 32));
    assert_eq!(grid.rect(9, 384).unwrap(), Rect::new(96, 64, 96, 32));
}

#[test]
fn trailing_partial_column_is_unreachable() {
    let grid = GridSpec::new(96, 672).unwrap();
    assert_eq!(grid.columns(400), 4);
    assert_eq!(grid.rect(4, 400).unwrap(), Rect::new(0, 672, 96, 672));
}

#[test]
fn adjusted_offset_ignores_cell_height() {
    let grid = GridSpec::new(96, 64).unwrap().with_adjusted_height(10).unwrap();
    assert_eq!(grid.rect(1, 96).unwrap(), Rect::new(0, 64 + 22, 96, 10));
}

#[test]
fn zero_adjusted_height_means_full_cell() {
    let grid = GridSpec::new(16, 16).unwrap().with_adjusted_height(0).unwrap();
    assert_eq!(grid.adjusted_height(), None);
    assert_eq!(grid.rect(2, 32).unwrap(), Rect::new(0, 16, 16, 16));
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(matches!(
        GridSpec::new(0, 32),
        Err(KisekaeError::InvalidArgument(_))
    ));
    assert!(GridSpec::new(96, 0).is_err());
    assert!(GridSpec::new(96, 16).unwrap().with_adjusted_height(17).is_err());
    assert!(GridSpec::new(96, 672).unwrap().with_adjusted_height(33).is_err());
    assert!(sprite_rect(0, 95, 96, 32, 0).is_err());
}

#[test]
fn rect_within_bounds_index_by_total_cells() {
    let grid = GridSpec::new(96, 32).unwrap();
    assert_eq!(
        grid.rect_within(83, 384, 672).unwrap(),
        Rect::new(288, 640, 96, 32)
    );
    assert!(matches!(
        grid.rect_within(84, 384, 672),
        Err(KisekaeError::InvalidArgument(_))
    ));
    assert!(grid.rect_within(0, 384, 31).is_err());
}
