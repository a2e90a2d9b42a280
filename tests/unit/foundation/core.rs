use super::*;

#[test]
fn rect_fits_within_boundaries() {
    assert!(Rect::new(0, 0, 96, 672).fits_within(96, 672));
    assert!(Rect::new(288, 0, 96, 672).fits_within(384, 672));
    assert!(!Rect::new(289, 0, 96, 672).fits_within(384, 672));
    assert!(!Rect::new(0, 1, 96, 672).fits_within(384, 672));
    assert!(!Rect::new(u32::MAX, 0, 2, 1).fits_within(u32::MAX, 1));
}

#[test]
fn sex_prefix_parse_is_exact() {
    for sex in Sex::ALL {
        assert_eq!(Sex::from_prefix(sex.prefix()), Some(sex));
    }
    assert_eq!(Sex::from_prefix("Male"), None);
    assert_eq!(Sex::from_prefix(""), None);
    assert_eq!(Sex::from_is_male(false), Sex::Female);
    assert_eq!(Sex::Female.to_string(), "female");
}

#[test]
fn appearance_array_order_is_face_nose_bottoms_shoes() {
    let cfg = AppearanceConfig::new(1, 2, 3, 4);
    assert_eq!(cfg.to_array(), [1, 2, 3, 4]);
    assert_eq!(AppearanceConfig::from_array([1, 2, 3, 4]), cfg);
}

#[test]
fn appearance_deserializes_with_missing_fields() {
    let cfg: AppearanceConfig = serde_json::from_str(r#"{"face":1,"shoes":2}"#).unwrap();
    assert_eq!(cfg, AppearanceConfig::new(1, 0, 0, 2));
}
