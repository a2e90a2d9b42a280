use super::*;

#[test]
fn parses_slots_and_flag() {
    let json = br#"{"multiplayer_fix":true,"slots":[{"face":1,"nose":2,"bottoms":3,"shoes":0},{}]}"#;
    let saved = SavedAppearance::from_reader(&json[..]).unwrap();
    assert!(saved.multiplayer_fix);
    assert_eq!(saved.slot(0).unwrap(), AppearanceConfig::new(1, 2, 3, 0));
    assert_eq!(saved.slot(1).unwrap(), AppearanceConfig::default());
}

#[test]
fn missing_slot_is_invalid_argument() {
    let saved = SavedAppearance::default();
    assert!(matches!(
        saved.slot(0),
        Err(KisekaeError::InvalidArgument(_))
    ));
}
