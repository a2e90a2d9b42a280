use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "kisekae_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn asset_names_accept_either_separator() {
    assert_eq!(asset_file_name("a/b.png").unwrap(), "a/b.png");
    assert_eq!(asset_file_name("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(asset_file_name("./a//b.png").unwrap(), "a/b.png");
    assert!(asset_file_name("../x.png").is_err());
    assert!(asset_file_name("/x.png").is_err());
    assert!(asset_file_name("").is_err());
    assert!(asset_file_name("./").is_err());
}

#[test]
fn names_without_extension_resolve_to_png() {
    assert_eq!(asset_file_name("farmer_base").unwrap(), "farmer_base.png");
    assert_eq!(asset_file_name("male_bottoms.png").unwrap(), "male_bottoms.png");
    assert_eq!(asset_file_name("a.b/sheet").unwrap(), "a.b/sheet.png");
    assert_eq!(
        asset_file_name("Characters\\Farmer\\accessories").unwrap(),
        "Characters/Farmer/accessories.png"
    );
}

#[test]
fn memory_loader_serves_copies_and_reports_missing() {
    let loader = MemoryImageLoader::new()
        .with("menuTextures", PixelImage::filled(2, 2, [1, 2, 3, 4]))
        .unwrap();

    let a = loader.load("menuTextures.png").unwrap();
    let b = loader.load("menuTextures").unwrap();
    assert_eq!(a, b);
    assert_eq!(loader.load_count(), 2);

    let err = loader.load("missing.png").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn fs_loader_reads_png_and_maps_unusable_files_to_not_found() {
    let tmp = temp_dir("fs_loader");
    std::fs::create_dir_all(&tmp).unwrap();
    image::RgbaImage::from_raw(1, 1, vec![5, 6, 7, 255])
        .unwrap()
        .save(tmp.join("sheet.png"))
        .unwrap();

    let loader = FsImageLoader::new(&tmp);
    let img = loader.load("sheet").unwrap();
    assert_eq!(img.pixel(0, 0), Some([5, 6, 7, 255]));
    assert_eq!(loader.load_count(), 1);

    assert!(loader.load("nope.png").unwrap_err().is_not_found());

    std::fs::write(tmp.join("broken.png"), b"garbage").unwrap();
    let err = loader.load("broken.png").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("broken.png"));
    assert_eq!(loader.load_count(), 1);

    std::fs::remove_dir_all(&tmp).ok();
}
