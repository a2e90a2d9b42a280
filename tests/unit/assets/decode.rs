use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8, 1, 2, 3, 0];
    let img = image::RgbaImage::from_raw(2, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.pixel(0, 0), Some([100, 50, 200, 128]));
    assert_eq!(decoded.pixel(1, 0), Some([1, 2, 3, 0]));
}

#[test]
fn encode_then_decode_keeps_pixels() {
    let img = PixelImage::filled(3, 2, [10, 20, 30, 40]);
    let png = encode_png(&img).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(decode_image(&png).unwrap(), img);
}

#[test]
fn decode_garbage_is_err() {
    assert!(decode_image(b"not an image").is_err());
}
