use std::path::PathBuf;

use super::*;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "cutin_{}_{}_{name}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn load_rgba_png_keeps_straight_alpha() {
    let path = temp_file("straight.png");
    RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8])
        .unwrap()
        .save(&path)
        .unwrap();

    let decoded = load_rgba(&path).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [100, 50, 200, 128]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_rgba_rgb_gains_opaque_alpha() {
    let path = temp_file("rgb.png");
    image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6])
        .unwrap()
        .save(&path)
        .unwrap();

    let decoded = load_rgba(&path).unwrap();
    assert_eq!(decoded.get_pixel(0, 0).0, [1, 2, 3, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [4, 5, 6, 255]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_rgba_corrupt_file_is_decode_error_with_path() {
    let path = temp_file("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();

    let err = load_rgba(&path).unwrap_err();
    match &err {
        CutinError::Decode { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected decode error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("decode error:"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_rgba_missing_file_is_decode_error_with_path() {
    let path = std::env::temp_dir().join("cutin_definitely_missing_1f3a.png");
    let err = load_rgba(&path).unwrap_err();
    assert!(matches!(err, CutinError::Decode { .. }));
    assert!(err.to_string().contains("cutin_definitely_missing_1f3a.png"));
}
