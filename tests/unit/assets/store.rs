use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "cutin_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn f(n: u32) -> FrameIndex {
    FrameIndex::new(n).unwrap()
}

#[test]
fn template_paths_are_keyed_by_frame_number() {
    let store = TemplateStore::new("Template");
    assert_eq!(store.path_for(f(1)), Path::new("Template").join("1.png"));
    assert_eq!(store.path_for(f(20)), Path::new("Template").join("20.png"));
}

#[test]
fn template_load_reads_fresh_and_reports_missing() {
    let tmp = temp_dir("store_load");
    std::fs::create_dir_all(&tmp).unwrap();
    let store = TemplateStore::new(&tmp);

    RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]))
        .save(tmp.join("4.png"))
        .unwrap();
    let img = store.load(f(4)).unwrap();
    assert_eq!(img.dimensions(), (3, 2));

    // Overwriting the file is visible on the next load.
    RgbaImage::from_pixel(5, 5, image::Rgba([0, 0, 0, 0]))
        .save(tmp.join("4.png"))
        .unwrap();
    assert_eq!(store.load(f(4)).unwrap().dimensions(), (5, 5));

    assert!(matches!(store.load(f(5)), Err(CutinError::Decode { .. })));

    let missing = store.missing_frames();
    assert_eq!(missing.len(), 19);
    assert!(!missing.contains(&f(4)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn identifier_is_trimmed_and_required() {
    assert_eq!(normalize_identifier("  Aria ").unwrap(), "Aria");
    assert!(matches!(
        normalize_identifier("   "),
        Err(CutinError::MissingInput(_))
    ));
    assert!(matches!(
        normalize_identifier(""),
        Err(CutinError::MissingInput(_))
    ));
}

#[test]
fn identifier_must_be_single_component() {
    for bad in ["..", ".", "a/b", "a\\b", "/abs"] {
        assert!(
            matches!(normalize_identifier(bad), Err(CutinError::Validation(_))),
            "{bad}"
        );
    }
}

#[test]
fn output_store_creates_dir_and_saves_png() {
    let tmp = temp_dir("store_save");
    let out = OutputStore::create(&tmp, "Hero").unwrap();
    assert_eq!(out.dir(), tmp.join("Hero"));
    assert!(out.dir().is_dir());

    let img = RgbaImage::from_pixel(2, 2, image::Rgba([9, 8, 7, 255]));
    let path = out.save(f(3), &img).unwrap();
    assert_eq!(path, tmp.join("Hero").join("3.png"));
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back, img);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn output_store_missing_name_touches_nothing() {
    let tmp = temp_dir("store_missing_name");
    assert!(matches!(
        OutputStore::create(&tmp, " "),
        Err(CutinError::MissingInput(_))
    ));
    assert!(!tmp.exists());
}
