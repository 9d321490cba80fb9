use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CutinError::missing_input("x")
            .to_string()
            .contains("missing input:")
    );
    assert!(
        CutinError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CutinError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_error_names_the_path() {
    let err = CutinError::Io {
        path: PathBuf::from("out/7.png"),
        source: std::io::Error::other("disk full"),
    };
    let msg = err.to_string();
    assert!(msg.contains("out/7.png"));
    assert!(msg.contains("disk full"));
}

#[test]
fn frame_wrapper_prefixes_index_and_keeps_root() {
    let err = CutinError::validation("bad").in_frame(12);
    assert!(err.to_string().starts_with("frame 12:"));
    assert!(matches!(err.root(), CutinError::Validation(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CutinError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
