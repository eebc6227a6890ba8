use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShortformError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ShortformError::invalid_curve("x")
            .to_string()
            .contains("invalid curve:")
    );
    assert!(
        ShortformError::unknown_theme("x")
            .to_string()
            .contains("unknown theme:")
    );
    assert!(
        ShortformError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShortformError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn collaborator_names_the_stage() {
    let err = ShortformError::collaborator("media muxer", "exit status 1");
    assert_eq!(err.to_string(), "media muxer failed: exit status 1");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShortformError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: ShortformError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ShortformError::Serde(_)));
}
