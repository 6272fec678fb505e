use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChorioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ChorioError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        ChorioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn conflict_names_the_existing_waypoint() {
    let err = ChorioError::conflict("Arabesque");
    assert_eq!(
        err.to_string(),
        "start time conflict with waypoint 'Arabesque'"
    );
    match err {
        ChorioError::Conflict { name } => assert_eq!(name, "Arabesque"),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChorioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
