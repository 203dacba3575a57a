use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GeomotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GeomotionError::solver("x").to_string().contains("solver error:"));
    assert!(
        GeomotionError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        GeomotionError::automaton("x")
            .to_string()
            .contains("automaton error:")
    );
    assert!(
        GeomotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GeomotionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
