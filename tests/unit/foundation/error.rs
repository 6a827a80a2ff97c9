use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChaseError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ChaseError::render("x").to_string().contains("render error:"));
    assert!(
        ChaseError::capture("x")
            .to_string()
            .contains("capture error:")
    );
    assert!(ChaseError::encode("x").to_string().contains("encode error:"));
    assert!(
        ChaseError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChaseError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
