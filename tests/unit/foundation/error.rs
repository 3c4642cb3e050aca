use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SigError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SigError::font("x").to_string().contains("font error:"));
    assert!(SigError::render("x").to_string().contains("render error:"));
    assert!(
        SigError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SigError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
