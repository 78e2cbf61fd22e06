use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QuizdashError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        QuizdashError::params("x")
            .to_string()
            .contains("params error:")
    );
    assert!(
        QuizdashError::session("x")
            .to_string()
            .contains("session error:")
    );
    assert!(
        QuizdashError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QuizdashError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
