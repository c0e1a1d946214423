use chargelink::error::ChargelinkError;

#[test]
fn constructors_map_to_variants() {
    assert!(matches!(
        ChargelinkError::config("c"),
        ChargelinkError::Config { .. }
    ));
    assert!(matches!(
        ChargelinkError::network("n"),
        ChargelinkError::Network { .. }
    ));
    assert!(matches!(
        ChargelinkError::api("a"),
        ChargelinkError::Api { .. }
    ));
    assert!(matches!(
        ChargelinkError::auth("a"),
        ChargelinkError::Auth { .. }
    ));
    assert!(matches!(
        ChargelinkError::io("i"),
        ChargelinkError::Io { .. }
    ));
    assert!(matches!(
        ChargelinkError::generic("g"),
        ChargelinkError::Generic { .. }
    ));
}

#[test]
fn conversions_preserve_messages() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let err: ChargelinkError = io.into();
    assert!(matches!(err, ChargelinkError::Io { .. }));
    assert!(err.message().contains("missing file"));

    let json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ChargelinkError = json.into();
    assert!(matches!(err, ChargelinkError::Serialization { .. }));
}

#[test]
fn display_includes_normalized_message() {
    let err = ChargelinkError::auth("token expired");
    assert_eq!(format!("{}", err), "Authentication error: token expired");
    assert_eq!(err.message(), "token expired");
}
