use std::error::Error;
use spellcheck::errors::CorrectorError;

#[test]
fn test_corrector_error_implements_error_trait() {
    // Verify CorrectorError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = CorrectorError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_corrector_error_display() {
    let error = CorrectorError::ModelError("AccessDeniedException".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to invoke Bedrock model: AccessDeniedException"
    );

    let error = CorrectorError::ExtractionError("no JSON object".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to extract model output: no JSON object"
    );

    let error = CorrectorError::ConfigError("bad variant".to_string());
    assert_eq!(format!("{error}"), "Invalid configuration: bad variant");
}

#[test]
fn test_corrector_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        CorrectorError::from(json_err),
        CorrectorError::ParseError(_)
    ));

    let bytes = [0xffu8, 0xfe];
    let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
    assert!(matches!(
        CorrectorError::from(utf8_err),
        CorrectorError::ExtractionError(_)
    ));
}

#[test]
fn test_corrector_error_converts_into_anyhow() {
    let err: anyhow::Error = CorrectorError::ConfigError("CODE_KEY".to_string()).into();
    assert!(err.to_string().contains("CODE_KEY"));
}
