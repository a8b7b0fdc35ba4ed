use spellcheck::core::config::{AppConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BEDROCK_REGION};
use spellcheck::core::profile::{
    BLOCKS_MODEL_ID, CorrectorProfile, CorrectorVariant, ERRORS_MODEL_ID, MAX_TOKENS,
    PLAIN_MODEL_ID, ResponseShape,
};
use spellcheck::errors::CorrectorError;

#[test]
fn test_variant_parsing() {
    assert_eq!("plain".parse::<CorrectorVariant>().unwrap(), CorrectorVariant::Plain);
    assert_eq!(" Blocks ".parse::<CorrectorVariant>().unwrap(), CorrectorVariant::Blocks);
    assert_eq!("ERRORS".parse::<CorrectorVariant>().unwrap(), CorrectorVariant::Errors);

    let err = "haiku".parse::<CorrectorVariant>().unwrap_err();
    assert!(matches!(err, CorrectorError::ConfigError(ref m) if m.contains("haiku")));
}

#[test]
fn test_variant_display_round_trips_through_from_str() {
    for variant in [
        CorrectorVariant::Plain,
        CorrectorVariant::Blocks,
        CorrectorVariant::Errors,
    ] {
        assert_eq!(variant.to_string().parse::<CorrectorVariant>().unwrap(), variant);
    }
}

#[test]
fn test_plain_profile() {
    let profile = CorrectorProfile::for_variant(CorrectorVariant::Plain, "https://a.example");

    assert_eq!(profile.model_id, PLAIN_MODEL_ID);
    assert_eq!(profile.response_shape, ResponseShape::PlainText);
    assert_eq!(profile.decoding.max_tokens, MAX_TOKENS);
    assert_eq!(profile.decoding.top_p, Some(0.8));
    assert_eq!(profile.decoding.top_k, Some(50));
    assert!(profile.cors.is_none());
}

#[test]
fn test_structured_profiles_enable_cors() {
    for (variant, model_id) in [
        (CorrectorVariant::Blocks, BLOCKS_MODEL_ID),
        (CorrectorVariant::Errors, ERRORS_MODEL_ID),
    ] {
        let profile = CorrectorProfile::for_variant(variant, "https://a.example");
        assert_eq!(profile.model_id, model_id);
        assert_eq!(profile.response_shape, ResponseShape::StructuredJson);
        assert!((0.1..=0.2).contains(&profile.decoding.temperature));

        let cors = profile.cors.expect("structured variants emit CORS headers");
        assert_eq!(cors.allow_origin, "https://a.example");
        assert_eq!(cors.allow_methods, "POST, OPTIONS");
        assert_eq!(cors.allow_headers, "Content-Type");
    }
}

#[test]
fn test_profile_from_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.bedrock_region, DEFAULT_BEDROCK_REGION);

    let profile = CorrectorProfile::from_config(&config);
    assert_eq!(profile.variant, CorrectorVariant::Plain);
    assert_eq!(profile.model_id, PLAIN_MODEL_ID);
}

#[test]
fn test_profile_from_config_applies_overrides() {
    let config = AppConfig {
        variant: CorrectorVariant::Errors,
        model_id: Some("mistral.mixtral-8x7b-instruct-v0:1".to_string()),
        ..AppConfig::default()
    };

    let profile = CorrectorProfile::from_config(&config);
    assert_eq!(profile.model_id, "mistral.mixtral-8x7b-instruct-v0:1");
    assert_eq!(
        profile.cors.unwrap().allow_origin,
        DEFAULT_ALLOWED_ORIGIN
    );
}

#[test]
fn test_profile_model_matches_variant_default() {
    for variant in [
        CorrectorVariant::Plain,
        CorrectorVariant::Blocks,
        CorrectorVariant::Errors,
    ] {
        let profile = CorrectorProfile::for_variant(variant, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(profile.model_id, variant.default_model_id());
    }
}
