use parlance::domain::{InvalidRequest, TranslationRequest, language};

#[test]
fn given_blank_text_when_building_request_then_rejected() {
    assert_eq!(
        TranslationRequest::new("   ", "en", None),
        Err(InvalidRequest::EmptyText)
    );
}

#[test]
fn given_unknown_target_code_when_building_request_then_rejected() {
    assert_eq!(
        TranslationRequest::new("hello", "xx", None),
        Err(InvalidRequest::InvalidTargetLang("xx".to_string()))
    );
}

#[test]
fn given_unknown_source_code_when_building_request_then_rejected() {
    assert_eq!(
        TranslationRequest::new("hello", "en", Some("nope")),
        Err(InvalidRequest::InvalidSourceLang("nope".to_string()))
    );
}

#[test]
fn given_no_source_when_building_request_then_detection_is_needed() {
    let request = TranslationRequest::new("hello", "en", None).unwrap();
    assert!(request.needs_detection());
    assert!(request.resolve_explicit().is_none());
}

#[test]
fn given_auto_in_any_case_when_building_request_then_detection_is_needed() {
    let request = TranslationRequest::new("hello", "en", Some("AUTO")).unwrap();
    assert!(request.needs_detection());
}

#[test]
fn given_explicit_source_when_building_request_then_code_is_normalized() {
    let request = TranslationRequest::new("Hola", "EN", Some("ES")).unwrap();
    assert!(!request.needs_detection());
    assert_eq!(request.source_lang(), "es");
    assert_eq!(request.target_lang(), "en");

    let resolved = request.resolve_explicit().unwrap();
    assert_eq!(resolved.source_lang, "es");
}

#[test]
fn given_detected_language_when_resolving_then_request_copy_carries_it() {
    let request = TranslationRequest::new("Bonjour", "en", None).unwrap();

    let resolved = request.resolve_with("fr");

    assert_eq!(resolved.source_lang, "fr");
    assert_eq!(resolved.text, "Bonjour");
    assert_eq!(resolved.target_lang, "en");
    // The original request still carries the sentinel.
    assert!(request.needs_detection());
}

#[test]
fn normalize_accepts_iso_codes_and_region_subtags() {
    assert_eq!(language::normalize("en"), Some("en".to_string()));
    assert_eq!(language::normalize(" EN "), Some("en".to_string()));
    assert_eq!(language::normalize("spa"), Some("spa".to_string()));
    assert_eq!(language::normalize("pt-BR"), Some("pt".to_string()));
}

#[test]
fn normalize_rejects_unknown_codes_and_the_auto_sentinel() {
    assert_eq!(language::normalize("xx"), None);
    assert_eq!(language::normalize("auto"), None);
    assert_eq!(language::normalize(""), None);
}
