use isolang::Language;

/// Sentinel a client sends to request source-language detection.
pub const AUTO_SOURCE: &str = "auto";

/// Normalize a client-supplied language code to a lowercase ISO 639 code.
///
/// Accepts 2-letter (ISO 639-1) and 3-letter (ISO 639-3) codes, with an
/// optional region subtag ("pt-BR"). Returns the lowercased primary subtag,
/// or `None` for anything that is not a registered code.
pub fn normalize(code: &str) -> Option<String> {
    let trimmed = code.trim().to_lowercase();
    let primary = trimmed.split(['-', '_']).next()?;

    let valid = match primary.len() {
        2 => Language::from_639_1(primary).is_some(),
        3 => Language::from_639_3(primary).is_some(),
        _ => false,
    };

    valid.then(|| primary.to_string())
}
