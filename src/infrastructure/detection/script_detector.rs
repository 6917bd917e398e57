use async_trait::async_trait;

use crate::application::ports::{DetectionError, LanguageDetector};

/// Heuristic detector classifying text by Unicode script ranges, with a small
/// stop-word vote to split the common Latin-script languages.
///
/// Fails only when the sample carries no letters at all; plain Latin text
/// with no stop-word hit is classified as English.
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageDetector for ScriptDetector {
    async fn detect(&self, text: &str) -> Result<String, DetectionError> {
        classify(text).ok_or_else(|| {
            DetectionError::Undetectable("no recognizable letters in sample".to_string())
        })
    }
}

fn classify(text: &str) -> Option<String> {
    if let Some(code) = classify_script(text) {
        return Some(code.to_string());
    }
    if !text.chars().any(|c| c.is_alphabetic()) {
        return None;
    }
    Some(classify_latin(text).to_string())
}

fn classify_script(text: &str) -> Option<&'static str> {
    let has = |pred: fn(&char) -> bool| text.chars().any(|c| pred(&c));

    // Kana before Han: Japanese text usually mixes both.
    if has(|c| ('\u{3040}'..='\u{309F}').contains(c) || ('\u{30A0}'..='\u{30FF}').contains(c)) {
        return Some("ja");
    }
    if has(|c| ('\u{4E00}'..='\u{9FFF}').contains(c) || ('\u{3400}'..='\u{4DBF}').contains(c)) {
        return Some("zh");
    }
    if has(|c| ('\u{AC00}'..='\u{D7AF}').contains(c)) {
        return Some("ko");
    }
    if has(|c| ('\u{0600}'..='\u{06FF}').contains(c) || ('\u{0750}'..='\u{077F}').contains(c)) {
        return Some("ar");
    }
    if has(|c| ('\u{0400}'..='\u{04FF}').contains(c)) {
        return Some("ru");
    }
    if has(|c| ('\u{0370}'..='\u{03FF}').contains(c)) {
        return Some("el");
    }
    if has(|c| ('\u{0590}'..='\u{05FF}').contains(c)) {
        return Some("he");
    }
    if has(|c| ('\u{0900}'..='\u{097F}').contains(c)) {
        return Some("hi");
    }
    if has(|c| ('\u{0E00}'..='\u{0E7F}').contains(c)) {
        return Some("th");
    }

    None
}

fn classify_latin(text: &str) -> &'static str {
    const HINTS: &[(&str, &[&str])] = &[
        (
            "es",
            &["el", "la", "los", "las", "es", "hola", "mundo", "gracias", "por", "una"],
        ),
        (
            "fr",
            &["le", "les", "est", "bonjour", "merci", "avec", "pour", "vous", "je", "une"],
        ),
        (
            "de",
            &["der", "die", "das", "und", "ist", "nicht", "ich", "hallo", "danke", "ein"],
        ),
        (
            "pt",
            &["os", "uma", "olá", "obrigado", "não", "você", "com", "para", "isso", "bom"],
        ),
        (
            "it",
            &["il", "gli", "ciao", "grazie", "che", "per", "sono", "questo", "con", "della"],
        ),
    ];

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic() && c != '\'')
        .filter(|w| !w.is_empty())
        .collect();

    let mut best = ("en", 0usize);
    for (code, hints) in HINTS {
        let score = words.iter().filter(|w| hints.contains(*w)).count();
        if score > best.1 {
            best = (code, score);
        }
    }

    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_cjk_scripts() {
        assert_eq!(classify("你好世界"), Some("zh".to_string()));
        assert_eq!(classify("こんにちは"), Some("ja".to_string()));
        assert_eq!(classify("안녕하세요"), Some("ko".to_string()));
    }

    #[test]
    fn classifies_cyrillic_and_arabic() {
        assert_eq!(classify("Привет мир"), Some("ru".to_string()));
        assert_eq!(classify("مرحبا بالعالم"), Some("ar".to_string()));
    }

    #[test]
    fn votes_latin_languages_by_stop_words() {
        assert_eq!(classify("Hola mundo"), Some("es".to_string()));
        assert_eq!(classify("Bonjour, merci pour tout"), Some("fr".to_string()));
        assert_eq!(classify("Hello world"), Some("en".to_string()));
    }

    #[test]
    fn rejects_text_without_letters() {
        assert_eq!(classify("12345 !!!"), None);
        assert_eq!(classify("   "), None);
    }
}
