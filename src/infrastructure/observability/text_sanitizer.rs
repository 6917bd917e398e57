const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes user-supplied text for safe logging: trims, flattens control
/// characters, truncates to a preview length.
pub fn sanitize_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let cleaned: String = trimmed
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let total = cleaned.chars().count();
    if total > MAX_VISIBLE_LENGTH {
        let preview: String = cleaned.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", preview, total)
    } else {
        cleaned
    }
}
