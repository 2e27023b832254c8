// Language tag helpers

/// Lowercased first two characters of a language tag ("en-US" -> "en").
///
/// Returns `None` for tags shorter than two characters, which cannot
/// identify a language.
pub fn two_letter_prefix(tag: &str) -> Option<String> {
    let prefix: String = tag.chars().take(2).collect();
    if prefix.chars().count() < 2 {
        return None;
    }
    Some(prefix.to_lowercase())
}

/// Check whether a tag names English ("en", "EN", "en_GB", ...).
pub fn is_english(tag: &str) -> bool {
    two_letter_prefix(tag).as_deref() == Some("en")
}
