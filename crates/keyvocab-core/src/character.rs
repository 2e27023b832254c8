// Character classification used to decide whether a word is worth sending
// to a spell-checking oracle

/// Check whether a character belongs to the letter set accepted in words.
///
/// Uses the Unicode `Alphabetic` property, which covers letters of every
/// script plus the combining vowel signs of abugidas (Devanagari, Thai,
/// ...), so words in those scripts are not rejected halfway through.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether every character of `word` is a letter.
///
/// The empty word passes vacuously; callers reject empty input before
/// getting here.
pub fn is_letters_only(word: &str) -> bool {
    word.chars().all(is_letter)
}

/// Check whether `word` can be represented in plain ASCII.
pub fn is_ascii_encodable(word: &str) -> bool {
    word.is_ascii()
}

/// Number of characters (Unicode scalar values) in `word`.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
