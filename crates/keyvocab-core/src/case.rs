// Case folding and all-caps detection for typed prefixes

/// Fold a word into the form used as a dictionary key.
///
/// Keys are always stored and looked up in lowercase. Folding uses the
/// full Unicode lowercase mapping, so the result may differ in byte length
/// from the input.
pub fn fold_key(word: &str) -> String {
    word.to_lowercase()
}

/// Check whether a typed prefix should be treated as "caps lock on".
///
/// A prefix counts as all-caps when it has more than one character and is
/// unchanged by uppercasing. A single capital letter ("H") is the start of
/// an ordinary capitalized word, not a shouted one, so it never qualifies.
///
/// Non-letters are unchanged by uppercasing, so a prefix like "A1" is
/// all-caps while "a1" is not.
pub fn is_all_caps_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    if chars.next().is_none() || chars.next().is_none() {
        return false;
    }
    prefix == prefix.to_uppercase()
}

/// Uppercase every candidate in place.
pub fn uppercase_all(words: &mut [String]) {
    for word in words.iter_mut() {
        *word = word.to_uppercase();
    }
}
