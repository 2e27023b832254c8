// Validating, fail-open wrapper around a SuggestionOracle

use std::sync::Arc;

use keyvocab_core::character::{char_len, is_ascii_encodable, is_letters_only};
use keyvocab_core::language::is_english;
use tracing::{debug, warn};

use crate::oracle::{OracleError, SuggestionOracle};

/// Wraps a `SuggestionOracle` with input validation and a fail-open error
/// policy.
///
/// Every call first checks `is_valid_word`. Rejected words get an empty
/// or neutral answer without reaching the oracle. Oracle failures are
/// logged and also collapse to the empty or neutral answer, so a broken
/// checker can cost suggestions but never a keystroke.
#[derive(Clone)]
pub struct OracleAdapter {
    oracle: Arc<dyn SuggestionOracle>,
    short_word_limit: usize,
}

impl OracleAdapter {
    /// Create an adapter. English words of at most `short_word_limit`
    /// characters are never sent to the oracle.
    pub fn new(oracle: Arc<dyn SuggestionOracle>, short_word_limit: usize) -> Self {
        Self {
            oracle,
            short_word_limit,
        }
    }

    /// Decide whether `word` is worth sending to the oracle.
    ///
    /// - Words containing anything other than letters are rejected.
    /// - For English, words of at most `short_word_limit` characters are
    ///   rejected; the checker is noisy on such fragments.
    /// - For English, words that are not plain ASCII are rejected.
    ///
    /// Every other language accepts any all-letter word.
    pub fn is_valid_word(&self, word: &str, language: &str) -> bool {
        if !is_letters_only(word) {
            return false;
        }
        if !is_english(language) {
            return true;
        }
        if char_len(word) <= self.short_word_limit {
            return false;
        }
        is_ascii_encodable(word)
    }

    /// Oracle completions for `word` as a prefix, or nothing.
    pub fn completions(&self, word: &str, language: &str) -> Vec<String> {
        if !self.is_valid_word(word, language) {
            debug!(word, language, "completions: word rejected");
            return Vec::new();
        }
        settle(self.oracle.completions(word, language), "completions")
    }

    /// Oracle corrections for `word`, or nothing.
    pub fn guesses(&self, word: &str, language: &str) -> Vec<String> {
        if !self.is_valid_word(word, language) {
            debug!(word, language, "guesses: word rejected");
            return Vec::new();
        }
        settle(self.oracle.guesses(word, language), "guesses")
    }

    /// Whether the oracle flags `word` as misspelled.
    ///
    /// Rejected words and oracle failures count as not misspelled.
    pub fn is_misspelled(&self, word: &str, language: &str) -> bool {
        if !self.is_valid_word(word, language) {
            debug!(word, language, "is_misspelled: word rejected");
            return false;
        }
        settle(self.oracle.is_misspelled(word, language), "is_misspelled")
    }
}

impl std::fmt::Debug for OracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleAdapter")
            .field("short_word_limit", &self.short_word_limit)
            .finish_non_exhaustive()
    }
}

/// Collapse an oracle result to its value, or the type's default on error.
fn settle<T: Default>(result: Result<T, OracleError>, call: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(call, error = %e, "oracle call failed, continuing without it");
            T::default()
        }
    }
}
