// Spell-checking oracle interface
//
// The oracle is the platform's own spell checker (a system text checker,
// hunspell, a host callback, ...). This crate never reimplements it; it
// only validates what is sent to it and merges what comes back.

pub mod adapter;

pub use adapter::OracleAdapter;

/// Failure reported by a single oracle call.
///
/// The adapter collapses every failure into an empty or neutral result, so
/// these never reach the keyboard layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The checker has no data for the requested language.
    #[error("no spell checker available for {0:?}")]
    Unavailable(String),

    /// The checker failed internally.
    #[error("spell checker failed: {0}")]
    Failed(String),
}

/// Trait for platform spell checkers.
///
/// Implementations must accept arbitrary UTF-8 words and language tags
/// without panicking. Calls are synchronous and expected to be fast; they
/// run on the keystroke path.
pub trait SuggestionOracle: Send + Sync {
    /// Completions for `word` read as a prefix, best first.
    fn completions(&self, word: &str, language: &str) -> Result<Vec<String>, OracleError>;

    /// "Did you mean" replacements for the whole of `word`, best first.
    fn guesses(&self, word: &str, language: &str) -> Result<Vec<String>, OracleError>;

    /// Whether the checker locates a misspelled region inside `word`.
    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError>;
}

/// An oracle with nothing to say: no completions, no guesses, and no
/// misspellings. Used when the host has no spell checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOracle;

impl SuggestionOracle for NullOracle {
    fn completions(&self, _word: &str, _language: &str) -> Result<Vec<String>, OracleError> {
        Ok(Vec::new())
    }

    fn guesses(&self, _word: &str, _language: &str) -> Result<Vec<String>, OracleError> {
        Ok(Vec::new())
    }

    fn is_misspelled(&self, _word: &str, _language: &str) -> Result<bool, OracleError> {
        Ok(false)
    }
}
