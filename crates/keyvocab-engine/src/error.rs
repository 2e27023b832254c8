// Construction-time errors
//
// Nothing on the keystroke path returns these: completion, correction and
// spell verification degrade to empty or neutral results instead.

use std::io;

/// Error type for building vocabularies and their configuration.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// A word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    /// The options TOML was malformed or held an unusable value.
    #[error("invalid vocabulary options: {0}")]
    InvalidOptions(String),

    /// The language tag cannot identify a vocabulary.
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),
}
