// Tunable limits for vocabularies, loadable from TOML

use serde::Deserialize;

use crate::error::VocabularyError;

/// Embedded default options, kept in sync with `VocabularyOptions::default()`.
pub const DEFAULT_OPTIONS_TOML: &str = include_str!("default_options.toml");

/// Limits and scoring constants shared by every vocabulary of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyOptions {
    /// Maximum number of completions returned by `complete`.
    pub max_completions: usize,

    /// Maximum number of corrections returned by `correct`.
    pub max_corrections: usize,

    /// Score floor for oracle completions missing from the word list.
    ///
    /// Such a word scores `oracle_only_base_score + char count`. A vocabulary
    /// whose list has more positions than this raises its own floor to the
    /// list length, so dictionary words always sort first.
    pub oracle_only_base_score: u32,

    /// English words with at most this many characters are never sent to
    /// the oracle.
    pub short_word_limit: usize,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            max_completions: 10,
            max_corrections: 100,
            oracle_only_base_score: 100_000,
            short_word_limit: 2,
        }
    }
}

impl VocabularyOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, VocabularyError> {
        let options: Self =
            toml::from_str(toml_str).map_err(|e| VocabularyError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), VocabularyError> {
        if self.max_completions == 0 {
            return Err(VocabularyError::InvalidOptions(
                "max_completions must be at least 1".to_string(),
            ));
        }
        if self.max_corrections == 0 {
            return Err(VocabularyError::InvalidOptions(
                "max_corrections must be at least 1".to_string(),
            ));
        }
        if self.oracle_only_base_score == 0 {
            return Err(VocabularyError::InvalidOptions(
                "oracle_only_base_score must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the completion limit.
    pub fn with_max_completions(mut self, value: usize) -> Self {
        self.max_completions = value;
        self
    }

    /// Set the correction limit.
    pub fn with_max_corrections(mut self, value: usize) -> Self {
        self.max_corrections = value;
        self
    }
}
