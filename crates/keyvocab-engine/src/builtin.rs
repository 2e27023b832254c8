// Embedded word lists for the pre-bundled languages

use std::sync::Arc;

use keyvocab_core::language::two_letter_prefix;

use crate::options::VocabularyOptions;
use crate::oracle::SuggestionOracle;
use crate::vocabulary::Vocabulary;

/// English words, most frequent first.
pub const ENGLISH_WORDS: &str = include_str!("../data/en.txt");

/// Russian words, most frequent first.
pub const RUSSIAN_WORDS: &str = include_str!("../data/ru.txt");

/// A language with a word list compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinLanguage {
    English,
    Russian,
}

impl BuiltinLanguage {
    /// Match a lowercase two-letter prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "en" => Some(Self::English),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Match any tag by its two-letter prefix ("EN-us" is English).
    pub fn for_tag(tag: &str) -> Option<Self> {
        Self::from_prefix(&two_letter_prefix(tag)?)
    }

    /// Language tag the vocabulary reports and forwards to the oracle.
    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    pub fn word_list(self) -> &'static str {
        match self {
            Self::English => ENGLISH_WORDS,
            Self::Russian => RUSSIAN_WORDS,
        }
    }

    /// Build the vocabulary for this language.
    pub fn build(
        self,
        oracle: Arc<dyn SuggestionOracle>,
        options: VocabularyOptions,
    ) -> Vocabulary {
        Vocabulary::from_comma_separated(self.tag(), self.word_list(), oracle, options)
    }
}
