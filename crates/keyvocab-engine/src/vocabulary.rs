// Vocabulary: per-language completion, correction and spelling verdicts.
//
// A vocabulary owns one word frequency table and one oracle adapter. The
// table answers "which known words start with what was typed" and is
// authoritative for spelling; the oracle contributes free-form completions
// and is the only source of corrections.
//
// Scoring for completions:
// - a word from the table scores its rank (0, 1, 2, ...);
// - an oracle word scores its table rank when the table knows it, and
//   otherwise `base + char count`, which prefers shorter oracle words.
//   `base` is `oracle_only_base_score`, raised past the table's last rank
//   for lists longer than that, so every table word stays ahead.
//
// Oracle completions are appended even when they repeat a table candidate,
// so the same word can appear twice in the output.

use std::sync::Arc;

use keyvocab_core::case::{fold_key, is_all_caps_prefix, uppercase_all};
use keyvocab_core::character::char_len;
use keyvocab_core::{Rank, SuggestionQuery};
use tracing::{debug, debug_span};

use crate::options::VocabularyOptions;
use crate::oracle::{OracleAdapter, SuggestionOracle};
use crate::table::WordFrequencyTable;

/// A completion candidate with its sort score. Lower scores sort first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredCandidate {
    word: String,
    score: u32,
}

/// Suggestion engine for a single language.
///
/// Immutable after construction; share it across threads behind an `Arc`.
#[derive(Debug)]
pub struct Vocabulary {
    /// Language tag forwarded to the oracle.
    language: String,

    /// Known words and their ranks.
    table: WordFrequencyTable,

    /// Validated, fail-open access to the platform spell checker.
    oracle: OracleAdapter,

    /// Result limits and scoring constants.
    options: VocabularyOptions,

    /// Score floor for oracle-only completions; never below `table.rank_end()`.
    oracle_base: u32,
}

impl Vocabulary {
    /// Create a vocabulary from a prepared table.
    pub fn new(
        language: impl Into<String>,
        table: WordFrequencyTable,
        oracle: Arc<dyn SuggestionOracle>,
        options: VocabularyOptions,
    ) -> Self {
        let language = language.into();
        let oracle_base = options.oracle_only_base_score.max(table.rank_end());
        if oracle_base != options.oracle_only_base_score {
            debug!(
                language = %language,
                configured = options.oracle_only_base_score,
                oracle_base,
                "word list outgrows oracle_only_base_score, raising it"
            );
        }
        Self {
            language,
            table,
            oracle: OracleAdapter::new(oracle, options.short_word_limit),
            options,
            oracle_base,
        }
    }

    /// Create a vocabulary from a comma-delimited word list in rank order.
    pub fn from_comma_separated(
        language: impl Into<String>,
        list: &str,
        oracle: Arc<dyn SuggestionOracle>,
        options: VocabularyOptions,
    ) -> Self {
        Self::new(
            language,
            WordFrequencyTable::from_comma_separated(list),
            oracle,
            options,
        )
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Rank of `word` in this vocabulary's table, compared case-insensitively.
    pub fn rank(&self, word: &str) -> Option<Rank> {
        self.table.rank(&fold_key(word))
    }

    /// Number of distinct words in the table.
    pub fn word_count(&self) -> usize {
        self.table.len()
    }

    pub fn options(&self) -> &VocabularyOptions {
        &self.options
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Complete the word being typed.
    ///
    /// Returns at most `max_completions` words, best first. Table matches
    /// keep the user's own casing for the typed part and append the rest of
    /// the stored (lowercase) word, so "He" + "hello" gives "Hello". A word
    /// equal to the typed prefix is not a completion. When the prefix has
    /// more than one character and is entirely uppercase, every result is
    /// uppercased.
    pub fn complete(&self, query: &SuggestionQuery<'_>) -> Vec<String> {
        let prefix = query.placement;
        if prefix.is_empty() {
            return Vec::new();
        }

        let _span = debug_span!("complete", language = %self.language, caret = ?query.caret)
            .entered();

        let mut scored = self.table_completions(prefix);
        let table_hits = scored.len();

        let oracle_words = self.oracle.completions(prefix, &self.language);
        let oracle_hits = oracle_words.len();
        scored.extend(oracle_words.into_iter().map(|word| {
            let score = self.oracle_word_score(&word);
            ScoredCandidate { word, score }
        }));

        // Stable: on equal scores, table candidates stay ahead of oracle
        // words and oracle words keep the oracle's order.
        scored.sort_by_key(|candidate| candidate.score);
        scored.truncate(self.options.max_completions);

        let mut completions: Vec<String> = scored.into_iter().map(|c| c.word).collect();
        if is_all_caps_prefix(prefix) {
            uppercase_all(&mut completions);
        }

        debug!(table_hits, oracle_hits, returned = completions.len());
        completions
    }

    /// Suggest replacements for a possibly misspelled word.
    ///
    /// Corrections come from the oracle alone, in the oracle's order,
    /// truncated to `max_corrections`.
    pub fn correct(&self, query: &SuggestionQuery<'_>) -> Vec<String> {
        let placement = query.placement;
        if placement.is_empty() {
            return Vec::new();
        }

        let mut corrections = self.oracle.guesses(placement, &self.language);
        corrections.truncate(self.options.max_corrections);
        corrections
    }

    /// Check whether the typed word is spelled properly.
    ///
    /// An empty placement is vacuously correct. A word in the table is
    /// correct without consulting the oracle. Otherwise the oracle decides,
    /// and an oracle that rejects the word or fails does not flag it.
    pub fn verify_spelling(&self, query: &SuggestionQuery<'_>) -> bool {
        let placement = query.placement;
        if placement.is_empty() {
            return true;
        }
        if self.table.contains(&fold_key(placement)) {
            return true;
        }
        !self.oracle.is_misspelled(placement, &self.language)
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    /// Table words that extend `prefix`, spelled with the user's casing.
    fn table_completions(&self, prefix: &str) -> Vec<ScoredCandidate> {
        let lower_prefix = fold_key(prefix);
        self.table
            .iter()
            .filter_map(|(word, rank)| {
                let remainder = word.strip_prefix(lower_prefix.as_str())?;
                if remainder.is_empty() {
                    return None;
                }
                Some(ScoredCandidate {
                    word: format!("{prefix}{remainder}"),
                    score: rank,
                })
            })
            .collect()
    }

    fn oracle_word_score(&self, word: &str) -> u32 {
        if let Some(rank) = self.table.rank(&fold_key(word)) {
            return rank;
        }
        let len = u32::try_from(char_len(word)).unwrap_or(u32::MAX);
        self.oracle_base.saturating_add(len)
    }
}
