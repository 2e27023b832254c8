// Word frequency table: immutable lowercase word -> rank mapping

use hashbrown::HashMap;
use keyvocab_core::Rank;
use keyvocab_core::case::fold_key;

/// Separator between words in a word list.
pub const WORD_SEPARATOR: char = ',';

/// An immutable mapping from a known word to its rank.
///
/// Ranks come from list position: the first word has rank 0, the next
/// rank 1, and so on. Lower ranks are preferred. Words are folded to
/// lowercase on insertion, and lookups expect lowercase keys.
///
/// A word listed twice keeps the rank of its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    ranks: HashMap<String, Rank>,
    /// One past the highest rank handed out, empty tokens included.
    rank_end: Rank,
}

impl WordFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a comma-delimited word list.
    ///
    /// Each token is trimmed of surrounding whitespace, so long lists can
    /// be wrapped across lines. Empty tokens are skipped but still use up
    /// their rank position. Commas cannot be escaped.
    pub fn from_comma_separated(list: &str) -> Self {
        Self::from_words(list.split(WORD_SEPARATOR).map(str::trim))
    }

    /// Build a table from words in rank order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        let mut rank_end: Rank = 0;
        for (rank, word) in (0..).zip(words) {
            rank_end = rank + 1;
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            ranks.insert(fold_key(word), rank);
        }
        Self { ranks, rank_end }
    }

    /// Rank of a lowercase word, or `None` if it is not in the table.
    pub fn rank(&self, word: &str) -> Option<Rank> {
        self.ranks.get(word).copied()
    }

    /// Smallest score that is worse than every rank in the table.
    pub fn rank_end(&self) -> Rank {
        self.rank_end
    }

    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate over `(word, rank)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rank)> + '_ {
        self.ranks.iter().map(|(word, &rank)| (word.as_str(), rank))
    }
}
