// Word-list spell checker standing in for the platform oracle on the command line

use keyvocab_core::case::fold_key;
use keyvocab_engine::{OracleError, SuggestionOracle, WordFrequencyTable};

/// Largest edit distance offered as a correction.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Oracle backed by one language's word list.
///
/// A word is misspelled when the list does not contain it. Guesses are list
/// words within `MAX_EDIT_DISTANCE` (Damerau-Levenshtein), closest first
/// and then by rank. Completions are left to the vocabulary, which already
/// scans the same kind of list.
///
/// Other languages, and an empty list, get `OracleError::Unavailable`.
#[derive(Debug, Clone)]
pub struct DictionaryOracle {
    language: String,
    words: WordFrequencyTable,
}

impl DictionaryOracle {
    pub fn new(language: impl Into<String>, words: WordFrequencyTable) -> Self {
        Self {
            language: language.into(),
            words,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn check_language(&self, language: &str) -> Result<(), OracleError> {
        if self.words.is_empty() || !language.eq_ignore_ascii_case(&self.language) {
            return Err(OracleError::Unavailable(language.to_string()));
        }
        Ok(())
    }
}

impl SuggestionOracle for DictionaryOracle {
    fn completions(&self, _word: &str, language: &str) -> Result<Vec<String>, OracleError> {
        self.check_language(language)?;
        Ok(Vec::new())
    }

    fn guesses(&self, word: &str, language: &str) -> Result<Vec<String>, OracleError> {
        self.check_language(language)?;
        let key = fold_key(word);
        let mut near: Vec<(usize, u32, &str)> = self
            .words
            .iter()
            .filter_map(|(candidate, rank)| {
                let distance = strsim::damerau_levenshtein(&key, candidate);
                (1..=MAX_EDIT_DISTANCE)
                    .contains(&distance)
                    .then_some((distance, rank, candidate))
            })
            .collect();
        near.sort_unstable_by_key(|&(distance, rank, _)| (distance, rank));
        Ok(near.into_iter().map(|(_, _, w)| w.to_string()).collect())
    }

    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError> {
        self.check_language(language)?;
        Ok(!self.words.contains(&fold_key(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> DictionaryOracle {
        DictionaryOracle::new(
            "en",
            WordFrequencyTable::from_comma_separated("the,their,there,then,them"),
        )
    }

    #[test]
    fn unknown_words_are_misspelled() {
        let oracle = oracle();
        assert_eq!(oracle.is_misspelled("qwxzzv", "en"), Ok(true));
        assert_eq!(oracle.is_misspelled("Their", "en"), Ok(false));
    }

    #[test]
    fn guesses_sort_by_distance_then_rank() {
        let guesses = oracle().guesses("thier", "en").unwrap();
        assert_eq!(guesses.first().map(String::as_str), Some("their"));
        // Distance 2, ranked by list position.
        assert_eq!(guesses[1..], ["the", "there", "then", "them"]);
    }

    #[test]
    fn nothing_close_yields_no_guesses() {
        assert!(oracle().guesses("qwxzzv", "en").unwrap().is_empty());
    }

    #[test]
    fn other_languages_are_unavailable() {
        assert!(matches!(
            oracle().is_misspelled("hello", "fr"),
            Err(OracleError::Unavailable(_))
        ));
        assert_eq!(oracle().is_misspelled("helo", "EN"), Ok(true));
    }

    #[test]
    fn empty_list_is_unavailable() {
        let oracle = DictionaryOracle::new("de", WordFrequencyTable::new());
        assert!(oracle.is_misspelled("hallo", "de").is_err());
    }
}
