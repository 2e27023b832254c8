// Test doubles shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::oracle::{OracleError, SuggestionOracle};

/// A scripted oracle that counts how often each method is called.
#[derive(Default)]
pub struct MockOracle {
    completions: Vec<String>,
    guesses: Vec<String>,
    misspelled: Vec<String>,
    fail: bool,
    completion_calls: AtomicUsize,
    guess_calls: AtomicUsize,
    misspelled_calls: AtomicUsize,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_completions(mut self, words: &[&str]) -> Self {
        self.completions = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn with_guesses(mut self, words: &[&str]) -> Self {
        self.guesses = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn with_misspelled(mut self, words: &[&str]) -> Self {
        self.misspelled = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn completion_calls(&self) -> usize {
        self.completion_calls.load(Ordering::SeqCst)
    }

    pub fn guess_calls(&self) -> usize {
        self.guess_calls.load(Ordering::SeqCst)
    }

    pub fn misspelled_calls(&self) -> usize {
        self.misspelled_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.completion_calls() + self.guess_calls() + self.misspelled_calls()
    }

    fn check_failure(&self) -> Result<(), OracleError> {
        if self.fail {
            Err(OracleError::Failed("scripted failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SuggestionOracle for MockOracle {
    fn completions(&self, _word: &str, _language: &str) -> Result<Vec<String>, OracleError> {
        self.completion_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.completions.clone())
    }

    fn guesses(&self, _word: &str, _language: &str) -> Result<Vec<String>, OracleError> {
        self.guess_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.guesses.clone())
    }

    fn is_misspelled(&self, word: &str, _language: &str) -> Result<bool, OracleError> {
        self.misspelled_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.misspelled.iter().any(|w| w == word))
    }
}
