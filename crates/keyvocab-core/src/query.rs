// Suggestion query passed from the keyboard layer into a vocabulary

use std::ops::Range;

/// What the user is typing, as seen by the keyboard layer.
///
/// `placement` is the word currently being typed (or just finished). The
/// caller derives it from `context` and `caret`; the engine treats it as an
/// opaque string and only forwards `context` and `caret` for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionQuery<'a> {
    /// Text surrounding the caret.
    pub context: &'a str,
    /// Caret span within `context`, in characters.
    pub caret: (usize, usize),
    /// The word being typed.
    pub placement: &'a str,
}

impl<'a> SuggestionQuery<'a> {
    pub fn new(context: &'a str, caret: Range<usize>, placement: &'a str) -> Self {
        Self {
            context,
            caret: (caret.start, caret.end),
            placement,
        }
    }

    /// Build a query for a bare word with no surrounding document.
    ///
    /// The context is the word itself and the caret spans all of it.
    pub fn from_placement(placement: &'a str) -> Self {
        Self {
            context: placement,
            caret: (0, placement.chars().count()),
            placement,
        }
    }

    /// Caret span as a range.
    pub fn caret_range(&self) -> Range<usize> {
        self.caret.0..self.caret.1
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }
}
