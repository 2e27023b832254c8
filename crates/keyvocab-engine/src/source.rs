// Word-list sources for languages without a built-in vocabulary

use std::io;
use std::path::{Path, PathBuf};

use crate::error::VocabularyError;

/// Supplies the comma-delimited word list for a language tag.
///
/// - `Ok(Some(list))`: build the vocabulary from `list`.
/// - `Ok(None)`: no list exists; build the vocabulary with an empty table.
/// - `Err(_)`: the language has no usable vocabulary. The registry caches
///   that outcome and does not ask again.
pub trait WordListSource: Send + Sync {
    fn word_list(&self, language: &str) -> Result<Option<String>, VocabularyError>;
}

/// A source that never has a word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWordLists;

impl WordListSource for NoWordLists {
    fn word_list(&self, _language: &str) -> Result<Option<String>, VocabularyError> {
        Ok(None)
    }
}

/// Reads `<dir>/<language>.txt`.
///
/// A missing file means "no list" rather than an error. Tags containing
/// path separators or dots are refused so they cannot escape `dir`.
#[derive(Debug, Clone)]
pub struct DirectoryWordLists {
    dir: PathBuf,
}

impl DirectoryWordLists {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the list file for `language`.
    pub fn path_for(&self, language: &str) -> Result<PathBuf, VocabularyError> {
        let safe = !language.is_empty()
            && language
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(VocabularyError::UnsupportedLanguage(language.to_string()));
        }
        Ok(self.dir.join(format!("{language}.txt")))
    }
}

impl WordListSource for DirectoryWordLists {
    fn word_list(&self, language: &str) -> Result<Option<String>, VocabularyError> {
        let path = self.path_for(language)?;
        match std::fs::read_to_string(&path) {
            Ok(list) => Ok(Some(list)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
