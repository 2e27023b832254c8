// Language tag -> vocabulary cache
//
// English and Russian resolve to built-in vocabularies by their two-letter
// prefix, so "en", "en-US" and "EN_gb" share one instance. Every other tag
// is cached under its full spelling, including the outcome "no vocabulary".

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use hashbrown::HashMap;
use keyvocab_core::language::two_letter_prefix;
use tracing::{debug, debug_span, warn};

use crate::builtin::BuiltinLanguage;
use crate::options::VocabularyOptions;
use crate::oracle::SuggestionOracle;
use crate::source::{NoWordLists, WordListSource};
use crate::table::WordFrequencyTable;
use crate::vocabulary::Vocabulary;

/// A cache slot for a non-built-in tag.
#[derive(Debug, Clone)]
enum CachedVocabulary {
    /// Construction failed; the tag resolves to nothing from now on.
    Absent,
    Present(Arc<Vocabulary>),
}

impl CachedVocabulary {
    fn vocabulary(&self) -> Option<Arc<Vocabulary>> {
        match self {
            Self::Absent => None,
            Self::Present(vocabulary) => Some(Arc::clone(vocabulary)),
        }
    }
}

/// Cache state for a tag, as reported by [`VocabularyRegistry::lookup`].
#[derive(Debug, Clone)]
pub enum CacheLookup {
    NotCached,
    CachedAbsent,
    CachedPresent(Arc<Vocabulary>),
}

/// Resolves language tags to shared vocabularies.
///
/// Owned by the application and passed to whoever needs suggestions. All
/// methods take `&self`; the cache sits behind a mutex, so a registry can
/// be shared across threads in an `Arc`.
pub struct VocabularyRegistry {
    oracle: Arc<dyn SuggestionOracle>,
    source: Box<dyn WordListSource>,
    options: VocabularyOptions,
    english: OnceLock<Arc<Vocabulary>>,
    russian: OnceLock<Arc<Vocabulary>>,
    cache: Mutex<HashMap<String, CachedVocabulary>>,
}

impl VocabularyRegistry {
    /// Create a registry whose non-built-in vocabularies start empty.
    pub fn new(oracle: Arc<dyn SuggestionOracle>) -> Self {
        Self::with_source(oracle, Box::new(NoWordLists), VocabularyOptions::default())
    }

    /// Create a registry that asks `source` for non-built-in word lists.
    pub fn with_source(
        oracle: Arc<dyn SuggestionOracle>,
        source: Box<dyn WordListSource>,
        options: VocabularyOptions,
    ) -> Self {
        Self {
            oracle,
            source,
            options,
            english: OnceLock::new(),
            russian: OnceLock::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &VocabularyOptions {
        &self.options
    }

    /// Resolve `language` to its vocabulary.
    ///
    /// Returns `None` for tags shorter than two characters and for tags
    /// whose word list could not be read. A tag without a word list gets a
    /// vocabulary with an empty table, which still offers oracle
    /// suggestions.
    pub fn resolve(&self, language: &str) -> Option<Arc<Vocabulary>> {
        let prefix = two_letter_prefix(language)?;
        if let Some(builtin) = BuiltinLanguage::from_prefix(&prefix) {
            return Some(self.builtin(builtin));
        }

        let _span = debug_span!("resolve", language).entered();

        if let Some(cached) = self.lock_cache().get(language) {
            debug!("cache hit");
            return cached.vocabulary();
        }

        // Built without the lock so a slow word list does not stall other
        // tags. Racing misses may both build; the first insert wins.
        debug!("cache miss");
        let built = self.build(language);
        let mut cache = self.lock_cache();
        cache
            .entry(language.to_string())
            .or_insert(built)
            .vocabulary()
    }

    /// Report the cache state for `language` without building anything.
    ///
    /// Built-in tags are never cached and always report `NotCached`.
    pub fn lookup(&self, language: &str) -> CacheLookup {
        match self.lock_cache().get(language) {
            None => CacheLookup::NotCached,
            Some(CachedVocabulary::Absent) => CacheLookup::CachedAbsent,
            Some(CachedVocabulary::Present(vocabulary)) => {
                CacheLookup::CachedPresent(Arc::clone(vocabulary))
            }
        }
    }

    /// Number of cached non-built-in tags, absent ones included.
    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    fn builtin(&self, language: BuiltinLanguage) -> Arc<Vocabulary> {
        let cell = match language {
            BuiltinLanguage::English => &self.english,
            BuiltinLanguage::Russian => &self.russian,
        };
        let vocabulary = cell.get_or_init(|| {
            debug!(language = language.tag(), "building built-in vocabulary");
            Arc::new(language.build(Arc::clone(&self.oracle), self.options))
        });
        Arc::clone(vocabulary)
    }

    fn build(&self, language: &str) -> CachedVocabulary {
        let table = match self.source.word_list(language) {
            Ok(Some(list)) => WordFrequencyTable::from_comma_separated(&list),
            Ok(None) => WordFrequencyTable::new(),
            Err(e) => {
                warn!(language, error = %e, "no vocabulary for language");
                return CachedVocabulary::Absent;
            }
        };
        debug!(language, words = table.len(), "built vocabulary");
        CachedVocabulary::Present(Arc::new(Vocabulary::new(
            language,
            table,
            Arc::clone(&self.oracle),
            self.options,
        )))
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, CachedVocabulary>> {
        // The map is never left half-written, so a poisoned lock is still usable.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for VocabularyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyRegistry")
            .field("options", &self.options)
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}
