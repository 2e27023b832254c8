// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// keyvocab-ffi: C-compatible FFI layer for VocabularyRegistry.
//
// The keyboard host owns the real spell checker. It plugs that checker in
// as the oracle through `KvOracleCallbacks`, creates one registry, and
// resolves a vocabulary per input language.
//
// Memory management rules:
// - Opaque `VocabularyRegistry` pointer: created by `kv_registry_new`, freed by `kv_registry_free`.
// - Opaque `KvVocabulary` pointer: created by `kv_resolve`, freed by `kv_vocabulary_free`.
//   A vocabulary stays valid after its registry is freed.
// - Returned string arrays: caller must free with `kv_free_str_array`.
// - Returned error strings: caller must free with `kv_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr;
use std::sync::Arc;

use keyvocab_engine::{
    DirectoryWordLists, NoWordLists, NullOracle, OracleError, SuggestionOracle, SuggestionQuery,
    Vocabulary, VocabularyOptions, VocabularyRegistry, WordListSource,
};

// ── Oracle callbacks ────────────────────────────────────────────

/// Collects words produced by a list callback. Fill it with `kv_sink_push`.
#[derive(Debug, Default)]
pub struct KvStringSink {
    words: Vec<String>,
}

/// Produces a word list (completions or guesses) for `word` in `language`.
/// Push results into `sink` in best-first order and return 0, or return
/// non-zero on failure.
pub type KvListCallback = unsafe extern "C" fn(
    ctx: *mut c_void,
    word: *const c_char,
    language: *const c_char,
    sink: *mut KvStringSink,
) -> c_int;

/// Stores 1 in `*misspelled` when the checker finds a misspelled range in
/// `word`, 0 otherwise. Returns 0 on success, non-zero on failure.
pub type KvMisspelledCallback = unsafe extern "C" fn(
    ctx: *mut c_void,
    word: *const c_char,
    language: *const c_char,
    misspelled: *mut c_int,
) -> c_int;

/// The host's spell checker.
///
/// A NULL function pointer means the checker cannot answer that kind of
/// question. Callbacks may be invoked from any thread that calls into this
/// library, always with the same `ctx`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct KvOracleCallbacks {
    pub ctx: *mut c_void,
    pub completions: Option<KvListCallback>,
    pub guesses: Option<KvListCallback>,
    pub is_misspelled: Option<KvMisspelledCallback>,
}

/// Oracle backed by host callbacks.
struct CallbackOracle {
    callbacks: KvOracleCallbacks,
}

// SAFETY: the host promises that `ctx` and the callbacks may be used from
// any thread (see `kv_registry_new`).
unsafe impl Send for CallbackOracle {}
unsafe impl Sync for CallbackOracle {}

impl CallbackOracle {
    fn list(
        &self,
        callback: Option<KvListCallback>,
        word: &str,
        language: &str,
    ) -> Result<Vec<String>, OracleError> {
        let callback = callback.ok_or_else(|| OracleError::Unavailable(language.to_string()))?;
        let (word, language) = c_args(word, language)?;
        let mut sink = KvStringSink::default();
        let status = unsafe {
            callback(self.callbacks.ctx, word.as_ptr(), language.as_ptr(), &mut sink)
        };
        check_status(status)?;
        Ok(sink.words)
    }
}

impl SuggestionOracle for CallbackOracle {
    fn completions(&self, word: &str, language: &str) -> Result<Vec<String>, OracleError> {
        self.list(self.callbacks.completions, word, language)
    }

    fn guesses(&self, word: &str, language: &str) -> Result<Vec<String>, OracleError> {
        self.list(self.callbacks.guesses, word, language)
    }

    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError> {
        let callback = self
            .callbacks
            .is_misspelled
            .ok_or_else(|| OracleError::Unavailable(language.to_string()))?;
        let (word, language) = c_args(word, language)?;
        let mut misspelled: c_int = 0;
        let status = unsafe {
            callback(self.callbacks.ctx, word.as_ptr(), language.as_ptr(), &mut misspelled)
        };
        check_status(status)?;
        Ok(misspelled != 0)
    }
}

fn c_args(word: &str, language: &str) -> Result<(CString, CString), OracleError> {
    let word = CString::new(word).map_err(|e| OracleError::Failed(e.to_string()))?;
    let language = CString::new(language).map_err(|e| OracleError::Failed(e.to_string()))?;
    Ok((word, language))
}

fn check_status(status: c_int) -> Result<(), OracleError> {
    if status == 0 {
        Ok(())
    } else {
        Err(OracleError::Failed(format!("callback returned status {status}")))
    }
}

/// Append a word to a sink. Returns 0 on success, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_sink_push(sink: *mut KvStringSink, word: *const c_char) -> c_int {
    let Some(sink) = (unsafe { sink.as_mut() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    sink.words.push(word.to_string());
    0
}

// ── Registry lifecycle ──────────────────────────────────────────

/// Create a vocabulary registry.
///
/// - `callbacks`: the host spell checker (NULL for none). The struct is
///   copied; `ctx` must outlive the registry and every vocabulary it
///   resolved, and must be safe to use from any calling thread.
/// - `words_dir`: directory with `<language>.txt` word lists (NULL for none).
/// - `options_toml`: vocabulary options as TOML text (NULL for defaults).
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `kv_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_registry_new(
    callbacks: *const KvOracleCallbacks,
    words_dir: *const c_char,
    options_toml: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut VocabularyRegistry {
    let oracle: Arc<dyn SuggestionOracle> = match unsafe { callbacks.as_ref() } {
        Some(callbacks) => Arc::new(CallbackOracle {
            callbacks: *callbacks,
        }),
        None => Arc::new(NullOracle),
    };

    let source: Box<dyn WordListSource> = if words_dir.is_null() {
        Box::new(NoWordLists)
    } else {
        let Some(dir) = cstr_to_str(words_dir) else {
            set_error(error_out, "words_dir is not valid UTF-8");
            return ptr::null_mut();
        };
        Box::new(DirectoryWordLists::new(dir))
    };

    let options = if options_toml.is_null() {
        VocabularyOptions::default()
    } else {
        let Some(text) = cstr_to_str(options_toml) else {
            set_error(error_out, "options_toml is not valid UTF-8");
            return ptr::null_mut();
        };
        match VocabularyOptions::from_toml_str(text) {
            Ok(options) => options,
            Err(e) => {
                set_error(error_out, &e.to_string());
                return ptr::null_mut();
            }
        }
    };

    let registry = VocabularyRegistry::with_source(oracle, source, options);
    Box::into_raw(Box::new(registry))
}

/// Free a registry created by `kv_registry_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_registry_free(registry: *mut VocabularyRegistry) {
    if !registry.is_null() {
        drop(unsafe { Box::from_raw(registry) });
    }
}

// ── Vocabularies ────────────────────────────────────────────────

/// A resolved vocabulary, shared with the registry.
pub struct KvVocabulary(Arc<Vocabulary>);

/// Resolve a language tag.
///
/// Returns NULL when the language has no vocabulary; that is not an error.
/// Free the result with `kv_vocabulary_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_resolve(
    registry: *const VocabularyRegistry,
    language: *const c_char,
) -> *mut KvVocabulary {
    let Some(registry) = (unsafe { registry.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(language) = cstr_to_str(language) else {
        return ptr::null_mut();
    };
    match registry.resolve(language) {
        Some(vocabulary) => Box::into_raw(Box::new(KvVocabulary(vocabulary))),
        None => ptr::null_mut(),
    }
}

/// Free a vocabulary returned by `kv_resolve`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_vocabulary_free(vocabulary: *mut KvVocabulary) {
    if !vocabulary.is_null() {
        drop(unsafe { Box::from_raw(vocabulary) });
    }
}

// ── Suggestions ─────────────────────────────────────────────────

/// Complete the word being typed.
///
/// `context` is the surrounding text and `caret_start..caret_end` the
/// caret range in it; pass NULL context when there is none. `placement`
/// is the typed prefix.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `kv_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_complete(
    vocabulary: *const KvVocabulary,
    context: *const c_char,
    caret_start: usize,
    caret_end: usize,
    placement: *const c_char,
) -> *mut *mut c_char {
    with_query(vocabulary, context, caret_start, caret_end, placement, |v, q| {
        strings_to_c_array(&v.complete(q))
    })
    .unwrap_or(ptr::null_mut())
}

/// Suggest corrections for the typed word.
///
/// Arguments as for `kv_complete`. Returns a NULL-terminated array of C
/// strings. Caller must free with `kv_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_correct(
    vocabulary: *const KvVocabulary,
    context: *const c_char,
    caret_start: usize,
    caret_end: usize,
    placement: *const c_char,
) -> *mut *mut c_char {
    with_query(vocabulary, context, caret_start, caret_end, placement, |v, q| {
        strings_to_c_array(&v.correct(q))
    })
    .unwrap_or(ptr::null_mut())
}

/// Check whether the typed word is spelled properly.
/// Returns 1 for correct, 0 for misspelled, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_verify_spelling(
    vocabulary: *const KvVocabulary,
    context: *const c_char,
    caret_start: usize,
    caret_end: usize,
    placement: *const c_char,
) -> c_int {
    with_query(vocabulary, context, caret_start, caret_end, placement, |v, q| {
        if v.verify_spelling(q) { 1 } else { 0 }
    })
    .unwrap_or(-1)
}

// ── Memory ──────────────────────────────────────────────────────

/// Free a heap-allocated C string returned by kv functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kv_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn with_query<T>(
    vocabulary: *const KvVocabulary,
    context: *const c_char,
    caret_start: usize,
    caret_end: usize,
    placement: *const c_char,
    f: impl FnOnce(&Vocabulary, &SuggestionQuery<'_>) -> T,
) -> Option<T> {
    let vocabulary = unsafe { vocabulary.as_ref() }?;
    let placement = cstr_to_str(placement)?;
    let query = if context.is_null() {
        SuggestionQuery::from_placement(placement)
    } else {
        SuggestionQuery::new(cstr_to_str(context)?, caret_start..caret_end, placement)
    };
    Some(f(&vocabulary.0, &query))
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    // Boxed slice so the allocation size is exactly len, as the free side assumes.
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    let slice = ptr::slice_from_raw_parts_mut(arr, i + 1);
    drop(unsafe { Box::from_raw(slice) });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    /// Collect a NULL-terminated array and free it.
    unsafe fn take_array(arr: *mut *mut c_char) -> Vec<String> {
        assert!(!arr.is_null());
        let mut words = Vec::new();
        let mut i = 0;
        loop {
            let p = unsafe { *arr.add(i) };
            if p.is_null() {
                break;
            }
            words.push(unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string());
            i += 1;
        }
        unsafe { kv_free_str_array(arr) };
        words
    }

    unsafe extern "C" fn host_completions(
        _ctx: *mut c_void,
        _word: *const c_char,
        _language: *const c_char,
        sink: *mut KvStringSink,
    ) -> c_int {
        for word in [c"bonjour", c"bonsoir"] {
            unsafe { kv_sink_push(sink, word.as_ptr()) };
        }
        0
    }

    unsafe extern "C" fn host_guesses_fail(
        _ctx: *mut c_void,
        _word: *const c_char,
        _language: *const c_char,
        _sink: *mut KvStringSink,
    ) -> c_int {
        7
    }

    /// Flags every word and counts calls through `ctx`.
    unsafe extern "C" fn host_misspelled(
        ctx: *mut c_void,
        _word: *const c_char,
        _language: *const c_char,
        misspelled: *mut c_int,
    ) -> c_int {
        unsafe {
            *ctx.cast::<c_int>() += 1;
            *misspelled = 1;
        }
        0
    }

    fn registry(callbacks: Option<&KvOracleCallbacks>) -> *mut VocabularyRegistry {
        let callbacks = callbacks.map_or(ptr::null(), |cb| cb as *const KvOracleCallbacks);
        let registry = unsafe {
            kv_registry_new(callbacks, ptr::null(), ptr::null(), ptr::null_mut())
        };
        assert!(!registry.is_null());
        registry
    }

    #[test]
    fn complete_with_builtin_english() {
        let registry = registry(None);
        let vocabulary = unsafe { kv_resolve(registry, c("en-US").as_ptr()) };
        assert!(!vocabulary.is_null());

        let words = unsafe {
            take_array(kv_complete(vocabulary, ptr::null(), 0, 0, c("TH").as_ptr()))
        };
        assert_eq!(words.first().map(String::as_str), Some("THE"));

        unsafe {
            kv_vocabulary_free(vocabulary);
            kv_registry_free(registry);
        }
    }

    #[test]
    fn host_callbacks_act_as_oracle() {
        let mut calls: c_int = 0;
        let callbacks = KvOracleCallbacks {
            ctx: (&mut calls as *mut c_int).cast(),
            completions: Some(host_completions),
            guesses: Some(host_guesses_fail),
            is_misspelled: Some(host_misspelled),
        };
        let registry = registry(Some(&callbacks));
        let vocabulary = unsafe { kv_resolve(registry, c("fr").as_ptr()) };
        assert!(!vocabulary.is_null());

        let context = c("dis bon");
        let placement = c("bon");
        let words = unsafe {
            take_array(kv_complete(vocabulary, context.as_ptr(), 4, 7, placement.as_ptr()))
        };
        assert_eq!(words, ["bonjour", "bonsoir"]);

        // A failing callback yields an empty list, not an error.
        let words = unsafe {
            take_array(kv_correct(vocabulary, ptr::null(), 0, 0, c("bonjur").as_ptr()))
        };
        assert!(words.is_empty());

        let verdict = unsafe {
            kv_verify_spelling(vocabulary, ptr::null(), 0, 0, c("bonjur").as_ptr())
        };
        assert_eq!(verdict, 0);
        assert_eq!(calls, 1);

        unsafe {
            kv_vocabulary_free(vocabulary);
            kv_registry_free(registry);
        }
    }

    #[test]
    fn missing_callbacks_fail_open() {
        let callbacks = KvOracleCallbacks {
            ctx: ptr::null_mut(),
            completions: None,
            guesses: None,
            is_misspelled: None,
        };
        let oracle = CallbackOracle { callbacks };
        assert_eq!(
            oracle.completions("bon", "fr"),
            Err(OracleError::Unavailable("fr".to_string()))
        );
        assert!(matches!(oracle.guesses("bonjur", "fr"), Err(OracleError::Unavailable(_))));
        assert!(matches!(oracle.is_misspelled("bonjur", "fr"), Err(OracleError::Unavailable(_))));

        let registry = registry(Some(&callbacks));
        let vocabulary = unsafe { kv_resolve(registry, c("fr").as_ptr()) };
        let completions = unsafe {
            take_array(kv_complete(vocabulary, ptr::null(), 0, 0, c("bon").as_ptr()))
        };
        assert!(completions.is_empty());
        let corrections = unsafe {
            take_array(kv_correct(vocabulary, ptr::null(), 0, 0, c("bonjur").as_ptr()))
        };
        assert!(corrections.is_empty());
        let verdict = unsafe {
            kv_verify_spelling(vocabulary, ptr::null(), 0, 0, c("bonjur").as_ptr())
        };
        assert_eq!(verdict, 1);

        unsafe {
            kv_vocabulary_free(vocabulary);
            kv_registry_free(registry);
        }
    }

    #[test]
    fn vocabulary_outlives_registry() {
        let registry = registry(None);
        let vocabulary = unsafe { kv_resolve(registry, c("ru").as_ptr()) };
        unsafe { kv_registry_free(registry) };

        let verdict = unsafe {
            kv_verify_spelling(vocabulary, ptr::null(), 0, 0, c("мир").as_ptr())
        };
        assert_eq!(verdict, 1);
        unsafe { kv_vocabulary_free(vocabulary) };
    }

    #[test]
    fn short_tags_and_null_arguments() {
        let registry = registry(None);
        assert!(unsafe { kv_resolve(registry, c("e").as_ptr()) }.is_null());
        assert!(unsafe { kv_resolve(registry, ptr::null()) }.is_null());
        assert!(unsafe { kv_resolve(ptr::null(), c("en").as_ptr()) }.is_null());
        assert_eq!(
            unsafe { kv_verify_spelling(ptr::null(), ptr::null(), 0, 0, c("x").as_ptr()) },
            -1
        );
        assert_eq!(unsafe { kv_sink_push(ptr::null_mut(), c("x").as_ptr()) }, -1);
        unsafe { kv_registry_free(registry) };
    }

    #[test]
    fn invalid_options_are_reported() {
        let mut error: *mut c_char = ptr::null_mut();
        let registry = unsafe {
            kv_registry_new(
                ptr::null(),
                ptr::null(),
                c("max_completions = 0").as_ptr(),
                &mut error,
            )
        };
        assert!(registry.is_null());
        assert!(!error.is_null());
        let message = unsafe { CStr::from_ptr(error) }.to_str().unwrap().to_string();
        assert!(message.contains("max_completions"));
        unsafe { kv_free_str(error) };
    }

    #[test]
    fn empty_result_is_an_empty_array() {
        let registry = registry(None);
        let vocabulary = unsafe { kv_resolve(registry, c("de").as_ptr()) };
        let words = unsafe {
            take_array(kv_complete(vocabulary, ptr::null(), 0, 0, c("xyz").as_ptr()))
        };
        assert!(words.is_empty());
        unsafe {
            kv_vocabulary_free(vocabulary);
            kv_registry_free(registry);
        }
    }
}
