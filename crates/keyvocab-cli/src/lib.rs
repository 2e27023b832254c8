// keyvocab-cli: shared utilities for CLI tools.

pub mod oracle;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use keyvocab_engine::builtin::BuiltinLanguage;
use keyvocab_engine::{
    DirectoryWordLists, NoWordLists, SuggestionQuery, Vocabulary, VocabularyOptions,
    VocabularyRegistry, WordFrequencyTable, WordListSource,
};
use tracing::debug;

use crate::oracle::DictionaryOracle;

/// Language used when no `-l` argument is given.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Environment variable naming the word-list directory.
pub const WORDS_PATH_ENV: &str = "KEYVOCAB_WORDS_PATH";

/// Parsed command line shared by every tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Directory holding `<language>.txt` word lists.
    pub words_dir: Option<String>,
    pub language: String,
    /// TOML file with `VocabularyOptions`.
    pub config: Option<String>,
    /// Positional words; empty means "read stdin".
    pub words: Vec<String>,
}

/// Parse `-d DIR`, `-l LANG` and `-c FILE` (plus their long `--x=VALUE`
/// forms). Everything not starting with `-` is a word.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        words_dir: None,
        language: DEFAULT_LANGUAGE.to_string(),
        config: None,
        words: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--words-dir=") {
            parsed.words_dir = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--language=") {
            parsed.language = val.to_string();
        } else if let Some(val) = arg.strip_prefix("--config=") {
            parsed.config = Some(val.to_string());
        } else if arg == "-d" || arg == "--words-dir" {
            parsed.words_dir = Some(value_for(arg, iter.next())?);
        } else if arg == "-l" || arg == "--language" {
            parsed.language = value_for(arg, iter.next())?;
        } else if arg == "-c" || arg == "--config" {
            parsed.config = Some(value_for(arg, iter.next())?);
        } else if arg == "-h" || arg == "--help" {
            continue;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option {arg}"));
        } else {
            parsed.words.push(arg.clone());
        }
    }

    Ok(parsed)
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Install a stderr subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Load options from `path`, or the defaults when no file is given.
pub fn load_options(path: Option<&str>) -> Result<VocabularyOptions, String> {
    let Some(path) = path else {
        return Ok(VocabularyOptions::default());
    };
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    VocabularyOptions::from_toml_str(&text).map_err(|e| format!("{path}: {e}"))
}

/// Pick the word-list directory.
///
/// Search order:
/// 1. `words_dir` argument (if provided)
/// 2. `KEYVOCAB_WORDS_PATH` environment variable
///
/// Without either, only the built-in languages have word lists.
pub fn words_dir(words_dir: Option<&str>) -> Option<PathBuf> {
    words_dir
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(WORDS_PATH_ENV).map(PathBuf::from))
}

/// Build a registry for the parsed arguments.
///
/// There is no platform spell checker on the command line, so the oracle is
/// a `DictionaryOracle` over the word list of `args.language`.
pub fn build_registry(args: &CliArgs) -> Result<VocabularyRegistry, String> {
    let options = load_options(args.config.as_deref())?;
    let dir = words_dir(args.words_dir.as_deref());
    debug!(words_dir = ?dir, language = %args.language, "building registry");
    let source: Box<dyn WordListSource> = match dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(format!("word-list directory {} not found", dir.display()));
            }
            Box::new(DirectoryWordLists::new(dir))
        }
        None => Box::new(NoWordLists),
    };
    let oracle = dictionary_oracle(&args.language, source.as_ref())?;
    Ok(VocabularyRegistry::with_source(
        Arc::new(oracle),
        source,
        options,
    ))
}

/// Spell checker for `language`: the built-in list for English and Russian,
/// otherwise whatever `source` has.
pub fn dictionary_oracle(
    language: &str,
    source: &dyn WordListSource,
) -> Result<DictionaryOracle, String> {
    let oracle = match BuiltinLanguage::for_tag(language) {
        Some(builtin) => DictionaryOracle::new(
            builtin.tag(),
            WordFrequencyTable::from_comma_separated(builtin.word_list()),
        ),
        None => {
            let list = source.word_list(language).map_err(|e| e.to_string())?;
            let words = list
                .as_deref()
                .map_or_else(WordFrequencyTable::new, WordFrequencyTable::from_comma_separated);
            DictionaryOracle::new(language, words)
        }
    };
    debug!(language, words = oracle.word_count(), "dictionary oracle ready");
    Ok(oracle)
}

/// Write `prefix:` and its completions, one per indented line.
pub fn write_completions(
    out: &mut impl Write,
    vocabulary: &Vocabulary,
    prefix: &str,
) -> io::Result<()> {
    let completions = vocabulary.complete(&SuggestionQuery::from_placement(prefix));
    if completions.is_empty() {
        return writeln!(out, "{prefix}: (no completions)");
    }
    writeln!(out, "{prefix}:")?;
    for completion in &completions {
        writeln!(out, "  {completion}")?;
    }
    Ok(())
}

/// Write `C: word` or `W: word`, plus `S:` lines for misspelled words when
/// `suggest` is set.
pub fn write_spelling(
    out: &mut impl Write,
    vocabulary: &Vocabulary,
    word: &str,
    suggest: bool,
) -> io::Result<()> {
    let query = SuggestionQuery::from_placement(word);
    if vocabulary.verify_spelling(&query) {
        return writeln!(out, "C: {word}");
    }
    writeln!(out, "W: {word}")?;
    if suggest {
        for suggestion in vocabulary.correct(&query) {
            writeln!(out, "S: {suggestion}")?;
        }
    }
    Ok(())
}

/// The words to process: positional arguments, or else stdin lines.
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
pub fn input_words(args: &CliArgs) -> io::Result<Vec<String>> {
    if !args.words.is_empty() {
        return Ok(args.words.clone());
    }
    let mut words = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
