// keyvocab-engine: ranks completion and correction candidates for a
// keyboard by merging a frequency-ranked word list with a platform spell
// checker.
//
// Layout:
//   - `table`: immutable word -> rank mapping built from a comma-delimited list
//   - `oracle`: the platform spell-checker interface and its validating adapter
//   - `vocabulary`: per-language merge/rank engine (complete, correct, verify)
//   - `registry`: language tag -> vocabulary cache with built-in fast paths
//   - `builtin`: embedded English and Russian word lists
//   - `source`: where word lists for other languages come from
//   - `options`: tunable limits, loadable from TOML

pub mod builtin;
pub mod error;
pub mod options;
pub mod oracle;
pub mod registry;
pub mod source;
pub mod table;
pub mod vocabulary;

pub use error::VocabularyError;
pub use keyvocab_core::SuggestionQuery;
pub use options::VocabularyOptions;
pub use oracle::{NullOracle, OracleAdapter, OracleError, SuggestionOracle};
pub use registry::{CacheLookup, VocabularyRegistry};
pub use source::{DirectoryWordLists, NoWordLists, WordListSource};
pub use table::WordFrequencyTable;
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod testutil;
