// keyvocab-core: shared types and text helpers used across the keyvocab crates.

pub mod case;
pub mod character;
pub mod language;
pub mod query;

pub use query::SuggestionQuery;

/// Dictionary priority of a word. Lower values sort first.
pub type Rank = u32;
