#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Corpus import, export, and error handling.
pub mod data;
/// Running algorithms over a corpus and reporting the results.
pub mod run;
/// Exact, multi-pattern, and bounded-gap pattern matchers.
pub mod search;

/// Generate random sequences and patterns.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{AnswerTable, Corpus, err::OrFail};
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_patterns, rand_sequence, rand_sequences};
    pub use crate::run::{Report, RunConfig, run};
    pub use crate::search::{
        AhoCorasick, Algorithm, BoyerMoore, GapDfa, GapMatcher, GapRegex, Kmp, MultiMatcher, PatternData, ShiftOr,
        SingleMatcher,
    };
}
