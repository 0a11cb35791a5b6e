//! ## Loading, checking, and writing experiment data.
//!
//! An experiment is described by up to three plain-text files, each starting
//! with a header line of whitespace-separated integers:
//!
//! - A *sequences* file, with header `<count> <max_length>` followed by
//!   exactly `count` sequences, one per line.
//! - A *patterns* file, in the same format.
//! - An optional *answers* file, with header `<rows> <columns>` (plus `<k>`
//!   for gap matching) followed by `rows` lines of `columns` comma-separated
//!   counts. Row `i`, column `j` is the number of matches of pattern `i` in
//!   sequence `j`.
//!
//! [`Corpus::from_files`] loads and cross-checks the files, and
//! [`AnswerTable`] can be computed with any algorithm and written back out in
//! the answers format:
//!
//! ```
//! # use seqmatch::{data::AnswerTable, search::Algorithm};
//! let table = AnswerTable::tabulate(Algorithm::Kmp, &["AC"], &["ACAC", "GG"], 0).unwrap();
//! assert_eq!(table.to_string(), "1 2\n2,0\n");
//! ```
//!
//! ## Errors
//!
//! Malformed or inconsistent files are reported as a [`CorpusError`], which
//! carries the name of the offending file. [`unwrap_or_fail`] and
//! [`unwrap_or_die`] turn these into a message and exit code in binaries.
//!
//! [`CorpusError`]: err::CorpusError
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;

mod corpus;

pub use corpus::*;
