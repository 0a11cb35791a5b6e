//! ## Pattern counting over DNA sequences
//!
//! Every algorithm in this module follows the same two-phase contract: a
//! pattern (or set of patterns) is *preprocessed* once into an immutable
//! artifact, and the artifact is then used to *search* any number of
//! sequences. A search returns the number of occurrences of the pattern,
//! **overlapping occurrences included**.
//!
//! The contract comes in three shapes:
//! * [`SingleMatcher`]: one exact pattern, implemented by [`Kmp`],
//!   [`BoyerMoore`], and [`ShiftOr`]
//! * [`MultiMatcher`]: a set of exact patterns counted in one pass, implemented
//!   by [`AhoCorasick`]
//! * [`GapMatcher`]: one pattern with up to `k` filler bytes between
//!   consecutive pattern bytes, implemented by [`GapDfa`] and [`GapRegex`]
//!
//! When the algorithm is only known at runtime, [`Algorithm`] acts as a
//! registry and produces a type-erased [`PatternData`].
//!
//! ## Examples
//!
//! ```
//! # use seqmatch::search::*;
//! let kmp = Kmp::preprocess(b"AA").unwrap();
//! assert_eq!(kmp.count_matches(b"AAAA"), 3);
//!
//! let ac = AhoCorasick::preprocess(&[b"AC", b"CG"]).unwrap();
//! assert_eq!(ac.count_matches(b"ACG"), vec![1, 1]);
//!
//! let gap = GapDfa::preprocess(b"AG", 1).unwrap();
//! assert_eq!(gap.count_matches(b"ATG"), 1);
//! ```

mod aho_corasick;
mod alphabet;
mod boyer_moore;
mod errors;
mod gap;
mod kmp;
mod registry;
mod shift_or;

pub use aho_corasick::*;
pub use alphabet::*;
pub use boyer_moore::*;
pub use errors::*;
pub use gap::*;
pub use kmp::*;
pub use registry::*;
pub use shift_or::*;

/// Exact matching of a single pattern.
pub trait SingleMatcher: Sized {
    /// The name the algorithm is reported and selected under.
    const NAME: &'static str;

    /// Builds the search artifact for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the pattern violates a constraint of the
    /// algorithm, e.g., it is empty or too long.
    fn preprocess(pattern: &[u8]) -> Result<Self, SearchError>;

    /// Counts every occurrence of the pattern in `sequence`, overlaps
    /// included.
    #[must_use]
    fn count_matches(&self, sequence: &[u8]) -> usize;
}

/// Exact matching of a set of patterns in one pass.
pub trait MultiMatcher: Sized {
    /// The name the algorithm is reported and selected under.
    const NAME: &'static str;

    /// Builds one search artifact for all of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if any pattern violates a constraint of the
    /// algorithm.
    fn preprocess<P: AsRef<[u8]>>(patterns: &[P]) -> Result<Self, SearchError>;

    /// The number of patterns the artifact was built from.
    #[must_use]
    fn pattern_count(&self) -> usize;

    /// Counts the occurrences of every pattern in `sequence`. The result has
    /// one entry per pattern, in the order the patterns were given.
    #[must_use]
    fn count_matches(&self, sequence: &[u8]) -> Vec<usize>;
}

/// Bounded-gap matching of a single pattern: consecutive pattern bytes may be
/// separated by up to `k` filler bytes.
pub trait GapMatcher: Sized {
    /// The name the algorithm is reported and selected under.
    const NAME: &'static str;

    /// Builds the search artifact for `pattern` with gap width `k`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the pattern is empty or uses symbols
    /// outside the alphabet.
    fn preprocess(pattern: &[u8], k: usize) -> Result<Self, SearchError>;

    /// Counts the start offsets in `sequence` at which the pattern matches.
    #[must_use]
    fn count_matches(&self, sequence: &[u8]) -> usize;
}

/// Converts a signed gap width into the unsigned width gap matchers take.
///
/// # Errors
///
/// Returns [`SearchError::NegativeGap`] when `k < 0`.
#[inline]
pub fn gap_width(k: i64) -> Result<usize, SearchError> {
    usize::try_from(k).map_err(|_| SearchError::NegativeGap(k))
}
