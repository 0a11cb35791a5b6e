//! ## Running an algorithm over a corpus.
//!
//! A run preprocesses every pattern once (or the whole pattern set once, for
//! multi-pattern algorithms), searches every sequence, and checks each count
//! against the corpus answers when they are present. Mismatches do not stop
//! the run; they are collected in the [`Report`] together with the elapsed
//! wall-clock time.
//!
//! ```
//! # use seqmatch::{data::Corpus, run::run, search::Algorithm};
//! let corpus = Corpus::new(vec![b"ACGTACGT".to_vec()], vec![b"ACGT".to_vec()], None).unwrap();
//! let report = run(Algorithm::BoyerMoore, &corpus, None).unwrap();
//! assert!(report.mismatches().is_empty());
//! assert!(report.to_string().starts_with("---\nlanguage: rust\nalgorithm: boyer_moore\n"));
//! ```

use crate::{
    data::{Corpus, err::CorpusError},
    search::{
        AhoCorasick, Algorithm, BoyerMoore, GapDfa, GapMatcher, GapRegex, Kmp, MultiMatcher, SearchError, ShiftOr,
        SingleMatcher,
    },
};
use std::{
    fmt,
    time::{Duration, Instant},
};

mod errors;

pub use errors::*;

/// The settings of one run, as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub sequences: String,
    pub patterns:  String,
    pub answers:   Option<String>,
    pub k:         Option<usize>,
}

impl RunConfig {
    /// Creates a configuration, checking that a gap width is given exactly
    /// when the algorithm is a gap algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::MissingGap`] or [`RunError::UnexpectedGap`].
    pub fn new(
        algorithm: Algorithm, sequences: String, patterns: String, answers: Option<String>, k: Option<usize>,
    ) -> Result<Self, RunError> {
        required_gap(algorithm, k)?;
        Ok(RunConfig {
            algorithm,
            sequences,
            patterns,
            answers,
            k,
        })
    }

    /// Loads the corpus named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Corpus`] if any file fails to load or the files are
    /// inconsistent.
    pub fn load(&self) -> Result<Corpus, RunError> {
        Ok(Corpus::from_files(
            &self.sequences,
            &self.patterns,
            self.answers.as_deref(),
            self.k,
        )?)
    }

    /// Loads the corpus and runs the configured algorithm over it.
    ///
    /// # Errors
    ///
    /// See [`RunConfig::load`] and [`run`].
    pub fn execute(&self) -> Result<Report, RunError> {
        let corpus = self.load()?;
        run(self.algorithm, &corpus, self.k)
    }
}

/// Checks the gap width against the algorithm and returns the width to use,
/// which is `0` for exact algorithms.
///
/// # Errors
///
/// Returns [`RunError::MissingGap`] for a gap algorithm without `k`, and
/// [`RunError::UnexpectedGap`] for an exact algorithm with one.
pub fn required_gap(algorithm: Algorithm, k: Option<usize>) -> Result<usize, RunError> {
    match (algorithm.is_gapped(), k) {
        (true, Some(k)) => Ok(k),
        (true, None) => Err(RunError::MissingGap(algorithm)),
        (false, Some(_)) => Err(RunError::UnexpectedGap(algorithm)),
        (false, None) => Ok(0),
    }
}

/// A count that disagrees with the answers. Indices are 0-based; the
/// [`Display`](fmt::Display) output is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub pattern:  usize,
    pub sequence: usize,
    pub computed: usize,
    pub expected: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Pattern {} mismatch against sequence {} ({} != {})",
            self.pattern + 1,
            self.sequence + 1,
            self.computed,
            self.expected
        )
    }
}

/// The outcome of a run.
///
/// Displays as the report block
///
/// ```text
/// ---
/// language: rust
/// algorithm: dfa_gap(5)
/// runtime: 0.01234567
/// ```
///
/// where the gap width is only shown for gap algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    algorithm:  &'static str,
    k:          Option<usize>,
    elapsed:    Duration,
    mismatches: Vec<Mismatch>,
}

impl Report {
    #[inline]
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    #[inline]
    #[must_use]
    pub fn k(&self) -> Option<usize> {
        self.k
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "language: rust")?;
        f.write_str("algorithm: ")?;
        f.write_str(self.algorithm)?;
        if let Some(k) = self.k {
            f.write_str("(")?;
            f.write_str(itoa::Buffer::new().format(k))?;
            f.write_str(")")?;
        }
        writeln!(f)?;
        writeln!(f, "runtime: {:.8}", self.elapsed.as_secs_f64())
    }
}

/// Compares counts against the corpus answers, if any.
struct Validator<'a> {
    corpus:     &'a Corpus,
    mismatches: Vec<Mismatch>,
}

impl<'a> Validator<'a> {
    fn new(corpus: &'a Corpus) -> Self {
        Validator {
            corpus,
            mismatches: Vec::new(),
        }
    }

    #[inline]
    fn check(&mut self, pattern: usize, sequence: usize, computed: usize) {
        if let Some(expected) = self.corpus.answers().and_then(|a| a.get(pattern, sequence))
            && expected != computed
        {
            self.mismatches.push(Mismatch {
                pattern,
                sequence,
                computed,
                expected,
            });
        }
    }

    fn finish(self, algorithm: &'static str, k: Option<usize>, start: Instant) -> Report {
        Report {
            algorithm,
            k,
            elapsed: start.elapsed(),
            mismatches: self.mismatches,
        }
    }
}

fn search_error(pattern: usize) -> impl FnOnce(SearchError) -> RunError {
    move |error| RunError::Search { pattern, error }
}

/// Runs an exact single-pattern matcher over every pattern and sequence.
///
/// # Errors
///
/// Returns [`RunError::Search`] for the first pattern that fails to
/// preprocess.
pub fn run_single<M: SingleMatcher>(corpus: &Corpus) -> Result<Report, RunError> {
    let mut validator = Validator::new(corpus);
    let start = Instant::now();

    for (i, pattern) in corpus.patterns().iter().enumerate() {
        let matcher = M::preprocess(pattern).map_err(search_error(i))?;
        for (j, sequence) in corpus.sequences().iter().enumerate() {
            validator.check(i, j, matcher.count_matches(sequence));
        }
    }

    Ok(validator.finish(M::NAME, None, start))
}

/// Runs a multi-pattern matcher, building one automaton for all patterns.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the pattern set fails to preprocess. The
/// reported pattern index is that of the first invalid pattern.
pub fn run_multi<M: MultiMatcher>(corpus: &Corpus) -> Result<Report, RunError> {
    let mut validator = Validator::new(corpus);
    let start = Instant::now();

    let matcher = M::preprocess(corpus.patterns()).map_err(|error| {
        let pattern = corpus
            .patterns()
            .iter()
            .position(|p| crate::search::validate_pattern(p).is_err())
            .unwrap_or(0);
        RunError::Search { pattern, error }
    })?;

    for (j, sequence) in corpus.sequences().iter().enumerate() {
        for (i, count) in matcher.count_matches(sequence).into_iter().enumerate() {
            validator.check(i, j, count);
        }
    }

    Ok(validator.finish(M::NAME, None, start))
}

/// Runs a bounded-gap matcher with gap width `k` over every pattern and
/// sequence.
///
/// # Errors
///
/// Returns [`RunError::Search`] for the first pattern that fails to
/// preprocess.
pub fn run_gap<M: GapMatcher>(corpus: &Corpus, k: usize) -> Result<Report, RunError> {
    let mut validator = Validator::new(corpus);
    let start = Instant::now();

    for (i, pattern) in corpus.patterns().iter().enumerate() {
        let matcher = M::preprocess(pattern, k).map_err(search_error(i))?;
        for (j, sequence) in corpus.sequences().iter().enumerate() {
            validator.check(i, j, matcher.count_matches(sequence));
        }
    }

    Ok(validator.finish(M::NAME, Some(k), start))
}

/// Runs `algorithm` over the corpus. Gap algorithms require `k`, exact ones
/// reject it, and answers recorded for a different `k` are refused.
///
/// # Errors
///
/// Returns a [`RunError`] if the gap width is missing, unexpected, or
/// inconsistent with the answers, or if a pattern fails to preprocess.
pub fn run(algorithm: Algorithm, corpus: &Corpus, k: Option<usize>) -> Result<Report, RunError> {
    let k = required_gap(algorithm, k)?;

    if algorithm.is_gapped()
        && let Some(found) = corpus.answers().and_then(|a| a.k())
        && found != k
    {
        return Err(CorpusError::GapMismatch { expected: k, found }.into());
    }

    match algorithm {
        Algorithm::Kmp => run_single::<Kmp>(corpus),
        Algorithm::BoyerMoore => run_single::<BoyerMoore>(corpus),
        Algorithm::ShiftOr => run_single::<ShiftOr>(corpus),
        Algorithm::AhoCorasick => run_multi::<AhoCorasick>(corpus),
        Algorithm::GapDfa => run_gap::<GapDfa>(corpus, k),
        Algorithm::GapRegex => run_gap::<GapRegex>(corpus, k),
    }
}
