use super::{AhoCorasick, BoyerMoore, GapDfa, GapMatcher, GapRegex, Kmp, MultiMatcher, SearchError, ShiftOr, SingleMatcher};
use std::{fmt, str::FromStr};

/// The algorithms that can be selected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    ShiftOr,
    AhoCorasick,
    GapDfa,
    GapRegex,
}

impl Algorithm {
    /// Every registered algorithm, exact ones first.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::ShiftOr,
        Algorithm::AhoCorasick,
        Algorithm::GapDfa,
        Algorithm::GapRegex,
    ];

    /// The name the algorithm is selected and reported under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Kmp => Kmp::NAME,
            Algorithm::BoyerMoore => BoyerMoore::NAME,
            Algorithm::ShiftOr => ShiftOr::NAME,
            Algorithm::AhoCorasick => AhoCorasick::NAME,
            Algorithm::GapDfa => GapDfa::NAME,
            Algorithm::GapRegex => GapRegex::NAME,
        }
    }

    /// Whether the algorithm performs bounded-gap matching and therefore
    /// needs a gap width.
    #[must_use]
    pub const fn is_gapped(self) -> bool {
        matches!(self, Algorithm::GapDfa | Algorithm::GapRegex)
    }

    /// Whether the algorithm preprocesses all patterns into one artifact.
    #[must_use]
    pub const fn is_multi_pattern(self) -> bool {
        matches!(self, Algorithm::AhoCorasick)
    }

    /// Preprocesses a single pattern. Gap algorithms use `k`, exact ones
    /// ignore it. [`Algorithm::AhoCorasick`] builds a one-pattern automaton.
    ///
    /// # Errors
    ///
    /// Returns the algorithm's [`SearchError`] when the pattern violates one
    /// of its constraints.
    pub fn preprocess(self, pattern: &[u8], k: usize) -> Result<PatternData, SearchError> {
        Ok(match self {
            Algorithm::Kmp => Kmp::preprocess(pattern)?.into(),
            Algorithm::BoyerMoore => BoyerMoore::preprocess(pattern)?.into(),
            Algorithm::ShiftOr => ShiftOr::preprocess(pattern)?.into(),
            Algorithm::AhoCorasick => AhoCorasick::preprocess(&[pattern])?.into(),
            Algorithm::GapDfa => GapDfa::preprocess(pattern, k)?.into(),
            Algorithm::GapRegex => GapRegex::preprocess(pattern, k)?.into(),
        })
    }

    /// Preprocesses a set of patterns: one artifact for the whole set when
    /// the algorithm is multi-pattern, otherwise one per pattern.
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchError`] encountered.
    pub fn preprocess_set<P: AsRef<[u8]>>(self, patterns: &[P], k: usize) -> Result<Vec<PatternData>, SearchError> {
        if self.is_multi_pattern() {
            Ok(vec![AhoCorasick::preprocess(patterns)?.into()])
        } else {
            patterns.iter().map(|p| self.preprocess(p.as_ref(), k)).collect()
        }
    }
}

impl fmt::Display for Algorithm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error for an algorithm name that is not registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown algorithm '{}'; expected one of:", self.0)?;
        for algorithm in Algorithm::ALL {
            write!(f, " {algorithm}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl crate::data::err::GetCode for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// A preprocessed artifact from any registered algorithm. It is immutable and
/// can be searched against any number of sequences.
#[derive(Clone, Debug)]
pub enum PatternData {
    Kmp(Kmp),
    BoyerMoore(BoyerMoore),
    ShiftOr(ShiftOr),
    AhoCorasick(AhoCorasick),
    GapDfa(GapDfa),
    GapRegex(GapRegex),
}

/// The result of searching a [`PatternData`]: a single count, or one count
/// per pattern for a multi-pattern artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchCounts {
    Single(usize),
    PerPattern(Vec<usize>),
}

impl MatchCounts {
    /// The counts as a slice, one entry per pattern.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        match self {
            MatchCounts::Single(count) => std::slice::from_ref(count),
            MatchCounts::PerPattern(counts) => counts,
        }
    }
}

impl PatternData {
    /// The algorithm that produced this artifact.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            PatternData::Kmp(_) => Algorithm::Kmp,
            PatternData::BoyerMoore(_) => Algorithm::BoyerMoore,
            PatternData::ShiftOr(_) => Algorithm::ShiftOr,
            PatternData::AhoCorasick(_) => Algorithm::AhoCorasick,
            PatternData::GapDfa(_) => Algorithm::GapDfa,
            PatternData::GapRegex(_) => Algorithm::GapRegex,
        }
    }

    /// Counts the occurrences of the preprocessed pattern(s) in `sequence`.
    #[must_use]
    pub fn count_matches(&self, sequence: &[u8]) -> MatchCounts {
        match self {
            PatternData::Kmp(m) => MatchCounts::Single(m.count_matches(sequence)),
            PatternData::BoyerMoore(m) => MatchCounts::Single(m.count_matches(sequence)),
            PatternData::ShiftOr(m) => MatchCounts::Single(m.count_matches(sequence)),
            PatternData::AhoCorasick(m) => MatchCounts::PerPattern(m.count_matches(sequence)),
            PatternData::GapDfa(m) => MatchCounts::Single(m.count_matches(sequence)),
            PatternData::GapRegex(m) => MatchCounts::Single(m.count_matches(sequence)),
        }
    }
}

macro_rules! impl_from_artifact {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for PatternData {
                #[inline]
                fn from(artifact: $variant) -> Self {
                    PatternData::$variant(artifact)
                }
            }
        )+
    };
}

impl_from_artifact!(Kmp, BoyerMoore, ShiftOr, AhoCorasick, GapDfa, GapRegex);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "bitap".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bitap".to_owned()))
        );
    }

    #[test]
    fn dispatch() {
        for algorithm in Algorithm::ALL {
            let data = algorithm.preprocess(b"AA", 0).unwrap();
            assert_eq!(data.algorithm(), algorithm);
            assert_eq!(data.count_matches(b"AAAA").as_slice(), &[3]);
        }
    }

    #[test]
    fn pattern_sets() {
        let patterns = [b"AC", b"CG"];
        let data = Algorithm::AhoCorasick.preprocess_set(&patterns, 0).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].count_matches(b"ACG"), MatchCounts::PerPattern(vec![1, 1]));

        let data = Algorithm::Kmp.preprocess_set(&patterns, 0).unwrap();
        assert_eq!(data.len(), 2);

        let too_long = [vec![b'C'; 65]];
        assert!(Algorithm::ShiftOr.preprocess_set(&too_long, 0).is_err());
    }
}
