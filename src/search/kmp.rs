use super::{SearchError, SingleMatcher, validate_pattern};

/// Knuth-Morris-Pratt search artifact: a copy of the pattern and its
/// failure table.
///
/// The table has `m + 1` entries so that, after a full match, the scan can
/// resume from `next_table[m]` and still find overlapping occurrences.
///
/// ### Citation
///
/// 1. Christian Charras and Thierry Lecroq (2004). "Handbook of Exact
///    String-Matching Algorithms", chapter 7.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kmp {
    pattern:    Vec<u8>,
    next_table: Vec<isize>,
}

impl Kmp {
    /// The failure table, including the entry at index `m`.
    #[inline]
    #[must_use]
    pub fn next_table(&self) -> &[isize] {
        &self.next_table
    }
}

/// Builds the (optimized) failure table for `pattern`. `next_table[0]` is
/// `-1`, and an entry is replaced by its own fallback whenever the byte at
/// that position equals the byte it would fall back to.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
#[must_use]
pub(crate) fn kmp_next_table(pattern: &[u8]) -> Vec<isize> {
    let m = pattern.len();
    let mut next_table = vec![0isize; m + 1];
    let mut j: isize = -1;
    next_table[0] = -1;

    let mut i = 0;
    while i < m {
        while j > -1 && pattern[i] != pattern[j as usize] {
            j = next_table[j as usize];
        }
        i += 1;
        j += 1;

        next_table[i] = if i < m && pattern[i] == pattern[j as usize] {
            next_table[j as usize]
        } else {
            j
        };
    }

    next_table
}

impl SingleMatcher for Kmp {
    const NAME: &'static str = "kmp";

    fn preprocess(pattern: &[u8]) -> Result<Self, SearchError> {
        validate_pattern(pattern)?;

        Ok(Kmp {
            pattern:    pattern.to_vec(),
            next_table: kmp_next_table(pattern),
        })
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn count_matches(&self, sequence: &[u8]) -> usize {
        let m = self.pattern.len() as isize;
        let mut matches = 0;
        let mut i: isize = 0;

        for &b in sequence {
            while i > -1 && self.pattern[i as usize] != b {
                i = self.next_table[i as usize];
            }
            i += 1;

            if i >= m {
                matches += 1;
                i = self.next_table[i as usize];
            }
        }

        matches
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn failure_tables() {
        assert_eq!(kmp_next_table(b"ACGT"), vec![-1, 0, 0, 0, 0]);
        assert_eq!(kmp_next_table(b"AA"), vec![-1, -1, 1]);
        assert_eq!(kmp_next_table(b"ACAC"), vec![-1, 0, -1, 0, 2]);
        assert_eq!(kmp_next_table(b"GCAGAGAG"), vec![-1, 0, 0, -1, 1, -1, 1, -1, 1]);
    }

    #[test]
    fn counts() {
        static DATA: [(&[u8], &[u8], usize); 8] = [
            (b"ACGT", b"ACGTACGT", 2),
            (b"AA", b"AAAA", 3),
            (b"ACA", b"ACACACA", 3),
            (b"ACGT", b"ACGT", 1),
            (b"ACGTA", b"ACGT", 0),
            (b"T", b"TTGT", 3),
            (b"GG", b"", 0),
            (b"GAGA", b"GAGAGAGTGAGA", 3),
        ];

        for (pattern, sequence, expected) in DATA {
            let kmp = Kmp::preprocess(pattern).unwrap();
            assert_eq!(
                kmp.count_matches(sequence),
                expected,
                "pattern: {}, sequence: {}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(sequence)
            );
        }
    }

    #[test]
    fn non_ascii_sequence() {
        let kmp = Kmp::preprocess(b"AC").unwrap();
        assert_eq!(kmp.count_matches(b"A\xFFAC\x80"), 1);
    }

    #[test]
    fn empty_pattern() {
        assert_eq!(Kmp::preprocess(b""), Err(SearchError::EmptyPattern));
    }
}
