use super::{ALPHABET_SIZE, SearchError, SingleMatcher, symbol, validate_pattern};
use std::cmp::max;

/// Boyer-Moore search artifact: the bad-character and strong good-suffix
/// shift tables.
///
/// After a full match the window advances by `good_suffix[0]` (the period of
/// the pattern) rather than by `m`, so overlapping occurrences are counted.
///
/// ### Citation
///
/// 1. Christian Charras and Thierry Lecroq (2004). "Handbook of Exact
///    String-Matching Algorithms", chapter 14.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoyerMoore {
    pattern:     Vec<u8>,
    bad_char:    [usize; ALPHABET_SIZE],
    good_suffix: Vec<usize>,
}

impl BoyerMoore {
    /// The bad-character shift for every symbol of the alphabet.
    #[inline]
    #[must_use]
    pub fn bad_char(&self) -> &[usize; ALPHABET_SIZE] {
        &self.bad_char
    }

    /// The good-suffix shift for every pattern position.
    #[inline]
    #[must_use]
    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }
}

/// The rightmost occurrence of each byte in `pattern[..m-1]` determines its
/// shift; bytes absent from the pattern shift by `m`.
#[must_use]
pub(crate) fn bad_char_table(pattern: &[u8]) -> [usize; ALPHABET_SIZE] {
    let m = pattern.len();
    let mut bad_char = [m; ALPHABET_SIZE];

    for (i, &b) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        bad_char[b as usize] = m - i - 1;
    }

    bad_char
}

/// For every `i`, the length of the longest substring ending at `i` that is
/// also a suffix of `pattern`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
#[must_use]
pub(crate) fn suffixes(pattern: &[u8]) -> Vec<isize> {
    let m = pattern.len() as isize;
    let mut suffix_list = vec![0isize; pattern.len()];
    suffix_list[pattern.len() - 1] = m;

    let mut f = 0;
    let mut g = m - 1;
    let mut i = m - 2;

    while i >= 0 {
        if i > g && suffix_list[(i + m - 1 - f) as usize] < i - g {
            suffix_list[i as usize] = suffix_list[(i + m - 1 - f) as usize];
        } else {
            g = g.min(i);
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[(g + m - 1 - f) as usize] {
                g -= 1;
            }
            suffix_list[i as usize] = f - g;
        }
        i -= 1;
    }

    suffix_list
}

/// Two passes over [`suffixes`]: first the shifts where only a prefix of the
/// pattern matches a suffix of the matched part, then the shifts where the
/// matched suffix reoccurs inside the pattern.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
#[must_use]
pub(crate) fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let suffix_list = suffixes(pattern);
    let mut good_suffix = vec![m; m];

    let mut j = 0;
    for i in (-1..m as isize).rev() {
        if i == -1 || suffix_list[i as usize] == i + 1 {
            let shift = (m as isize - 1 - i) as usize;
            while j < shift {
                if good_suffix[j] == m {
                    good_suffix[j] = shift;
                }
                j += 1;
            }
        }
    }

    for i in 0..m.saturating_sub(1) {
        good_suffix[m - 1 - suffix_list[i] as usize] = m - 1 - i;
    }

    good_suffix
}

impl SingleMatcher for BoyerMoore {
    const NAME: &'static str = "boyer_moore";

    fn preprocess(pattern: &[u8]) -> Result<Self, SearchError> {
        validate_pattern(pattern)?;

        Ok(BoyerMoore {
            pattern:     pattern.to_vec(),
            bad_char:    bad_char_table(pattern),
            good_suffix: good_suffix_table(pattern),
        })
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn count_matches(&self, sequence: &[u8]) -> usize {
        let m = self.pattern.len();
        let n = sequence.len();
        if m > n {
            return 0;
        }

        let mut matches = 0;
        let mut j = 0;

        while j <= n - m {
            let window = &sequence[j..j + m];
            let mismatch = self
                .pattern
                .iter()
                .zip(window)
                .rposition(|(p, s)| p != s);

            match mismatch {
                None => {
                    matches += 1;
                    j += self.good_suffix[0];
                }
                Some(i) => {
                    let bad_char = symbol(window[i]).map_or(m, |c| self.bad_char[c]) as isize;
                    let bad_char_shift = bad_char - m as isize + 1 + i as isize;
                    j += max(self.good_suffix[i] as isize, bad_char_shift) as usize;
                }
            }
        }

        matches
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables() {
        // Charras & Lecroq's worked example
        let pattern = b"GCAGAGAG";
        assert_eq!(suffixes(pattern), vec![1, 0, 0, 2, 0, 4, 0, 8]);
        assert_eq!(good_suffix_table(pattern), vec![7, 7, 7, 2, 7, 4, 7, 1]);

        let bad_char = bad_char_table(pattern);
        assert_eq!(bad_char[b'A' as usize], 1);
        assert_eq!(bad_char[b'C' as usize], 6);
        assert_eq!(bad_char[b'G' as usize], 2);
        assert_eq!(bad_char[b'T' as usize], 8);
    }

    #[test]
    fn single_byte_pattern() {
        assert_eq!(good_suffix_table(b"A"), vec![1]);
        assert_eq!(bad_char_table(b"A")[b'A' as usize], 1);

        let bm = BoyerMoore::preprocess(b"A").unwrap();
        assert_eq!(bm.count_matches(b"AAGA"), 3);
    }

    #[test]
    fn counts() {
        static DATA: [(&[u8], &[u8], usize); 8] = [
            (b"ACGT", b"ACGTACGT", 2),
            (b"AA", b"AAAA", 3),
            (b"ACA", b"ACACACA", 3),
            (b"ACGT", b"ACGT", 1),
            (b"ACGTA", b"ACGT", 0),
            (b"GCAGAGAG", b"GCATCGCAGAGAGTATACAGTACG", 1),
            (b"GG", b"", 0),
            (b"GAGA", b"GAGAGAGTGAGA", 3),
        ];

        for (pattern, sequence, expected) in DATA {
            let bm = BoyerMoore::preprocess(pattern).unwrap();
            assert_eq!(
                bm.count_matches(sequence),
                expected,
                "pattern: {}, sequence: {}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(sequence)
            );
        }
    }

    #[test]
    fn non_ascii_sequence() {
        let bm = BoyerMoore::preprocess(b"ACG").unwrap();
        assert_eq!(bm.count_matches(b"\xF0ACG\x80\x80ACGACG"), 3);
    }
}
