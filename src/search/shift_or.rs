use super::{ALPHABET_SIZE, SearchError, SingleMatcher, validate_pattern};

/// The machine word the Shift-Or state is held in.
type Word = u64;

/// The longest pattern [`ShiftOr`] can represent.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Shift-Or (bitap) search artifact: one mask per symbol with bit `i`
/// cleared where the pattern holds that symbol, and the limit the state must
/// fall below to signal a match.
///
/// ### Limitations
///
/// Patterns are limited to [`WORD_BITS`] bytes; longer patterns are rejected
/// rather than truncated.
///
/// ### Citation
///
/// 1. Christian Charras and Thierry Lecroq (2004). "Handbook of Exact
///    String-Matching Algorithms", chapter 5.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftOr {
    lim:         Word,
    s_positions: [Word; ALPHABET_SIZE],
}

impl ShiftOr {
    /// The match limit: the state signals a match whenever it is below this.
    #[inline]
    #[must_use]
    pub fn lim(&self) -> u64 {
        self.lim
    }

    /// The mask for a single symbol.
    #[inline]
    #[must_use]
    pub fn mask(&self, b: u8) -> u64 {
        self.s_positions.get(b as usize).copied().unwrap_or(Word::MAX)
    }
}

impl SingleMatcher for ShiftOr {
    const NAME: &'static str = "shift_or";

    fn preprocess(pattern: &[u8]) -> Result<Self, SearchError> {
        validate_pattern(pattern)?;
        if pattern.len() > WORD_BITS {
            return Err(SearchError::PatternTooLong {
                length:  pattern.len(),
                maximum: WORD_BITS,
            });
        }

        let mut s_positions = [Word::MAX; ALPHABET_SIZE];
        let mut lim: Word = 0;
        let mut bit: Word = 1;

        for &b in pattern {
            s_positions[b as usize] &= !bit;
            lim |= bit;
            bit = bit.wrapping_shl(1);
        }

        Ok(ShiftOr {
            lim: !(lim >> 1),
            s_positions,
        })
    }

    #[inline]
    fn count_matches(&self, sequence: &[u8]) -> usize {
        shift_or_scan(&self.s_positions, self.lim, sequence)
    }
}

/// The scan loop, kept free-standing so it can be multiversioned.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn shift_or_scan(s_positions: &[Word; ALPHABET_SIZE], lim: Word, sequence: &[u8]) -> usize {
    let mut state = Word::MAX;
    let mut matches = 0;

    for &b in sequence {
        let mask = s_positions.get(b as usize).copied().unwrap_or(Word::MAX);
        state = (state << 1) | mask;
        if state < lim {
            matches += 1;
        }
    }

    matches
}
