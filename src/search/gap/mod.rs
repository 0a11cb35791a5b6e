//! Bounded-gap matching.
//!
//! A pattern `p` of length `m` matches at offset `i` of a sequence when
//! `p[0]` sits at `i` and each following pattern byte is found after at most
//! `k` filler bytes, where a filler is any 7-bit ASCII byte other than the
//! pattern byte being waited for. With `k = 0` this is exact substring
//! matching. Every offset is tried, so a count is the number of offsets at
//! which the pattern matches.
//!
//! [`GapDfa`] and [`GapRegex`] are two independent implementations of this
//! semantics and always agree. Both refuse a `(p, k)` whose automaton would
//! need more than [`MAX_GAP_STATES`] states.

mod dfa;
mod regex;

use crate::search::SearchError;

pub use dfa::*;
pub use regex::*;

/// The largest automaton, in states, either gap matcher will build. The DFA
/// table for this many states takes 128 MiB.
pub const MAX_GAP_STATES: usize = 1 << 18;

/// The `1 + m + k(m - 1)` states needed for a pattern of length `m >= 1`, or
/// [`SearchError::TooManyStates`] if that exceeds [`MAX_GAP_STATES`].
pub(crate) fn gap_state_count(m: usize, k: usize) -> Result<usize, SearchError> {
    k.checked_mul(m - 1)
        .and_then(|gaps| gaps.checked_add(m))
        .and_then(|states| states.checked_add(1))
        .filter(|&states| states <= MAX_GAP_STATES)
        .ok_or(SearchError::TooManyStates {
            length:  m,
            k,
            maximum: MAX_GAP_STATES,
        })
}
