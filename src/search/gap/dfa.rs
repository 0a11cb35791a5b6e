use super::{MAX_GAP_STATES, gap_state_count};
use crate::search::{ALPHABET_SIZE, FAIL, GapMatcher, SearchError, StateId, symbol, validate_pattern};

/// A deterministic automaton for bounded-gap matching of one pattern.
///
/// The automaton has `1 + m + k(m - 1)` states. State `0` only accepts
/// `p[0]`. Each later pattern byte `p[i]` gets a *direct* state, reached on
/// `p[i]`, preceded by a chain of `k` *gap* states that absorb one non-`p[i]`
/// byte each while still waiting for `p[i]`. The direct state of the last
/// pattern byte is terminal and has no outgoing transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapDfa {
    dfa:      Vec<StateId>,
    terminal: StateId,
    m:        usize,
    k:        usize,
}

impl GapDfa {
    /// The number of states in the automaton.
    #[inline]
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.dfa.len() / ALPHABET_SIZE
    }

    /// The state whose arrival signals a match.
    #[inline]
    #[must_use]
    pub fn terminal(&self) -> StateId {
        self.terminal
    }

    /// The gap width the automaton was built for.
    #[inline]
    #[must_use]
    pub fn gap(&self) -> usize {
        self.k
    }

    /// The transition from `state` on byte `b`, or [`FAIL`].
    #[inline]
    #[must_use]
    pub fn transition(&self, state: StateId, b: u8) -> StateId {
        symbol(b).map_or(FAIL, |c| self.dfa[state as usize * ALPHABET_SIZE + c])
    }
}

/// Allocates and wires the automaton, returning the table and the terminal
/// state.
fn create_dfa(pattern: &[u8], k: usize) -> Result<(Vec<StateId>, StateId), SearchError> {
    let too_many = || SearchError::TooManyStates {
        length:  pattern.len(),
        k,
        maximum: MAX_GAP_STATES,
    };

    // Bounded by MAX_GAP_STATES, so every state id fits below FAIL.
    let states = gap_state_count(pattern.len(), k)?;
    let cells = states.checked_mul(ALPHABET_SIZE).ok_or_else(too_many)?;
    // With one pattern byte there are no gap states and k is unused.
    let k = if pattern.len() == 1 {
        0
    } else {
        StateId::try_from(k).map_err(|_| too_many())?
    };

    let mut dfa = Vec::new();
    dfa.try_reserve_exact(cells).map_err(|_| too_many())?;
    dfa.resize(cells, FAIL);
    let cell = |state: StateId, b: u8| state as usize * ALPHABET_SIZE + b as usize;

    dfa[cell(0, pattern[0])] = 1;

    let mut state: StateId = 1;
    let mut new_state: StateId = 1;

    for &p in &pattern[1..] {
        new_state += 1;
        dfa[cell(state, p)] = new_state;

        let mut last_state = state;
        for gap in new_state + 1..=new_state + k {
            dfa[cell(gap, p)] = new_state;
            for filler in (0..=0x7F).filter(|&b| b != p) {
                dfa[cell(last_state, filler)] = gap;
            }
            last_state = gap;
        }

        state = new_state;
        new_state += k;
    }

    Ok((dfa, state))
}

impl GapMatcher for GapDfa {
    const NAME: &'static str = "dfa_gap";

    fn preprocess(pattern: &[u8], k: usize) -> Result<Self, SearchError> {
        validate_pattern(pattern)?;

        let (dfa, terminal) = create_dfa(pattern, k)?;
        Ok(GapDfa {
            dfa,
            terminal,
            m: pattern.len(),
            k,
        })
    }

    #[inline]
    fn count_matches(&self, sequence: &[u8]) -> usize {
        if self.m > sequence.len() {
            return 0;
        }
        gap_dfa_scan(&self.dfa, self.terminal, sequence, self.m)
    }
}

/// Walks the automaton from every start offset that leaves room for the
/// pattern.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn gap_dfa_scan(dfa: &[StateId], terminal: StateId, sequence: &[u8], m: usize) -> usize {
    let mut matches = 0;

    for start in 0..=sequence.len() - m {
        let mut state: StateId = 0;

        for &b in &sequence[start..] {
            let next = symbol(b).map_or(FAIL, |c| dfa[state as usize * ALPHABET_SIZE + c]);
            if next == FAIL {
                break;
            }
            state = next;
            if state == terminal {
                break;
            }
        }

        if state == terminal {
            matches += 1;
        }
    }

    matches
}
