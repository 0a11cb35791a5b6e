use super::{ALPHABET_SIZE, MultiMatcher, SearchError, symbol, validate_pattern};
use std::collections::VecDeque;

/// A dense state identifier. State `0` is always the root.
pub type StateId = u32;

/// Marks an undefined transition in a goto table. After construction no
/// transition out of the root is `FAIL`.
pub const FAIL: StateId = StateId::MAX;

/// Aho-Corasick search artifact for a set of patterns: the goto function, the
/// failure function, and the output function closed under failure links.
///
/// The goto function is a single flat table indexed by
/// `state * ALPHABET_SIZE + symbol`.
///
/// ### Citation
///
/// 1. Alfred V. Aho and Margaret J. Corasick (1975). "Efficient string
///    matching: an aid to bibliographic search." Communications of the ACM
///    18(6). doi: <https://doi.org/10.1145/360825.360855>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AhoCorasick {
    pattern_count: usize,
    goto:          Vec<StateId>,
    failure:       Vec<StateId>,
    output:        Vec<Vec<usize>>,
}

impl AhoCorasick {
    /// The number of states in the automaton, root included.
    #[inline]
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.failure.len()
    }

    /// The goto transition for `state` on byte `b`, or [`FAIL`].
    #[inline]
    #[must_use]
    pub fn transition(&self, state: StateId, b: u8) -> StateId {
        match symbol(b) {
            Some(c) => self.goto[state as usize * ALPHABET_SIZE + c],
            None if state == 0 => 0,
            None => FAIL,
        }
    }

    /// The failure link of `state`.
    #[inline]
    #[must_use]
    pub fn failure(&self, state: StateId) -> StateId {
        self.failure[state as usize]
    }

    /// The indices of the patterns that end in `state`, including those
    /// inherited through failure links.
    #[inline]
    #[must_use]
    pub fn output(&self, state: StateId) -> &[usize] {
        &self.output[state as usize]
    }
}

/// Construction-local state for the goto function. The counter for new
/// states lives here so independent automata never share it.
struct GotoBuilder {
    goto:      Vec<StateId>,
    output:    Vec<Vec<usize>>,
    new_state: StateId,
    /// Symbols used by at least one pattern
    used:      [bool; ALPHABET_SIZE],
}

impl GotoBuilder {
    fn new() -> Self {
        GotoBuilder {
            goto:      vec![FAIL; ALPHABET_SIZE],
            output:    vec![Vec::new()],
            new_state: 0,
            used:      [false; ALPHABET_SIZE],
        }
    }

    #[inline]
    fn cell(state: StateId, c: usize) -> usize {
        state as usize * ALPHABET_SIZE + c
    }

    /// Follows existing edges as far as possible, then adds one new state per
    /// remaining byte.
    fn enter_pattern(&mut self, pattern: &[u8], index: usize) {
        let mut state: StateId = 0;
        let mut j = 0;

        while j < pattern.len() && self.goto[Self::cell(state, pattern[j] as usize)] != FAIL {
            state = self.goto[Self::cell(state, pattern[j] as usize)];
            j += 1;
        }

        for &b in &pattern[j..] {
            self.new_state += 1;
            self.goto[Self::cell(state, b as usize)] = self.new_state;
            state = self.new_state;
            self.goto.extend(std::iter::repeat_n(FAIL, ALPHABET_SIZE));
            self.output.push(Vec::new());
        }

        for &b in pattern {
            self.used[b as usize] = true;
        }
        self.output[state as usize].push(index);
    }

    /// Closes the root so every undefined transition loops back to it.
    fn finish(mut self) -> (Vec<StateId>, Vec<Vec<usize>>, Vec<usize>) {
        for t in &mut self.goto[..ALPHABET_SIZE] {
            if *t == FAIL {
                *t = 0;
            }
        }

        let used = (0..ALPHABET_SIZE).filter(|&c| self.used[c]).collect();
        (self.goto, self.output, used)
    }
}

/// Breadth-first construction of the failure function. Each state's output
/// is extended with the output of its failure state, which has already been
/// completed since it is shallower.
fn build_failure(goto: &[StateId], output: &mut [Vec<usize>], used: &[usize]) -> Vec<StateId> {
    let mut failure = vec![0; output.len()];
    let mut queue = VecDeque::new();

    for &c in used {
        let s = goto[c];
        if s != 0 {
            queue.push_back(s);
        }
    }

    while let Some(r) = queue.pop_front() {
        for &c in used {
            let s = goto[GotoBuilder::cell(r, c)];
            if s == FAIL {
                continue;
            }
            queue.push_back(s);

            let mut state = failure[r as usize];
            while goto[GotoBuilder::cell(state, c)] == FAIL {
                state = failure[state as usize];
            }

            let f = goto[GotoBuilder::cell(state, c)];
            failure[s as usize] = f;

            let (target, source) = if s > f {
                let (head, tail) = output.split_at_mut(s as usize);
                (&mut tail[0], &head[f as usize])
            } else {
                let (head, tail) = output.split_at_mut(f as usize);
                (&mut head[s as usize], &tail[0])
            };
            for &index in source {
                if !target.contains(&index) {
                    target.push(index);
                }
            }
        }
    }

    failure
}

impl MultiMatcher for AhoCorasick {
    const NAME: &'static str = "aho_corasick";

    fn preprocess<P: AsRef<[u8]>>(patterns: &[P]) -> Result<Self, SearchError> {
        let mut builder = GotoBuilder::new();

        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            validate_pattern(pattern)?;
            builder.enter_pattern(pattern, index);
        }

        let (goto, mut output, used) = builder.finish();
        let failure = build_failure(&goto, &mut output, &used);

        Ok(AhoCorasick {
            pattern_count: patterns.len(),
            goto,
            failure,
            output,
        })
    }

    #[inline]
    fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    fn count_matches(&self, sequence: &[u8]) -> Vec<usize> {
        let mut matches = vec![0; self.pattern_count];
        let mut state: StateId = 0;

        for &b in sequence {
            let Some(c) = symbol(b) else {
                state = 0;
                continue;
            };

            while self.goto[GotoBuilder::cell(state, c)] == FAIL {
                state = self.failure[state as usize];
            }
            state = self.goto[GotoBuilder::cell(state, c)];

            for &index in &self.output[state as usize] {
                matches[index] += 1;
            }
        }

        matches
    }
}
