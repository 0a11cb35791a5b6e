//! Seeded random DNA data for experiments, tests, and benchmarks.
//!
//! Sequences are drawn uniformly from an alphabet. Patterns are sampled as
//! substrings of the generated sequences, so every pattern occurs at least
//! once in the corpus.

use crate::search::DNA;
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    fill_sequence(&mut rng, alpha, length)
}

fn fill_sequence(rng: &mut Xoshiro256PlusPlus, alpha: &[u8], length: usize) -> Vec<u8> {
    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// `length ± variance`, drawn uniformly.
#[allow(clippy::cast_possible_truncation)]
fn vary(rng: &mut Xoshiro256PlusPlus, length: usize, variance: usize) -> usize {
    if variance == 0 {
        return length;
    }
    let offset = (rng.next_u64() % (2 * variance as u64 + 1)) as usize;
    (length + offset).saturating_sub(variance)
}

/// Generates `count` DNA sequences of length `length ± variance`.
#[must_use]
pub fn rand_sequences(count: usize, length: usize, variance: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = vary(&mut rng, length, variance);
            fill_sequence(&mut rng, DNA, n)
        })
        .collect()
}

/// Samples up to `count` distinct, non-empty patterns of length
/// `length ± variance` from `sequences`.
///
/// Pattern `i` is taken from the sequence at the same relative position in
/// the corpus, so the patterns are spread over the whole input. Fewer than
/// `count` patterns are returned when the sequences are too short or too
/// repetitive to provide them.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rand_patterns<S: AsRef<[u8]>>(
    sequences: &[S], count: usize, length: usize, variance: usize, seed: u64,
) -> Vec<Vec<u8>> {
    const MAX_ATTEMPTS: usize = 64;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut patterns: Vec<Vec<u8>> = Vec::with_capacity(count);

    if sequences.is_empty() {
        return patterns;
    }

    for i in 0..count {
        let source = sequences[i * sequences.len() / count].as_ref();
        let n = vary(&mut rng, length, variance).max(1);
        if n > source.len() {
            continue;
        }

        for _ in 0..MAX_ATTEMPTS {
            let start = rng.next_u64() as usize % (source.len() - n + 1);
            let pattern = &source[start..start + n];
            if !patterns.iter().any(|p| p == pattern) {
                patterns.push(pattern.to_vec());
                break;
            }
        }
    }

    patterns
}
