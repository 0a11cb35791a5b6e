//! Wrapper types providing
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations for fuzzing the matchers with well-formed inputs.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! types.
//!
//! </div>

use crate::search::DNA;
use arbitrary::{Arbitrary, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

/// The largest gap width generated by [`GapCase`].
pub const MAX_ARBITRARY_GAP: usize = 16;

/// A byte vector whose
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// implementation only generates bases in `ACGT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence(pub Vec<u8>);

impl_deref! {DnaSequence, Vec<u8>}

impl<'a> Arbitrary<'a> for DnaSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(DnaSequence(
            u.arbitrary_iter::<u8>()?
                .flatten()
                .map(|b| DNA[b as usize % DNA.len()])
                .collect(),
        ))
    }
}

/// Like [`DnaSequence`], but never empty, so it is always a valid pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaPattern(pub Vec<u8>);

impl_deref! {DnaPattern, Vec<u8>}

impl<'a> Arbitrary<'a> for DnaPattern {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let first = DNA[u.choose_index(DNA.len())?];
        let mut pattern = DnaSequence::arbitrary(u)?.0;
        pattern.insert(0, first);
        Ok(DnaPattern(pattern))
    }
}

/// An exact matching problem: a non-empty DNA pattern and a DNA sequence.
#[derive(Debug, Clone, Arbitrary)]
pub struct ExactCase {
    pub pattern:  DnaPattern,
    pub sequence: DnaSequence,
}

/// A bounded-gap matching problem, with `k` at most [`MAX_ARBITRARY_GAP`].
#[derive(Debug, Clone)]
pub struct GapCase {
    pub pattern:  DnaPattern,
    pub k:        usize,
    pub sequence: DnaSequence,
}

impl<'a> Arbitrary<'a> for GapCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(GapCase {
            pattern:  DnaPattern::arbitrary(u)?,
            k:        u.int_in_range(0..=MAX_ARBITRARY_GAP)?,
            sequence: DnaSequence::arbitrary(u)?,
        })
    }
}

/// A multi-pattern matching problem for the Aho-Corasick automaton.
#[derive(Debug, Clone, Arbitrary)]
pub struct PatternSetCase {
    pub patterns: Vec<DnaPattern>,
    pub sequence: DnaSequence,
}
