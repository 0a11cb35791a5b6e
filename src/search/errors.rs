use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing the ways pattern preprocessing can fail. No partial
/// artifact is ever produced when one of these is returned.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The pattern had no bytes
    EmptyPattern,
    /// The pattern contained a byte outside of the 7-bit alphabet the tables
    /// are sized for
    InvalidSymbol(u8),
    /// The pattern was longer than the matcher can represent
    PatternTooLong { length: usize, maximum: usize },
    /// A negative gap width was requested for a gap matcher
    NegativeGap(i64),
    /// The gap automaton for this pattern length and gap width would exceed
    /// the state limit
    TooManyStates { length: usize, k: usize, maximum: usize },
    /// The regular expression for a gap pattern could not be built
    Regex(String),
}

impl fmt::Display for SearchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "The pattern was empty"),
            SearchError::InvalidSymbol(b) => {
                write!(f, "The pattern contained the byte {b:#04x}, which is outside of 7-bit ASCII")
            }
            SearchError::PatternTooLong { length, maximum } => {
                write!(f, "Pattern size must be <= {maximum}, but got a pattern of length {length}")
            }
            SearchError::NegativeGap(k) => write!(f, "The gap width must be non-negative, but got {k}"),
            SearchError::TooManyStates { length, k, maximum } => write!(
                f,
                "A pattern of length {length} with gap width {k} needs more than {maximum} automaton states"
            ),
            SearchError::Regex(msg) => write!(f, "The gap expression failed to compile: {msg}"),
        }
    }
}

impl fmt::Debug for SearchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for SearchError {}

impl GetCode for SearchError {}
