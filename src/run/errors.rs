use crate::{
    data::err::{CorpusError, GetCode},
    search::{Algorithm, SearchError, UnknownAlgorithm},
};
use std::{error::Error, fmt};

/// An enum representing the ways a run can fail before producing a report.
/// Count mismatches are not errors; they are recorded in the report.
#[non_exhaustive]
pub enum RunError {
    /// The corpus could not be loaded or was inconsistent
    Corpus(CorpusError),
    /// A pattern (0-based index) was rejected by the algorithm
    Search { pattern: usize, error: SearchError },
    /// The requested algorithm is not registered
    UnknownAlgorithm(UnknownAlgorithm),
    /// A gap algorithm was requested without a gap width
    MissingGap(Algorithm),
    /// A gap width was given for an exact algorithm
    UnexpectedGap(Algorithm),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Corpus(e) => write!(f, "{e}"),
            RunError::Search { pattern, error } => write!(f, "Pattern {}: {error}", pattern + 1),
            RunError::UnknownAlgorithm(e) => write!(f, "{e}"),
            RunError::MissingGap(a) => write!(f, "The algorithm '{a}' requires a gap width (-k)"),
            RunError::UnexpectedGap(a) => write!(f, "The algorithm '{a}' does not take a gap width (-k)"),
        }
    }
}

impl fmt::Debug for RunError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Corpus(e) => Some(e),
            RunError::Search { error, .. } => Some(error),
            RunError::UnknownAlgorithm(e) => Some(e),
            _ => None,
        }
    }
}

impl GetCode for RunError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            RunError::Corpus(e) => e.get_code(),
            _ => 1,
        }
    }
}

impl From<CorpusError> for RunError {
    #[inline]
    fn from(e: CorpusError) -> Self {
        RunError::Corpus(e)
    }
}

impl From<UnknownAlgorithm> for RunError {
    #[inline]
    fn from(e: UnknownAlgorithm) -> Self {
        RunError::UnknownAlgorithm(e)
    }
}
