use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// An enum representing the ways a corpus (sequences, patterns, and answers)
/// can fail to load or be inconsistent. These are fatal for a run and are
/// detected before any algorithm executes.
#[non_exhaustive]
pub enum CorpusError {
    /// The file could not be opened or read
    Io(std::io::Error),
    /// The error occurred while loading the named file
    InFile(String, Box<CorpusError>),
    /// The header line was missing or did not hold the expected integers
    BadHeader(String),
    /// The number of data lines differs from the header
    LineCount { expected: usize, found: usize },
    /// A value in an answers line was not a non-negative integer
    BadAnswer { line: usize, value: String },
    /// An answers line had the wrong number of entries
    ColumnCount { line: usize, expected: usize, found: usize },
    /// The answers header recorded a negative gap width
    NegativeGap(i64),
    /// The answers were produced for a different gap width
    GapMismatch { expected: usize, found: usize },
    /// The answers do not have one row per pattern
    PatternCount { patterns: usize, rows: usize },
    /// The answers do not have one column per sequence
    SequenceCount { sequences: usize, columns: usize },
}

impl Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "{e}"),
            CorpusError::InFile(path, e) => write!(f, "{path}: {e}"),
            CorpusError::BadHeader(line) => write!(f, "Malformed header line '{line}'"),
            CorpusError::LineCount { expected, found } => {
                write!(f, "Wrong number of data-lines: expected {expected} but read {found}")
            }
            CorpusError::BadAnswer { line, value } => write!(f, "Parse error on line {line}: '{value}'"),
            CorpusError::ColumnCount { line, expected, found } => {
                write!(f, "Data line {line} has {found} entries instead of {expected}")
            }
            CorpusError::NegativeGap(k) => write!(f, "The gap width must be non-negative, but got {k}"),
            CorpusError::GapMismatch { expected, found } => {
                write!(f, "Mismatch between k value ({expected}) and answers file ({found})")
            }
            CorpusError::PatternCount { patterns, rows } => write!(
                f,
                "Count mismatch between patterns file ({patterns}) and answers file ({rows})"
            ),
            CorpusError::SequenceCount { sequences, columns } => write!(
                f,
                "Count mismatch between sequences file ({sequences}) and answers file ({columns})"
            ),
        }
    }
}

impl std::fmt::Debug for CorpusError {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(e) => Some(e),
            CorpusError::InFile(_, e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl GetCode for CorpusError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            CorpusError::Io(e) => e.get_code(),
            CorpusError::InFile(_, e) => e.get_code(),
            _ => 1,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}
