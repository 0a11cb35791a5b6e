use super::err::CorpusError;
use crate::search::{Algorithm, SearchError};
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Read, Write},
};

/// The sequences and patterns of one experiment, plus the optional table of
/// expected counts used to validate a run.
///
/// Pattern, sequence, and answer counts are guaranteed to be mutually
/// consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    sequences: Vec<Vec<u8>>,
    patterns:  Vec<Vec<u8>>,
    answers:   Option<AnswerTable>,
}

impl Corpus {
    /// Assembles a corpus, checking that any answers have one row per pattern
    /// and one column per sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::PatternCount`] or [`CorpusError::SequenceCount`]
    /// when the answers do not fit the patterns and sequences.
    pub fn new(
        sequences: Vec<Vec<u8>>, patterns: Vec<Vec<u8>>, answers: Option<AnswerTable>,
    ) -> Result<Self, CorpusError> {
        if let Some(answers) = &answers {
            if answers.rows.len() != patterns.len() {
                return Err(CorpusError::PatternCount {
                    patterns: patterns.len(),
                    rows:     answers.rows.len(),
                });
            }
            if answers.columns != sequences.len() {
                return Err(CorpusError::SequenceCount {
                    sequences: sequences.len(),
                    columns:   answers.columns,
                });
            }
        }

        Ok(Corpus {
            sequences,
            patterns,
            answers,
        })
    }

    /// Loads a corpus from the sequences, patterns, and optional answers
    /// files. When `k` is given, the answers file must record the same gap
    /// width in its header.
    ///
    /// # Errors
    ///
    /// Returns a [`CorpusError`] naming the offending file if a file cannot
    /// be read or is malformed, or if the files are inconsistent.
    pub fn from_files(
        sequences: &str, patterns: &str, answers: Option<&str>, k: Option<usize>,
    ) -> Result<Self, CorpusError> {
        let sequence_data = open(sequences).and_then(read_sequences).map_err(in_file(sequences))?;
        let pattern_data = open(patterns).and_then(read_patterns).map_err(in_file(patterns))?;
        let answer_data = match answers {
            Some(path) => Some(
                open(path)
                    .and_then(|file| read_answers(file, k.is_some()))
                    .map_err(in_file(path))?,
            ),
            None => None,
        };

        if let (Some(expected), Some(table)) = (k, &answer_data)
            && let Some(found) = table.k
            && found != expected
        {
            return Err(CorpusError::GapMismatch { expected, found });
        }

        Corpus::new(sequence_data, pattern_data, answer_data)
    }

    #[inline]
    #[must_use]
    pub fn sequences(&self) -> &[Vec<u8>] {
        &self.sequences
    }

    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &[Vec<u8>] {
        &self.patterns
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> Option<&AnswerTable> {
        self.answers.as_ref()
    }
}

/// Expected match counts, `rows[pattern][sequence]`, optionally tagged with
/// the gap width they were computed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerTable {
    rows:    Vec<Vec<usize>>,
    columns: usize,
    k:       Option<usize>,
}

impl AnswerTable {
    /// Creates a table from rows that all have `columns` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::ColumnCount`] for the first row (1-based) of
    /// the wrong width.
    pub fn new(rows: Vec<Vec<usize>>, columns: usize, k: Option<usize>) -> Result<Self, CorpusError> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != columns) {
            return Err(CorpusError::ColumnCount {
                line:     i + 1,
                expected: columns,
                found:    row.len(),
            });
        }
        Ok(AnswerTable { rows, columns, k })
    }

    /// Computes the reference table for `patterns` × `sequences` with the
    /// given algorithm. `k` is used by gap algorithms and recorded in the
    /// table only for them.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchError`] of the first pattern that fails to
    /// preprocess.
    pub fn tabulate<P: AsRef<[u8]>, S: AsRef<[u8]>>(
        algorithm: Algorithm, patterns: &[P], sequences: &[S], k: usize,
    ) -> Result<Self, SearchError> {
        let mut rows = vec![Vec::with_capacity(sequences.len()); patterns.len()];
        let width = if algorithm.is_multi_pattern() { patterns.len() } else { 1 };
        let mut first_row = 0;

        for data in algorithm.preprocess_set(patterns, k)? {
            for sequence in sequences {
                let counts = data.count_matches(sequence.as_ref());
                for (row, &count) in rows[first_row..first_row + width].iter_mut().zip(counts.as_slice()) {
                    row.push(count);
                }
            }
            first_row += width;
        }

        Ok(AnswerTable {
            rows,
            columns: sequences.len(),
            k: algorithm.is_gapped().then_some(k),
        })
    }

    /// The expected count of `pattern` in `sequence`.
    #[inline]
    #[must_use]
    pub fn get(&self, pattern: usize, sequence: usize) -> Option<usize> {
        self.rows.get(pattern)?.get(sequence).copied()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn k(&self) -> Option<usize> {
        self.k
    }
}

/// Writes the table in the answers file format.
impl fmt::Display for AnswerTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buff = itoa::Buffer::new();

        f.write_str(buff.format(self.rows.len()))?;
        f.write_str(" ")?;
        f.write_str(buff.format(self.columns))?;
        if let Some(k) = self.k {
            f.write_str(" ")?;
            f.write_str(buff.format(k))?;
        }
        f.write_str("\n")?;

        for row in &self.rows {
            for (i, &count) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(buff.format(count))?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

fn open(path: &str) -> Result<File, CorpusError> {
    Ok(File::open(path)?)
}

fn in_file(path: &str) -> impl FnOnce(CorpusError) -> CorpusError + '_ {
    move |e| CorpusError::InFile(path.to_owned(), Box::new(e))
}

/// Splits the input into its header line and data lines, with line endings
/// removed.
fn split_lines<R: Read>(reader: R) -> Result<(String, Vec<Vec<u8>>), CorpusError> {
    let mut lines = BufReader::new(reader).split(b'\n');

    let header = match lines.next() {
        Some(line) => String::from_utf8_lossy(&line?).trim_end().to_owned(),
        None => return Err(CorpusError::BadHeader(String::new())),
    };

    let data = lines
        .map(|line| {
            line.map(|mut l| {
                if l.last() == Some(&b'\r') {
                    l.pop();
                }
                l
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((header, data))
}

/// Parses the integers of a header line, requiring at least `required` of
/// them. The two counts must be non-negative.
fn parse_header(header: &str, required: usize) -> Result<Vec<i64>, CorpusError> {
    let values = header
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CorpusError::BadHeader(header.to_owned()))?;

    if values.len() < required || values[..required.min(2)].iter().any(|&v| v < 0) {
        return Err(CorpusError::BadHeader(header.to_owned()));
    }
    Ok(values)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn check_line_count(expected: i64, data: &[Vec<u8>]) -> Result<(), CorpusError> {
    let expected = expected as usize;
    if data.len() == expected {
        Ok(())
    } else {
        Err(CorpusError::LineCount {
            expected,
            found: data.len(),
        })
    }
}

/// Reads a sequences file: a header line `<count> <max_length>` followed by
/// exactly `count` sequences, one per line.
///
/// # Errors
///
/// Returns a [`CorpusError`] if reading fails, the header is malformed, or
/// the number of lines differs from the header.
pub fn read_sequences<R: Read>(reader: R) -> Result<Vec<Vec<u8>>, CorpusError> {
    let (header, data) = split_lines(reader)?;
    let values = parse_header(&header, 1)?;
    check_line_count(values[0], &data)?;
    Ok(data)
}

/// Reads a patterns file, which has the same format as a sequences file.
///
/// # Errors
///
/// See [`read_sequences`].
#[inline]
pub fn read_patterns<R: Read>(reader: R) -> Result<Vec<Vec<u8>>, CorpusError> {
    read_sequences(reader)
}

/// Reads an answers file: a header line `<rows> <columns>` (followed by
/// `<k>` when `need_k` is set) and `rows` lines of `columns` comma-separated
/// counts.
///
/// # Errors
///
/// Returns a [`CorpusError`] if reading fails, the header is malformed or
/// lacks a required `k`, or any line has a bad value or the wrong number of
/// values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn read_answers<R: Read>(reader: R, need_k: bool) -> Result<AnswerTable, CorpusError> {
    let (header, data) = split_lines(reader)?;
    let values = parse_header(&header, if need_k { 3 } else { 2 })?;
    check_line_count(values[0], &data)?;
    let columns = values[1] as usize;

    let k = match values.get(2) {
        Some(&k) if need_k => Some(crate::search::gap_width(k).map_err(|_| CorpusError::NegativeGap(k))?),
        _ => None,
    };

    let mut rows = Vec::with_capacity(data.len());
    for (i, line) in data.iter().enumerate() {
        let line_no = i + 2;
        let line = String::from_utf8_lossy(line);
        let row = line
            .trim_end()
            .split(',')
            .map(|value| {
                value.trim().parse::<usize>().map_err(|_| CorpusError::BadAnswer {
                    line:  line_no,
                    value: value.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if row.len() != columns {
            return Err(CorpusError::ColumnCount {
                line:     line_no,
                expected: columns,
                found:    row.len(),
            });
        }
        rows.push(row);
    }

    Ok(AnswerTable { rows, columns, k })
}

/// Writes sequences (or patterns) in the sequences file format, with a
/// header line holding the count and the maximum length.
///
/// # Errors
///
/// Returns any IO error from the writer.
pub fn write_sequences<W: Write, S: AsRef<[u8]>>(mut writer: W, sequences: &[S]) -> std::io::Result<()> {
    let max_length = sequences.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
    let mut buff = itoa::Buffer::new();

    writer.write_all(buff.format(sequences.len()).as_bytes())?;
    writer.write_all(b" ")?;
    writer.write_all(buff.format(max_length).as_bytes())?;
    writer.write_all(b"\n")?;

    for sequence in sequences {
        writer.write_all(sequence.as_ref())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}
