use super::SearchError;

/// The number of symbols every transition and jump table is sized for. Only
/// the 7-bit ASCII range is addressable; sequence bytes above it never match.
pub const ALPHABET_SIZE: usize = 128;

/// The nucleotides patterns and sequences are nominally drawn from.
pub const DNA: &[u8; 4] = b"ACGT";

/// Checks that a pattern is non-empty and only uses symbols that fit the
/// tables.
///
/// # Errors
///
/// Returns [`SearchError::EmptyPattern`] for an empty pattern and
/// [`SearchError::InvalidSymbol`] for the first byte at or above
/// [`ALPHABET_SIZE`].
#[inline]
pub fn validate_pattern(pattern: &[u8]) -> Result<(), SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    match pattern.iter().copied().find(|b| !b.is_ascii()) {
        Some(b) => Err(SearchError::InvalidSymbol(b)),
        None => Ok(()),
    }
}

/// Maps a byte to its column in a table, or [`None`] if it lies outside the
/// alphabet.
#[inline]
#[must_use]
pub(crate) fn symbol(b: u8) -> Option<usize> {
    b.is_ascii().then_some(b as usize)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(validate_pattern(b"ACGT"), Ok(()));
        assert_eq!(validate_pattern(b""), Err(SearchError::EmptyPattern));
        assert_eq!(validate_pattern(b"AC\xC3G"), Err(SearchError::InvalidSymbol(0xC3)));
    }

    #[test]
    fn symbols() {
        assert_eq!(symbol(b'A'), Some(65));
        assert_eq!(symbol(0x7F), Some(127));
        assert_eq!(symbol(0x80), None);
    }
}
