use super::gap_state_count;
use crate::search::{GapMatcher, SearchError, validate_pattern};
use regex_automata::{
    Anchored, Input,
    meta::{Cache, Regex},
    util::syntax,
};

/// Bounded-gap matching through a general regular-expression engine.
///
/// A pattern `p0 p1 … p(m-1)` with gap width `k` becomes
/// `p0[^p1]{0,k}p1[^p2]{0,k}p2…`, where each negated class is restricted to
/// 7-bit ASCII. Counting the offsets at which an anchored search succeeds is
/// the same as counting the matches of the zero-width lookahead
/// `(?=p0[^p1]{0,k}p1…)` over the whole sequence, without requiring
/// look-around support from the engine.
///
/// The compiled [`Regex`] is shared read-only; each search creates its own
/// [`Cache`]. The NFA size is not capped by the engine; the pattern is
/// instead held to the same [`MAX_GAP_STATES`](super::MAX_GAP_STATES) limit
/// as [`GapDfa`](super::GapDfa).
#[derive(Clone, Debug)]
pub struct GapRegex {
    regex:      Regex,
    expression: String,
    first:      u8,
}

impl GapRegex {
    /// The regular expression the pattern was compiled to.
    #[inline]
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Writes `b` as a byte escape so no pattern byte is read as a metacharacter.
fn push_byte(expression: &mut String, b: u8) {
    expression.push_str(&format!("\\x{b:02X}"));
}

/// The class of ASCII bytes other than `b`.
fn push_filler_class(expression: &mut String, b: u8) {
    expression.push('[');
    if b > 0x00 {
        expression.push_str("\\x00-");
        push_byte(expression, b - 1);
    }
    if b < 0x7F {
        push_byte(expression, b + 1);
        expression.push_str("-\\x7F");
    }
    expression.push(']');
}

/// Builds the gap expression for a validated, non-empty pattern.
#[must_use]
pub(crate) fn gap_expression(pattern: &[u8], k: usize) -> String {
    let mut expression = String::with_capacity(pattern.len() * 24);
    push_byte(&mut expression, pattern[0]);

    for &b in &pattern[1..] {
        if k > 0 {
            push_filler_class(&mut expression, b);
            expression.push_str(&format!("{{0,{k}}}"));
        }
        push_byte(&mut expression, b);
    }

    expression
}

impl GapMatcher for GapRegex {
    const NAME: &'static str = "regexp";

    fn preprocess(pattern: &[u8], k: usize) -> Result<Self, SearchError> {
        validate_pattern(pattern)?;
        gap_state_count(pattern.len(), k)?;

        let expression = gap_expression(pattern, k);
        let regex = Regex::builder()
            .configure(Regex::config().nfa_size_limit(None))
            .syntax(syntax::Config::new().unicode(false))
            .build(&expression)
            .map_err(|e| SearchError::Regex(e.to_string()))?;

        Ok(GapRegex {
            regex,
            expression,
            first: pattern[0],
        })
    }

    fn count_matches(&self, sequence: &[u8]) -> usize {
        let mut cache: Cache = self.regex.create_cache();

        sequence
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == self.first)
            .filter(|&(start, _)| {
                let input = Input::new(sequence).range(start..).anchored(Anchored::Yes);
                self.regex.search_half_with(&mut cache, &input).is_some()
            })
            .count()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::MAX_GAP_STATES;

    #[test]
    fn expressions() {
        assert_eq!(gap_expression(b"A", 4), r"\x41");
        assert_eq!(gap_expression(b"AG", 0), r"\x41\x47");
        assert_eq!(gap_expression(b"AG", 1), r"\x41[\x00-\x46\x48-\x7F]{0,1}\x47");

        let mut class = String::new();
        push_filler_class(&mut class, 0x7F);
        assert_eq!(class, r"[\x00-\x7E]");
        class.clear();
        push_filler_class(&mut class, 0x00);
        assert_eq!(class, r"[\x01-\x7F]");
    }

    #[test]
    fn metacharacters_are_literal() {
        let re = GapRegex::preprocess(b".*", 0).unwrap();
        assert_eq!(re.count_matches(b"A.*.*"), 2);
        assert_eq!(re.count_matches(b"AAAA"), 0);
    }

    #[test]
    fn counts() {
        static DATA: [(&[u8], usize, &[u8], usize); 10] = [
            (b"AG", 1, b"ATG", 1),
            (b"AG", 0, b"ATG", 0),
            (b"AG", 2, b"ATTGAG", 2),
            (b"AG", 1, b"ATTGAG", 1),
            (b"ACGT", 0, b"ACGTACGT", 2),
            (b"AA", 0, b"AAAA", 3),
            (b"AA", 2, b"ACCAGA", 2),
            (b"ACG", 1, b"ATCTG", 1),
            (b"ACG", 1, b"AAC", 0),
            (b"TG", 5, b"", 0),
        ];

        for (pattern, k, sequence, expected) in DATA {
            let re = GapRegex::preprocess(pattern, k).unwrap();
            assert_eq!(
                re.count_matches(sequence),
                expected,
                "expression: {}, sequence: {}",
                re.expression(),
                String::from_utf8_lossy(sequence)
            );
        }
    }

    #[test]
    fn fillers_are_ascii() {
        let re = GapRegex::preprocess(b"AG", 2).unwrap();
        assert_eq!(re.count_matches(b"ANG"), 1);
        assert_eq!(re.count_matches(b"A\x80G"), 0);
    }

    #[test]
    fn wide_gaps_compile() {
        let re = GapRegex::preprocess(b"ACGTACGTAC", 20_000).unwrap();
        assert_eq!(re.count_matches(b"ACGTACGTACACGT"), 1);

        assert_eq!(
            GapRegex::preprocess(b"AG", usize::MAX).err(),
            Some(SearchError::TooManyStates {
                length:  2,
                k:       usize::MAX,
                maximum: MAX_GAP_STATES,
            })
        );
        assert_eq!(GapRegex::preprocess(b"A", usize::MAX).unwrap().count_matches(b"AAT"), 2);
    }
}
