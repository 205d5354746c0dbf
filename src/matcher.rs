//! Match-length criteria for window scans
//!
//! Every consuming operation on a window answers the same question: how many
//! characters does the criterion select at one end of the view? `Matcher`
//! expresses each criterion once, so the scan logic is not duplicated across
//! the count, delimiter, set, predicate and literal variants.

use std::fmt;

/// A criterion selecting a run of characters at one end of a window.
///
/// A result of zero always means "select nothing": a count or literal that
/// does not fit, a delimiter that is absent or sits directly at the scanned
/// end, or a predicate that fails immediately all report zero rather than an
/// error.
pub enum Matcher<'a> {
    /// Exactly this many characters, or nothing if fewer are available.
    Count(usize),
    /// Everything before the nearest occurrence of the delimiter; the
    /// delimiter itself is never selected. Nothing if it is absent.
    Until(char),
    /// Everything before the nearest occurrence of any listed delimiter.
    /// An empty list never matches.
    UntilAny(&'a [char]),
    /// The maximal run of characters satisfying the predicate.
    While(&'a dyn Fn(char) -> bool),
    /// The literal itself when aligned at the scanned end, or nothing.
    Literal(&'a str),
}

impl Matcher<'_> {
    /// Number of characters the criterion selects at the front of `chars`
    pub fn match_front(&self, chars: &[char]) -> usize {
        match self {
            Matcher::Count(n) => {
                if *n <= chars.len() {
                    *n
                } else {
                    0
                }
            }
            Matcher::Until(delimiter) => {
                chars.iter().position(|c| c == delimiter).unwrap_or(0)
            }
            Matcher::UntilAny(delimiters) => {
                chars.iter().position(|c| delimiters.contains(c)).unwrap_or(0)
            }
            Matcher::While(predicate) => {
                chars.iter().copied().take_while(|&c| predicate(c)).count()
            }
            Matcher::Literal(literal) => {
                let mut matched = 0;
                for ch in literal.chars() {
                    match chars.get(matched) {
                        Some(&c) if c == ch => matched += 1,
                        _ => return 0,
                    }
                }
                matched
            }
        }
    }

    /// Number of characters the criterion selects at the back of `chars`.
    ///
    /// Delimiter variants scan for the nearest occurrence from the end, so
    /// the selection covers everything strictly after the last occurrence.
    pub fn match_back(&self, chars: &[char]) -> usize {
        match self {
            Matcher::Count(n) => {
                if *n <= chars.len() {
                    *n
                } else {
                    0
                }
            }
            Matcher::Until(delimiter) => match chars.iter().rposition(|c| c == delimiter) {
                Some(index) => chars.len() - 1 - index,
                None => 0,
            },
            Matcher::UntilAny(delimiters) => {
                match chars.iter().rposition(|c| delimiters.contains(c)) {
                    Some(index) => chars.len() - 1 - index,
                    None => 0,
                }
            }
            Matcher::While(predicate) => chars
                .iter()
                .rev()
                .copied()
                .take_while(|&c| predicate(c))
                .count(),
            Matcher::Literal(literal) => {
                let count = literal.chars().count();
                if count > chars.len() {
                    return 0;
                }
                let tail = &chars[chars.len() - count..];
                if tail.iter().copied().eq(literal.chars()) {
                    count
                } else {
                    0
                }
            }
        }
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Count(n) => f.debug_tuple("Count").field(n).finish(),
            Matcher::Until(c) => f.debug_tuple("Until").field(c).finish(),
            Matcher::UntilAny(set) => f.debug_tuple("UntilAny").field(set).finish(),
            Matcher::While(_) => f.write_str("While(..)"),
            Matcher::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
        }
    }
}
