//! Zero-copy character windows over immutable text
//!
//! A window is a value of (shared source, offset, length). Consuming
//! operations rebind the offset and length in place; the text itself is
//! shared and never copied by windowing operations. Callers drive a scan
//! through one `mut` binding and may clone a window at any point to keep the
//! prior view, since a clone only bumps the source reference count.

use std::fmt;
use std::sync::Arc;

use crate::error::{ScanError, ScanResult};
use crate::matcher::Matcher;

/// Characters shown by `Display` before the content is truncated
const EXCERPT_LIMIT: usize = 60;

/// An immutable view over a span of characters in shared text.
///
/// All coordinates are in character units: construction performs the single
/// decode pass from `&str`, and every operation afterwards indexes characters
/// directly. Content-dependent misses (absent delimiters, failed literal
/// matches) are ordinary zero/`None`/`false` results; only out-of-domain
/// numeric arguments produce errors.
#[derive(Clone)]
pub struct Window {
    source: Arc<[char]>,
    offset: usize,
    len: usize,
}

fn check_offset(offset: usize, len: usize) -> ScanResult<()> {
    if offset > len {
        Err(ScanError::OffsetOutOfBounds { offset, len })
    } else {
        Ok(())
    }
}

fn check_range(offset: usize, count: usize, len: usize) -> ScanResult<()> {
    if offset > len || count > len - offset {
        Err(ScanError::RangeOutOfBounds { offset, count, len })
    } else {
        Ok(())
    }
}

impl Window {
    /// Create a window over all of `text`
    pub fn new(text: &str) -> Self {
        let source: Vec<char> = text.chars().collect();
        let len = source.len();
        Self {
            source: source.into(),
            offset: 0,
            len,
        }
    }

    /// Create a window from `offset` to the end of `text`.
    ///
    /// The offset may equal the character count, giving an empty window.
    pub fn with_offset(text: &str, offset: usize) -> ScanResult<Self> {
        let source: Vec<char> = text.chars().collect();
        check_offset(offset, source.len())?;
        let len = source.len() - offset;
        Ok(Self {
            source: source.into(),
            offset,
            len,
        })
    }

    /// Create a window over `count` characters of `text` starting at `offset`
    pub fn with_range(text: &str, offset: usize, count: usize) -> ScanResult<Self> {
        let source: Vec<char> = text.chars().collect();
        check_range(offset, count, source.len())?;
        Ok(Self {
            source: source.into(),
            offset,
            len: count,
        })
    }

    /// Number of characters in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window contains no characters
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the window's first character within the source
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Checked access to the character at relative index `index`.
    ///
    /// Access is always bounds-checked; out-of-range indices return `None`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_chars().get(index).copied()
    }

    /// The viewed characters as a slice, without copying
    pub fn as_chars(&self) -> &[char] {
        &self.source[self.offset..self.offset + self.len]
    }

    /// Iterate over the viewed characters in order.
    ///
    /// Non-destructive and restartable; calling it again yields the same
    /// sequence.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_chars().iter().copied()
    }

    /// Copy the whole viewed content into a new string
    pub fn text(&self) -> String {
        self.chars().collect()
    }

    // --- Consume family -------------------------------------------------

    /// Consume the characters the matcher selects at the front.
    ///
    /// The selected text is appended to `sink` when one is given; a `None`
    /// sink discards the text while the window still advances. Returns the
    /// number of characters consumed.
    pub fn consume_match(&mut self, sink: Option<&mut String>, matcher: &Matcher<'_>) -> usize {
        let count = matcher.match_front(self.as_chars());
        self.take_front(sink, count)
    }

    /// Consume the entire remaining window, returning its prior length
    pub fn consume(&mut self, sink: Option<&mut String>) -> usize {
        self.consume_match(sink, &Matcher::Count(self.len))
    }

    /// Consume exactly `count` characters, or nothing.
    ///
    /// A count larger than the window consumes nothing and returns 0; the
    /// consumed amount is never strictly between 0 and `count`.
    pub fn consume_count(&mut self, sink: Option<&mut String>, count: usize) -> usize {
        self.consume_match(sink, &Matcher::Count(count))
    }

    /// Consume everything before the first occurrence of `delimiter`.
    ///
    /// The delimiter itself stays in the window. An absent delimiter, or one
    /// sitting at the front, consumes nothing.
    pub fn consume_until(&mut self, sink: Option<&mut String>, delimiter: char) -> usize {
        self.consume_match(sink, &Matcher::Until(delimiter))
    }

    /// Consume everything before the first occurrence of any listed delimiter
    pub fn consume_until_any(&mut self, sink: Option<&mut String>, delimiters: &[char]) -> usize {
        self.consume_match(sink, &Matcher::UntilAny(delimiters))
    }

    /// Consume the maximal prefix satisfying `predicate`
    pub fn consume_while<F>(&mut self, sink: Option<&mut String>, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        self.consume_match(sink, &Matcher::While(&predicate))
    }

    /// Consume `literal` if the window starts with it, otherwise nothing
    pub fn consume_literal(&mut self, sink: Option<&mut String>, literal: &str) -> usize {
        self.consume_match(sink, &Matcher::Literal(literal))
    }

    // --- ConsumeEnd family ----------------------------------------------

    /// Consume the characters the matcher selects at the back.
    ///
    /// The offset never moves; only the length shrinks. The sink receives the
    /// consumed suffix in natural left-to-right order.
    pub fn consume_end_match(&mut self, sink: Option<&mut String>, matcher: &Matcher<'_>) -> usize {
        let count = matcher.match_back(self.as_chars());
        self.take_back(sink, count)
    }

    /// Consume the entire remaining window from the back
    pub fn consume_end(&mut self, sink: Option<&mut String>) -> usize {
        self.consume_end_match(sink, &Matcher::Count(self.len))
    }

    /// Consume exactly `count` trailing characters, or nothing
    pub fn consume_end_count(&mut self, sink: Option<&mut String>, count: usize) -> usize {
        self.consume_end_match(sink, &Matcher::Count(count))
    }

    /// Consume everything strictly after the last occurrence of `delimiter`
    pub fn consume_end_until(&mut self, sink: Option<&mut String>, delimiter: char) -> usize {
        self.consume_end_match(sink, &Matcher::Until(delimiter))
    }

    /// Consume everything strictly after the last occurrence of any listed delimiter
    pub fn consume_end_until_any(
        &mut self,
        sink: Option<&mut String>,
        delimiters: &[char],
    ) -> usize {
        self.consume_end_match(sink, &Matcher::UntilAny(delimiters))
    }

    /// Consume the maximal suffix satisfying `predicate`
    pub fn consume_end_while<F>(&mut self, sink: Option<&mut String>, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        self.consume_end_match(sink, &Matcher::While(&predicate))
    }

    /// Consume `literal` if the window ends with it, otherwise nothing
    pub fn consume_end_literal(&mut self, sink: Option<&mut String>, literal: &str) -> usize {
        self.consume_end_match(sink, &Matcher::Literal(literal))
    }

    // --- Look family ----------------------------------------------------

    /// Copy the whole window into the sink without advancing
    pub fn look(&self, sink: Option<&mut String>) -> usize {
        self.peek_front(sink, self.len)
    }

    /// Copy up to `max` leading characters without advancing.
    ///
    /// Over-requesting is not an error; the count is silently clamped to the
    /// available length.
    pub fn look_count(&self, sink: Option<&mut String>, max: usize) -> usize {
        self.peek_front(sink, max.min(self.len))
    }

    /// Copy the whole window into the sink without shrinking it
    pub fn look_end(&self, sink: Option<&mut String>) -> usize {
        self.peek_back(sink, self.len)
    }

    /// Copy up to `max` trailing characters without shrinking, clamped
    pub fn look_end_count(&self, sink: Option<&mut String>, max: usize) -> usize {
        self.peek_back(sink, max.min(self.len))
    }

    // --- Trim -----------------------------------------------------------

    /// Remove the maximal run of leading whitespace, returning the count removed
    pub fn trim_start(&mut self) -> usize {
        self.consume_while(None, char::is_whitespace)
    }

    /// Remove the maximal run of trailing whitespace, returning the count removed
    pub fn trim_end(&mut self) -> usize {
        self.consume_end_while(None, char::is_whitespace)
    }

    /// Trim both sides, returning the total count removed
    pub fn trim(&mut self) -> usize {
        self.trim_start() + self.trim_end()
    }

    // --- Matching -------------------------------------------------------

    /// Returns true if the window begins with `prefix`.
    ///
    /// A prefix longer than the window is false, not an error; the empty
    /// prefix is always true.
    pub fn starts_with(&self, prefix: &str) -> bool {
        prefix.is_empty() || Matcher::Literal(prefix).match_front(self.as_chars()) > 0
    }

    /// Returns true if the window ends with `suffix`
    pub fn ends_with(&self, suffix: &str) -> bool {
        suffix.is_empty() || Matcher::Literal(suffix).match_back(self.as_chars()) > 0
    }

    // --- Searching ------------------------------------------------------

    /// Relative index of the first occurrence of `ch`
    pub fn find(&self, ch: char) -> Option<usize> {
        self.as_chars().iter().position(|c| *c == ch)
    }

    /// Relative index of the first occurrence of any listed character
    pub fn find_any(&self, set: &[char]) -> Option<usize> {
        self.as_chars().iter().position(|c| set.contains(c))
    }

    /// Relative index of the first character satisfying `predicate`
    pub fn find_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(char) -> bool,
    {
        self.as_chars().iter().position(|c| predicate(*c))
    }

    /// Relative index of the last occurrence of `ch`
    pub fn rfind(&self, ch: char) -> Option<usize> {
        self.as_chars().iter().rposition(|c| *c == ch)
    }

    /// Relative index of the last occurrence of any listed character
    pub fn rfind_any(&self, set: &[char]) -> Option<usize> {
        self.as_chars().iter().rposition(|c| set.contains(c))
    }

    /// Relative index of the last character satisfying `predicate`
    pub fn rfind_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(char) -> bool,
    {
        self.as_chars().iter().rposition(|c| predicate(*c))
    }

    // --- Substring / Subwindow ------------------------------------------

    /// Detached copy of `count` characters starting at relative `offset`
    pub fn substring(&self, offset: usize, count: usize) -> ScanResult<String> {
        check_range(offset, count, self.len)?;
        Ok(self.as_chars()[offset..offset + count].iter().collect())
    }

    /// Detached copy from relative `offset` to the end of the window
    pub fn substring_from(&self, offset: usize) -> ScanResult<String> {
        check_offset(offset, self.len)?;
        Ok(self.as_chars()[offset..].iter().collect())
    }

    /// A new window over `count` characters starting at relative `offset`.
    ///
    /// The result shares the same source; no text is copied.
    pub fn subwindow(&self, offset: usize, count: usize) -> ScanResult<Self> {
        check_range(offset, count, self.len)?;
        Ok(Self {
            source: Arc::clone(&self.source),
            offset: self.offset + offset,
            len: count,
        })
    }

    /// A new window from relative `offset` to the end, sharing the source
    pub fn subwindow_from(&self, offset: usize) -> ScanResult<Self> {
        check_offset(offset, self.len)?;
        Ok(Self {
            source: Arc::clone(&self.source),
            offset: self.offset + offset,
            len: self.len - offset,
        })
    }

    // --- Internals ------------------------------------------------------

    fn take_front(&mut self, sink: Option<&mut String>, count: usize) -> usize {
        if let Some(out) = sink {
            out.extend(&self.source[self.offset..self.offset + count]);
        }
        self.offset += count;
        self.len -= count;
        count
    }

    fn take_back(&mut self, sink: Option<&mut String>, count: usize) -> usize {
        let end = self.offset + self.len;
        if let Some(out) = sink {
            out.extend(&self.source[end - count..end]);
        }
        self.len -= count;
        count
    }

    fn peek_front(&self, sink: Option<&mut String>, count: usize) -> usize {
        if let Some(out) = sink {
            out.extend(&self.source[self.offset..self.offset + count]);
        }
        count
    }

    fn peek_back(&self, sink: Option<&mut String>, count: usize) -> usize {
        let end = self.offset + self.len;
        if let Some(out) = sink {
            out.extend(&self.source[end - count..end]);
        }
        count
    }
}

impl From<&str> for Window {
    fn from(text: &str) -> Self {
        Window::new(text)
    }
}

impl From<String> for Window {
    fn from(text: String) -> Self {
        Window::new(&text)
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_chars().iter().copied()
    }
}

impl fmt::Display for Window {
    /// Renders a truncated excerpt; content beyond the limit is replaced by
    /// a visible `...` marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len <= EXCERPT_LIMIT {
            let text: String = self.chars().collect();
            f.write_str(&text)
        } else {
            let excerpt: String = self.chars().take(EXCERPT_LIMIT).collect();
            write!(f, "{}...", excerpt)
        }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("text", &self.to_string())
            .finish()
    }
}
