//! Line and column tracking
//!
//! Provides the position value folded forward by the tracking reader as
//! characters pass through it, for error reporting and diagnostics in
//! higher-level parsers.

use std::fmt;

/// A 1-based line and column position in a character stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Location {
    /// Create a new location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a location at the start of a stream
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Advance the location by one character.
    ///
    /// A `'\n'` moves to the start of the next line; every other character,
    /// `'\r'` included, advances the column by one.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advance the location over every character of `text` in order
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }

    /// Move to the start of the next line.
    ///
    /// Used when a whole line was consumed but its terminator is not
    /// individually observable.
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
