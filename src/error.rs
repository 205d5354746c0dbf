//! Error types for the textscan primitives
//!
//! Only argument-domain violations are surfaced as errors. Content-dependent
//! conditions such as a missing delimiter, a predicate that fails at the first
//! character, or a literal that is not a prefix are ordinary return values
//! (zero counts, `None` indices, `false`), so callers can probe speculatively
//! without error-driven control flow. Failures raised by a wrapped character
//! source are `std::io::Error` values and propagate unmodified.

use thiserror::Error;

/// Errors raised when a numeric argument falls outside its valid domain.
///
/// There are no null-reference or negative-count variants: required
/// references cannot be absent in safe Rust, and counts are unsigned, so
/// those cases are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// An offset pointed past the end of the text or window.
    #[error("offset {offset} out of bounds for length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// An (offset, count) pair described a range that does not fit.
    #[error("range of {count} at offset {offset} out of bounds for length {len}")]
    RangeOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// Line and column coordinates are 1-based; zero is rejected.
    #[error("location {line}:{column} is not 1-based")]
    InvalidCoordinates { line: usize, column: usize },
}

/// Result type alias for textscan operations
pub type ScanResult<T> = Result<T, ScanError>;
