//! Text scanning primitives
//!
//! This crate provides the low-level building blocks for hand-written lexers
//! and parsers: zero-copy character windows over in-memory text, composable
//! front/back matchers, character stream readers, and a decorator that tracks
//! the line/column location of a stream as it is consumed.

pub mod error;
pub mod location;
pub mod matcher;
pub mod reader;
pub mod tracking;
pub mod window;

// Re-export core types for convenience
pub use error::{ScanError, ScanResult};
pub use location::Location;
pub use matcher::Matcher;
pub use reader::{CharRead, IoReader, StringReader};
pub use tracking::TrackingReader;
pub use window::Window;
