//! Location tracking over a character reader
//!
//! `TrackingReader` decorates any `CharRead` and folds every character it
//! hands out into a 1-based line/column location. The decorator adds no
//! buffering of its own; each call forwards to the inner reader and then
//! updates the location from what actually came back.

use std::io;

use crate::error::{ScanError, ScanResult};
use crate::location::Location;
use crate::reader::CharRead;

/// A reader decorator that reports the location of the next character.
///
/// The location starts at 1:1 and only moves for characters that were
/// actually delivered; failed reads leave it untouched. `peek` never moves
/// it either. Constructed with [`TrackingReader::new`] the decorator owns
/// the inner reader and closes it on `close` or drop; constructed with
/// [`TrackingReader::leave_open`] the inner reader is left for the caller.
pub struct TrackingReader<R: CharRead> {
    inner: R,
    location: Location,
    owns_inner: bool,
    closed: bool,
}

impl<R: CharRead> TrackingReader<R> {
    /// Decorate `inner`, taking responsibility for closing it
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            location: Location::start(),
            owns_inner: true,
            closed: false,
        }
    }

    /// Decorate `inner` without taking responsibility for closing it
    pub fn leave_open(inner: R) -> Self {
        Self {
            inner,
            location: Location::start(),
            owns_inner: false,
            closed: false,
        }
    }

    /// Location of the next character the reader will deliver
    pub fn location(&self) -> Location {
        self.location
    }

    /// Re-seat the location, for sources that splice streams together.
    ///
    /// Both coordinates are validated before anything changes; zero for
    /// either one is rejected since the coordinate system is 1-based.
    pub fn synchronize(&mut self, line: usize, column: usize) -> ScanResult<()> {
        if line < 1 || column < 1 {
            return Err(ScanError::InvalidCoordinates { line, column });
        }
        self.location = Location::new(line, column);
        Ok(())
    }
}

impl<R: CharRead> CharRead for TrackingReader<R> {
    fn peek(&mut self) -> io::Result<Option<char>> {
        self.inner.peek()
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let ch = self.inner.read_char()?;
        if let Some(ch) = ch {
            self.location.advance(ch);
        }
        Ok(ch)
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.owns_inner {
            self.inner.close()?;
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for ch in &buf[..n] {
            self.location.advance(*ch);
        }
        Ok(n)
    }

    fn read_block(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let n = self.inner.read_block(buf)?;
        for ch in &buf[..n] {
            self.location.advance(*ch);
        }
        Ok(n)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.inner.read_line()?;
        if let Some(text) = &line {
            // The terminator is not part of the returned text, so the fold
            // walks the content and takes the line transition as one step.
            // A final line without a terminator still lands on the next
            // line's start.
            self.location.advance_str(text);
            self.location.next_line();
        }
        Ok(line)
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        let text = self.inner.read_to_end()?;
        self.location.advance_str(&text);
        Ok(text)
    }
}

impl<R: CharRead> Drop for TrackingReader<R> {
    fn drop(&mut self) {
        if self.owns_inner && !self.closed {
            let _ = self.inner.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::StringReader;

    #[test]
    fn test_starts_at_one_one() {
        let r = TrackingReader::new(StringReader::new("abc"));
        assert_eq!(r.location(), Location::new(1, 1));
    }

    #[test]
    fn test_read_char_advances_column() {
        let mut r = TrackingReader::new(StringReader::new("ab"));
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(1, 2));
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(1, 3));

        // End of input moves nothing.
        assert_eq!(r.read_char().unwrap(), None);
        assert_eq!(r.location(), Location::new(1, 3));
    }

    #[test]
    fn test_newline_starts_next_line() {
        let mut r = TrackingReader::new(StringReader::new("a\nb"));
        r.read_char().unwrap();
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(2, 1));
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(2, 2));
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut r = TrackingReader::new(StringReader::new("a\r\nb"));
        r.read_char().unwrap();
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(1, 3));
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(2, 1));
    }

    #[test]
    fn test_peek_leaves_location() {
        let mut r = TrackingReader::new(StringReader::new("\n"));
        assert_eq!(r.peek().unwrap(), Some('\n'));
        assert_eq!(r.location(), Location::new(1, 1));
    }

    #[test]
    fn test_read_folds_buffer_contents() {
        let mut r = TrackingReader::new(StringReader::new("ab\ncd"));
        let mut buf = ['\0'; 4];
        assert_eq!(r.read(&mut buf).unwrap(), 4);
        assert_eq!(r.location(), Location::new(2, 2));
    }

    #[test]
    fn test_read_block_folds_buffer_contents() {
        let mut r = TrackingReader::new(StringReader::new("x\ny\nz"));
        let mut buf = ['\0'; 8];
        assert_eq!(r.read_block(&mut buf).unwrap(), 5);
        assert_eq!(r.location(), Location::new(3, 2));
    }

    #[test]
    fn test_read_to_end_folds_everything() {
        let mut r = TrackingReader::new(StringReader::new("a\nb\nc"));
        assert_eq!(r.read_to_end().unwrap(), "a\nb\nc");
        assert_eq!(r.location(), Location::new(3, 2));
    }

    #[test]
    fn test_read_line_lands_on_next_line_start() {
        let mut r = TrackingReader::new(StringReader::new("ab\ncd"));
        assert_eq!(r.read_line().unwrap(), Some("ab".to_string()));
        assert_eq!(r.location(), Location::new(2, 1));

        // The last line has no terminator yet still takes the transition.
        assert_eq!(r.read_line().unwrap(), Some("cd".to_string()));
        assert_eq!(r.location(), Location::new(3, 1));

        assert_eq!(r.read_line().unwrap(), None);
        assert_eq!(r.location(), Location::new(3, 1));
    }

    #[test]
    fn test_read_line_crlf() {
        let mut r = TrackingReader::new(StringReader::new("ab\r\ncd\r\n"));
        r.read_line().unwrap();
        assert_eq!(r.location(), Location::new(2, 1));
        r.read_line().unwrap();
        assert_eq!(r.location(), Location::new(3, 1));
    }

    #[test]
    fn test_synchronize() {
        let mut r = TrackingReader::new(StringReader::new("x"));
        r.synchronize(10, 20).unwrap();
        assert_eq!(r.location(), Location::new(10, 20));
        r.read_char().unwrap();
        assert_eq!(r.location(), Location::new(10, 21));
    }

    #[test]
    fn test_synchronize_rejects_zero_coordinates() {
        let mut r = TrackingReader::new(StringReader::new("x"));
        r.read_char().unwrap();
        assert_eq!(
            r.synchronize(0, 1),
            Err(ScanError::InvalidCoordinates { line: 0, column: 1 })
        );
        assert_eq!(
            r.synchronize(1, 0),
            Err(ScanError::InvalidCoordinates { line: 1, column: 0 })
        );
        // The rejected calls changed nothing.
        assert_eq!(r.location(), Location::new(1, 2));
    }

    #[test]
    fn test_failed_read_leaves_location() {
        let mut inner = StringReader::new("abc");
        inner.close().unwrap();
        let mut r = TrackingReader::new(inner);
        assert!(r.read_char().is_err());
        assert!(r.read_to_end().is_err());
        assert_eq!(r.location(), Location::new(1, 1));
    }

    #[test]
    fn test_close_closes_owned_inner() {
        let mut inner = StringReader::new("abc");
        {
            let mut r = TrackingReader::new(&mut inner);
            assert_eq!(r.read_char().unwrap(), Some('a'));
            r.close().unwrap();
            r.close().unwrap();
        }
        assert!(inner.read_char().is_err());
    }

    #[test]
    fn test_drop_closes_owned_inner() {
        let mut inner = StringReader::new("abc");
        {
            let mut r = TrackingReader::new(&mut inner);
            r.read_char().unwrap();
        }
        assert!(inner.read_char().is_err());
    }

    #[test]
    fn test_leave_open_preserves_inner() {
        let mut inner = StringReader::new("abc");
        {
            let mut r = TrackingReader::leave_open(&mut inner);
            assert_eq!(r.read_char().unwrap(), Some('a'));
            r.close().unwrap();
        }
        assert_eq!(inner.read_char().unwrap(), Some('b'));
    }

    #[test]
    fn test_read_after_owned_close_errors() {
        let mut r = TrackingReader::new(StringReader::new("abc"));
        r.close().unwrap();
        assert!(r.read_char().is_err());
        assert_eq!(r.location(), Location::new(1, 1));
    }
}
