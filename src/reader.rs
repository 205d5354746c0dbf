//! Character stream readers
//!
//! `CharRead` is the pull interface the location tracker decorates: one
//! character of lookahead, single-character reads, and provided bulk
//! operations built on top of them. `StringReader` serves in-memory text and
//! `IoReader` decodes UTF-8 incrementally from any buffered byte source.

use std::io::{self, BufRead};

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "reader is closed")
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream is not valid UTF-8")
}

/// A reader that yields text one character at a time.
///
/// End of input is an ordinary `Ok(None)`, never an error. Implementors
/// supply `peek`, `read_char` and `close`; the bulk methods have default
/// implementations in terms of those and may be overridden where a faster
/// path exists.
pub trait CharRead {
    /// Look at the next character without consuming it
    fn peek(&mut self) -> io::Result<Option<char>>;

    /// Consume and return the next character
    fn read_char(&mut self) -> io::Result<Option<char>>;

    /// Release the underlying source.
    ///
    /// Closing an already-closed reader is a no-op.
    fn close(&mut self) -> io::Result<()>;

    /// Fill `buf` with characters, stopping early only at end of input.
    ///
    /// Returns the number of characters written; zero means the input is
    /// exhausted (or `buf` is empty).
    fn read(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_char()? {
                Some(ch) => {
                    buf[filled] = ch;
                    filled += 1;
                }
                None => break,
            }
        }
        Ok(filled)
    }

    /// Repeatedly `read` until `buf` is full or the input ends
    fn read_block(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        Ok(filled)
    }

    /// Read up to and including the next line terminator.
    ///
    /// The returned line excludes the terminator; `\n`, `\r\n` and a lone
    /// `\r` all end a line. A final line without a terminator is still
    /// returned, so `None` means the input was already exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.peek()?.is_none() {
            return Ok(None);
        }
        let mut line = String::new();
        while let Some(ch) = self.read_char()? {
            match ch {
                '\n' => break,
                '\r' => {
                    if self.peek()? == Some('\n') {
                        self.read_char()?;
                    }
                    break;
                }
                _ => line.push(ch),
            }
        }
        Ok(Some(line))
    }

    /// Read everything up to end of input into one string
    fn read_to_end(&mut self) -> io::Result<String> {
        let mut text = String::new();
        while let Some(ch) = self.read_char()? {
            text.push(ch);
        }
        Ok(text)
    }
}

impl<T: CharRead + ?Sized> CharRead for &mut T {
    fn peek(&mut self) -> io::Result<Option<char>> {
        (**self).peek()
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn read(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn read_block(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_block(buf)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        (**self).read_to_end()
    }
}

/// An in-memory character reader over decoded text.
///
/// Decoding happens once at construction. After `close`, every operation
/// including `peek` fails with an error naming the closed reader.
pub struct StringReader {
    chars: Vec<char>,
    pos: usize,
    closed: bool,
}

impl StringReader {
    /// Create a reader over the characters of `text`
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            closed: false,
        }
    }
}

impl CharRead for StringReader {
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(self.chars.get(self.pos).copied())
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.closed {
            return Err(closed_error());
        }
        match self.chars.get(self.pos).copied() {
            Some(ch) => {
                self.pos += 1;
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }

    fn read(&mut self, buf: &mut [char]) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error());
        }
        let available = self.chars.len() - self.pos;
        let n = buf.len().min(available);
        buf[..n].copy_from_slice(&self.chars[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn read_to_end(&mut self) -> io::Result<String> {
        if self.closed {
            return Err(closed_error());
        }
        let text: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        Ok(text)
    }
}

fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// A character reader decoding UTF-8 from a buffered byte source.
///
/// Bytes are pulled from the underlying buffer one character at a time, so
/// arbitrarily large inputs stream without being held in memory. Malformed
/// or truncated sequences surface as `InvalidData` errors.
pub struct IoReader<R: BufRead> {
    inner: R,
    peeked: Option<char>,
    closed: bool,
}

impl<R: BufRead> IoReader<R> {
    /// Wrap a buffered byte source
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
            closed: false,
        }
    }

    /// Consume the reader, returning the underlying source
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let buf = self.inner.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let byte = buf[0];
        self.inner.consume(1);
        Ok(Some(byte))
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        let width = match utf8_width(first) {
            Some(width) => width,
            None => return Err(invalid_utf8()),
        };
        if width == 1 {
            return Ok(Some(first as char));
        }
        let mut bytes = [first, 0, 0, 0];
        for i in 1..width {
            bytes[i] = self.read_byte()?.ok_or_else(invalid_utf8)?;
        }
        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(invalid_utf8()),
        }
    }
}

impl<R: BufRead> CharRead for IoReader<R> {
    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.closed {
            return Err(closed_error());
        }
        if self.peeked.is_none() {
            self.peeked = self.decode_char()?;
        }
        Ok(self.peeked)
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.closed {
            return Err(closed_error());
        }
        if let Some(ch) = self.peeked.take() {
            return Ok(Some(ch));
        }
        self.decode_char()
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        self.peeked = None;
        Ok(())
    }
}
