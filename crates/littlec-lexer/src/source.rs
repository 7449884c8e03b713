//! Character sources feeding the lexer
//!
//! A source yields one character at a time and `None` once exhausted.

use std::io::{self, BufReader, Bytes, Read};

/// Yields the characters of one input
pub trait CharSource {
    /// Returns the next character, or `None` at end of input
    fn next_char(&mut self) -> Option<char>;
}

/// Characters of an in-memory string
#[derive(Debug, Clone)]
pub struct StrSource<'src> {
    chars: std::str::Chars<'src>,
}

impl<'src> StrSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Streams bytes from a reader, one byte per character.
///
/// Bytes above 0x7F become the Latin-1 character with the same value.
/// A read error ends the stream; it is kept for [`ReadSource::take_error`].
#[derive(Debug)]
pub struct ReadSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
    error: Option<io::Error>,
    done: bool,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            error: None,
            done: false,
        }
    }

    /// The read error that ended the stream, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    fn next_char(&mut self) -> Option<char> {
        if self.done {
            return None;
        }

        match self.bytes.next() {
            Some(Ok(byte)) => Some(char::from(byte)),
            Some(Err(err)) => {
                tracing::debug!(error = %err, "read failed, ending input");
                self.error = Some(err);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            } else {
                self.served = true;
                buf[..2].copy_from_slice(b"ab");
                Ok(2)
            }
        }
    }

    fn drain(source: &mut impl CharSource) -> String {
        std::iter::from_fn(|| source.next_char()).collect()
    }

    #[test]
    fn test_str_source() {
        let mut source = StrSource::new("x = 1;");
        assert_eq!(drain(&mut source), "x = 1;");
        assert_eq!(source.next_char(), None);
    }

    #[test]
    fn test_read_source_maps_bytes_to_chars() {
        let mut source = ReadSource::new(&b"if\xe9"[..]);
        assert_eq!(drain(&mut source), "if\u{e9}");
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_read_error_ends_stream() {
        let mut source = ReadSource::new(FailingReader { served: false });
        assert_eq!(drain(&mut source), "ab");
        assert_eq!(source.next_char(), None);

        let err = source.take_error().expect("error should be kept");
        assert_eq!(err.to_string(), "disk on fire");
    }
}
