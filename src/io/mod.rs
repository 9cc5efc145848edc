//! Byte-sink abstraction for console output.
//!
//! The parser only ever needs to push bytes toward the user: help text and
//! the occasional diagnostic line. The [`Write`] trait models that one-way
//! capability so the same parser runs against a UART, an RTT channel, or a
//! capture buffer in tests.

use core::str;

/// A byte sink.
///
/// Implementations report how many bytes they accepted; a short write is not
/// an error. The parser treats all sink output as best-effort and never lets
/// a sink failure change a parse outcome.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Write data to the sink
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write a string slice to the sink
    fn write_str(&mut self, text: &str) -> Result<usize, Self::Error> {
        self.write(text.as_bytes())
    }
}

/// A sink that discards everything written to it.
///
/// Useful when a caller wants a parse result but has no console attached,
/// for example while replaying stored command lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Null;

impl Write for Null {
    type Error = core::convert::Infallible;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A fixed-capacity capture sink.
///
/// Stores up to `N` bytes and silently drops the rest, mirroring how a small
/// transmit ring behaves when the host stops draining it. Handy for paging
/// help text into memory or asserting on console output in tests.
///
/// # Examples
///
/// ```rust
/// use libcli::io::{Buffer, Write};
///
/// let mut sink = Buffer::<64>::new();
/// sink.write_str("ready").unwrap();
/// assert_eq!(sink.as_str(), "ready");
/// ```
#[derive(Debug, Default)]
pub struct Buffer<const N: usize> {
    data: heapless::Vec<u8, N>,
}

impl<const N: usize> Buffer<N> {
    /// Create an empty capture buffer.
    pub const fn new() -> Self {
        Self {
            data: heapless::Vec::new(),
        }
    }

    /// The captured bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The captured bytes as text, or an empty string if the capture was
    /// truncated mid-character.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.data).unwrap_or("")
    }

    /// Number of captured bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Discard the captured bytes.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<const N: usize> Write for Buffer<N> {
    type Error = core::convert::Infallible;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let space = N - self.data.len();
        let take = buf.len().min(space);
        let _ = self.data.extend_from_slice(&buf[..take]);
        Ok(take)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
