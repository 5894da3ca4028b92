//! Byte driver.
//!
//! [`ByteStripper`] accepts raw UTF-8 chunks as they come off a file or a
//! socket. Chunk boundaries may fall inside a multi-byte character; the
//! incomplete tail (at most three bytes) is carried into the next chunk.
//!
//! Decoding uses `bstr::decode_utf8`, which reports invalid input one
//! maximal invalid subpart at a time. With
//! [`StripOptions::replace_invalid_utf8`] each such subpart becomes a single
//! U+FFFD, so the result matches stripping `String::from_utf8_lossy(input)`.

use alloc::{string::String, vec::Vec};

use crate::{error::StripError, options::StripOptions, stripper::CommentStripper};

/// Strips comments from UTF-8 bytes in one call.
///
/// # Errors
///
/// Returns [`StripError::InvalidUtf8`] or [`StripError::TruncatedUtf8`] for
/// malformed input unless [`StripOptions::replace_invalid_utf8`] is set.
///
/// # Examples
///
/// ```rust
/// use nocomment::{strip_bytes, StripError, StripOptions};
///
/// let out = strip_bytes(b"x = 1; // one\n", StripOptions::default()).unwrap();
/// assert_eq!(out, "x = 1; \n");
///
/// let err = strip_bytes(b"ab\xFFcd", StripOptions::default()).unwrap_err();
/// assert_eq!(err, StripError::InvalidUtf8 { offset: 2 });
/// ```
pub fn strip_bytes(input: &[u8], options: StripOptions) -> Result<String, StripError> {
    let mut stripper = ByteStripper::new(options);
    let mut out = String::with_capacity(input.len());
    stripper.feed_into(input, &mut out)?;
    stripper.finish_into(&mut out)?;
    Ok(out)
}

/// Incremental comment stripper over UTF-8 bytes.
///
/// Once a chunk fails to decode the stripper is poisoned: that call and every
/// later one return the same error.
#[derive(Debug, Clone, Default)]
pub struct ByteStripper {
    inner: CommentStripper,
    /// Start of a multi-byte sequence cut off by the end of the last chunk.
    carry: Vec<u8>,
    /// Absolute offset of the first byte not yet decoded.
    offset: usize,
    error: Option<StripError>,
}

impl ByteStripper {
    /// Creates a byte stripper with the given options.
    #[must_use]
    pub fn new(options: StripOptions) -> Self {
        Self {
            inner: CommentStripper::new(options),
            carry: Vec::with_capacity(4),
            offset: 0,
            error: None,
        }
    }

    /// Strips one chunk and returns the output that became final.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::InvalidUtf8`] for malformed input unless
    /// [`StripOptions::replace_invalid_utf8`] is set.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<String, StripError> {
        let mut out = String::with_capacity(chunk.len());
        self.feed_into(chunk, &mut out)?;
        Ok(out)
    }

    /// Like [`feed`](Self::feed), but appends to a caller-owned buffer.
    ///
    /// On error, `out` still holds the output of every character decoded
    /// before the bad sequence.
    ///
    /// # Errors
    ///
    /// See [`feed`](Self::feed).
    pub fn feed_into(&mut self, chunk: &[u8], out: &mut String) -> Result<(), StripError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let result = if self.carry.is_empty() {
            self.decode(chunk, out)
        } else {
            let mut joined = core::mem::take(&mut self.carry);
            joined.extend_from_slice(chunk);
            self.decode(&joined, out)
        };

        if let Err(err) = result {
            tracing::debug!(%err, "byte input rejected");
            self.error = Some(err);
        }
        result
    }

    /// Ends the input and returns whatever the scanner was still holding.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::TruncatedUtf8`] if the input stopped inside a
    /// multi-byte character, or the error a previous chunk failed with.
    pub fn finish(self) -> Result<String, StripError> {
        let mut out = String::new();
        self.finish_into(&mut out)?;
        Ok(out)
    }

    /// Like [`finish`](Self::finish), but appends to a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// See [`finish`](Self::finish).
    pub fn finish_into(mut self, out: &mut String) -> Result<(), StripError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        if !self.carry.is_empty() {
            if !self.inner.options().replace_invalid_utf8 {
                let err = StripError::TruncatedUtf8 {
                    offset: self.offset,
                };
                tracing::debug!(%err, "byte input rejected");
                return Err(err);
            }
            self.inner.push_char(char::REPLACEMENT_CHARACTER, out);
        }

        self.inner.finish_into(out);
        Ok(())
    }

    /// Number of bytes decoded so far, excluding any carried partial
    /// character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying text stripper.
    #[must_use]
    pub fn text(&self) -> &CommentStripper {
        &self.inner
    }

    fn decode(&mut self, bytes: &[u8], out: &mut String) -> Result<(), StripError> {
        let mut rest = bytes;
        while !rest.is_empty() {
            let (ch, len) = bstr::decode_utf8(rest);
            match ch {
                Some(c) => self.inner.push_char(c, out),
                None if is_incomplete(rest, len) => {
                    self.carry.extend_from_slice(rest);
                    return Ok(());
                }
                None if self.inner.options().replace_invalid_utf8 => {
                    self.inner.push_char(char::REPLACEMENT_CHARACTER, out);
                }
                None => {
                    return Err(StripError::InvalidUtf8 {
                        offset: self.offset,
                    });
                }
            }
            self.offset += len;
            rest = &rest[len..];
        }
        Ok(())
    }
}

/// `true` if `rest` is a valid but unfinished multi-byte sequence that the
/// next chunk may complete.
fn is_incomplete(rest: &[u8], invalid_len: usize) -> bool {
    invalid_len == rest.len() && rest.len() < sequence_len(rest[0])
}

/// Length of the sequence announced by a leading byte; 1 for anything that
/// cannot start a multi-byte sequence.
fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}
