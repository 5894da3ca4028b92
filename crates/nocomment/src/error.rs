use thiserror::Error;

/// Failure while stripping byte input.
///
/// Text input cannot fail; only [`ByteStripper`](crate::ByteStripper) and
/// [`strip_bytes`](crate::strip_bytes) return this. Offsets are absolute byte
/// positions in the whole stream, not in the current chunk.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// A byte sequence that is not UTF-8.
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 {
        /// Offset of the first byte of the sequence.
        offset: usize,
    },
    /// The input ended in the middle of a multi-byte sequence.
    #[error("truncated UTF-8 sequence at byte {offset}")]
    TruncatedUtf8 {
        /// Offset of the first byte of the sequence.
        offset: usize,
    },
}
