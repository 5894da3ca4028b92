//! Text drivers.
//!
//! [`strip_c_style_comments`] strips a whole string in one call.
//! [`CommentStripper`] does the same fold incrementally, so text can be
//! stripped as it arrives in chunks:
//!
//! ```rust
//! use nocomment::{CommentStripper, StripOptions};
//!
//! let mut stripper = CommentStripper::new(StripOptions::default());
//! let mut out = String::new();
//! for chunk in ["let x = 1; /", "/ note\nlet y = \"/", "/ kept\";"] {
//!     out.push_str(&stripper.feed(chunk));
//! }
//! out.push_str(&stripper.finish());
//! assert_eq!(out, "let x = 1; \nlet y = \"// kept\";");
//! ```

use alloc::string::String;

use crate::{
    options::StripOptions,
    scanner::{Emit, ScanState},
};

/// Removes `//` and `/* */` comments from `input`, leaving double-quoted
/// strings untouched.
///
/// Never fails: unterminated quotes and comments degrade gracefully. A
/// quote left open runs to the end of its line, a block comment left open
/// swallows the rest of the input, and a trailing `/` is kept.
///
/// # Examples
///
/// ```rust
/// use nocomment::strip_c_style_comments;
///
/// assert_eq!(strip_c_style_comments("a // c\nb"), "a \nb");
/// assert_eq!(strip_c_style_comments("a/*x\ny*/b"), "ab");
/// assert_eq!(strip_c_style_comments(r#"s = "/* kept */";"#), r#"s = "/* kept */";"#);
/// ```
#[must_use]
pub fn strip_c_style_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut stripper = CommentStripper::default();
    stripper.feed_into(input, &mut out);
    stripper.finish_into(&mut out);

    tracing::trace!(
        input_size = input.len(),
        output_size = out.len(),
        "stripped comments"
    );

    out
}

/// Incremental comment stripper.
///
/// Feed text in any number of chunks; each call returns the part of the
/// output that is already final. A `/` at the end of a chunk is held until
/// the next chunk (or [`finish`](Self::finish)) shows what follows it, so the
/// concatenated output never depends on where the chunks were split.
#[derive(Debug, Clone, Default)]
pub struct CommentStripper {
    state: ScanState,
    options: StripOptions,
    /// Characters seen so far.
    consumed: usize,
    /// Characters released so far. Never exceeds `consumed`.
    #[cfg(any(test, feature = "fuzzing"))]
    emitted: usize,
}

impl CommentStripper {
    /// Creates a stripper with the given options.
    #[must_use]
    pub fn new(options: StripOptions) -> Self {
        Self {
            state: ScanState::Normal,
            options,
            consumed: 0,
            #[cfg(any(test, feature = "fuzzing"))]
            emitted: 0,
        }
    }

    /// Strips one chunk and returns the output that became final.
    pub fn feed(&mut self, chunk: &str) -> String {
        let mut out = String::with_capacity(chunk.len());
        self.feed_into(chunk, &mut out);
        out
    }

    /// Like [`feed`](Self::feed), but appends to a caller-owned buffer.
    pub fn feed_into(&mut self, chunk: &str, out: &mut String) {
        for c in chunk.chars() {
            self.push_char(c, out);
        }
        tracing::trace!(
            chunk_size = chunk.len(),
            consumed = self.consumed,
            state = ?self.state,
            "fed chunk"
        );
    }

    /// Advances the scanner by a single character.
    #[inline]
    pub(crate) fn push_char(&mut self, c: char, out: &mut String) {
        let (next, emit) = self.state.step(c);
        self.state = next;
        self.consumed += 1;
        self.record(emit);
        emit.push_to(out);
    }

    /// Ends the input and returns whatever the scanner was still holding.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out = String::new();
        self.finish_into(&mut out);
        out
    }

    /// Like [`finish`](Self::finish), but appends to a caller-owned buffer.
    pub fn finish_into(self, out: &mut String) {
        let emit = self
            .state
            .flush(self.options.drop_dangling_escaped_slash);
        tracing::trace!(
            consumed = self.consumed,
            state = ?self.state,
            flushed = emit.len(),
            "finished"
        );
        emit.push_to(out);
    }

    /// The current scanner state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The options this stripper was created with.
    #[must_use]
    pub fn options(&self) -> StripOptions {
        self.options
    }

    /// Number of characters fed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[cfg(any(test, feature = "fuzzing"))]
    fn record(&mut self, emit: Emit) {
        self.emitted += emit.len();
        assert!(
            self.emitted <= self.consumed,
            "Internal error: released {} characters after reading {}",
            self.emitted,
            self.consumed
        );
    }

    #[cfg(not(any(test, feature = "fuzzing")))]
    #[inline]
    #[allow(clippy::unused_self)]
    fn record(&mut self, _emit: Emit) {}
}
