//! Scanner: the comment-stripping state machine.
//!
//! The scanner is a pure transition function. It owns no buffer; each call to
//! [`ScanState::step`] returns the next state together with an [`Emit`]
//! describing the characters that became final. Drivers (the one-shot
//! [`crate::strip_c_style_comments`], [`crate::CommentStripper`] and
//! [`crate::ByteStripper`]) own the output and append what the scanner hands
//! back.
//!
//! Invariants
//! - At most one character is ever held back: the `/` carried by
//!   [`ScanState::NormalSlash`] and [`ScanState::NormalEscapedSlash`].
//! - A single step emits at most two characters, and only when it also
//!   releases the held `/`. The output therefore never outgrows the input,
//!   apart from the end-of-input flush.
//! - Comment delimiters are only recognized outside quotes.
#![allow(clippy::enum_glob_use)]

use alloc::string::String;


/// Where the scanner is, relative to quotes, escapes and comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Plain text. Every character is emitted unless it starts something.
    #[default]
    Normal,
    /// A backslash was just emitted outside of a quote.
    NormalEscape,
    /// A `/` is held; the next character decides if it opens a comment.
    NormalSlash,
    /// A `/` directly after a backslash is held. Comments still win over the
    /// escape.
    NormalEscapedSlash,
    /// Inside a double-quoted string.
    Quote,
    /// Inside a double-quoted string, right after a backslash.
    QuoteEscape,
    /// Inside a `//` comment.
    LineComment,
    /// Inside a `/* */` comment.
    BlockComment,
    /// Inside a block comment, right after one or more `*`.
    BlockCommentStar,
}

/// Characters released by a single scanner step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Nothing became final: the character was held or discarded.
    Nothing,
    /// One character.
    One(char),
    /// The held `/` followed by the current character.
    Two(char, char),
}

impl Emit {
    /// Number of characters released.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Emit::Nothing => 0,
            Emit::One(_) => 1,
            Emit::Two(..) => 2,
        }
    }

    /// `true` if the step released nothing.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Emit::Nothing)
    }

    /// Append the released characters to `out`.
    #[inline]
    pub fn push_to(self, out: &mut String) {
        match self {
            Emit::Nothing => {}
            Emit::One(c) => out.push(c),
            Emit::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }
}

impl ScanState {
    /// Feed one character and learn where the scanner goes next.
    ///
    /// ```rust
    /// use nocomment::{Emit, ScanState};
    ///
    /// let (state, emit) = ScanState::Normal.step('/');
    /// assert_eq!((state, emit), (ScanState::NormalSlash, Emit::Nothing));
    ///
    /// let (state, emit) = state.step('x');
    /// assert_eq!((state, emit), (ScanState::Normal, Emit::Two('/', 'x')));
    /// ```
    #[must_use]
    #[inline]
    pub fn step(self, c: char) -> (ScanState, Emit) {
        use ScanState::*;

        match (self, c) {
            (Normal, '\\') => (NormalEscape, Emit::One(c)),
            (Normal, '"') => (Quote, Emit::One(c)),
            (Normal, '/') => (NormalSlash, Emit::Nothing),
            (Normal, _) => (Normal, Emit::One(c)),

            (NormalEscape, '/') => (NormalEscapedSlash, Emit::Nothing),
            (NormalEscape, _) => (Normal, Emit::One(c)),

            // Comments cannot be escaped: `\//` and `\/*` still open one and
            // both slashes go.
            (NormalEscapedSlash, '/') => (LineComment, Emit::Nothing),
            (NormalEscapedSlash, '*') => (BlockComment, Emit::Nothing),
            (NormalEscapedSlash, '"') => (Quote, Emit::Two('/', c)),
            (NormalEscapedSlash, _) => (Normal, Emit::Two('/', c)),

            (Quote, '\\') => (QuoteEscape, Emit::One(c)),
            // An unterminated quote ends with the line.
            (Quote, '"' | '\n') => (Normal, Emit::One(c)),
            (Quote, _) => (Quote, Emit::One(c)),

            (QuoteEscape, _) => (Quote, Emit::One(c)),

            (NormalSlash, '/') => (LineComment, Emit::Nothing),
            (NormalSlash, '*') => (BlockComment, Emit::Nothing),
            (NormalSlash, _) => (Normal, Emit::Two('/', c)),

            (LineComment, '\n') => (Normal, Emit::One(c)),
            (LineComment, _) => (LineComment, Emit::Nothing),

            (BlockComment, '*') => (BlockCommentStar, Emit::Nothing),
            (BlockComment, _) => (BlockComment, Emit::Nothing),

            (BlockCommentStar, '/') => (Normal, Emit::Nothing),
            (BlockCommentStar, '*') => (BlockCommentStar, Emit::Nothing),
            (BlockCommentStar, _) => (BlockComment, Emit::Nothing),
        }
    }

    /// What to release when the input ends in this state.
    ///
    /// Only the two slash-holding states have anything left. A trailing `\/`
    /// restores its slash unless `drop_escaped_slash` is set.
    #[must_use]
    pub fn flush(self, drop_escaped_slash: bool) -> Emit {
        match self {
            ScanState::NormalSlash => Emit::One('/'),
            ScanState::NormalEscapedSlash if !drop_escaped_slash => Emit::One('/'),
            _ => Emit::Nothing,
        }
    }

    /// `true` while the scanner is inside a `//` or `/* */` comment.
    #[must_use]
    pub fn in_comment(self) -> bool {
        matches!(
            self,
            ScanState::LineComment | ScanState::BlockComment | ScanState::BlockCommentStar
        )
    }

    /// `true` while the scanner is inside a double-quoted string.
    #[must_use]
    pub fn in_quote(self) -> bool {
        matches!(self, ScanState::Quote | ScanState::QuoteEscape)
    }

    /// `true` if a `/` is held back waiting for the next character.
    #[must_use]
    pub fn holds_slash(self) -> bool {
        matches!(self, ScanState::NormalSlash | ScanState::NormalEscapedSlash)
    }
}
