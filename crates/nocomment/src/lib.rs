//! Strip C-style comments from text while leaving double-quoted strings
//! untouched.
//!
//! `//` line comments and `/* */` block comments are removed in a single
//! left-to-right pass. Comment markers inside `"..."` are kept, a backslash
//! escapes the character after it, and malformed input never fails: it is
//! stripped by fixed fallback rules instead.
//!
//! ```rust
//! use nocomment::strip_c_style_comments;
//!
//! let src = "int x = 1; // counter\nputs(\"http://example.com\"); /* done */";
//! assert_eq!(
//!     strip_c_style_comments(src),
//!     "int x = 1; \nputs(\"http://example.com\"); "
//! );
//! ```
//!
//! Three drivers share the same scanner:
//! - [`strip_c_style_comments`] for a whole string,
//! - [`CommentStripper`] for text arriving in chunks,
//! - [`ByteStripper`] / [`strip_bytes`] for UTF-8 bytes.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bytes;
mod error;
mod options;
mod scanner;
mod stripper;

#[cfg(test)]
mod tests;

pub use bytes::{ByteStripper, strip_bytes};
pub use error::StripError;
pub use options::StripOptions;
pub use scanner::{Emit, ScanState};
pub use stripper::{CommentStripper, strip_c_style_comments};
