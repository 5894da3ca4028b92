/// Configuration options for the comment stripper.
///
/// The defaults reproduce the plain behaviour of
/// [`strip_c_style_comments`](crate::strip_c_style_comments); every option
/// opts into something else.
///
/// # Examples
///
/// ```rust
/// use nocomment::{CommentStripper, StripOptions};
///
/// let mut stripper = CommentStripper::new(StripOptions {
///     drop_dangling_escaped_slash: true,
///     ..Default::default()
/// });
/// let mut out = stripper.feed("path\\/");
/// out.push_str(&stripper.finish());
/// assert_eq!(out, "path\\");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StripOptions {
    /// Whether a `\/` at the very end of the input loses its slash.
    ///
    /// A `/` right after a backslash is held until the next character shows
    /// whether it opens a comment. When the input ends first, the slash is
    /// restored, the same as a lone trailing `/`. Enabling this drops it
    /// instead.
    ///
    /// # Default
    ///
    /// `false`
    pub drop_dangling_escaped_slash: bool,

    /// Whether [`ByteStripper`](crate::ByteStripper) replaces invalid UTF-8
    /// with U+FFFD instead of failing.
    ///
    /// Has no effect on `&str` input, which is always valid.
    ///
    /// # Default
    ///
    /// `false`
    pub replace_invalid_utf8: bool,
}
