use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::{SourceText, split_at_chars};
use crate::{ByteStripper, CommentStripper, StripOptions, strip_bytes, strip_c_style_comments};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}

fn has_marker(text: &str) -> bool {
    text.contains("//") || text.contains("/*")
}

/// Property: splitting the input into arbitrary chunks never changes the
/// output.
#[test]
fn partition_matches_one_shot() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: SourceText, splits: Vec<usize>) -> bool {
        let expected = strip_c_style_comments(&text.0);

        let mut stripper = CommentStripper::default();
        let mut out = String::new();
        for chunk in split_at_chars(&text.0, &splits) {
            out.push_str(&stripper.feed(chunk));
        }
        out.push_str(&stripper.finish());
        out == expected
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SourceText, Vec<usize>) -> bool);
}

/// Property: the byte driver agrees with the text driver on valid UTF-8,
/// wherever the byte chunks are cut.
#[test]
fn bytes_match_text() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: SourceText, splits: Vec<usize>) -> bool {
        let expected = strip_c_style_comments(&text.0);
        let bytes = text.0.as_bytes();
        if strip_bytes(bytes, StripOptions::default()).as_deref() != Ok(expected.as_str()) {
            return false;
        }

        let mut stripper = ByteStripper::default();
        let mut out = String::new();
        let mut start = 0;
        for s in splits {
            let end = start + s % (bytes.len() - start + 1);
            if stripper.feed_into(&bytes[start..end], &mut out).is_err() {
                return false;
            }
            start = end;
        }
        stripper.feed_into(&bytes[start..], &mut out).is_ok()
            && stripper.finish_into(&mut out).is_ok()
            && out == expected
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SourceText, Vec<usize>) -> bool);
}

/// Property: output never outgrows the input, save the one restored slash.
#[test]
fn output_is_not_expansive() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: SourceText) -> bool {
        let n = text.0.chars().count();
        let out = strip_c_style_comments(&text.0).chars().count();
        if text.0.ends_with('/') {
            out <= n + 1
        } else {
            out <= n
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SourceText) -> bool);
}

/// Property: text without `//` or `/*` passes through unchanged, and so does
/// any output that no longer contains them.
#[test]
fn marker_free_text_is_a_fixed_point() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: SourceText) -> bool {
        let out = strip_c_style_comments(&text.0);
        if !has_marker(&text.0) && out != text.0 {
            return false;
        }
        has_marker(&out) || strip_c_style_comments(&out) == out
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SourceText) -> bool);
}

/// Property: a properly escaped quoted string survives whatever it contains.
#[test]
fn quoted_strings_are_preserved() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(body: SourceText) -> bool {
        let mut quoted = String::from("\"");
        for c in body.0.chars() {
            if matches!(c, '"' | '\\' | '\n') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        strip_c_style_comments(&quoted) == quoted
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(SourceText) -> bool);
}
