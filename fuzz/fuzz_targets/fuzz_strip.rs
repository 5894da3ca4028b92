#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nocomment::{ByteStripper, CommentStripper, StripOptions, strip_bytes, strip_c_style_comments};

#[derive(Debug, Arbitrary)]
struct Input {
    drop_dangling_escaped_slash: bool,
    split_seed: u64,
    data: Vec<u8>,
}

fn strip(input: Input) {
    let options = StripOptions {
        drop_dangling_escaped_slash: input.drop_dangling_escaped_slash,
        replace_invalid_utf8: true,
    };
    let text = String::from_utf8_lossy(&input.data).into_owned();

    let mut one_shot = CommentStripper::new(options);
    let mut expected = one_shot.feed(&text);
    one_shot.finish_into(&mut expected);
    if !options.drop_dangling_escaped_slash {
        assert_eq!(expected, strip_c_style_comments(&text));
    }

    // Text, cut at char boundaries.
    let mut chunked = CommentStripper::new(options);
    let mut out = String::new();
    for chunk in split_into_safe_chunks(&text, input.split_seed) {
        chunked.feed_into(chunk, &mut out);
    }
    chunked.finish_into(&mut out);
    assert_eq!(out, expected);

    // Raw bytes, cut anywhere.
    assert_eq!(strip_bytes(&input.data, options).as_deref(), Ok(expected.as_str()));
    let mut bytes = ByteStripper::new(options);
    let mut out = String::new();
    let step = (input.split_seed as usize % input.data.len().max(1)) + 1;
    for chunk in input.data.chunks(step) {
        bytes.feed_into(chunk, &mut out).expect("replacement never fails");
    }
    bytes.finish_into(&mut out).expect("replacement never fails");
    assert_eq!(out, expected);
}

fuzz_target!(|input: Input| strip(input));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic random
/// value to generate splits.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
/// * Every slice ends on a valid UTF-8 boundary, so it can’t panic.
fn split_into_safe_chunks(text: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = text.len();
    let mut seed = split_seed;

    while start < len {
        let remaining = len - start;
        let mut size = (seed as usize % remaining) + 1;
        while start + size < len && !text.is_char_boundary(start + size) {
            size += 1;
        }

        chunks.push(&text[start..start + size]);
        start += size;
        seed = seed.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
    }

    chunks
}
