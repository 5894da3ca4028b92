#![allow(missing_docs)]
#![allow(dead_code)]

/// Input of the `strip_demo` example.
pub const DEMO: &str = "
\tLine comment //gets stripped away!
\tBlock /*gets stripped away!*/ comment
\t\"Quoted /*text*/ \\\" stays 'til the end! \\\\\" /* comments don't \\*/ really!
\t\"And quoted text \\
\t//can also span multiple lines!\"
\t";

/// A C-like source file with every construct the stripper handles.
pub const SOURCE: &str = r#"/* header
 * spanning lines **/
#include <stdio.h> // io

int main(void) {
    const char *url = "http://example.com/*not a comment*/";
    int ratio = 10 / 2; /* inline */ int half = ratio/2;
    printf("%s \"//\" %d\n", url, ratio); // trailing
    return 0; /***/
}
"#;

/// Split `text` into `parts` roughly equal chunks on char boundaries.
pub fn produce_chunks(text: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let size = text.len().div_ceil(parts).max(1);
    let mut chunks = Vec::with_capacity(parts);
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
