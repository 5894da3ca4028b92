//! Strips a small sample and prints the result.
//!
//! Run with `cargo run --example strip_demo`. Pass file paths to strip those
//! instead; each file is streamed through a `ByteStripper` in 4 KiB reads.
#![allow(missing_docs)]

use std::{
    env,
    fs::File,
    io::{self, Read, Write},
};

use nocomment::{ByteStripper, StripOptions, strip_c_style_comments};

const SAMPLE: &str = "
\tLine comment //gets stripped away!
\tBlock /*gets stripped away!*/ comment
\t\"Quoted /*text*/ \\\" stays 'til the end! \\\\\" /* comments don't \\*/ really!
\t\"And quoted text \\
\t//can also span multiple lines!\"
\t";

fn strip_file(path: &str, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::open(path)?;
    let mut stripper = ByteStripper::new(StripOptions::default());
    let mut buf = [0u8; 4096];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(stripper.feed(&buf[..n])?.as_bytes())?;
    }
    out.write_all(stripper.finish()?.as_bytes())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if paths.is_empty() {
        writeln!(out, "{}", strip_c_style_comments(SAMPLE))?;
        // Prints:
        //     Line comment
        //     Block  comment
        //     "Quoted /*text*/ \" stays 'til the end! \\"  really!
        //     "And quoted text \
        //     //can also span multiple lines!"
        return Ok(());
    }

    for path in &paths {
        strip_file(path, &mut out)?;
    }
    Ok(())
}
