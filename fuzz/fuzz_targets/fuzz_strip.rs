#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use nbstrip::{StripOptions, strip_line_comment, strip_with};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// Lexically interesting fragments: every quote form, escapes, the comment
// marker, the heuristic's guard characters and both line endings.
static TOKEN_TABLE: &[&[u8]] = &[
    b"\"",
    b"'",
    b"\"\"\"",
    b"'''",
    b"#",
    b"\\",
    b"\\'",
    b"\\\"",
    b"=",
    b"(",
    b"[",
    b" ",
    b"    ",
    b"\t",
    b"\n",
    b"\r\n",
    b"x",
    b"print",
    "é".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Fill `buf` with random fragments from [`TOKEN_TABLE`], never exceeding
/// `limit` bytes. Returns the number of bytes written.
fn append_tokens(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let mut written = 0;
        loop {
            let token = TOKEN_TABLE[rng.random_range(0..TOKEN_TABLE.len())];
            if written + token.len() > limit {
                break;
            }
            buf[written..written + token.len()].copy_from_slice(token);
            written += token.len();
        }
        written
    })
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        let target = with_rng(|rng| rng.random_range(HEADER..=max_size.max(HEADER)));
        HEADER + append_tokens(&mut data[HEADER..], target - HEADER)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn check(data: &[u8]) {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let options = StripOptions {
        line_comments: flags & 1 != 0,
        block_strings: flags & 2 != 0,
    };
    let text = String::from_utf8_lossy(rest);
    let out = strip_with(&text, options);

    if options.is_noop() {
        assert_eq!(out, text);
        return;
    }

    assert_eq!(strip_with(&out, options), out, "second pass changed: {text:?}");

    if out.is_empty() {
        return;
    }
    for line in out.split('\n') {
        assert!(!line.trim().is_empty(), "blank line kept: {out:?}");
        if options.line_comments {
            assert_eq!(line, line.trim_end(), "untrimmed line kept: {out:?}");
            assert_eq!(strip_line_comment(line), line, "comment survived: {out:?}");
        }
    }
}

fuzz_target!(|data: &[u8]| check(data));
