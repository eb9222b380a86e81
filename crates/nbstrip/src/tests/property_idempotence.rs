use quickcheck::QuickCheck;

use super::{arbitrary::PySource, test_count};
use crate::{StripOptions, strip, strip_with};

/// Property: a second pass over stripped source finds nothing left to strip.
#[test]
fn strip_is_idempotent_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: PySource) -> bool {
        let once = strip(&src.0);
        strip(&once) == once
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(PySource) -> bool);
}

/// Property: idempotence holds for arbitrary text under every option set, not
/// only for well-formed source.
#[test]
fn strip_with_is_idempotent_on_any_text_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: String, line_comments: bool, block_strings: bool) -> bool {
        let options = StripOptions {
            line_comments,
            block_strings,
        };
        let once = strip_with(&src, options);
        strip_with(&once, options) == once
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, bool, bool) -> bool);
}

/// Property: whatever the input, no output line is blank or carries trailing
/// whitespace.
#[test]
fn output_lines_are_trimmed_and_nonblank_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: String) -> bool {
        let out = strip(&src);
        out.is_empty()
            || out
                .split('\n')
                .all(|line| !line.trim().is_empty() && line.trim_end() == line)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: with both comment kinds disabled the scanner is the identity.
#[test]
fn disabled_strip_is_identity_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: String) -> bool {
        strip_with(&src, StripOptions::NONE) == src
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn idempotence_regressions() {
    for src in [
        "x = 1 # c\n\n'''\ndoc\n'''\ny = '#' # d",
        "    \"\"\"short\"\"\"\n    return 'a\\'b'  # c",
        "s = \"\\\\\" # c",
        "\"\"\"Summary.\"\"\"  # noqa (E501)",
        "def f():\n    '''Docs.'''  # see [1]\n    return 1",
        "\"\"\"\" # (",
    ] {
        let once = strip(src);
        assert_eq!(strip(&once), once, "input: {src:?}");
    }
}
