//! Scanner: line-oriented comment stripper for notebook code cells.
//!
//! What it does
//! - Splits a block of source text into physical lines and threads a
//!   [`ScanState`] across them. Each line is either dropped (it sits inside a
//!   documentation block string, or nothing remains once its comment is cut)
//!   or kept with its trailing `#...` comment removed and its right edge
//!   trimmed.
//! - Inside a line, a character walk tracks whether the cursor is in a
//!   single- or double-quoted string so that a `#` inside a literal is never
//!   mistaken for a comment marker. A backslash inside a string escapes the
//!   following character, whatever it is.
//!
//! Block strings
//! - A line that, once trimmed, starts with `"""` or `'''` and whose code
//!   part contains none of `=`, `(`, `[` is taken to open a documentation
//!   block. The code part is what the character walk leaves, so a trailing
//!   `# noqa (E501)` does not count but `"""a # (b` does. If the same
//!   quote appears again later on the line the block is self-closing and only
//!   that line is dropped; otherwise every following line up to and including
//!   the first one containing the quote is dropped.
//! - This is a textual heuristic. A multi-line string value whose opening
//!   line lacks those three characters is dropped as if it were
//!   documentation. Lines carrying any of them always go through the
//!   character walk instead, so the heuristic errs towards leaving comments
//!   in rather than deleting code.
//!
//! Invariants
//! - [`ScanMode::TripleQuoted`] is the only mode that survives a line
//!   boundary. The single/double string modes are local to one line.
//! - The scanner has no failure path. An unterminated block string silently
//!   swallows the rest of its block.
//! - State never outlives a call to [`strip_with`]; each block starts from
//!   [`ScanState::default`].
//! - Stripping is idempotent for every [`StripOptions`]. The character walk
//!   is a fixed point on its own output and the opener test only looks at
//!   what the walk keeps, so a kept line never opens a block on a second
//!   pass.
//!
//! Example
//! ```rust
//! use nbstrip::strip;
//!
//! let src = "\"\"\"\nModule docs.\n\"\"\"\nx = \"# kept\"  # dropped\n";
//! assert_eq!(strip(src), "x = \"# kept\"");
//! ```

use tracing::trace;


/// The two three-character quotes that delimit block strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripleQuote {
    /// `"""`
    Double,
    /// `'''`
    Single,
}

impl TripleQuote {
    /// The literal delimiter text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TripleQuote::Double => "\"\"\"",
            TripleQuote::Single => "'''",
        }
    }

    /// The delimiter a trimmed line starts with, if any.
    fn leading(trimmed: &str) -> Option<Self> {
        [TripleQuote::Double, TripleQuote::Single]
            .into_iter()
            .find(|quote| trimmed.starts_with(quote.as_str()))
    }
}

/// Lexical context of the scanner at a character position.
///
/// Exactly one mode is active at a time. The block delimiter is carried by
/// the [`ScanMode::TripleQuoted`] variant itself, so it exists if and only if
/// the scanner is inside a block string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Plain code: quotes open strings and `#` opens a comment.
    #[default]
    Code,
    /// Inside a `'...'` literal on the current line.
    SingleQuoted,
    /// Inside a `"..."` literal on the current line.
    DoubleQuoted,
    /// Inside a documentation block string spanning lines.
    TripleQuoted(TripleQuote),
}

impl ScanMode {
    /// Transition on one unescaped character of a line.
    ///
    /// A quote of the other kind inside an open string is literal text.
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        match (self, ch) {
            (ScanMode::Code, '\'') => ScanMode::SingleQuoted,
            (ScanMode::Code, '"') => ScanMode::DoubleQuoted,
            (ScanMode::SingleQuoted, '\'') | (ScanMode::DoubleQuoted, '"') => ScanMode::Code,
            (mode, _) => mode,
        }
    }

    /// Whether the position is inside a single-line string literal.
    #[must_use]
    pub fn is_in_string(self) -> bool {
        matches!(self, ScanMode::SingleQuoted | ScanMode::DoubleQuoted)
    }
}

/// Which kinds of comment the scanner removes.
///
/// # Default
///
/// Both kinds are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Remove trailing `#...` comments (and right-trim the lines that keep
    /// any content).
    pub line_comments: bool,

    /// Drop documentation block strings delimited by `"""` or `'''`.
    pub block_strings: bool,
}

impl StripOptions {
    /// Leaves text untouched.
    pub const NONE: Self = Self {
        line_comments: false,
        block_strings: false,
    };

    /// Whether these options would change any input at all.
    #[must_use]
    pub fn is_noop(self) -> bool {
        !self.line_comments && !self.block_strings
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            line_comments: true,
            block_strings: true,
        }
    }
}

/// What became of one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line is absent from the output.
    Dropped,
    /// The line survives with this text.
    Kept(String),
}

/// Scanner state threaded from one physical line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    mode: ScanMode,
}

impl ScanState {
    /// The mode the next line starts in.
    #[must_use]
    pub fn mode(self) -> ScanMode {
        self.mode
    }

    /// Whether the scanner is inside a documentation block string.
    #[must_use]
    pub fn in_block_string(self) -> bool {
        matches!(self.mode, ScanMode::TripleQuoted(_))
    }

    /// Process one physical line (without its `\n`) and return the state for
    /// the next line together with what happened to this one.
    #[must_use]
    pub fn scan_line(self, line: &str, options: StripOptions) -> (ScanState, LineOutcome) {
        if let ScanMode::TripleQuoted(quote) = self.mode {
            if line.contains(quote.as_str()) {
                trace!(delimiter = quote.as_str(), "block string closed");
                return (ScanState::default(), LineOutcome::Dropped);
            }
            return (self, LineOutcome::Dropped);
        }

        if options.block_strings {
            if let Some(quote) = doc_block_opener(line) {
                let after_opener = &line.trim_start()[quote.as_str().len()..];
                if after_opener.contains(quote.as_str()) {
                    trace!(delimiter = quote.as_str(), "single-line block string dropped");
                    return (ScanState::default(), LineOutcome::Dropped);
                }
                trace!(delimiter = quote.as_str(), "block string opened");
                let state = ScanState {
                    mode: ScanMode::TripleQuoted(quote),
                };
                return (state, LineOutcome::Dropped);
            }
        }

        let text = if options.line_comments {
            strip_line_comment(line)
        } else {
            line.to_owned()
        };

        let outcome = if text.trim().is_empty() {
            LineOutcome::Dropped
        } else {
            LineOutcome::Kept(text)
        };
        (ScanState::default(), outcome)
    }
}

/// The quote a line opens a documentation block with, if the line looks like
/// one.
///
/// Lines whose code part (the line minus any trailing `#` comment) contains
/// `=`, `(` or `[` are assumed to hold a string value and never qualify.
fn doc_block_opener(line: &str) -> Option<TripleQuote> {
    let quote = TripleQuote::leading(line.trim())?;
    if strip_line_comment(line).contains(['=', '(', '[']) {
        return None;
    }
    Some(quote)
}

/// Remove the trailing `#...` comment from a single line and trim its right
/// edge.
///
/// `#` inside a `'...'` or `"..."` literal is kept. Inside a literal, a
/// backslash and the character after it are copied as a pair, so `\'` and
/// `\"` never close the string.
#[must_use]
pub fn strip_line_comment(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut mode = ScanMode::Code;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (mode, ch) {
            (ScanMode::SingleQuoted | ScanMode::DoubleQuoted, '\\') => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            (ScanMode::Code, '#') => break,
            _ => {
                mode = mode.advance(ch);
                out.push(ch);
            }
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Strip both kinds of comment from a block of source text.
///
/// Equivalent to [`strip_with`] with [`StripOptions::default`].
#[must_use]
pub fn strip(text: &str) -> String {
    strip_with(text, StripOptions::default())
}

/// Strip comments from a block of source text.
///
/// Lines that end up blank are removed rather than kept as empty lines.
/// With [`StripOptions::NONE`] the text is returned exactly as given.
#[must_use]
pub fn strip_with(text: &str, options: StripOptions) -> String {
    if options.is_noop() {
        return text.to_owned();
    }

    let mut state = ScanState::default();
    let mut kept = Vec::new();
    for line in text.split('\n') {
        let (next, outcome) = state.scan_line(line, options);
        state = next;
        if let LineOutcome::Kept(line) = outcome {
            kept.push(line);
        }
    }

    if state.in_block_string() {
        trace!("block string left open at end of block");
    }
    kept.join("\n")
}
