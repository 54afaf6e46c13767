//! Brace-depth object scanner.
//!
//! Telegram exports are supposed to be one JSON document, but the files that
//! reach us are often cut off mid-write, glued together from several exports,
//! or missing the outer wrapper entirely. A strict parser rejects all of that.
//!
//! This scanner does something much narrower: starting at an offset, it finds
//! the next balanced `{ ... }` span, honouring string literals and escapes so
//! that braces inside text do not count. Whatever it returns is handed to
//! `serde_json` separately; the scanner never interprets content.
//!
//! # Example
//!
//! ```rust
//! use tgsift::parsing::scanner::{Scan, next_fragment};
//!
//! let text = r#" , {"text": "a{b}c"} tail"#;
//! match next_fragment(text, 0) {
//!     Scan::Fragment(fragment) => assert_eq!(fragment.text, r#"{"text": "a{b}c"}"#),
//!     Scan::NoFragment { .. } => unreachable!(),
//! }
//! ```

/// Characters skipped before an object is expected to start.
///
/// Besides JSON whitespace and the array separator this includes the BOM and
/// the exotic spaces Telegram Desktop likes to emit.
pub const SKIP_CHARS: &[char] = &[
    ' ', '\r', '\n', '\t', ',', '\u{FEFF}', '\u{00A0}', '\u{2009}', '\u{202F}',
];

/// A balanced `{ ... }` span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFragment<'a> {
    /// Byte offset of the opening brace
    pub start: usize,
    /// Byte offset just past the closing brace
    pub end: usize,
    /// The fragment text, braces included
    pub text: &'a str,
}

/// Outcome of a single [`next_fragment`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// A balanced object was found.
    Fragment(RawFragment<'a>),
    /// No object starts here.
    ///
    /// `offset` is past the skipped separators, or at end of input when an
    /// object was opened but never closed.
    NoFragment { offset: usize },
}

/// Returns the next balanced object starting at `from` (after separators).
///
/// `from` is clamped to the input length; an offset inside a multi-byte
/// character is moved forward to the next char boundary.
pub fn next_fragment(text: &str, from: usize) -> Scan<'_> {
    let from = char_boundary_at_or_after(text, from);
    let rest = &text[from..];
    let start = from + (rest.len() - rest.trim_start_matches(SKIP_CHARS).len());

    if !text[start..].starts_with('{') {
        return Scan::NoFragment { offset: start };
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    // Every byte we react to is ASCII, so a byte walk is safe on UTF-8.
    for (i, &byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let end = start + i + 1;
                    return Scan::Fragment(RawFragment {
                        start,
                        end,
                        text: &text[start..end],
                    });
                }
            }
            _ => {}
        }
    }

    Scan::NoFragment { offset: text.len() }
}

fn char_boundary_at_or_after(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Iterator over every fragment in a text, in document order.
///
/// On a failed attempt the cursor moves forward by at least one character, so
/// stray garbage between objects is crawled over rather than stalled on.
/// A truncated trailing object ends the iteration.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Fragments<'a> {
    /// Scans `text` from the beginning.
    pub fn new(text: &'a str) -> Self {
        Self::from_offset(text, 0)
    }

    /// Scans `text` starting at byte offset `pos`.
    ///
    /// An offset that is not a char boundary is moved forward to the next one.
    pub fn from_offset(text: &'a str, pos: usize) -> Self {
        Self {
            text,
            pos: char_boundary_at_or_after(text, pos),
        }
    }

    /// Current byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn step_past(&self, offset: usize) -> usize {
        let base = offset.max(self.pos);
        self.text[base..]
            .chars()
            .next()
            .map_or(self.text.len(), |c| base + c.len_utf8())
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = RawFragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            match next_fragment(self.text, self.pos) {
                Scan::Fragment(fragment) => {
                    self.pos = fragment.end;
                    return Some(fragment);
                }
                Scan::NoFragment { offset } if offset >= self.text.len() => {
                    self.pos = self.text.len();
                }
                Scan::NoFragment { offset } => {
                    self.pos = self.step_past(offset);
                }
            }
        }
        None
    }
}
