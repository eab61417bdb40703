//! The comment stripper: a single-pass scanner that removes `//` line
//! comments and `/* */` block comments while leaving string and character
//! literal contents untouched.

use clap::ValueEnum;
use serde::Deserialize;

/// Output-normalization policy applied after comment removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripMode {
    /// Pure character-level stripping, no blank-line normalization.
    /// Multi-line string literals are preserved correctly.
    #[default]
    Raw,
    /// Raw output plus a cosmetic pass: trailing whitespace is trimmed from
    /// each line, consecutive blank lines collapse to one, and trailing
    /// blank lines are dropped.
    Strict,
}

/// Lexical mode of the scanner at the current cursor position.
///
/// The variants are mutually exclusive; `InString` carries the opening quote
/// so a `'` inside a `"..."` literal does not terminate it, and an `escaped`
/// flag so `\"` cannot close the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString { quote: char, escaped: bool },
    InBlockComment,
}

/// Strip all comments from `source`, preserving everything else verbatim.
///
/// Comment-like sequences inside string literals are kept: `"http://x"`
/// survives unchanged. An unterminated block comment swallows the rest of
/// the input; that matches the historical behavior and is relied upon.
pub fn strip(source: &str, mode: StripMode) -> String {
    let stripped = strip_comments(source);
    match mode {
        StripMode::Raw => stripped,
        StripMode::Strict => collapse_blank_lines(&stripped),
    }
}

fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut state = ScanState::Normal;

    while let Some(ch) = chars.next() {
        match state {
            ScanState::InBlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = ScanState::Normal;
                }
            }
            ScanState::InString { quote, escaped } => {
                output.push(ch);
                state = if escaped {
                    ScanState::InString {
                        quote,
                        escaped: false,
                    }
                } else if ch == '\\' {
                    ScanState::InString {
                        quote,
                        escaped: true,
                    }
                } else if ch == quote {
                    ScanState::Normal
                } else {
                    ScanState::InString {
                        quote,
                        escaped: false,
                    }
                };
            }
            ScanState::Normal => match ch {
                '/' if chars.peek() == Some(&'/') => {
                    // Line comment: drop up to but not including the newline.
                    while chars.peek().is_some_and(|&next| next != '\n') {
                        chars.next();
                    }
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = ScanState::InBlockComment;
                }
                '"' | '\'' => {
                    output.push(ch);
                    state = ScanState::InString {
                        quote: ch,
                        escaped: false,
                    };
                }
                _ => output.push(ch),
            },
        }
    }

    output
}

/// Strict-mode post-pass: a blank line is kept only when the previously kept
/// line was non-blank, trailing blank lines are dropped, and non-empty
/// output always ends with exactly one newline.
fn collapse_blank_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        if !line.is_empty() || kept.last().is_none_or(|prev| !prev.is_empty()) {
            kept.push(line);
        }
    }

    while kept.last().is_some_and(|line| line.is_empty()) {
        kept.pop();
    }

    if kept.is_empty() {
        String::new()
    } else {
        let mut output = kept.join("\n");
        output.push('\n');
        output
    }
}
