//! Glob Layer
//!
//! A flat, simplified representation of shell glob patterns, independent of
//! the main parse tree. The conversion pass that turns these parts into a
//! regex lives outside this crate; here is only the tokenization into parts
//! and the shapes themselves.
//!
//! Character classes are kept opaque: the member text between the brackets
//! is stored raw, so `[[:alpha:]]` survives untouched. Collating symbols
//! (`[[.x.]]`) and equivalence classes (`[[=x=]]`) are not understood and
//! are passed through verbatim as a literal chunk, never reinterpreted.

use serde::Serialize;

use crate::id::Id;

/// One token of a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GlobPart {
    /// A run of ordinary bytes (usually a single character; collating and
    /// equivalence bracket forms come through as one verbatim chunk).
    Literal(String),
    /// `*` or `?` ([`Id::GlobStar`] / [`Id::GlobQMark`]).
    Operator(Id),
    /// `[...]`, `[!...]`, `[^...]` with the member text kept raw.
    CharClass { negated: bool, members: String },
}

/// Tokenize a glob pattern into ordered parts.
///
/// Backslash escapes yield a literal of the escaped character; a trailing
/// lone backslash and an unterminated `[` both fall back to literals.
pub fn tokenize_glob(pattern: &str) -> Vec<GlobPart> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut parts = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                parts.push(GlobPart::Operator(Id::GlobStar));
                i += 1;
            }
            '?' => {
                parts.push(GlobPart::Operator(Id::GlobQMark));
                i += 1;
            }
            '\\' => {
                if i + 1 < chars.len() {
                    parts.push(GlobPart::Literal(chars[i + 1].to_string()));
                    i += 2;
                } else {
                    parts.push(GlobPart::Literal("\\".to_string()));
                    i += 1;
                }
            }
            '[' => match scan_char_class(&chars, i) {
                Some((part, next)) => {
                    parts.push(part);
                    i = next;
                }
                None => {
                    parts.push(GlobPart::Literal("[".to_string()));
                    i += 1;
                }
            },
            c => {
                parts.push(GlobPart::Literal(c.to_string()));
                i += 1;
            }
        }
    }

    parts
}

/// Scan a bracket expression starting at `start` (which holds `[`).
/// Returns the part and the index just past the closing `]`, or `None`
/// when the expression never closes.
fn scan_char_class(chars: &[char], start: usize) -> Option<(GlobPart, usize)> {
    let mut i = start + 1;
    let negated = matches!(chars.get(i), Some('!') | Some('^'));
    if negated {
        i += 1;
    }
    let members_start = i;

    // A ']' in first member position is a literal member.
    if matches!(chars.get(i), Some(']')) {
        i += 1;
    }
    while i < chars.len() && chars[i] != ']' {
        // `[.` and `[=` open collating/equivalence forms that run to their
        // own two-character close; skip them so their ']' is not ours.
        if chars[i] == '[' && matches!(chars.get(i + 1), Some('.') | Some('=')) {
            let close = chars[i + 1];
            i += 2;
            while i + 1 < chars.len() && !(chars[i] == close && chars[i + 1] == ']') {
                i += 1;
            }
            if i + 1 >= chars.len() {
                return None;
            }
            i += 2;
        } else if chars[i] == '[' && matches!(chars.get(i + 1), Some(':')) {
            i += 2;
            while i + 1 < chars.len() && !(chars[i] == ':' && chars[i + 1] == ']') {
                i += 1;
            }
            if i + 1 >= chars.len() {
                return None;
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    if i >= chars.len() {
        return None;
    }

    let members: String = chars[members_start..i].iter().collect();
    let end = i + 1;

    // Not understood; pass the whole original chunk through verbatim.
    if members.contains("[.") || members.contains("[=") {
        let raw: String = chars[start..end].iter().collect();
        return Some((GlobPart::Literal(raw), end));
    }

    Some((GlobPart::CharClass { negated, members }, end))
}
