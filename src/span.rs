//! Lexical Layer: Spans, the Span Table, and Tokens
//!
//! Source locations live in a flat, append-only arena (`SpanTable`) owning
//! both the stored source lines and the `LineSpan` values that address them.
//! Tokens hold an integer span id, never a pointer, so trees and the span
//! table can be dropped independently. Span ids are only meaningful against
//! the table that issued them; files parsed concurrently each own a table.
//!
//! The table is append-only during parsing and is never mutated afterwards,
//! which is what lets finished trees be shared read-only across threads.

use serde::Serialize;

use crate::error::LstError;
use crate::id::Id;

/// Index of one stored source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineId(pub u32);

/// Index of one `LineSpan` in the span table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SpanId(pub u32);

/// A half-open byte range within a single stored line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub line: LineId,
    pub col: u32,
    pub length: u32,
}

impl LineSpan {
    pub fn new(line: LineId, col: u32, length: u32) -> Self {
        Self { line, col, length }
    }

    /// Column one past the last byte covered.
    pub fn end_col(&self) -> u32 {
        self.col + self.length
    }
}

/// Arena owning source lines and the spans that address them.
///
/// Lines are stored with their trailing newline so that the text between
/// any two spans (including across lines) is recoverable exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanTable {
    lines: Vec<String>,
    spans: Vec<LineSpan>,
}

impl SpanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every line of `source`, preserving trailing newlines.
    pub fn from_source(source: &str) -> Self {
        let mut table = Self::new();
        let mut rest = source;
        while !rest.is_empty() {
            let line = match rest.find('\n') {
                Some(i) => {
                    let (line, tail) = rest.split_at(i + 1);
                    rest = tail;
                    line
                }
                None => {
                    let line = rest;
                    rest = "";
                    line
                }
            };
            table.add_line(line);
        }
        table
    }

    pub fn add_line(&mut self, text: impl Into<String>) -> LineId {
        let id = LineId(self.lines.len() as u32);
        self.lines.push(text.into());
        id
    }

    /// Register a span. Fails with `SpanOutOfRange` if the line id is
    /// unknown or the span runs past the end of the stored line.
    pub fn add_span(&mut self, span: LineSpan) -> Result<SpanId, LstError> {
        let line = self.line_text(span.line)?;
        if span.end_col() as usize > line.len() {
            return Err(LstError::SpanOutOfRange(format!(
                "col {}..{} exceeds line {} of {} bytes",
                span.col,
                span.end_col(),
                span.line.0,
                line.len()
            )));
        }
        // Endpoints inside a multibyte character would make every later
        // slice of this span panic; reject them while construction can
        // still fail cleanly.
        if !line.is_char_boundary(span.col as usize)
            || !line.is_char_boundary(span.end_col() as usize)
        {
            return Err(LstError::SpanOutOfRange(format!(
                "col {}..{} splits a multibyte character on line {}",
                span.col,
                span.end_col(),
                span.line.0
            )));
        }
        let id = SpanId(self.spans.len() as u32);
        self.spans.push(span);
        Ok(id)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    pub fn line_text(&self, id: LineId) -> Result<&str, LstError> {
        self.lines
            .get(id.0 as usize)
            .map(|s| s.as_str())
            .ok_or_else(|| LstError::SpanOutOfRange(format!("no line with id {}", id.0)))
    }

    pub fn span(&self, id: SpanId) -> Result<&LineSpan, LstError> {
        self.spans
            .get(id.0 as usize)
            .ok_or_else(|| LstError::SpanOutOfRange(format!("no span with id {}", id.0)))
    }

    /// The exact source bytes a span addresses.
    pub fn span_text(&self, id: SpanId) -> Result<&str, LstError> {
        let span = *self.span(id)?;
        let line = self.line_text(span.line)?;
        Ok(&line[span.col as usize..span.end_col() as usize])
    }

    /// Build a token whose literal text is sliced straight from the span,
    /// so text/span agreement holds by construction.
    pub fn token(&self, id: Id, span: SpanId) -> Result<Token, LstError> {
        let text = self.span_text(span)?.to_string();
        Ok(Token {
            id,
            text,
            span: Some(span),
        })
    }

    /// Convenience for tests and hand-built trees: register a span on an
    /// existing line and return a token over it in one step.
    pub fn token_at(
        &mut self,
        id: Id,
        line: LineId,
        col: u32,
        length: u32,
    ) -> Result<Token, LstError> {
        let span = self.add_span(LineSpan::new(line, col, length))?;
        self.token(id, span)
    }
}

/// One lexical unit.
///
/// A token without a span is synthetic: inserted by the parser rather than
/// read from the source, and skipped by the reconstructor. The literal text
/// is kept alongside the span id (a known redundancy inherited from the
/// original design; consumers may rely on either).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub id: Id,
    pub text: String,
    pub span: Option<SpanId>,
}

impl Token {
    /// A parser-inserted token with no source backing.
    pub fn synthetic(id: Id, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            span: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.span.is_none()
    }
}
