//! shell-lst - A lossless syntax tree for two related shell dialects
//!
//! Every node keeps enough source-location data (line/column/length spans in
//! an external table) that the original input can be reconstructed
//! byte-for-byte, so formatters, linters, and translators can round-trip
//! source without loss. The two documented exceptions: here-document bodies
//! written with `<<-`, and function definitions crossing the dialect
//! translator (normalized to the unified syntax).
//!
//! This crate is the data model only. The lexer and parser that populate
//! trees, the evaluator that walks them, and the glob-to-regex engine are
//! external collaborators; what lives here is the shapes, the nesting rules
//! they enforce at construction time, and the two walkers that only read
//! spans: the source reconstructor and the dialect translator.
//!
//! Layers, leaves to roots:
//!   SpanTable/Token → word parts → words → expressions → commands,
//!   with the second dialect's families alongside and the glob parts
//!   off to the side.

pub mod error;
pub mod glob;
pub mod id;
pub mod lst;
pub mod reconstruct;
pub mod span;
pub mod translate;

pub use error::LstError;
pub use glob::{tokenize_glob, GlobPart};
pub use id::Id;
pub use lst::*;
pub use reconstruct::Reconstructor;
pub use span::{LineId, LineSpan, SpanId, SpanTable, Token};
pub use translate::{translate, TranslateError};
