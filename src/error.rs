//! Construction-time error taxonomy.
//!
//! Every variant here is raised while a tree is being assembled, never while
//! one is being read: nodes are immutable after construction, so a tree that
//! exists is a tree that passed these checks. All errors are fatal to the
//! parse unit being built; no partial tree is handed back.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LstError {
    /// A token or node references a line or span the span table does not
    /// contain, or a span that runs past the end of its line.
    #[error("span out of range: {0}")]
    SpanOutOfRange(String),

    /// A `${...}` substitution was given two modifiers of the same
    /// category (prefix, bracket, or suffix).
    #[error("duplicate {0} operator on ${{...}} substitution")]
    MalformedVarSub(&'static str),

    /// A pipeline's stderr-redirect index does not address a child.
    #[error("stderr index {index} out of range for pipeline with {len} children")]
    InvalidStderrIndex { index: usize, len: usize },

    /// A statically-disallowed parent/child combination, or an empty child
    /// list on a variant that requires at least one child.
    #[error("illegal nesting: {0}")]
    IllegalNesting(String),
}
