//! Dual-Dialect Layer
//!
//! The second dialect's node families. They mirror the legacy word and
//! command layers structurally but are a closed, separate set of types:
//! no trait or enum unifies them with the legacy families, so an evaluator
//! for one dialect cannot be handed a tree of the other. Only the lexical
//! layer (`Token`, `SpanId`) and the shared `${...}` modifier shapes
//! (`BracketOp`, `SuffixOp`) cross the boundary.
//!
//! Legacy-only constructs (array literals, extended globs, brace trees,
//! `until`, `case`, C-style `for`) have no equivalent here on purpose; the
//! translator reports them as unsupported rather than approximating.

use serde::Serialize;

use crate::id::Id;
use crate::lst::word::{BracketOp, SuffixOp};
use crate::span::{SpanId, Token};

/// Expression in the second dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OilExpr {
    /// A variable reference.
    Var(Token),
    /// A literal constant (string or number token).
    Const(Token),
    /// `[a, b, c]`.
    List(Vec<OilExpr>),
    Unary {
        op: Id,
        child: Box<OilExpr>,
    },
    Binary {
        op: Id,
        left: Box<OilExpr>,
        right: Box<OilExpr>,
    },
    FuncCall {
        name: Token,
        args: Vec<OilExpr>,
    },
    /// Indexing or whole-collection access, reusing the shared bracket
    /// shape from the lexical boundary.
    Subscript {
        collection: Box<OilExpr>,
        op: BracketOp,
    },
}

/// One fragment of a dialect-2 word. Deliberately smaller than the legacy
/// family: no array literals, no brace trees, no extended globs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OilWordPart {
    Literal(Token),
    SingleQuoted(Token),
    DoubleQuoted(Vec<OilWordPart>),
    /// `$name`.
    VarSub(Token),
    /// `${name}` with the shared suffix shape; dialect 2 keeps only the
    /// suffix slot.
    BracedVarSub {
        name: Token,
        suffix_op: Option<SuffixOp>,
    },
    /// `$[expr]` expression substitution.
    ExprSub(OilExpr),
    CommandSub(Box<OilCmd>),
}

/// A complete dialect-2 word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OilWord {
    Compound(Vec<OilWordPart>),
    Empty,
}

/// A dialect-2 redirection. Structurally like the legacy file redirect;
/// here-documents and descriptor games are not part of this dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OilRedir {
    pub fd: Option<i32>,
    pub op: Token,
    pub target: OilWord,
}

/// One `if`/`elif` arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OilIfArm {
    pub cond: Vec<OilCmd>,
    pub action: Vec<OilCmd>,
    pub spids: Vec<SpanId>,
}

/// A dialect-2 statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OilCmd {
    NoOp,
    Simple {
        words: Vec<OilWord>,
        redirects: Vec<OilRedir>,
    },
    Sentence {
        child: Box<OilCmd>,
        terminator: Token,
    },
    Block {
        body: Vec<OilCmd>,
        spids: Vec<SpanId>,
    },
    Pipeline {
        children: Vec<OilCmd>,
        negated: bool,
    },
    AndOr {
        ops: Vec<Id>,
        children: Vec<OilCmd>,
    },
    /// `var name = expr` / `const name = expr`.
    VarDecl {
        keyword: Id,
        name: Token,
        rhs: OilExpr,
    },
    /// `setvar name = expr` (or augmented `+=` and friends).
    SetVar {
        lhs: Token,
        op: Id,
        rhs: OilExpr,
    },
    If {
        arms: Vec<OilIfArm>,
        else_action: Vec<OilCmd>,
    },
    While {
        cond: Vec<OilCmd>,
        body: Vec<OilCmd>,
    },
    For {
        var_name: Token,
        iterable: OilExpr,
        body: Vec<OilCmd>,
    },
    FuncDef {
        name: Token,
        params: Vec<Token>,
        body: Vec<OilCmd>,
    },
    Return(Option<OilExpr>),
}
