//! Expression Layers
//!
//! The arithmetic and conditional sub-languages embedded inside words and
//! commands. These are pure operator-tree shapes: every operator is an `Id`
//! from the registry, and no evaluation semantics (coercion, truthiness,
//! short-circuiting) are encoded here.

use serde::Serialize;

use crate::id::Id;
use crate::lst::word::Word;
use crate::span::Token;

/// Arithmetic expression, as found in `$((...))`, `((...))`, array
/// subscripts, and slice bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArithExpr {
    /// A variable reference; the token covers the name.
    VarRef(Token),
    /// A word to be coerced by the evaluator (numbers included).
    Word(Word),
    Unary {
        op: Id,
        child: Box<ArithExpr>,
    },
    Binary {
        op: Id,
        left: Box<ArithExpr>,
        right: Box<ArithExpr>,
    },
    TernaryOp {
        cond: Box<ArithExpr>,
        true_expr: Box<ArithExpr>,
        false_expr: Box<ArithExpr>,
    },
    /// `f(a, b)`; zero arguments is legal and round-trips to `f()`.
    FuncCall {
        name: Token,
        args: Vec<ArithExpr>,
    },
    /// `x++`, `--x` and friends.
    UnaryAssign {
        op: Id,
        child: LhsExpr,
    },
    /// `x = e`, `x += e` and friends.
    BinaryAssign {
        op: Id,
        left: LhsExpr,
        right: Box<ArithExpr>,
    },
}

/// Conditional expression, as found in `[[ ... ]]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BoolExpr {
    /// A bare word tested for non-emptiness.
    WordTest(Word),
    /// `left OP right` where OP is a string, numeric, or file comparison.
    Binary { op: Id, left: Word, right: Word },
    /// `-f path`, `-z str` and friends.
    Unary { op: Id, child: Word },
    LogicalNot(Box<BoolExpr>),
    LogicalAnd(Box<BoolExpr>, Box<BoolExpr>),
    LogicalOr(Box<BoolExpr>, Box<BoolExpr>),
}

/// Assignment target in arithmetic and assignment contexts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LhsExpr {
    Name(String),
    IndexedName { name: String, index: Box<ArithExpr> },
}
