//! Lossless Syntax Tree node families.
//!
//! One module per schema layer, leaves to roots:
//!
//! - `word`: word parts, words, and `${...}` modifier shapes
//! - `expr`: the embedded arithmetic and conditional sub-languages
//! - `command`: statements, compound statements, and control flow
//! - `oil`: the second dialect's parallel, closed families
//!
//! All node types are immutable after construction and may be shared
//! read-only across threads together with their frozen span table.

pub mod command;
pub mod expr;
pub mod oil;
pub mod word;

pub use command::{
    AssignPair, CaseArm, Command, EnvPair, ForEach, ForEachBuilder, ForExpr, ForExprBuilder,
    HereDoc, IfArm, Iterable, Pipeline, Redir,
};
pub use expr::{ArithExpr, BoolExpr, LhsExpr};
pub use oil::{OilCmd, OilExpr, OilIfArm, OilRedir, OilWord, OilWordPart};
pub use word::{
    ArithSub, ArrayItem, BraceRangeValue, BracedStep, BracedVarSub, BracedVarSubBuilder,
    BracketOp, CommandSub, DoubleQuoted, ExtGlob, SuffixOp, Word, WordPart,
};
