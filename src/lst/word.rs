//! Word Layer
//!
//! A shell word is an ordered sequence of parts: literals, quoting regions,
//! substitutions, and brace expressions. Illegal nestings that the lexer can
//! never produce are rejected at construction time rather than trusted away:
//! a double-quoted region may not contain a single-quoted leaf, and a
//! compound word may not contain either brace-tree part (those are only
//! legal as direct command arguments, via `Word::braced_tree`).

use serde::Serialize;

use crate::error::LstError;
use crate::id::Id;
use crate::lst::command::Command;
use crate::lst::expr::ArithExpr;
use crate::span::{SpanId, Token};

/// One fragment of a word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WordPart {
    /// Plain literal text.
    Literal(Token),
    /// A backslash escape such as `\x`; the token covers both bytes.
    EscapedLiteral(Token),
    /// `'...'` or, when `raw` is set, `$'...'`. The token covers the whole
    /// quoted region including the quotes.
    SingleQuoted { token: Token, raw: bool },
    /// `"..."`; children are restricted at construction time.
    DoubleQuoted(DoubleQuoted),
    /// `$name` without braces. The token covers `$name`.
    SimpleVarSub(Token),
    /// `${name...}` with optional prefix, bracket, and suffix operators.
    BracedVarSub(BracedVarSub),
    /// `~` or `~user`.
    TildeSub(Token),
    /// `$(...)` or backtick command substitution.
    CommandSub(CommandSub),
    /// `$((...))` arithmetic substitution.
    ArithSub(ArithSub),
    /// `(a b c)` array literal in an assignment.
    ArrayLiteral(Vec<ArrayItem>),
    /// `@(...)`, `*(...)`, `+(...)`, `?(...)`, `!(...)`.
    ExtGlob(ExtGlob),
    /// `{a,b,c}` alternation, produced by the brace-detection pass.
    BracedAlt(Vec<Word>),
    /// `{1..10}` or `{a..z}` range, produced by the brace-detection pass.
    BracedRange(BracedStep),
}

impl WordPart {
    /// Assemble a `"..."` region. Single-quoted leaves (raw or not) and
    /// brace-tree parts cannot appear inside double quotes: a `'` between
    /// double quotes lexes as a plain literal character, so the lexer never
    /// produces such a part there and the schema refuses to represent it.
    pub fn double_quoted(parts: Vec<WordPart>) -> Result<WordPart, LstError> {
        for part in &parts {
            match part {
                WordPart::SingleQuoted { .. } => {
                    return Err(LstError::IllegalNesting(
                        "single-quoted part inside a double-quoted region".into(),
                    ));
                }
                WordPart::BracedAlt(_) | WordPart::BracedRange(_) => {
                    return Err(LstError::IllegalNesting(
                        "brace-tree part inside a double-quoted region".into(),
                    ));
                }
                _ => {}
            }
        }
        Ok(WordPart::DoubleQuoted(DoubleQuoted { parts, spids: Vec::new() }))
    }

    /// Like [`WordPart::double_quoted`], also recording the spans of the
    /// opening and closing quote characters.
    pub fn double_quoted_spanned(
        parts: Vec<WordPart>,
        left: SpanId,
        right: SpanId,
    ) -> Result<WordPart, LstError> {
        match Self::double_quoted(parts)? {
            WordPart::DoubleQuoted(mut dq) => {
                dq.spids = vec![left, right];
                Ok(WordPart::DoubleQuoted(dq))
            }
            _ => unreachable!(),
        }
    }

    /// True for the two parts produced by the brace-detection pass, which
    /// are only legal directly under `Word::BracedTree`.
    pub fn is_brace_tree(&self) -> bool {
        matches!(self, WordPart::BracedAlt(_) | WordPart::BracedRange(_))
    }
}

/// Payload of `WordPart::DoubleQuoted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoubleQuoted {
    pub parts: Vec<WordPart>,
    /// Spans of the opening and closing quotes, when known.
    pub spids: Vec<SpanId>,
}

/// Payload of `WordPart::CommandSub`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandSub {
    /// The opening token: `$(` or a backtick.
    pub left: Token,
    pub command: Box<Command>,
    /// Span of the closing delimiter, when known.
    pub right_spid: Option<SpanId>,
}

/// Payload of `WordPart::ArithSub`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArithSub {
    pub expr: ArithExpr,
    /// Spans of `$((` and `))`, when known.
    pub spids: Vec<SpanId>,
}

/// Payload of `WordPart::ExtGlob`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtGlob {
    /// The opening operator token, e.g. `@(`.
    pub op: Token,
    pub arms: Vec<Word>,
    /// Span of the closing paren, when known.
    pub right_spid: Option<SpanId>,
}

/// One element of an array literal: `value` or `[key]=value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayItem {
    pub key: Option<Word>,
    pub value: Word,
}

/// Endpoint of a brace range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BraceRangeValue {
    Number(i64),
    Char(char),
}

/// `{start..end}` with an optional step and zero-padding width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracedStep {
    pub start: BraceRangeValue,
    pub end: BraceRangeValue,
    pub step: Option<i64>,
    /// Width for zero-padded numeric ranges like `{01..10}`.
    pub width: Option<usize>,
}

/// `${name}` with at most one modifier per category.
///
/// The three modifier slots are optional and set through
/// [`BracedVarSubBuilder`]; setting the same category twice is a
/// construction-time `MalformedVarSub` error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracedVarSub {
    /// The variable name token (covers just the name bytes).
    pub name: Token,
    /// `!` indirection or `#` length.
    pub prefix_op: Option<Id>,
    /// `[...]` index or whole-array access.
    pub bracket_op: Option<BracketOp>,
    /// `:-`, `##`, pattern substitution, slice, and friends.
    pub suffix_op: Option<SuffixOp>,
    /// Spans of `${` and `}`, when known.
    pub spids: Vec<SpanId>,
}

impl BracedVarSub {
    pub fn builder(name: Token) -> BracedVarSubBuilder {
        BracedVarSubBuilder {
            sub: BracedVarSub {
                name,
                prefix_op: None,
                bracket_op: None,
                suffix_op: None,
                spids: Vec::new(),
            },
        }
    }
}

/// Step-wise assembly of a `${...}` substitution, detecting duplicate
/// modifier categories as the parser feeds them in.
#[derive(Debug, Clone)]
pub struct BracedVarSubBuilder {
    sub: BracedVarSub,
}

impl BracedVarSubBuilder {
    pub fn prefix_op(mut self, op: Id) -> Result<Self, LstError> {
        if self.sub.prefix_op.is_some() {
            return Err(LstError::MalformedVarSub("prefix"));
        }
        self.sub.prefix_op = Some(op);
        Ok(self)
    }

    pub fn bracket_op(mut self, op: BracketOp) -> Result<Self, LstError> {
        if self.sub.bracket_op.is_some() {
            return Err(LstError::MalformedVarSub("bracket"));
        }
        self.sub.bracket_op = Some(op);
        Ok(self)
    }

    pub fn suffix_op(mut self, op: SuffixOp) -> Result<Self, LstError> {
        if self.sub.suffix_op.is_some() {
            return Err(LstError::MalformedVarSub("suffix"));
        }
        self.sub.suffix_op = Some(op);
        Ok(self)
    }

    pub fn spids(mut self, left: SpanId, right: SpanId) -> Self {
        self.sub.spids = vec![left, right];
        self
    }

    pub fn build(self) -> BracedVarSub {
        self.sub
    }
}

/// `[...]` operator inside `${...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BracketOp {
    /// `[@]` or `[*]`.
    WholeArray(Id),
    /// `[expr]`.
    ArrayIndex(ArithExpr),
}

/// Suffix operator inside `${...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SuffixOp {
    /// `:-`, `:=`, `:?`, `:+`, their no-colon forms, and `#`/`##`/`%`/`%%`
    /// pattern stripping. The operator bytes live in the gap between the
    /// name token and the argument word.
    StringUnary { op: Id, arg: Word },
    /// `/pat/replace` substitution.
    PatSub {
        pat: Word,
        replace: Option<Word>,
        replace_all: bool,
    },
    /// `:begin` or `:begin:length` slicing.
    Slice {
        begin: Option<ArithExpr>,
        length: Option<ArithExpr>,
    },
}

/// A complete shell word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Word {
    /// The normal case: an ordered part sequence. Built through
    /// [`Word::compound`] so brace-tree parts cannot sneak in.
    Compound(Vec<WordPart>),
    /// A word containing brace expressions, legal only as a direct command
    /// argument. The brace-detection pass is its sole producer.
    BracedTree(Vec<WordPart>),
    /// An explicitly empty word, e.g. the value in `x=`.
    Empty,
    /// A raw string carrying no spans; appears post-evaluation only.
    Str(String),
}

impl Word {
    /// Assemble an ordinary word. Brace-tree parts are rejected: they may
    /// only appear under [`Word::BracedTree`].
    pub fn compound(parts: Vec<WordPart>) -> Result<Word, LstError> {
        if let Some(part) = parts.iter().find(|p| p.is_brace_tree()) {
            return Err(LstError::IllegalNesting(format!(
                "{} part inside a compound word",
                match part {
                    WordPart::BracedAlt(_) => "brace-alternation",
                    _ => "brace-range",
                }
            )));
        }
        Ok(Word::Compound(parts))
    }

    /// The brace-detection pass's entry point; the only constructor that
    /// accepts brace-tree parts.
    pub fn braced_tree(parts: Vec<WordPart>) -> Word {
        Word::BracedTree(parts)
    }

    /// A word of a single literal token.
    pub fn literal(token: Token) -> Word {
        Word::Compound(vec![WordPart::Literal(token)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{LineId, SpanTable};

    fn lit(text: &str) -> Token {
        Token::synthetic(Id::Lit, text)
    }

    #[test]
    fn test_compound_word() {
        let word = Word::compound(vec![WordPart::Literal(lit("hello"))]).unwrap();
        assert!(matches!(word, Word::Compound(ref parts) if parts.len() == 1));
    }

    #[test]
    fn test_compound_rejects_brace_alt() {
        let brace = WordPart::BracedAlt(vec![Word::literal(lit("a")), Word::literal(lit("b"))]);
        let err = Word::compound(vec![brace]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_compound_rejects_brace_range() {
        let range = WordPart::BracedRange(BracedStep {
            start: BraceRangeValue::Number(1),
            end: BraceRangeValue::Number(10),
            step: None,
            width: None,
        });
        let err = Word::compound(vec![range]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_braced_tree_accepts_brace_parts() {
        let range = WordPart::BracedRange(BracedStep {
            start: BraceRangeValue::Char('a'),
            end: BraceRangeValue::Char('z'),
            step: Some(2),
            width: None,
        });
        let word = Word::braced_tree(vec![range]);
        assert!(matches!(word, Word::BracedTree(_)));
    }

    #[test]
    fn test_double_quoted_rejects_single_quoted_leaf() {
        let sq = WordPart::SingleQuoted {
            token: Token::synthetic(Id::RawSingleQuote, "$'x'"),
            raw: true,
        };
        let err = WordPart::double_quoted(vec![sq]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_double_quoted_accepts_substitutions() {
        let parts = vec![
            WordPart::Literal(lit("hello ")),
            WordPart::SimpleVarSub(Token::synthetic(Id::VSubName, "$name")),
        ];
        let dq = WordPart::double_quoted(parts).unwrap();
        assert!(matches!(dq, WordPart::DoubleQuoted(ref d) if d.parts.len() == 2));
    }

    #[test]
    fn test_braced_var_sub_builder_scenario_b() {
        // ${x:-default}
        let mut table = SpanTable::from_source("${x:-default}\n");
        let name = table.token_at(Id::VSubName, LineId(0), 2, 1).unwrap();
        let arg = table.token_at(Id::Lit, LineId(0), 5, 7).unwrap();
        let sub = BracedVarSub::builder(name)
            .suffix_op(SuffixOp::StringUnary {
                op: Id::VTestColonHyphen,
                arg: Word::literal(arg),
            })
            .unwrap()
            .build();
        assert!(sub.prefix_op.is_none());
        assert!(sub.bracket_op.is_none());
        assert!(matches!(
            sub.suffix_op,
            Some(SuffixOp::StringUnary { op: Id::VTestColonHyphen, .. })
        ));
    }

    #[test]
    fn test_duplicate_suffix_op_rejected() {
        let make = || SuffixOp::StringUnary {
            op: Id::VTestColonHyphen,
            arg: Word::literal(Token::synthetic(Id::Lit, "d")),
        };
        let err = BracedVarSub::builder(Token::synthetic(Id::VSubName, "x"))
            .suffix_op(make())
            .unwrap()
            .suffix_op(make())
            .unwrap_err();
        assert_eq!(err, LstError::MalformedVarSub("suffix"));
    }

    #[test]
    fn test_duplicate_prefix_op_rejected() {
        let err = BracedVarSub::builder(Token::synthetic(Id::VSubName, "x"))
            .prefix_op(Id::VSubBang)
            .unwrap()
            .prefix_op(Id::VSubPound)
            .unwrap_err();
        assert_eq!(err, LstError::MalformedVarSub("prefix"));
    }

    #[test]
    fn test_duplicate_bracket_op_rejected() {
        let err = BracedVarSub::builder(Token::synthetic(Id::VSubName, "a"))
            .bracket_op(BracketOp::WholeArray(Id::ArithAt))
            .unwrap()
            .bracket_op(BracketOp::WholeArray(Id::ArithStar))
            .unwrap_err();
        assert_eq!(err, LstError::MalformedVarSub("bracket"));
    }
}
