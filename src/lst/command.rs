//! Command Layer
//!
//! Statements, compound statements, and control flow. Every variant owns its
//! child commands and words plus its own redirect list; redirects are kept
//! per-node so that their order among siblings stays recoverable.
//!
//! Known gap carried over from the original design: the relative source
//! order between a redirect and the surrounding words of the same simple
//! command is not recorded (`echo >f hi` and `echo hi >f` build the same
//! shape). Spans still reconstruct either form; the shape alone does not
//! distinguish them.
//!
//! Compound variants carry a `spids` list: the spans of their keyword and
//! delimiter bytes (`if`, `fi`, `{`, `}`, ...), in source order. The
//! reconstructor merges these with child token spans to recover the full
//! original text.

use serde::Serialize;

use crate::error::LstError;
use crate::id::Id;
use crate::lst::expr::{ArithExpr, BoolExpr, LhsExpr};
use crate::lst::word::Word;
use crate::span::{SpanId, Token};

/// One redirection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Redir {
    /// `> file`, `2>> log`, `< input`, ... The operator token covers the
    /// operator bytes as lexed (a leading fd digit included, e.g. `2>`);
    /// `fd` is the parsed-out descriptor when one was written.
    File {
        fd: Option<i32>,
        op: Token,
        target: Word,
    },
    /// `2>&1`, `<&-`: the target is a descriptor token, not a word.
    Descriptor {
        fd: Option<i32>,
        op: Token,
        target: Token,
    },
    /// `<< EOF` / `<<- EOF` with the collected body lines.
    HereDoc(HereDoc),
}

/// A here-document. `lines` holds one word per body line, in order, covering
/// exactly the literal lines up to (not including) the terminator. With
/// `strip_tabs` set, leading tabs are removed by the producer; this is one
/// of the documented reconstruction exceptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HereDoc {
    pub fd: Option<i32>,
    pub op: Token,
    /// The delimiter as written after the operator (quotes included).
    pub here_begin: Token,
    pub strip_tabs: bool,
    pub lines: Vec<Word>,
    /// The bare terminator text.
    pub here_end: String,
}

/// A `NAME=value` prefix binding on a simple command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvPair {
    pub name: String,
    pub value: Word,
    /// Span of the `NAME=` bytes, when known.
    pub spid: Option<SpanId>,
}

/// One `lhs=rhs` (or `lhs+=rhs`) pair of an assignment builtin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignPair {
    pub lhs: LhsExpr,
    pub op: Id,
    pub rhs: Option<Word>,
    /// Span of the `lhs=` bytes, when known.
    pub spid: Option<SpanId>,
}

/// One arm of a `case` statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseArm {
    pub patterns: Vec<Word>,
    pub action: Vec<Command>,
    /// `;;`, `;&`, or `;;&`.
    pub terminator: Id,
    pub spids: Vec<SpanId>,
}

/// One `if`/`elif` arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfArm {
    pub cond: Vec<Command>,
    pub action: Vec<Command>,
    pub spids: Vec<SpanId>,
}

/// What a `for` loop iterates over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Iterable {
    /// `for x` / `for x in "$@"`.
    IterArgv,
    /// `for x in a b c`.
    IterWords(Vec<Word>),
}

/// A pipeline. Fields are private: [`Command::pipeline`] is the only
/// producer, so the stderr indices of every pipeline that exists are in
/// bounds and the child list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pipeline {
    children: Vec<Command>,
    negated: bool,
    /// Children whose stderr joins the pipe (`|&` positions).
    stderr_indices: Vec<usize>,
    spids: Vec<SpanId>,
}

impl Pipeline {
    pub fn children(&self) -> &[Command] {
        &self.children
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn stderr_indices(&self) -> &[usize] {
        &self.stderr_indices
    }

    pub fn spids(&self) -> &[SpanId] {
        &self.spids
    }
}

/// A statement or compound statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Command {
    /// `:` or an empty command line.
    NoOp,
    /// `ENV=x name args... redirects...`
    Simple {
        env: Vec<EnvPair>,
        words: Vec<Word>,
        redirects: Vec<Redir>,
    },
    /// A command plus its terminator token (`;`, `&`, newline). Purely a
    /// reconstruction aid, not a control-flow node.
    Sentence {
        child: Box<Command>,
        terminator: Token,
    },
    /// `local x=1`, `export FOO=bar`, a bare `x=1`, ...
    Assignment {
        keyword: Id,
        flags: Vec<String>,
        pairs: Vec<AssignPair>,
        spids: Vec<SpanId>,
    },
    Pipeline(Pipeline),
    /// `a && b || c`: `ops.len() + 1 == children.len()`.
    AndOr {
        ops: Vec<Id>,
        children: Vec<Command>,
    },
    /// `do ...; done` body of a loop, kept as its own node so loop headers
    /// and bodies reconstruct independently.
    DoGroup {
        body: Vec<Command>,
        spids: Vec<SpanId>,
    },
    /// `{ ...; }`
    BraceGroup {
        body: Vec<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    /// `( ... )`
    Subshell {
        child: Box<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    /// `(( expr ))`
    DParen {
        child: ArithExpr,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    /// `[[ expr ]]`
    DBracket {
        expr: BoolExpr,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    ForEach(ForEach),
    ForExpr(ForExpr),
    While {
        cond: Vec<Command>,
        body: Box<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    Until {
        cond: Vec<Command>,
        body: Box<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    If {
        arms: Vec<IfArm>,
        else_action: Vec<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    Case {
        to_match: Word,
        arms: Vec<CaseArm>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    /// Either definition syntax; which one was written is recoverable from
    /// spans only. Reconstructing a translated tree normalizes to the
    /// unified syntax (a documented exception).
    FuncDef {
        name: String,
        body: Box<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    },
    /// `break`, `continue`, `return`, `exit`, with an optional argument.
    ControlFlow {
        token: Token,
        arg_word: Option<Word>,
    },
    /// `time pipeline`.
    TimeBlock {
        pipeline: Box<Command>,
        spids: Vec<SpanId>,
    },
}

impl Command {
    /// Build a pipeline, checking the two arity invariants: at least one
    /// child, and every stderr index addressing a child.
    pub fn pipeline(
        children: Vec<Command>,
        negated: bool,
        stderr_indices: Vec<usize>,
    ) -> Result<Command, LstError> {
        Self::pipeline_spanned(children, negated, stderr_indices, Vec::new())
    }

    pub fn pipeline_spanned(
        children: Vec<Command>,
        negated: bool,
        stderr_indices: Vec<usize>,
        spids: Vec<SpanId>,
    ) -> Result<Command, LstError> {
        if children.is_empty() {
            return Err(LstError::IllegalNesting("pipeline with no children".into()));
        }
        if let Some(&index) = stderr_indices.iter().find(|&&i| i >= children.len()) {
            return Err(LstError::InvalidStderrIndex {
                index,
                len: children.len(),
            });
        }
        Ok(Command::Pipeline(Pipeline {
            children,
            negated,
            stderr_indices,
            spids,
        }))
    }

    /// Build an and-or list: n children joined by n-1 `&&`/`||` operators.
    pub fn and_or(ops: Vec<Id>, children: Vec<Command>) -> Result<Command, LstError> {
        if children.len() < 2 || ops.len() + 1 != children.len() {
            return Err(LstError::IllegalNesting(format!(
                "and-or list with {} children and {} operators",
                children.len(),
                ops.len()
            )));
        }
        Ok(Command::AndOr { ops, children })
    }

    /// Build an `if`, which needs at least the initial arm.
    pub fn if_cmd(
        arms: Vec<IfArm>,
        else_action: Vec<Command>,
        redirects: Vec<Redir>,
        spids: Vec<SpanId>,
    ) -> Result<Command, LstError> {
        if arms.is_empty() {
            return Err(LstError::IllegalNesting("if with no arms".into()));
        }
        Ok(Command::If {
            arms,
            else_action,
            redirects,
            spids,
        })
    }
}

/// Builder for `for NAME in words...; do ...; done`.
///
/// The body is fed in last during parsing, so the builder holds an absent
/// body in flight; `finish` refuses to produce a node without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForEach {
    pub var_name: String,
    pub iterable: Iterable,
    pub body: Box<Command>,
    pub redirects: Vec<Redir>,
    pub spids: Vec<SpanId>,
}

#[derive(Debug, Clone)]
pub struct ForEachBuilder {
    var_name: String,
    iterable: Iterable,
    body: Option<Command>,
    redirects: Vec<Redir>,
    spids: Vec<SpanId>,
}

impl ForEachBuilder {
    pub fn new(var_name: impl Into<String>, iterable: Iterable) -> Self {
        Self {
            var_name: var_name.into(),
            iterable,
            body: None,
            redirects: Vec::new(),
            spids: Vec::new(),
        }
    }

    pub fn body(mut self, body: Command) -> Self {
        self.body = Some(body);
        self
    }

    pub fn redirects(mut self, redirects: Vec<Redir>) -> Self {
        self.redirects = redirects;
        self
    }

    pub fn spids(mut self, spids: Vec<SpanId>) -> Self {
        self.spids = spids;
        self
    }

    pub fn finish(self) -> Result<Command, LstError> {
        let body = self
            .body
            .ok_or_else(|| LstError::IllegalNesting("for loop without a body".into()))?;
        Ok(Command::ForEach(ForEach {
            var_name: self.var_name,
            iterable: self.iterable,
            body: Box::new(body),
            redirects: self.redirects,
            spids: self.spids,
        }))
    }
}

/// `for ((init; cond; update)); do ...; done`. All three header slots are
/// optional; the body is not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForExpr {
    pub init: Option<ArithExpr>,
    pub cond: Option<ArithExpr>,
    pub update: Option<ArithExpr>,
    pub body: Box<Command>,
    pub redirects: Vec<Redir>,
    pub spids: Vec<SpanId>,
}

#[derive(Debug, Clone, Default)]
pub struct ForExprBuilder {
    init: Option<ArithExpr>,
    cond: Option<ArithExpr>,
    update: Option<ArithExpr>,
    body: Option<Command>,
    redirects: Vec<Redir>,
    spids: Vec<SpanId>,
}

impl ForExprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(mut self, expr: ArithExpr) -> Self {
        self.init = Some(expr);
        self
    }

    pub fn cond(mut self, expr: ArithExpr) -> Self {
        self.cond = Some(expr);
        self
    }

    pub fn update(mut self, expr: ArithExpr) -> Self {
        self.update = Some(expr);
        self
    }

    pub fn body(mut self, body: Command) -> Self {
        self.body = Some(body);
        self
    }

    pub fn redirects(mut self, redirects: Vec<Redir>) -> Self {
        self.redirects = redirects;
        self
    }

    pub fn spids(mut self, spids: Vec<SpanId>) -> Self {
        self.spids = spids;
        self
    }

    pub fn finish(self) -> Result<Command, LstError> {
        let body = self
            .body
            .ok_or_else(|| LstError::IllegalNesting("for loop without a body".into()))?;
        Ok(Command::ForExpr(ForExpr {
            init: self.init,
            cond: self.cond,
            update: self.update,
            body: Box::new(body),
            redirects: self.redirects,
            spids: self.spids,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Token;

    fn simple(name: &str) -> Command {
        Command::Simple {
            env: vec![],
            words: vec![Word::literal(Token::synthetic(Id::Lit, name))],
            redirects: vec![],
        }
    }

    #[test]
    fn test_pipeline_arity() {
        let pipe = Command::pipeline(vec![simple("a"), simple("b")], false, vec![0]).unwrap();
        if let Command::Pipeline(p) = &pipe {
            assert_eq!(p.children().len(), 2);
            assert_eq!(p.stderr_indices(), &[0]);
            assert!(!p.negated());
        } else {
            panic!("not a pipeline");
        }
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let err = Command::pipeline(vec![], false, vec![]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_stderr_index_out_of_bounds() {
        let err = Command::pipeline(vec![simple("a"), simple("b")], false, vec![2]).unwrap_err();
        assert_eq!(err, LstError::InvalidStderrIndex { index: 2, len: 2 });
    }

    #[test]
    fn test_and_or_arity() {
        let cmd =
            Command::and_or(vec![Id::AndAnd], vec![simple("a"), simple("b")]).unwrap();
        assert!(matches!(cmd, Command::AndOr { .. }));

        let err = Command::and_or(vec![Id::AndAnd], vec![simple("a")]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_if_requires_an_arm() {
        let err = Command::if_cmd(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));

        let cmd = Command::if_cmd(
            vec![IfArm {
                cond: vec![simple("test")],
                action: vec![simple("echo")],
                spids: vec![],
            }],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        assert!(matches!(cmd, Command::If { .. }));
    }

    #[test]
    fn test_for_each_builder_requires_body() {
        let builder = ForEachBuilder::new("x", Iterable::IterArgv);
        assert!(matches!(
            builder.clone().finish(),
            Err(LstError::IllegalNesting(_))
        ));

        let cmd = builder
            .body(Command::DoGroup {
                body: vec![simple("echo")],
                spids: vec![],
            })
            .finish()
            .unwrap();
        assert!(matches!(cmd, Command::ForEach(_)));
    }

    #[test]
    fn test_for_expr_builder_header_slots_optional() {
        let cmd = ForExprBuilder::new()
            .body(Command::DoGroup {
                body: vec![simple("echo")],
                spids: vec![],
            })
            .finish()
            .unwrap();
        if let Command::ForExpr(f) = &cmd {
            assert!(f.init.is_none() && f.cond.is_none() && f.update.is_none());
        } else {
            panic!("not a for-expr");
        }
    }

    #[test]
    fn test_here_doc_keeps_lines_in_order() {
        let doc = HereDoc {
            fd: None,
            op: Token::synthetic(Id::DLessDash, "<<-"),
            here_begin: Token::synthetic(Id::Lit, "EOF"),
            strip_tabs: true,
            lines: vec![
                Word::literal(Token::synthetic(Id::Lit, "first\n")),
                Word::literal(Token::synthetic(Id::Lit, "second\n")),
            ],
            here_end: "EOF".into(),
        };
        assert_eq!(doc.lines.len(), 2);
        assert!(doc.strip_tabs);
        let texts: Vec<&str> = doc
            .lines
            .iter()
            .map(|w| match w {
                Word::Compound(parts) => match &parts[0] {
                    crate::lst::word::WordPart::Literal(t) => t.text.as_str(),
                    _ => panic!("not a literal line"),
                },
                _ => panic!("not a compound line"),
            })
            .collect();
        assert_eq!(texts, vec!["first\n", "second\n"]);
    }

    #[test]
    fn test_sentence_wraps_terminator() {
        let cmd = Command::Sentence {
            child: Box::new(simple("ls")),
            terminator: Token::synthetic(Id::Semi, ";"),
        };
        if let Command::Sentence { terminator, .. } = &cmd {
            assert!(terminator.is_synthetic());
            assert_eq!(terminator.id, Id::Semi);
        } else {
            panic!("not a sentence");
        }
    }
}
