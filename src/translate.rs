//! Dialect Translator
//!
//! Consumes a dialect-1 (legacy) tree and produces the equivalent dialect-2
//! tree, or an explicit error for constructs the second dialect dropped.
//! Translation is a pure function over immutable input; nothing is ever
//! silently skipped — every legacy-only construct comes back as
//! `UnsupportedConstruct` naming what it was.

use thiserror::Error;

use crate::id::Id;
use crate::lst::command::{Command, Iterable, Redir};
use crate::lst::expr::LhsExpr;
use crate::lst::oil::{OilCmd, OilExpr, OilIfArm, OilRedir, OilWord, OilWordPart};
use crate::lst::word::{Word, WordPart};
use crate::span::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The legacy tree contains a construct with no dialect-2 equivalent.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(&'static str),
}

fn unsupported<T>(what: &'static str) -> Result<T, TranslateError> {
    Err(TranslateError::UnsupportedConstruct(what))
}

/// Translate one legacy command into the second dialect.
pub fn translate(cmd: &Command) -> Result<OilCmd, TranslateError> {
    match cmd {
        Command::NoOp => Ok(OilCmd::NoOp),
        Command::Simple {
            env,
            words,
            redirects,
        } => {
            if !env.is_empty() {
                return unsupported("env-prefix bindings on a simple command");
            }
            Ok(OilCmd::Simple {
                words: words.iter().map(translate_word).collect::<Result<_, _>>()?,
                redirects: redirects
                    .iter()
                    .map(translate_redir)
                    .collect::<Result<_, _>>()?,
            })
        }
        Command::Sentence { child, terminator } => Ok(OilCmd::Sentence {
            child: Box::new(translate(child)?),
            terminator: terminator.clone(),
        }),
        Command::Assignment {
            keyword,
            flags,
            pairs,
            ..
        } => {
            if !flags.is_empty() {
                return unsupported("assignment flags");
            }
            translate_assignment(*keyword, pairs)
        }
        Command::Pipeline(p) => {
            if !p.stderr_indices().is_empty() {
                return unsupported("|& stderr pipelines");
            }
            Ok(OilCmd::Pipeline {
                children: p
                    .children()
                    .iter()
                    .map(translate)
                    .collect::<Result<_, _>>()?,
                negated: p.negated(),
            })
        }
        Command::AndOr { ops, children } => Ok(OilCmd::AndOr {
            ops: ops.clone(),
            children: children.iter().map(translate).collect::<Result<_, _>>()?,
        }),
        Command::DoGroup { body, .. } => Ok(OilCmd::Block {
            body: translate_block(body)?,
            spids: vec![],
        }),
        Command::BraceGroup {
            body, redirects, ..
        } => {
            if !redirects.is_empty() {
                return unsupported("redirects on a brace group");
            }
            Ok(OilCmd::Block {
                body: translate_block(body)?,
                spids: vec![],
            })
        }
        Command::Subshell { .. } => unsupported("subshells"),
        Command::DParen { .. } => unsupported("(( )) arithmetic commands"),
        Command::DBracket { .. } => unsupported("[[ ]] conditional commands"),
        Command::ForEach(f) => {
            if !f.redirects.is_empty() {
                return unsupported("redirects on a for loop");
            }
            let words = match &f.iterable {
                Iterable::IterWords(words) => words,
                Iterable::IterArgv => return unsupported("for loops over $@"),
            };
            let items = words
                .iter()
                .map(word_as_expr)
                .collect::<Result<_, _>>()?;
            Ok(OilCmd::For {
                var_name: Token::synthetic(Id::Name, f.var_name.clone()),
                iterable: OilExpr::List(items),
                body: translate_body(&f.body)?,
            })
        }
        Command::ForExpr(_) => unsupported("C-style for loops"),
        Command::While {
            cond,
            body,
            redirects,
            ..
        } => {
            if !redirects.is_empty() {
                return unsupported("redirects on a while loop");
            }
            Ok(OilCmd::While {
                cond: translate_block(cond)?,
                body: translate_body(body)?,
            })
        }
        Command::Until { .. } => unsupported("until loops"),
        Command::If {
            arms,
            else_action,
            redirects,
            ..
        } => {
            if !redirects.is_empty() {
                return unsupported("redirects on an if statement");
            }
            let arms = arms
                .iter()
                .map(|arm| {
                    Ok(OilIfArm {
                        cond: translate_block(&arm.cond)?,
                        action: translate_block(&arm.action)?,
                        spids: vec![],
                    })
                })
                .collect::<Result<_, TranslateError>>()?;
            Ok(OilCmd::If {
                arms,
                else_action: translate_block(else_action)?,
            })
        }
        Command::Case { .. } => unsupported("case statements"),
        Command::FuncDef {
            name,
            body,
            redirects,
            ..
        } => {
            if !redirects.is_empty() {
                return unsupported("redirects on a function definition");
            }
            // Both legacy definition syntaxes normalize to the unified
            // dialect-2 form; this is a documented exception to byte-exact
            // round-tripping.
            Ok(OilCmd::FuncDef {
                name: Token::synthetic(Id::Name, name.clone()),
                params: vec![],
                body: translate_body(body)?,
            })
        }
        Command::ControlFlow { token, arg_word } => {
            if token.id != Id::KwReturn {
                return unsupported("break/continue/exit control flow");
            }
            let arg = match arg_word {
                Some(word) => Some(word_as_expr(word)?),
                None => None,
            };
            Ok(OilCmd::Return(arg))
        }
        Command::TimeBlock { .. } => unsupported("time blocks"),
    }
}

fn translate_block(body: &[Command]) -> Result<Vec<OilCmd>, TranslateError> {
    body.iter().map(translate).collect()
}

/// Loop and function bodies are a single (usually group) command on the
/// legacy side and a statement list on the dialect-2 side.
fn translate_body(body: &Command) -> Result<Vec<OilCmd>, TranslateError> {
    match translate(body)? {
        OilCmd::Block { body, .. } => Ok(body),
        other => Ok(vec![other]),
    }
}

fn translate_assignment(
    keyword: Id,
    pairs: &[crate::lst::command::AssignPair],
) -> Result<OilCmd, TranslateError> {
    let keyword = match keyword {
        Id::AssignNone | Id::AssignLocal => Id::KwVar,
        Id::AssignReadonly => Id::KwConst,
        _ => return unsupported("export/declare assignments"),
    };
    let [pair] = pairs else {
        return unsupported("multi-pair assignments");
    };
    let name = match &pair.lhs {
        LhsExpr::Name(name) => name,
        LhsExpr::IndexedName { .. } => return unsupported("indexed assignment targets"),
    };
    if pair.op != Id::Equals {
        return unsupported("augmented assignment operators");
    }
    let rhs = match &pair.rhs {
        Some(word) => word_as_expr(word)?,
        None => return unsupported("assignments without a value"),
    };
    Ok(OilCmd::VarDecl {
        keyword,
        name: Token::synthetic(Id::Name, name.clone()),
        rhs,
    })
}

/// A legacy word usable where the second dialect wants an expression.
fn word_as_expr(word: &Word) -> Result<OilExpr, TranslateError> {
    match word {
        Word::Compound(parts) => match parts.as_slice() {
            [WordPart::Literal(t)] => Ok(OilExpr::Const(t.clone())),
            [WordPart::SingleQuoted { token, raw: false }] => Ok(OilExpr::Const(token.clone())),
            [WordPart::SimpleVarSub(t)] => Ok(OilExpr::Var(t.clone())),
            _ => unsupported("compound words in expression position"),
        },
        Word::Str(s) => Ok(OilExpr::Const(Token::synthetic(Id::Lit, s.clone()))),
        Word::Empty => unsupported("empty words in expression position"),
        Word::BracedTree(_) => unsupported("brace expansion"),
    }
}

fn translate_word(word: &Word) -> Result<OilWord, TranslateError> {
    match word {
        Word::Compound(parts) => Ok(OilWord::Compound(
            parts
                .iter()
                .map(translate_word_part)
                .collect::<Result<_, _>>()?,
        )),
        Word::Empty => Ok(OilWord::Empty),
        Word::Str(s) => Ok(OilWord::Compound(vec![OilWordPart::Literal(
            Token::synthetic(Id::Lit, s.clone()),
        )])),
        Word::BracedTree(_) => unsupported("brace expansion"),
    }
}

fn translate_word_part(part: &WordPart) -> Result<OilWordPart, TranslateError> {
    match part {
        WordPart::Literal(t) | WordPart::EscapedLiteral(t) => Ok(OilWordPart::Literal(t.clone())),
        WordPart::SingleQuoted { token, .. } => Ok(OilWordPart::SingleQuoted(token.clone())),
        WordPart::DoubleQuoted(dq) => Ok(OilWordPart::DoubleQuoted(
            dq.parts
                .iter()
                .map(translate_word_part)
                .collect::<Result<_, _>>()?,
        )),
        WordPart::SimpleVarSub(t) => Ok(OilWordPart::VarSub(t.clone())),
        WordPart::BracedVarSub(sub) => {
            if sub.prefix_op.is_some() || sub.bracket_op.is_some() {
                return unsupported("${...} prefix and bracket operators");
            }
            Ok(OilWordPart::BracedVarSub {
                name: sub.name.clone(),
                suffix_op: sub.suffix_op.clone(),
            })
        }
        WordPart::TildeSub(_) => unsupported("tilde expansion"),
        WordPart::CommandSub(sub) => Ok(OilWordPart::CommandSub(Box::new(translate(
            &sub.command,
        )?))),
        WordPart::ArithSub(_) => unsupported("$(( )) arithmetic substitution"),
        WordPart::ArrayLiteral(_) => unsupported("array literals"),
        WordPart::ExtGlob(_) => unsupported("extended globs"),
        WordPart::BracedAlt(_) | WordPart::BracedRange(_) => unsupported("brace expansion"),
    }
}

fn translate_redir(redir: &Redir) -> Result<OilRedir, TranslateError> {
    match redir {
        Redir::File { fd, op, target } => Ok(OilRedir {
            fd: *fd,
            op: op.clone(),
            target: translate_word(target)?,
        }),
        Redir::Descriptor { fd, op, target } => Ok(OilRedir {
            fd: *fd,
            op: op.clone(),
            target: OilWord::Compound(vec![OilWordPart::Literal(target.clone())]),
        }),
        Redir::HereDoc(_) => unsupported("here-documents"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lst::command::AssignPair;

    fn lit(text: &str) -> Token {
        Token::synthetic(Id::Lit, text)
    }

    fn simple(words: &[&str]) -> Command {
        Command::Simple {
            env: vec![],
            words: words.iter().map(|w| Word::literal(lit(w))).collect(),
            redirects: vec![],
        }
    }

    #[test]
    fn test_simple_command_translates() {
        let oil = translate(&simple(&["echo", "hi"])).unwrap();
        if let OilCmd::Simple { words, redirects } = &oil {
            assert_eq!(words.len(), 2);
            assert!(redirects.is_empty());
        } else {
            panic!("not a simple command");
        }
    }

    #[test]
    fn test_pipeline_translates() {
        let pipe =
            Command::pipeline(vec![simple(&["a"]), simple(&["b"])], true, vec![]).unwrap();
        let oil = translate(&pipe).unwrap();
        assert!(matches!(
            oil,
            OilCmd::Pipeline { ref children, negated: true } if children.len() == 2
        ));
    }

    #[test]
    fn test_stderr_pipeline_unsupported() {
        let pipe =
            Command::pipeline(vec![simple(&["a"]), simple(&["b"])], false, vec![0]).unwrap();
        let err = translate(&pipe).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedConstruct(_)));
    }

    #[test]
    fn test_assignment_becomes_var_decl() {
        let cmd = Command::Assignment {
            keyword: Id::AssignLocal,
            flags: vec![],
            pairs: vec![AssignPair {
                lhs: LhsExpr::Name("x".into()),
                op: Id::Equals,
                rhs: Some(Word::literal(lit("1"))),
                spid: None,
            }],
            spids: vec![],
        };
        let oil = translate(&cmd).unwrap();
        if let OilCmd::VarDecl { keyword, name, rhs } = &oil {
            assert_eq!(*keyword, Id::KwVar);
            assert_eq!(name.text, "x");
            assert!(matches!(rhs, OilExpr::Const(t) if t.text == "1"));
        } else {
            panic!("not a var decl");
        }
    }

    #[test]
    fn test_readonly_becomes_const() {
        let cmd = Command::Assignment {
            keyword: Id::AssignReadonly,
            flags: vec![],
            pairs: vec![AssignPair {
                lhs: LhsExpr::Name("x".into()),
                op: Id::Equals,
                rhs: Some(Word::literal(lit("1"))),
                spid: None,
            }],
            spids: vec![],
        };
        assert!(matches!(
            translate(&cmd).unwrap(),
            OilCmd::VarDecl { keyword: Id::KwConst, .. }
        ));
    }

    #[test]
    fn test_array_literal_unsupported() {
        let word = Word::compound(vec![WordPart::ArrayLiteral(vec![])]).unwrap();
        let cmd = Command::Simple {
            env: vec![],
            words: vec![word],
            redirects: vec![],
        };
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("array literals")
        );
    }

    #[test]
    fn test_for_each_over_words() {
        let cmd = crate::lst::command::ForEachBuilder::new(
            "x",
            Iterable::IterWords(vec![Word::literal(lit("a")), Word::literal(lit("b"))]),
        )
        .body(Command::DoGroup {
            body: vec![simple(&["echo"])],
            spids: vec![],
        })
        .finish()
        .unwrap();

        let oil = translate(&cmd).unwrap();
        if let OilCmd::For { iterable: OilExpr::List(items), body, .. } = &oil {
            assert_eq!(items.len(), 2);
            assert_eq!(body.len(), 1);
        } else {
            panic!("not a for loop");
        }
    }

    #[test]
    fn test_for_each_redirect_is_unsupported_not_dropped() {
        let cmd = crate::lst::command::ForEachBuilder::new(
            "x",
            Iterable::IterWords(vec![Word::literal(lit("a"))]),
        )
        .body(Command::DoGroup {
            body: vec![simple(&["echo"])],
            spids: vec![],
        })
        .redirects(vec![Redir::File {
            fd: None,
            op: Token::synthetic(Id::Great, ">"),
            target: Word::literal(lit("log")),
        }])
        .finish()
        .unwrap();
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("redirects on a for loop")
        );
    }

    #[test]
    fn test_assignment_flags_are_unsupported_not_dropped() {
        // local -r x=1
        let cmd = Command::Assignment {
            keyword: Id::AssignLocal,
            flags: vec!["-r".into()],
            pairs: vec![AssignPair {
                lhs: LhsExpr::Name("x".into()),
                op: Id::Equals,
                rhs: Some(Word::literal(lit("1"))),
                spid: None,
            }],
            spids: vec![],
        };
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("assignment flags")
        );
    }

    #[test]
    fn test_here_doc_redirect_is_unsupported() {
        use crate::lst::command::HereDoc;
        let cmd = Command::Simple {
            env: vec![],
            words: vec![Word::literal(lit("cat"))],
            redirects: vec![Redir::HereDoc(HereDoc {
                fd: None,
                op: Token::synthetic(Id::DLess, "<<"),
                here_begin: Token::synthetic(Id::Lit, "EOF"),
                strip_tabs: false,
                lines: vec![Word::literal(lit("hello\n"))],
                here_end: "EOF".into(),
            })],
        };
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("here-documents")
        );
    }

    #[test]
    fn test_until_is_unsupported_not_dropped() {
        let cmd = Command::Until {
            cond: vec![simple(&["true"])],
            body: Box::new(simple(&["echo"])),
            redirects: vec![],
            spids: vec![],
        };
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("until loops")
        );
    }

    #[test]
    fn test_nested_unsupported_surfaces_from_depth() {
        // The offending construct is buried in an if arm's action.
        let inner = Command::Simple {
            env: vec![],
            words: vec![Word::braced_tree(vec![WordPart::BracedAlt(vec![
                Word::literal(lit("a")),
                Word::literal(lit("b")),
            ])])],
            redirects: vec![],
        };
        let cmd = Command::if_cmd(
            vec![crate::lst::command::IfArm {
                cond: vec![simple(&["true"])],
                action: vec![inner],
                spids: vec![],
            }],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(
            translate(&cmd).unwrap_err(),
            TranslateError::UnsupportedConstruct("brace expansion")
        );
    }

    #[test]
    fn test_return_maps_to_oil_return() {
        let cmd = Command::ControlFlow {
            token: Token::synthetic(Id::KwReturn, "return"),
            arg_word: Some(Word::literal(lit("1"))),
        };
        assert!(matches!(
            translate(&cmd).unwrap(),
            OilCmd::Return(Some(OilExpr::Const(_)))
        ));
    }

    #[test]
    fn test_func_def_normalizes() {
        let cmd = Command::FuncDef {
            name: "greet".into(),
            body: Box::new(Command::BraceGroup {
                body: vec![simple(&["echo", "hi"])],
                redirects: vec![],
                spids: vec![],
            }),
            redirects: vec![],
            spids: vec![],
        };
        let oil = translate(&cmd).unwrap();
        if let OilCmd::FuncDef { name, params, body } = &oil {
            assert_eq!(name.text, "greet");
            assert!(params.is_empty());
            assert_eq!(body.len(), 1);
        } else {
            panic!("not a func def");
        }
    }
}
