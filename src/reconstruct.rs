//! Source Reconstructor
//!
//! Walks a tree, gathers every real (non-synthetic) span it carries, and
//! re-emits the original bytes: each span's text plus the gap text between
//! consecutive spans, taken from the stored source lines. Because the gaps
//! come from the same lines the spans address, the output reproduces the
//! input byte-for-byte from the first spanned byte to the last.
//!
//! Two documented exceptions where output may differ from the original:
//! here-document bodies written with `<<-` (leading tabs were stripped by
//! the producer) and translated function definitions (normalized to the
//! unified syntax).

use crate::error::LstError;
use crate::lst::command::{AssignPair, CaseArm, Command, HereDoc, IfArm, Iterable, Redir};
use crate::lst::expr::{ArithExpr, BoolExpr};
use crate::lst::oil::{OilCmd, OilIfArm, OilRedir, OilWord, OilWordPart};
use crate::lst::word::{BracketOp, SuffixOp, Word, WordPart};
use crate::span::{SpanId, SpanTable, Token};

/// Re-emits original source text for any subtree, legacy or dialect 2.
pub struct Reconstructor<'a> {
    table: &'a SpanTable,
}

impl<'a> Reconstructor<'a> {
    pub fn new(table: &'a SpanTable) -> Self {
        Self { table }
    }

    pub fn command(&self, cmd: &Command) -> Result<String, LstError> {
        let mut spans = Vec::new();
        collect_command(cmd, &mut spans);
        self.emit(spans)
    }

    pub fn word(&self, word: &Word) -> Result<String, LstError> {
        let mut spans = Vec::new();
        collect_word(word, &mut spans);
        self.emit(spans)
    }

    pub fn redir(&self, redir: &Redir) -> Result<String, LstError> {
        let mut spans = Vec::new();
        collect_redir(redir, &mut spans);
        self.emit(spans)
    }

    pub fn oil_cmd(&self, cmd: &OilCmd) -> Result<String, LstError> {
        let mut spans = Vec::new();
        collect_oil_cmd(cmd, &mut spans);
        self.emit(spans)
    }

    /// Order the gathered spans by source position, verify they do not
    /// overlap, and concatenate span text with the gap text between
    /// consecutive spans.
    fn emit(&self, mut spans: Vec<SpanId>) -> Result<String, LstError> {
        // Resolve before sorting so a dangling id fails loudly.
        let mut resolved = Vec::with_capacity(spans.len());
        for &id in &spans {
            resolved.push(*self.table.span(id)?);
        }
        let mut order: Vec<usize> = (0..spans.len()).collect();
        order.sort_by_key(|&i| (resolved[i].line, resolved[i].col, resolved[i].end_col()));
        spans = order.iter().map(|&i| spans[i]).collect();
        let resolved: Vec<_> = order.iter().map(|&i| resolved[i]).collect();

        let mut out = String::new();
        for (i, (&id, span)) in spans.iter().zip(&resolved).enumerate() {
            if i > 0 {
                let prev = &resolved[i - 1];
                if span.line < prev.line
                    || (span.line == prev.line && span.col < prev.end_col())
                {
                    return Err(LstError::IllegalNesting(format!(
                        "overlapping spans in reconstruction order at line {} col {}",
                        span.line.0, span.col
                    )));
                }
                self.push_gap(prev, span, &mut out)?;
            }
            out.push_str(self.table.span_text(id)?);
        }
        Ok(out)
    }

    /// The source bytes strictly between two non-overlapping spans.
    fn push_gap(
        &self,
        prev: &crate::span::LineSpan,
        next: &crate::span::LineSpan,
        out: &mut String,
    ) -> Result<(), LstError> {
        if prev.line == next.line {
            let line = self.table.line_text(prev.line)?;
            out.push_str(&line[prev.end_col() as usize..next.col as usize]);
            return Ok(());
        }
        let first = self.table.line_text(prev.line)?;
        out.push_str(&first[prev.end_col() as usize..]);
        for line_no in (prev.line.0 + 1)..next.line.0 {
            out.push_str(self.table.line_text(crate::span::LineId(line_no))?);
        }
        let last = self.table.line_text(next.line)?;
        out.push_str(&last[..next.col as usize]);
        Ok(())
    }
}

fn collect_token(token: &Token, out: &mut Vec<SpanId>) {
    // Synthetic tokens have no source backing and are skipped.
    if let Some(id) = token.span {
        out.push(id);
    }
}

fn collect_word(word: &Word, out: &mut Vec<SpanId>) {
    match word {
        Word::Compound(parts) | Word::BracedTree(parts) => {
            for part in parts {
                collect_word_part(part, out);
            }
        }
        Word::Empty | Word::Str(_) => {}
    }
}

fn collect_word_part(part: &WordPart, out: &mut Vec<SpanId>) {
    match part {
        WordPart::Literal(t)
        | WordPart::EscapedLiteral(t)
        | WordPart::SimpleVarSub(t)
        | WordPart::TildeSub(t) => collect_token(t, out),
        WordPart::SingleQuoted { token, .. } => collect_token(token, out),
        WordPart::DoubleQuoted(dq) => {
            out.extend(&dq.spids);
            for part in &dq.parts {
                collect_word_part(part, out);
            }
        }
        WordPart::BracedVarSub(sub) => {
            out.extend(&sub.spids);
            collect_token(&sub.name, out);
            if let Some(op) = &sub.bracket_op {
                collect_bracket_op(op, out);
            }
            if let Some(op) = &sub.suffix_op {
                collect_suffix_op(op, out);
            }
        }
        WordPart::CommandSub(sub) => {
            collect_token(&sub.left, out);
            collect_command(&sub.command, out);
            out.extend(sub.right_spid);
        }
        WordPart::ArithSub(sub) => {
            out.extend(&sub.spids);
            collect_arith(&sub.expr, out);
        }
        WordPart::ArrayLiteral(items) => {
            for item in items {
                if let Some(key) = &item.key {
                    collect_word(key, out);
                }
                collect_word(&item.value, out);
            }
        }
        WordPart::ExtGlob(eg) => {
            collect_token(&eg.op, out);
            for arm in &eg.arms {
                collect_word(arm, out);
            }
            out.extend(eg.right_spid);
        }
        WordPart::BracedAlt(words) => {
            for word in words {
                collect_word(word, out);
            }
        }
        WordPart::BracedRange(_) => {}
    }
}

fn collect_bracket_op(op: &BracketOp, out: &mut Vec<SpanId>) {
    match op {
        BracketOp::WholeArray(_) => {}
        BracketOp::ArrayIndex(expr) => collect_arith(expr, out),
    }
}

fn collect_suffix_op(op: &SuffixOp, out: &mut Vec<SpanId>) {
    match op {
        SuffixOp::StringUnary { arg, .. } => collect_word(arg, out),
        SuffixOp::PatSub { pat, replace, .. } => {
            collect_word(pat, out);
            if let Some(replace) = replace {
                collect_word(replace, out);
            }
        }
        SuffixOp::Slice { begin, length } => {
            if let Some(begin) = begin {
                collect_arith(begin, out);
            }
            if let Some(length) = length {
                collect_arith(length, out);
            }
        }
    }
}

fn collect_arith(expr: &ArithExpr, out: &mut Vec<SpanId>) {
    match expr {
        ArithExpr::VarRef(t) => collect_token(t, out),
        ArithExpr::Word(w) => collect_word(w, out),
        ArithExpr::Unary { child, .. } => collect_arith(child, out),
        ArithExpr::Binary { left, right, .. } => {
            collect_arith(left, out);
            collect_arith(right, out);
        }
        ArithExpr::TernaryOp {
            cond,
            true_expr,
            false_expr,
        } => {
            collect_arith(cond, out);
            collect_arith(true_expr, out);
            collect_arith(false_expr, out);
        }
        ArithExpr::FuncCall { name, args } => {
            collect_token(name, out);
            for arg in args {
                collect_arith(arg, out);
            }
        }
        ArithExpr::UnaryAssign { .. } => {}
        ArithExpr::BinaryAssign { right, .. } => collect_arith(right, out),
    }
}

fn collect_bool(expr: &BoolExpr, out: &mut Vec<SpanId>) {
    match expr {
        BoolExpr::WordTest(w) => collect_word(w, out),
        BoolExpr::Binary { left, right, .. } => {
            collect_word(left, out);
            collect_word(right, out);
        }
        BoolExpr::Unary { child, .. } => collect_word(child, out),
        BoolExpr::LogicalNot(child) => collect_bool(child, out),
        BoolExpr::LogicalAnd(left, right) | BoolExpr::LogicalOr(left, right) => {
            collect_bool(left, out);
            collect_bool(right, out);
        }
    }
}

fn collect_redir(redir: &Redir, out: &mut Vec<SpanId>) {
    match redir {
        Redir::File { op, target, .. } => {
            collect_token(op, out);
            collect_word(target, out);
        }
        Redir::Descriptor { op, target, .. } => {
            collect_token(op, out);
            collect_token(target, out);
        }
        Redir::HereDoc(HereDoc {
            op,
            here_begin,
            lines,
            ..
        }) => {
            collect_token(op, out);
            collect_token(here_begin, out);
            for line in lines {
                collect_word(line, out);
            }
        }
    }
}

fn collect_assign_pair(pair: &AssignPair, out: &mut Vec<SpanId>) {
    out.extend(pair.spid);
    if let Some(rhs) = &pair.rhs {
        collect_word(rhs, out);
    }
}

fn collect_command(cmd: &Command, out: &mut Vec<SpanId>) {
    match cmd {
        Command::NoOp => {}
        Command::Simple {
            env,
            words,
            redirects,
        } => {
            for pair in env {
                out.extend(pair.spid);
                collect_word(&pair.value, out);
            }
            for word in words {
                collect_word(word, out);
            }
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::Sentence { child, terminator } => {
            collect_command(child, out);
            collect_token(terminator, out);
        }
        Command::Assignment { pairs, spids, .. } => {
            out.extend(spids);
            for pair in pairs {
                collect_assign_pair(pair, out);
            }
        }
        Command::Pipeline(p) => {
            out.extend(p.spids());
            for child in p.children() {
                collect_command(child, out);
            }
        }
        Command::AndOr { children, .. } => {
            for child in children {
                collect_command(child, out);
            }
        }
        Command::DoGroup { body, spids } => {
            out.extend(spids);
            for child in body {
                collect_command(child, out);
            }
        }
        Command::BraceGroup {
            body,
            redirects,
            spids,
        } => {
            out.extend(spids);
            for child in body {
                collect_command(child, out);
            }
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::Subshell {
            child,
            redirects,
            spids,
        } => {
            out.extend(spids);
            collect_command(child, out);
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::DParen {
            child,
            redirects,
            spids,
        } => {
            out.extend(spids);
            collect_arith(child, out);
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::DBracket {
            expr,
            redirects,
            spids,
        } => {
            out.extend(spids);
            collect_bool(expr, out);
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::ForEach(f) => {
            out.extend(&f.spids);
            if let Iterable::IterWords(words) = &f.iterable {
                for word in words {
                    collect_word(word, out);
                }
            }
            collect_command(&f.body, out);
            for redir in &f.redirects {
                collect_redir(redir, out);
            }
        }
        Command::ForExpr(f) => {
            out.extend(&f.spids);
            for expr in [&f.init, &f.cond, &f.update].into_iter().flatten() {
                collect_arith(expr, out);
            }
            collect_command(&f.body, out);
            for redir in &f.redirects {
                collect_redir(redir, out);
            }
        }
        Command::While {
            cond,
            body,
            redirects,
            spids,
        }
        | Command::Until {
            cond,
            body,
            redirects,
            spids,
        } => {
            out.extend(spids);
            for child in cond {
                collect_command(child, out);
            }
            collect_command(body, out);
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::If {
            arms,
            else_action,
            redirects,
            spids,
        } => {
            out.extend(spids);
            for IfArm { cond, action, spids } in arms {
                out.extend(spids);
                for child in cond {
                    collect_command(child, out);
                }
                for child in action {
                    collect_command(child, out);
                }
            }
            for child in else_action {
                collect_command(child, out);
            }
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::Case {
            to_match,
            arms,
            redirects,
            spids,
        } => {
            out.extend(spids);
            collect_word(to_match, out);
            for CaseArm {
                patterns,
                action,
                spids,
                ..
            } in arms
            {
                out.extend(spids);
                for pattern in patterns {
                    collect_word(pattern, out);
                }
                for child in action {
                    collect_command(child, out);
                }
            }
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::FuncDef {
            body,
            redirects,
            spids,
            ..
        } => {
            out.extend(spids);
            collect_command(body, out);
            for redir in redirects {
                collect_redir(redir, out);
            }
        }
        Command::ControlFlow { token, arg_word } => {
            collect_token(token, out);
            if let Some(word) = arg_word {
                collect_word(word, out);
            }
        }
        Command::TimeBlock { pipeline, spids } => {
            out.extend(spids);
            collect_command(pipeline, out);
        }
    }
}

fn collect_oil_word(word: &OilWord, out: &mut Vec<SpanId>) {
    match word {
        OilWord::Compound(parts) => {
            for part in parts {
                collect_oil_word_part(part, out);
            }
        }
        OilWord::Empty => {}
    }
}

fn collect_oil_word_part(part: &OilWordPart, out: &mut Vec<SpanId>) {
    match part {
        OilWordPart::Literal(t)
        | OilWordPart::SingleQuoted(t)
        | OilWordPart::VarSub(t) => collect_token(t, out),
        OilWordPart::DoubleQuoted(parts) => {
            for part in parts {
                collect_oil_word_part(part, out);
            }
        }
        OilWordPart::BracedVarSub { name, suffix_op } => {
            collect_token(name, out);
            if let Some(op) = suffix_op {
                collect_suffix_op(op, out);
            }
        }
        OilWordPart::ExprSub(expr) => collect_oil_expr(expr, out),
        OilWordPart::CommandSub(cmd) => collect_oil_cmd(cmd, out),
    }
}

fn collect_oil_expr(expr: &crate::lst::oil::OilExpr, out: &mut Vec<SpanId>) {
    use crate::lst::oil::OilExpr;
    match expr {
        OilExpr::Var(t) | OilExpr::Const(t) => collect_token(t, out),
        OilExpr::List(items) => {
            for item in items {
                collect_oil_expr(item, out);
            }
        }
        OilExpr::Unary { child, .. } => collect_oil_expr(child, out),
        OilExpr::Binary { left, right, .. } => {
            collect_oil_expr(left, out);
            collect_oil_expr(right, out);
        }
        OilExpr::FuncCall { name, args } => {
            collect_token(name, out);
            for arg in args {
                collect_oil_expr(arg, out);
            }
        }
        OilExpr::Subscript { collection, op } => {
            collect_oil_expr(collection, out);
            collect_bracket_op(op, out);
        }
    }
}

fn collect_oil_cmd(cmd: &OilCmd, out: &mut Vec<SpanId>) {
    match cmd {
        OilCmd::NoOp => {}
        OilCmd::Simple { words, redirects } => {
            for word in words {
                collect_oil_word(word, out);
            }
            for OilRedir { op, target, .. } in redirects {
                collect_token(op, out);
                collect_oil_word(target, out);
            }
        }
        OilCmd::Sentence { child, terminator } => {
            collect_oil_cmd(child, out);
            collect_token(terminator, out);
        }
        OilCmd::Block { body, spids } => {
            out.extend(spids);
            for child in body {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::Pipeline { children, .. } | OilCmd::AndOr { children, .. } => {
            for child in children {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::VarDecl { name, rhs, .. } => {
            collect_token(name, out);
            collect_oil_expr(rhs, out);
        }
        OilCmd::SetVar { lhs, rhs, .. } => {
            collect_token(lhs, out);
            collect_oil_expr(rhs, out);
        }
        OilCmd::If { arms, else_action } => {
            for OilIfArm { cond, action, spids } in arms {
                out.extend(spids);
                for child in cond {
                    collect_oil_cmd(child, out);
                }
                for child in action {
                    collect_oil_cmd(child, out);
                }
            }
            for child in else_action {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::While { cond, body } => {
            for child in cond.iter().chain(body) {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::For {
            var_name,
            iterable,
            body,
        } => {
            collect_token(var_name, out);
            collect_oil_expr(iterable, out);
            for child in body {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::FuncDef { name, params, body } => {
            collect_token(name, out);
            for param in params {
                collect_token(param, out);
            }
            for child in body {
                collect_oil_cmd(child, out);
            }
        }
        OilCmd::Return(expr) => {
            if let Some(expr) = expr {
                collect_oil_expr(expr, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use crate::lst::word::BracedVarSub;
    use crate::span::{LineId, LineSpan, SpanTable};

    /// Scenario: `echo hi > out.txt` — a simple command with two word
    /// children and one file redirect; reconstruction is byte-exact.
    #[test]
    fn test_round_trip_simple_command_with_redirect() {
        let source = "echo hi > out.txt\n";
        let mut table = SpanTable::from_source(source);
        let echo = table.token_at(Id::Lit, LineId(0), 0, 4).unwrap();
        let hi = table.token_at(Id::Lit, LineId(0), 5, 2).unwrap();
        let great = table.token_at(Id::Great, LineId(0), 8, 1).unwrap();
        let target = table.token_at(Id::Lit, LineId(0), 10, 7).unwrap();

        let cmd = Command::Simple {
            env: vec![],
            words: vec![Word::literal(echo), Word::literal(hi)],
            redirects: vec![Redir::File {
                fd: None,
                op: great,
                target: Word::literal(target),
            }],
        };

        let out = Reconstructor::new(&table).command(&cmd).unwrap();
        assert_eq!(out, "echo hi > out.txt");
    }

    /// Scenario: `${x:-default}` — suffix op with no prefix or bracket op;
    /// the `${`, `:-`, and `}` bytes come back through spids and gap text.
    #[test]
    fn test_round_trip_braced_var_sub() {
        let source = "${x:-default}\n";
        let mut table = SpanTable::from_source(source);
        let left = table.add_span(LineSpan::new(LineId(0), 0, 2)).unwrap();
        let name = table.token_at(Id::VSubName, LineId(0), 2, 1).unwrap();
        let arg = table.token_at(Id::Lit, LineId(0), 5, 7).unwrap();
        let right = table.add_span(LineSpan::new(LineId(0), 12, 1)).unwrap();

        let sub = BracedVarSub::builder(name)
            .suffix_op(SuffixOp::StringUnary {
                op: Id::VTestColonHyphen,
                arg: Word::literal(arg),
            })
            .unwrap()
            .spids(left, right)
            .build();
        let word = Word::compound(vec![WordPart::BracedVarSub(sub)]).unwrap();

        let out = Reconstructor::new(&table).word(&word).unwrap();
        assert_eq!(out, "${x:-default}");
    }

    #[test]
    fn test_round_trip_pipeline_gap_covers_pipe() {
        let source = "cat f | grep x\n";
        let mut table = SpanTable::from_source(source);
        let cat = table.token_at(Id::Lit, LineId(0), 0, 3).unwrap();
        let f = table.token_at(Id::Lit, LineId(0), 4, 1).unwrap();
        let grep = table.token_at(Id::Lit, LineId(0), 8, 4).unwrap();
        let x = table.token_at(Id::Lit, LineId(0), 13, 1).unwrap();

        let left = Command::Simple {
            env: vec![],
            words: vec![Word::literal(cat), Word::literal(f)],
            redirects: vec![],
        };
        let right = Command::Simple {
            env: vec![],
            words: vec![Word::literal(grep), Word::literal(x)],
            redirects: vec![],
        };
        let pipe = Command::pipeline(vec![left, right], false, vec![]).unwrap();

        let out = Reconstructor::new(&table).command(&pipe).unwrap();
        assert_eq!(out, "cat f | grep x");
    }

    #[test]
    fn test_round_trip_if_across_lines() {
        let source = "if true\nthen\n  echo y\nfi\n";
        let mut table = SpanTable::from_source(source);
        let kw_if = table.add_span(LineSpan::new(LineId(0), 0, 2)).unwrap();
        let cond = table.token_at(Id::Lit, LineId(0), 3, 4).unwrap();
        let kw_then = table.add_span(LineSpan::new(LineId(1), 0, 4)).unwrap();
        let echo = table.token_at(Id::Lit, LineId(2), 2, 4).unwrap();
        let y = table.token_at(Id::Lit, LineId(2), 7, 1).unwrap();
        let kw_fi = table.add_span(LineSpan::new(LineId(3), 0, 2)).unwrap();

        let cmd = Command::if_cmd(
            vec![IfArm {
                cond: vec![Command::Simple {
                    env: vec![],
                    words: vec![Word::literal(cond)],
                    redirects: vec![],
                }],
                action: vec![Command::Simple {
                    env: vec![],
                    words: vec![Word::literal(echo), Word::literal(y)],
                    redirects: vec![],
                }],
                spids: vec![kw_then],
            }],
            vec![],
            vec![],
            vec![kw_if, kw_fi],
        )
        .unwrap();

        let out = Reconstructor::new(&table).command(&cmd).unwrap();
        assert_eq!(out, "if true\nthen\n  echo y\nfi");
    }

    /// The body lines of a here-document are spanned words covering exactly
    /// the literal lines up to (not including) the terminator.
    #[test]
    fn test_round_trip_here_doc_body() {
        let source = "cat <<EOF\nhello\nworld\nEOF\n";
        let mut table = SpanTable::from_source(source);
        let cat = table.token_at(Id::Lit, LineId(0), 0, 3).unwrap();
        let op = table.token_at(Id::DLess, LineId(0), 4, 2).unwrap();
        let begin = table.token_at(Id::Lit, LineId(0), 6, 3).unwrap();
        let line1 = table.token_at(Id::Lit, LineId(1), 0, 6).unwrap();
        let line2 = table.token_at(Id::Lit, LineId(2), 0, 6).unwrap();

        let cmd = Command::Simple {
            env: vec![],
            words: vec![Word::literal(cat)],
            redirects: vec![Redir::HereDoc(crate::lst::command::HereDoc {
                fd: None,
                op,
                here_begin: begin,
                strip_tabs: false,
                lines: vec![Word::literal(line1), Word::literal(line2)],
                here_end: "EOF".into(),
            })],
        };

        let out = Reconstructor::new(&table).command(&cmd).unwrap();
        assert_eq!(out, "cat <<EOF\nhello\nworld\n");
    }

    #[test]
    fn test_synthetic_tokens_are_skipped() {
        let source = "ls\n";
        let mut table = SpanTable::from_source(source);
        let ls = table.token_at(Id::Lit, LineId(0), 0, 2).unwrap();
        let cmd = Command::Sentence {
            child: Box::new(Command::Simple {
                env: vec![],
                words: vec![Word::literal(ls)],
                redirects: vec![],
            }),
            terminator: Token::synthetic(Id::Newline, "\n"),
        };
        let out = Reconstructor::new(&table).command(&cmd).unwrap();
        assert_eq!(out, "ls");
    }

    #[test]
    fn test_overlapping_spans_rejected() {
        let source = "abcdef\n";
        let mut table = SpanTable::from_source(source);
        let a = table.token_at(Id::Lit, LineId(0), 0, 4).unwrap();
        let b = table.token_at(Id::Lit, LineId(0), 2, 4).unwrap();
        let cmd = Command::Simple {
            env: vec![],
            words: vec![Word::literal(a), Word::literal(b)],
            redirects: vec![],
        };
        let err = Reconstructor::new(&table).command(&cmd).unwrap_err();
        assert!(matches!(err, LstError::IllegalNesting(_)));
    }

    #[test]
    fn test_empty_tree_reconstructs_empty() {
        let table = SpanTable::new();
        let out = Reconstructor::new(&table).command(&Command::NoOp).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_oil_round_trip() {
        let source = "var x = 1\n";
        let mut table = SpanTable::from_source(source);
        let name = table.token_at(Id::Name, LineId(0), 4, 1).unwrap();
        let one = table.token_at(Id::Number, LineId(0), 8, 1).unwrap();
        let var_kw = table.add_span(LineSpan::new(LineId(0), 0, 3)).unwrap();

        let cmd = OilCmd::Block {
            body: vec![OilCmd::VarDecl {
                keyword: Id::KwVar,
                name,
                rhs: crate::lst::oil::OilExpr::Const(one),
            }],
            spids: vec![var_kw],
        };
        let out = Reconstructor::new(&table).oil_cmd(&cmd).unwrap();
        assert_eq!(out, "var x = 1");
    }
}
