//! Control flow: IF, WHILE, FOR, FOREACH, EXIT, CONTINUE, GOTO, LABEL,
//! RETURN.

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{
    ContinueStmt, ExitStmt, ExitType, ForStmt, ForeachStmt, GotoStmt, IfStmt, LabelStmt,
    ReturnStmt, WhileStmt,
};
use fgl_ir::{Stmt, StmtKind, TokenKind};

use crate::error::ParseError;
use crate::outcome::ParseOutcome;
use crate::recovery::{TokenSet, BLOCK_END, THEN_BLOCK_END};
use crate::stream::TokenStream;
use crate::Parser;

const EXIT_TYPES: TokenSet = TokenSet::new()
    .with(TokenKind::For)
    .with(TokenKind::Foreach)
    .with(TokenKind::While)
    .with(TokenKind::Menu)
    .with(TokenKind::Construct)
    .with(TokenKind::Report)
    .with(TokenKind::Display)
    .with(TokenKind::Input)
    .with(TokenKind::Dialog)
    .with(TokenKind::Case)
    .with(TokenKind::Program);

const CONTINUE_TYPES: TokenSet = TokenSet::new()
    .with(TokenKind::For)
    .with(TokenKind::Foreach)
    .with(TokenKind::While)
    .with(TokenKind::Menu)
    .with(TokenKind::Construct)
    .with(TokenKind::Display)
    .with(TokenKind::Input)
    .with(TokenKind::Dialog);

fn exit_type(kind: TokenKind) -> Option<ExitType> {
    Some(match kind {
        TokenKind::For => ExitType::For,
        TokenKind::Foreach => ExitType::Foreach,
        TokenKind::While => ExitType::While,
        TokenKind::Menu => ExitType::Menu,
        TokenKind::Construct => ExitType::Construct,
        TokenKind::Report => ExitType::Report,
        TokenKind::Display => ExitType::Display,
        TokenKind::Input => ExitType::Input,
        TokenKind::Dialog => ExitType::Dialog,
        TokenKind::Case => ExitType::Case,
        TokenKind::Program => ExitType::Program,
        _ => return None,
    })
}

impl<S: TokenStream> Parser<S> {
    /// Consume `END <closer>`, or report the block as unterminated.
    pub(crate) fn expect_block_end(&mut self, closer: TokenKind) -> bool {
        if self.at(TokenKind::End) && self.at_nth(closer, 2) {
            self.bump();
            self.bump();
            return true;
        }
        self.error_here(
            ErrorCode::E1007,
            format!("missing `END {}`", closer.display_name()),
        );
        false
    }

    /// `IF expr THEN body [ELSE body] END IF`
    pub fn parse_if(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::If) {
            return self.decline(TokenSet::single(TokenKind::If));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let cond = self.expect_expr("condition");
        let has_then = self.expect(TokenKind::Then).is_some();
        let then_body = self.body(THEN_BLOCK_END);
        let else_body = if self.eat(TokenKind::Else).is_some() {
            Some(self.body(BLOCK_END))
        } else {
            None
        };
        let closed = self.expect_block_end(TokenKind::If);
        self.commit(
            mark,
            start,
            StmtKind::If(IfStmt {
                cond,
                then_body,
                else_body,
            }),
            cond.is_some() && has_then && closed,
        )
    }

    /// `WHILE expr body END WHILE`
    pub fn parse_while(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::While) {
            return self.decline(TokenSet::single(TokenKind::While));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let cond = self.expect_expr("condition");
        let body = self.body(BLOCK_END);
        let closed = self.expect_block_end(TokenKind::While);
        self.commit(
            mark,
            start,
            StmtKind::While(WhileStmt { cond, body }),
            cond.is_some() && closed,
        )
    }

    /// `FOR var = expr TO expr [STEP expr] body END FOR`
    pub fn parse_for(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::For) {
            return self.decline(TokenSet::single(TokenKind::For));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let var = self.expect_variable("loop variable");
        let mut header_ok = var.is_some();
        let (mut from, mut to, mut step) = (None, None, None);
        if header_ok {
            header_ok = self.expect(TokenKind::Eq).is_some();
        }
        if header_ok {
            from = self.expect_expr("start value");
            header_ok = from.is_some() && self.expect(TokenKind::To).is_some();
        }
        if header_ok {
            to = self.expect_expr("end value");
            header_ok = to.is_some();
        }
        if self.eat(TokenKind::Step).is_some() {
            step = self.expect_expr("step value");
            header_ok &= step.is_some();
        }
        let body = self.body(BLOCK_END);
        let closed = self.expect_block_end(TokenKind::For);
        self.commit(
            mark,
            start,
            StmtKind::For(ForStmt {
                var,
                from,
                to,
                step,
                body,
            }),
            header_ok && closed,
        )
    }

    /// `FOREACH cursor [INTO var, ...] body END FOREACH`
    pub fn parse_foreach(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Foreach) {
            return self.decline(TokenSet::single(TokenKind::Foreach));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let cursor = self.expect_name("cursor name");
        let into = self.into_clause();
        let body = self.body(BLOCK_END);
        let closed = self.expect_block_end(TokenKind::Foreach);
        let complete = cursor.is_some() && closed;
        self.commit(
            mark,
            start,
            StmtKind::Foreach(ForeachStmt { cursor, into, body }),
            complete,
        )
    }

    /// `EXIT {FOR | FOREACH | ... | CASE}` or `EXIT PROGRAM [[-] code]`
    pub fn parse_exit(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Exit) {
            return self.decline(TokenSet::single(TokenKind::Exit));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let exit_type = exit_type(self.current_kind());
        let mut complete = exit_type.is_some();
        if complete {
            self.bump();
        } else {
            self.expected_one_of(EXIT_TYPES);
            self.skip_rejected();
        }
        let mut exit_code = None;
        if exit_type == Some(ExitType::Program) {
            if self.at(TokenKind::Minus) {
                exit_code = self.negated_literal("exit code after `-`");
                complete &= exit_code.is_some();
            } else {
                exit_code = self.try_expr();
            }
        }
        self.commit(
            mark,
            start,
            StmtKind::Exit(ExitStmt {
                exit_type,
                exit_code,
            }),
            complete,
        )
    }

    /// `CONTINUE {FOR | FOREACH | WHILE | MENU | CONSTRUCT | DISPLAY | INPUT | DIALOG}`
    pub fn parse_continue(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Continue) {
            return self.decline(TokenSet::single(TokenKind::Continue));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let target = if self.at_any(CONTINUE_TYPES) {
            exit_type(self.bump().kind)
        } else {
            self.expected_one_of(CONTINUE_TYPES);
            self.skip_rejected();
            None
        };
        self.commit(
            mark,
            start,
            StmtKind::Continue(ContinueStmt { target }),
            target.is_some(),
        )
    }

    /// `GOTO [:] label`
    pub fn parse_goto(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Goto) {
            return self.decline(TokenSet::single(TokenKind::Goto));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        self.eat(TokenKind::Colon);
        let label = self.expect_name("label name");
        let complete = label.is_some();
        self.commit(mark, start, StmtKind::Goto(GotoStmt { label }), complete)
    }

    /// `LABEL name :`
    pub fn parse_label(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Label) {
            return self.decline(TokenSet::single(TokenKind::Label));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let name = self.expect_name("label name");
        if name.is_some() && self.eat(TokenKind::Colon).is_none() {
            let span = self.error_span();
            let err = ParseError::expected_tokens(
                TokenSet::single(TokenKind::Colon),
                self.current(),
                span,
            );
            self.error(err);
        }
        let complete = name.is_some();
        self.commit(mark, start, StmtKind::Label(LabelStmt { name }), complete)
    }

    /// `RETURN [expr, ...]`
    pub fn parse_return(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Return) {
            return self.decline(TokenSet::single(TokenKind::Return));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let values = self.opt_expr_list("return value");
        self.commit(mark, start, StmtKind::Return(ReturnStmt { values }), true)
    }
}
