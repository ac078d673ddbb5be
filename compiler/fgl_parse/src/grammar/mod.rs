//! Grammar productions.
//!
//! Each submodule adds an `impl<S: TokenStream> Parser<S>` block for one
//! family of constructs. This file holds the token-level helpers they share.

mod call;
mod control;
mod cursor_stmt;
mod dispatch;
mod expr;
mod io;
mod raw;
mod report;
mod routine;
mod sql;

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::ExprList;
use fgl_ir::{Ident, Span, Stmt, StmtKind, Token, TokenFlags, TokenKind};

use crate::error::{ErrorContext, ParseError};
use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::{TokenPredicate, TokenStream};
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.stream.peek_token(1)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.stream.peek(TokenPredicate::Kind(kind), 1)
    }

    #[inline]
    pub(crate) fn at_nth(&self, kind: TokenKind, lookahead: usize) -> bool {
        self.stream.peek(TokenPredicate::Kind(kind), lookahead)
    }

    #[inline]
    pub(crate) fn at_any(&self, set: TokenSet) -> bool {
        self.stream.peek(TokenPredicate::AnyOf(set), 1)
    }

    /// Identifier or soft keyword.
    #[inline]
    pub(crate) fn at_name(&self) -> bool {
        self.stream.peek(TokenPredicate::Name, 1)
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.stream.peek(TokenPredicate::Eof, 1)
    }

    #[inline]
    pub(crate) fn bump(&mut self) -> Token {
        self.stream.advance()
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Span> {
        if self.at(kind) {
            Some(self.bump().span)
        } else {
            None
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.stream.previous_span().end.max(start))
    }

    /// Where to point at something missing: the current token, or an empty
    /// span just after the last consumed token when at end of file.
    pub(crate) fn error_span(&self) -> Span {
        if self.at_eof() {
            Span::point(self.stream.previous_span().end)
        } else {
            self.current_span()
        }
    }

    pub(crate) fn error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub(crate) fn error_here(&mut self, code: ErrorCode, message: impl Into<String>) {
        let span = self.error_span();
        self.error(ParseError::new(code, message, span));
    }

    /// Consume `kind` or report it as expected.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Span> {
        if let Some(span) = self.eat(kind) {
            return Some(span);
        }
        let span = self.error_span();
        let err = ParseError::expected_tokens(TokenSet::single(kind), self.current(), span);
        self.error(err);
        None
    }

    /// Consume a name (identifier or soft keyword) without reporting.
    pub(crate) fn name(&mut self) -> Option<Ident> {
        if !self.at_name() {
            return None;
        }
        let token = self.bump();
        Some(Ident::new(token.text(), token.span))
    }

    /// Consume a name or report `what` as missing.
    pub(crate) fn expect_name(&mut self, what: &str) -> Option<Ident> {
        let name = self.name();
        if name.is_none() {
            let span = self.error_span();
            let err = ParseError::expected_name(what, self.current(), span);
            self.error(err);
        }
        name
    }

    /// Comma-separated expressions; at least one is required.
    pub(crate) fn expr_list(&mut self, what: &str) -> ExprList {
        let mut list = ExprList::new();
        loop {
            match self.expect_expr(what) {
                Some(expr) => list.push(expr),
                None => break,
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        list
    }

    /// Comma-separated expressions, possibly none.
    pub(crate) fn opt_expr_list(&mut self, what: &str) -> ExprList {
        if self.at_expr_start() {
            self.expr_list(what)
        } else {
            ExprList::new()
        }
    }

    /// Consume a token rejected by a keyword choice, unless it is the end of
    /// file or starts a new line (and so probably the next statement).
    pub(crate) fn skip_rejected(&mut self) {
        let token = self.current();
        if !token.is_eof() && !token.flags.contains(TokenFlags::NEWLINE_BEFORE) {
            self.bump();
        }
    }

    /// Error count, to hand back errors reported from here on.
    #[inline]
    pub(crate) fn mark(&self) -> usize {
        self.errors.len()
    }

    /// Package a committed production: the span runs from `start` to the
    /// last consumed token and every error reported since `mark` moves into
    /// the outcome.
    pub(crate) fn commit(
        &mut self,
        mark: usize,
        start: u32,
        kind: StmtKind,
        complete: bool,
    ) -> ParseOutcome<Stmt> {
        let context = match kind {
            StmtKind::Main(_) | StmtKind::Routine(_) => ErrorContext::Definition(kind.name()),
            _ => ErrorContext::Statement(kind.name()),
        };
        let mut errors = self.errors.split_off(mark.min(self.errors.len()));
        for error in &mut errors {
            error.context.get_or_insert(context);
        }
        let span = self.span_from(start);
        ParseOutcome::matched(Stmt::new(kind, span, complete), errors)
    }

    /// Decline without consuming.
    pub(crate) fn decline(&self, expected: TokenSet) -> ParseOutcome<Stmt> {
        ParseOutcome::not_matched(expected, self.current_span().start)
    }
}
