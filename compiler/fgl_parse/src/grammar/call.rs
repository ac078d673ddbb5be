//! CALL and LET.

use fgl_ir::ast::{CallStmt, ExprList, LetStmt};
use fgl_ir::{Stmt, StmtKind, TokenKind};

use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::TokenStream;
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    /// `CALL func([arg, ...]) [RETURNING var, ...]`
    pub fn parse_call(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Call) {
            return self.decline(TokenSet::single(TokenKind::Call));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let func = self.expect_name("function name");
        let errors_before_args = self.errors.len();
        let args = if func.is_some() || self.at(TokenKind::LParen) {
            self.call_args()
        } else {
            ExprList::new()
        };
        let mut complete = func.is_some() && self.errors.len() == errors_before_args;
        let returning = if self.eat(TokenKind::Returning).is_some() {
            let vars = self.variable_list("variable after RETURNING");
            complete &= !vars.is_empty();
            vars
        } else {
            ExprList::new()
        };
        self.commit(
            mark,
            start,
            StmtKind::Call(CallStmt {
                func,
                args,
                returning,
            }),
            complete,
        )
    }

    /// `LET var = expr [, expr ...]`
    pub fn parse_let(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Let) {
            return self.decline(TokenSet::single(TokenKind::Let));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let target = self.expect_variable("variable");
        let mut values = ExprList::new();
        let mut complete = false;
        if target.is_some() && self.expect(TokenKind::Eq).is_some() {
            values = self.expr_list("value");
            complete = !values.is_empty();
        }
        self.commit(
            mark,
            start,
            StmtKind::Let(LetStmt { target, values }),
            complete,
        )
    }
}
