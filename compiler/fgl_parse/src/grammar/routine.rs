//! Module-level definitions: MAIN, FUNCTION, REPORT, CONSTANT and the
//! database declarations.

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{
    ConstantDef, ConstantStmt, DatabaseForm, DatabaseStmt, MainDef, RoutineDef, RoutineKind,
};
use fgl_ir::{Ident, Stmt, StmtKind, TokenKind};

use crate::outcome::ParseOutcome;
use crate::recovery::{TokenSet, BLOCK_END};
use crate::stream::TokenStream;
use crate::Parser;

const ATTRIBUTE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Attribute)
    .with(TokenKind::Attributes);

impl<S: TokenStream> Parser<S> {
    /// `MAIN body END MAIN`
    pub fn parse_main(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Main) {
            return self.decline(TokenSet::single(TokenKind::Main));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let body = self.body(BLOCK_END);
        let closed = self.expect_block_end(TokenKind::Main);
        self.commit(mark, start, StmtKind::Main(MainDef { body }), closed)
    }

    /// `FUNCTION name ( [param, ...] ) [ATTRIBUTES (...)] body END FUNCTION`
    pub fn parse_function(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Function) {
            return self.decline(TokenSet::single(TokenKind::Function));
        }
        self.routine(RoutineKind::Function, TokenKind::Function)
    }

    /// `REPORT name ( [param, ...] ) body END REPORT`
    pub fn parse_report_definition(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Report) {
            return self.decline(TokenSet::single(TokenKind::Report));
        }
        self.routine(RoutineKind::Report, TokenKind::Report)
    }

    fn routine(&mut self, kind: RoutineKind, closer: TokenKind) -> ParseOutcome<Stmt> {
        let mark = self.mark();
        let start = self.bump().span.start;
        let name = self.expect_name(match kind {
            RoutineKind::Function => "function name",
            RoutineKind::Report => "report name",
        });
        let (params, params_ok) = self.param_list();
        let attributes = if kind == RoutineKind::Function && self.at_any(ATTRIBUTE_START) {
            Some(self.attribute_specifier())
        } else {
            None
        };
        let body = self.body(BLOCK_END);
        let closed = self.expect_block_end(closer);
        let complete = name.is_some()
            && params_ok
            && attributes.as_ref().is_none_or(|a| a.complete)
            && closed;
        self.commit(
            mark,
            start,
            StmtKind::Routine(RoutineDef {
                kind,
                name,
                params,
                attributes,
                body,
            }),
            complete,
        )
    }

    /// `( [name, ...] )`
    fn param_list(&mut self) -> (Vec<Ident>, bool) {
        let mut params = Vec::new();
        if self.expect(TokenKind::LParen).is_none() {
            return (params, false);
        }
        if self.eat(TokenKind::RParen).is_some() {
            return (params, true);
        }
        loop {
            match self.expect_name("parameter name") {
                Some(param) => params.push(param),
                None => return (params, false),
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        let closed = self.expect(TokenKind::RParen).is_some();
        (params, closed)
    }

    /// `CONSTANT name [type] = expr [, name [type] = expr ...]`
    pub fn parse_constant(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Constant) {
            return self.decline(TokenSet::single(TokenKind::Constant));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let mut defs = Vec::new();
        let mut complete = true;
        loop {
            let Some(name) = self.expect_name("constant name") else {
                complete = false;
                break;
            };
            let def = self.constant_def(name);
            complete &= def.value.is_some();
            defs.push(def);
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.commit(
            mark,
            start,
            StmtKind::Constant(ConstantStmt { defs }),
            complete,
        )
    }

    fn constant_def(&mut self, name: Ident) -> ConstantDef {
        let start = name.span.start;
        let type_name = self.name();
        if type_name.is_some() && self.at(TokenKind::LParen) {
            self.skip_type_arguments();
        }
        let value = if self.expect(TokenKind::Eq).is_some() {
            self.expect_expr("constant value")
        } else {
            None
        };
        ConstantDef {
            name,
            type_name,
            value,
            span: self.span_from(start),
        }
    }

    /// Skip a balanced `( ... )` such as `DECIMAL(10, 2)`.
    fn skip_type_arguments(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.current_kind() {
                TokenKind::Eof => return,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
            if depth == 0 {
                return;
            }
        }
    }

    /// `SCHEMA name`, `DATABASE name` or `DESCRIBE DATABASE name`
    pub fn parse_database(&mut self) -> ParseOutcome<Stmt> {
        let form = match self.current_kind() {
            TokenKind::Schema => Some(DatabaseForm::Schema),
            TokenKind::Database => Some(DatabaseForm::Database),
            TokenKind::Describe => None,
            _ => {
                return self.decline(
                    TokenSet::new()
                        .with(TokenKind::Schema)
                        .with(TokenKind::Database)
                        .with(TokenKind::Describe),
                );
            }
        };
        let mark = self.mark();
        let start = self.bump().span.start;
        let form = match form {
            Some(form) => Some(form),
            None if self.eat(TokenKind::Database).is_some() => Some(DatabaseForm::DescribeDatabase),
            None => {
                self.error_here(ErrorCode::E1002, "incomplete legacy database specification");
                None
            }
        };
        let name = if form.is_some() {
            self.expect_name("database name")
        } else {
            self.name()
        };
        let complete = form.is_some() && name.is_some();
        self.commit(
            mark,
            start,
            StmtKind::Database(DatabaseStmt { form, name }),
            complete,
        )
    }
}
