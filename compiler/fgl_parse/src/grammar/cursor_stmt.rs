//! Cursor and prepared-statement handling: CLOSE, EXECUTE, FETCH, FREE,
//! OPEN, PREPARE.

use fgl_ir::ast::{
    CloseStmt, CloseTarget, ExecuteStmt, ExecuteTarget, ExprList, FetchPosition, FetchStmt,
    FreeStmt, OpenStmt, ParamDirection, PrepareStmt, UsingVar,
};
use fgl_ir::{Stmt, StmtKind, TokenKind};

use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::{TokenPredicate, TokenStream};
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    /// `CLOSE {WINDOW name | FORM name | DATABASE | cursor}`
    pub fn parse_close(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Close) {
            return self.decline(TokenSet::single(TokenKind::Close));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let target = match self.current_kind() {
            TokenKind::Window => {
                self.bump();
                Some(CloseTarget::Window(self.expect_name("window name")))
            }
            TokenKind::Form => {
                self.bump();
                Some(CloseTarget::Form(self.expect_name("form name")))
            }
            TokenKind::Database => {
                self.bump();
                Some(CloseTarget::Database)
            }
            _ => self.expect_name("cursor name").map(CloseTarget::Cursor),
        };
        let complete = match &target {
            Some(CloseTarget::Window(name) | CloseTarget::Form(name)) => name.is_some(),
            Some(CloseTarget::Cursor(_) | CloseTarget::Database) => true,
            None => false,
        };
        self.commit(mark, start, StmtKind::Close(CloseStmt { target }), complete)
    }

    /// `FETCH [position] cursor [INTO var, ...]`
    pub fn parse_fetch(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Fetch) {
            return self.decline(TokenSet::single(TokenKind::Fetch));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let position = self.fetch_position();
        let cursor = self.expect_name("cursor name");
        let into = self.into_clause();
        let complete = cursor.is_some()
            && !matches!(
                position,
                Some(FetchPosition::Absolute(None) | FetchPosition::Relative(None))
            );
        self.commit(
            mark,
            start,
            StmtKind::Fetch(FetchStmt {
                position,
                cursor,
                into,
            }),
            complete,
        )
    }

    /// A fixed position keyword only counts as one when a cursor name
    /// follows; `FETCH last` fetches from a cursor named `last`.
    fn fetch_position(&mut self) -> Option<FetchPosition> {
        let fixed = match self.current_kind() {
            TokenKind::Next => FetchPosition::Next,
            TokenKind::Previous => FetchPosition::Previous,
            TokenKind::Prior => FetchPosition::Prior,
            TokenKind::Current => FetchPosition::Current,
            TokenKind::First => FetchPosition::First,
            TokenKind::Last => FetchPosition::Last,
            TokenKind::Absolute => {
                self.bump();
                return Some(FetchPosition::Absolute(self.expect_expr("row number")));
            }
            TokenKind::Relative => {
                self.bump();
                return Some(FetchPosition::Relative(self.expect_expr("row offset")));
            }
            _ => return None,
        };
        if !self.stream.peek(TokenPredicate::Name, 2) {
            return None;
        }
        self.bump();
        Some(fixed)
    }

    /// `[INTO var, ...]`
    pub(crate) fn into_clause(&mut self) -> ExprList {
        if self.eat(TokenKind::Into).is_some() {
            self.variable_list("variable")
        } else {
            ExprList::new()
        }
    }

    /// `FREE name`
    pub fn parse_free(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Free) {
            return self.decline(TokenSet::single(TokenKind::Free));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let target = self.expect_name("cursor or statement name");
        let complete = target.is_some();
        self.commit(mark, start, StmtKind::Free(FreeStmt { target }), complete)
    }

    /// `OPEN cursor [USING var [IN | OUT | INOUT], ...] [WITH REOPTIMIZATION]`
    pub fn parse_open(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Open) {
            return self.decline(TokenSet::single(TokenKind::Open));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let cursor = self.expect_name("cursor name");
        let (using, mut complete) = self.using_clause();
        let mut with_reoptimization = false;
        if self.eat(TokenKind::With).is_some() {
            with_reoptimization = self.expect(TokenKind::Reoptimization).is_some();
            complete &= with_reoptimization;
        }
        complete &= cursor.is_some();
        self.commit(
            mark,
            start,
            StmtKind::Open(OpenStmt {
                cursor,
                using,
                with_reoptimization,
            }),
            complete,
        )
    }

    /// `[USING var [IN | OUT | INOUT], ...]`, and whether every listed
    /// variable was present.
    fn using_clause(&mut self) -> (Vec<UsingVar>, bool) {
        let mut using = Vec::new();
        if self.eat(TokenKind::Using).is_none() {
            return (using, true);
        }
        loop {
            let start = self.current_span().start;
            let Some(var) = self.expect_variable("variable") else {
                return (using, false);
            };
            let direction = match self.current_kind() {
                TokenKind::In => Some(ParamDirection::In),
                TokenKind::Out => Some(ParamDirection::Out),
                TokenKind::Inout => Some(ParamDirection::InOut),
                _ => None,
            };
            if direction.is_some() {
                self.bump();
            }
            using.push(UsingVar {
                var,
                direction,
                span: self.span_from(start),
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        (using, true)
    }

    /// `PREPARE identifier FROM expr`
    pub fn parse_prepare(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Prepare) {
            return self.decline(TokenSet::single(TokenKind::Prepare));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let ident = self.expect_name("statement identifier");
        let sql = if self.expect(TokenKind::From).is_some() || self.at_expr_start() {
            self.expect_expr("SQL text")
        } else {
            None
        };
        let complete = ident.is_some() && sql.is_some();
        self.commit(
            mark,
            start,
            StmtKind::Prepare(PrepareStmt { ident, sql }),
            complete,
        )
    }

    /// `EXECUTE IMMEDIATE expr` or
    /// `EXECUTE name [USING var, ...] [INTO var, ...]`
    pub fn parse_execute(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Execute) {
            return self.decline(TokenSet::single(TokenKind::Execute));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let (target, mut complete) = if self.eat(TokenKind::Immediate).is_some() {
            let sql = self.expect_expr("SQL text");
            (ExecuteTarget::Immediate(sql), sql.is_some())
        } else {
            let name = self.expect_name("prepared statement name");
            let complete = name.is_some();
            (ExecuteTarget::Prepared(name), complete)
        };
        let mut using = Vec::new();
        let mut into = ExprList::new();
        if matches!(target, ExecuteTarget::Prepared(Some(_))) {
            // Either clause may come first.
            for _ in 0..2 {
                if self.at(TokenKind::Using) && using.is_empty() {
                    let (vars, listed) = self.using_clause();
                    using = vars;
                    complete &= listed;
                } else if self.at(TokenKind::Into) && into.is_empty() {
                    into = self.into_clause();
                }
            }
        }
        self.commit(
            mark,
            start,
            StmtKind::Execute(ExecuteStmt {
                target,
                using,
                into,
            }),
            complete,
        )
    }
}
