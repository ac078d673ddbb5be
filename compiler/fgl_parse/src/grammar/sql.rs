//! Embedded SQL: `SQL ... END SQL` blocks and VALIDATE.

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{ExprList, SqlBlockStmt, ValidateStmt};
use fgl_ir::{Span, Stmt, StmtKind, TokenKind};

use crate::error::{ErrorContext, ParseError};
use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::TokenStream;
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    /// `SQL tokens... END SQL`. The tokens are kept verbatim; `body` covers
    /// the text between the two keywords.
    pub fn parse_sql_block(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Sql) {
            return self.decline(TokenSet::single(TokenKind::Sql));
        }
        let mark = self.mark();
        let keyword = self.bump().span;
        let mut tokens = Vec::new();
        let (body_end, complete) = loop {
            if self.at(TokenKind::End) && self.at_nth(TokenKind::Sql, 2) {
                let end = self.current_span().start;
                self.bump();
                self.bump();
                break (end, true);
            }
            if self.at_eof() {
                self.error(
                    ParseError::new(
                        ErrorCode::E1005,
                        "SQL block is not closed: expected `END SQL` before end of file",
                        keyword,
                    )
                    .with_context(ErrorContext::SqlBlock),
                );
                break (self.stream.previous_span().end, false);
            }
            tokens.push(self.bump());
        };
        let body = Span::new(keyword.end, body_end.max(keyword.end));
        self.commit(
            mark,
            keyword.start,
            StmtKind::SqlBlock(SqlBlockStmt { tokens, body }),
            complete,
        )
    }

    /// `VALIDATE target [, target ...] LIKE column [, column ...]`, where a
    /// column is `table.column` or `table.*`.
    pub fn parse_validate(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Validate) {
            return self.decline(TokenSet::single(TokenKind::Validate));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let targets = self.variable_list("variable to validate");
        let mut columns = ExprList::new();
        let mut complete = false;
        if !targets.is_empty() && self.expect(TokenKind::Like).is_some() {
            columns = self.variable_list("column after LIKE");
            complete = !columns.is_empty();
        }
        self.commit(
            mark,
            start,
            StmtKind::Validate(ValidateStmt { targets, columns }),
            complete,
        )
    }
}
