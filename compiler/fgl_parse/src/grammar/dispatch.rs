//! Statement dispatch and block assembly.
//!
//! Productions are tried in table order; the first whose predictive test
//! passes commits. When none match, the driver either ends the block (at a
//! terminator of the enclosing construct or end of file) or skips the
//! unrecognized tokens as a single error statement.

use fgl_diagnostic::ErrorCode;
use fgl_ir::{Block, Span, Stmt, StmtKind};
use tracing::debug;

use crate::error::{describe_token, ParseError};
use crate::outcome::ParseOutcome;
use crate::recovery::{
    synchronize, TokenSet, MODULE_ITEM_START, ROUTINE_START, STATEMENT_START,
};
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::{Parser, StmtParser};

impl<S: TokenStream> Parser<S> {
    fn module_table() -> [StmtParser<S>; 6] {
        [
            Self::parse_main,
            Self::parse_function,
            Self::parse_report_definition,
            Self::parse_database,
            Self::parse_constant,
            Self::parse_preprocessor_line,
        ]
    }

    fn statement_table() -> [StmtParser<S>; 34] {
        [
            Self::parse_accept,
            Self::parse_call,
            Self::parse_close,
            Self::parse_constant,
            Self::parse_continue,
            Self::parse_database,
            Self::parse_defer,
            Self::parse_execute,
            Self::parse_exit,
            Self::parse_fetch,
            Self::parse_finish_report,
            Self::parse_for,
            Self::parse_foreach,
            Self::parse_free,
            Self::parse_goto,
            Self::parse_if,
            Self::parse_label,
            Self::parse_let,
            Self::parse_need,
            Self::parse_open,
            Self::parse_options,
            Self::parse_output_to_report,
            Self::parse_pause,
            Self::parse_prepare,
            Self::parse_preprocessor_line,
            Self::parse_printx,
            Self::parse_return,
            Self::parse_skip,
            Self::parse_sleep,
            Self::parse_sql_block,
            Self::parse_start_report,
            Self::parse_terminate_report,
            Self::parse_validate,
            Self::parse_while,
        ]
    }

    /// Module body: definitions and declarations up to end of file.
    pub(crate) fn module_items(&mut self) -> Block {
        let table = Self::module_table();
        let mut block = self.block_items(&table, TokenSet::new(), MODULE_ITEM_START);
        block.span = Span::new(0, self.current_span().end.max(block.span.end));
        block
    }

    /// Flat statement list up to end of file.
    pub(crate) fn statement_list(&mut self) -> Block {
        let table = Self::statement_table();
        let mut block = self.block_items(&table, TokenSet::new(), STATEMENT_START);
        block.span = Span::new(0, self.current_span().end.max(block.span.end));
        block
    }

    /// Statements of a routine or compound statement body, up to a token in
    /// `ends` (which the caller then inspects) or the start of the next
    /// routine.
    pub(crate) fn body(&mut self, ends: TokenSet) -> Block {
        let table = Self::statement_table();
        let ends = ends.union(ROUTINE_START);
        ensure_sufficient_stack(|| self.block_items(&table, ends, STATEMENT_START.union(ends)))
    }

    fn block_items(&mut self, table: &[StmtParser<S>], ends: TokenSet, recovery: TokenSet) -> Block {
        // An empty block sits right after whatever introduced it.
        let anchor = self.stream.previous_span().end;
        let mut stmts: Vec<Stmt> = Vec::new();
        loop {
            if self.at_eof() || self.at_any(ends) {
                break;
            }
            let before = self.stream.position();
            let stmt = match self.dispatch(table) {
                Ok(stmt) => stmt,
                Err(expected) => self.skip_unrecognized(expected, recovery),
            };
            stmts.push(stmt);
            if self.stream.position() == before {
                break;
            }
        }
        let span = match (stmts.first(), stmts.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::point(anchor),
        };
        Block::new(stmts, span)
    }

    /// Try each production in order. Returns the union of expected leading
    /// tokens when none matches.
    fn dispatch(&mut self, table: &[StmtParser<S>]) -> Result<Stmt, TokenSet> {
        let mut expected = TokenSet::new();
        for parse in table {
            match parse(self) {
                ParseOutcome::Matched { node, errors } => {
                    debug!(
                        construct = node.kind.name(),
                        start = node.span.start,
                        end = node.span.end,
                        errors = errors.len(),
                        "dispatch"
                    );
                    self.errors.extend(errors);
                    return Ok(node);
                }
                ParseOutcome::NotMatched { expected: more, .. } => {
                    expected = expected.union(more);
                }
            }
        }
        Err(expected)
    }

    /// Skip at least one token, then everything up to the next recovery
    /// point, as one error statement with one diagnostic.
    fn skip_unrecognized(&mut self, expected: TokenSet, recovery: TokenSet) -> Stmt {
        let first = self.bump();
        synchronize(&mut self.stream, recovery);
        let span = self.span_from(first.span.start);
        debug!(
            start = span.start,
            end = span.end,
            expected = expected.count(),
            "skipped unrecognized statement"
        );
        self.error(ParseError::new(
            ErrorCode::E1006,
            format!("expected a statement, found {}", describe_token(&first)),
            span,
        ));
        Stmt::new(StmtKind::Error, span, false)
    }
}
