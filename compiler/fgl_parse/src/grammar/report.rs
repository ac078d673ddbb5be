//! Report driving statements: OUTPUT TO REPORT, START REPORT, FINISH REPORT,
//! TERMINATE REPORT, and the report-body statements NEED, SKIP and PRINTX.

use fgl_ir::ast::{
    ExprList, NeedStmt, OutputToReportStmt, PrintxStmt, ReportDestination, ReportRef,
    SkipStmt, StartReportStmt,
};
use fgl_ir::{Ident, Stmt, StmtKind, TokenKind};

use crate::error::ParseError;
use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::TokenStream;
use crate::Parser;

const LINE_OR_LINES: TokenSet = TokenSet::new()
    .with(TokenKind::Line)
    .with(TokenKind::Lines);

const DESTINATIONS: TokenSet = TokenSet::new()
    .with(TokenKind::Screen)
    .with(TokenKind::Printer)
    .with(TokenKind::File)
    .with(TokenKind::Pipe);

impl<S: TokenStream> Parser<S> {
    /// Two-keyword lead-in such as `FINISH REPORT`.
    fn at_pair(&self, first: TokenKind, second: TokenKind) -> bool {
        self.at(first) && self.at_nth(second, 2)
    }

    /// `OUTPUT TO REPORT name ( [expr, ...] )`
    pub fn parse_output_to_report(&mut self) -> ParseOutcome<Stmt> {
        if !(self.at_pair(TokenKind::Output, TokenKind::To) && self.at_nth(TokenKind::Report, 3))
        {
            return self.decline(TokenSet::single(TokenKind::Output));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        self.bump();
        self.bump();
        let report = self.expect_name("report name");
        let errors_before_args = self.errors.len();
        let args = if report.is_some() || self.at(TokenKind::LParen) {
            self.call_args()
        } else {
            ExprList::new()
        };
        let complete = report.is_some() && self.errors.len() == errors_before_args;
        self.commit(
            mark,
            start,
            StmtKind::OutputToReport(OutputToReportStmt { report, args }),
            complete,
        )
    }

    /// `START REPORT name [TO {SCREEN | PRINTER | FILE expr | PIPE expr}]`
    pub fn parse_start_report(&mut self) -> ParseOutcome<Stmt> {
        if !self.at_pair(TokenKind::Start, TokenKind::Report) {
            return self.decline(TokenSet::single(TokenKind::Start));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        self.bump();
        let report = self.expect_name("report name");
        let mut complete = report.is_some();
        let mut destination = None;
        if self.eat(TokenKind::To).is_some() {
            destination = match self.current_kind() {
                TokenKind::Screen => {
                    self.bump();
                    Some(ReportDestination::Screen)
                }
                TokenKind::Printer => {
                    self.bump();
                    Some(ReportDestination::Printer)
                }
                TokenKind::File => {
                    self.bump();
                    Some(ReportDestination::File(self.expect_expr("file name")))
                }
                TokenKind::Pipe => {
                    self.bump();
                    Some(ReportDestination::Pipe(self.expect_expr("program name")))
                }
                _ => {
                    self.expected_one_of(DESTINATIONS);
                    None
                }
            };
            complete &= matches!(
                destination,
                Some(
                    ReportDestination::Screen
                        | ReportDestination::Printer
                        | ReportDestination::File(Some(_))
                        | ReportDestination::Pipe(Some(_))
                )
            );
        }
        self.commit(
            mark,
            start,
            StmtKind::StartReport(StartReportStmt {
                report,
                destination,
            }),
            complete,
        )
    }

    /// `FINISH REPORT name`
    pub fn parse_finish_report(&mut self) -> ParseOutcome<Stmt> {
        if !self.at_pair(TokenKind::Finish, TokenKind::Report) {
            return self.decline(TokenSet::single(TokenKind::Finish));
        }
        let (mark, start, report) = self.report_ref();
        let complete = report.is_some();
        self.commit(
            mark,
            start,
            StmtKind::FinishReport(ReportRef { report }),
            complete,
        )
    }

    /// `TERMINATE REPORT name`
    pub fn parse_terminate_report(&mut self) -> ParseOutcome<Stmt> {
        if !self.at_pair(TokenKind::Terminate, TokenKind::Report) {
            return self.decline(TokenSet::single(TokenKind::Terminate));
        }
        let (mark, start, report) = self.report_ref();
        let complete = report.is_some();
        self.commit(
            mark,
            start,
            StmtKind::TerminateReport(ReportRef { report }),
            complete,
        )
    }

    fn report_ref(&mut self) -> (usize, u32, Option<Ident>) {
        let mark = self.mark();
        let start = self.bump().span.start;
        self.bump();
        (mark, start, self.expect_name("report name"))
    }

    /// `NEED expr LINES`
    pub fn parse_need(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Need) {
            return self.decline(TokenSet::single(TokenKind::Need));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        // `LINES` is a soft keyword and would otherwise be read as the count.
        let lines = if self.at_any(LINE_OR_LINES) {
            let span = self.error_span();
            let err = ParseError::expected_expression("number of lines", self.current(), span);
            self.error(err);
            None
        } else {
            self.expect_expr("number of lines")
        };
        let has_lines = self.expect(TokenKind::Lines).is_some();
        self.commit(
            mark,
            start,
            StmtKind::Need(NeedStmt { lines }),
            lines.is_some() && has_lines,
        )
    }

    /// `SKIP TO TOP OF PAGE` or `SKIP [expr] [LINE | LINES]`
    pub fn parse_skip(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Skip) {
            return self.decline(TokenSet::single(TokenKind::Skip));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        if self.eat(TokenKind::To).is_some() {
            let complete = [TokenKind::Top, TokenKind::Of, TokenKind::Page]
                .into_iter()
                .all(|kind| self.expect(kind).is_some());
            return self.commit(
                mark,
                start,
                StmtKind::Skip(SkipStmt {
                    to_top_of_page: true,
                    num_lines: None,
                }),
                complete,
            );
        }
        let num_lines = if self.at_any(LINE_OR_LINES) {
            None
        } else {
            self.try_expr()
        };
        if self.at_any(LINE_OR_LINES) {
            self.bump();
        }
        self.commit(
            mark,
            start,
            StmtKind::Skip(SkipStmt {
                to_top_of_page: false,
                num_lines,
            }),
            true,
        )
    }

    /// `PRINTX [NAME = name] expr [, expr ...]`
    pub fn parse_printx(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Printx) {
            return self.decline(TokenSet::single(TokenKind::Printx));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let mut complete = true;
        let name = if self.at(TokenKind::Name) && self.at_nth(TokenKind::Eq, 2) {
            self.bump();
            self.bump();
            let name = self.expect_name("name after `NAME =`");
            complete = name.is_some();
            name
        } else {
            None
        };
        let exprs = self.expr_list("expression");
        complete &= !exprs.is_empty();
        self.commit(
            mark,
            start,
            StmtKind::Printx(PrintxStmt { name, exprs }),
            complete,
        )
    }
}
