//! Error-tolerant recursive descent parser for FGL.
//!
//! Turns a token stream into a span-tracked [`Program`] plus its
//! [`ExprArena`]. Malformed input never aborts the parse: every statement
//! production either declines without consuming anything or commits and
//! returns a (possibly incomplete) node, reporting what went wrong as
//! [`ParseError`]s. A separate pass, [`check`], reconciles call sites
//! against local definitions and an external [`SymbolProvider`].
//!
//! ```text
//! let output = fgl_parse::parse_source(source);
//! let mut diagnostics = output.diagnostics();
//! diagnostics.extend(fgl_parse::check(&output.program, &output.arena, provider));
//! ```

mod cursor;
mod error;
mod grammar;
mod outcome;
mod recovery;
pub mod resolve;
mod stack;
mod stream;
mod symbols;

pub use cursor::Cursor;
pub use error::{describe_token, ErrorContext, ParseError};
pub use outcome::ParseOutcome;
pub use recovery::{
    synchronize, TokenSet, BLOCK_END, MODULE_ITEM_START, ROUTINE_START, STATEMENT_START,
};
pub use resolve::{check, SymbolProvider};
pub use stream::{LexMode, TokenPredicate, TokenStream};
pub use symbols::{symbols, symbols_with, SqlFormatter};

use std::ops::{Deref, DerefMut};

use fgl_diagnostic::{Diagnostic, DiagnosticSink};
use fgl_ir::{ExprArena, Program, Stmt, TokenList};
use fgl_lexer::LexError;

/// A statement production: a predictive test followed, on success, by a
/// committed parse.
pub type StmtParser<S> = fn(&mut Parser<S>) -> ParseOutcome<Stmt>;

/// Parser state for one token stream.
pub struct Parser<S: TokenStream> {
    stream: S,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(stream: S) -> Self {
        Parser {
            stream,
            arena: ExprArena::new(),
            errors: Vec::new(),
        }
    }

    /// Parse a whole module: MAIN, FUNCTION and REPORT definitions plus
    /// module-level declarations.
    pub fn parse_program(mut self) -> ParseOutput {
        let body = self.module_items();
        self.finish(Program { body })
    }

    /// Parse a flat statement list, as found inside a routine body.
    pub fn parse_body(mut self) -> ParseOutput {
        let body = self.statement_list();
        self.finish(Program { body })
    }

    fn finish(self, program: Program) -> ParseOutput {
        ParseOutput {
            program,
            arena: self.arena,
            errors: self.errors,
            lex_errors: Vec::new(),
        }
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Errors reported outside any matched production, and those handed back
    /// by the dispatch loop.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Switch the stream to `mode` until the returned guard is dropped.
    pub fn with_mode(&mut self, mode: LexMode) -> ModeGuard<'_, S> {
        let previous = self.stream.set_mode(mode);
        ModeGuard {
            parser: self,
            previous,
        }
    }
}

/// Scoped lexer-mode switch. Restores the previous mode when dropped, so
/// every exit path of a raw-mode production leaves the stream in the mode
/// it found it.
pub struct ModeGuard<'p, S: TokenStream> {
    parser: &'p mut Parser<S>,
    previous: LexMode,
}

impl<S: TokenStream> Deref for ModeGuard<'_, S> {
    type Target = Parser<S>;

    fn deref(&self) -> &Parser<S> {
        self.parser
    }
}

impl<S: TokenStream> DerefMut for ModeGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Parser<S> {
        self.parser
    }
}

impl<S: TokenStream> Drop for ModeGuard<'_, S> {
    fn drop(&mut self) {
        self.parser.stream.set_mode(self.previous);
    }
}

/// Result of one parse.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
    /// Lexical errors, when the output came from [`parse_source`].
    pub lex_errors: Vec<LexError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.lex_errors.is_empty()
    }

    /// Lexical and syntax diagnostics, ordered by start offset.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out: Vec<Diagnostic> = self
            .lex_errors
            .iter()
            .map(LexError::to_diagnostic)
            .chain(self.errors.iter().map(ParseError::to_diagnostic))
            .collect();
        out.sort_by_key(|d| (d.span.start, d.span.end));
        out
    }

    pub fn report_to(&self, sink: &mut impl DiagnosticSink) {
        sink.report_all(self.diagnostics());
    }
}

/// Parse a module from a lexed token list.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(Cursor::new(tokens)).parse_program()
}

/// Parse a flat statement list from a lexed token list.
pub fn parse_body(tokens: &TokenList) -> ParseOutput {
    Parser::new(Cursor::new(tokens)).parse_body()
}

/// Lex and parse a module.
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = fgl_lexer::lex(source);
    let mut output = parse(&lexed.tokens);
    output.lex_errors = lexed.errors;
    output
}

#[cfg(test)]
mod tests;
