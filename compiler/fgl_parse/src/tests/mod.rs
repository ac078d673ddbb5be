//! Parser tests.
//!
//! - `statements`: one production at a time
//! - `blocks`: routines, compound statements and their terminators
//! - `recovery`: malformed input and resynchronisation
//! - `expressions`: precedence and postfix forms
//! - `scripted`: the parser driven by a hand-built token stream
//! - `properties`: invariants over generated input

mod expressions;
mod statements;

use fgl_diagnostic::ErrorCode;
use fgl_ir::{Stmt, TokenList};

use crate::ParseOutput;

fn lex(source: &str) -> TokenList {
    fgl_lexer::lex(source).tokens
}

/// Parse `source` as a flat statement list.
fn body(source: &str) -> ParseOutput {
    crate::parse_body(&lex(source))
}

/// Parse `source` as a module.
fn module(source: &str) -> ParseOutput {
    crate::parse_source(source)
}

/// The only top-level statement of `output`.
fn single(output: &ParseOutput) -> &Stmt {
    let stmts = &output.program.body.stmts;
    assert_eq!(stmts.len(), 1, "expected one statement, got {stmts:#?}");
    &stmts[0]
}

fn messages(output: &ParseOutput) -> Vec<String> {
    output.errors.iter().map(|e| e.message.clone()).collect()
}

fn codes(output: &ParseOutput) -> Vec<ErrorCode> {
    output.errors.iter().map(|e| e.code).collect()
}
