//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use fgl_ir::{ExprArena, NodeRef, Stmt, StmtKind, TokenList};
use fgl_parse::ParseOutput;

use super::read_file;

/// Lex a file and print the token stream to stdout.
pub fn lex_file(path: &str) -> Result<(), String> {
    let source = read_file(path)?;
    let lexed = fgl_lexer::lex(&source);

    let mut out = io::stdout().lock();
    let written = writeln!(out, "Tokens for '{path}' ({} tokens):", lexed.tokens.len())
        .and_then(|()| write_tokens(&lexed.tokens, &mut out));
    written.map_err(|e| e.to_string())?;

    for error in &lexed.errors {
        eprintln!("  {}: {error}", error.span());
    }
    Ok(())
}

/// One line per token: kind, span and, where it differs from the kind,
/// the token's value.
pub fn write_tokens(tokens: &TokenList, out: &mut impl Write) -> io::Result<()> {
    for token in tokens.iter() {
        match &token.value {
            Some(value) => writeln!(out, "  {:?} @ {} {value:?}", token.kind, token.span)?,
            None => writeln!(out, "  {:?} @ {}", token.kind, token.span)?,
        }
    }
    Ok(())
}

/// Parse a file and print a statement outline to stdout.
pub fn parse_file(path: &str) -> Result<(), String> {
    let source = read_file(path)?;
    let output = fgl_parse::parse_source(&source);

    let mut out = io::stdout().lock();
    let written = writeln!(out, "Parse result for '{path}':")
        .and_then(|()| write_outline(&output, &mut out));
    written.map_err(|e| e.to_string())?;

    let diagnostics = output.diagnostics();
    if !diagnostics.is_empty() {
        println!();
        println!("Errors:");
        for diag in &diagnostics {
            println!("  {}: {}", diag.span, diag.message);
        }
    }
    Ok(())
}

/// Nested statement outline: construct name, routine name, span, and a
/// marker on incomplete nodes.
pub fn write_outline(output: &ParseOutput, out: &mut impl Write) -> io::Result<()> {
    for stmt in output.program.items() {
        outline_stmt(stmt, &output.arena, 1, out)?;
    }
    Ok(())
}

fn outline_stmt(
    stmt: &Stmt,
    arena: &ExprArena,
    depth: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    let indent = depth * 2;
    write!(out, "{:indent$}{}", "", stmt.kind.name())?;
    if let StmtKind::Routine(def) = &stmt.kind {
        if let Some(name) = &def.name {
            write!(out, " {}", name.name)?;
        }
    }
    write!(out, " {}", stmt.span)?;
    if !stmt.complete {
        write!(out, " (incomplete)")?;
    }
    writeln!(out)?;

    for child in NodeRef::Stmt(stmt).children(arena).into_values() {
        if let NodeRef::Block(block) = child {
            for nested in &block.stmts {
                outline_stmt(nested, arena, depth + 1, out)?;
            }
        }
    }
    Ok(())
}
