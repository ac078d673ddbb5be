//! The `check` command: lex, parse and resolve a file, rendering every
//! diagnostic with its line and column.

use std::io::{IsTerminal, Write};
use std::path::Path;

use fgl_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use fgl_diagnostic::DiagnosticQueue;
use fgl_parse::SymbolProvider;
use tracing::info;

use super::{read_file, CheckOptions};
use crate::SymbolFile;

/// Counts reported after a check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub errors: usize,
    pub warnings: usize,
}

impl CheckSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Check a file, writing diagnostics to stderr.
pub fn check_file(path: &str, options: &CheckOptions) -> Result<CheckSummary, String> {
    let source = read_file(path)?;
    let symbols = match &options.symbols {
        Some(file) => Some(
            SymbolFile::load(Path::new(file))
                .map_err(|e| format!("cannot read symbol file '{file}': {e}"))?,
        ),
        None => None,
    };
    let provider = symbols.as_ref().map(|s| s as &dyn SymbolProvider);

    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let summary = check_source(path, &source, options, provider, stderr.lock(), is_tty);

    if !summary.has_errors() {
        println!("OK: {path}");
    }
    Ok(summary)
}

/// Check `source` and render its diagnostics to `out`.
///
/// The resolution pass runs even over a tree with syntax errors; partial
/// nodes still carry whatever names were parsed.
pub fn check_source(
    path: &str,
    source: &str,
    options: &CheckOptions,
    provider: Option<&dyn SymbolProvider>,
    out: impl Write,
    is_tty: bool,
) -> CheckSummary {
    let output = fgl_parse::parse_source(source);

    let mut queue = DiagnosticQueue::with_config(options.diagnostic_config()).with_source(source);
    for diag in output.diagnostics() {
        queue.add(diag);
    }
    if !options.no_check {
        for diag in fgl_parse::check(&output.program, &output.arena, provider) {
            queue.add(diag);
        }
    }
    let diagnostics = queue.flush();

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let summary = CheckSummary {
        errors,
        warnings: diagnostics.len() - errors,
    };
    info!(path, errors = summary.errors, "check finished");

    let mut emitter =
        TerminalEmitter::with_color_mode(out, options.color, is_tty).with_source(path, source);
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(summary.errors, summary.warnings);
    emitter.flush();
    summary
}
