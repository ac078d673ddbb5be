//! Collects diagnostics from every phase before they are shown.
//!
//! The lexer, parser and checker each report in their own order; the queue
//! merges them by source position, caps the error count, and drops the
//! follow-on noise a single mistake tends to produce on one line.

use fgl_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors accepted before further ones are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Keep only the first syntax error of a line, and drop any other error
    /// that repeats the previous one's message at the same span.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// The most recent errors that were kept, for deduplication.
#[derive(Clone, Debug, Default)]
struct LastError {
    syntax_line: Option<u32>,
    other: Option<(Span, String)>,
}

/// Ordered, capped, deduplicated diagnostic buffer.
///
/// Without source text every offset counts as its own line. Errors from
/// later phases are only repeats when they point at the same span, so two
/// calls to one unknown function on a line are both kept.
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(config).with_source(&source);
/// queue.add(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    last: LastError,
    lines: Option<LineOffsetTable>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Map offsets to lines through `source` for deduplication.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.lines = Some(LineOffsetTable::build(source));
        self
    }

    /// Queue `diag`. Returns `false` when it was dropped by the error limit
    /// or as a repeat.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }
        if !diag.is_error() {
            self.diagnostics.push(diag);
            return true;
        }

        if diag.code.is_parser_error() {
            let line = self
                .lines
                .as_ref()
                .map_or(diag.span.start, |table| table.line_from_offset(diag.span.start));
            if self.config.deduplicate && self.last.syntax_line == Some(line) {
                return false;
            }
            self.last.syntax_line = Some(line);
        } else {
            let repeat = matches!(
                &self.last.other,
                Some((span, message)) if *span == diag.span && *message == diag.message
            );
            if self.config.deduplicate && repeat {
                return false;
            }
            self.last.other = Some((diag.span, diag.message.clone()));
        }

        self.error_count += 1;
        self.diagnostics.push(diag);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take every queued diagnostic, ordered by start offset, and reset the
    /// queue. Diagnostics at the same offset keep their report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.span.start);
        self.error_count = 0;
        self.last = LastError::default();
        out
    }

    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
