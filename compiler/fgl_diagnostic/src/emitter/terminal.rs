//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and
//! source snippets when the source text is available.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto` mode, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always` or `never`.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text a diagnostic's spans refer to.
struct SourceFile<'s> {
    path: &'s str,
    text: &'s str,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render `path:line:col` locations and source snippets from `text`.
    #[must_use]
    pub fn with_source(mut self, path: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceFile {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<'s, io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }

    fn write_location(&mut self, diagnostic: &Diagnostic) {
        let Some(source) = &self.source else {
            let _ = writeln!(self.writer, "  --> {}", diagnostic.span);
            return;
        };
        let (line, col) = source
            .lines
            .offset_to_line_col(source.text, diagnostic.span.start);
        let _ = writeln!(self.writer, "  --> {}:{line}:{col}", source.path);

        let Some(text) = source.lines.line_text(source.text, line) else {
            return;
        };
        let text = text.to_string();
        // Underline to the end of the span or of the line, whichever is first.
        let line_chars = text.chars().count() as u32;
        let width = diagnostic.span.len().min(line_chars.saturating_sub(col - 1)).max(1);
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat((col - 1) as usize));
        let color = Self::severity_color(diagnostic.severity);
        self.write_colored(&"^".repeat(width as usize), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        let color = Self::severity_color(diagnostic.severity);
        self.write_colored(&diagnostic.severity.to_string(), color);
        if self.colors {
            let _ = write!(self.writer, "{}[{}]{}", colors::BOLD, diagnostic.code, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_location(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": {error_count} error{} found",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
