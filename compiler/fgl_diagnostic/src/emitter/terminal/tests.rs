use fgl_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(diag: &Diagnostic, source: Option<&str>, colors: bool) -> String {
    let mut output = Vec::new();
    {
        let mode = if colors { ColorMode::Always } else { ColorMode::Never };
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if let Some(text) = source {
            emitter = emitter.with_source("demo.4gl", text);
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn test_snippet_with_source() {
    let source = "main\n  exit program -\nend main\n";
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("expected exit code after `-`")
        .with_span(Span::new(20, 21))
        .with_note("while parsing EXIT statement");
    let text = render(&diag, Some(source), false);
    assert_eq!(
        text,
        "error[E1004]: expected exit code after `-`\n\
         \x20 --> demo.4gl:2:16\n\
         \x20 |\n\
         2 |   exit program -\n\
         \x20 |                ^\n\
         \x20 = note: while parsing EXIT statement\n\n"
    );
}

#[test]
fn test_without_source_prints_span() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("No definition found for foo")
        .with_span(Span::new(5, 8));
    let text = render(&diag, None, false);
    assert!(text.starts_with("error[E2001]: No definition found for foo\n"));
    assert!(text.contains("--> 5..8"));
}

#[test]
fn test_colors_only_when_requested() {
    let diag = Diagnostic::error(ErrorCode::E1006).with_message("unrecognized statement");
    assert!(render(&diag, None, true).contains("\x1b["));
    assert!(!render(&diag, None, false).contains("\x1b["));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("rainbow"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}

#[test]
fn test_summary() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_summary(2, 1);
    }
    assert_eq!(
        String::from_utf8_lossy(&output),
        "error: 2 errors found; 1 warning emitted\n"
    );
}
