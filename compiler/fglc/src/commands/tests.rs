use fgl_diagnostic::emitter::ColorMode;
use pretty_assertions::assert_eq;

use super::{check_source, write_outline, write_tokens, CheckOptions, CheckSummary};
use crate::SymbolFile;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn plain() -> CheckOptions {
    CheckOptions {
        color: ColorMode::Never,
        ..CheckOptions::default()
    }
}

fn run_check(source: &str, options: &CheckOptions, symbols: &str) -> (CheckSummary, String) {
    let provider = SymbolFile::parse(symbols);
    let mut out = Vec::new();
    let summary = check_source("demo.4gl", source, options, Some(&provider), &mut out, false);
    (summary, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn test_options_parse_flags_and_path() {
    let (options, path) = CheckOptions::parse(&args(&[
        "--symbols=lib.txt",
        "prog.4gl",
        "--no-check",
        "--color=never",
        "--limit=0",
    ]))
    .unwrap();

    assert_eq!(path, "prog.4gl");
    assert_eq!(
        options,
        CheckOptions {
            symbols: Some("lib.txt".to_string()),
            no_check: true,
            color: ColorMode::Never,
            error_limit: 0,
        }
    );
}

#[test]
fn test_options_parse_errors() {
    assert_eq!(
        CheckOptions::parse(&args(&[])),
        Err("missing file path".to_string())
    );
    assert_eq!(
        CheckOptions::parse(&args(&["a.4gl", "--color=rainbow"])),
        Err("invalid color mode 'rainbow' (auto, always, never)".to_string())
    );
    assert_eq!(
        CheckOptions::parse(&args(&["a.4gl", "--verbose"])),
        Err("unknown option '--verbose'".to_string())
    );
    assert_eq!(
        CheckOptions::parse(&args(&["a.4gl", "b.4gl"])),
        Err("unexpected argument 'b.4gl'".to_string())
    );
}

#[test]
fn test_outline_nests_bodies() {
    let output = fgl_parse::parse_source(
        "function greet(who)\n  return\nend function\nmain\n  sleep\nend main\n",
    );
    let mut out = Vec::new();
    write_outline(&output, &mut out).unwrap();
    assert_eq!(
        String::from_utf8_lossy(&out),
        "  FUNCTION greet 0..41\n\
         \x20   RETURN 22..28\n\
         \x20 MAIN 42..63\n\
         \x20   SLEEP 49..54 (incomplete)\n"
    );
}

#[test]
fn test_tokens_show_values() {
    let lexed = fgl_lexer::lex("call f");
    let mut out = Vec::new();
    write_tokens(&lexed.tokens, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("  Call @ 0..4"), "{text}");
    assert!(lines[1].ends_with("\"f\""), "{text}");
}

#[test]
fn test_check_reports_unresolved_call_with_location() {
    let (summary, text) = run_check("main\n  call foo()\nend main\n", &plain(), "");
    assert_eq!(
        summary,
        CheckSummary {
            errors: 1,
            warnings: 0
        }
    );
    assert!(
        text.starts_with("error[E2001]: No definition found for foo\n  --> demo.4gl:2:8\n"),
        "{text}"
    );
    assert!(text.ends_with("error: 1 error found\n"), "{text}");
}

#[test]
fn test_check_reports_every_call_site_on_a_line() {
    let (summary, text) = run_check("main\n  let x = foo(1) + foo(2)\nend main\n", &plain(), "");
    assert_eq!(summary.errors, 2);
    assert!(text.contains("demo.4gl:2:11"), "{text}");
    assert!(text.contains("demo.4gl:2:20"), "{text}");
}

#[test]
fn test_check_clean_file_prints_nothing() {
    let (summary, text) = run_check("main\n  call foo()\nend main\n", &plain(), "FOO\n");
    assert!(!summary.has_errors());
    assert_eq!(text, "");
}

#[test]
fn test_no_check_skips_resolution() {
    let options = CheckOptions {
        no_check: true,
        ..plain()
    };
    let (summary, _) = run_check("main\n  call foo()\n  goto nowhere\nend main\n", &options, "");
    assert_eq!(summary, CheckSummary::default());
}

#[test]
fn test_syntax_and_resolution_errors_together() {
    let (summary, text) = run_check("main\n  sleep\n  call foo()\nend main\n", &plain(), "");
    assert_eq!(summary.errors, 2);
    let first = text.find("error[E1004]").unwrap();
    let second = text.find("error[E2001]").unwrap();
    assert!(first < second, "{text}");
}

#[test]
fn test_error_limit() {
    let options = CheckOptions {
        error_limit: 2,
        ..plain()
    };
    let (summary, _) = run_check(
        "main\n  call a()\n  call b()\n  call c()\nend main\n",
        &options,
        "",
    );
    assert_eq!(summary.errors, 2);
}
