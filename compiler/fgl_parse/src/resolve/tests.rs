use std::cell::RefCell;
use std::collections::BTreeSet;

use fgl_diagnostic::{Diagnostic, ErrorCode};
use fgl_ir::Span;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use super::{check, SymbolProvider};
use crate::parse_source;

/// Provider that knows a fixed set of names and records every batch it
/// was asked about.
struct Recording {
    known: Vec<&'static str>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl Recording {
    fn new(known: &[&'static str]) -> Self {
        Recording {
            known: known.to_vec(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl SymbolProvider for Recording {
    fn lookup(&self, names: &BTreeSet<String>) -> FxHashSet<String> {
        self.calls.borrow_mut().push(names.iter().cloned().collect());
        names
            .iter()
            .filter(|n| self.known.contains(&n.as_str()))
            .cloned()
            .collect()
    }
}

fn run(source: &str, provider: Option<&dyn SymbolProvider>) -> Vec<Diagnostic> {
    let output = parse_source(source);
    assert_eq!(output.diagnostics(), vec![], "{source:?} should parse cleanly");
    check(&output.program, &output.arena, provider)
}

fn summary(diags: &[Diagnostic]) -> Vec<(ErrorCode, String, Span)> {
    diags
        .iter()
        .map(|d| (d.code, d.message.clone(), d.span))
        .collect()
}

#[test]
fn test_case_variants_share_one_lookup_key() {
    let provider = Recording::new(&[]);
    let diags = run(
        "main\n  call Foo()\n  call foo()\nend main\n",
        Some(&provider),
    );

    assert_eq!(
        summary(&diags),
        vec![
            (
                ErrorCode::E2001,
                "No definition found for Foo".to_string(),
                Span::new(12, 15)
            ),
            (
                ErrorCode::E2001,
                "No definition found for foo".to_string(),
                Span::new(25, 28)
            ),
        ]
    );
    assert_eq!(*provider.calls.borrow(), vec![vec!["foo".to_string()]]);
}

#[test]
fn test_local_definitions_resolve_without_lookup() {
    let provider = Recording::new(&[]);
    let diags = run(
        "main\n  call HELPER()\nend main\nfunction helper()\nend function\n",
        Some(&provider),
    );
    assert!(diags.is_empty(), "{diags:?}");
    assert!(provider.calls.borrow().is_empty());
}

#[test]
fn test_provider_answers_resolve_sites() {
    let provider = Recording::new(&["f"]);
    let diags = run("main\n  let x = f(1) + g()\nend main\n", Some(&provider));

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "No definition found for g");
    assert_eq!(
        *provider.calls.borrow(),
        vec![vec!["f".to_string(), "g".to_string()]]
    );
}

#[test]
fn test_closure_provider() {
    let provider =
        |names: &BTreeSet<String>| -> FxHashSet<String> { names.iter().cloned().collect() };
    let diags = run("main\n  call anything()\nend main\n", Some(&provider));
    assert!(diags.is_empty());
}

#[test]
fn test_report_and_option_sites_are_references() {
    let provider = Recording::new(&[]);
    let diags = run(
        "main\n  options on terminate signal call cleanup\n  start report r\n  output to report r(1)\n  finish report R\nend main\n",
        Some(&provider),
    );

    let names: Vec<&str> = diags
        .iter()
        .map(|d| d.message.trim_start_matches("No definition found for "))
        .collect();
    assert_eq!(names, vec!["cleanup", "r", "r", "R"]);
    assert_eq!(
        *provider.calls.borrow(),
        vec![vec!["cleanup".to_string(), "r".to_string()]]
    );
}

#[test]
fn test_without_provider_only_local_checks_run() {
    let diags = run("main\n  call f()\n  goto nowhere\nend main\n", None);
    assert_eq!(
        summary(&diags),
        vec![(
            ErrorCode::E2002,
            "No label named nowhere in this function".to_string(),
            Span::new(23, 30)
        )]
    );
}

#[test]
fn test_goto_finds_label_in_nested_block() {
    let diags = run(
        "main\n  goto done\n  if x then\n    label done:\n  end if\nend main\n",
        None,
    );
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn test_labels_are_scoped_to_their_routine() {
    let diags = run(
        "function a()\n  label done:\nend function\nfunction b()\n  goto done\nend function\n",
        None,
    );
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E2002);
}

#[test]
fn test_duplicate_labels() {
    let diags = run("main\n  label x:\n  label X:\nend main\n", None);
    assert_eq!(
        summary(&diags),
        vec![(
            ErrorCode::E2003,
            "Duplicate definition of X".to_string(),
            Span::new(24, 25)
        )]
    );
}

#[test]
fn test_duplicate_routines() {
    let diags = run(
        "function f()\nend function\nreport F()\nend report\n",
        None,
    );
    assert_eq!(
        summary(&diags),
        vec![(
            ErrorCode::E2003,
            "Duplicate definition of F".to_string(),
            Span::new(33, 34)
        )]
    );
}

#[test]
fn test_diagnostics_sorted_by_offset() {
    let provider = Recording::new(&[]);
    let diags = run(
        "function f()\n  call missing()\n  goto bail\nend function\nfunction F()\nend function\n",
        Some(&provider),
    );
    let codes: Vec<ErrorCode> = diags.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E2001, ErrorCode::E2002, ErrorCode::E2003]
    );
    let starts: Vec<u32> = diags.iter().map(|d| d.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}
