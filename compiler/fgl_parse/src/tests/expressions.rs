//! Operator precedence and postfix forms, observed through LET values.

#![allow(clippy::unwrap_used, reason = "test assertions")]

use pretty_assertions::assert_eq;

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::UnaryOp;
use fgl_ir::{ExprArena, ExprId, ExprKind, Span, StmtKind};

use super::{body, codes, single};
use crate::ParseOutput;

/// The first value of the only LET statement in `source`.
fn value(source: &str) -> (ParseOutput, ExprId) {
    let out = body(source);
    let StmtKind::Let(stmt) = &single(&out).kind else {
        panic!("expected LET in {source:?}");
    };
    let id = stmt.values[0];
    (out, id)
}

/// Render an expression as an S-expression for compact comparisons.
fn sexpr(arena: &ExprArena, id: ExprId) -> String {
    match &arena.get(id).kind {
        ExprKind::Int(Some(n)) => n.to_string(),
        ExprKind::Int(None) => "overflow".to_string(),
        ExprKind::Decimal(text) | ExprKind::String(text) => text.to_string(),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Null => "null".to_string(),
        ExprKind::Name(name) => name.as_str().to_string(),
        ExprKind::Member { base, member } => format!("{}.{}", sexpr(arena, *base), member.as_str()),
        ExprKind::MemberAll { base } => format!("{}.*", sexpr(arena, *base)),
        ExprKind::Index { base, indices } => {
            let indices: Vec<String> = indices.iter().map(|i| sexpr(arena, *i)).collect();
            format!("{}[{}]", sexpr(arena, *base), indices.join(" "))
        }
        ExprKind::Call { func, args } => {
            let args: Vec<String> = args.iter().map(|a| sexpr(arena, *a)).collect();
            format!("(call {} {})", func.as_str(), args.join(" "))
        }
        ExprKind::Unary { op, operand } => {
            let op = match op {
                UnaryOp::Neg => "neg",
                UnaryOp::Plus => "pos",
                UnaryOp::Not => "not",
            };
            format!("({op} {})", sexpr(arena, *operand))
        }
        ExprKind::Binary { op, left, right } => format!(
            "({} {} {})",
            op.as_str(),
            sexpr(arena, *left),
            sexpr(arena, *right)
        ),
        ExprKind::Paren(inner) => sexpr(arena, *inner),
        ExprKind::Error => "<error>".to_string(),
    }
}

fn render(source: &str) -> String {
    let (out, id) = value(source);
    assert!(out.errors.is_empty(), "{source:?}: {:?}", out.errors);
    sexpr(&out.arena, id)
}

#[test]
fn test_precedence() {
    assert_eq!(render("let x = 1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("let x = (1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(render("let x = a || b + c"), "(|| a (+ b c))");
    assert_eq!(render("let x = a or b and c"), "(OR a (AND b c))");
    assert_eq!(render("let x = not a = b"), "(not (= a b))");
    assert_eq!(render("let x = -1 - 2"), "(- (neg 1) 2)");
    assert_eq!(render("let x = a mod 2 <> 0"), "(<> (MOD a 2) 0)");
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(render("let x = 2 ** 3 ** 2"), "(** 2 (** 3 2))");
    assert_eq!(render("let x = 8 - 4 - 2"), "(- (- 8 4) 2)");
}

#[test]
fn test_postfix_and_calls() {
    assert_eq!(render("let x = r.f[1, 2]"), "r.f[1 2]");
    assert_eq!(render("let x = f(1, g())"), "(call f 1 (call g ))");
    assert_eq!(render("let x = rec.*"), "rec.*");
}

#[test]
fn test_literals() {
    assert_eq!(render("let x = 1.5e3"), "1.5e3");
    assert_eq!(render(r"let x = 'it\'s'"), "it's");
    assert_eq!(render("let x = null"), "null");
    assert_eq!(render("let x = 99999999999999999999"), "overflow");
}

#[test]
fn test_expression_spans() {
    let (out, id) = value("let x = (1 + 2) * 3");
    assert_eq!(out.arena.span(id), Span::new(8, 19));
    let (out, id) = value("let x = f(a)");
    assert_eq!(out.arena.span(id), Span::new(8, 12));
}

#[test]
fn test_missing_operand_yields_error_node() {
    let (out, id) = value("let x = 1 +");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    assert_eq!(
        out.errors[0].message,
        "expected expression after `+`, found end of file"
    );
    assert_eq!(sexpr(&out.arena, id), "(+ 1 <error>)");
    assert_eq!(out.arena.span(id), Span::new(8, 11));
}

#[test]
fn test_unclosed_paren() {
    let (out, _) = value("let x = (1");
    assert_eq!(
        out.errors[0].message,
        "expected `)`, found end of file"
    );
}

#[test]
fn test_missing_member_name() {
    let (out, id) = value("let x = r.");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert_eq!(sexpr(&out.arena, id), "r");
}
