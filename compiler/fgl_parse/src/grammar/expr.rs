//! Expression grammar.
//!
//! Binary operators are parsed by precedence climbing. Binding powers,
//! loosest first:
//!
//! | Operators | Power | Assoc |
//! |-----------|-------|-------|
//! | `OR` | 1 | left |
//! | `AND` | 3 | left |
//! | `NOT` (prefix) | 5 | |
//! | `= == <> < <= > >=` | 7 | left |
//! | `\|\|` | 9 | left |
//! | `+ -` | 11 | left |
//! | `* / MOD` | 13 | left |
//! | `**` | 16 | right |
//! | unary `-` `+` | 17 | |
//!
//! Postfix `.member`, `.*` and `[index]` bind tighter than everything.

use fgl_ir::ast::{BinaryOp, ExprList, UnaryOp};
use fgl_ir::{Expr, ExprId, ExprKind, Ident, Span, TokenKind};

use crate::error::ParseError;
use crate::recovery::TokenSet;
use crate::stack::ensure_sufficient_stack;
use crate::stream::TokenStream;
use crate::Parser;

const NOT_POWER: u8 = 5;
const UNARY_POWER: u8 = 17;

/// Tokens that can begin an expression, besides names.
const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::IntLit)
    .with(TokenKind::DecimalLit)
    .with(TokenKind::StringLit)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Null)
    .with(TokenKind::LParen)
    .with(TokenKind::Minus)
    .with(TokenKind::Plus)
    .with(TokenKind::Not);

/// Operator, left power and right power of an infix token.
fn infix_binding_power(kind: TokenKind) -> Option<(BinaryOp, u8, u8)> {
    let (op, left, right) = match kind {
        TokenKind::Or => (BinaryOp::Or, 1, 2),
        TokenKind::And => (BinaryOp::And, 3, 4),
        TokenKind::Eq | TokenKind::EqEq => (BinaryOp::Eq, 7, 8),
        TokenKind::NotEq => (BinaryOp::NotEq, 7, 8),
        TokenKind::Lt => (BinaryOp::Lt, 7, 8),
        TokenKind::LtEq => (BinaryOp::LtEq, 7, 8),
        TokenKind::Gt => (BinaryOp::Gt, 7, 8),
        TokenKind::GtEq => (BinaryOp::GtEq, 7, 8),
        TokenKind::Concat => (BinaryOp::Concat, 9, 10),
        TokenKind::Plus => (BinaryOp::Add, 11, 12),
        TokenKind::Minus => (BinaryOp::Sub, 11, 12),
        TokenKind::Star => (BinaryOp::Mul, 13, 14),
        TokenKind::Slash => (BinaryOp::Div, 13, 14),
        TokenKind::Mod => (BinaryOp::Mod, 13, 14),
        TokenKind::StarStar => (BinaryOp::Pow, 16, 15),
        _ => return None,
    };
    Some((op, left, right))
}

impl<S: TokenStream> Parser<S> {
    pub(crate) fn at_expr_start(&self) -> bool {
        self.at_any(EXPR_START) || self.at_name()
    }

    /// Parse an expression, or report `what` as missing.
    pub(crate) fn expect_expr(&mut self, what: &str) -> Option<ExprId> {
        if self.at_expr_start() {
            Some(self.expr())
        } else {
            let span = self.error_span();
            let err = ParseError::expected_expression(what, self.current(), span);
            self.error(err);
            None
        }
    }

    /// Parse an expression if one starts here.
    pub(crate) fn try_expr(&mut self) -> Option<ExprId> {
        if self.at_expr_start() {
            Some(self.expr())
        } else {
            None
        }
    }

    pub(crate) fn expr(&mut self) -> ExprId {
        self.expr_bp(0)
    }

    fn expr_bp(&mut self, min_power: u8) -> ExprId {
        ensure_sufficient_stack(|| {
            let mut lhs = self.prefix_expr();
            while let Some((op, left, right)) = infix_binding_power(self.current_kind()) {
                if left < min_power {
                    break;
                }
                self.bump();
                let rhs = self.operand(right, op.as_str());
                let span = self.arena.span(lhs).merge(self.arena.span(rhs));
                lhs = self.arena.alloc(Expr::new(
                    ExprKind::Binary {
                        op,
                        left: lhs,
                        right: rhs,
                    },
                    span,
                ));
            }
            lhs
        })
    }

    /// Right-hand operand of `op`, or an error node if none starts here.
    fn operand(&mut self, power: u8, op: &str) -> ExprId {
        if self.at_expr_start() {
            return self.expr_bp(power);
        }
        let span = self.error_span();
        let err = ParseError::expected_expression(
            &format!("expression after `{op}`"),
            self.current(),
            span,
        );
        self.error(err);
        self.error_expr()
    }

    /// Zero-width error placeholder after the last consumed token.
    fn error_expr(&mut self) -> ExprId {
        let at = self.stream.previous_span().end;
        self.arena.alloc(Expr::new(ExprKind::Error, Span::point(at)))
    }

    fn prefix_expr(&mut self) -> ExprId {
        let (op, power) = match self.current_kind() {
            TokenKind::Not => (UnaryOp::Not, NOT_POWER),
            TokenKind::Minus => (UnaryOp::Neg, UNARY_POWER),
            TokenKind::Plus => (UnaryOp::Plus, UNARY_POWER),
            _ => return self.postfix_expr(),
        };
        let op_token = self.bump();
        let operand = self.operand(power, op_token.kind.display_name());
        let span = op_token.span.merge(self.arena.span(operand));
        self.arena
            .alloc(Expr::new(ExprKind::Unary { op, operand }, span))
    }

    fn postfix_expr(&mut self) -> ExprId {
        let base = self.primary_expr();
        self.postfix(base)
    }

    /// Apply `.member`, `.*` and `[index, ...]` suffixes to `base`.
    fn postfix(&mut self, mut base: ExprId) -> ExprId {
        loop {
            let start = self.arena.span(base).start;
            if self.at(TokenKind::Dot) {
                if self.at_nth(TokenKind::Star, 2) {
                    self.bump();
                    self.bump();
                    base = self.alloc_from(start, ExprKind::MemberAll { base });
                } else {
                    self.bump();
                    match self.expect_name("member name after `.`") {
                        Some(member) => {
                            base = self.alloc_from(start, ExprKind::Member { base, member });
                        }
                        None => return base,
                    }
                }
            } else if self.at(TokenKind::LBracket) {
                self.bump();
                let indices = self.expr_list("index");
                self.expect(TokenKind::RBracket);
                base = self.alloc_from(start, ExprKind::Index { base, indices });
            } else {
                return base;
            }
        }
    }

    fn alloc_from(&mut self, start: u32, kind: ExprKind) -> ExprId {
        let span = self.span_from(start);
        self.arena.alloc(Expr::new(kind, span))
    }

    fn primary_expr(&mut self) -> ExprId {
        let kind = match self.current_kind() {
            TokenKind::IntLit => ExprKind::Int(self.current().text().parse().ok()),
            TokenKind::DecimalLit => ExprKind::Decimal(self.current().text().into()),
            TokenKind::StringLit => ExprKind::String(self.current().text().into()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Null => ExprKind::Null,
            TokenKind::LParen => return self.paren_expr(),
            _ if self.at_name() => return self.name_or_call(),
            _ => {
                let span = self.error_span();
                let err = ParseError::expected_expression("expression", self.current(), span);
                self.error(err);
                return self.error_expr();
            }
        };
        let span = self.bump().span;
        self.arena.alloc(Expr::new(kind, span))
    }

    fn paren_expr(&mut self) -> ExprId {
        let start = self.bump().span.start;
        let inner = match self.expect_expr("expression after `(`") {
            Some(inner) => inner,
            None => self.error_expr(),
        };
        self.expect(TokenKind::RParen);
        self.alloc_from(start, ExprKind::Paren(inner))
    }

    fn name_or_call(&mut self) -> ExprId {
        let token = self.bump();
        let name = Ident::new(token.text(), token.span);
        if !self.at(TokenKind::LParen) {
            return self
                .arena
                .alloc(Expr::new(ExprKind::Name(name), token.span));
        }
        let args = self.call_args();
        self.alloc_from(token.span.start, ExprKind::Call { func: name, args })
    }

    /// `- number`, where only a numeric literal may follow the sign.
    pub(crate) fn negated_literal(&mut self, what: &str) -> Option<ExprId> {
        let minus = self.bump().span;
        if !self.at(TokenKind::IntLit) && !self.at(TokenKind::DecimalLit) {
            let span = self.error_span();
            let err = ParseError::expected_expression(what, self.current(), span);
            self.error(err);
            return None;
        }
        let operand = self.primary_expr();
        let span = minus.merge(self.arena.span(operand));
        Some(self.arena.alloc(Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            },
            span,
        )))
    }

    /// `( [expr, ...] )`; the opening parenthesis is required.
    pub(crate) fn call_args(&mut self) -> ExprList {
        if self.expect(TokenKind::LParen).is_none() {
            return ExprList::new();
        }
        let args = if self.at(TokenKind::RParen) {
            ExprList::new()
        } else {
            self.expr_list("argument")
        };
        self.expect(TokenKind::RParen);
        args
    }

    /// A variable reference: a name with optional member and index
    /// suffixes. Used where `=` must not be read as a comparison.
    pub(crate) fn expect_variable(&mut self, what: &str) -> Option<ExprId> {
        let name = self.expect_name(what)?;
        let span = name.span;
        let base = self.arena.alloc(Expr::new(ExprKind::Name(name), span));
        Some(self.postfix(base))
    }

    /// Comma-separated variables; at least one is required.
    pub(crate) fn variable_list(&mut self, what: &str) -> ExprList {
        let mut list = ExprList::new();
        loop {
            match self.expect_variable(what) {
                Some(var) => list.push(var),
                None => break,
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        list
    }
}
