//! FGL IR - tokens, spans and syntax tree types
//!
//! This crate holds the data shared by the lexer, the parser and tooling:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (statements, blocks, identifiers)
//! - Arena allocation for expressions
//! - A visitor and a generic [`NodeRef`] for navigation
//!
//! Everything here is immutable once built: a parse produces a [`Program`]
//! plus its [`ExprArena`], and edits require a fresh parse.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod info;
mod span;
mod token;
pub mod visitor;

pub use ast::{
    AstNode, Block, Expr, ExprArena, ExprId, ExprKind, Ident, NodeRef, Program, Stmt, StmtKind,
};
pub use info::{SymbolInfo, SymbolScope};
pub use span::{Span, SpanError};
pub use token::{Token, TokenCategory, TokenFlags, TokenKind, TokenList};
pub use visitor::Visitor;

static_assert_size!(Span, 8);
static_assert_size!(TokenKind, 1);
static_assert_size!(ExprId, 4);
