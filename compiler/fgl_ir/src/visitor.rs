//! AST visitor.
//!
//! Default `visit_*` implementations call the matching `walk_*` function,
//! which visits the node's children in source order. Override a `visit_*`
//! method to act on a node; call `walk_*` from the override to keep
//! descending.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
//!         if matches!(stmt.kind, StmtKind::Call(_)) {
//!             self.0 += 1;
//!         }
//!         walk_stmt(self, stmt, arena);
//!     }
//! }
//! ```

use crate::ast::{
    AttributeSpecifier, Block, ConstantDef, ExprArena, ExprId, Ident, NodeRef, OptionClause,
    Program, Stmt, UsingVar,
};

pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program, arena: &'ast ExprArena) {
        walk_program(self, program, arena);
    }

    fn visit_block(&mut self, block: &'ast Block, arena: &'ast ExprArena) {
        walk_block(self, block, arena);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        walk_expr(self, id, arena);
    }

    /// Identifiers are leaves.
    fn visit_ident(&mut self, _ident: &'ast Ident) {}

    fn visit_option(&mut self, clause: &'ast OptionClause, arena: &'ast ExprArena) {
        walk_node(self, NodeRef::Option(clause), arena);
    }

    fn visit_constant(&mut self, def: &'ast ConstantDef, arena: &'ast ExprArena) {
        walk_node(self, NodeRef::Constant(def), arena);
    }

    fn visit_using(&mut self, var: &'ast UsingVar, arena: &'ast ExprArena) {
        walk_node(self, NodeRef::Using(var), arena);
    }

    fn visit_attributes(&mut self, _attributes: &'ast AttributeSpecifier) {}
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    program: &'ast Program,
    arena: &'ast ExprArena,
) {
    visitor.visit_block(&program.body, arena);
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    block: &'ast Block,
    arena: &'ast ExprArena,
) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt, arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast ExprArena,
) {
    walk_node(visitor, NodeRef::Stmt(stmt), arena);
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast ExprArena,
) {
    walk_node(visitor, NodeRef::Expr(id, arena.span(id)), arena);
}

/// Dispatch each direct child of `node` to the matching `visit_*` method.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    node: NodeRef<'ast>,
    arena: &'ast ExprArena,
) {
    node.for_each_child(arena, &mut |child| match child {
        NodeRef::Stmt(stmt) => visitor.visit_stmt(stmt, arena),
        NodeRef::Block(block) => visitor.visit_block(block, arena),
        NodeRef::Expr(id, _) => visitor.visit_expr(id, arena),
        NodeRef::Ident(ident) => visitor.visit_ident(ident),
        NodeRef::Attributes(attrs) => visitor.visit_attributes(attrs),
        NodeRef::Option(clause) => visitor.visit_option(clause, arena),
        NodeRef::Constant(def) => visitor.visit_constant(def, arena),
        NodeRef::Using(var) => visitor.visit_using(var, arena),
    });
}
