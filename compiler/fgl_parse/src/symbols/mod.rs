//! Hover and outline metadata for named definitions.
//!
//! CONSTANT definitions document themselves with their source text.
//! PREPARE statements whose SQL is a string literal document the prepared
//! identifier with that SQL, optionally run through a [`SqlFormatter`].

use fgl_ir::ast::{ConstantDef, PrepareStmt};
use fgl_ir::visitor::{walk_stmt, Visitor};
use fgl_ir::{ExprArena, ExprKind, Program, Stmt, StmtKind, SymbolInfo, SymbolScope};

/// Pretty-printer for embedded SQL text.
pub trait SqlFormatter {
    fn format(&self, sql: &str) -> String;
}

/// Collect symbol metadata for `program`, leaving SQL text as written.
pub fn symbols(program: &Program, arena: &ExprArena, source: &str) -> Vec<SymbolInfo> {
    symbols_with(program, arena, source, None)
}

/// Like [`symbols`], formatting PREPARE documentation with `formatter`.
pub fn symbols_with(
    program: &Program,
    arena: &ExprArena,
    source: &str,
    formatter: Option<&dyn SqlFormatter>,
) -> Vec<SymbolInfo> {
    let mut collector = Collector {
        source,
        formatter,
        depth: 0,
        out: Vec::new(),
    };
    collector.visit_program(program, arena);
    collector.out
}

struct Collector<'a> {
    source: &'a str,
    formatter: Option<&'a dyn SqlFormatter>,
    /// Number of enclosing MAIN, FUNCTION or REPORT bodies.
    depth: u32,
    out: Vec<SymbolInfo>,
}

impl Collector<'_> {
    fn scope(&self) -> SymbolScope {
        if self.depth == 0 {
            SymbolScope::Module
        } else {
            SymbolScope::Local
        }
    }

    fn constant(&mut self, def: &ConstantDef, arena: &ExprArena) {
        let mut info = SymbolInfo::new(def.name.as_str(), self.scope(), def.name.span);
        if let Some(value) = def.value {
            let text = arena.span(value).text(self.source);
            info = info.with_documentation(format!("CONSTANT {} = {text}", def.name.name));
        }
        self.out.push(info);
    }

    fn prepare(&mut self, stmt: &PrepareStmt, arena: &ExprArena) {
        let Some(ident) = &stmt.ident else {
            return;
        };
        let mut info = SymbolInfo::new(ident.as_str(), self.scope(), ident.span);
        if let Some(ExprKind::String(sql)) = stmt.sql.map(|id| &arena.get(id).kind) {
            let doc = match self.formatter {
                Some(formatter) => formatter.format(sql),
                None => sql.to_string(),
            };
            info = info.with_documentation(doc);
        }
        self.out.push(info);
    }
}

impl<'ast> Visitor<'ast> for Collector<'_> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        match &stmt.kind {
            StmtKind::Main(_) | StmtKind::Routine(_) => {
                self.depth += 1;
                walk_stmt(self, stmt, arena);
                self.depth -= 1;
                return;
            }
            StmtKind::Constant(constants) => {
                for def in &constants.defs {
                    self.constant(def, arena);
                }
                return;
            }
            StmtKind::Prepare(prepare) => self.prepare(prepare, arena),
            _ => {}
        }
        walk_stmt(self, stmt, arena);
    }
}
