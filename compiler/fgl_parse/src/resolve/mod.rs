//! Deferred name resolution.
//!
//! Runs after parsing, over the finished tree. Call sites that name a
//! FUNCTION or REPORT of the same program resolve locally; everything else
//! is queued and looked up in one batch through a [`SymbolProvider`], so a
//! module with hundreds of calls into a library costs a single round trip.
//!
//! Label checks (`GOTO` targets, duplicate `LABEL`s) and duplicate routine
//! names are purely local and run whether or not a provider is available.

use std::collections::BTreeSet;

use fgl_diagnostic::{Diagnostic, ErrorCode};
use fgl_ir::ast::{CloseAction, OptionClause, OptionKind};
use fgl_ir::visitor::{walk_expr, walk_node, walk_stmt, Visitor};
use fgl_ir::{Block, ExprArena, ExprId, ExprKind, Ident, NodeRef, Program, Span, Stmt, StmtKind};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// External source of definitions: libraries, other modules, built-ins.
pub trait SymbolProvider {
    /// Return the subset of `names` that are defined. Names are lower-cased
    /// on the way in and compared lower-cased on the way out.
    fn lookup(&self, names: &BTreeSet<String>) -> FxHashSet<String>;
}

impl<F> SymbolProvider for F
where
    F: Fn(&BTreeSet<String>) -> FxHashSet<String>,
{
    fn lookup(&self, names: &BTreeSet<String>) -> FxHashSet<String> {
        self(names)
    }
}

/// Resolve every call site of `program` and check labels and duplicate
/// definitions.
///
/// Without a provider the deferred lookup is skipped and unresolved call
/// sites are not reported. Diagnostics come back ordered by offset.
pub fn check(
    program: &Program,
    arena: &ExprArena,
    provider: Option<&dyn SymbolProvider>,
) -> Vec<Diagnostic> {
    let mut checker = Checker::new(program);
    checker.visit_program(program, arena);

    let Checker {
        deferred,
        mut diagnostics,
        ..
    } = checker;
    if let Some(provider) = provider {
        diagnostics.extend(deferred.resolve(provider));
    }
    diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
    diagnostics
}

/// A reference waiting for the batched lookup, as spelled at its site.
#[derive(Debug)]
struct PendingRef {
    offset: u32,
    spelling: Box<str>,
}

/// Unresolved references keyed by lower-cased name.
#[derive(Default, Debug)]
struct DeferredRefs {
    table: FxHashMap<String, Vec<PendingRef>>,
}

impl DeferredRefs {
    fn enqueue(&mut self, name: &Ident) {
        self.table
            .entry(name.as_str().to_ascii_lowercase())
            .or_default()
            .push(PendingRef {
                offset: name.span.start,
                spelling: name.name.clone(),
            });
    }

    fn resolve(self, provider: &dyn SymbolProvider) -> Vec<Diagnostic> {
        if self.table.is_empty() {
            return Vec::new();
        }

        let names: BTreeSet<String> = self.table.keys().cloned().collect();
        debug!(names = names.len(), "batched symbol lookup");
        let found = provider.lookup(&names);
        let found: FxHashSet<String> = found.iter().map(|n| n.to_ascii_lowercase()).collect();

        self.table
            .into_iter()
            .filter(|(key, _)| !found.contains(key))
            .flat_map(|(_, sites)| sites)
            .map(|site| {
                let len = u32::try_from(site.spelling.len()).unwrap_or(u32::MAX);
                let span = Span::new(site.offset, site.offset.saturating_add(len));
                Diagnostic::error(ErrorCode::E2001)
                    .with_message(format!("No definition found for {}", site.spelling))
                    .with_span(span)
            })
            .collect()
    }
}

/// Tree walk owning the local definitions and the deferred table.
struct Checker {
    /// Lower-cased FUNCTION and REPORT names defined in this program.
    routines: FxHashSet<String>,
    deferred: DeferredRefs,
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    fn new(program: &Program) -> Self {
        let mut checker = Checker {
            routines: FxHashSet::default(),
            deferred: DeferredRefs::default(),
            diagnostics: Vec::new(),
        };
        checker.collect_routines(program);
        checker
    }

    /// Every routine is callable from anywhere in the module, including
    /// bodies that precede its definition.
    fn collect_routines(&mut self, program: &Program) {
        for stmt in program.items() {
            let StmtKind::Routine(def) = &stmt.kind else {
                continue;
            };
            let Some(name) = &def.name else {
                continue;
            };
            if !self.routines.insert(name.as_str().to_ascii_lowercase()) {
                self.diagnostics.push(duplicate(name));
            }
        }
    }

    fn reference(&mut self, name: Option<&Ident>) {
        let Some(name) = name else {
            return;
        };
        if !self.routines.contains(&name.as_str().to_ascii_lowercase()) {
            self.deferred.enqueue(name);
        }
    }

    /// Labels are scoped to one routine body.
    fn check_labels(&mut self, body: &Block, arena: &ExprArena) {
        let mut scope = LabelScope::default();
        scope.visit_block(body, arena);

        for label in scope.duplicates {
            self.diagnostics.push(duplicate(label));
        }
        for target in scope.gotos {
            if !scope.labels.contains(&target.as_str().to_ascii_lowercase()) {
                self.diagnostics.push(
                    Diagnostic::error(ErrorCode::E2002)
                        .with_message(format!("No label named {} in this function", target.name))
                        .with_span(target.span),
                );
            }
        }
    }
}

impl<'ast> Visitor<'ast> for Checker {
    fn visit_program(&mut self, program: &'ast Program, arena: &'ast ExprArena) {
        // A flat statement list is its own label scope.
        self.check_labels(&program.body, arena);
        self.visit_block(&program.body, arena);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        match &stmt.kind {
            StmtKind::Main(def) => self.check_labels(&def.body, arena),
            StmtKind::Routine(def) => self.check_labels(&def.body, arena),
            StmtKind::Call(call) => self.reference(call.func.as_ref()),
            StmtKind::OutputToReport(output) => self.reference(output.report.as_ref()),
            StmtKind::StartReport(start) => self.reference(start.report.as_ref()),
            StmtKind::FinishReport(r) | StmtKind::TerminateReport(r) => {
                self.reference(r.report.as_ref());
            }
            _ => {}
        }
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        if let ExprKind::Call { func, .. } = &arena.get(id).kind {
            self.reference(Some(func));
        }
        walk_expr(self, id, arena);
    }

    fn visit_option(&mut self, clause: &'ast OptionClause, arena: &'ast ExprArena) {
        match &clause.kind {
            OptionKind::OnTerminateSignal(func)
            | OptionKind::OnCloseApplication(Some(CloseAction::Call(func))) => {
                self.reference(func.as_ref());
            }
            _ => {}
        }
        walk_node(self, NodeRef::Option(clause), arena);
    }
}

/// Labels and GOTO targets of one body, not descending into nested routines.
#[derive(Default)]
struct LabelScope<'ast> {
    labels: FxHashSet<String>,
    duplicates: Vec<&'ast Ident>,
    gotos: Vec<&'ast Ident>,
}

impl<'ast> Visitor<'ast> for LabelScope<'ast> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        match &stmt.kind {
            StmtKind::Label(label) => {
                if let Some(name) = &label.name {
                    if !self.labels.insert(name.as_str().to_ascii_lowercase()) {
                        self.duplicates.push(name);
                    }
                }
            }
            StmtKind::Goto(goto) => self.gotos.extend(goto.label.as_ref()),
            StmtKind::Main(_) | StmtKind::Routine(_) => return,
            _ => {}
        }
        walk_stmt(self, stmt, arena);
    }

    fn visit_expr(&mut self, _id: ExprId, _arena: &'ast ExprArena) {}
}

fn duplicate(name: &Ident) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("Duplicate definition of {}", name.name))
        .with_span(name.span)
}

#[cfg(test)]
mod tests;
