//! Generic node navigation.
//!
//! Tooling that does not care about concrete node types (outline views,
//! "node at offset" lookups) works through [`NodeRef`], which borrows any
//! node of the tree and can list its children keyed by start offset.

use std::collections::BTreeMap;

use super::{
    AttributeSpecifier, Block, CloseAction, CloseTarget, ConstantDef, ExecuteTarget, ExprArena,
    ExprId, ExprKind, FetchPosition, Ident, OptionClause, OptionKind, ReportDestination, Stmt,
    StmtKind, UsingVar,
};
use crate::Span;

/// Shape shared by every tree node.
pub trait AstNode {
    fn span(&self) -> Span;

    #[inline]
    fn start(&self) -> u32 {
        self.span().start
    }

    #[inline]
    fn end(&self) -> u32 {
        self.span().end
    }

    fn is_complete(&self) -> bool {
        true
    }
}

impl AstNode for Stmt {
    fn span(&self) -> Span {
        self.span
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}

impl AstNode for Block {
    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for AttributeSpecifier {
    fn span(&self) -> Span {
        self.span
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}

impl AstNode for OptionClause {
    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for ConstantDef {
    fn span(&self) -> Span {
        self.span
    }

    fn is_complete(&self) -> bool {
        self.value.is_some()
    }
}

impl AstNode for UsingVar {
    fn span(&self) -> Span {
        self.span
    }
}

/// Borrowed reference to any node of a parsed tree.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    Stmt(&'a Stmt),
    Block(&'a Block),
    Expr(ExprId, Span),
    Ident(&'a Ident),
    Attributes(&'a AttributeSpecifier),
    Option(&'a OptionClause),
    Constant(&'a ConstantDef),
    Using(&'a UsingVar),
}

impl<'a> NodeRef<'a> {
    pub fn span(self) -> Span {
        match self {
            NodeRef::Stmt(n) => n.span,
            NodeRef::Block(n) => n.span,
            NodeRef::Expr(_, span) => span,
            NodeRef::Ident(n) => n.span,
            NodeRef::Attributes(n) => n.span,
            NodeRef::Option(n) => n.span,
            NodeRef::Constant(n) => n.span,
            NodeRef::Using(n) => n.span,
        }
    }

    /// Completeness of the node itself. Expressions are incomplete when they
    /// are error placeholders.
    pub fn is_complete(self, arena: &ExprArena) -> bool {
        match self {
            NodeRef::Stmt(n) => n.complete,
            NodeRef::Attributes(n) => n.complete,
            NodeRef::Constant(n) => n.is_complete(),
            NodeRef::Expr(id, _) => !matches!(arena.get(id).kind, ExprKind::Error),
            NodeRef::Block(_) | NodeRef::Ident(_) | NodeRef::Option(_) | NodeRef::Using(_) => {
                true
            }
        }
    }

    /// Direct children keyed by their start offset.
    ///
    /// Children never overlap, so start offsets are unique among siblings.
    /// Zero-width children (empty blocks) share an offset with a following
    /// sibling only when nothing precedes them; the later one wins.
    pub fn children(self, arena: &'a ExprArena) -> BTreeMap<u32, NodeRef<'a>> {
        let mut out = BTreeMap::new();
        self.for_each_child(arena, &mut |child| {
            out.insert(child.span().start, child);
        });
        out
    }

    /// Visit direct children in source order.
    pub fn for_each_child(self, arena: &'a ExprArena, f: &mut dyn FnMut(NodeRef<'a>)) {
        let expr = |id: ExprId| NodeRef::Expr(id, arena.span(id));
        match self {
            NodeRef::Stmt(stmt) => stmt_children(stmt, arena, f),
            NodeRef::Block(block) => block.stmts.iter().for_each(|s| f(NodeRef::Stmt(s))),
            NodeRef::Expr(id, _) => match &arena.get(id).kind {
                ExprKind::Member { base, member } => {
                    f(expr(*base));
                    f(NodeRef::Ident(member));
                }
                ExprKind::Call { func, args } => {
                    f(NodeRef::Ident(func));
                    args.iter().for_each(|a| f(expr(*a)));
                }
                _ => arena.children(id).into_iter().for_each(|c| f(expr(c))),
            },
            NodeRef::Constant(def) => {
                f(NodeRef::Ident(&def.name));
                if let Some(ty) = &def.type_name {
                    f(NodeRef::Ident(ty));
                }
                if let Some(value) = def.value {
                    f(expr(value));
                }
            }
            NodeRef::Using(var) => f(expr(var.var)),
            NodeRef::Option(clause) => option_children(clause, arena, f),
            NodeRef::Ident(_) | NodeRef::Attributes(_) => {}
        }
    }
}

impl AstNode for NodeRef<'_> {
    fn span(&self) -> Span {
        NodeRef::span(*self)
    }
}

fn option_children<'a>(
    clause: &'a OptionClause,
    arena: &ExprArena,
    f: &mut dyn FnMut(NodeRef<'a>),
) {
    match &clause.kind {
        OptionKind::Line { value, .. } | OptionKind::HelpFile(value) => opt_expr(f, arena, *value),
        OptionKind::Key { name, .. } => ident(f, name),
        OptionKind::Attributes { attributes, .. } => {
            attributes.iter().for_each(|a| f(NodeRef::Attributes(a)));
        }
        OptionKind::OnTerminateSignal(func)
        | OptionKind::OnCloseApplication(Some(CloseAction::Call(func))) => ident(f, func),
        OptionKind::InputWrap { .. }
        | OptionKind::FieldOrder(_)
        | OptionKind::SqlInterrupt(_)
        | OptionKind::OnCloseApplication(_) => {}
    }
}

fn stmt_children<'a>(stmt: &'a Stmt, arena: &'a ExprArena, f: &mut dyn FnMut(NodeRef<'a>)) {
    match &stmt.kind {
        StmtKind::Close(s) => match &s.target {
            Some(CloseTarget::Cursor(name)) => f(NodeRef::Ident(name)),
            Some(CloseTarget::Window(name) | CloseTarget::Form(name)) => ident(f, name),
            Some(CloseTarget::Database) | None => {}
        },
        StmtKind::Options(s) => s.clauses.iter().for_each(|c| f(NodeRef::Option(c))),
        StmtKind::Exit(s) => opt_expr(f, arena, s.exit_code),
        StmtKind::Fetch(s) => {
            if let Some(FetchPosition::Absolute(e) | FetchPosition::Relative(e)) = &s.position {
                opt_expr(f, arena, *e);
            }
            ident(f, &s.cursor);
            exprs(f, arena, &s.into);
        }
        StmtKind::Free(s) => ident(f, &s.target),
        StmtKind::Goto(s) => ident(f, &s.label),
        StmtKind::Label(s) => ident(f, &s.name),
        StmtKind::Need(s) => opt_expr(f, arena, s.lines),
        StmtKind::Open(s) => {
            ident(f, &s.cursor);
            s.using.iter().for_each(|u| f(NodeRef::Using(u)));
        }
        StmtKind::OutputToReport(s) => {
            ident(f, &s.report);
            exprs(f, arena, &s.args);
        }
        StmtKind::Pause(s) => opt_expr(f, arena, s.message),
        StmtKind::Prepare(s) => {
            ident(f, &s.ident);
            opt_expr(f, arena, s.sql);
        }
        StmtKind::Printx(s) => {
            ident(f, &s.name);
            exprs(f, arena, &s.exprs);
        }
        StmtKind::Return(s) => exprs(f, arena, &s.values),
        StmtKind::Database(s) => ident(f, &s.name),
        StmtKind::Skip(s) => opt_expr(f, arena, s.num_lines),
        StmtKind::Sleep(s) => opt_expr(f, arena, s.seconds),
        StmtKind::StartReport(s) => {
            ident(f, &s.report);
            if let Some(ReportDestination::File(e) | ReportDestination::Pipe(e)) = &s.destination {
                opt_expr(f, arena, *e);
            }
        }
        StmtKind::FinishReport(s) | StmtKind::TerminateReport(s) => ident(f, &s.report),
        StmtKind::Validate(s) => {
            exprs(f, arena, &s.targets);
            exprs(f, arena, &s.columns);
        }
        StmtKind::Execute(s) => {
            match &s.target {
                ExecuteTarget::Immediate(e) => opt_expr(f, arena, *e),
                ExecuteTarget::Prepared(name) => ident(f, name),
            }
            s.using.iter().for_each(|u| f(NodeRef::Using(u)));
            exprs(f, arena, &s.into);
        }
        StmtKind::Call(s) => {
            ident(f, &s.func);
            exprs(f, arena, &s.args);
            exprs(f, arena, &s.returning);
        }
        StmtKind::Let(s) => {
            opt_expr(f, arena, s.target);
            exprs(f, arena, &s.values);
        }
        StmtKind::Constant(s) => s.defs.iter().for_each(|d| f(NodeRef::Constant(d))),
        StmtKind::If(s) => {
            opt_expr(f, arena, s.cond);
            f(NodeRef::Block(&s.then_body));
            if let Some(else_body) = &s.else_body {
                f(NodeRef::Block(else_body));
            }
        }
        StmtKind::While(s) => {
            opt_expr(f, arena, s.cond);
            f(NodeRef::Block(&s.body));
        }
        StmtKind::For(s) => {
            opt_expr(f, arena, s.var);
            opt_expr(f, arena, s.from);
            opt_expr(f, arena, s.to);
            opt_expr(f, arena, s.step);
            f(NodeRef::Block(&s.body));
        }
        StmtKind::Foreach(s) => {
            ident(f, &s.cursor);
            exprs(f, arena, &s.into);
            f(NodeRef::Block(&s.body));
        }
        StmtKind::Main(s) => f(NodeRef::Block(&s.body)),
        StmtKind::Routine(s) => {
            ident(f, &s.name);
            s.params.iter().for_each(|p| f(NodeRef::Ident(p)));
            if let Some(attrs) = &s.attributes {
                f(NodeRef::Attributes(attrs));
            }
            f(NodeRef::Block(&s.body));
        }
        StmtKind::Accept(_)
        | StmtKind::Defer(_)
        | StmtKind::Continue(_)
        | StmtKind::SqlBlock(_)
        | StmtKind::Preprocessor(_)
        | StmtKind::Error => {}
    }
}

fn ident<'a>(f: &mut dyn FnMut(NodeRef<'a>), name: &'a Option<Ident>) {
    if let Some(name) = name {
        f(NodeRef::Ident(name));
    }
}

fn opt_expr<'a>(f: &mut dyn FnMut(NodeRef<'a>), arena: &ExprArena, id: Option<ExprId>) {
    if let Some(id) = id {
        f(NodeRef::Expr(id, arena.span(id)));
    }
}

fn exprs<'a>(f: &mut dyn FnMut(NodeRef<'a>), arena: &ExprArena, list: &[ExprId]) {
    for &id in list {
        f(NodeRef::Expr(id, arena.span(id)));
    }
}
