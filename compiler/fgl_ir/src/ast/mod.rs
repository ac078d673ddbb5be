//! Abstract syntax tree.
//!
//! Statements own their sub-statements directly; expressions live in an
//! [`ExprArena`] and are referenced by [`ExprId`]. Every node records the
//! exact half-open span of the tokens it was built from.

mod expr;
mod node;
mod stmt;

pub use expr::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprList, UnaryOp};
pub use node::{AstNode, NodeRef};
pub use stmt::*;

use crate::Span;

/// An identifier as written, with its span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    pub name: Box<str>,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<Box<str>>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Case-insensitive comparison; the language ignores identifier case.
    pub fn matches(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }
}

/// Ordered sequence of statements.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }

    /// Block without statements, anchored at `offset`.
    pub fn empty(offset: u32) -> Self {
        Block {
            stmts: Vec::new(),
            span: Span::point(offset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Root of one parse: the module body.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn items(&self) -> &[Stmt] {
        &self.body.stmts
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// False when a mandatory piece of the construct was missing.
    pub complete: bool,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span, complete: bool) -> Self {
        Stmt {
            kind,
            span,
            complete,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Accept(AcceptStmt),
    Close(CloseStmt),
    Options(OptionsStmt),
    Defer(DeferStmt),
    Exit(ExitStmt),
    Continue(ContinueStmt),
    Fetch(FetchStmt),
    Free(FreeStmt),
    Goto(GotoStmt),
    Label(LabelStmt),
    Need(NeedStmt),
    Open(OpenStmt),
    OutputToReport(OutputToReportStmt),
    Pause(PauseStmt),
    Prepare(PrepareStmt),
    Printx(PrintxStmt),
    Return(ReturnStmt),
    Database(DatabaseStmt),
    Skip(SkipStmt),
    Sleep(SleepStmt),
    StartReport(StartReportStmt),
    FinishReport(ReportRef),
    TerminateReport(ReportRef),
    Validate(ValidateStmt),
    SqlBlock(SqlBlockStmt),
    Execute(ExecuteStmt),
    Preprocessor(PreprocessorLine),
    Call(CallStmt),
    Let(LetStmt),
    Constant(ConstantStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Foreach(ForeachStmt),
    Main(MainDef),
    Routine(RoutineDef),
    /// Tokens skipped while recovering from an unrecognized statement.
    Error,
}

impl StmtKind {
    /// Short construct name used in outlines and error contexts.
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Accept(_) => "ACCEPT",
            StmtKind::Close(_) => "CLOSE",
            StmtKind::Options(_) => "OPTIONS",
            StmtKind::Defer(_) => "DEFER",
            StmtKind::Exit(_) => "EXIT",
            StmtKind::Continue(_) => "CONTINUE",
            StmtKind::Fetch(_) => "FETCH",
            StmtKind::Free(_) => "FREE",
            StmtKind::Goto(_) => "GOTO",
            StmtKind::Label(_) => "LABEL",
            StmtKind::Need(_) => "NEED",
            StmtKind::Open(_) => "OPEN",
            StmtKind::OutputToReport(_) => "OUTPUT TO REPORT",
            StmtKind::Pause(_) => "PAUSE",
            StmtKind::Prepare(_) => "PREPARE",
            StmtKind::Printx(_) => "PRINTX",
            StmtKind::Return(_) => "RETURN",
            StmtKind::Database(_) => "DATABASE",
            StmtKind::Skip(_) => "SKIP",
            StmtKind::Sleep(_) => "SLEEP",
            StmtKind::StartReport(_) => "START REPORT",
            StmtKind::FinishReport(_) => "FINISH REPORT",
            StmtKind::TerminateReport(_) => "TERMINATE REPORT",
            StmtKind::Validate(_) => "VALIDATE",
            StmtKind::SqlBlock(_) => "SQL",
            StmtKind::Execute(_) => "EXECUTE",
            StmtKind::Preprocessor(_) => "preprocessor",
            StmtKind::Call(_) => "CALL",
            StmtKind::Let(_) => "LET",
            StmtKind::Constant(_) => "CONSTANT",
            StmtKind::If(_) => "IF",
            StmtKind::While(_) => "WHILE",
            StmtKind::For(_) => "FOR",
            StmtKind::Foreach(_) => "FOREACH",
            StmtKind::Main(_) => "MAIN",
            StmtKind::Routine(def) => match def.kind {
                RoutineKind::Function => "FUNCTION",
                RoutineKind::Report => "REPORT",
            },
            StmtKind::Error => "error",
        }
    }
}
