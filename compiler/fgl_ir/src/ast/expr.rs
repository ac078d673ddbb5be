//! Expressions and the arena that owns them.
//!
//! Expressions are stored flat in an [`ExprArena`] and referenced by
//! [`ExprId`]; statements hold ids rather than boxed trees.

use std::fmt;

use smallvec::SmallVec;

use super::Ident;
use crate::Span;

/// Index of an expression in its [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Comma-separated expression list. Most lists hold a handful of entries.
pub type ExprList = SmallVec<[ExprId; 4]>;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "OR",
            BinaryOp::And => "AND",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Concat => "||",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "MOD",
            BinaryOp::Pow => "**",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal; the value is `None` when it does not fit in `i64`.
    Int(Option<i64>),
    /// Decimal literal, kept as written.
    Decimal(Box<str>),
    /// String literal contents without quotes.
    String(Box<str>),
    Bool(bool),
    Null,
    /// Variable or constant reference.
    Name(Ident),
    /// `base.member`
    Member { base: ExprId, member: Ident },
    /// `base.*`
    MemberAll { base: ExprId },
    /// `base[i, j]`
    Index { base: ExprId, indices: ExprList },
    /// `func(args)`
    Call { func: Ident, args: ExprList },
    Unary { op: UnaryOp, operand: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `( inner )`
    Paren(ExprId),
    /// Placeholder for malformed input; a diagnostic was reported.
    Error,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Flat storage for every expression of one parse.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate an expression and return its id.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len()).unwrap_or(u32::MAX);
        self.exprs.push(expr);
        ExprId(id)
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Direct child expressions of `id`, in source order.
    pub fn children(&self, id: ExprId) -> ExprList {
        match &self.get(id).kind {
            ExprKind::Int(_)
            | ExprKind::Decimal(_)
            | ExprKind::String(_)
            | ExprKind::Bool(_)
            | ExprKind::Null
            | ExprKind::Name(_)
            | ExprKind::Error => ExprList::new(),
            ExprKind::Member { base, .. } | ExprKind::MemberAll { base } => {
                smallvec::smallvec![*base]
            }
            ExprKind::Index { base, indices } => {
                let mut out = ExprList::new();
                out.push(*base);
                out.extend(indices.iter().copied());
                out
            }
            ExprKind::Call { args, .. } => args.clone(),
            ExprKind::Unary { operand, .. } => smallvec::smallvec![*operand],
            ExprKind::Binary { left, right, .. } => smallvec::smallvec![*left, *right],
            ExprKind::Paren(inner) => smallvec::smallvec![*inner],
        }
    }
}
