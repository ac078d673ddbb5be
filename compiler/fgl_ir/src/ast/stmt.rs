//! Statement payloads.
//!
//! Every optional field corresponds to a piece of grammar that may be missing
//! from malformed input. A statement with an unset mandatory field carries
//! `complete: false` on its [`Stmt`](super::Stmt).

use super::{Block, ExprId, ExprList, Ident};
use crate::{Span, Token};

/// `ACCEPT {CONSTRUCT | INPUT | DIALOG | DISPLAY}`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AcceptStmt {
    pub accept_type: Option<AcceptType>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AcceptType {
    Construct,
    Input,
    Dialog,
    Display,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CloseStmt {
    pub target: Option<CloseTarget>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CloseTarget {
    Cursor(Ident),
    Window(Option<Ident>),
    Form(Option<Ident>),
    Database,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionsStmt {
    pub clauses: Vec<OptionClause>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionClause {
    pub kind: OptionKind,
    pub span: Span,
    /// False when an operand of the clause is missing.
    pub complete: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum OptionKind {
    /// `INPUT [NO] WRAP`
    InputWrap { wrap: bool },
    /// `FIELD ORDER {CONSTRAINED | UNCONSTRAINED | FORM}`
    FieldOrder(Option<FieldOrder>),
    /// `COMMENT LINE expr`, `MESSAGE LINE expr`, ...
    Line {
        line: ScreenLine,
        value: Option<ExprId>,
    },
    /// `ACCEPT KEY key`, `HELP KEY key`, ...
    Key {
        key: KeyOption,
        name: Option<Ident>,
    },
    /// `HELP FILE expr`
    HelpFile(Option<ExprId>),
    /// `SQL INTERRUPT {ON | OFF}`
    SqlInterrupt(Option<bool>),
    /// `{INPUT | DISPLAY} ATTRIBUTES (...)`
    Attributes {
        target: AttributeTarget,
        attributes: Option<AttributeSpecifier>,
    },
    /// `ON TERMINATE SIGNAL CALL function`
    OnTerminateSignal(Option<Ident>),
    /// `ON CLOSE APPLICATION {STOP | CALL function}`
    OnCloseApplication(Option<CloseAction>),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldOrder {
    Constrained,
    Unconstrained,
    Form,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScreenLine {
    Comment,
    Error,
    Form,
    Menu,
    Message,
    Prompt,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeyOption {
    Accept,
    Delete,
    Insert,
    Next,
    Previous,
    Help,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeTarget {
    Input,
    Display,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CloseAction {
    Stop,
    Call(Option<Ident>),
}

/// `ATTRIBUTES ( ... )` with the raw tokens between the parentheses.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AttributeSpecifier {
    pub tokens: Vec<Token>,
    pub span: Span,
    /// False when end of file was reached before the closing parenthesis.
    pub complete: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeferType {
    Interrupt,
    Quit,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeferStmt {
    pub defer_type: Option<DeferType>,
}

/// Block kinds named by `EXIT` and `CONTINUE`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExitType {
    For,
    Foreach,
    While,
    Menu,
    Construct,
    Report,
    Display,
    Input,
    Dialog,
    Case,
    Program,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExitStmt {
    pub exit_type: Option<ExitType>,
    /// `EXIT PROGRAM [-]code`
    pub exit_code: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContinueStmt {
    pub target: Option<ExitType>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FetchPosition {
    Next,
    Previous,
    Prior,
    Current,
    First,
    Last,
    Absolute(Option<ExprId>),
    Relative(Option<ExprId>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FetchStmt {
    pub position: Option<FetchPosition>,
    pub cursor: Option<Ident>,
    pub into: ExprList,
}

/// `FREE name`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FreeStmt {
    pub target: Option<Ident>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GotoStmt {
    pub label: Option<Ident>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LabelStmt {
    pub name: Option<Ident>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NeedStmt {
    pub lines: Option<ExprId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamDirection {
    In,
    Out,
    InOut,
}

/// One `USING` variable with its optional direction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UsingVar {
    pub var: ExprId,
    pub direction: Option<ParamDirection>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OpenStmt {
    pub cursor: Option<Ident>,
    pub using: Vec<UsingVar>,
    pub with_reoptimization: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OutputToReportStmt {
    pub report: Option<Ident>,
    pub args: ExprList,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PauseStmt {
    pub message: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PrepareStmt {
    pub ident: Option<Ident>,
    pub sql: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PrintxStmt {
    /// `NAME = name`
    pub name: Option<Ident>,
    pub exprs: ExprList,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReturnStmt {
    pub values: ExprList,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DatabaseForm {
    /// `SCHEMA name`
    Schema,
    /// `DATABASE name`
    Database,
    /// `DESCRIBE DATABASE name`
    DescribeDatabase,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DatabaseStmt {
    /// `None` when `DESCRIBE` was not followed by `DATABASE`.
    pub form: Option<DatabaseForm>,
    pub name: Option<Ident>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SkipStmt {
    pub to_top_of_page: bool,
    pub num_lines: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SleepStmt {
    pub seconds: Option<ExprId>,
}

/// `TERMINATE REPORT name` / `FINISH REPORT name`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReportRef {
    pub report: Option<Ident>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReportDestination {
    Screen,
    Printer,
    File(Option<ExprId>),
    Pipe(Option<ExprId>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StartReportStmt {
    pub report: Option<Ident>,
    pub destination: Option<ReportDestination>,
}

/// `VALIDATE target, ... LIKE table.column, ...`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValidateStmt {
    pub targets: ExprList,
    pub columns: ExprList,
}

/// `SQL ... END SQL`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SqlBlockStmt {
    pub tokens: Vec<Token>,
    /// Span of the text between `SQL` and `END SQL`.
    pub body: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExecuteTarget {
    Immediate(Option<ExprId>),
    Prepared(Option<Ident>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExecuteStmt {
    pub target: ExecuteTarget,
    pub using: Vec<UsingVar>,
    pub into: ExprList,
}

/// `& tokens...` up to the end of the line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PreprocessorLine {
    /// Every token after `&`, comments included.
    pub tokens: Vec<Token>,
}

impl PreprocessorLine {
    /// The directive word (`include`, `define`, ...), if any.
    pub fn directive(&self) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| !t.kind.is_trivia())
            .map(Token::text)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallStmt {
    pub func: Option<Ident>,
    pub args: ExprList,
    pub returning: ExprList,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LetStmt {
    pub target: Option<ExprId>,
    pub values: ExprList,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstantStmt {
    pub defs: Vec<ConstantDef>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstantDef {
    pub name: Ident,
    pub type_name: Option<Ident>,
    pub value: Option<ExprId>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub cond: Option<ExprId>,
    pub then_body: Block,
    pub else_body: Option<Block>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WhileStmt {
    pub cond: Option<ExprId>,
    pub body: Block,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ForStmt {
    pub var: Option<ExprId>,
    pub from: Option<ExprId>,
    pub to: Option<ExprId>,
    pub step: Option<ExprId>,
    pub body: Block,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ForeachStmt {
    pub cursor: Option<Ident>,
    pub into: ExprList,
    pub body: Block,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MainDef {
    pub body: Block,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RoutineKind {
    Function,
    Report,
}

/// `FUNCTION name(params) ... END FUNCTION` or the `REPORT` equivalent.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RoutineDef {
    pub kind: RoutineKind,
    pub name: Option<Ident>,
    pub params: Vec<Ident>,
    pub attributes: Option<AttributeSpecifier>,
    pub body: Block,
}
