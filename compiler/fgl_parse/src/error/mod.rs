//! Parse errors and the context they were reported in.

use std::fmt;

use fgl_diagnostic::{Diagnostic, ErrorCode};
use fgl_ir::{Span, Token, TokenCategory};

use crate::recovery::TokenSet;

/// What the parser was working on when an error was reported.
///
/// Rendered as a "while parsing ..." note on the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// A statement, named by its leading keyword(s).
    Statement(&'static str),
    /// A MAIN, FUNCTION or REPORT definition.
    Definition(&'static str),
    Expression,
    AttributeList,
    PreprocessorLine,
    SqlBlock,
}

impl ErrorContext {
    /// Description for "while parsing {description}".
    pub fn description(self) -> String {
        match self {
            Self::Statement(name) => format!("{} {name} statement", article(name)),
            Self::Definition(name) => format!("{} {name} definition", article(name)),
            Self::Expression => "an expression".to_string(),
            Self::AttributeList => "an attribute list".to_string(),
            Self::PreprocessorLine => "a preprocessor line".to_string(),
            Self::SqlBlock => "an SQL block".to_string(),
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.as_bytes().first() {
        Some(b'A' | b'E' | b'I' | b'O' | b'U') => "an",
        _ => "a",
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while parsing {}", self.description())
    }
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// "expected `X` or `Y`, found Z"
    #[cold]
    pub fn expected_tokens(expected: TokenSet, found: &Token, span: Span) -> Self {
        Self::new(
            ErrorCode::E1002,
            format!(
                "expected {}, found {}",
                expected.format_expected(),
                describe_token(found)
            ),
            span,
        )
    }

    /// "expected {what}, found Z" for a missing name.
    #[cold]
    pub fn expected_name(what: &str, found: &Token, span: Span) -> Self {
        Self::new(
            ErrorCode::E1003,
            format!("expected {what}, found {}", describe_token(found)),
            span,
        )
    }

    /// "expected {what}, found Z" for a missing expression.
    #[cold]
    pub fn expected_expression(what: &str, found: &Token, span: Span) -> Self {
        Self::new(
            ErrorCode::E1004,
            format!("expected {what}, found {}", describe_token(found)),
            span,
        )
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_span(self.span);
        match self.context {
            Some(context) => diag.with_note(context.to_string()),
            None => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

/// How a token is named in "found ..." messages.
pub fn describe_token(token: &Token) -> String {
    match token.category() {
        TokenCategory::EndOfFile => "end of file".to_string(),
        TokenCategory::Identifier | TokenCategory::Unknown => format!("`{}`", token.text()),
        TokenCategory::Keyword | TokenCategory::Operator => token.kind.to_string(),
        TokenCategory::NumericLiteral | TokenCategory::StringLiteral | TokenCategory::Trivia => {
            token.kind.display_name().to_string()
        }
    }
}
