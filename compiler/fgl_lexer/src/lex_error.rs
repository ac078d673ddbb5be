//! Lexer error type.

use fgl_diagnostic::{Diagnostic, ErrorCode};
use fgl_ir::Span;

/// A lexical problem. Every error also leaves a token in the list (an
/// `Unknown` token, or a comment for an unterminated `{`), so parsing can
/// continue past it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unterminated comment: missing closing `}}`")]
    UnterminatedComment { span: Span },
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedComment { span }
            | LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(self.to_string())
            .with_span(self.span())
    }
}
