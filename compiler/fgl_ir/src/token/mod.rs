//! Token types produced by the lexer and consumed by the parser.

mod kind;
mod list;

pub use kind::{TokenCategory, TokenKind};
pub use list::TokenList;

use std::fmt;

use super::Span;

bitflags::bitflags! {
    /// Per-token layout flags recorded by the lexer.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        /// A newline separates this token from the previous significant token.
        const NEWLINE_BEFORE = 1 << 0;
        /// First token on its line (ignoring horizontal whitespace).
        const LINE_START = 1 << 1;
        /// Whitespace or a comment precedes this token.
        const SPACE_BEFORE = 1 << 2;
    }
}

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Identifier text, literal text, or string contents without quotes.
    pub value: Option<Box<str>>,
    pub flags: TokenFlags,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            value: None,
            flags: TokenFlags::empty(),
        }
    }

    /// Attach a literal value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Box<str>>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// End-of-file token positioned at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, Span::point(offset))
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// The literal value, or the keyword/operator spelling.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(self.kind.display_name())
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}({value:?}) @ {}", self.kind, self.span),
            None => write!(f, "{:?} @ {}", self.kind, self.span),
        }
    }
}
