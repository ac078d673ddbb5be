//! The token source seen by the parser.
//!
//! Parsers are generic over [`TokenStream`] so that tests can drive them from
//! a scripted stream; [`Cursor`](crate::Cursor) is the implementation over a
//! lexed [`TokenList`](fgl_ir::TokenList).

use fgl_ir::{Span, Token, TokenCategory, TokenKind};

use crate::recovery::TokenSet;

/// Whether trivia (newlines, comments) is visible.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexMode {
    /// Trivia is skipped by `peek` and `advance`.
    #[default]
    Normal,
    /// Every token is yielded verbatim. Used for preprocessor lines.
    Raw,
}

/// Test applied to an upcoming token by [`TokenStream::peek`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenPredicate {
    Kind(TokenKind),
    AnyOf(TokenSet),
    Category(TokenCategory),
    /// An identifier or a soft keyword: anything usable as a name.
    Name,
    Eof,
}

impl TokenPredicate {
    pub fn matches(self, token: &Token) -> bool {
        match self {
            TokenPredicate::Kind(kind) => token.kind == kind,
            TokenPredicate::AnyOf(set) => set.contains(token.kind),
            TokenPredicate::Category(category) => token.category() == category,
            TokenPredicate::Name => {
                token.kind == TokenKind::Ident || token.kind.is_soft_keyword()
            }
            TokenPredicate::Eof => token.is_eof(),
        }
    }
}

impl From<TokenKind> for TokenPredicate {
    fn from(kind: TokenKind) -> Self {
        TokenPredicate::Kind(kind)
    }
}

impl From<TokenSet> for TokenPredicate {
    fn from(set: TokenSet) -> Self {
        TokenPredicate::AnyOf(set)
    }
}

/// Forward-only token source with arbitrary lookahead.
///
/// Lookahead is 1-based: `peek_token(1)` is the next unconsumed token.
/// A lookahead of 0 is treated as 1. Looking past the end yields the
/// end-of-file token.
pub trait TokenStream {
    fn peek_token(&self, lookahead: usize) -> &Token;

    /// Test the token `lookahead` positions ahead without consuming it.
    fn peek(&self, predicate: TokenPredicate, lookahead: usize) -> bool {
        predicate.matches(self.peek_token(lookahead))
    }

    /// Consume and return the next token. At end of file the EOF token is
    /// returned and the position does not move.
    fn advance(&mut self) -> Token;

    /// Span of the last consumed token; an empty span at offset 0 before
    /// anything has been consumed.
    fn previous_span(&self) -> Span;

    /// Monotonic count of positions consumed, for progress checks.
    fn position(&self) -> usize;

    fn mode(&self) -> LexMode;

    /// Switch mode and return the previous one. Parsers go through
    /// [`ModeGuard`](crate::ModeGuard) rather than calling this directly.
    fn set_mode(&mut self, mode: LexMode) -> LexMode;
}
