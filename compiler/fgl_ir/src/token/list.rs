//! Token list produced by the lexer.

use std::fmt;

use super::{Token, TokenKind};
use crate::Span;

/// A list of tokens that always ends with exactly one `Eof` token.
///
/// Trivia (newlines, comments) is kept in the list; the parser cursor
/// decides whether to hide it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenList {
    /// An empty token list (only the EOF token).
    pub fn new() -> Self {
        TokenList {
            tokens: vec![Token::eof(0)],
        }
    }

    /// Build a list from lexed tokens.
    ///
    /// Any `Eof` tokens in the input are dropped and a single trailing `Eof`
    /// is appended at the end of the last token.
    pub fn from_vec(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| t.kind != TokenKind::Eof);
        let end = tokens.last().map_or(0, |t| t.span.end);
        tokens.push(Token::eof(end));
        TokenList { tokens }
    }

    /// Push a token before the trailing EOF, moving EOF to its end.
    pub fn push(&mut self, token: Token) {
        if token.kind == TokenKind::Eof {
            return;
        }
        let end = token.span.end;
        let eof = self.tokens.len() - 1;
        self.tokens.insert(eof, token);
        if let Some(last) = self.tokens.last_mut() {
            last.span = Span::point(end.max(last.span.end));
        }
    }

    /// Number of tokens, including trivia and the trailing EOF.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the list only holds the EOF token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The trailing EOF token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterate over non-trivia tokens (EOF included).
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.kind.is_trivia())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}
