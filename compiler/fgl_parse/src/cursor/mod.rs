//! Cursor over a lexed token list.

use fgl_ir::{Span, Token, TokenList};
use tracing::trace;

use crate::stream::{LexMode, TokenStream};

/// [`TokenStream`] over a [`TokenList`].
///
/// The list keeps trivia tokens; in [`LexMode::Normal`] the cursor steps
/// over them, in [`LexMode::Raw`] it yields them.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    eof: &'a Token,
    /// Index of the next unconsumed token (trivia included).
    pos: usize,
    previous: Span,
    mode: LexMode,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            eof: tokens.eof(),
            pos: 0,
            previous: Span::point(0),
            mode: LexMode::Normal,
        }
    }

    /// Index of the `lookahead`-th visible token, or `None` at end of file.
    fn nth_index(&self, lookahead: usize) -> Option<usize> {
        let wanted = lookahead.max(1);
        let mut seen = 0;
        for (offset, token) in self.tokens.get(self.pos..)?.iter().enumerate() {
            if token.is_eof() {
                return None;
            }
            if self.mode == LexMode::Normal && token.kind.is_trivia() {
                continue;
            }
            seen += 1;
            if seen == wanted {
                return Some(self.pos + offset);
            }
        }
        None
    }

    /// True once only the end-of-file token (and, in normal mode, trivia)
    /// remains.
    pub fn is_at_end(&self) -> bool {
        self.nth_index(1).is_none()
    }
}

impl TokenStream for Cursor<'_> {
    fn peek_token(&self, lookahead: usize) -> &Token {
        match self.nth_index(lookahead) {
            Some(index) => &self.tokens[index],
            None => self.eof,
        }
    }

    fn advance(&mut self) -> Token {
        let Some(index) = self.nth_index(1) else {
            return self.eof.clone();
        };
        let token = &self.tokens[index];
        trace!(
            pos = index,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos = index + 1;
        self.previous = token.span;
        token.clone()
    }

    fn previous_span(&self) -> Span {
        self.previous
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn mode(&self) -> LexMode {
        self.mode
    }

    fn set_mode(&mut self, mode: LexMode) -> LexMode {
        std::mem::replace(&mut self.mode, mode)
    }
}
