//! Reference lexer for the FGL language.
//!
//! Produces a [`TokenList`] in one pass over the source:
//! - keywords are matched case-insensitively and keep their source spelling
//!   as the token value, so soft keywords can be turned back into names;
//! - newlines and comments are kept as trivia tokens for raw-mode parsing;
//! - lexical errors produce an error *and* a token, never a gap.

mod escape;
mod keywords;
mod lex_error;
mod raw_token;

use fgl_diagnostic::Diagnostic;
use fgl_ir::{Span, Token, TokenFlags, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::LexError;
use raw_token::RawToken;

/// Result of lexing one source file.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(LexError::to_diagnostic)
    }
}

#[inline]
fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}

/// Lex `source` into tokens.
pub fn lex(source: &str) -> LexOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    let mut at_line_start = true;
    let mut newline_before = false;
    let mut prev_end = 0usize;

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = to_span(range.clone());
        let slice = lexer.slice();

        let mut flags = TokenFlags::empty();
        if range.start > prev_end {
            flags |= TokenFlags::SPACE_BEFORE;
        }
        if at_line_start {
            flags |= TokenFlags::LINE_START;
        }
        if newline_before {
            flags |= TokenFlags::NEWLINE_BEFORE;
        }
        prev_end = range.end;

        let token = match result {
            Ok(raw) => cook(raw, slice, span, &mut errors),
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{FFFD}');
                errors.push(LexError::UnexpectedCharacter { ch, span });
                Token::new(TokenKind::Unknown, span).with_value(slice)
            }
        };

        match token.kind {
            TokenKind::Newline => {
                at_line_start = true;
                newline_before = true;
            }
            // Comments are transparent for line layout unless they span lines.
            TokenKind::CommentText => {
                if slice.contains('\n') {
                    at_line_start = true;
                    newline_before = true;
                }
            }
            _ => {
                at_line_start = false;
                newline_before = false;
            }
        }

        tokens.push(token.with_flags(flags));
    }

    LexOutput {
        tokens: TokenList::from_vec(tokens),
        errors,
    }
}

/// Turn a raw match into a token, recording any lexical error.
fn cook(raw: RawToken, slice: &str, span: Span, errors: &mut Vec<LexError>) -> Token {
    let kind = match raw {
        RawToken::Newline => TokenKind::Newline,
        RawToken::HashComment | RawToken::DashComment | RawToken::BraceComment => {
            return Token::new(TokenKind::CommentText, span).with_value(slice);
        }
        RawToken::UnterminatedBraceComment => {
            errors.push(LexError::UnterminatedComment { span });
            return Token::new(TokenKind::CommentText, span).with_value(slice);
        }
        RawToken::Word => {
            let kind = keywords::lookup(slice).unwrap_or(TokenKind::Ident);
            return Token::new(kind, span).with_value(slice);
        }
        RawToken::Int => return Token::new(TokenKind::IntLit, span).with_value(slice),
        RawToken::Decimal => return Token::new(TokenKind::DecimalLit, span).with_value(slice),
        RawToken::DoubleQuoted | RawToken::SingleQuoted => {
            let content = &slice[1..slice.len() - 1];
            let value = escape::unescape(content).unwrap_or_else(|| content.to_string());
            return Token::new(TokenKind::StringLit, span).with_value(value);
        }
        RawToken::UnterminatedDoubleQuoted | RawToken::UnterminatedSingleQuoted => {
            errors.push(LexError::UnterminatedString { span });
            return Token::new(TokenKind::Unknown, span).with_value(slice);
        }
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::Concat => TokenKind::Concat,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Amp => TokenKind::Amp,
        RawToken::At => TokenKind::At,
    };
    Token::new(kind, span)
}

#[cfg(test)]
mod tests;
