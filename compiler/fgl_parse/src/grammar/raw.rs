//! Token-collecting constructs: preprocessor lines and attribute lists.

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{AttributeSpecifier, PreprocessorLine};
use fgl_ir::{Span, Stmt, StmtKind, TokenFlags, TokenKind};

use crate::error::{ErrorContext, ParseError};
use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::{LexMode, TokenStream};
use crate::Parser;

impl<S: TokenStream> Parser<S> {
    /// `& tokens...` up to the end of the line. `&` must be the first token
    /// on its line. The rest of the line is read in raw mode so comments are
    /// kept.
    pub fn parse_preprocessor_line(&mut self) -> ParseOutcome<Stmt> {
        let token = self.current();
        if token.kind != TokenKind::Amp || !token.flags.contains(TokenFlags::LINE_START) {
            return self.decline(TokenSet::single(TokenKind::Amp));
        }
        let mark = self.mark();
        // `&` is taken in normal mode; trivia before it is not part of the line.
        let start = self.bump().span.start;
        let mut raw = self.with_mode(LexMode::Raw);
        let mut tokens = Vec::new();
        let mut complete = true;
        loop {
            if raw.at(TokenKind::Newline) {
                break;
            }
            if raw.at_eof() {
                let span = raw.span_from(start);
                raw.error(
                    ParseError::new(
                        ErrorCode::E1005,
                        "preprocessor line reaches end of file without a newline",
                        span,
                    )
                    .with_context(ErrorContext::PreprocessorLine),
                );
                complete = false;
                break;
            }
            tokens.push(raw.bump());
        }
        drop(raw);
        self.commit(
            mark,
            start,
            StmtKind::Preprocessor(PreprocessorLine { tokens }),
            complete,
        )
    }

    /// `ATTRIBUTE[S] ( tokens )` with the keyword as the current token.
    ///
    /// Tokens up to the matching `)` are collected verbatim; nested
    /// parentheses are tracked.
    pub(crate) fn attribute_specifier(&mut self) -> AttributeSpecifier {
        let start = self.bump().span.start;
        let Some(open) = self.expect(TokenKind::LParen) else {
            return AttributeSpecifier {
                tokens: Vec::new(),
                span: self.span_from(start),
                complete: false,
            };
        };
        let mut tokens = Vec::new();
        let mut depth = 1u32;
        let complete = loop {
            if self.at_eof() {
                self.unclosed_attributes(open);
                break false;
            }
            let token = self.bump();
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        break true;
                    }
                }
                _ => {}
            }
            tokens.push(token);
        };
        AttributeSpecifier {
            tokens,
            span: self.span_from(start),
            complete,
        }
    }

    #[cold]
    fn unclosed_attributes(&mut self, open: Span) {
        self.error(
            ParseError::new(
                ErrorCode::E1005,
                "attribute list is not closed: expected `)` before end of file",
                open,
            )
            .with_context(ErrorContext::AttributeList),
        );
    }
}
