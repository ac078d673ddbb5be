use fgl_ir::{TokenCategory, TokenFlags, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind).collect()
}

fn significant(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.significant().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_ignore_case_and_keep_spelling() {
    let out = lex("Accept CONSTRUCT");
    let tokens = out.tokens.as_slice();
    assert_eq!(tokens[0].kind, TokenKind::Accept);
    assert_eq!(tokens[0].text(), "Accept");
    assert_eq!(tokens[1].kind, TokenKind::Construct);
    assert_eq!(tokens[1].span, Span::new(7, 16));
    assert!(!out.has_errors());
}

#[test]
fn test_operators() {
    assert_eq!(
        significant("a <> b != c <= d ** e || f == g"),
        vec![
            TokenKind::Ident,
            TokenKind::NotEq,
            TokenKind::Ident,
            TokenKind::NotEq,
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Ident,
            TokenKind::StarStar,
            TokenKind::Ident,
            TokenKind::Concat,
            TokenKind::Ident,
            TokenKind::EqEq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    let out = lex("42 3.14 1e10 .5");
    let values: Vec<(TokenKind, &str)> = out
        .tokens
        .significant()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind, t.text()))
        .collect();
    assert_eq!(
        values,
        vec![
            (TokenKind::IntLit, "42"),
            (TokenKind::DecimalLit, "3.14"),
            (TokenKind::DecimalLit, "1e10"),
            (TokenKind::DecimalLit, ".5"),
        ]
    );
}

#[test]
fn test_strings_strip_quotes_and_unescape() {
    let out = lex(r#"'it\'s' "say \"hi\"""#);
    let values: Vec<&str> = out
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StringLit)
        .map(|t| t.text())
        .collect();
    assert_eq!(values, vec!["it's", "say \"hi\""]);
    assert_eq!(out.tokens[0].span, Span::new(0, 7));
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        kinds("sleep 1 # rest\n-- whole line\n{ block\ncomment }pause"),
        vec![
            TokenKind::Sleep,
            TokenKind::IntLit,
            TokenKind::CommentText,
            TokenKind::Newline,
            TokenKind::CommentText,
            TokenKind::Newline,
            TokenKind::CommentText,
            TokenKind::Pause,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_layout_flags() {
    let out = lex("exit program\n  & include 'x'");
    let tokens: Vec<_> = out.tokens.significant().collect();
    assert!(tokens[0].flags.contains(TokenFlags::LINE_START));
    assert!(!tokens[1].flags.contains(TokenFlags::LINE_START));
    assert!(tokens[1].flags.contains(TokenFlags::SPACE_BEFORE));
    // `&` is the first token on line 2 after indentation.
    assert_eq!(tokens[2].kind, TokenKind::Amp);
    assert!(tokens[2].flags.contains(TokenFlags::LINE_START));
    assert!(tokens[2].flags.contains(TokenFlags::NEWLINE_BEFORE));
}

#[test]
fn test_multiline_comment_starts_new_line() {
    let out = lex("{ a\nb } & define");
    let amp = out.tokens.iter().find(|t| t.kind == TokenKind::Amp);
    assert!(amp.is_some_and(|t| t.flags.contains(TokenFlags::LINE_START)));
}

#[test]
fn test_unterminated_string_yields_unknown_token() {
    let out = lex("prepare s from 'select\nsleep 1");
    assert_eq!(out.errors.len(), 1);
    assert!(matches!(out.errors[0], LexError::UnterminatedString { .. }));
    let unknown: Vec<_> = out
        .tokens
        .iter()
        .filter(|t| t.category() == TokenCategory::Unknown)
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].span, Span::new(15, 22));
    // Lexing resumes on the next line.
    assert!(out.tokens.iter().any(|t| t.kind == TokenKind::Sleep));
}

#[test]
fn test_unterminated_brace_comment() {
    let out = lex("pause { never closed");
    assert_eq!(
        out.errors,
        vec![LexError::UnterminatedComment {
            span: Span::new(6, 20)
        }]
    );
    assert_eq!(out.tokens[1].kind, TokenKind::CommentText);
}

#[test]
fn test_unexpected_character() {
    let out = lex("let x = $");
    assert_eq!(
        out.errors,
        vec![LexError::UnexpectedCharacter {
            ch: '$',
            span: Span::new(8, 9)
        }]
    );
    let diag = out.diagnostics().next();
    assert!(diag.is_some_and(|d| d.message == "unexpected character `$`"));
}

#[test]
fn test_empty_source() {
    let out = lex("");
    assert!(out.tokens.is_empty());
    assert_eq!(out.tokens.eof().span, Span::point(0));
}

proptest! {
    #[test]
    fn prop_tokens_are_ordered_and_end_with_one_eof(source in "[ -~\n]{0,80}") {
        let out = lex(&source);
        let tokens = out.tokens.as_slice();
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
        for token in tokens {
            prop_assert!(token.span.end as usize <= source.len());
        }
    }
}
