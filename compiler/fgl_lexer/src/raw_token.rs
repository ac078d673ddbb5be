//! Raw token classes recognised by logos.
//!
//! Words are not split into keywords here; [`crate::keywords`] resolves them
//! case-insensitively after the match.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0C]+")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    // Comments: `# ...`, `-- ...`, `{ ... }`
    #[regex(r"#[^\n]*")]
    HashComment,
    #[regex(r"--[^\n]*")]
    DashComment,
    #[regex(r"\{[^}]*\}")]
    BraceComment,
    /// `{` with no closing brace before end of file.
    #[regex(r"\{[^}]*")]
    UnterminatedBraceComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+|\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,

    // Strings may not span lines; the unterminated forms stop at the newline.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    DoubleQuoted,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoted,
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedDoubleQuoted,
    #[regex(r"'([^'\\\n]|\\.)*")]
    UnterminatedSingleQuoted,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    StarStar,
    #[token("||")]
    Concat,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("<>")]
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("&")]
    Amp,
    #[token("@")]
    At,
}
