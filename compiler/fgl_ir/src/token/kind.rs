//! Token kinds and categories.
//!
//! `TokenKind` is the fine-grained lexical identity of a token (a specific
//! keyword, operator or literal class). `TokenCategory` is the coarse class
//! used by predicates that do not care which keyword they see.
//!
//! Keywords are split into two groups:
//! - *reserved* keywords start statements or carry grammar structure and are
//!   never accepted where a name is expected;
//! - *soft* keywords only have meaning inside a particular clause and may be
//!   used as ordinary identifiers everywhere else (`LET name = ...`).

use std::fmt;

/// Coarse token class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenCategory {
    Identifier,
    Keyword,
    NumericLiteral,
    StringLiteral,
    Operator,
    /// Newlines and comments. Hidden by the cursor outside raw mode.
    Trivia,
    /// Input the lexer could not classify.
    Unknown,
    EndOfFile,
}

macro_rules! token_kinds {
    (
        special { $($sv:ident => $sn:literal,)* }
        reserved { $($rv:ident => $rs:literal,)* }
        soft { $($kv:ident => $ks:literal,)* }
        punct { $($pv:ident => $ps:literal,)* }
    ) => {
        /// Fine-grained token identity.
        ///
        /// Fieldless so that it can be used as a bitset index; literal
        /// payloads live on [`Token::value`](super::Token::value).
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum TokenKind {
            $($sv,)*
            $($rv,)*
            $($kv,)*
            $($pv,)*
        }

        impl TokenKind {
            /// Every token kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[
                $(TokenKind::$sv,)*
                $(TokenKind::$rv,)*
                $(TokenKind::$kv,)*
                $(TokenKind::$pv,)*
            ];

            /// Spelling used in messages: keyword text in upper case,
            /// operator text verbatim, a description for everything else.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(TokenKind::$sv => $sn,)*
                    $(TokenKind::$rv => $rs,)*
                    $(TokenKind::$kv => $ks,)*
                    $(TokenKind::$pv => $ps,)*
                }
            }

            /// Reserved keywords never double as names.
            pub const fn is_reserved_keyword(self) -> bool {
                matches!(self, $(TokenKind::$rv)|*)
            }

            /// Soft keywords are accepted wherever a name is expected.
            pub const fn is_soft_keyword(self) -> bool {
                matches!(self, $(TokenKind::$kv)|*)
            }

            const fn is_punct(self) -> bool {
                matches!(self, $(TokenKind::$pv)|*)
            }
        }
    };
}

token_kinds! {
    special {
        Ident => "identifier",
        IntLit => "integer literal",
        DecimalLit => "decimal literal",
        StringLit => "string literal",
        Newline => "end of line",
        CommentText => "comment",
        Unknown => "unrecognized input",
        Eof => "end of file",
    }
    reserved {
        Accept => "ACCEPT",
        And => "AND",
        Attribute => "ATTRIBUTE",
        Attributes => "ATTRIBUTES",
        Call => "CALL",
        Close => "CLOSE",
        Constant => "CONSTANT",
        Continue => "CONTINUE",
        Database => "DATABASE",
        Defer => "DEFER",
        Describe => "DESCRIBE",
        Else => "ELSE",
        End => "END",
        Execute => "EXECUTE",
        Exit => "EXIT",
        False => "FALSE",
        Fetch => "FETCH",
        Finish => "FINISH",
        For => "FOR",
        Foreach => "FOREACH",
        Free => "FREE",
        From => "FROM",
        Function => "FUNCTION",
        Goto => "GOTO",
        If => "IF",
        Into => "INTO",
        Label => "LABEL",
        Let => "LET",
        Like => "LIKE",
        Main => "MAIN",
        Mod => "MOD",
        Need => "NEED",
        Not => "NOT",
        Null => "NULL",
        Of => "OF",
        Open => "OPEN",
        Options => "OPTIONS",
        Or => "OR",
        Output => "OUTPUT",
        Pause => "PAUSE",
        Prepare => "PREPARE",
        Printx => "PRINTX",
        Report => "REPORT",
        Return => "RETURN",
        Returning => "RETURNING",
        Schema => "SCHEMA",
        Skip => "SKIP",
        Sleep => "SLEEP",
        Sql => "SQL",
        Start => "START",
        Step => "STEP",
        Terminate => "TERMINATE",
        Then => "THEN",
        To => "TO",
        True => "TRUE",
        Using => "USING",
        Validate => "VALIDATE",
        While => "WHILE",
        With => "WITH",
    }
    soft {
        Absolute => "ABSOLUTE",
        Application => "APPLICATION",
        Case => "CASE",
        Comment => "COMMENT",
        Constrained => "CONSTRAINED",
        Construct => "CONSTRUCT",
        Current => "CURRENT",
        Delete => "DELETE",
        Dialog => "DIALOG",
        Display => "DISPLAY",
        Error => "ERROR",
        Field => "FIELD",
        File => "FILE",
        First => "FIRST",
        Form => "FORM",
        Help => "HELP",
        Immediate => "IMMEDIATE",
        In => "IN",
        Inout => "INOUT",
        Input => "INPUT",
        Insert => "INSERT",
        Interrupt => "INTERRUPT",
        Key => "KEY",
        Last => "LAST",
        Line => "LINE",
        Lines => "LINES",
        Menu => "MENU",
        Message => "MESSAGE",
        Name => "NAME",
        Next => "NEXT",
        No => "NO",
        Off => "OFF",
        On => "ON",
        Order => "ORDER",
        Out => "OUT",
        Page => "PAGE",
        Pipe => "PIPE",
        Previous => "PREVIOUS",
        Printer => "PRINTER",
        Prior => "PRIOR",
        Program => "PROGRAM",
        Prompt => "PROMPT",
        Quit => "QUIT",
        Relative => "RELATIVE",
        Reoptimization => "REOPTIMIZATION",
        Screen => "SCREEN",
        Signal => "SIGNAL",
        Stop => "STOP",
        Top => "TOP",
        Unconstrained => "UNCONSTRAINED",
        Window => "WINDOW",
        Wrap => "WRAP",
    }
    punct {
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        StarStar => "**",
        Concat => "||",
        Eq => "=",
        EqEq => "==",
        NotEq => "<>",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
        LParen => "(",
        RParen => ")",
        LBracket => "[",
        RBracket => "]",
        Comma => ",",
        Dot => ".",
        Colon => ":",
        Semicolon => ";",
        Amp => "&",
        At => "@",
    }
}

impl TokenKind {
    /// Number of token kinds. Used to size token bitsets.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index of this kind, suitable for bitsets.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Coarse category of this kind.
    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::IntLit | TokenKind::DecimalLit => TokenCategory::NumericLiteral,
            TokenKind::StringLit => TokenCategory::StringLiteral,
            TokenKind::Newline | TokenKind::CommentText => TokenCategory::Trivia,
            TokenKind::Unknown => TokenCategory::Unknown,
            TokenKind::Eof => TokenCategory::EndOfFile,
            other if other.is_punct() => TokenCategory::Operator,
            _ => TokenCategory::Keyword,
        }
    }

    /// True for any keyword, reserved or soft.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.is_reserved_keyword() || self.is_soft_keyword()
    }

    /// True for tokens the cursor hides outside raw mode.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::CommentText)
    }

    /// Look up a keyword by its spelling, ignoring ASCII case.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_keyword())
            .find(|kind| kind.display_name().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            TokenCategory::Keyword | TokenCategory::Operator => {
                write!(f, "`{}`", self.display_name())
            }
            _ => f.write_str(self.display_name()),
        }
    }
}
