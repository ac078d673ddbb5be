//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that reported it.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Resolution errors (deferred checking pass)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string or comment, or a character the lexer cannot classify
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected keyword
    E1002,
    /// Expected name
    E1003,
    /// Expected expression
    E1004,
    /// Unterminated delimited region
    E1005,
    /// Unrecognized statement
    E1006,
    /// Missing block terminator
    E1007,

    // Resolution Errors (E2xxx)
    /// Unresolved reference
    E2001,
    /// Unknown label
    E2002,
    /// Duplicate definition
    E2003,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line description, used by `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "lexical error",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected keyword",
            ErrorCode::E1003 => "expected name",
            ErrorCode::E1004 => "expected expression",
            ErrorCode::E1005 => "unterminated region",
            ErrorCode::E1006 => "unrecognized statement",
            ErrorCode::E1007 => "missing block terminator",
            ErrorCode::E2001 => "unresolved reference",
            ErrorCode::E2002 => "unknown label",
            ErrorCode::E2003 => "duplicate definition",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Lexer and parser errors are both syntax errors.
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1") || self.is_lexer_error()
    }

    pub fn is_resolution_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Parse an error code from its string form (`"E1001"`, case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
