//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing after an
//! unrecognized statement. Membership tests are O(1) over a fixed bitset.

use fgl_ir::{Token, TokenFlags, TokenKind};

use crate::stream::TokenStream;

const WORDS: usize = TokenKind::COUNT.div_ceil(64);

const _: () = assert!(
    TokenKind::COUNT <= WORDS * 64,
    "TokenSet words must cover every TokenKind index"
);

/// A set of token kinds, one bit per kind.
///
/// ```text
/// const BLOCK_END: TokenSet = TokenSet::new()
///     .with(TokenKind::End)
///     .with(TokenKind::Else);
///
/// if BLOCK_END.contains(token.kind) { ... }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet([u64; WORDS]);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self([0; WORDS])
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self::new().with(kind)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let mut words = self.0;
        let index = kind.index() as usize;
        words[index / 64] |= 1u64 << (index % 64);
        Self(words)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        let mut words = self.0;
        let mut i = 0;
        while i < WORDS {
            words[i] |= other.0[i];
            i += 1;
        }
        Self(words)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let index = kind.index() as usize;
        self.0[index / 64] & (1u64 << (index % 64)) != 0
    }

    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < WORDS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn count(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < WORDS {
            total += self.0[i].count_ones();
            i += 1;
        }
        total
    }

    #[inline]
    pub fn insert(&mut self, kind: TokenKind) {
        *self = self.with(kind);
    }

    /// Members in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }

    /// Human-readable list for error messages: "`(`", "`IN` or `OUT`",
    /// "`IN`, `OUT`, or `INOUT`", or "nothing" for the empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(|kind| kind.to_string()).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

/// Keywords that open a module-level item.
pub const MODULE_ITEM_START: TokenSet = TokenSet::new()
    .with(TokenKind::Main)
    .with(TokenKind::Function)
    .with(TokenKind::Report)
    .with(TokenKind::Schema)
    .with(TokenKind::Database)
    .with(TokenKind::Describe)
    .with(TokenKind::Constant)
    .with(TokenKind::Amp);

/// Keywords that open a statement inside a routine body.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Accept)
    .with(TokenKind::Call)
    .with(TokenKind::Close)
    .with(TokenKind::Constant)
    .with(TokenKind::Continue)
    .with(TokenKind::Database)
    .with(TokenKind::Defer)
    .with(TokenKind::Describe)
    .with(TokenKind::Execute)
    .with(TokenKind::Exit)
    .with(TokenKind::Fetch)
    .with(TokenKind::Finish)
    .with(TokenKind::For)
    .with(TokenKind::Foreach)
    .with(TokenKind::Free)
    .with(TokenKind::Goto)
    .with(TokenKind::If)
    .with(TokenKind::Label)
    .with(TokenKind::Let)
    .with(TokenKind::Need)
    .with(TokenKind::Open)
    .with(TokenKind::Options)
    .with(TokenKind::Output)
    .with(TokenKind::Pause)
    .with(TokenKind::Prepare)
    .with(TokenKind::Printx)
    .with(TokenKind::Return)
    .with(TokenKind::Schema)
    .with(TokenKind::Skip)
    .with(TokenKind::Sleep)
    .with(TokenKind::Sql)
    .with(TokenKind::Start)
    .with(TokenKind::Terminate)
    .with(TokenKind::Validate)
    .with(TokenKind::While)
    .with(TokenKind::Amp);

/// Keywords that close the enclosing block.
pub const BLOCK_END: TokenSet = TokenSet::new().with(TokenKind::End);

/// `BLOCK_END` plus `ELSE`, for the THEN branch of an IF.
pub const THEN_BLOCK_END: TokenSet = BLOCK_END.with(TokenKind::Else);

/// A routine body also ends where the next routine begins, so a missing
/// `END FUNCTION` does not swallow the rest of the module.
pub const ROUTINE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Main)
    .with(TokenKind::Function)
    .with(TokenKind::Report);

/// True when `token` is a member of `set` at a position where it can start
/// something. `&` only counts at the start of a line, where it opens a
/// preprocessor line.
pub fn at_recovery_point(token: &Token, set: TokenSet) -> bool {
    set.contains(token.kind)
        && (token.kind != TokenKind::Amp || token.flags.contains(TokenFlags::LINE_START))
}

/// Advance until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize<S: TokenStream>(stream: &mut S, recovery: TokenSet) -> bool {
    loop {
        let token = stream.peek_token(1);
        if token.is_eof() {
            return false;
        }
        if at_recovery_point(token, recovery) {
            return true;
        }
        stream.advance();
    }
}
