//! Case-insensitive keyword resolution.

use std::sync::OnceLock;

use fgl_ir::TokenKind;
use rustc_hash::FxHashMap;

/// Longest keyword spelling (`REOPTIMIZATION`).
const MAX_KEYWORD_LEN: usize = 14;

fn table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_keyword())
            .map(|kind| (kind.display_name(), kind))
            .collect()
    })
}

/// Resolve a word to its keyword kind, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers.
pub(crate) fn lookup(word: &str) -> Option<TokenKind> {
    if word.len() < 2 || word.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let upper = &mut buf[..word.len()];
    upper.copy_from_slice(word.as_bytes());
    upper.make_ascii_uppercase();
    std::str::from_utf8(upper)
        .ok()
        .and_then(|key| table().get(key).copied())
}

#[cfg(test)]
mod tests;
