use fgl_ir::TokenKind;

use super::*;

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(lookup("FETCH"), Some(TokenKind::Fetch));
    assert_eq!(lookup("fetch"), Some(TokenKind::Fetch));
    assert_eq!(lookup("FeTcH"), Some(TokenKind::Fetch));
}

#[test]
fn test_lookup_covers_every_keyword() {
    for kind in TokenKind::ALL.iter().filter(|k| k.is_keyword()) {
        let lower = kind.display_name().to_ascii_lowercase();
        assert_eq!(lookup(&lower), Some(*kind), "{lower}");
        assert!(kind.display_name().len() <= MAX_KEYWORD_LEN);
    }
}

#[test]
fn test_identifiers_are_not_keywords() {
    assert_eq!(lookup("customer"), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("reoptimizations"), None);
    assert_eq!(lookup("fetch_all"), None);
}
