use super::*;

#[test]
fn test_no_backslash_is_fast_path() {
    assert_eq!(unescape("select * from t"), None);
}

#[test]
fn test_known_escapes() {
    assert_eq!(unescape(r"a\nb\tc").as_deref(), Some("a\nb\tc"));
    assert_eq!(unescape(r#"say \"hi\""#).as_deref(), Some("say \"hi\""));
    assert_eq!(unescape(r"it\'s").as_deref(), Some("it's"));
    assert_eq!(unescape(r"c:\\tmp").as_deref(), Some("c:\\tmp"));
}

#[test]
fn test_unknown_escape_keeps_character() {
    assert_eq!(unescape(r"\q").as_deref(), Some("q"));
}
