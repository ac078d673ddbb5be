//! Backslash escape processing for string literal contents.

/// Unescape a string literal's content (between the quotes).
///
/// Recognised escapes: `\n` `\t` `\r` `\0` `\\` `\"` `\'`. Any other escaped
/// character stands for itself. Returns `None` when the content holds no
/// backslash, so the caller can reuse the source slice.
pub(crate) fn unescape(content: &str) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests;
