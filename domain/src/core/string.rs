//! String utilities for the domain layer.

/// Longest prefix of `s` that fits in `max_bytes` without splitting a
/// UTF-8 character.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Truncate a string to `max_bytes` and mark the cut with `…` (UTF-8 safe)
///
/// Strings that already fit are returned unchanged, without the marker.
pub fn truncate(s: &str, max_bytes: usize) -> String {
    let head = truncate_str(s, max_bytes);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…", head)
    }
}
