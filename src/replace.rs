//! Single-occurrence character replacement
//!
//! `str::replace` swaps every occurrence; these helpers swap exactly one,
//! at the first or last position the target appears.

/// Replace the first occurrence of `from` with `to`.
///
/// When `from` does not occur the input comes back unchanged, mirroring
/// `str::replace` tolerance rather than signaling not-found. `None`
/// propagates to `None`.
///
/// # Example
/// ```
/// use more_string::replace_first;
///
/// assert_eq!(replace_first(Some("banana"), 'a', 'X'), Some("bXnana".to_string()));
/// assert_eq!(replace_first(Some("banana"), 'z', 'X'), Some("banana".to_string()));
/// ```
pub fn replace_first(s: Option<&str>, from: char, to: char) -> Option<String> {
    let s = s?;
    Some(match s.find(from) {
        Some(at) => replace_at(s, at, from, to),
        None => s.to_string(),
    })
}

/// Replace the last occurrence of `from` with `to`.
///
/// Same contract as [`replace_first`], scanning from the end.
pub fn replace_last(s: Option<&str>, from: char, to: char) -> Option<String> {
    let s = s?;
    Some(match s.rfind(from) {
        Some(at) => replace_at(s, at, from, to),
        None => s.to_string(),
    })
}

/// Rebuild `s` with the code point at byte index `at` swapped for `to`.
///
/// `to` may have a different UTF-8 width than `from`, so this builds a new
/// string instead of patching bytes in place.
fn replace_at(s: &str, at: usize, from: char, to: char) -> String {
    let mut out = String::with_capacity(s.len() + to.len_utf8() - from.len_utf8());
    out.push_str(&s[..at]);
    out.push(to);
    out.push_str(&s[at + from.len_utf8()..]);
    out
}
