//! Character-delimited splitting

/// Split a string on a single separator character, skipping empty tokens.
///
/// Maximal non-empty runs of non-separator characters become tokens, in
/// order of appearance. Consecutive, leading, and trailing separators
/// contribute nothing, so a string made entirely of separators yields an
/// empty vec. `expect_parts` preallocates the result; it never truncates
/// or pads.
///
/// `None` propagates to `None`; an empty string yields `Some(vec![])`.
///
/// # Example
/// ```
/// use more_string::split;
///
/// assert_eq!(split(Some("a,,b"), ',', 2), Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(split(None, ',', 2), None);
/// ```
pub fn split(s: Option<&str>, separator: char, expect_parts: usize) -> Option<Vec<String>> {
    let s = s?;
    if s.is_empty() {
        return Some(Vec::new());
    }
    let mut parts = Vec::with_capacity(expect_parts);
    parts.extend(
        s.split(separator)
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    );
    Some(parts)
}
