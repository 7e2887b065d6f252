//! First/last character checks

/// Whether `s` begins with the character `c`.
///
/// `None` and the empty string are both `false`, never an error. The
/// comparison is ordinal code-point equality, not locale-aware.
pub fn starts_with_char(s: Option<&str>, c: char) -> bool {
    s.and_then(|s| s.chars().next()) == Some(c)
}

/// Whether `s` ends with the character `c`.
///
/// Same contract as [`starts_with_char`], for the last character.
pub fn ends_with_char(s: Option<&str>, c: char) -> bool {
    s.and_then(|s| s.chars().next_back()) == Some(c)
}
