//! Integration tests for the public helper surface
//!
//! Exercises every helper through the crate re-exports, with a focus on
//! the absent-input propagation contract and the documented edge cases.

use more_string::{
    EncodingError, ends_with_char, replace_first, replace_last, split, starts_with_char,
    utf8_encoded_length, utf8_encoded_length_utf16,
};

// =============================================================================
// Split
// =============================================================================

#[test]
fn test_split_reference_cases() {
    assert_eq!(split(None, ',', 2), None);
    assert_eq!(split(Some(""), ',', 2), Some(vec![]));
    assert_eq!(
        split(Some("a,,b"), ',', 2),
        Some(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn test_split_preserves_order() {
    assert_eq!(
        split(Some("::one::two:three::"), ':', 3),
        Some(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string()
        ])
    );
}

#[test]
fn test_split_rejoin_matches_runs() {
    let input = ",a,,bc,,,d";
    let parts = split(Some(input), ',', 4).unwrap();
    let rejoined = parts.join(",");
    let runs: Vec<&str> = input.split(',').filter(|t| !t.is_empty()).collect();
    assert_eq!(rejoined, runs.join(","));
}

// =============================================================================
// Replace first/last
// =============================================================================

#[test]
fn test_replace_reference_cases() {
    assert_eq!(
        replace_first(Some("banana"), 'a', 'X'),
        Some("bXnana".to_string())
    );
    assert_eq!(
        replace_last(Some("banana"), 'a', 'X'),
        Some("banXna".to_string())
    );
}

#[test]
fn test_replace_not_found_is_identity() {
    let s = "banana";
    assert_eq!(replace_first(Some(s), 'q', 'X').as_deref(), Some(s));
    assert_eq!(replace_last(Some(s), 'q', 'X').as_deref(), Some(s));
}

#[test]
fn test_replace_absent_propagates() {
    assert_eq!(replace_first(None, 'a', 'X'), None);
    assert_eq!(replace_last(None, 'a', 'X'), None);
}

// =============================================================================
// Affix checks
// =============================================================================

#[test]
fn test_affix_reference_cases() {
    assert!(starts_with_char(Some("apple"), 'a'));
    assert!(!starts_with_char(Some(""), 'a'));
    assert!(ends_with_char(Some("apple"), 'e'));
    assert!(!ends_with_char(None, 'e'));
}

// =============================================================================
// UTF-8 encoded length
// =============================================================================

#[test]
fn test_utf8_length_reference_cases() {
    assert_eq!(utf8_encoded_length(Some("")), 0);
    assert_eq!(utf8_encoded_length(Some("a")), 1);
    assert_eq!(utf8_encoded_length(Some("é")), 2);
    assert_eq!(utf8_encoded_length(Some("中")), 3);
    assert_eq!(utf8_encoded_length(Some("𝄞")), 4);
    assert_eq!(utf8_encoded_length(None), 0);
}

#[test]
fn test_utf16_length_strictness() {
    let valid: Vec<u16> = "a𝄞".encode_utf16().collect();
    assert_eq!(utf8_encoded_length_utf16(Some(&valid)), Ok(5));

    let truncated_pair = &valid[..2];
    assert!(matches!(
        utf8_encoded_length_utf16(Some(truncated_pair)),
        Err(EncodingError::UnpairedSurrogate { index: 1, .. })
    ));
}

#[test]
fn test_determinism() {
    let s = Some("ba,na🦀na");
    assert_eq!(split(s, ',', 2), split(s, ',', 2));
    assert_eq!(replace_first(s, 'n', 'm'), replace_first(s, 'n', 'm'));
    assert_eq!(replace_last(s, 'n', 'm'), replace_last(s, 'n', 'm'));
    assert_eq!(utf8_encoded_length(s), utf8_encoded_length(s));
}
