//! Supplementary string helpers
//!
//! Fills small gaps left by `std`'s string API: character-delimited
//! splitting that skips empty tokens, single-character first/last
//! replacement, first/last-character checks, and UTF-8 encoded-length
//! computation (including a UTF-16 code-unit path that validates
//! surrogate pairing).
//!
//! Absent input is modeled as `Option`: helpers that transform a string
//! propagate `None` instead of raising an error, and the predicates treat
//! `None` like the empty string. All helpers are pure and reentrant; the
//! only fallible operation is [`utf8_encoded_length_utf16`], which rejects
//! malformed surrogate sequences.
//!
//! # Example
//!
//! ```
//! use more_string::{split, replace_first, replace_last, starts_with_char, utf8_encoded_length};
//!
//! assert_eq!(split(Some("a,,b"), ',', 2), Some(vec!["a".to_string(), "b".to_string()]));
//! assert_eq!(replace_first(Some("banana"), 'a', 'X'), Some("bXnana".to_string()));
//! assert_eq!(replace_last(Some("banana"), 'a', 'X'), Some("banXna".to_string()));
//! assert!(starts_with_char(Some("apple"), 'a'));
//! assert_eq!(utf8_encoded_length(Some("中")), 3);
//! ```

mod affix;
mod error;
mod replace;
mod split;
mod utf8;

pub use affix::{ends_with_char, starts_with_char};
pub use error::EncodingError;
pub use replace::{replace_first, replace_last};
pub use split::split;
pub use utf8::{utf8_encoded_length, utf8_encoded_length_utf16};
