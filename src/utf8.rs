//! UTF-8 encoded-length computation
//!
//! Two entry points for the two natural input encodings: `&str` is UTF-8
//! by construction so its byte length is the answer, while a `&[u16]`
//! slice carries UTF-16 semantics and must have its surrogate pairing
//! validated before a length can be reported.

use crate::error::EncodingError;

const HIGH_SURROGATE: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Number of bytes `s` occupies when encoded as UTF-8.
///
/// `None` and the empty string both count as 0. This never fails: a `&str`
/// is valid UTF-8 already, so the encoded length is its byte length.
///
/// # Example
/// ```
/// use more_string::utf8_encoded_length;
///
/// assert_eq!(utf8_encoded_length(Some("a")), 1);
/// assert_eq!(utf8_encoded_length(Some("é")), 2);
/// assert_eq!(utf8_encoded_length(Some("中")), 3);
/// assert_eq!(utf8_encoded_length(None), 0);
/// ```
pub fn utf8_encoded_length(s: Option<&str>) -> usize {
    s.map_or(0, str::len)
}

/// Number of bytes the given UTF-16 code units would occupy as UTF-8.
///
/// Walks the units without materializing a string: 1 byte for units up to
/// 0x7F, 2 up to 0x7FF, 3 for the rest of the BMP, and 4 for a well-formed
/// high+low surrogate pair (both units consumed as one supplementary code
/// point, never as two 3-byte units). `None` counts as 0.
///
/// A high surrogate not followed by a low surrogate, or a low surrogate
/// with no preceding high surrogate, is an
/// [`EncodingError::UnpairedSurrogate`] naming the offending unit and its
/// index; the length is never computed lossily.
pub fn utf8_encoded_length_utf16(units: Option<&[u16]>) -> Result<usize, EncodingError> {
    let Some(units) = units else {
        return Ok(0);
    };
    let mut len = 0usize;
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        len += match unit {
            0x0000..=0x007F => 1,
            0x0080..=0x07FF => 2,
            _ if HIGH_SURROGATE.contains(&unit) => match units.get(i + 1).copied() {
                Some(low) if LOW_SURROGATE.contains(&low) => {
                    i += 1;
                    4
                }
                _ => return Err(EncodingError::UnpairedSurrogate { unit, index: i }),
            },
            _ if LOW_SURROGATE.contains(&unit) => {
                return Err(EncodingError::UnpairedSurrogate { unit, index: i });
            }
            _ => 3,
        };
        i += 1;
    }
    Ok(len)
}
