//! Encoding error types.

use thiserror::Error;

/// Errors from UTF-16 code-unit validation.
///
/// Absent input, empty input, and not-found conditions are all normal
/// return values elsewhere in the crate; a malformed surrogate sequence is
/// the one condition reported as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unpaired surrogate 0x{unit:04X} at code unit index {index}")]
    UnpairedSurrogate { unit: u16, index: usize },
}
