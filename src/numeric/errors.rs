// ============================================================================
// Numeric Errors
// Error types for number-to-text conversions
// ============================================================================

use super::format::FormatKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while formatting a float.
///
/// Parsing never produces an error: text without a numeric prefix is
/// reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatError {
    /// Requested digit count is outside the range accepted by `kind`
    DigitsOutOfRange {
        kind: FormatKind,
        digits: i64,
        min: u32,
        max: u32,
    },
    /// NaN or an infinity was passed while the codec is configured to
    /// reject non-finite values
    NonFiniteValue { kind: FormatKind },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::DigitsOutOfRange {
                kind,
                digits,
                min,
                max,
            } => write!(
                f,
                "digit count {} out of range for {} notation: expected {} to {}",
                digits, kind, min, max
            ),
            FormatError::NonFiniteValue { kind } => {
                write!(f, "cannot format a non-finite value in {} notation", kind)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for format operations
pub type FormatResult<T> = Result<T, FormatError>;
