// ============================================================================
// Numeric Text Interface
// Method-style formatting on floating-point values
// ============================================================================

use crate::numeric::{self, FormatKind, FormatResult};

/// Formatting methods on floating-point values.
///
/// Each method behaves like [`numeric::format`] with the matching
/// [`FormatKind`], using default settings.
///
/// # Example
/// ```
/// use numeric_text::interfaces::NumericText;
///
/// assert_eq!(3.14159_f64.to_fixed(2).unwrap(), "3.14");
/// assert_eq!(123456.0_f64.to_exponential(2).unwrap(), "1.23e+5");
/// assert_eq!(0.0001234_f64.to_precision(5).unwrap(), "0.00012340");
/// assert_eq!(1e21_f64.to_default_string(), "1e+21");
/// ```
pub trait NumericText: Copy {
    /// `digits` places after the decimal point (0 to 100)
    fn to_fixed(self, digits: u32) -> FormatResult<String>;

    /// Exponential notation with `digits` mantissa places (0 to 100)
    fn to_exponential(self, digits: u32) -> FormatResult<String>;

    /// `digits` significant digits (1 to 100)
    fn to_precision(self, digits: u32) -> FormatResult<String>;

    /// Shortest round-trippable representation
    fn to_default_string(self) -> String;
}

impl NumericText for f64 {
    #[inline]
    fn to_fixed(self, digits: u32) -> FormatResult<String> {
        numeric::format(FormatKind::Fixed, digits, self)
    }

    #[inline]
    fn to_exponential(self, digits: u32) -> FormatResult<String> {
        numeric::format(FormatKind::Exponential, digits, self)
    }

    #[inline]
    fn to_precision(self, digits: u32) -> FormatResult<String> {
        numeric::format(FormatKind::Precision, digits, self)
    }

    #[inline]
    fn to_default_string(self) -> String {
        numeric::to_default_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormatError;

    #[test]
    fn test_methods_delegate() {
        let x = 2.5_f64;
        assert_eq!(x.to_fixed(0).unwrap(), "3");
        assert_eq!(x.to_exponential(1).unwrap(), "2.5e+0");
        assert_eq!(x.to_precision(3).unwrap(), "2.50");
        assert_eq!(x.to_default_string(), "2.5");
    }

    #[test]
    fn test_methods_report_errors() {
        assert_eq!(
            1.0_f64.to_precision(0),
            Err(FormatError::DigitsOutOfRange {
                kind: FormatKind::Precision,
                digits: 0,
                min: 1,
                max: 100,
            })
        );
        assert!(1.0_f64.to_fixed(101).is_err());
    }

    #[test]
    fn test_generic_use() {
        fn describe<T: NumericText>(value: T) -> String {
            value.to_default_string()
        }
        assert_eq!(describe(-0.5_f64), "-0.5");
    }
}
