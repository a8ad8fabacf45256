// ============================================================================
// Float Constants and Predicates
// Standard IEEE-754 double-precision constants
// ============================================================================

/// Not-a-Number.
pub const NAN: f64 = f64::NAN;

/// Positive infinity.
pub const INFINITY: f64 = f64::INFINITY;

/// Negative infinity.
pub const NEG_INFINITY: f64 = f64::NEG_INFINITY;

/// Difference between 1.0 and the next representable value (2^-52).
pub const EPSILON: f64 = f64::EPSILON;

/// Smallest positive normal value (2^-1022).
pub const MIN_VALUE: f64 = f64::MIN_POSITIVE;

/// Largest finite value.
pub const MAX_VALUE: f64 = f64::MAX;

/// Smallest positive subnormal value (2^-1074).
///
/// This is what JavaScript calls `Number.MIN_VALUE`.
pub const MIN_SUBNORMAL: f64 = 5e-324;

/// Returns `true` if `value` is NaN.
#[inline]
pub fn is_nan(value: f64) -> bool {
    value.is_nan()
}

/// Returns `true` if `value` is neither NaN nor an infinity.
#[inline]
pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(NAN.is_nan());
        assert_eq!(INFINITY, 1.0 / 0.0);
        assert_eq!(NEG_INFINITY, -1.0 / 0.0);
        assert_eq!(EPSILON, 2f64.powi(-52));
        assert_eq!(MIN_VALUE, 2f64.powi(-1022));
        assert_eq!(MAX_VALUE, 1.7976931348623157e308);
    }

    #[test]
    fn test_epsilon_is_gap_above_one() {
        assert!(1.0 + EPSILON > 1.0);
        assert_eq!(1.0 + EPSILON / 2.0, 1.0);
    }

    #[test]
    fn test_min_subnormal() {
        assert!(MIN_SUBNORMAL > 0.0);
        assert!(MIN_SUBNORMAL < MIN_VALUE);
        assert_eq!(MIN_SUBNORMAL / 2.0, 0.0);
        assert_eq!(MIN_SUBNORMAL.to_bits(), 1);
    }

    #[test]
    fn test_is_nan() {
        assert!(is_nan(NAN));
        assert!(!is_nan(INFINITY));
        assert!(!is_nan(0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(!is_finite(NAN));
        assert!(!is_finite(INFINITY));
        assert!(!is_finite(NEG_INFINITY));
        assert!(is_finite(1.0));
        assert!(is_finite(MAX_VALUE));
        assert!(is_finite(-MAX_VALUE));
        assert!(is_finite(MIN_SUBNORMAL));
    }
}
