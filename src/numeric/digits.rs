// ============================================================================
// Decimal Digits
// Exact and shortest decimal expansions of a double, plus rounding
// ============================================================================

use smallvec::SmallVec;

/// Significant digits needed to write any finite double exactly.
const MAX_EXACT_DIGITS: usize = 767;

/// ASCII digit buffer. Most requests keep well under 32 digits.
pub(crate) type DigitBuf = SmallVec<[u8; 32]>;

/// Exact decimal expansion of the magnitude of a finite double.
///
/// `digits[0]` is the digit at `10^exponent`. Digits are ASCII, the first one
/// is non-zero and trailing zeros are stripped. Zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExactDecimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl ExactDecimal {
    /// Expand `|value|`. The sign is the caller's business.
    pub(crate) fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite());
        let magnitude = value.abs();
        if magnitude == 0.0 {
            return Self {
                digits: Vec::new(),
                exponent: 0,
            };
        }

        // With 767 significant digits std formatting never has to round.
        let text = format!("{:.*e}", MAX_EXACT_DIGITS - 1, magnitude);
        let (mut digits, exponent) = split_scientific(&text);
        while digits.last() == Some(&b'0') {
            digits.pop();
        }

        Self {
            digits: digits.into_vec(),
            exponent,
        }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Round to `count` significant digits.
    ///
    /// A carry out of the leading digit (9.96 -> 10.0) bumps the exponent and
    /// the buffer still holds exactly `count` digits.
    pub(crate) fn round_significant(&self, count: usize) -> Rounded {
        let mut rounded = self.round(count as i64);
        rounded.digits.truncate(count);
        rounded
    }

    /// Round to `fraction_digits` digits after the decimal point.
    ///
    /// A non-zero result holds `exponent + 1 + fraction_digits` digits, so the
    /// buffer read as an integer is the value scaled by `10^fraction_digits`.
    pub(crate) fn round_fraction(&self, fraction_digits: usize) -> Rounded {
        self.round(self.exponent as i64 + 1 + fraction_digits as i64)
    }

    /// Keep the leading `keep` digits, rounding half away from zero on the
    /// discarded tail. Since the expansion is exact, a tail starting with 5
    /// is either an exact tie or above it, and both round up.
    fn round(&self, keep: i64) -> Rounded {
        if self.is_zero() || keep < 0 {
            return Rounded::zero();
        }

        let keep = keep as usize;
        let mut digits: DigitBuf = self.digits.iter().copied().take(keep).collect();
        digits.resize(keep, b'0');
        let mut exponent = self.exponent;

        if self.digits.get(keep).is_some_and(|&d| d >= b'5') && increment(&mut digits) {
            digits.insert(0, b'1');
            exponent += 1;
        }

        Rounded { digits, exponent }
    }
}

/// Digits left after rounding an [`ExactDecimal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rounded {
    pub(crate) digits: DigitBuf,
    pub(crate) exponent: i32,
}

impl Rounded {
    fn zero() -> Self {
        Self {
            digits: DigitBuf::new(),
            exponent: 0,
        }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == b'0')
    }

    pub(crate) fn as_string(&self) -> String {
        self.digits.iter().map(|&d| d as char).collect()
    }
}

/// Shortest digits that parse back to the same double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShortestDecimal {
    pub(crate) digits: DigitBuf,
    pub(crate) exponent: i32,
}

impl ShortestDecimal {
    /// Shortest expansion of `|value|`; `value` must be finite and non-zero.
    pub(crate) fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite() && value != 0.0);
        let text = format!("{:e}", value.abs());
        let (digits, exponent) = split_scientific(&text);
        Self { digits, exponent }
    }

    pub(crate) fn as_string(&self) -> String {
        self.digits.iter().map(|&d| d as char).collect()
    }
}

/// Add one unit in the last place. Returns `true` on carry out.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Split std's `{:e}` output ("1.2345e-7") into mantissa digits and exponent.
fn split_scientific(text: &str) -> (DigitBuf, i32) {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(r: &Rounded) -> String {
        r.as_string()
    }

    #[test]
    fn test_exact_expansion() {
        let x = ExactDecimal::from_f64(0.125);
        assert_eq!(x.digits, b"125".to_vec());
        assert_eq!(x.exponent, -1);

        let y = ExactDecimal::from_f64(-2500.0);
        assert_eq!(y.digits, b"25".to_vec());
        assert_eq!(y.exponent, 3);

        // 0.1 is not representable: the expansion is long and exact
        let z = ExactDecimal::from_f64(0.1);
        assert_eq!(z.exponent, -1);
        assert_eq!(z.digits.len(), 55);
        assert!(z.digits.starts_with(b"1000000000000000055511151231257827"));
    }

    #[test]
    fn test_exact_zero() {
        assert!(ExactDecimal::from_f64(0.0).is_zero());
        assert!(ExactDecimal::from_f64(-0.0).is_zero());
    }

    #[test]
    fn test_exact_extremes() {
        let max = ExactDecimal::from_f64(f64::MAX);
        assert_eq!(max.exponent, 308);
        assert_eq!(max.digits.len(), 309);

        let tiny = ExactDecimal::from_f64(5e-324);
        assert_eq!(tiny.exponent, -324);
        assert!(tiny.digits.starts_with(b"494065645841246544"));
        assert_eq!(tiny.digits.last(), Some(&b'5'));
    }

    #[test]
    fn test_round_significant() {
        let x = ExactDecimal::from_f64(123456.0);
        let r = x.round_significant(3);
        assert_eq!(digits(&r), "123");
        assert_eq!(r.exponent, 5);

        // Exact tie rounds away from zero
        let r = ExactDecimal::from_f64(125.0).round_significant(2);
        assert_eq!(digits(&r), "13");

        // Padding beyond the exact digits
        let r = ExactDecimal::from_f64(1.5).round_significant(4);
        assert_eq!(digits(&r), "1500");
    }

    #[test]
    fn test_round_significant_carry() {
        let r = ExactDecimal::from_f64(999.5).round_significant(3);
        assert_eq!(digits(&r), "100");
        assert_eq!(r.exponent, 3);
    }

    #[test]
    fn test_round_fraction() {
        let r = ExactDecimal::from_f64(3.14159).round_fraction(2);
        assert_eq!(digits(&r), "314");
        assert_eq!(r.exponent, 0);

        let r = ExactDecimal::from_f64(9.96).round_fraction(1);
        assert_eq!(digits(&r), "100");
        assert_eq!(r.exponent, 1);
    }

    #[test]
    fn test_round_fraction_below_precision() {
        // Everything discarded
        let r = ExactDecimal::from_f64(0.001).round_fraction(1);
        assert!(r.is_zero());

        // Nothing kept but the first discarded digit rounds up
        let r = ExactDecimal::from_f64(0.006).round_fraction(2);
        assert_eq!(digits(&r), "1");
        assert_eq!(r.exponent, -2);

        let r = ExactDecimal::from_f64(0.4).round_fraction(0);
        assert!(r.is_zero());
    }

    #[test]
    fn test_round_respects_exact_value() {
        // 1.005 is stored as 1.00499999999999989...
        let r = ExactDecimal::from_f64(1.005).round_fraction(2);
        assert_eq!(digits(&r), "100");

        // 3.145 is stored as 3.14500000000000001...
        let r = ExactDecimal::from_f64(3.145).round_fraction(2);
        assert_eq!(digits(&r), "315");
    }

    #[test]
    fn test_shortest() {
        let s = ShortestDecimal::from_f64(123.456);
        assert_eq!(s.as_string(), "123456");
        assert_eq!(s.exponent, 2);

        let s = ShortestDecimal::from_f64(-1e-7);
        assert_eq!(s.as_string(), "1");
        assert_eq!(s.exponent, -7);

        let s = ShortestDecimal::from_f64(0.1);
        assert_eq!(s.as_string(), "1");
        assert_eq!(s.exponent, -1);
    }

    #[test]
    fn test_increment() {
        let mut d = *b"129";
        assert!(!increment(&mut d));
        assert_eq!(&d, b"130");

        let mut d = *b"99";
        assert!(increment(&mut d));
        assert_eq!(&d, b"00");

        assert!(increment(&mut []));
    }
}
