// ============================================================================
// Float Formatting
// Fixed, exponential, precision and default notations for f64
// ============================================================================

use super::digits::{ExactDecimal, ShortestDecimal};
use super::errors::{FormatError, FormatResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on the digit count of every notation.
pub const MAX_DIGITS: u32 = 100;

/// Magnitude from which fixed notation falls back to the default string.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

// ============================================================================
// Format Kind and Spec
// ============================================================================

/// Notation used by [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatKind {
    /// `digits` places after the decimal point ("3.14")
    Fixed,
    /// One integer digit, `digits` mantissa places and an exponent ("3.14e+0")
    Exponential,
    /// `digits` significant digits, exponential for very large or small values
    Precision,
}

impl FormatKind {
    /// Smallest accepted digit count.
    #[inline]
    pub const fn min_digits(self) -> u32 {
        match self {
            FormatKind::Fixed | FormatKind::Exponential => 0,
            FormatKind::Precision => 1,
        }
    }

    /// Largest accepted digit count.
    #[inline]
    pub const fn max_digits(self) -> u32 {
        MAX_DIGITS
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::Fixed => write!(f, "fixed"),
            FormatKind::Exponential => write!(f, "exponential"),
            FormatKind::Precision => write!(f, "precision"),
        }
    }
}

/// A notation together with its digit count.
///
/// Construction does not validate; [`FormatSpec::validate`] and every
/// formatting entry point do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub digits: u32,
}

impl FormatSpec {
    pub const fn new(kind: FormatKind, digits: u32) -> Self {
        Self { kind, digits }
    }

    pub const fn fixed(digits: u32) -> Self {
        Self::new(FormatKind::Fixed, digits)
    }

    pub const fn exponential(digits: u32) -> Self {
        Self::new(FormatKind::Exponential, digits)
    }

    pub const fn precision(digits: u32) -> Self {
        Self::new(FormatKind::Precision, digits)
    }

    /// Build a validated spec from a signed digit count.
    ///
    /// # Errors
    /// Returns `DigitsOutOfRange` for negative or too large counts.
    pub fn try_new(kind: FormatKind, digits: i64) -> FormatResult<Self> {
        let spec = u32::try_from(digits)
            .map(|d| Self::new(kind, d))
            .map_err(|_| out_of_range(kind, digits, kind.max_digits()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check the digit count against the range of the notation.
    pub fn validate(&self) -> FormatResult<()> {
        self.validate_with_max(MAX_DIGITS)
    }

    /// Like [`validate`](Self::validate) with an additional cap on the count.
    pub fn validate_with_max(&self, max_digits: u32) -> FormatResult<()> {
        let max = self.kind.max_digits().min(max_digits);
        if self.digits < self.kind.min_digits() || self.digits > max {
            return Err(out_of_range(self.kind, self.digits as i64, max));
        }
        Ok(())
    }
}

fn out_of_range(kind: FormatKind, digits: i64, max: u32) -> FormatError {
    FormatError::DigitsOutOfRange {
        kind,
        digits,
        min: kind.min_digits(),
        max,
    }
}

// ============================================================================
// Public Formatting Functions
// ============================================================================

/// Format `value` with `digits` in the given notation.
///
/// Rounding is half away from zero on the exact binary value, so
/// `format(Fixed, 2, 0.125)` is `"0.13"` while `1.005` (stored slightly below
/// the tie) gives `"1.00"`. NaN and infinities format as `"NaN"`,
/// `"Infinity"` and `"-Infinity"`.
///
/// # Errors
/// Returns `DigitsOutOfRange` when `digits` is outside the notation's range.
///
/// # Example
/// ```
/// use numeric_text::numeric::{format, FormatKind};
///
/// assert_eq!(format(FormatKind::Fixed, 2, 3.14159).unwrap(), "3.14");
/// assert_eq!(format(FormatKind::Exponential, 2, 123456.0).unwrap(), "1.23e+5");
/// assert_eq!(format(FormatKind::Precision, 5, 0.0001234).unwrap(), "0.00012340");
/// assert!(format(FormatKind::Fixed, 101, 1.0).is_err());
/// ```
pub fn format(kind: FormatKind, digits: u32, value: f64) -> FormatResult<String> {
    format_spec(FormatSpec::new(kind, digits), value)
}

/// [`format`] taking a [`FormatSpec`].
pub fn format_spec(spec: FormatSpec, value: f64) -> FormatResult<String> {
    spec.validate()?;
    Ok(render(spec, value))
}

/// Shortest round-trippable representation.
///
/// Plain notation is used for decimal exponents in `-7 < e < 21`, exponential
/// notation outside that window. Both zeros give `"0"`.
pub fn to_default_string(value: f64) -> String {
    if let Some(literal) = non_finite_literal(value) {
        return literal.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let shortest = ShortestDecimal::from_f64(value);
    let digits = shortest.as_string();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = shortest.exponent + 1;

    let mut out = String::with_capacity(k.max(n).unsigned_abs() as usize + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        push_zeros(&mut out, (n - k) as usize);
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        push_zeros(&mut out, (-n) as usize);
        out.push_str(&digits);
    } else {
        push_exponential(&mut out, &digits, n - 1);
    }
    out
}

/// Exponential notation with as many mantissa digits as needed to round-trip.
pub fn to_exponential_shortest(value: f64) -> String {
    if let Some(literal) = non_finite_literal(value) {
        return literal.to_string();
    }
    if value == 0.0 {
        return "0e+0".to_string();
    }

    let shortest = ShortestDecimal::from_f64(value);
    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    push_exponential(&mut out, &shortest.as_string(), shortest.exponent);
    out
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a spec that already passed validation.
pub(crate) fn render(spec: FormatSpec, value: f64) -> String {
    if let Some(literal) = non_finite_literal(value) {
        return literal.to_string();
    }

    let digits = spec.digits as usize;
    match spec.kind {
        FormatKind::Fixed => render_fixed(value, digits),
        FormatKind::Exponential => render_exponential(value, digits),
        FormatKind::Precision => render_precision(value, digits),
    }
}

pub(crate) fn non_finite_literal(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn render_fixed(value: f64, fraction_digits: usize) -> String {
    if value.abs() >= FIXED_NOTATION_LIMIT {
        return to_default_string(value);
    }

    let rounded = ExactDecimal::from_f64(value).round_fraction(fraction_digits);
    // The rounded digits read as an integer are value * 10^fraction_digits
    let mut scaled = if rounded.is_zero() {
        "0".to_string()
    } else {
        rounded.as_string()
    };
    if scaled.len() <= fraction_digits {
        let mut padded = String::with_capacity(fraction_digits + 1);
        push_zeros(&mut padded, fraction_digits + 1 - scaled.len());
        padded.push_str(&scaled);
        scaled = padded;
    }

    let mut out = String::with_capacity(scaled.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    if fraction_digits == 0 {
        out.push_str(&scaled);
    } else {
        let (int_part, frac_part) = scaled.split_at(scaled.len() - fraction_digits);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn render_exponential(value: f64, fraction_digits: usize) -> String {
    let (digits, exponent) = significant_digits(value, fraction_digits + 1);

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    push_exponential(&mut out, &digits, exponent);
    out
}

fn render_precision(value: f64, precision: usize) -> String {
    let (digits, exponent) = significant_digits(value, precision);
    let p = precision as i32;

    let mut out = String::with_capacity(digits.len() + 10);
    if value < 0.0 {
        out.push('-');
    }

    if exponent < -6 || exponent >= p {
        push_exponential(&mut out, &digits, exponent);
    } else if exponent == p - 1 {
        out.push_str(&digits);
    } else if exponent >= 0 {
        let (int_part, frac_part) = digits.split_at(exponent as usize + 1);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else {
        out.push_str("0.");
        push_zeros(&mut out, (-exponent - 1) as usize);
        out.push_str(&digits);
    }
    out
}

/// `count` rounded significant digits of `|value|` and the exponent of the
/// first one. Zero is `count` zeros at exponent 0.
fn significant_digits(value: f64, count: usize) -> (String, i32) {
    if value == 0.0 {
        return ("0".repeat(count), 0);
    }
    let rounded = ExactDecimal::from_f64(value).round_significant(count);
    (rounded.as_string(), rounded.exponent)
}

fn push_exponential(out: &mut String, digits: &str, exponent: i32) {
    let (lead, rest) = digits.split_at(1);
    out.push_str(lead);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
}

#[inline]
fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('0', count));
}

// ============================================================================
// Tests
// ============================================================================
