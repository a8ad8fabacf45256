// ============================================================================
// Float Parsing
// Leading-prefix parsing with parseFloat semantics
// ============================================================================

const INFINITY_LITERAL: &str = "Infinity";

/// Parse the longest numeric prefix of `text`.
///
/// Leading white space is skipped and anything after the prefix is ignored.
/// The accepted grammar is an optional sign followed by either `Infinity` or
/// a decimal literal (`12`, `1.`, `.5`, `1.5e-3`). An exponent marker without
/// digits is left unconsumed, so `"1e"` parses as `1`.
///
/// Returns `None` when there is no numeric prefix. `"NaN"` is not accepted.
/// Literals beyond the finite range parse to an infinity.
///
/// # Examples
/// ```
/// use numeric_text::numeric::parse;
///
/// assert_eq!(parse("3.14"), Some(3.14));
/// assert_eq!(parse("  42abc"), Some(42.0));
/// assert_eq!(parse("1e400"), Some(f64::INFINITY));
/// assert_eq!(parse("abc"), None);
/// assert_eq!(parse("NaN"), None);
/// ```
pub fn parse(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_white_space);
    let prefix = &text[..scan_prefix(text)?];

    let unsigned = prefix.trim_start_matches(['+', '-']);
    let value = if unsigned == INFINITY_LITERAL {
        if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        prefix.parse::<f64>().ok()?
    };

    (!value.is_nan()).then_some(value)
}

/// [`parse`] restricted to finite results.
///
/// `"Infinity"` and overflowing literals such as `"1e400"` give `None`.
pub fn parse_finite(text: &str) -> Option<f64> {
    parse(text).filter(|value| value.is_finite())
}

/// White space skipped before the number: Unicode white space except NEL,
/// plus the byte order mark.
fn is_white_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Byte length of the numeric prefix of `text`, if there is one.
fn scan_prefix(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with(INFINITY_LITERAL) {
        return Some(pos + INFINITY_LITERAL.len());
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    Some(pos)
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
