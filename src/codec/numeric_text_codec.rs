// ============================================================================
// Numeric Text Codec
// Configured entry point for parsing and formatting
// ============================================================================

use super::config::CodecConfig;
use crate::numeric::{self, FormatError, FormatKind, FormatResult, FormatSpec};

/// Text <-> f64 codec applying a [`CodecConfig`].
///
/// The codec is a plain value: copy it freely and share it across threads.
///
/// # Example
/// ```
/// use numeric_text::codec::{CodecConfig, NumericTextCodec};
/// use numeric_text::numeric::FormatKind;
///
/// let codec = NumericTextCodec::new(CodecConfig::finite_only());
/// assert_eq!(codec.parse("2.5kg"), Some(2.5));
/// assert_eq!(codec.parse("1e400"), None);
/// assert_eq!(codec.format(FormatKind::Fixed, 1, 2.25).unwrap(), "2.3");
/// assert!(codec.format(FormatKind::Fixed, 1, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericTextCodec {
    config: CodecConfig,
}

impl NumericTextCodec {
    /// Create a codec. Use [`create_codec`](super::create_codec) to validate
    /// the configuration first.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Parse the numeric prefix of `text`.
    ///
    /// See [`numeric::parse`] for the grammar. Infinite results are dropped
    /// unless `accept_infinite` is set.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let parsed = if self.config.accept_infinite {
            numeric::parse(text)
        } else {
            numeric::parse_finite(text)
        };

        if parsed.is_none() {
            tracing::trace!(input_len = text.len(), "no numeric value in input");
        }
        parsed
    }

    /// Format `value` with `digits` in the given notation.
    pub fn format(&self, kind: FormatKind, digits: u32, value: f64) -> FormatResult<String> {
        self.format_spec(FormatSpec::new(kind, digits), value)
    }

    /// Format `value` according to `spec`.
    ///
    /// # Errors
    /// - `DigitsOutOfRange` if the digit count is outside the notation's
    ///   range or above `max_digits`
    /// - `NonFiniteValue` for NaN or infinities unless `format_non_finite`
    pub fn format_spec(&self, spec: FormatSpec, value: f64) -> FormatResult<String> {
        if let Err(err) = spec.validate_with_max(self.config.max_digits) {
            tracing::debug!(%err, "format request rejected");
            return Err(err);
        }

        if !value.is_finite() && !self.config.format_non_finite {
            let err = FormatError::NonFiniteValue { kind: spec.kind };
            tracing::debug!(%err, value = ?value, "format request rejected");
            return Err(err);
        }

        Ok(numeric::render(spec, value))
    }

    /// Shortest round-trippable representation. Always succeeds.
    pub fn to_default_string(&self, value: f64) -> String {
        numeric::to_default_string(value)
    }

    /// Shortest round-trippable exponential notation.
    ///
    /// # Errors
    /// `NonFiniteValue` for NaN or infinities unless `format_non_finite`.
    pub fn to_exponential_shortest(&self, value: f64) -> FormatResult<String> {
        if numeric::non_finite_literal(value).is_some() && !self.config.format_non_finite {
            return Err(FormatError::NonFiniteValue {
                kind: FormatKind::Exponential,
            });
        }
        Ok(numeric::to_exponential_shortest(value))
    }
}
