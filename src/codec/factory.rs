// ============================================================================
// Codec Factory
// Creates codecs with validated configuration
// ============================================================================

use super::config::CodecConfig;
use super::numeric_text_codec::NumericTextCodec;

/// Creates a codec from configuration
///
/// # Arguments
/// * `config` - Codec configuration
///
/// # Returns
/// * `Result<NumericTextCodec, String>` - Configured codec or error
///
/// # Example
/// ```
/// use numeric_text::codec::{create_codec, CodecConfig};
///
/// let codec = create_codec(CodecConfig::finite_only()).unwrap();
/// assert_eq!(codec.parse("Infinity"), None);
///
/// assert!(create_codec(CodecConfig::new().with_max_digits(0)).is_err());
/// ```
pub fn create_codec(config: CodecConfig) -> Result<NumericTextCodec, String> {
    if let Err(reason) = config.validate() {
        tracing::debug!(%reason, ?config, "invalid codec configuration");
        return Err(reason);
    }

    Ok(NumericTextCodec::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormatKind;

    #[test]
    fn test_create_default_codec() {
        let codec = create_codec(CodecConfig::default()).unwrap();
        assert_eq!(codec.config(), &CodecConfig::default());
        assert_eq!(codec.format(FormatKind::Fixed, 2, 3.14159).unwrap(), "3.14");
    }

    #[test]
    fn test_create_preset_codecs() {
        let strict = create_codec(CodecConfig::finite_only()).unwrap();
        assert_eq!(strict.parse("-Infinity"), None);

        let display = create_codec(CodecConfig::display()).unwrap();
        assert!(display.format(FormatKind::Precision, 21, 1.0).is_err());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = create_codec(CodecConfig::new().with_max_digits(250));
        assert_eq!(result, Err("Max digits cannot exceed 100".to_string()));
    }
}
