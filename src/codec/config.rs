// ============================================================================
// Codec Configuration
// Behaviour knobs for parsing and formatting
// ============================================================================

use crate::numeric::MAX_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`NumericTextCodec`](super::NumericTextCodec).
///
/// The default accepts everything the free functions in
/// [`numeric`](crate::numeric) accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    /// Return infinities from `parse` ("Infinity", "1e400").
    /// When false those inputs parse to `None`.
    pub accept_infinite: bool,

    /// Format NaN and infinities as "NaN", "Infinity" and "-Infinity".
    /// When false they are rejected with `FormatError::NonFiniteValue`.
    pub format_non_finite: bool,

    /// Largest digit count `format` accepts (1 to 100)
    pub max_digits: u32,
}

impl CodecConfig {
    /// Create a configuration with default behaviour
    pub fn new() -> Self {
        Self {
            accept_infinite: true,
            format_non_finite: true,
            max_digits: MAX_DIGITS,
        }
    }

    /// Builder method: Accept or reject infinite parse results
    pub fn with_accept_infinite(mut self, accept: bool) -> Self {
        self.accept_infinite = accept;
        self
    }

    /// Builder method: Format or reject non-finite values
    pub fn with_format_non_finite(mut self, format: bool) -> Self {
        self.format_non_finite = format;
        self
    }

    /// Builder method: Cap the digit count
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Precision notation needs at least one digit
        if self.max_digits == 0 {
            return Err("Max digits must be at least 1".to_string());
        }

        if self.max_digits > MAX_DIGITS {
            return Err(format!("Max digits cannot exceed {}", MAX_DIGITS));
        }

        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CodecConfig {
    /// Everything finite only
    /// - "Infinity" and overflowing literals parse to `None`
    /// - NaN and infinities are format errors
    pub fn finite_only() -> Self {
        Self::new()
            .with_accept_infinite(false)
            .with_format_non_finite(false)
    }

    /// Short output for display purposes
    /// - At most 20 digits, the most that can matter for a double
    pub fn display() -> Self {
        Self::new().with_max_digits(20)
    }
}

// ============================================================================
// JSON (for API boundaries)
// ============================================================================

#[cfg(feature = "serde")]
impl CodecConfig {
    /// Read and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CodecConfig::new();

        assert!(config.accept_infinite);
        assert!(config.format_non_finite);
        assert_eq!(config.max_digits, 100);
        assert!(config.validate().is_ok());
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CodecConfig::new()
            .with_accept_infinite(false)
            .with_max_digits(10);

        assert!(!config.accept_infinite);
        assert!(config.format_non_finite);
        assert_eq!(config.max_digits, 10);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CodecConfig::new().with_max_digits(0).validate(),
            Err("Max digits must be at least 1".to_string())
        );
        assert_eq!(
            CodecConfig::new().with_max_digits(101).validate(),
            Err("Max digits cannot exceed 100".to_string())
        );
        assert!(CodecConfig::new().with_max_digits(1).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let strict = CodecConfig::finite_only();
        assert!(!strict.accept_infinite);
        assert!(!strict.format_non_finite);
        assert!(strict.validate().is_ok());

        let display = CodecConfig::display();
        assert_eq!(display.max_digits, 20);
        assert!(display.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = CodecConfig::finite_only().with_max_digits(12);
        let json = config.to_json().unwrap();
        assert_eq!(CodecConfig::from_json(&json), Ok(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_invalid() {
        let json = r#"{"accept_infinite":true,"format_non_finite":true,"max_digits":500}"#;
        assert_eq!(
            CodecConfig::from_json(json),
            Err("Max digits cannot exceed 100".to_string())
        );
        assert!(CodecConfig::from_json("not json").is_err());
    }
}
