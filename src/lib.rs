// ============================================================================
// Numeric Text Library
// Conversions between text and double-precision floats
// ============================================================================

//! # Numeric Text
//!
//! Parsing and formatting of `f64` values with well-defined, portable output.
//!
//! ## Features
//!
//! - **Prefix parsing** with `parseFloat` semantics: leading white space is
//!   skipped, trailing text ignored, failures reported as `None`
//! - **Fixed, exponential and precision notations** rounded half away from
//!   zero on the exact binary value
//! - **Shortest round-trippable default strings** (`"0.1"`, `"1e+21"`)
//! - **Validated digit counts** reported as typed errors, never panics
//! - **Standard constants** and predicates
//!
//! ## Example
//!
//! ```rust
//! use numeric_text::prelude::*;
//!
//! assert_eq!(parse("3.14 meters"), Some(3.14));
//! assert_eq!(parse("NaN"), None);
//!
//! assert_eq!(format(FormatKind::Fixed, 2, 3.14159).unwrap(), "3.14");
//! assert_eq!(format(FormatKind::Fixed, 0, 2.5).unwrap(), "3");
//! assert!(format(FormatKind::Fixed, 101, 1.0).is_err());
//!
//! assert_eq!(to_default_string(0.1 + 0.2), "0.30000000000000004");
//! assert!(!is_finite(INFINITY));
//!
//! // Configured codec
//! let codec = create_codec(CodecConfig::finite_only()).unwrap();
//! assert_eq!(codec.parse("1e400"), None);
//! ```

pub mod codec;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{create_codec, CodecConfig, NumericTextCodec};
    pub use crate::interfaces::NumericText;
    pub use crate::numeric::{
        format, format_spec, is_finite, is_nan, parse, parse_finite, to_default_string,
        to_exponential_shortest, FormatError, FormatKind, FormatResult, FormatSpec, EPSILON,
        INFINITY, MAX_VALUE, MIN_SUBNORMAL, MIN_VALUE, NAN, NEG_INFINITY,
    };
}
