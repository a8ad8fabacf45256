// ============================================================================
// Codec Module
// Configured parsing and formatting on top of the numeric primitives
// ============================================================================

mod config;
mod numeric_text_codec;

pub mod factory;

pub use config::CodecConfig;
pub use factory::create_codec;
pub use numeric_text_codec::NumericTextCodec;
