// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod numeric_text;

pub use numeric_text::NumericText;
