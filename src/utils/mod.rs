// ============================================================================
// Utilities Module
// Helper functions for applications embedding the codec
// ============================================================================

mod logging;

pub use logging::init_logging;
