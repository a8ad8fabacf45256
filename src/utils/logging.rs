// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events:
// - DEBUG: rejected format requests, invalid codec configuration
// - TRACE: inputs without a numeric value
//
// Applications normally install their own subscriber. With the "logging"
// feature enabled, `init_logging` installs a plain stderr formatter.
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber writing events up to `level`.
///
/// Without the "logging" feature this is a no-op that reports success, so
/// callers do not need their own `cfg` guards.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Level) -> Result<(), String> {
    #[cfg(feature = "logging")]
    {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string())
    }

    #[cfg(not(feature = "logging"))]
    {
        let _ = level;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_once() {
        let _ = init_logging(Level::DEBUG);

        // A second global subscriber is refused

        #[cfg(feature = "logging")]
        assert!(init_logging(Level::DEBUG).is_err());

        #[cfg(not(feature = "logging"))]
        assert!(init_logging(Level::DEBUG).is_ok());
    }
}
