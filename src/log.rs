//! Diagnostic reporting for non-fatal scan failures.
//!
//! Discovery never surfaces filesystem errors to its caller; it reports them
//! through an injected [`DiagnosticSink`] instead. The default sink forwards
//! to [`tracing`], and tests substitute a collecting sink to assert on the
//! warnings without capturing log output.

use crate::error::Error;

/// Receives warnings about directories that could not be scanned
pub trait DiagnosticSink: Send + Sync {
    /// Report a non-fatal failure with a human-readable message
    fn warn(&self, message: &str, error: &Error);
}

/// Default sink that emits warnings through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str, error: &Error) {
        // Error display strings carry the failing path themselves
        tracing::warn!(error = %error, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_tracing_sink_handles_every_error_variant() {
        let sink = TracingSink;
        sink.warn("Failed to scan commands directory", &Error::HomeDirectory);
        sink.warn(
            "Failed to scan commands directory",
            &Error::read_dir(
                "/tmp/commands",
                io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            ),
        );
    }
}
