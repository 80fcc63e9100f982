//! # Session Error Types
//!
//! Error types for the scan-session controller.
//!
//! ## Failure Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Session Error Taxonomy                       │
//! │                                                                 │
//! │  DecoderInit   - camera permission denied, no camera device.    │
//! │                  Terminal for that start attempt: surfaced to   │
//! │                  the user, session reverts to Idle, no retry.   │
//! │                                                                 │
//! │  InvalidConfig - rejected at spawn time, before any session     │
//! │                  can run.                                       │
//! │                                                                 │
//! │  ChannelClosed - the event loop task is gone (shutdown).        │
//! │                                                                 │
//! │  A lookup miss is NOT an error - it is a normal, displayed      │
//! │  result. No other controller operation can fail.                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for session operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Scan-session error type.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// Decoder initialization failed (e.g. camera permission denied).
    ///
    /// Caught at the initialization boundary only; the user must re-issue
    /// *start* - there is no automatic retry.
    #[error("Decoder initialization failed: {0}")]
    DecoderInit(String),

    /// Invalid session configuration.
    #[error("Invalid scan configuration: {0}")]
    InvalidConfig(String),

    /// The session event loop has shut down.
    #[error("Session channel closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScanError::DecoderInit("camera permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Decoder initialization failed: camera permission denied"
        );

        let err = ScanError::InvalidConfig("cooldown must exceed delays".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid scan configuration: cooldown must exceed delays"
        );
    }
}
