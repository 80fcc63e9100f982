//! # Error Types
//!
//! Domain-specific error types for nutriscan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  nutriscan-core errors (this file)                              │
//! │  └── CoreError        - Catalog construction failures           │
//! │                                                                 │
//! │  nutriscan-scan errors (separate crate)                         │
//! │  └── ScanError        - Decoder/session failures                │
//! │                                                                 │
//! │  NOTE: A lookup miss is NOT an error anywhere in this           │
//! │  workspace. `Catalog::describe` is infallible.                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core domain errors.
///
/// These can only occur while **building** a catalog. Queries against a
/// built catalog never fail.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two records share the same barcode.
    ///
    /// Every code in the backing store must be unique; lookups are
    /// exact-match only, so a duplicate would make results ambiguous.
    #[error("Duplicate barcode in catalog: {0}")]
    DuplicateCode(String),

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateCode("8901014004133".to_string());
        assert_eq!(
            err.to_string(),
            "Duplicate barcode in catalog: 8901014004133"
        );

        let err = CoreError::InvalidCatalog("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid catalog data: expected an array");
    }
}
