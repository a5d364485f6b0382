//! Transformation error types
//!
//! All errors here are local validation failures: the compiler performs
//! no I/O, so there is no transient-failure class and no retry path.
//! Callers must correct the input.

use std::fmt;

/// Errors that can occur while constructing transformation directives
/// or assembling a delivery URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    // === Directive errors ===
    /// Resize dimension is not a positive pixel count
    InvalidDimension { dimension: &'static str, value: u32 },
    /// Fixed quality value out of range
    InvalidQuality { quality: u8 },
    /// Overlay opacity out of range
    InvalidOpacity { opacity: u8 },
    /// Unrecognized enumeration token (crop mode, gravity, quality)
    UnknownToken { kind: &'static str, token: String },

    // === Assembly errors ===
    /// Asset identifier is empty after trimming
    MissingAssetId,
    /// CDN account name is empty after trimming
    MissingAccountName,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Directive errors
            TransformError::InvalidDimension { dimension, value } => {
                write!(f, "Invalid {} {}: must be a positive pixel count", dimension, value)
            }
            TransformError::InvalidQuality { quality } => {
                write!(f, "Invalid quality {}: must be 1-100 or auto", quality)
            }
            TransformError::InvalidOpacity { opacity } => {
                write!(f, "Invalid opacity {}: must be 0-100", opacity)
            }
            TransformError::UnknownToken { kind, token } => {
                write!(f, "Unknown {}: {}", kind, token)
            }

            // Assembly errors
            TransformError::MissingAssetId => {
                write!(f, "Missing asset id: must be non-empty")
            }
            TransformError::MissingAccountName => {
                write!(f, "Missing account name: must be non-empty")
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl TransformError {
    /// Helper constructors for common error patterns
    pub fn invalid_dimension(dimension: &'static str, value: u32) -> Self {
        TransformError::InvalidDimension { dimension, value }
    }

    pub fn unknown_token(kind: &'static str, token: impl Into<String>) -> Self {
        TransformError::UnknownToken {
            kind,
            token: token.into(),
        }
    }
}
