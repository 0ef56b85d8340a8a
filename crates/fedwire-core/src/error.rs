//! Error types for fedwire

use thiserror::Error;

use crate::PrimitiveKind;

/// Core fedwire errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FedError {
    // Buffer errors
    #[error("Buffer underrun: requested {requested} bytes, {remaining} remaining")]
    BufferUnderrun { requested: usize, remaining: usize },

    #[error("Malformed length prefix {length} with {remaining} bytes remaining")]
    MalformedLength { length: i64, remaining: usize },

    // Codec errors
    #[error("Unsupported value kind: {0}")]
    UnsupportedValueKind(String),

    #[error("Kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },

    #[error("Value not representable: {0}")]
    NotRepresentable(String),

    #[error("String payload is not valid UTF-8")]
    InvalidUtf8,

    // Binding errors
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Payload too large: {size} > {limit}")]
    PayloadTooLarge { size: usize, limit: usize },
}

impl FedError {
    /// True for any read that ran past the available bytes, including a
    /// length prefix that cannot describe the remaining data.
    pub fn is_underrun(&self) -> bool {
        matches!(
            self,
            FedError::BufferUnderrun { .. } | FedError::MalformedLength { .. }
        )
    }
}

/// Result type for fedwire operations
pub type FedResult<T> = Result<T, FedError>;
