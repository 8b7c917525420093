//! Error types for the WARD core library.
//!
//! This module defines all error types that can occur during
//! journal decoding and constraint validation.

use ethers_core::types::H256;
use thiserror::Error;

/// A single failed constraint rule.
///
/// Rules are checked cheapest-first and the first failure wins. Every rule
/// is deterministic and runs before any cryptographic verification, so a
/// violation always means the expensive proof verifier was never invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// The attesting notary key fingerprint does not match the trust root.
    #[error("notary fingerprint mismatch: expected {expected:?}, got {actual:?}")]
    NotaryMismatch {
        /// Fingerprint required by the trust root
        expected: H256,
        /// Fingerprint carried by the journal
        actual: H256,
    },

    /// The attested HTTP method is not the expected one.
    #[error("http method mismatch: expected GET, got '{actual}'")]
    MethodMismatch {
        /// Method carried by the journal
        actual: String,
    },

    /// The data-extraction query commitment does not match the trust root.
    #[error("queries hash mismatch: expected {expected:?}, got {actual:?}")]
    QueriesHashMismatch {
        /// Commitment required by the trust root
        expected: H256,
        /// Commitment carried by the journal
        actual: H256,
    },

    /// The attested URL does not start with the expected prefix.
    #[error("url mismatch: '{url}' does not start with '{prefix}'")]
    UrlMismatch {
        /// Required prefix
        prefix: String,
        /// URL carried by the journal
        url: String,
    },

    /// The extracted value field is empty.
    #[error("extracted value is empty")]
    EmptyValue,
}

/// Errors that can occur in WARD core operations.
#[derive(Debug, Error)]
pub enum WardCoreError {
    /// Journal bytes are not a well-formed ABI tuple.
    #[error("journal decode failed: {0}")]
    Decode(String),

    /// A decoded journal field failed constraint validation.
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),
}

/// Result type alias for WARD core operations.
pub type Result<T> = std::result::Result<T, WardCoreError>;
