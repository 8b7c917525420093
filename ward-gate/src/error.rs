//! Error types for the WARD gate.
//!
//! Every failure path carries its specific kind so operators can tell a
//! bad proof from a bad configuration from a policy block. Constraint and
//! decode failures happen before any state mutation and before the proof
//! verifier is invoked; `ProofVerificationFailed` likewise mutates
//! nothing. Only a fully successful validate-then-verify sequence writes
//! the verification cache.

use ethers_core::types::Address;
use thiserror::Error;
use ward_core::WardCoreError;

/// Errors that can occur during gate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Journal decoding or constraint validation failed. The proof
    /// verifier was never invoked.
    #[error(transparent)]
    Core(#[from] WardCoreError),

    /// The proof verifier rejected the proof.
    #[error("proof verification failed: {0}")]
    ProofVerificationFailed(String),

    /// No fresh verification record exists for the principal.
    /// Informational rather than fatal: the caller re-validates by
    /// submitting fresh proof material.
    #[error("no fresh verification for {principal:?}; re-validation required")]
    ExpiredCacheMiss {
        /// Principal whose record is missing or expired
        principal: Address,
    },

    /// The decision policy blocked the protected action.
    #[error("action blocked: risk score {risk_score} exceeded the threshold")]
    ActionBlocked {
        /// Externally supplied risk score that triggered the block
        risk_score: u8,
    },

    /// Caller is not the configured operator.
    #[error("unauthorized configuration change from {caller:?}")]
    Unauthorized {
        /// Address that attempted the change
        caller: Address,
    },

    /// Malformed proof artifact file.
    #[error("invalid proof artifact: {0}")]
    Artifact(String),
}

/// Result type alias for gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
