//! # WARD Gate
//!
//! **Layer 1: Verification Cache and Action Gating**
//!
//! This crate gates a sensitive action (a swap, a transfer, an escrow
//! release) behind two independent facts: a zero-knowledge proof that an
//! external web response was authentically attested via TLS
//! notarization, and an externally supplied risk score. Successful
//! verifications are cached per principal for a validity window so the
//! expensive proof check amortizes across invocations.
//!
//! ## Features
//!
//! - **Cheap-check-first**: journal decoding and constraint validation
//!   always run before the proof verifier
//! - **No mutation on failure**: only a fully successful
//!   validate-then-verify sequence writes the cache
//! - **Pluggable decisions**: risk/reputation combination is a strategy,
//!   not a hard-coded rule
//!
//! ## Quick Start
//!
//! ```rust
//! use ethers_core::types::{Address, H256};
//! use ward_core::{ExpectedConfig, ProofJournal};
//! use ward_gate::{ActionGate, ProofVerifier, VerifierFailure};
//!
//! struct AcceptAll;
//! impl ProofVerifier for AcceptAll {
//!     fn verify(&self, _: &[u8], _: H256, _: H256) -> Result<(), VerifierFailure> {
//!         Ok(())
//!     }
//! }
//!
//! let expected = ExpectedConfig {
//!     notary_fingerprint: H256::repeat_byte(0x11),
//!     queries_hash: H256::repeat_byte(0x22),
//!     url_prefix: "https://api.etherscan.io/api".to_string(),
//!     program_id: H256::repeat_byte(0x33),
//! };
//! let mut gate = ActionGate::new(expected, Address::repeat_byte(0x01), AcceptAll);
//!
//! let journal = ProofJournal {
//!     notary_fingerprint: H256::repeat_byte(0x11),
//!     method: "GET".to_string(),
//!     url: "https://api.etherscan.io/api?module=account".to_string(),
//!     timestamp: 1706720000,
//!     queries_hash: H256::repeat_byte(0x22),
//!     value: "5000000000000000000".to_string(),
//! };
//!
//! let principal = Address::repeat_byte(0xaa);
//! gate.submit(principal, &journal.encode(), b"proof", 1706720100).unwrap();
//! assert!(gate.is_verified(principal, 1706720100));
//! assert_eq!(gate.score_of(principal), 75);
//! ```

pub mod artifact;
pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod gate;
pub mod policy;
pub mod verifier;

// Re-export main types for convenience
pub use artifact::ProofArtifact;
pub use cache::{VerificationCache, VerificationRecord, DEFAULT_VALIDITY_PERIOD_SECS};
pub use config::GateSettings;
pub use error::{GateError, Result};
pub use events::{ActionEvent, GateEvent, VerifiedEvent};
pub use gate::{ActionGate, ActionReceipt, ActionRequest, ProofSubmission};
pub use policy::{
    BlendedPolicy, Decision, DecisionPolicy, RiskThresholdPolicy, DEFAULT_RISK_THRESHOLD,
};
pub use verifier::{ProofVerifier, VerifierFailure};
