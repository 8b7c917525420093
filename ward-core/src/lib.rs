//! # WARD Core
//!
//! **Layer 0: Validation Core for TLS-Notarized Web Attestations**
//!
//! This crate implements the pure layer of the WARD protocol. It decodes
//! the public-input journal accompanying a succinct proof of a
//! TLS-notarized web request, validates the decoded fields against an
//! expected trust root, and scores attested balances into reputation
//! tiers.
//!
//! ## Features
//!
//! - **Deterministic**: same journal bytes → same digest, same verdict
//! - **Minimal**: no network I/O, no async, focused on validation
//! - **Cheap-check-first**: everything in this crate runs before any
//!   proof verifier is invoked
//!
//! ## Quick Start
//!
//! ```rust
//! use ethers_core::types::H256;
//! use ward_core::{validate, ExpectedConfig, ProofJournal};
//!
//! let expected = ExpectedConfig {
//!     notary_fingerprint: H256::repeat_byte(0x11),
//!     queries_hash: H256::repeat_byte(0x22),
//!     url_prefix: "https://api.etherscan.io/api".to_string(),
//!     program_id: H256::repeat_byte(0x33),
//! };
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
//! assert!(validate(&journal, &expected).is_ok());
//! assert_eq!(ward_core::reputation::score(&journal.value), 75);
//! ```

pub mod commitment;
pub mod constraints;
pub mod error;
pub mod journal;
pub mod reputation;

// Re-export main types for convenience
pub use commitment::VerificationCommitment;
pub use constraints::{validate, ExpectedConfig, EXPECTED_METHOD};
pub use error::{ConstraintViolation, Result, WardCoreError};
pub use journal::{journal_digest, ProofJournal};
