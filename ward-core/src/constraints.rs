//! Constraint validation for decoded proof journals.
//!
//! Cheap, deterministic field checks that must all pass before the
//! expensive proof verifier runs. Checks are ordered cheapest-first and
//! the first failing rule is returned.

use ethers_core::types::H256;
use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;
use crate::journal::ProofJournal;

/// HTTP method every attested request must use (exact, case-sensitive).
pub const EXPECTED_METHOD: &str = "GET";

/// Trust root for journal validation.
///
/// Fixed at construction and never mutated afterwards; changing any field
/// means redeploying the gate that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedConfig {
    /// Fingerprint of the only notary key whose attestations are accepted
    pub notary_fingerprint: H256,
    /// Commitment to the only data-extraction query set accepted
    pub queries_hash: H256,
    /// Prefix every attested URL must start with, compared byte-for-byte
    pub url_prefix: String,
    /// Identifier of the guest program whose proofs are accepted
    pub program_id: H256,
}

/// Validate a decoded journal against the trust root.
///
/// Pure function, no side effects. Rules, first failure wins:
/// 1. notary fingerprint equality
/// 2. method is exactly `GET`
/// 3. queries hash equality
/// 4. URL starts with the expected prefix (byte-for-byte)
/// 5. extracted value is non-empty
pub fn validate(
    journal: &ProofJournal,
    expected: &ExpectedConfig,
) -> std::result::Result<(), ConstraintViolation> {
    if journal.notary_fingerprint != expected.notary_fingerprint {
        return Err(ConstraintViolation::NotaryMismatch {
            expected: expected.notary_fingerprint,
            actual: journal.notary_fingerprint,
        });
    }

    if journal.method != EXPECTED_METHOD {
        return Err(ConstraintViolation::MethodMismatch {
            actual: journal.method.clone(),
        });
    }

    if journal.queries_hash != expected.queries_hash {
        return Err(ConstraintViolation::QueriesHashMismatch {
            expected: expected.queries_hash,
            actual: journal.queries_hash,
        });
    }

    // starts_with on bytes covers both the length check and the
    // byte-for-byte prefix comparison
    if !journal.url.as_bytes().starts_with(expected.url_prefix.as_bytes()) {
        return Err(ConstraintViolation::UrlMismatch {
            prefix: expected.url_prefix.clone(),
            url: journal.url.clone(),
        });
    }

    if journal.value.is_empty() {
        return Err(ConstraintViolation::EmptyValue);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trust_root() -> ExpectedConfig {
        ExpectedConfig {
            notary_fingerprint: H256::repeat_byte(0x11),
            queries_hash: H256::repeat_byte(0x22),
            url_prefix: "https://api.etherscan.io/api".to_string(),
            program_id: H256::repeat_byte(0x33),
        }
    }

    fn matching_journal() -> ProofJournal {
        ProofJournal {
            notary_fingerprint: H256::repeat_byte(0x11),
            method: "GET".to_string(),
            url: "https://api.etherscan.io/api?module=account&action=balance".to_string(),
            timestamp: 1706720000,
            queries_hash: H256::repeat_byte(0x22),
            value: "5000000000000000000".to_string(),
        }
    }

    #[test]
    fn test_all_fields_matching_passes() {
        assert!(validate(&matching_journal(), &trust_root()).is_ok());
    }

    #[test]
    fn test_notary_mismatch() {
        let mut journal = matching_journal();
        journal.notary_fingerprint = H256::repeat_byte(0xff);
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::NotaryMismatch { .. })
        ));
    }

    #[test]
    fn test_method_mismatch_is_case_sensitive() {
        let mut journal = matching_journal();
        journal.method = "get".to_string();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::MethodMismatch { .. })
        ));

        journal.method = "POST".to_string();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::MethodMismatch { .. })
        ));
    }

    #[test]
    fn test_queries_hash_mismatch() {
        let mut journal = matching_journal();
        journal.queries_hash = H256::zero();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::QueriesHashMismatch { .. })
        ));
    }

    #[test]
    fn test_url_equal_to_prefix_passes() {
        let mut journal = matching_journal();
        journal.url = trust_root().url_prefix;
        assert!(validate(&journal, &trust_root()).is_ok());
    }

    #[test]
    fn test_url_shorter_than_prefix_fails() {
        let mut journal = matching_journal();
        journal.url = "https://api.ether".to_string();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::UrlMismatch { .. })
        ));
    }

    #[test]
    fn test_url_single_differing_byte_fails() {
        let mut journal = matching_journal();
        // One byte off inside the prefix region
        journal.url = "https://api.etherscen.io/api?module=account".to_string();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::UrlMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_value_fails() {
        let mut journal = matching_journal();
        journal.value = String::new();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::EmptyValue)
        ));
    }

    #[test]
    fn test_first_failure_wins_ordering() {
        // Both the notary and the method are wrong; the notary check runs first
        let mut journal = matching_journal();
        journal.notary_fingerprint = H256::zero();
        journal.method = "POST".to_string();
        assert!(matches!(
            validate(&journal, &trust_root()),
            Err(ConstraintViolation::NotaryMismatch { .. })
        ));
    }
}
