//! Proof verifier capability.
//!
//! The gate consumes succinct-proof verification as a black box behind
//! this trait. Production deployments plug in the RISC Zero receipt
//! verifier from `ward-zk`; tests plug in stubs.

use ethers_core::types::H256;
use thiserror::Error;

/// Failure reported by a proof verifier backend, with the backend's
/// reason carried verbatim.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct VerifierFailure(pub String);

/// Verifies succinct proofs of attested web requests.
///
/// `journal_digest` is the SHA-256 digest of the raw journal bytes,
/// computed by the gate itself; implementations must bind the proof to
/// exactly that digest. Verification is decided once per call; the gate
/// never retries.
pub trait ProofVerifier {
    /// Verify `proof` against the guest program `program_id` and the
    /// journal digest.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierFailure`] when the proof does not verify, is
    /// malformed, or is bound to a different journal.
    fn verify(&self, proof: &[u8], program_id: H256, journal_digest: H256)
        -> Result<(), VerifierFailure>;
}
