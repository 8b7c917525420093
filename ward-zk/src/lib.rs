//! RISC Zero-backed proof verifier for the WARD gate.
//!
//! Proof blobs are bincode-serialized [`Receipt`]s. The adapter checks
//! that the receipt's committed journal digest matches the digest the
//! gate computed from the raw journal bytes, then verifies the receipt
//! against the configured guest image.

use anyhow::Result;
use ethers_core::types::H256;
use risc0_zkvm::sha::Digestible;
use risc0_zkvm::Receipt;
use ward_gate::{ProofVerifier, VerifierFailure};

/// Verifies bincode-serialized RISC Zero receipts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Risc0Verifier;

impl ProofVerifier for Risc0Verifier {
    fn verify(
        &self,
        proof: &[u8],
        program_id: H256,
        journal_digest: H256,
    ) -> std::result::Result<(), VerifierFailure> {
        let receipt: Receipt = bincode::deserialize(proof)
            .map_err(|e| VerifierFailure(format!("receipt deserialization: {e}")))?;

        // The journal the guest committed to must be the exact bytes the
        // gate validated
        let committed = receipt.journal.digest();
        if committed.as_bytes() != journal_digest.as_bytes() {
            return Err(VerifierFailure("journal digest mismatch".to_string()));
        }

        receipt
            .verify(program_id.to_fixed_bytes())
            .map_err(|e| VerifierFailure(e.to_string()))
    }
}

/// Verify a receipt directly against a guest image id.
///
/// Convenience for hosts that hold a deserialized receipt already.
pub fn verify_receipt(receipt: &Receipt, program_id: H256) -> Result<()> {
    receipt.verify(program_id.to_fixed_bytes())?;
    Ok(())
}
