use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

/// A verification commitment binds a gate event to the principal and the
/// attested value that justified it.
///
/// This structure is signed off-chain and checked by the host, so the
/// sequence of gate decisions can be audited after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCommitment {
    pub principal: Address,
    pub value: String,
    pub timestamp: u64,
    pub sequence: u64,
}

impl VerificationCommitment {
    /// Create a new commitment.
    pub fn new(principal: Address, value: String, timestamp: u64, sequence: u64) -> Self {
        Self {
            principal,
            value,
            timestamp,
            sequence,
        }
    }

    /// Encode the commitment to bytes for signing (matching Solidity abi.encodePacked).
    ///
    /// Format: (address, bytes(value), uint64, uint64)
    pub fn to_signing_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(20 + self.value.len() + 8 + 8);
        bytes.extend_from_slice(self.principal.as_bytes());
        bytes.extend_from_slice(self.value.as_bytes());
        bytes.extend_from_slice(&self.timestamp.to_be_bytes());
        bytes.extend_from_slice(&self.sequence.to_be_bytes());
        bytes
    }

    /// Compute the Keccak256 hash of the commitment.
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        hasher.update(&self.to_signing_bytes());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}
