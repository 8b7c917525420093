//! Gate events.
//!
//! Every successful verification and every allowed action appends a typed
//! event to the gate's in-memory log, in emission order, with a monotone
//! sequence number (the library host's analogue of a block number). Events
//! are also mirrored to `tracing`.

use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use ward_core::VerificationCommitment;

use crate::policy::Decision;

/// Emitted when a principal's proof passes constraint validation and
/// proof verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedEvent {
    /// Principal whose verification record was written
    pub principal: Address,
    /// Attested value extracted from the journal
    pub value: String,
    /// Journal attestation timestamp (seconds since epoch)
    pub timestamp: u64,
    /// Monotone sequence number assigned by the gate
    pub sequence: u64,
}

impl VerifiedEvent {
    /// Keccak-hashable commitment binding this event for off-chain signing.
    pub fn commitment(&self) -> VerificationCommitment {
        VerificationCommitment::new(
            self.principal,
            self.value.clone(),
            self.timestamp,
            self.sequence,
        )
    }
}

/// Emitted when a protected action is evaluated and allowed to proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Principal that invoked the protected action
    pub principal: Address,
    /// Reputation score derived from the stored attested value
    pub reputation_score: u8,
    /// Externally supplied risk score
    pub risk_score: u8,
    /// Policy outcome
    pub outcome: Decision,
    /// Monotone sequence number assigned by the gate
    pub sequence: u64,
}

/// Union of gate events, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    Verified(VerifiedEvent),
    Action(ActionEvent),
}

impl GateEvent {
    /// Sequence number of the wrapped event.
    pub fn sequence(&self) -> u64 {
        match self {
            GateEvent::Verified(e) => e.sequence,
            GateEvent::Action(e) => e.sequence,
        }
    }
}
