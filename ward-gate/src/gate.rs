//! Action gate — the main public API.
//!
//! Orchestrates journal decoding, constraint validation, proof
//! verification, the verification cache and the decision policy, in a
//! fixed cheap-check-first order: every deterministic field check runs
//! before the expensive proof verifier, and nothing is written until the
//! verifier has accepted.
//!
//! # Example
//!
//! ```rust
//! use ethers_core::types::{Address, H256};
//! use ward_core::ExpectedConfig;
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
//! let operator = Address::repeat_byte(0x01);
//! let mut gate = ActionGate::new(expected, operator, AcceptAll);
//!
//! let principal = Address::repeat_byte(0xaa);
//! assert!(!gate.is_verified(principal, 0));
//! assert_eq!(gate.score_of(principal), 0);
//! ```

use std::time::Duration;

use ethers_core::types::Address;

use ward_core::{
    journal_digest, reputation, validate, ExpectedConfig, ProofJournal, WardCoreError,
};

use crate::artifact::ProofArtifact;
use crate::cache::VerificationCache;
use crate::config::GateSettings;
use crate::error::{GateError, Result};
use crate::events::{ActionEvent, GateEvent, VerifiedEvent};
use crate::policy::{Decision, DecisionPolicy, RiskThresholdPolicy};
use crate::verifier::ProofVerifier;

/// Proof material accompanying a submission: raw journal bytes and the
/// proof blob, exactly as the proving pipeline emitted them.
#[derive(Debug, Clone)]
pub struct ProofSubmission {
    pub journal: Vec<u8>,
    pub proof: Vec<u8>,
}

impl TryFrom<&ProofArtifact> for ProofSubmission {
    type Error = GateError;

    fn try_from(artifact: &ProofArtifact) -> Result<Self> {
        Ok(Self {
            journal: artifact.journal_bytes()?,
            proof: artifact.proof_bytes()?,
        })
    }
}

/// A request to run a protected action.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// Principal invoking the action
    pub principal: Address,
    /// Fresh proof material; may be omitted when the principal expects a
    /// fresh verification record
    pub submission: Option<ProofSubmission>,
    /// Externally computed risk signal (0-100), e.g. from an inference
    /// proof; the gate treats it as opaque
    pub risk_score: u8,
}

/// Receipt returned when a protected action is allowed to proceed.
#[derive(Debug, Clone)]
pub struct ActionReceipt {
    pub principal: Address,
    pub reputation_score: u8,
    pub risk_score: u8,
    pub outcome: Decision,
    pub sequence: u64,
}

/// The gate protecting a sensitive action behind attested web data.
///
/// Holds the immutable trust root, the verification cache, the proof
/// verifier capability and the decision policy. Mutating entry points
/// take `&mut self`, so the host serializes writes per gate; wrap in a
/// `Mutex` for concurrent hosts.
pub struct ActionGate<V: ProofVerifier> {
    expected: ExpectedConfig,
    settings: GateSettings,
    cache: VerificationCache,
    verifier: V,
    policy: Box<dyn DecisionPolicy + Send + Sync>,
    events: Vec<GateEvent>,
    sequence: u64,
}

impl<V: ProofVerifier> ActionGate<V> {
    /// Create a gate with the baseline risk-threshold policy and default
    /// cache settings.
    pub fn new(expected: ExpectedConfig, operator: Address, verifier: V) -> Self {
        Self::with_policy(expected, operator, verifier, Box::new(RiskThresholdPolicy))
    }

    /// Create a gate with an explicit decision policy.
    pub fn with_policy(
        expected: ExpectedConfig,
        operator: Address,
        verifier: V,
        policy: Box<dyn DecisionPolicy + Send + Sync>,
    ) -> Self {
        Self {
            expected,
            settings: GateSettings::new(operator),
            cache: VerificationCache::new(),
            verifier,
            policy,
            events: Vec::new(),
            sequence: 0,
        }
    }

    /// Submit proof material for a principal.
    ///
    /// Runs the full validate-then-verify sequence:
    /// 1. decode the journal (cheap, deterministic)
    /// 2. constraint-validate the decoded fields against the trust root
    /// 3. digest the raw journal bytes and call the proof verifier
    /// 4. record the verification and store the attested value
    ///
    /// No state is mutated on any failure path; the verifier is never
    /// reached when a constraint fails.
    ///
    /// # Errors
    ///
    /// [`GateError::Core`] for decode/constraint failures,
    /// [`GateError::ProofVerificationFailed`] when the verifier rejects.
    pub fn submit(
        &mut self,
        principal: Address,
        journal_bytes: &[u8],
        proof_bytes: &[u8],
        now: u64,
    ) -> Result<VerifiedEvent> {
        let journal = ProofJournal::decode(journal_bytes)?;
        validate(&journal, &self.expected).map_err(WardCoreError::Constraint)?;

        let digest = journal_digest(journal_bytes);
        self.verifier
            .verify(proof_bytes, self.expected.program_id, digest)
            .map_err(|e| GateError::ProofVerificationFailed(e.to_string()))?;

        self.cache
            .record_verified(principal, now, journal.value.clone());

        let event = VerifiedEvent {
            principal,
            value: journal.value,
            timestamp: journal.timestamp,
            sequence: self.next_sequence(),
        };
        tracing::info!(
            principal = ?principal,
            value = %event.value,
            sequence = event.sequence,
            "proof verified"
        );
        self.events.push(GateEvent::Verified(event.clone()));
        Ok(event)
    }

    /// Evaluate a protected action.
    ///
    /// A fresh verification record skips validation and proof verification
    /// entirely. A stale or missing record requires a submission; without
    /// one the request fails with [`GateError::ExpiredCacheMiss`] and the
    /// caller re-validates.
    ///
    /// # Errors
    ///
    /// Everything `submit` can return, plus
    /// [`GateError::ActionBlocked`] when the decision policy blocks.
    pub fn execute(&mut self, request: ActionRequest, now: u64) -> Result<ActionReceipt> {
        let ActionRequest {
            principal,
            submission,
            risk_score,
        } = request;

        if !self.cache.is_fresh(principal, now) {
            match submission {
                Some(s) => {
                    self.submit(principal, &s.journal, &s.proof, now)?;
                }
                None => return Err(GateError::ExpiredCacheMiss { principal }),
            }
        }

        let reputation_score = self.score_of(principal);
        let outcome = self.policy.decide(
            true,
            reputation_score,
            risk_score,
            self.settings.risk_threshold(),
        );

        if outcome == Decision::Block {
            tracing::warn!(
                principal = ?principal,
                risk_score,
                reputation_score,
                "action blocked"
            );
            return Err(GateError::ActionBlocked { risk_score });
        }

        let event = ActionEvent {
            principal,
            reputation_score,
            risk_score,
            outcome,
            sequence: self.next_sequence(),
        };
        tracing::info!(
            principal = ?principal,
            reputation_score,
            risk_score,
            outcome = ?outcome,
            sequence = event.sequence,
            "action evaluated"
        );
        self.events.push(GateEvent::Action(event.clone()));

        Ok(ActionReceipt {
            principal,
            reputation_score,
            risk_score,
            outcome,
            sequence: event.sequence,
        })
    }

    /// Reputation score for a principal: 0 when no verification record
    /// exists, otherwise the tier of the stored attested value (fresh or
    /// not).
    pub fn score_of(&self, principal: Address) -> u8 {
        match self.cache.stored_value(principal) {
            Some(value) => reputation::score(value),
            None => 0,
        }
    }

    /// Whether the principal holds a fresh verification record.
    pub fn is_verified(&self, principal: Address, now: u64) -> bool {
        self.cache.is_fresh(principal, now)
    }

    /// Remaining freshness of the principal's record (zero when absent or
    /// expired).
    pub fn time_until_expiry(&self, principal: Address, now: u64) -> Duration {
        self.cache.time_until_expiry(principal, now)
    }

    /// Events emitted so far, in emission order.
    pub fn events(&self) -> &[GateEvent] {
        &self.events
    }

    /// The immutable trust root.
    pub fn expected(&self) -> &ExpectedConfig {
        &self.expected
    }

    /// Current validity period in seconds.
    pub fn validity_period(&self) -> u64 {
        self.cache.validity_period()
    }

    /// Current risk threshold.
    pub fn risk_threshold(&self) -> u8 {
        self.settings.risk_threshold()
    }

    /// Change the validity period. Operator only.
    ///
    /// Existing records are not rewritten; their freshness changes
    /// immediately because it is evaluated at query time.
    pub fn set_validity_period(&mut self, caller: Address, period_secs: u64) -> Result<()> {
        self.settings.authorize(caller)?;
        self.cache.set_validity_period(period_secs);
        tracing::info!(period_secs, "validity period changed");
        Ok(())
    }

    /// Change the risk threshold. Operator only.
    pub fn set_risk_threshold(&mut self, caller: Address, threshold: u8) -> Result<()> {
        self.settings.authorize(caller)?;
        self.settings.set_risk_threshold(threshold);
        tracing::info!(threshold, "risk threshold changed");
        Ok(())
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }
}
