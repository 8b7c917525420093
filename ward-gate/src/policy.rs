//! Allow/block decision policies.
//!
//! The gate combines three signals: whether the principal holds a fresh
//! verification, the reputation score derived from the attested value,
//! and an externally computed risk score. How the signals combine is a
//! pluggable strategy behind [`DecisionPolicy`].

use serde::{Deserialize, Serialize};

/// Outcome of a gate decision. Recomputed per invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Proceed with the protected action
    Allow,
    /// Abort the protected action
    Block,
    /// Hold the action for manual review
    RequiresReview,
}

/// Default risk threshold on the 0-100 scale.
pub const DEFAULT_RISK_THRESHOLD: u8 = 80;

/// Pluggable decision strategy.
pub trait DecisionPolicy {
    /// Combine the signals into a [`Decision`].
    fn decide(&self, verified: bool, reputation: u8, risk: u8, threshold: u8) -> Decision;
}

/// Baseline policy: block on risk alone.
///
/// An unverified principal is blocked, a risk score strictly above the
/// threshold is blocked regardless of reputation, everything else is
/// allowed. Reputation never enters the baseline decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskThresholdPolicy;

impl DecisionPolicy for RiskThresholdPolicy {
    fn decide(&self, verified: bool, _reputation: u8, risk: u8, threshold: u8) -> Decision {
        if !verified {
            return Decision::Block;
        }
        if risk > threshold {
            return Decision::Block;
        }
        Decision::Allow
    }
}

/// Blended policy: high reputation tempers a risk block into review.
///
/// Opt-in strategy; [`RiskThresholdPolicy`] stays the default, so hosts
/// choose explicitly when reputation should soften a risk block.
#[derive(Debug, Clone, Copy)]
pub struct BlendedPolicy {
    /// Minimum reputation that downgrades a risk block to review
    pub review_floor: u8,
}

impl Default for BlendedPolicy {
    fn default() -> Self {
        Self { review_floor: 75 }
    }
}

impl DecisionPolicy for BlendedPolicy {
    fn decide(&self, verified: bool, reputation: u8, risk: u8, threshold: u8) -> Decision {
        if !verified {
            return Decision::Block;
        }
        if risk > threshold {
            if reputation >= self.review_floor {
                return Decision::RequiresReview;
            }
            return Decision::Block;
        }
        Decision::Allow
    }
}
