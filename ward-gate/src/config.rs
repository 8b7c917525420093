//! Runtime gate settings.
//!
//! The trust root ([`ward_core::ExpectedConfig`]) is immutable after
//! construction. The two runtime knobs (validity period and risk
//! threshold) may change, but only through the operator fixed at
//! construction; there are no open setters.

use ethers_core::types::Address;

use crate::error::{GateError, Result};
use crate::policy::DEFAULT_RISK_THRESHOLD;

/// Mutable gate settings guarded by an operator capability.
#[derive(Debug, Clone)]
pub struct GateSettings {
    operator: Address,
    risk_threshold: u8,
}

impl GateSettings {
    /// Create settings with the default risk threshold.
    pub fn new(operator: Address) -> Self {
        Self {
            operator,
            risk_threshold: DEFAULT_RISK_THRESHOLD,
        }
    }

    /// The only address allowed to change runtime settings.
    pub fn operator(&self) -> Address {
        self.operator
    }

    /// Current risk threshold on the 0-100 scale.
    pub fn risk_threshold(&self) -> u8 {
        self.risk_threshold
    }

    /// Check the caller against the operator capability.
    pub(crate) fn authorize(&self, caller: Address) -> Result<()> {
        if caller != self.operator {
            return Err(GateError::Unauthorized { caller });
        }
        Ok(())
    }

    pub(crate) fn set_risk_threshold(&mut self, threshold: u8) {
        self.risk_threshold = threshold;
    }
}
