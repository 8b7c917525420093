//! Per-principal verification records with time-bounded freshness.

use std::num::NonZeroUsize;
use std::time::Duration;

use ethers_core::types::Address;
use lru::LruCache;

/// Default cache capacity (number of principals tracked).
const DEFAULT_CAPACITY: usize = 10_000;

/// Default validity period of a successful verification (24 hours).
pub const DEFAULT_VALIDITY_PERIOD_SECS: u64 = 24 * 60 * 60;

/// A verification record for a single principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    /// Wall-clock seconds when the last full validation succeeded
    pub last_verified_at: u64,
    /// Attested value stored for later scoring
    pub value: String,
}

/// Time-bounded store of verified principals.
///
/// One record per principal. [`record_verified`](Self::record_verified) is
/// the only mutator and resolves races last-verified-wins: a write stamped
/// older than the stored record is a no-op. Freshness is always computed
/// against the validity period current at query time, so lowering the
/// period can immediately expire records.
///
/// Entries live in an LRU keyed by verification recency, so capacity
/// bounds memory and the least-recently-verified principal is evicted
/// first.
pub struct VerificationCache {
    records: LruCache<Address, VerificationRecord>,
    validity_period: u64,
}

impl VerificationCache {
    /// Create a cache with default capacity and the 24 h validity period.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache with the specified principal capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            records: LruCache::new(cap),
            validity_period: DEFAULT_VALIDITY_PERIOD_SECS,
        }
    }

    /// Current validity period in seconds.
    pub fn validity_period(&self) -> u64 {
        self.validity_period
    }

    /// Replace the validity period. Does not rewrite stored records;
    /// freshness of existing records changes immediately because it is
    /// evaluated at query time.
    pub(crate) fn set_validity_period(&mut self, secs: u64) {
        self.validity_period = secs;
    }

    /// True iff a record exists and `now - last_verified_at` is strictly
    /// inside the validity period.
    pub fn is_fresh(&self, principal: Address, now: u64) -> bool {
        match self.records.peek(&principal) {
            Some(record) => now.saturating_sub(record.last_verified_at) < self.validity_period,
            None => false,
        }
    }

    /// Store a successful verification for `principal` stamped `now`.
    ///
    /// Returns `false` (and changes nothing) when a record stamped strictly
    /// later already exists; the racing writer loses.
    pub fn record_verified(&mut self, principal: Address, now: u64, value: String) -> bool {
        if let Some(existing) = self.records.peek(&principal) {
            if existing.last_verified_at > now {
                return false;
            }
        }
        self.records.put(
            principal,
            VerificationRecord {
                last_verified_at: now,
                value,
            },
        );
        true
    }

    /// Remaining time before the principal's record expires.
    ///
    /// Zero when no record exists or the record has already expired.
    pub fn time_until_expiry(&self, principal: Address, now: u64) -> Duration {
        match self.records.peek(&principal) {
            Some(record) => {
                let expires_at = record.last_verified_at.saturating_add(self.validity_period);
                Duration::from_secs(expires_at.saturating_sub(now))
            }
            None => Duration::ZERO,
        }
    }

    /// Stored attested value for the principal, fresh or not.
    pub fn stored_value(&self, principal: Address) -> Option<&str> {
        self.records.peek(&principal).map(|r| r.value.as_str())
    }

    /// Number of principals with a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no principal has a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for VerificationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Address {
        Address::repeat_byte(0xaa)
    }

    #[test]
    fn test_unknown_principal_is_not_fresh() {
        let cache = VerificationCache::new();
        assert!(!cache.is_fresh(principal(), 1000));
        assert_eq!(cache.time_until_expiry(principal(), 1000), Duration::ZERO);
        assert!(cache.stored_value(principal()).is_none());
    }

    #[test]
    fn test_freshness_boundary_is_exclusive() {
        let mut cache = VerificationCache::new();
        let t0 = 1_000_000;
        cache.record_verified(principal(), t0, "1".to_string());

        let period = cache.validity_period();
        assert!(cache.is_fresh(principal(), t0 + period - 1));
        assert!(!cache.is_fresh(principal(), t0 + period));
    }

    #[test]
    fn test_record_overwrites_with_newer_stamp() {
        let mut cache = VerificationCache::new();
        assert!(cache.record_verified(principal(), 100, "1".to_string()));
        assert!(cache.record_verified(principal(), 200, "2".to_string()));
        assert_eq!(cache.stored_value(principal()), Some("2"));
    }

    #[test]
    fn test_stale_writer_loses_race() {
        let mut cache = VerificationCache::new();
        assert!(cache.record_verified(principal(), 200, "newer".to_string()));
        // A submission verified at t=100 arrives after the t=200 record
        assert!(!cache.record_verified(principal(), 100, "older".to_string()));
        assert_eq!(cache.stored_value(principal()), Some("newer"));

        let record_stamp = {
            let fresh_window = cache.time_until_expiry(principal(), 200);
            fresh_window.as_secs()
        };
        assert_eq!(record_stamp, cache.validity_period());
    }

    #[test]
    fn test_time_until_expiry_counts_down() {
        let mut cache = VerificationCache::new();
        let t0 = 500;
        cache.record_verified(principal(), t0, "1".to_string());
        let period = cache.validity_period();

        assert_eq!(
            cache.time_until_expiry(principal(), t0),
            Duration::from_secs(period)
        );
        assert_eq!(
            cache.time_until_expiry(principal(), t0 + 100),
            Duration::from_secs(period - 100)
        );
        assert_eq!(
            cache.time_until_expiry(principal(), t0 + period + 1),
            Duration::ZERO
        );
    }

    #[test]
    fn test_shrinking_period_expires_immediately() {
        let mut cache = VerificationCache::new();
        let t0 = 1000;
        cache.record_verified(principal(), t0, "1".to_string());
        assert!(cache.is_fresh(principal(), t0 + 3600));

        cache.set_validity_period(60);
        assert!(!cache.is_fresh(principal(), t0 + 3600));
    }

    #[test]
    fn test_capacity_bound_evicts_oldest_verification() {
        let mut cache = VerificationCache::with_capacity(2);
        cache.record_verified(Address::repeat_byte(1), 10, "1".to_string());
        cache.record_verified(Address::repeat_byte(2), 20, "2".to_string());
        cache.record_verified(Address::repeat_byte(3), 30, "3".to_string());

        assert!(cache.stored_value(Address::repeat_byte(1)).is_none());
        assert_eq!(cache.len(), 2);
    }
}
