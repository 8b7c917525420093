//! Proof journal codec.
//!
//! The journal is the public-input record accompanying a succinct proof of
//! a TLS-notarized web request. On the wire it is the ABI tuple
//! `(bytes32 notaryFingerprint, string method, string url,
//! uint256 timestamp, bytes32 queriesHash, string value)` with standard
//! dynamic-type offset/length framing, 32-byte aligned.

use ethabi::{ParamType, Token};
use ethers_core::types::H256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, WardCoreError};

/// Decoded public inputs of a web-attestation proof.
///
/// Immutable once decoded. A journal must pass
/// [`validate`](crate::constraints::validate) before it is allowed
/// anywhere near a proof verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJournal {
    /// 32-byte identifier of the attesting notary key
    pub notary_fingerprint: H256,
    /// HTTP method of the attested request
    pub method: String,
    /// Full attested request URL
    pub url: String,
    /// Seconds since epoch at attestation time
    pub timestamp: u64,
    /// Commitment to the data-extraction query set applied to the response
    pub queries_hash: H256,
    /// Extracted field rendered as a decimal numeral (wei in production)
    pub value: String,
}

/// ABI schema of the journal tuple, in wire order.
fn journal_schema() -> [ParamType; 6] {
    [
        ParamType::FixedBytes(32),
        ParamType::String,
        ParamType::String,
        ParamType::Uint(256),
        ParamType::FixedBytes(32),
        ParamType::String,
    ]
}

impl ProofJournal {
    /// Decode a journal from its ABI tuple encoding.
    ///
    /// # Errors
    ///
    /// Returns [`WardCoreError::Decode`] if the buffer is not a well-formed
    /// tuple or the timestamp does not fit in `u64`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut tokens = ethabi::decode(&journal_schema(), bytes)
            .map_err(|e| WardCoreError::Decode(e.to_string()))?
            .into_iter();

        let notary_fingerprint = take_bytes32(tokens.next(), "notaryFingerprint")?;
        let method = take_string(tokens.next(), "method")?;
        let url = take_string(tokens.next(), "url")?;
        let timestamp = take_u64(tokens.next(), "timestamp")?;
        let queries_hash = take_bytes32(tokens.next(), "queriesHash")?;
        let value = take_string(tokens.next(), "value")?;

        Ok(Self {
            notary_fingerprint,
            method,
            url,
            timestamp,
            queries_hash,
            value,
        })
    }

    /// Encode this journal back to its ABI tuple form.
    ///
    /// Round-trips with [`ProofJournal::decode`]; hosts and tests use this
    /// to build journal fixtures.
    pub fn encode(&self) -> Vec<u8> {
        ethabi::encode(&[
            Token::FixedBytes(self.notary_fingerprint.as_bytes().to_vec()),
            Token::String(self.method.clone()),
            Token::String(self.url.clone()),
            Token::Uint(ethabi::Uint::from(self.timestamp)),
            Token::FixedBytes(self.queries_hash.as_bytes().to_vec()),
            Token::String(self.value.clone()),
        ])
    }
}

/// SHA-256 digest of the raw (undecoded) journal bytes.
///
/// This is the digest a proof verifier binds the journal to. It is always
/// computed here; a digest supplied by a caller is never trusted.
pub fn journal_digest(raw: &[u8]) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    H256::from_slice(&hasher.finalize())
}

fn take_bytes32(token: Option<Token>, field: &str) -> Result<H256> {
    match token {
        Some(Token::FixedBytes(bytes)) if bytes.len() == 32 => Ok(H256::from_slice(&bytes)),
        other => Err(WardCoreError::Decode(format!(
            "expected bytes32 for {field}, got {other:?}"
        ))),
    }
}

fn take_string(token: Option<Token>, field: &str) -> Result<String> {
    match token {
        Some(Token::String(s)) => Ok(s),
        other => Err(WardCoreError::Decode(format!(
            "expected string for {field}, got {other:?}"
        ))),
    }
}

fn take_u64(token: Option<Token>, field: &str) -> Result<u64> {
    match token {
        Some(Token::Uint(value)) => {
            if value > ethabi::Uint::from(u64::MAX) {
                return Err(WardCoreError::Decode(format!(
                    "{field} exceeds u64 range: {value}"
                )));
            }
            Ok(value.as_u64())
        }
        other => Err(WardCoreError::Decode(format!(
            "expected uint256 for {field}, got {other:?}"
        ))),
    }
}
