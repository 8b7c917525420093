//! Proof artifact files.
//!
//! The proving pipeline upstream of the gate writes a JSON artifact
//! `{ "proof": "0x…", "journal": "0x…" }` with hex-encoded byte strings.
//! The gate consumes the decoded bytes through `submit`; this module is
//! the only place that format is known.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// A proof artifact as produced by the proving pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofArtifact {
    /// Hex-encoded proof blob
    pub proof: String,
    /// Hex-encoded journal bytes
    pub journal: String,
}

impl ProofArtifact {
    /// Build an artifact from raw bytes (used by hosts and tests).
    pub fn new(proof: &[u8], journal: &[u8]) -> Self {
        Self {
            proof: format!("0x{}", hex::encode(proof)),
            journal: format!("0x{}", hex::encode(journal)),
        }
    }

    /// Parse an artifact from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GateError::Artifact(e.to_string()))
    }

    /// Read and parse an artifact file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| GateError::Artifact(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Serialize to the JSON form the pipeline writes.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("artifact serialization is infallible")
    }

    /// Decoded proof bytes.
    pub fn proof_bytes(&self) -> Result<Vec<u8>> {
        decode_hex(&self.proof, "proof")
    }

    /// Decoded journal bytes.
    pub fn journal_bytes(&self) -> Result<Vec<u8>> {
        decode_hex(&self.journal, "journal")
    }
}

/// Decode a hex field, tolerating an optional `0x` prefix.
fn decode_hex(field: &str, name: &str) -> Result<Vec<u8>> {
    let stripped = field.strip_prefix("0x").unwrap_or(field);
    hex::decode(stripped).map_err(|e| GateError::Artifact(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_round_trip() {
        let artifact = ProofArtifact::new(&[0xde, 0xad], &[0xbe, 0xef]);
        let parsed = ProofArtifact::from_json(&artifact.to_json()).unwrap();
        assert_eq!(parsed.proof_bytes().unwrap(), vec![0xde, 0xad]);
        assert_eq!(parsed.journal_bytes().unwrap(), vec![0xbe, 0xef]);
    }

    #[test]
    fn test_accepts_unprefixed_hex() {
        let artifact = ProofArtifact::from_json(r#"{"proof":"dead","journal":"beef"}"#).unwrap();
        assert_eq!(artifact.proof_bytes().unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ProofArtifact::from_json("{not json");
        assert!(matches!(result, Err(GateError::Artifact(_))));
    }

    #[test]
    fn test_rejects_non_hex_payload() {
        let artifact = ProofArtifact::from_json(r#"{"proof":"0xzz","journal":""}"#).unwrap();
        assert!(matches!(
            artifact.proof_bytes(),
            Err(GateError::Artifact(_))
        ));
    }

    #[test]
    fn test_from_path_reads_pipeline_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let artifact = ProofArtifact::new(b"proof-bytes", b"journal-bytes");
        file.write_all(artifact.to_json().as_bytes()).unwrap();

        let loaded = ProofArtifact::from_path(file.path()).unwrap();
        assert_eq!(loaded, artifact);
        assert_eq!(loaded.journal_bytes().unwrap(), b"journal-bytes");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = ProofArtifact::from_path(Path::new("/nonexistent/proof.json"));
        assert!(matches!(result, Err(GateError::Artifact(_))));
    }
}
