//! Content fingerprint over the structured contract input.
//!
//! The hash covers the canonical serialized `ContractData`, never the
//! rendered markup. Two generations from identical structured data share
//! a fingerprint even when presentation details change between releases.

use sha2::{Digest, Sha256};

use crate::types::ContractData;

/// Canonical serialized form of the input: compact JSON in declaration
/// field order, amounts as strings.
pub fn canonical_json(data: &ContractData) -> Result<String, serde_json::Error> {
    serde_json::to_string(data)
}

/// SHA-256 over the canonical serialized input, lowercase hex.
pub fn content_hash(data: &ContractData) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(data)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Check a stored fingerprint against the input it claims to cover.
pub fn verify(data: &ContractData, expected: &str) -> Result<bool, serde_json::Error> {
    Ok(content_hash(data)? == expected)
}
