//! Rental contract generation engine.
//!
//! Takes a validated [`ContractData`] record and produces a complete
//! Spanish rental agreement: legal framing resolved per contract
//! category, the fixed clause list composed in statutory order, the
//! document assembled and rendered, and the whole thing fingerprinted
//! over its structured input so any stored copy can be re-verified
//! later.
//!
//! ```no_run
//! use contract_engine::ContractEngine;
//! # fn load() -> contract_types::ContractData { unimplemented!() }
//!
//! let engine = ContractEngine::new();
//! let contract = engine.generate(&load()).expect("generation failed");
//! println!("{} -> {}", contract.id, contract.content_hash);
//! ```

pub mod calendar;
pub mod clauses;
pub mod document;
pub mod engine;
pub mod expenses;
pub mod format;
pub mod jurisdiction;
pub mod validate;

#[cfg(test)]
pub(crate) mod testdata;

pub use contract_types::{ContractData, GeneratedContract, GenerationWarning};
pub use engine::{generate, parse_contract_kind, ContractEngine};
pub use jurisdiction::{Jurisdiction, LegalContext};

/// Errors surfaced by contract generation.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Input rejected before any rendering happened. `field` names the
    /// offending input in dotted-path form, e.g. `terms.iban`.
    #[error("validation failed for `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("unsupported contract type: {0}")]
    UnsupportedContractType(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn validation(field: &str, reason: impl Into<String>) -> ContractError {
    ContractError::Validation {
        field: field.to_string(),
        reason: reason.into(),
    }
}
