//! Engine entry point: validate, resolve, assemble, fingerprint.

use chrono::Utc;
use contract_types::{fingerprint, ContractData, ContractKind, GeneratedContract};
use uuid::Uuid;

use crate::document::ContractDocument;
use crate::jurisdiction::Jurisdiction;
use crate::{validate, ContractError};

/// Stateless generation engine. Every call is hermetic, so one instance
/// may be shared across threads freely.
#[derive(Debug, Clone)]
pub struct ContractEngine {
    jurisdiction: Jurisdiction,
}

impl ContractEngine {
    /// Engine over the default Spanish profile.
    pub fn new() -> Self {
        Self {
            jurisdiction: Jurisdiction::spain(),
        }
    }

    pub fn with_jurisdiction(jurisdiction: Jurisdiction) -> Self {
        Self { jurisdiction }
    }

    /// Validate the input and produce the full contract record.
    ///
    /// The input is never mutated and nothing is retried: the call either
    /// returns a complete [`GeneratedContract`] or fails before any
    /// document text exists. Spelled-amount ceilings surface as warnings
    /// on the result, not as errors.
    pub fn generate(&self, data: &ContractData) -> Result<GeneratedContract, ContractError> {
        tracing::debug!(kind = %data.terms.kind, "generating contract");

        validate::validate(data)?;

        let legal = self.jurisdiction.resolve(data.terms.kind);
        let (document, warnings) = ContractDocument::assemble(data, &legal, &self.jurisdiction);
        let body_html = document.to_html();

        // The fingerprint covers the canonical input, never the markup.
        let source_json = fingerprint::canonical_json(data)?;
        let content_hash = fingerprint::content_hash(data)?;

        for warning in &warnings {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }

        Ok(GeneratedContract {
            id: new_contract_id(),
            body_html,
            source_json,
            data: data.clone(),
            generated_at: Utc::now().to_rfc3339(),
            content_hash,
            warnings,
        })
    }
}

impl Default for ContractEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one contract under the default jurisdiction.
pub fn generate(data: &ContractData) -> Result<GeneratedContract, ContractError> {
    ContractEngine::new().generate(data)
}

/// Map a wire category code to its enum. Unknown codes fail instead of
/// falling back to a default category, since a silent fallback would
/// change binding legal text.
pub fn parse_contract_kind(code: &str) -> Result<ContractKind, ContractError> {
    ContractKind::parse_code(code)
        .ok_or_else(|| ContractError::UnsupportedContractType(code.to_string()))
}

/// Unix millis plus a short random suffix.
fn new_contract_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ctr-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}
