//! Contract data model shared by the generation engine and its callers.
//!
//! Every record here is treated as immutable once bound into a generation
//! call: the engine reads `ContractData` and returns a fresh
//! `GeneratedContract`, it never writes back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of identity document a contracting party holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentIdKind {
    NationalId,
    ForeignId,
    CorporateId,
    Passport,
}

impl DocumentIdKind {
    /// Abbreviation printed next to the document number.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentIdKind::NationalId => "DNI",
            DocumentIdKind::ForeignId => "NIE",
            DocumentIdKind::CorporateId => "CIF",
            DocumentIdKind::Passport => "Pasaporte",
        }
    }
}

/// Either party to the contract, landlord or tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonData {
    pub full_name: String,
    pub document_id: String,
    pub document_kind: DocumentIdKind,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub email: String,
    pub phone: String,
}

/// Energy-performance certificate letter, A is best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyRating {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyRating {
    pub fn letter(&self) -> char {
        match self {
            EnergyRating::A => 'A',
            EnergyRating::B => 'B',
            EnergyRating::C => 'C',
            EnergyRating::D => 'D',
            EnergyRating::E => 'E',
            EnergyRating::F => 'F',
            EnergyRating::G => 'G',
        }
    }
}

/// The leased unit as described by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyData {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub region: String,
    pub cadastral_reference: Option<String>,
    pub floor_area_m2: f64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub floor: Option<String>,
    pub door: Option<String>,
    pub has_garage: bool,
    pub has_storage_room: bool,
    pub furnished: bool,
    pub energy_rating: Option<EnergyRating>,
    pub habitability_certificate: Option<bool>,
}

/// Contract categories known to the legal rule resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractKind {
    StandardResidence,
    Seasonal,
    SingleRoom,
    Commercial,
}

impl ContractKind {
    /// Wire code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            ContractKind::StandardResidence => "standard-residence",
            ContractKind::Seasonal => "seasonal",
            ContractKind::SingleRoom => "single-room",
            ContractKind::Commercial => "commercial",
        }
    }

    /// Parse a wire code, case-insensitive. Unknown codes return `None`;
    /// callers surface that as an unsupported-type error rather than
    /// falling back to a default category.
    pub fn parse_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "standard-residence" => Some(ContractKind::StandardResidence),
            "seasonal" => Some(ContractKind::Seasonal),
            "single-room" => Some(ContractKind::SingleRoom),
            "commercial" => Some(ContractKind::Commercial),
            _ => None,
        }
    }

    pub fn all() -> [ContractKind; 4] {
        [
            ContractKind::StandardResidence,
            ContractKind::Seasonal,
            ContractKind::SingleRoom,
            ContractKind::Commercial,
        ]
    }
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How the monthly rent is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    BankTransfer,
    DirectDebit,
    Cash,
}

/// Official index family used for the annual rent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexationIndex {
    Ipc,
    Igc,
    Irav,
}

impl IndexationIndex {
    /// Full official name rendered in the indexation clause.
    pub fn full_name(&self) -> &'static str {
        match self {
            IndexationIndex::Ipc => "Índice de Precios de Consumo (IPC)",
            IndexationIndex::Igc => "Índice de Garantía de Competitividad (IGC)",
            IndexationIndex::Irav => {
                "Índice de Referencia para la Actualización Anual de los Arrendamientos de Vivienda (IRAV)"
            }
        }
    }
}

/// Which recurring supplies the monthly rent already covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncludedUtilities {
    pub water: bool,
    pub electricity: bool,
    pub gas: bool,
    pub internet: bool,
    pub community_fees: bool,
}

impl IncludedUtilities {
    /// True when every supply is covered by the rent.
    pub fn all(&self) -> bool {
        self.water && self.electricity && self.gas && self.internet && self.community_fees
    }

    /// True when no supply is covered by the rent.
    pub fn none(&self) -> bool {
        !self.water && !self.electricity && !self.gas && !self.internet && !self.community_fees
    }
}

/// Economic and temporal terms of the lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub kind: ContractKind,
    pub start_date: NaiveDate,
    pub duration_months: u32,
    pub monthly_rent: Decimal,
    /// Statutory deposit, expressed in months of rent.
    pub deposit_months: u32,
    /// Extra guarantee on top of the statutory deposit, in euros.
    pub additional_guarantee: Option<Decimal>,
    /// Day of the month the rent falls due, 1 to 31.
    pub payment_day: u8,
    pub payment_method: PaymentMethod,
    /// Required when `payment_method` is a bank transfer.
    pub iban: Option<String>,
    #[serde(default)]
    pub utilities: IncludedUtilities,
    pub indexation: IndexationIndex,
    pub pets_allowed: bool,
    pub subletting_allowed: bool,
    /// Free-form clause bodies appended after the fixed clause list.
    #[serde(default)]
    pub additional_clauses: Vec<String>,
}

/// Condition of an inventoried item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCondition {
    New,
    Good,
    Fair,
    Poor,
}

impl ItemCondition {
    /// Label rendered in the inventory annex.
    pub fn label(&self) -> &'static str {
        match self {
            ItemCondition::New => "Nuevo",
            ItemCondition::Good => "Buen estado",
            ItemCondition::Fair => "Estado regular",
            ItemCondition::Poor => "Deteriorado",
        }
    }
}

/// One row of the furnished-unit inventory annex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub label: String,
    pub quantity: u32,
    pub condition: ItemCondition,
    pub notes: Option<String>,
}

/// The single input record of a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractData {
    pub landlord: PersonData,
    pub tenant: PersonData,
    pub property: PropertyData,
    pub terms: ContractTerms,
    #[serde(default)]
    pub inventory: Option<Vec<InventoryItem>>,
    /// Set when the caller routes the document through a digital-signature
    /// provider afterwards; adds the electronic-signing note to the closing.
    #[serde(default)]
    pub digital_signature: bool,
}

/// Kinds of non-fatal issues noted during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// An amount at or above the spell-out ceiling was rendered as digits
    /// instead of words.
    SpelledAmountIncomplete,
}

/// A non-fatal issue raised while rendering. The document is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationWarning {
    pub kind: WarningKind,
    /// Input field or derived amount the warning refers to, e.g.
    /// `terms.monthly_rent` or `deposit_amount`.
    pub field: String,
    pub message: String,
}

impl GenerationWarning {
    pub fn spelled_amount_incomplete(field: &str, rendered: &str) -> Self {
        Self {
            kind: WarningKind::SpelledAmountIncomplete,
            field: field.to_string(),
            message: format!(
                "amount {rendered} is at or above the spell-out ceiling and was rendered as digits"
            ),
        }
    }
}

/// Output record of one generation call.
///
/// Created once and never mutated. Persistence and signature binding
/// happen outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContract {
    /// Unix millis plus a random suffix, unique per call.
    pub id: String,
    /// Rendered document body as HTML markup.
    pub body_html: String,
    /// Canonical serialized mirror of the input, for renderers that lay
    /// the document out themselves.
    pub source_json: String,
    /// The originating input, untouched.
    pub data: ContractData,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    /// SHA-256 over the canonical serialized input, never over markup.
    pub content_hash: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<GenerationWarning>,
}
