pub mod fingerprint;
pub mod types;

pub use types::{
    ContractData, ContractKind, ContractTerms, DocumentIdKind, EnergyRating, GeneratedContract,
    GenerationWarning, IncludedUtilities, IndexationIndex, InventoryItem, ItemCondition,
    PaymentMethod, PersonData, PropertyData, WarningKind,
};
