//! Fixtures shared by the unit tests.

use chrono::NaiveDate;
use contract_types::{
    ContractData, ContractKind, ContractTerms, DocumentIdKind, EnergyRating, IncludedUtilities,
    IndexationIndex, InventoryItem, ItemCondition, PaymentMethod, PersonData, PropertyData,
};
use rust_decimal::Decimal;

pub(crate) fn person(name: &str, id: &str) -> PersonData {
    PersonData {
        full_name: name.to_string(),
        document_id: id.to_string(),
        document_kind: DocumentIdKind::NationalId,
        address: "Calle Mayor 1, 2.º A".to_string(),
        city: "Madrid".to_string(),
        postal_code: "28013".to_string(),
        email: "parte@example.com".to_string(),
        phone: "600000000".to_string(),
    }
}

pub(crate) fn property() -> PropertyData {
    PropertyData {
        address: "Calle de Alcalá 200, 3.º B".to_string(),
        city: "Madrid".to_string(),
        postal_code: "28028".to_string(),
        region: "Comunidad de Madrid".to_string(),
        cadastral_reference: Some("9872023VH5797S0001WX".to_string()),
        floor_area_m2: 78.5,
        bedrooms: 2,
        bathrooms: 1,
        floor: Some("3".to_string()),
        door: Some("B".to_string()),
        has_garage: false,
        has_storage_room: true,
        furnished: true,
        energy_rating: Some(EnergyRating::D),
        habitability_certificate: Some(true),
    }
}

/// Twelve months of standard residence at 900.00 a month, bank transfer.
pub(crate) fn terms() -> ContractTerms {
    ContractTerms {
        kind: ContractKind::StandardResidence,
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        duration_months: 12,
        monthly_rent: Decimal::new(90000, 2),
        deposit_months: 1,
        additional_guarantee: None,
        payment_day: 5,
        payment_method: PaymentMethod::BankTransfer,
        iban: Some("ES9121000418450200051332".to_string()),
        utilities: IncludedUtilities::default(),
        indexation: IndexationIndex::Ipc,
        pets_allowed: false,
        subletting_allowed: false,
        additional_clauses: vec![],
    }
}

pub(crate) fn contract() -> ContractData {
    ContractData {
        landlord: person("María García López", "12345678Z"),
        tenant: person("John Smith", "X1234567L"),
        property: property(),
        terms: terms(),
        inventory: None,
        digital_signature: false,
    }
}

pub(crate) fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            label: "Sofá de tres plazas".to_string(),
            quantity: 1,
            condition: ItemCondition::Good,
            notes: None,
        },
        InventoryItem {
            label: "Mesa de comedor".to_string(),
            quantity: 1,
            condition: ItemCondition::New,
            notes: Some("Madera de roble".to_string()),
        },
        InventoryItem {
            label: "Sillas".to_string(),
            quantity: 4,
            condition: ItemCondition::Fair,
            notes: None,
        },
    ]
}
