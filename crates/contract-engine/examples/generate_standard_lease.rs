//! Example: Generate Spanish rental agreements
//!
//! Builds two complete contracts (a standard residence lease and a
//! furnished seasonal lease with an inventory annex) and writes the
//! rendered HTML to the `output/` directory.
//!
//! Run with:
//!   cargo run --example generate_standard_lease

use std::fs;

use chrono::NaiveDate;
use contract_engine::ContractEngine;
use contract_types::{
    ContractData, ContractKind, ContractTerms, DocumentIdKind, EnergyRating, IncludedUtilities,
    IndexationIndex, InventoryItem, ItemCondition, PaymentMethod, PersonData, PropertyData,
};
use rust_decimal::Decimal;

fn main() {
    let output_dir = std::path::Path::new("output");
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).expect("Failed to create output directory");
    }

    println!("Generating Spanish rental agreements...\n");

    let engine = ContractEngine::new();

    generate_standard_lease(&engine, output_dir);
    generate_seasonal_lease(&engine, output_dir);

    println!("\nAll documents generated successfully!");
    println!("Check the output/ directory for HTML files.");
}

fn generate_standard_lease(engine: &ContractEngine, output_dir: &std::path::Path) {
    println!("1. Generating standard residence lease...");

    let data = ContractData {
        landlord: PersonData {
            full_name: "María García López".to_string(),
            document_id: "12345678Z".to_string(),
            document_kind: DocumentIdKind::NationalId,
            address: "Calle Serrano 45, 1.º A".to_string(),
            city: "Madrid".to_string(),
            postal_code: "28001".to_string(),
            email: "maria.garcia@example.com".to_string(),
            phone: "600123456".to_string(),
        },
        tenant: PersonData {
            full_name: "John Smith".to_string(),
            document_id: "X1234567L".to_string(),
            document_kind: DocumentIdKind::ForeignId,
            address: "Avenida de América 12, 4.º C".to_string(),
            city: "Madrid".to_string(),
            postal_code: "28002".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "611987654".to_string(),
        },
        property: PropertyData {
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
            furnished: false,
            energy_rating: Some(EnergyRating::D),
            habitability_certificate: Some(true),
        },
        terms: ContractTerms {
            kind: ContractKind::StandardResidence,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"),
            duration_months: 12,
            monthly_rent: Decimal::new(95000, 2),
            deposit_months: 1,
            additional_guarantee: Some(Decimal::new(190000, 2)),
            payment_day: 5,
            payment_method: PaymentMethod::BankTransfer,
            iban: Some("ES9121000418450200051332".to_string()),
            utilities: IncludedUtilities {
                community_fees: true,
                ..IncludedUtilities::default()
            },
            indexation: IndexationIndex::Irav,
            pets_allowed: false,
            subletting_allowed: false,
            additional_clauses: vec![
                "El ARRENDATARIO se compromete a contratar un seguro de hogar que cubra \
                 los daños por agua que pudieran afectar a terceros."
                    .to_string(),
            ],
        },
        inventory: None,
        digital_signature: true,
    };

    write_contract(engine, &data, output_dir, "contrato_vivienda_habitual.html");
}

fn generate_seasonal_lease(engine: &ContractEngine, output_dir: &std::path::Path) {
    println!("2. Generating furnished seasonal lease...");

    let mut data = ContractData {
        landlord: PersonData {
            full_name: "Antonio Ruiz Delgado".to_string(),
            document_id: "87654321X".to_string(),
            document_kind: DocumentIdKind::NationalId,
            address: "Paseo Marítimo 8".to_string(),
            city: "Valencia".to_string(),
            postal_code: "46011".to_string(),
            email: "antonio.ruiz@example.com".to_string(),
            phone: "622334455".to_string(),
        },
        tenant: PersonData {
            full_name: "Claire Dubois".to_string(),
            document_id: "19AB45678".to_string(),
            document_kind: DocumentIdKind::Passport,
            address: "12 Rue de la Paix".to_string(),
            city: "Lyon".to_string(),
            postal_code: "69002".to_string(),
            email: "claire.dubois@example.com".to_string(),
            phone: "+33612345678".to_string(),
        },
        property: PropertyData {
            address: "Calle de la Reina 77, 2.º".to_string(),
            city: "Valencia".to_string(),
            postal_code: "46011".to_string(),
            region: "Comunitat Valenciana".to_string(),
            cadastral_reference: None,
            floor_area_m2: 62.0,
            bedrooms: 1,
            bathrooms: 1,
            floor: Some("2".to_string()),
            door: None,
            has_garage: false,
            has_storage_room: false,
            furnished: true,
            energy_rating: Some(EnergyRating::E),
            habitability_certificate: Some(true),
        },
        terms: ContractTerms {
            kind: ContractKind::Seasonal,
            start_date: NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date"),
            duration_months: 6,
            monthly_rent: Decimal::new(120000, 2),
            deposit_months: 2,
            additional_guarantee: None,
            payment_day: 1,
            payment_method: PaymentMethod::DirectDebit,
            iban: None,
            utilities: IncludedUtilities {
                water: true,
                electricity: true,
                gas: false,
                internet: true,
                community_fees: true,
            },
            indexation: IndexationIndex::Ipc,
            pets_allowed: true,
            subletting_allowed: false,
            additional_clauses: vec![],
        },
        inventory: None,
        digital_signature: false,
    };

    data.inventory = Some(vec![
        InventoryItem {
            label: "Sofá cama de dos plazas".to_string(),
            quantity: 1,
            condition: ItemCondition::Good,
            notes: None,
        },
        InventoryItem {
            label: "Mesa de comedor extensible".to_string(),
            quantity: 1,
            condition: ItemCondition::New,
            notes: Some("Incluye dos extensiones".to_string()),
        },
        InventoryItem {
            label: "Sillas de comedor".to_string(),
            quantity: 4,
            condition: ItemCondition::Fair,
            notes: None,
        },
        InventoryItem {
            label: "Lavadora".to_string(),
            quantity: 1,
            condition: ItemCondition::Good,
            notes: Some("Revisada en 2025".to_string()),
        },
    ]);

    write_contract(engine, &data, output_dir, "contrato_temporada.html");
}

fn write_contract(
    engine: &ContractEngine,
    data: &ContractData,
    output_dir: &std::path::Path,
    file_name: &str,
) {
    let contract = engine.generate(data).expect("Generation failed");

    let output_path = output_dir.join(file_name);
    fs::write(&output_path, &contract.body_html).expect("Failed to write HTML");

    println!("   ✓ Generated: {}", output_path.display());
    println!("     id:   {}", contract.id);
    println!("     hash: {}", contract.content_hash);
    for warning in &contract.warnings {
        println!("     warning [{}]: {}", warning.field, warning.message);
    }
}
