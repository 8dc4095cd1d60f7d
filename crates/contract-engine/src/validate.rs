//! Input validation. Everything here runs before any rendering, so a
//! rejected call produces no partial document.

use contract_types::{ContractData, PaymentMethod, PersonData, PropertyData};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{calendar, validation, ContractError};

lazy_static! {
    // Country code, two check digits, 11 to 30 alphanumerics.
    static ref IBAN_RE: Regex = Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$").unwrap();
}

/// Reject input the engine cannot turn into binding legal text. The
/// returned error names the offending field in dotted-path form.
pub fn validate(data: &ContractData) -> Result<(), ContractError> {
    validate_person(&data.landlord, "landlord")?;
    validate_person(&data.tenant, "tenant")?;
    validate_property(&data.property)?;
    validate_terms(data)?;
    validate_inventory(data)?;
    Ok(())
}

fn non_empty(value: &str, field: &str) -> Result<(), ContractError> {
    if value.trim().is_empty() {
        return Err(validation(field, "must not be empty"));
    }
    Ok(())
}

fn validate_person(person: &PersonData, role: &str) -> Result<(), ContractError> {
    non_empty(&person.full_name, &format!("{role}.full_name"))?;
    non_empty(&person.document_id, &format!("{role}.document_id"))?;
    non_empty(&person.address, &format!("{role}.address"))?;
    non_empty(&person.city, &format!("{role}.city"))?;
    non_empty(&person.postal_code, &format!("{role}.postal_code"))?;
    non_empty(&person.email, &format!("{role}.email"))?;
    non_empty(&person.phone, &format!("{role}.phone"))?;
    Ok(())
}

fn validate_property(property: &PropertyData) -> Result<(), ContractError> {
    non_empty(&property.address, "property.address")?;
    non_empty(&property.city, "property.city")?;
    non_empty(&property.postal_code, "property.postal_code")?;
    non_empty(&property.region, "property.region")?;
    if !property.floor_area_m2.is_finite() || property.floor_area_m2 <= 0.0 {
        return Err(validation(
            "property.floor_area_m2",
            "must be a finite positive number",
        ));
    }
    Ok(())
}

fn validate_terms(data: &ContractData) -> Result<(), ContractError> {
    let terms = &data.terms;

    if terms.duration_months < 1 {
        return Err(validation("terms.duration_months", "must be at least 1"));
    }
    if calendar::add_months_clamped(terms.start_date, terms.duration_months).is_none() {
        return Err(validation(
            "terms.duration_months",
            "end date exceeds the supported calendar range",
        ));
    }
    if terms.monthly_rent <= Decimal::ZERO {
        return Err(validation("terms.monthly_rent", "must be positive"));
    }
    if terms
        .monthly_rent
        .checked_mul(Decimal::from(terms.deposit_months))
        .is_none()
    {
        return Err(validation(
            "terms.monthly_rent",
            "deposit amount exceeds the supported numeric range",
        ));
    }
    if let Some(extra) = terms.additional_guarantee {
        if extra < Decimal::ZERO {
            return Err(validation("terms.additional_guarantee", "must not be negative"));
        }
    }
    if !(1..=31).contains(&terms.payment_day) {
        return Err(validation("terms.payment_day", "must be between 1 and 31"));
    }

    if terms.payment_method == PaymentMethod::BankTransfer {
        let raw = terms.iban.as_deref().unwrap_or("");
        if raw.trim().is_empty() {
            return Err(validation(
                "terms.iban",
                "required when payment method is bank-transfer",
            ));
        }
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        if !IBAN_RE.is_match(&normalized) {
            return Err(validation("terms.iban", "is not a valid IBAN"));
        }
    }

    Ok(())
}

fn validate_inventory(data: &ContractData) -> Result<(), ContractError> {
    let Some(items) = &data.inventory else {
        return Ok(());
    };
    for (index, item) in items.iter().enumerate() {
        non_empty(&item.label, &format!("inventory[{index}].label"))?;
        if item.quantity == 0 {
            return Err(validation(
                &format!("inventory[{index}].quantity"),
                "must be positive",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;
    use chrono::NaiveDate;
    use contract_types::ItemCondition;
    use pretty_assertions::assert_eq;

    fn field_of(result: Result<(), ContractError>) -> String {
        match result.expect_err("expected a validation error") {
            ContractError::Validation { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_the_reference_input() {
        assert!(validate(&testdata::contract()).is_ok());
    }

    #[test]
    fn rejects_blank_party_fields_by_name() {
        let mut data = testdata::contract();
        data.tenant.full_name = "  ".to_string();
        assert_eq!(field_of(validate(&data)), "tenant.full_name");

        let mut data = testdata::contract();
        data.landlord.document_id = String::new();
        assert_eq!(field_of(validate(&data)), "landlord.document_id");
    }

    #[test]
    fn bank_transfer_requires_an_iban() {
        let mut data = testdata::contract();
        data.terms.iban = None;
        assert_eq!(field_of(validate(&data)), "terms.iban");

        let mut data = testdata::contract();
        data.terms.iban = Some("   ".to_string());
        assert_eq!(field_of(validate(&data)), "terms.iban");
    }

    #[test]
    fn malformed_iban_is_rejected() {
        let mut data = testdata::contract();
        data.terms.iban = Some("ES91-NOPE".to_string());
        assert_eq!(field_of(validate(&data)), "terms.iban");
    }

    #[test]
    fn iban_may_carry_grouping_spaces() {
        let mut data = testdata::contract();
        data.terms.iban = Some("ES91 2100 0418 4502 0005 1332".to_string());
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn cash_needs_no_iban() {
        let mut data = testdata::contract();
        data.terms.payment_method = contract_types::PaymentMethod::Cash;
        data.terms.iban = None;
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut data = testdata::contract();
        data.terms.duration_months = 0;
        assert_eq!(field_of(validate(&data)), "terms.duration_months");
    }

    #[test]
    fn uncomputable_end_date_is_rejected() {
        let mut data = testdata::contract();
        data.terms.start_date = NaiveDate::from_ymd_opt(262_000, 1, 1).unwrap();
        data.terms.duration_months = 48_000;
        assert_eq!(field_of(validate(&data)), "terms.duration_months");
    }

    #[test]
    fn non_positive_rent_is_rejected() {
        let mut data = testdata::contract();
        data.terms.monthly_rent = Decimal::ZERO;
        assert_eq!(field_of(validate(&data)), "terms.monthly_rent");

        let mut data = testdata::contract();
        data.terms.monthly_rent = Decimal::from(-500);
        assert_eq!(field_of(validate(&data)), "terms.monthly_rent");
    }

    #[test]
    fn overflowing_deposit_total_is_rejected() {
        let mut data = testdata::contract();
        data.terms.monthly_rent = Decimal::MAX;
        data.terms.deposit_months = 2;
        assert_eq!(field_of(validate(&data)), "terms.monthly_rent");
    }

    #[test]
    fn negative_guarantee_is_rejected() {
        let mut data = testdata::contract();
        data.terms.additional_guarantee = Some(Decimal::from(-1));
        assert_eq!(field_of(validate(&data)), "terms.additional_guarantee");
    }

    #[test]
    fn payment_day_must_fit_a_month() {
        for day in [0u8, 32] {
            let mut data = testdata::contract();
            data.terms.payment_day = day;
            assert_eq!(field_of(validate(&data)), "terms.payment_day");
        }
    }

    #[test]
    fn inventory_rows_are_checked_by_index() {
        let mut data = testdata::contract();
        let mut items = testdata::inventory();
        items[1].quantity = 0;
        data.inventory = Some(items);
        assert_eq!(field_of(validate(&data)), "inventory[1].quantity");

        let mut data = testdata::contract();
        let mut items = testdata::inventory();
        items[2].label = String::new();
        items[2].condition = ItemCondition::Poor;
        data.inventory = Some(items);
        assert_eq!(field_of(validate(&data)), "inventory[2].label");
    }

    #[test]
    fn zero_floor_area_is_rejected() {
        let mut data = testdata::contract();
        data.property.floor_area_m2 = 0.0;
        assert_eq!(field_of(validate(&data)), "property.floor_area_m2");
    }

    #[test]
    fn non_finite_floor_area_is_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut data = testdata::contract();
            data.property.floor_area_m2 = bad;
            assert_eq!(field_of(validate(&data)), "property.floor_area_m2");
        }
    }
}
