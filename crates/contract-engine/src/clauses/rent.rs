//! Rent clause and the annual indexation clause.

use contract_types::{ContractTerms, GenerationWarning, PaymentMethod};

use crate::format::{currency, words};
use crate::jurisdiction::Jurisdiction;

use super::{Clause, ClauseKind};

pub(super) fn rent(
    terms: &ContractTerms,
    jurisdiction: &Jurisdiction,
) -> (Clause, Option<GenerationWarning>) {
    let figure = currency::format_amount(terms.monthly_rent, &jurisdiction.currency);
    let spelled = words::euros_in_words(terms.monthly_rent);

    let settlement = match terms.payment_method {
        // Validation guarantees the IBAN is present for bank transfers.
        PaymentMethod::BankTransfer => format!(
            "mediante transferencia bancaria a la cuenta del ARRENDADOR con IBAN {}",
            terms.iban.as_deref().unwrap_or("")
        ),
        PaymentMethod::DirectDebit => {
            "mediante domiciliación bancaria en la cuenta designada por el ARRENDATARIO"
                .to_string()
        }
        PaymentMethod::Cash => "en metálico, contra entrega del correspondiente recibo".to_string(),
    };

    let body = format!(
        "La renta se fija en la cantidad de {figure} ({spelled} euros) mensuales. El pago \
         se efectuará por mensualidades anticipadas, el día {day} de cada mes, {settlement}.",
        spelled = spelled.text,
        day = terms.payment_day,
    );

    let warning = (!spelled.complete)
        .then(|| GenerationWarning::spelled_amount_incomplete("terms.monthly_rent", &figure));

    (
        Clause {
            kind: ClauseKind::Rent,
            title: "RENTA".to_string(),
            body,
        },
        warning,
    )
}

pub(super) fn indexation(terms: &ContractTerms) -> Clause {
    Clause {
        kind: ClauseKind::Indexation,
        title: "ACTUALIZACIÓN DE LA RENTA".to_string(),
        body: format!(
            "La renta se actualizará en la fecha en que se cumpla cada año de vigencia del \
             contrato, aplicando la variación anual del {}.",
            terms.indexation.full_name()
        ),
    }
}
