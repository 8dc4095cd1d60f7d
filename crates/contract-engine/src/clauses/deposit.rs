//! Deposit clause: statutory months of rent plus any extra guarantee.

use contract_types::{ContractTerms, GenerationWarning};
use rust_decimal::Decimal;

use crate::format::{currency, words};
use crate::jurisdiction::Jurisdiction;

use super::{Clause, ClauseKind};

pub(super) fn deposit(
    terms: &ContractTerms,
    jurisdiction: &Jurisdiction,
) -> (Clause, Option<GenerationWarning>) {
    // Validation already rejected rents whose deposit total overflows.
    let amount = terms
        .monthly_rent
        .checked_mul(Decimal::from(terms.deposit_months))
        .unwrap_or(terms.monthly_rent);
    let figure = currency::format_amount(amount, &jurisdiction.currency);
    let spelled = words::euros_in_words(amount);

    let months_text = if terms.deposit_months == 1 {
        "1 mensualidad".to_string()
    } else {
        format!("{} mensualidades", terms.deposit_months)
    };

    let mut body = format!(
        "El ARRENDATARIO entrega en este acto la cantidad de {figure} ({spelled} euros), \
         equivalente a {months_text} de renta, en concepto de fianza legal conforme al \
         {citation}. La fianza será restituida a la finalización del contrato, una vez \
         comprobados el estado del inmueble y el cumplimiento de las obligaciones del \
         ARRENDATARIO.",
        spelled = spelled.text,
        citation = jurisdiction.deposit_citation,
    );

    if let Some(extra) = terms.additional_guarantee {
        if extra > Decimal::ZERO {
            let extra_figure = currency::format_amount(extra, &jurisdiction.currency);
            body.push_str(&format!(
                " Adicionalmente, el ARRENDATARIO entrega la cantidad de {extra_figure} en \
                 concepto de garantía adicional, que será devuelta en los mismos términos \
                 que la fianza."
            ));
        }
    }

    let warning = (!spelled.complete)
        .then(|| GenerationWarning::spelled_amount_incomplete("deposit_amount", &figure));

    (
        Clause {
            kind: ClauseKind::Deposit,
            title: "FIANZA".to_string(),
            body,
        },
        warning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_month_deposit_reads_singular() {
        let (clause, warning) = deposit(&testdata::terms(), &Jurisdiction::spain());
        assert!(clause.body.contains("900.00 €"));
        assert!(clause.body.contains("(novecientos euros)"));
        assert!(clause.body.contains("equivalente a 1 mensualidad de renta"));
        assert!(clause.body.contains("artículo 36"));
        assert!(warning.is_none());
    }

    #[test]
    fn multi_month_deposit_reads_plural_and_multiplies() {
        let mut terms = testdata::terms();
        terms.deposit_months = 2;
        let (clause, _) = deposit(&terms, &Jurisdiction::spain());
        assert!(clause.body.contains("1800.00 €"));
        assert!(clause.body.contains("equivalente a 2 mensualidades de renta"));
    }

    #[test]
    fn additional_guarantee_appends_only_when_positive() {
        let mut terms = testdata::terms();
        terms.additional_guarantee = Some(Decimal::from(1800));
        let (clause, _) = deposit(&terms, &Jurisdiction::spain());
        assert!(clause.body.contains("garantía adicional"));
        assert!(clause.body.contains("1800.00 €"));

        terms.additional_guarantee = Some(Decimal::ZERO);
        let (clause, _) = deposit(&terms, &Jurisdiction::spain());
        assert!(!clause.body.contains("garantía adicional"));

        terms.additional_guarantee = None;
        let (clause, _) = deposit(&terms, &Jurisdiction::spain());
        assert!(!clause.body.contains("garantía adicional"));
    }

    #[test]
    fn ceiling_deposit_warns() {
        let mut terms = testdata::terms();
        terms.monthly_rent = Decimal::from(6_000);
        terms.deposit_months = 2;
        let (clause, warning) = deposit(&terms, &Jurisdiction::spain());
        assert!(clause.body.contains("12000.00 €"));
        assert!(clause.body.contains("(12000 euros)"));
        assert_eq!(warning.expect("ceiling amount warns").field, "deposit_amount");
    }

    #[test]
    fn overflowing_total_falls_back_without_panicking() {
        let mut terms = testdata::terms();
        terms.monthly_rent = Decimal::MAX;
        terms.deposit_months = 2;
        let (clause, warning) = deposit(&terms, &Jurisdiction::spain());
        assert!(clause.body.contains("en concepto de fianza legal"));
        assert_eq!(warning.expect("ceiling amount warns").field, "deposit_amount");
    }
}
