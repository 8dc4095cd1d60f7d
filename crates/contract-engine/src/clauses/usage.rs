//! Expense split, subletting and use-restriction clauses.

use contract_types::ContractTerms;

use crate::expenses;

use super::{Clause, ClauseKind};

pub(super) fn expenses_split(terms: &ContractTerms) -> Clause {
    Clause {
        kind: ClauseKind::Expenses,
        title: "GASTOS Y SUMINISTROS".to_string(),
        body: format!(
            "El Impuesto sobre Bienes Inmuebles (IBI) corresponde al ARRENDADOR. Los \
             consumos susceptibles de individualización mediante contador serán de cuenta \
             del ARRENDATARIO en la medida en que no estén incluidos en la renta. {}",
            expenses::utilities_inclusion_text(&terms.utilities)
        ),
    }
}

pub(super) fn subletting(terms: &ContractTerms) -> Clause {
    let body = if terms.subletting_allowed {
        "El ARRENDATARIO podrá subarrendar parcialmente el inmueble y ceder el presente \
         contrato, previa comunicación por escrito al ARRENDADOR y en los términos \
         previstos en la legislación aplicable."
    } else {
        "El ARRENDATARIO no podrá subarrendar total ni parcialmente el inmueble, ni ceder \
         el presente contrato, sin el consentimiento previo y por escrito del ARRENDADOR."
    };
    Clause {
        kind: ClauseKind::Subletting,
        title: "CESIÓN Y SUBARRIENDO".to_string(),
        body: body.to_string(),
    }
}

pub(super) fn use_restrictions(terms: &ContractTerms) -> Clause {
    let pets = if terms.pets_allowed {
        "Se permite la tenencia de animales de compañía en el inmueble, siempre que no \
         causen daños ni molestias a los vecinos."
    } else {
        "No se permite la tenencia de animales de compañía en el inmueble."
    };
    Clause {
        kind: ClauseKind::UseRestrictions,
        title: "USO Y CONVIVENCIA".to_string(),
        body: format!(
            "El inmueble se destinará exclusivamente al uso pactado, quedando prohibidas \
             las actividades molestas, insalubres, nocivas, peligrosas o ilícitas. {pets}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata;
    use contract_types::IncludedUtilities;

    #[test]
    fn expenses_clause_embeds_the_classifier_text() {
        let mut terms = testdata::terms();
        terms.utilities = IncludedUtilities {
            water: true,
            ..IncludedUtilities::default()
        };
        let clause = expenses_split(&terms);
        assert!(clause.body.contains("IBI"));
        assert!(clause.body.contains("Incluidos en la renta: agua."));
    }

    #[test]
    fn subletting_branches_on_the_flag() {
        let mut terms = testdata::terms();

        terms.subletting_allowed = false;
        let forbidden = subletting(&terms);
        assert!(forbidden.body.contains("no podrá subarrendar"));

        terms.subletting_allowed = true;
        let allowed = subletting(&terms);
        assert!(allowed.body.starts_with("El ARRENDATARIO podrá subarrendar"));
        assert!(!allowed.body.contains("no podrá"));
    }

    #[test]
    fn pets_branch_on_the_flag() {
        let mut terms = testdata::terms();

        terms.pets_allowed = false;
        assert!(use_restrictions(&terms)
            .body
            .contains("No se permite la tenencia de animales"));

        terms.pets_allowed = true;
        let clause = use_restrictions(&terms);
        assert!(clause.body.contains("Se permite la tenencia de animales"));
        assert!(!clause.body.contains("No se permite"));
    }
}
