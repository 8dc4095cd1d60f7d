//! The ordered clause list of the agreement.
//!
//! Composition is pure: identical terms, property and legal context
//! produce identical clauses in identical order. The fixed list renders
//! first, caller-supplied clauses follow in submission order, and the
//! venue clause always closes the document.

mod deposit;
mod duration;
mod rent;
mod usage;

use contract_types::{ContractTerms, GenerationWarning, PropertyData};
use serde::{Deserialize, Serialize};

use crate::jurisdiction::{Jurisdiction, LegalContext};

// ============================================================
// Clause model
// ============================================================

/// Identity of a clause within the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseKind {
    Object,
    Duration,
    Rent,
    Indexation,
    Deposit,
    PropertyCondition,
    Expenses,
    Works,
    Subletting,
    UseRestrictions,
    /// Caller-supplied clause, zero-based submission index.
    Additional(usize),
    Venue,
}

/// One numbered clause. The ordinal heading comes from list position at
/// render time and is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub kind: ClauseKind,
    /// Upper-case heading, e.g. `OBJETO DEL CONTRATO`.
    pub title: String,
    pub body: String,
}

/// Upper-case Spanish ordinal for a 1-based clause position.
pub fn ordinal_label(position: usize) -> String {
    const ORDINALS: [&str; 20] = [
        "PRIMERA",
        "SEGUNDA",
        "TERCERA",
        "CUARTA",
        "QUINTA",
        "SEXTA",
        "SÉPTIMA",
        "OCTAVA",
        "NOVENA",
        "DÉCIMA",
        "UNDÉCIMA",
        "DUODÉCIMA",
        "DECIMOTERCERA",
        "DECIMOCUARTA",
        "DECIMOQUINTA",
        "DECIMOSEXTA",
        "DECIMOSÉPTIMA",
        "DECIMOCTAVA",
        "DECIMONOVENA",
        "VIGÉSIMA",
    ];
    match position {
        1..=20 => ORDINALS[position - 1].to_string(),
        other => format!("{other}.ª"),
    }
}

// ============================================================
// Composition
// ============================================================

/// Build the full clause list for one contract.
///
/// Warnings come from the spelled-amount converter hitting its ceiling;
/// they never abort composition.
pub fn compose(
    terms: &ContractTerms,
    property: &PropertyData,
    legal: &LegalContext,
    jurisdiction: &Jurisdiction,
) -> (Vec<Clause>, Vec<GenerationWarning>) {
    let mut warnings = Vec::new();

    let (rent_clause, rent_warning) = rent::rent(terms, jurisdiction);
    warnings.extend(rent_warning);
    let (deposit_clause, deposit_warning) = deposit::deposit(terms, jurisdiction);
    warnings.extend(deposit_warning);

    let mut clauses = vec![
        object(property, legal),
        duration::duration(terms, legal),
        rent_clause,
        rent::indexation(terms),
        deposit_clause,
        property_condition(property),
        usage::expenses_split(terms),
        works(),
        usage::subletting(terms),
        usage::use_restrictions(terms),
    ];

    // Caller-supplied clauses go in verbatim, in submission order.
    for (index, body) in terms.additional_clauses.iter().enumerate() {
        clauses.push(Clause {
            kind: ClauseKind::Additional(index),
            title: "PACTO ADICIONAL".to_string(),
            body: body.clone(),
        });
    }

    clauses.push(venue(property, legal));

    (clauses, warnings)
}

// ============================================================
// Static clauses
// ============================================================

fn object(property: &PropertyData, legal: &LegalContext) -> Clause {
    Clause {
        kind: ClauseKind::Object,
        title: "OBJETO DEL CONTRATO".to_string(),
        body: format!(
            "El ARRENDADOR cede en arrendamiento al ARRENDATARIO el inmueble sito en {}, \
             {} ({}), descrito en la parte expositiva, que el ARRENDATARIO declara conocer \
             y aceptar en el estado en que se encuentra. El arrendamiento se destina a {}.",
            property.address, property.city, property.postal_code, legal.usage_purpose
        ),
    }
}

fn property_condition(property: &PropertyData) -> Clause {
    let furnished = if property.furnished {
        " El inmueble se entrega amueblado y equipado conforme al inventario incorporado \
         como Anexo I, firmado por ambas partes."
    } else {
        " El inmueble se entrega sin amueblar."
    };
    Clause {
        kind: ClauseKind::PropertyCondition,
        title: "ESTADO DEL INMUEBLE".to_string(),
        body: format!(
            "El ARRENDATARIO declara recibir el inmueble en buen estado de conservación, \
             habitabilidad e higiene, y se obliga a devolverlo en el mismo estado a la \
             finalización del contrato, salvo el desgaste derivado del uso ordinario.{furnished}"
        ),
    }
}

fn works() -> Clause {
    Clause {
        kind: ClauseKind::Works,
        title: "OBRAS Y CONSERVACIÓN".to_string(),
        body: "El ARRENDATARIO no podrá realizar obras que modifiquen la configuración del \
               inmueble sin el consentimiento previo y por escrito del ARRENDADOR. Las \
               reparaciones necesarias para conservar el inmueble en condiciones de \
               habitabilidad serán de cuenta del ARRENDADOR, salvo los pequeños \
               desperfectos derivados del uso ordinario, que corresponderán al \
               ARRENDATARIO."
            .to_string(),
    }
}

fn venue(property: &PropertyData, legal: &LegalContext) -> Clause {
    Clause {
        kind: ClauseKind::Venue,
        title: "LEY APLICABLE Y FUERO".to_string(),
        body: format!(
            "{} Para cuantas cuestiones se susciten sobre la interpretación o el cumplimiento \
             del presente contrato, las partes se someten expresamente a los Juzgados y \
             Tribunales del partido judicial en que radica la finca, en {}.",
            legal.governing_law, property.city
        ),
    }
}
