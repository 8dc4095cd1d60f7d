//! Jurisdiction profile and per-category legal framing.
//!
//! Statutory references live here and nowhere else. Clause composers ask
//! the resolved [`LegalContext`] for titles and citations instead of
//! hard-coding them, so adding a jurisdiction is a data change.

use contract_types::ContractKind;

use crate::format::words;

/// How amounts are printed in the document body.
#[derive(Debug, Clone)]
pub struct CurrencyStyle {
    /// Symbol appended after the amount, e.g. `€`.
    pub symbol: String,
    /// ISO 4217 code, e.g. `EUR`.
    pub code: String,
}

/// Statutory profile the engine generates under.
///
/// Defaults to Spain. A second profile only needs its own statute names,
/// citations and renewal horizon.
#[derive(Debug, Clone)]
pub struct Jurisdiction {
    pub name: String,
    /// Full statute name cited in the recitals and governing-law text.
    pub statute: String,
    /// Short form used inside clause bodies, e.g. `LAU`.
    pub statute_short: String,
    /// Mandatory renewal horizon for standard residence leases, in years.
    pub renewal_years: u8,
    /// Citation backing the renewal horizon.
    pub renewal_citation: String,
    /// Citation backing the statutory deposit.
    pub deposit_citation: String,
    pub currency: CurrencyStyle,
}

/// Legal framing resolved for one contract category.
#[derive(Debug, Clone)]
pub struct LegalContext {
    /// Document title, upper case as printed.
    pub title: String,
    pub governing_law: String,
    /// What the tenant may use the unit for, as recited in the exposition.
    pub usage_purpose: String,
    /// Mandatory renewal paragraph. Only standard residence leases carry one.
    pub renewal_extension: Option<String>,
}

impl Jurisdiction {
    /// Spain: Ley 29/1994 de Arrendamientos Urbanos.
    pub fn spain() -> Self {
        Self {
            name: "España".to_string(),
            statute: "Ley 29/1994, de 24 de noviembre, de Arrendamientos Urbanos".to_string(),
            statute_short: "LAU".to_string(),
            // Five years when the landlord is a natural person, art. 9.1.
            renewal_years: 5,
            renewal_citation: "artículo 9.1 de la LAU".to_string(),
            deposit_citation: "artículo 36 de la LAU".to_string(),
            currency: CurrencyStyle {
                symbol: "€".to_string(),
                code: "EUR".to_string(),
            },
        }
    }

    /// Document title for a contract category.
    pub fn title_for(&self, kind: ContractKind) -> String {
        match kind {
            ContractKind::StandardResidence => {
                "CONTRATO DE ARRENDAMIENTO DE VIVIENDA HABITUAL".to_string()
            }
            ContractKind::Seasonal => {
                "CONTRATO DE ARRENDAMIENTO DE VIVIENDA DE TEMPORADA".to_string()
            }
            ContractKind::SingleRoom => "CONTRATO DE ARRENDAMIENTO DE HABITACIÓN".to_string(),
            ContractKind::Commercial => {
                "CONTRATO DE ARRENDAMIENTO PARA USO DISTINTO DE VIVIENDA".to_string()
            }
        }
    }

    /// Governing-law paragraph for a contract category.
    pub fn governing_law(&self, kind: ContractKind) -> String {
        match kind {
            ContractKind::StandardResidence => format!(
                "El presente contrato se otorga conforme a la {statute} y se regirá por lo \
                 dispuesto en su Título II, por la voluntad de las partes y, supletoriamente, \
                 por el Código Civil.",
                statute = self.statute
            ),
            ContractKind::Seasonal => format!(
                "El presente contrato se celebra como arrendamiento de temporada, para uso \
                 distinto del de vivienda conforme al artículo 3.2 de la {short}, y se regirá \
                 por la voluntad de las partes, por el Título III de la {statute} y, \
                 supletoriamente, por el Código Civil.",
                short = self.statute_short,
                statute = self.statute
            ),
            ContractKind::SingleRoom => format!(
                "El presente contrato de arrendamiento de habitación se regirá por la voluntad \
                 de las partes y por lo dispuesto en el Código Civil, aplicándose \
                 analógicamente la {statute} en lo no previsto.",
                statute = self.statute
            ),
            ContractKind::Commercial => format!(
                "El presente contrato se celebra para uso distinto del de vivienda y se regirá \
                 por la voluntad de las partes, por el Título III de la {statute} y, \
                 supletoriamente, por el Código Civil.",
                statute = self.statute
            ),
        }
    }

    /// Recited purpose the tenant takes the unit for.
    pub fn usage_purpose(&self, kind: ContractKind) -> String {
        match kind {
            ContractKind::StandardResidence => {
                "satisfacer la necesidad permanente de vivienda del ARRENDATARIO".to_string()
            }
            ContractKind::Seasonal => "el uso temporal de la vivienda por razón de temporada, \
                 sin que constituya en ningún caso la residencia permanente del ARRENDATARIO"
                .to_string(),
            ContractKind::SingleRoom => "el uso como dormitorio y estancia personal de una \
                 habitación de la vivienda, con derecho al uso compartido de las zonas comunes"
                .to_string(),
            ContractKind::Commercial => "el ejercicio de la actividad económica propia del \
                 ARRENDATARIO, con exclusión de cualquier uso como vivienda"
                .to_string(),
        }
    }

    /// Resolve the full legal framing for one category.
    pub fn resolve(&self, kind: ContractKind) -> LegalContext {
        let renewal_extension = match kind {
            ContractKind::StandardResidence => Some(format!(
                "Llegada la fecha de vencimiento del contrato, este se prorrogará \
                 obligatoriamente por plazos anuales hasta que el arrendamiento alcance una \
                 duración mínima de {years} años, salvo que el ARRENDATARIO manifieste al \
                 ARRENDADOR, con treinta días de antelación como mínimo a la fecha de \
                 terminación del contrato o de cualquiera de las prórrogas, su voluntad de no \
                 renovarlo, conforme al {citation}.",
                years = words::spell_integer(u64::from(self.renewal_years)),
                citation = self.renewal_citation
            )),
            _ => None,
        };

        LegalContext {
            title: self.title_for(kind),
            governing_law: self.governing_law(kind),
            usage_purpose: self.usage_purpose(kind),
            renewal_extension,
        }
    }
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self::spain()
    }
}
