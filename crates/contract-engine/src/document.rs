//! Document assembly: recitals, clause sequence, annexes and rendering.

use chrono::Datelike;
use contract_types::{ContractData, GenerationWarning, InventoryItem, PropertyData};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::clauses::{self, Clause};
use crate::jurisdiction::{Jurisdiction, LegalContext};

/// One signature line at the foot of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureBlock {
    pub role: String,
    pub name: String,
    pub document_id: String,
}

/// The assembled document, structured so renderers other than the
/// built-in HTML one can walk it or export it as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDocument {
    pub title: String,
    /// Reference code derived from the landlord document id and the
    /// contract year.
    pub reference: String,
    pub date_line: String,
    pub recitals: Vec<String>,
    pub clauses: Vec<Clause>,
    /// Empty when the caller supplied no inventory; the annex is only
    /// rendered when at least one row exists.
    pub inventory: Vec<InventoryItem>,
    pub closing: String,
    pub signatures: [SignatureBlock; 2],
}

impl ContractDocument {
    pub fn assemble(
        data: &ContractData,
        legal: &LegalContext,
        jurisdiction: &Jurisdiction,
    ) -> (Self, Vec<GenerationWarning>) {
        let (clauses, warnings) = clauses::compose(&data.terms, &data.property, legal, jurisdiction);

        let document = Self {
            title: legal.title.clone(),
            reference: reference_code(data),
            date_line: format!(
                "En {}, a {}.",
                data.property.city,
                calendar::long_date(data.terms.start_date)
            ),
            recitals: recitals(data, legal),
            clauses,
            inventory: data.inventory.clone().unwrap_or_default(),
            closing: closing(data),
            signatures: [
                SignatureBlock {
                    role: "EL ARRENDADOR".to_string(),
                    name: data.landlord.full_name.clone(),
                    document_id: data.landlord.document_id.clone(),
                },
                SignatureBlock {
                    role: "EL ARRENDATARIO".to_string(),
                    name: data.tenant.full_name.clone(),
                    document_id: data.tenant.document_id.clone(),
                },
            ],
        };
        (document, warnings)
    }

    /// Render to standalone HTML. Every interpolated value is escaped;
    /// caller-supplied clause text cannot inject markup.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str("<article class=\"contract\">\n");
        html.push_str("  <header>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&self.title)));
        html.push_str(&format!(
            "    <p class=\"reference\">Expediente: {}</p>\n",
            escape_html(&self.reference)
        ));
        html.push_str(&format!(
            "    <p class=\"date-line\">{}</p>\n",
            escape_html(&self.date_line)
        ));
        html.push_str("  </header>\n");

        html.push_str("  <section class=\"recitals\">\n");
        html.push_str("    <h2>REUNIDOS</h2>\n");
        for paragraph in &self.recitals {
            html.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph)));
        }
        html.push_str("  </section>\n");

        html.push_str("  <section class=\"clauses\">\n");
        html.push_str("    <h2>CLÁUSULAS</h2>\n");
        for (index, clause) in self.clauses.iter().enumerate() {
            html.push_str(&format!(
                "    <h3>{}. {}</h3>\n",
                clauses::ordinal_label(index + 1),
                escape_html(&clause.title)
            ));
            html.push_str(&format!("    <p>{}</p>\n", escape_html(&clause.body)));
        }
        html.push_str("  </section>\n");

        if !self.inventory.is_empty() {
            html.push_str("  <section class=\"inventory\">\n");
            html.push_str("    <h2>ANEXO I. INVENTARIO</h2>\n");
            html.push_str("    <table>\n");
            html.push_str(
                "      <thead>\n        <tr><th>Elemento</th><th>Cantidad</th>\
                 <th>Estado</th><th>Observaciones</th></tr>\n      </thead>\n",
            );
            html.push_str("      <tbody>\n");
            for item in &self.inventory {
                html.push_str(&format!(
                    "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&item.label),
                    item.quantity,
                    item.condition.label(),
                    escape_html(item.notes.as_deref().unwrap_or("Sin observaciones"))
                ));
            }
            html.push_str("      </tbody>\n    </table>\n");
            html.push_str("  </section>\n");
        }

        html.push_str("  <section class=\"closing\">\n");
        html.push_str(&format!("    <p>{}</p>\n", escape_html(&self.closing)));
        html.push_str("  </section>\n");

        html.push_str("  <footer class=\"signatures\">\n");
        for signature in &self.signatures {
            html.push_str("    <div class=\"signature\">\n");
            html.push_str(&format!("      <p>{}</p>\n", escape_html(&signature.role)));
            html.push_str(&format!(
                "      <p>Fdo.: {}</p>\n",
                escape_html(&signature.name)
            ));
            html.push_str(&format!(
                "      <p>{}</p>\n",
                escape_html(&signature.document_id)
            ));
            html.push_str("    </div>\n");
        }
        html.push_str("  </footer>\n");
        html.push_str("</article>\n");
        html
    }
}

fn reference_code(data: &ContractData) -> String {
    let prefix: String = data
        .landlord
        .document_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect();
    format!(
        "ARR-{}-{}",
        prefix.to_uppercase(),
        data.terms.start_date.year()
    )
}

fn recitals(data: &ContractData, legal: &LegalContext) -> Vec<String> {
    let landlord = &data.landlord;
    let tenant = &data.tenant;
    vec![
        format!(
            "De una parte, D./D.ª {}, mayor de edad, con {} {} y domicilio en {}, {} ({}), \
             en adelante el ARRENDADOR.",
            landlord.full_name,
            landlord.document_kind.label(),
            landlord.document_id,
            landlord.address,
            landlord.city,
            landlord.postal_code
        ),
        format!(
            "De otra parte, D./D.ª {}, mayor de edad, con {} {} y domicilio en {}, {} ({}), \
             en adelante el ARRENDATARIO.",
            tenant.full_name,
            tenant.document_kind.label(),
            tenant.document_id,
            tenant.address,
            tenant.city,
            tenant.postal_code
        ),
        "Ambas partes se reconocen mutuamente la capacidad legal necesaria para otorgar el \
         presente contrato y, a tal efecto, EXPONEN:"
            .to_string(),
        property_description(&data.property),
        format!(
            "II. Que el ARRENDATARIO está interesado en el arriendo del inmueble descrito, \
             destinado a {}.",
            legal.usage_purpose
        ),
        "III. Que ambas partes han convenido la celebración del presente contrato de \
         arrendamiento, que se regirá por las siguientes CLÁUSULAS:"
            .to_string(),
    ]
}

fn property_description(property: &PropertyData) -> String {
    let mut description = format!(
        "I. Que el ARRENDADOR es propietario del inmueble sito en {}, {} ({}), {}, con una \
         superficie construida de {} m², {} {} y {} {}",
        property.address,
        property.city,
        property.postal_code,
        property.region,
        property.floor_area_m2,
        property.bedrooms,
        if property.bedrooms == 1 { "dormitorio" } else { "dormitorios" },
        property.bathrooms,
        if property.bathrooms == 1 { "baño" } else { "baños" },
    );
    if let Some(floor) = &property.floor {
        description.push_str(&format!(", planta {floor}"));
    }
    if let Some(door) = &property.door {
        description.push_str(&format!(", puerta {door}"));
    }
    if property.has_garage {
        description.push_str(", con plaza de garaje");
    }
    if property.has_storage_room {
        description.push_str(", con trastero");
    }
    description.push('.');
    if let Some(reference) = &property.cadastral_reference {
        description.push_str(&format!(" Referencia catastral: {reference}."));
    }
    if let Some(rating) = property.energy_rating {
        description.push_str(&format!(
            " Dispone de certificado de eficiencia energética con calificación {}.",
            rating.letter()
        ));
    }
    match property.habitability_certificate {
        Some(true) => description.push_str(" Cuenta con cédula de habitabilidad vigente."),
        Some(false) => description.push_str(" No dispone de cédula de habitabilidad."),
        None => {}
    }
    description
}

fn closing(data: &ContractData) -> String {
    let mut text = "Y en prueba de conformidad con cuanto antecede, ambas partes firman el \
                    presente contrato por duplicado ejemplar y a un solo efecto, en el lugar \
                    y fecha indicados en el encabezamiento."
        .to_string();
    if data.digital_signature {
        text.push_str(
            " Las partes acuerdan la firma electrónica del presente documento, con plena \
             validez y eficacia jurídica conforme al Reglamento (UE) n.º 910/2014 (eIDAS).",
        );
    }
    text
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
