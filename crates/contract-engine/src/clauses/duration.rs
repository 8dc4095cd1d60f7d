//! Duration clause: computed end date plus the statutory renewal text.

use contract_types::ContractTerms;

use crate::calendar;
use crate::jurisdiction::LegalContext;

use super::{Clause, ClauseKind};

pub(super) fn duration(terms: &ContractTerms, legal: &LegalContext) -> Clause {
    // Validation already rejected terms whose end date is not computable,
    // so the fallback is never observable.
    let end = calendar::add_months_clamped(terms.start_date, terms.duration_months)
        .unwrap_or(terms.start_date);

    let mut body = format!(
        "El arrendamiento se pacta por un plazo de {months} {unit}, desde el {start} hasta \
         el {end}, fecha en la que quedará extinguido salvo prórroga.",
        months = terms.duration_months,
        unit = if terms.duration_months == 1 { "mes" } else { "meses" },
        start = calendar::long_date(terms.start_date),
        end = calendar::long_date(end),
    );

    if let Some(renewal) = &legal.renewal_extension {
        body.push(' ');
        body.push_str(renewal);
    }

    Clause {
        kind: ClauseKind::Duration,
        title: "DURACIÓN".to_string(),
        body,
    }
}
