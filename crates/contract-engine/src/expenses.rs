//! Utility cost allocation text for the expenses clause.

use contract_types::IncludedUtilities;

/// Display order of the supplies, fixed so the same selection always
/// produces the same sentence.
const SUPPLY_ORDER: [(&str, fn(&IncludedUtilities) -> bool); 5] = [
    ("agua", |u| u.water),
    ("electricidad", |u| u.electricity),
    ("gas", |u| u.gas),
    ("internet", |u| u.internet),
    ("gastos de comunidad", |u| u.community_fees),
];

/// One of three canonical phrasings: everything included, nothing
/// included, or the split listing.
pub fn utilities_inclusion_text(utilities: &IncludedUtilities) -> String {
    if utilities.all() {
        return "Todos los suministros (agua, electricidad, gas, internet y gastos de \
                comunidad) están incluidos en la renta."
            .to_string();
    }
    if utilities.none() {
        return "Ningún suministro está incluido en la renta; todos los consumos serán de \
                cuenta del ARRENDATARIO."
            .to_string();
    }

    let mut included = Vec::new();
    let mut excluded = Vec::new();
    for (name, is_included) in SUPPLY_ORDER {
        if is_included(utilities) {
            included.push(name);
        } else {
            excluded.push(name);
        }
    }
    format!(
        "Incluidos en la renta: {}. Excluidos y a cargo del ARRENDATARIO: {}.",
        included.join(", "),
        excluded.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utilities(bits: u8) -> IncludedUtilities {
        IncludedUtilities {
            water: bits & 1 != 0,
            electricity: bits & 2 != 0,
            gas: bits & 4 != 0,
            internet: bits & 8 != 0,
            community_fees: bits & 16 != 0,
        }
    }

    #[test]
    fn all_included_uses_the_full_sentence() {
        let text = utilities_inclusion_text(&utilities(0b11111));
        assert_eq!(
            text,
            "Todos los suministros (agua, electricidad, gas, internet y gastos de comunidad) \
             están incluidos en la renta."
        );
    }

    #[test]
    fn none_included_pushes_everything_to_the_tenant() {
        let text = utilities_inclusion_text(&utilities(0));
        assert!(text.starts_with("Ningún suministro está incluido"));
        assert!(text.contains("cuenta del ARRENDATARIO"));
    }

    #[test]
    fn mixed_selection_lists_both_sides_in_fixed_order() {
        // water and internet in, the rest out
        let text = utilities_inclusion_text(&utilities(0b01001));
        assert_eq!(
            text,
            "Incluidos en la renta: agua, internet. Excluidos y a cargo del ARRENDATARIO: \
             electricidad, gas, gastos de comunidad."
        );
    }

    #[test]
    fn single_inclusion_still_reads_as_a_split() {
        let text = utilities_inclusion_text(&utilities(0b10000));
        assert_eq!(
            text,
            "Incluidos en la renta: gastos de comunidad. Excluidos y a cargo del \
             ARRENDATARIO: agua, electricidad, gas, internet."
        );
    }

    #[test]
    fn every_combination_mentions_each_supply_exactly_once() {
        // bits == 0 is the "nothing included" sentence, which names no supply
        for bits in 1u8..32 {
            let set = utilities(bits);
            let text = utilities_inclusion_text(&set);
            for supply in ["agua", "electricidad", "internet", "gastos de comunidad"] {
                assert_eq!(
                    text.matches(supply).count(),
                    1,
                    "supply {supply} miscounted in {text}"
                );
            }
            // "gas" also appears inside "gastos de comunidad"
            assert_eq!(text.matches("gas").count(), 2, "gas miscounted in {text}");
        }
    }
}
