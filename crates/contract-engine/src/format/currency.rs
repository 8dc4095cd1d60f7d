//! Monetary amounts as printed in the document body.

use rust_decimal::Decimal;

use crate::jurisdiction::CurrencyStyle;

/// Two decimal places, symbol after the amount: `900.00 €`.
pub fn format_amount(amount: Decimal, style: &CurrencyStyle) -> String {
    format!("{:.2} {}", amount.round_dp(2), style.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn euros() -> CurrencyStyle {
        CurrencyStyle {
            symbol: "€".to_string(),
            code: "EUR".to_string(),
        }
    }

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_amount(Decimal::from(900), &euros()), "900.00 €");
        assert_eq!(format_amount(Decimal::new(9005, 1), &euros()), "900.50 €");
    }

    #[test]
    fn keeps_exact_cent_amounts() {
        assert_eq!(format_amount(Decimal::new(123456, 2), &euros()), "1234.56 €");
    }

    #[test]
    fn other_symbols_follow_the_style() {
        let style = CurrencyStyle {
            symbol: "$".to_string(),
            code: "USD".to_string(),
        };
        assert_eq!(format_amount(Decimal::from(50), &style), "50.00 $");
    }
}
