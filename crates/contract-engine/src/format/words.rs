//! Spanish cardinal numbers for spelled-out contract amounts.
//!
//! Covers zero up to but not including [`SPELL_OUT_CEILING`]. At or above
//! the ceiling the amount stays in digits and the result is flagged
//! incomplete so the engine can attach a warning instead of failing the
//! whole generation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// First integer the converter refuses to spell out.
pub const SPELL_OUT_CEILING: u64 = 10_000;

const UNITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

// 21 to 29 fuse into one word instead of using the "y" connector.
const TWENTIES: [&str; 10] = [
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const TENS: [&str; 7] = [
    "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

const HUNDREDS: [&str; 9] = [
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Spelled form plus whether the converter actually covered the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpelledAmount {
    pub text: String,
    /// False when `text` is digits because the value reached the ceiling.
    pub complete: bool,
}

fn below_hundred(n: u64) -> String {
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=29 => TWENTIES[(n - 20) as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10 - 3) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{tens} y {}", UNITS[unit as usize]),
            }
        }
    }
}

fn below_thousand(n: u64) -> String {
    // Exactly 100 is "cien"; only compounds use "ciento".
    if n == 100 {
        return "cien".to_string();
    }
    if n < 100 {
        return below_hundred(n);
    }
    let word = HUNDREDS[(n / 100 - 1) as usize];
    match n % 100 {
        0 => word.to_string(),
        rest => format!("{word} {}", below_hundred(rest)),
    }
}

fn below_ceiling(n: u64) -> String {
    // Exactly 1000 is "mil", never "un mil".
    if n == 1000 {
        return "mil".to_string();
    }
    if n < 1000 {
        return below_thousand(n);
    }
    let prefix = match n / 1000 {
        1 => "mil".to_string(),
        thousands => format!("{} mil", UNITS[thousands as usize]),
    };
    match n % 1000 {
        0 => prefix,
        rest => format!("{prefix} {}", below_thousand(rest)),
    }
}

/// Spell an integer; values at or above the ceiling come back as digits.
pub fn spell_integer(n: u64) -> String {
    if n >= SPELL_OUT_CEILING {
        return n.to_string();
    }
    below_ceiling(n)
}

/// Spell an integer and report whether the ceiling was hit.
pub fn spell_amount(n: u64) -> SpelledAmount {
    if n >= SPELL_OUT_CEILING {
        SpelledAmount {
            text: n.to_string(),
            complete: false,
        }
    } else {
        SpelledAmount {
            text: below_ceiling(n),
            complete: true,
        }
    }
}

/// Spelled form of the whole-euro part of an amount. Cents stay in the
/// digit rendering next to it.
pub fn euros_in_words(amount: Decimal) -> SpelledAmount {
    match amount.trunc().to_u64() {
        Some(whole) => spell_amount(whole),
        None => SpelledAmount {
            text: amount.trunc().to_string(),
            complete: false,
        },
    }
}
