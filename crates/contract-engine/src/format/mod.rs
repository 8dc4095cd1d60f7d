//! Document-facing formatting: amounts as digits and as Spanish words.

pub mod currency;
pub mod words;

pub use currency::format_amount;
pub use words::{SpelledAmount, SPELL_OUT_CEILING};
