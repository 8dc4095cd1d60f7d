//! Date arithmetic for contract terms.

use chrono::{Datelike, Months, NaiveDate};

/// Spanish month names, January first.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// End date of a lease that starts at `start` and runs `months` months.
/// Clamps to the last day of the target month, so a lease starting
/// 31 January ends 28 or 29 February one month later. `None` when the
/// result would leave the supported calendar range.
pub fn add_months_clamped(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

/// Long-form Spanish date, `1 de febrero de 2024`.
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}
