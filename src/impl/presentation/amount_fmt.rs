use num_format::{Locale, ToFormattedString as _};

use crate::domain::logic::utils::round_to_two;
use crate::entities::Currency;

/// Formats an amount the way the form fields show money: es-AR grouping
/// (`.` for thousands, `,` as decimal mark), always two decimal places, no
/// symbol. Non-finite input renders as zero.
pub(crate) fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (round_to_two(value) * 100.0).round() as i64;
    let integer_part = (cents.abs() / 100).to_formatted_string(&Locale::es_AR);
    format!(
        "{}{},{:02}",
        if cents < 0 { "-" } else { "" },
        integer_part,
        cents.abs() % 100,
    )
}

/// Amount with the currency's display symbol in front (ex. `$ 1.234,56`).
pub(crate) fn format_with_symbol(value: f64, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), format_amount(value))
}
