//! Currency display formatting.
//!
//! These helpers are for display only. They never fail, and their fallback
//! output must never be fed back into a calculation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Symbol used when the caller does not supply one, and for every fallback.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Formats an amount with thousands separators and exactly two decimals.
///
/// A non-finite amount renders as a zero amount with the default symbol,
/// whatever symbol was requested.
///
/// # Examples
///
/// ```
/// use salary_ledger::calculation::format_currency;
///
/// assert_eq!(format_currency(1234567.5, None), "$1,234,567.50");
/// assert_eq!(format_currency(3000.0, Some("€")), "€3,000.00");
/// assert_eq!(format_currency(f64::NAN, Some("€")), "$0.00");
/// ```
pub fn format_currency(amount: f64, symbol: Option<&str>) -> String {
    if !amount.is_finite() {
        return format!("{}0.00", DEFAULT_CURRENCY_SYMBOL);
    }

    let symbol = symbol.unwrap_or(DEFAULT_CURRENCY_SYMBOL);
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
}

/// Formats a decimal amount the same way as [`format_currency`].
pub fn format_decimal_currency(amount: Decimal, symbol: Option<&str>) -> String {
    format_currency(amount.to_f64().unwrap_or(f64::NAN), symbol)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
