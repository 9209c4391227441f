//! Display strings for the dashboard's read-only text fields.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a count with thousands separators, e.g. `"12,345"`.
///
/// ```
/// use employee_dashboard::query::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(61_386), "61,386");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(u128::from(value))
}

/// Formats an amount as whole currency units, truncating cents.
///
/// ```
/// use employee_dashboard::query::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(6340025, 2)), "$63,400");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let whole = value.trunc();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = whole.abs().to_u128().unwrap_or(0);
    format!("{}${}", sign, group_thousands(magnitude))
}
