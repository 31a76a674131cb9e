//! Prices are stored as integer minor units (cents). These helpers convert to
//! and from the decimal strings exchanged with clients.

/// Tax multiplier applied when presenting `price_with_tax`, expressed in tenths.
const TAX_RATE_TENTHS: i64 = 11;

/// Highest accepted unit price, `9999.99`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 999_999;

/// Format cents as a decimal string with two fraction digits, e.g. `1050` -> `"10.50"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Parse a non-negative decimal amount with at most two fraction digits.
///
/// Accepts `"10"`, `"10.5"`, `"10.50"` and a comma as decimal separator.
pub fn parse_cents(input: &str) -> Option<i64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }

    let (whole, fraction) = match normalized.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (normalized.as_str(), ""),
    };

    if whole.is_empty() || !whole.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let fraction_cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(fraction_cents)
}

/// Apply the 10% tax, rounding half up to the nearest cent.
///
/// Saturates at `i64::MAX` instead of overflowing.
pub fn with_tax(cents: i64) -> i64 {
    cents.saturating_mul(TAX_RATE_TENTHS).saturating_add(5) / 10
}

/// `quantity` units at `unit_price_cents` each, saturating instead of overflowing.
pub fn line_total(quantity: i32, unit_price_cents: i64) -> i64 {
    i64::from(quantity).saturating_mul(unit_price_cents)
}

/// Sum of line totals, saturating instead of overflowing.
pub fn sum_totals(totals: impl IntoIterator<Item = i64>) -> i64 {
    totals.into_iter().fold(0, i64::saturating_add)
}
