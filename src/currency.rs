//! Currency formatting, tax math, and the static US state tax table.

/// Per-state sales tax rates keyed by 2-letter state code.
pub const STATE_TAX_RATES: [(&str, f64); 10] = [
    ("CA", 0.075),
    ("NY", 0.04),
    ("TX", 0.0625),
    ("FL", 0.06),
    ("PA", 0.06),
    ("IL", 0.0625),
    ("WA", 0.065),
    ("OH", 0.0575),
    ("GA", 0.04),
    ("NC", 0.0475),
];

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `format_currency(10.0, "$") == "$10.00"`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

/// Tax owed on `subtotal` at `tax_rate` percent (8.25 means 8.25%).
pub fn calculate_tax(subtotal: f64, tax_rate: f64) -> f64 {
    round_cents(subtotal * (tax_rate / 100.0))
}

pub fn calculate_total_with_tax(subtotal: f64, tax_rate: f64) -> f64 {
    round_cents(subtotal + calculate_tax(subtotal, tax_rate))
}

/// Parses a formatted currency string into a number.
///
/// Every character outside `[0-9.-]` is dropped before parsing, so
/// accounting-style parentheses are discarded rather than read as a sign:
/// `"($500.00)"` parses as `500.0`. Trailing garbage after the first valid
/// float is ignored.
pub fn parse_currency(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_float_prefix(&cleaned)
}

/// Longest `-?digits(.digits)?` prefix of `s`, parsed once.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let sign_len = usize::from(bytes.first() == Some(&b'-'));
    let int_digits = count_digits(sign_len);
    let mut end = sign_len + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

pub fn convert_currency(amount: f64, from_rate: f64, to_rate: f64) -> f64 {
    round_cents(amount * (to_rate / from_rate))
}

/// Exact-case lookup; `"tx"` is not `"TX"`.
pub fn get_tax_rate_by_state(state: &str) -> Option<f64> {
    STATE_TAX_RATES
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, rate)| *rate)
}
