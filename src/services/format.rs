//! Locale-style number formatting for stat tiles.
//!
//! Counts use western thousands grouping (`1,234,567`). Currency uses the
//! Indian system: the last three digits form one group and every group to
//! the left holds two digits (`12,34,567`).

/// Maximum fraction digits kept when formatting currency.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a count with comma thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a number with Indian digit grouping.
///
/// Rounds to at most three fraction digits and drops trailing zeros.
/// Non-finite input formats as `0`.
pub fn format_indian(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let abs = value.abs();
    let mut integer = abs.trunc();
    let mut fraction = (abs.fract() * scale as f64).round() as u64;
    if fraction >= scale {
        integer += 1.0;
        fraction = 0;
    }

    let mut out = String::new();
    if value < 0.0 && (integer > 0.0 || fraction > 0) {
        out.push('-');
    }
    out.push_str(&group_indian(&format!("{integer:.0}")));
    if fraction > 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Format an amount in rupees, e.g. `₹12,34,567`.
pub fn format_rupees(value: f64) -> String {
    format!("₹{}", format_indian(value))
}

/// Group a plain run of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
