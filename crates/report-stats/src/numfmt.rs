//! Number formatting helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Insert `,` every three digits of the integer part of a formatted number.
///
/// Input that is not a plain decimal number (`inf`, `NaN`) is returned as-is.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return formatted.to_string();
    }

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac_part);
    out
}

/// `value` with `decimals` places and thousands separators.
pub fn fmt_grouped(value: f64, decimals: usize) -> String {
    group_thousands(&format!("{:.*}", decimals, value))
}

/// `$` followed by the value with two places and thousands separators.
pub fn fmt_currency(value: f64) -> String {
    format!("${}", fmt_grouped(value, 2))
}

/// Decimal with `decimals` places (banker's rounding) and thousands separators.
pub fn fmt_decimal(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    group_thousands(&format!("{:.*}", decimals as usize, rounded))
}

/// `$` followed by a two-place grouped decimal.
pub fn fmt_decimal_currency(value: Decimal) -> String {
    format!("${}", fmt_decimal(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0.50"), "0.50");
        assert_eq!(group_thousands("999.99"), "999.99");
        assert_eq!(group_thousands("1000.00"), "1,000.00");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-100000"), "-100,000");
        assert_eq!(group_thousands("inf"), "inf");
        assert_eq!(group_thousands("NaN"), "NaN");
    }

    #[test]
    fn test_fmt_currency() {
        assert_eq!(fmt_currency(100000.0), "$100,000.00");
        assert_eq!(fmt_currency(-1234.5), "$-1,234.50");
        assert_eq!(fmt_currency(0.0), "$0.00");
    }

    #[test]
    fn test_fmt_grouped() {
        assert_eq!(fmt_grouped(1234.5678, 2), "1,234.57");
        assert_eq!(fmt_grouped(1500.0, 0), "1,500");
    }

    #[test]
    fn test_fmt_decimal() {
        assert_eq!(fmt_decimal(dec!(-1500), 0), "-1,500");
        assert_eq!(fmt_decimal(dec!(80.125), 2), "80.12");
        assert_eq!(fmt_decimal(dec!(12), 2), "12.00");
        assert_eq!(fmt_decimal_currency(dec!(11587.5)), "$11,587.50");
    }
}
