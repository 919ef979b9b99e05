//! Rupiah amounts and id-ID display formatting
//!
//! The rupiah has no minor unit in circulation, so every money value in this
//! crate is an `i64` of whole rupiah. Display strings follow the id-ID locale:
//! `.` groups thousands and `,` separates decimals.
//!
//! Formatting and parsing are inverse operations for money values:
//! `parse_rupiah(&format_rupiah(x)) == Ok(x)` for every `i64`.

use thiserror::Error;

/// Currency prefix used on every formatted amount
pub const RUPIAH_PREFIX: &str = "Rp";

/// Errors raised when re-parsing display strings
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Invalid rupiah amount: '{0}'")]
    InvalidMoney(String),

    #[error("Invalid percentage: '{0}'")]
    InvalidPercent(String),
}

/// Round a fractional rupiah value to the nearest whole rupiah
///
/// Halves round away from zero (`2.5 -> 3`, `-2.5 -> -3`).
pub fn round_rupiah(value: f64) -> i64 {
    value.round() as i64
}

/// Format a whole-rupiah amount, e.g. `100000 -> "Rp 100.000"`
///
/// # Example
/// ```
/// use cekkirim_core_rs::core::money::format_rupiah;
///
/// assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
/// assert_eq!(format_rupiah(-10_000), "-Rp 10.000");
/// ```
pub fn format_rupiah(amount: i64) -> String {
    let grouped = group_thousands(amount.unsigned_abs());
    if amount < 0 {
        format!("-{} {}", RUPIAH_PREFIX, grouped)
    } else {
        format!("{} {}", RUPIAH_PREFIX, grouped)
    }
}

/// Parse an id-ID formatted rupiah string back into whole rupiah
///
/// Accepts the output of [`format_rupiah`] as well as the common variants
/// users paste into forms: no space after `Rp`, no prefix at all, and the
/// sign placed after the prefix (`Rp -10.000`).
pub fn parse_rupiah(text: &str) -> Result<i64, FormatError> {
    let invalid = || FormatError::InvalidMoney(text.to_string());

    let mut rest = text.trim();
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped.trim_start();
    }
    if let Some(stripped) = rest.strip_prefix(RUPIAH_PREFIX) {
        rest = stripped.trim_start_matches(|c: char| c.is_whitespace());
    }
    if let Some(stripped) = rest.strip_prefix('-') {
        if negative {
            return Err(invalid());
        }
        negative = true;
        rest = stripped.trim_start();
    }

    if !is_grouped_integer(rest) {
        return Err(invalid());
    }

    let digits: String = rest.chars().filter(|c| *c != '.').collect();
    let magnitude: u64 = digits.parse().map_err(|_| invalid())?;

    if negative {
        // -(i64::MIN) does not fit in i64, so compare magnitudes as u64
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(invalid());
        }
        Ok((magnitude as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(magnitude).map_err(|_| invalid())
    }
}

/// Format a decimal value with id-ID separators, e.g. `1234.5 -> "1.234,50"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        // avoid printing "-0,00"
        rounded = 0.0;
    }

    let raw = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let grouped = match int_part.parse::<u64>() {
        Ok(n) => group_thousands(n),
        Err(_) => int_part.to_string(),
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{},{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a percentage with two decimals, e.g. `40.0 -> "40,00%"`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 2))
}

/// Parse an id-ID percentage string such as `"40,00%"` or `"-12,5 %"`
pub fn parse_percent(text: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidPercent(text.to_string());

    let body = text.trim().trim_end_matches('%').trim_end();
    let (sign, unsigned) = match body.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, body),
    };

    let (int_part, frac_part) = match unsigned.split_once(',') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    if !is_grouped_integer(int_part) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let normalized = format!(
        "{}.{}",
        int_part.replace('.', ""),
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    let value: f64 = normalized.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(sign * value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Digits, optionally grouped in threes with `.`
fn is_grouped_integer(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let groups: Vec<&str> = text.split('.').collect();
    if groups.len() == 1 {
        return groups[0].chars().all(|c| c.is_ascii_digit());
    }
    let first_ok = (1..=3).contains(&groups[0].len());
    first_ok
        && groups
            .iter()
            .enumerate()
            .all(|(i, g)| (i == 0 || g.len() == 3) && g.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(100_000), "Rp 100.000");
        assert_eq!(format_rupiah(12_345_678), "Rp 12.345.678");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-10_000), "-Rp 10.000");
    }

    #[test]
    fn test_parse_rupiah_variants() {
        assert_eq!(parse_rupiah("Rp 100.000"), Ok(100_000));
        assert_eq!(parse_rupiah("Rp100.000"), Ok(100_000));
        assert_eq!(parse_rupiah("100.000"), Ok(100_000));
        assert_eq!(parse_rupiah("100000"), Ok(100_000));
        assert_eq!(parse_rupiah("-Rp 10.000"), Ok(-10_000));
        assert_eq!(parse_rupiah("Rp -10.000"), Ok(-10_000));
        assert_eq!(parse_rupiah("Rp\u{a0}5.000"), Ok(5_000));
    }

    #[test]
    fn test_parse_rupiah_rejects_garbage() {
        assert!(parse_rupiah("").is_err());
        assert!(parse_rupiah("Rp").is_err());
        assert!(parse_rupiah("Rp 10,5").is_err());
        assert!(parse_rupiah("Rp 1.00").is_err());
        assert!(parse_rupiah("--Rp 1").is_err());
        assert!(parse_rupiah("-Rp -1").is_err());
        assert!(parse_rupiah("abc").is_err());
    }

    #[test]
    fn test_parse_rupiah_extremes() {
        assert_eq!(parse_rupiah(&format_rupiah(i64::MAX)), Ok(i64::MAX));
        assert_eq!(parse_rupiah(&format_rupiah(i64::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn test_round_rupiah_half_away_from_zero() {
        assert_eq!(round_rupiah(2.5), 3);
        assert_eq!(round_rupiah(2.4), 2);
        assert_eq!(round_rupiah(-2.5), -3);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(40.0), "40,00%");
        assert_eq!(format_percent(-12.5), "-12,50%");
        assert_eq!(format_percent(-0.0001), "0,00%");
        assert_eq!(format_percent(1234.567), "1.234,57%");
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("40,00%"), Ok(40.0));
        assert_eq!(parse_percent("-12,50 %"), Ok(-12.5));
        assert_eq!(parse_percent("1.234,57%"), Ok(1234.57));
        assert_eq!(parse_percent("7%"), Ok(7.0));
        assert!(parse_percent("abc%").is_err());
        assert!(parse_percent("").is_err());
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.5, 2), "1.234,50");
        assert_eq!(format_decimal(0.004, 2), "0,00");
        assert_eq!(format_decimal(42.0, 0), "42");
    }
}
