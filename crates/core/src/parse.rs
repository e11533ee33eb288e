//! Lenient parsing of form and product-feed values.
//!
//! Feeds hand us strings like `"39.6 cm (15.6\")"`, `"1 TB"` or `"4.7 GHz"`.
//! Every helper here returns `None` instead of failing; the caller treats that
//! as "no contribution".

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("static decimal regex"));

static INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([0-9]+\.?[0-9]*)\s*(?:"|inch|pulgada|pulg)"#).expect("static inch regex")
});

/// Words accepted as "true" when a feed sends a boolean as text.
const TRUTHY: &[&str] = &["yes", "si", "sí", "true", "1", "y", "ja", "oui"];

/// Plausible laptop/monitor diagonal range when a value carries several numbers.
const DIAGONAL_INCHES_RANGE: std::ops::RangeInclusive<f64> = 10.0..=27.0;

/// First decimal number in `text`; `,` is accepted as the decimal separator.
pub fn parse_number(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    let found = DECIMAL.find(&normalized)?;
    found.as_str().parse().ok()
}

/// Capacity in GB. `TB` values are multiplied by 1024, `MB` values divided
/// (never below 1 GB); anything else is taken as GB.
pub fn parse_capacity_gb(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let num = parse_number(&lower)?;
    if lower.contains("tb") {
        Some(num * 1024.0)
    } else if lower.contains("mb") {
        Some((num / 1024.0).floor().max(1.0))
    } else {
        Some(num)
    }
}

/// Screen diagonal in inches.
///
/// An explicit inch marker wins. Otherwise, with several numbers (`39.6 cm
/// (15.6")` without the quote), the last one inside 10..=27 is taken. A lone
/// value above 27 or marked `cm` is converted from centimetres.
pub fn parse_screen_size(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    let lower = normalized.to_lowercase();

    if let Some(caps) = INCHES.captures(&lower) {
        if let Ok(inches) = caps[1].parse::<f64>() {
            return Some(inches);
        }
    }

    let numbers: Vec<f64> =
        DECIMAL.find_iter(&normalized).filter_map(|m| m.as_str().parse().ok()).collect();
    if numbers.len() >= 2 {
        if let Some(inches) = numbers.iter().rev().find(|n| DIAGONAL_INCHES_RANGE.contains(*n)) {
            return Some(*inches);
        }
    }

    let num = *numbers.first()?;
    if num > *DIAGONAL_INCHES_RANGE.end() || lower.contains("cm") {
        return Some(round_to(num / 2.54, 1));
    }
    Some(num)
}

/// Clock frequency in GHz; `MHz` values are converted.
pub fn parse_frequency_ghz(text: &str) -> Option<f64> {
    let num = parse_number(text)?;
    if text.to_lowercase().contains("mhz") {
        Some(round_to(num / 1000.0, 2))
    } else {
        Some(num)
    }
}

/// Truthy words (`yes`, `si`, `true`, `1`, ...) map to `true`, everything else to `false`.
pub fn parse_bool(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    TRUTHY.contains(&lower.as_str())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Render a number the way the catalog shows it: `14` rather than `14.0`.
pub(crate) fn display_number(value: f64) -> String {
    format!("{value}")
}

/// A number contributes to a name only when it is finite and non-zero.
pub(crate) fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_number_drops_integral_fraction() {
        assert_eq!(display_number(14.0), "14");
        assert_eq!(display_number(15.6), "15.6");
    }

    #[test]
    fn present_filters_zero_and_nan() {
        assert_eq!(present(Some(0.0)), None);
        assert_eq!(present(Some(f64::NAN)), None);
        assert_eq!(present(Some(8.0)), Some(8.0));
        assert_eq!(present(None), None);
    }
}
