//! # Formatting Utilities
//!
//! Number formatting for the price table. Address shortening lives in
//! [`shared::utils`].
//!
//! - [`format_number`] - Comma separators with fixed decimals
//! - [`format_price`] - USD price with precision scaled to magnitude
//! - [`format_market_cap`] - USD amount with K/M/B suffix
//! - [`format_time`] - `HH:MM:SS` in UTC

use shared::dto::price::PriceUpdate;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// ```rust
/// use listen_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-1000.0, 0), "-1,000");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format a USD price
///
/// Prices of at least $1 get cents, sub-dollar prices down to a cent get
/// four decimals, and smaller prices keep four significant digits.
pub fn format_price(price: f64) -> String {
    let decimals = if price == 0.0 || price.abs() >= 1.0 {
        2
    } else if price.abs() >= 0.01 {
        4
    } else {
        let leading_zeros = (-price.abs().log10()).floor() as usize;
        (leading_zeros + 4).min(12)
    };
    format!("${}", format_number(price, decimals))
}

const MAGNITUDES: [(f64, &str); 4] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B")];

/// Format a USD amount with a magnitude suffix
///
/// The suffix is picked from the value as displayed, so 999,999 reads
/// "$1.00M" rather than "$1,000.00K".
pub fn format_market_cap(value: f64) -> String {
    let magnitude = value.abs();
    let mut index = MAGNITUDES
        .iter()
        .rposition(|(scale, _)| magnitude >= *scale)
        .unwrap_or(0);

    let rounded = (magnitude / MAGNITUDES[index].0 * 100.0).round() / 100.0;
    if rounded >= 1000.0 && index + 1 < MAGNITUDES.len() {
        index += 1;
    }

    let (scale, suffix) = MAGNITUDES[index];
    format!("${}{}", format_number(value / scale, 2), suffix)
}

/// Format the tick time as `HH:MM:SS` UTC
pub fn format_time(update: &PriceUpdate) -> String {
    update
        .time()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
