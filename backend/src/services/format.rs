//! Display formatting shared by the presentation front ends.
//!
//! Counts follow Polish number formatting: a non-breaking space groups
//! thousands, and four-digit numbers stay ungrouped. Every absent value
//! renders as [`PLACEHOLDER`], never as zero.

use chrono::{DateTime, NaiveDateTime};

/// Marker for an absent value.
pub const PLACEHOLDER: &str = "—";

const GROUP_SEPARATOR: char = '\u{a0}';

/// `HH:MM` clock label of an RFC 3339 (or offset-less ISO) timestamp, in the
/// timestamp's own offset.
pub fn time_label(timestamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format("%H:%M").to_string());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|dt| dt.format("%H:%M").to_string())
}

/// Clock time of an optional timestamp, or the placeholder.
pub fn format_time(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(time_label)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Rounded count with Polish digit grouping.
pub fn format_count(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_digits(v.round() as i64),
        None => PLACEHOLDER.to_string(),
    }
}

/// Share fraction as a percentage with two decimals (`0.1234` → `12.34`).
pub fn format_share(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.2}", v * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// Plain number: integers without decimals, others with up to two.
pub fn format_number(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => {
            let text = format!("{:.2}", v);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        None => PLACEHOLDER.to_string(),
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    if digits.len() < 5 {
        return format!("{}{}", sign, digits);
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
