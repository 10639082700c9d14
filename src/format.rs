//! Display Formatting
//!
//! Pure conversions from raw values to display strings.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::models::Cost;

/// Currency label used when no config is at hand
pub const DEFAULT_CURRENCY: &str = "PKR";

/// Numeric quantity of a raw cost.
///
/// Every character other than digits and `.` is dropped, then the longest
/// leading decimal is parsed. Unparseable or empty input is zero.
pub fn parse_amount(cost: &Cost) -> f64 {
    match cost {
        Cost::Number(n) if n.is_finite() => *n,
        Cost::Number(_) => 0.0,
        Cost::Text(s) => parse_amount_str(s),
    }
}

fn parse_amount_str(s: &str) -> f64 {
    let stripped: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in stripped.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    stripped[..end].parse().unwrap_or(0.0)
}

/// Group thousands with `,` and keep at most three fraction digits
pub fn localize_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Optional cost line: empty when the cost is absent or parses to zero
pub fn format_cost(cost: Option<&Cost>, currency: &str) -> String {
    match cost.map(parse_amount) {
        Some(amount) if amount != 0.0 => format_total(amount, currency),
        _ => String::new(),
    }
}

/// Aggregate value line, always explicit ("PKR 0" for an empty wishlist)
pub fn format_total(amount: f64, currency: &str) -> String {
    format!("{} {}", currency, localize_number(amount))
}

/// Human label from a raw field name: `price_range` -> `Price Range`
pub fn title_case(field_name: &str) -> String {
    let spaced: String = field_name
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

/// Local calendar date as M/D/YYYY; empty for an invalid timestamp
pub fn format_date_millis(ts: i64) -> String {
    match Local.timestamp_millis_opt(ts).single() {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => String::new(),
    }
}

/// Date string from data (ISO date or RFC 3339) as M/D/YYYY; raw text when unparseable
pub fn format_date_str(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.with_timezone(&Local).format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `★` repeated floor(rating) times
pub fn stars(rating: f64) -> String {
    if !rating.is_finite() || rating < 1.0 {
        return String::new();
    }
    "★".repeat(rating.floor() as usize)
}

/// First `limit` characters followed by "..."
pub fn excerpt(text: &str, limit: usize) -> String {
    let head: String = text.chars().take(limit).collect();
    format!("{}...", head)
}
