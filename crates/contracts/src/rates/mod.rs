//! Rate documents published by the exchange-rate provider, plus the
//! conversion arithmetic and display formatting on top of them.
//!
//! The provider nests all rates for one source currency under that
//! currency's lowercase code: `GET /usd.json` returns
//! `{ "usd": { "lkr": 300.0, "eur": 0.92, ... } }`. A document lives for
//! exactly one conversion; nothing is cached.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Rate table for one source currency: lowercase target code → multiplier.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    /// Rate for `target`, accepted in either case. `None` when the provider
    /// publishes no rate for that currency.
    pub fn rate(&self, target: &str) -> Option<f64> {
        self.0.get(&target.to_ascii_lowercase()).copied()
    }
}

/// Full provider response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RateDocument(HashMap<String, RateTable>);

impl RateDocument {
    /// Inner table keyed by the source currency. A well-formed response
    /// always contains exactly this key; `None` means the body is not what
    /// the provider documents.
    pub fn rates_for(&self, source: &str) -> Option<&RateTable> {
        self.0.get(&source.to_ascii_lowercase())
    }
}

/// Why a conversion produced no result line.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Transport failure or non-success HTTP status. Surfaced to the user as
    /// the generic failure message; detail goes to the console log only.
    #[error("rate request failed: {detail}")]
    Network { detail: String },

    /// Response body did not match the provider's documented shape.
    #[error("unexpected rate source response: {detail}")]
    MalformedResponse { detail: String },

    /// The provider answered but publishes no rate for this pair. Not an
    /// error condition from the user's point of view. The field holding the
    /// source currency is called `base`: thiserror reserves `source` for the
    /// error-chain accessor.
    #[error("no rate published for {base} -> {target}")]
    RateUnavailable { base: String, target: String },
}

/// Outcome of parsing the free-text amount field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    /// True when the raw text was rejected and the default of 1 substituted.
    /// The caller rewrites the input field to "1" in that case.
    pub coerced: bool,
}

/// Parse the amount field the way the widget always has: the longest leading
/// numeric prefix counts ("12abc" is 12), and only inputs with no prefix at
/// all, or a non-finite or non-positive value, coerce to 1.
pub fn parse_amount(raw: &str) -> ParsedAmount {
    match leading_number(raw) {
        Some(value) if value.is_finite() && value > 0.0 => ParsedAmount {
            value,
            coerced: false,
        },
        _ => ParsedAmount {
            value: 1.0,
            coerced: true,
        },
    }
}

/// Longest leading float in `raw` after optional whitespace: sign, digits
/// with an optional decimal point, optional exponent. `None` when the text
/// starts with no digit at all.
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Format a monetary value for the result line: at most 4 fractional digits,
/// trailing zeros trimmed, "," thousands grouping on the integer part.
pub fn format_amount(value: f64) -> String {
    let mut fixed = format!("{:.4}", value);
    while fixed.ends_with('0') {
        fixed.pop();
    }
    if fixed.ends_with('.') {
        fixed.pop();
    }

    let (integer_part, fraction) = match fixed.split_once('.') {
        Some((int, frac)) => (int.to_string(), Some(frac.to_string())),
        None => (fixed, None),
    };

    // Insert a separator every 3 digits, walking from the right.
    let mut grouped_rev = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped_rev.push(',');
        }
        grouped_rev.push(*c);
    }
    let grouped: String = grouped_rev.chars().rev().collect();

    match fraction {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}

/// The displayed result: `"<amount> <SOURCE> = <result> <TARGET>"`.
pub fn format_result_line(amount: f64, source: &str, converted: f64, target: &str) -> String {
    format!(
        "{} {} = {} {}",
        format_amount(amount),
        source,
        format_amount(converted),
        target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_amounts_pass_through() {
        assert_eq!(
            parse_amount("10"),
            ParsedAmount {
                value: 10.0,
                coerced: false
            }
        );
        assert_eq!(parse_amount(" 0.5 ").value, 0.5);
        assert!(!parse_amount("2500.75").coerced);
    }

    #[test]
    fn bad_amounts_coerce_to_one() {
        for raw in ["", "abc", "x12", "-3", "0", "0.0kg", "NaN", "inf"] {
            let parsed = parse_amount(raw);
            assert_eq!(parsed.value, 1.0, "input {raw:?}");
            assert!(parsed.coerced, "input {raw:?}");
        }
    }

    #[test]
    fn trailing_text_does_not_reject_the_prefix() {
        assert_eq!(
            parse_amount("12abc"),
            ParsedAmount {
                value: 12.0,
                coerced: false
            }
        );
        assert_eq!(parse_amount("3.5 usd").value, 3.5);
        assert_eq!(parse_amount(".5x").value, 0.5);
        assert_eq!(parse_amount("1e2y").value, 100.0);
        // A bare exponent marker is trailing text, not an exponent.
        assert_eq!(parse_amount("2e").value, 2.0);
        assert!(!parse_amount("2e").coerced);
    }

    #[test]
    fn conversion_is_amount_times_rate() {
        assert_eq!(convert(10.0, 300.0), 3000.0);
        assert_eq!(convert(1.0, 0.9217), 0.9217);
    }

    #[test]
    fn formatting_trims_and_groups() {
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(3000.0), "3,000");
        assert_eq!(format_amount(1234567.5), "1,234,567.5");
        assert_eq!(format_amount(0.9217), "0.9217");
        assert_eq!(format_amount(0.123456), "0.1235");
        assert_eq!(format_amount(2.5000), "2.5");
    }

    #[test]
    fn result_line_matches_widget_output() {
        assert_eq!(
            format_result_line(10.0, "USD", convert(10.0, 300.0), "LKR"),
            "10 USD = 3,000 LKR"
        );
    }

    #[test]
    fn document_lookup_present_and_missing() {
        let doc: RateDocument =
            serde_json::from_str(r#"{ "usd": { "lkr": 300.0, "eur": 0.92 } }"#).unwrap();

        let table = doc.rates_for("USD").expect("source key present");
        assert_eq!(table.rate("lkr"), Some(300.0));
        assert_eq!(table.rate("EUR"), Some(0.92));
        // Absent target drives the rate-unavailable message.
        assert_eq!(table.rate("jpy"), None);
        // Absent source key means the body is malformed.
        assert!(doc.rates_for("eur").is_none());
    }

    #[test]
    fn error_messages_are_distinct() {
        let network = ConversionError::Network {
            detail: "HTTP 503".into(),
        };
        let unavailable = ConversionError::RateUnavailable {
            base: "USD".into(),
            target: "XYZ".into(),
        };
        assert_ne!(network.to_string(), unavailable.to_string());
        assert_eq!(
            unavailable.to_string(),
            "no rate published for USD -> XYZ"
        );
        // `base` must not register as a wrapped cause.
        assert!(std::error::Error::source(&unavailable).is_none());
    }
}
