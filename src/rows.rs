//! Display rows derived from raw quote data.
//!
//! One fetch cycle maps the quote payload plus the tracked lists onto a flat,
//! ordered sequence of rows: asset rows first, then cross-rate rows, or a
//! single error row when the whole cycle failed.

use crate::config::{CurrencyPair, PRIMARY_CURRENCY};
use crate::consts::cli_consts::ERROR_MESSAGE_MAX_LEN;
use crate::quotes::{AssetQuote, QuoteMap};

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum RowKind {
    Asset,
    CrossRate,
    Error,
}

/// One renderable line of the dashboard table.
///
/// `formatted_value` is always derived from `value` and the row kind by the
/// constructors below; it is never set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub label: String,
    pub value: f64,
    pub formatted_value: String,
    pub change_percent: f64,
}

impl DisplayRow {
    pub fn asset(label: String, value: f64, change_percent: f64) -> Self {
        Self {
            kind: RowKind::Asset,
            label,
            value,
            formatted_value: format_currency(value),
            change_percent,
        }
    }

    pub fn cross_rate(label: String, value: f64) -> Self {
        Self {
            kind: RowKind::CrossRate,
            label,
            value,
            formatted_value: format_rate(value),
            change_percent: 0.0,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: RowKind::Error,
            label: truncate_message(message, ERROR_MESSAGE_MAX_LEN),
            value: 0.0,
            formatted_value: String::new(),
            change_percent: 0.0,
        }
    }
}

/// Derives the full row sequence for one successful fetch cycle.
///
/// Asset rows come first in tracked-asset order, then cross-rate rows in
/// tracked-pair order. Assets absent from the payload are skipped; pairs with
/// no usable bridge are skipped silently.
pub fn derive_rows(quotes: &QuoteMap, assets: &[String], pairs: &[CurrencyPair]) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(assets.len() + pairs.len());

    for asset in assets {
        if let Some(quote) = quotes.get(asset) {
            // A present asset with no primary-currency field still gets a row.
            let value = quote.get(PRIMARY_CURRENCY).copied().unwrap_or(0.0);
            let change = quote
                .get(&format!("{PRIMARY_CURRENCY}_24h_change"))
                .copied()
                .unwrap_or(0.0);
            rows.push(DisplayRow::asset(capitalize(asset), value, change));
        }
    }

    for pair in pairs {
        if let Some(rate) = cross_rate(quotes, assets, pair) {
            rows.push(DisplayRow::cross_rate(pair.label(), rate));
        }
    }

    rows
}

/// Computes `bridge[to] / bridge[from]` through the first tracked asset that
/// carries both currency fields. Returns `None` when no asset qualifies or
/// the divisor is zero.
fn cross_rate(quotes: &QuoteMap, assets: &[String], pair: &CurrencyPair) -> Option<f64> {
    let bridge: &AssetQuote = assets
        .iter()
        .filter_map(|asset| quotes.get(asset))
        .find(|quote| quote.contains_key(&pair.from) && quote.contains_key(&pair.to))?;

    let from = bridge.get(&pair.from).copied()?;
    let to = bridge.get(&pair.to).copied()?;
    if from == 0.0 {
        return None;
    }
    Some(to / from)
}

/// Formats a dollar value with magnitude scaling: `$2.00M`, `$1.5K`, `$999.00`.
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

fn format_rate(value: f64) -> String {
    format!("{:.2}", value)
}

fn truncate_message(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        message.chars().take(max_chars).collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(fields: &[(&str, f64)]) -> AssetQuote {
        fields.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn assets(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_currency_thresholds() {
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1_000.0), "$1.0K");
        assert_eq!(format_currency(1_500.0), "$1.5K");
        assert_eq!(format_currency(2_000_000.0), "$2.00M");
        assert_eq!(format_currency(0.42), "$0.42");
    }

    #[test]
    // All asset rows precede all cross-rate rows, each in tracked order.
    fn test_row_order_is_deterministic() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 50_000.0), ("eur", 46_000.0)]));
        quotes.insert("ethereum".to_string(), quote(&[("usd", 3_000.0), ("eur", 2_760.0)]));

        let rows = derive_rows(
            &quotes,
            &assets(&["ethereum", "bitcoin"]),
            &[CurrencyPair::new("usd", "eur"), CurrencyPair::new("eur", "usd")],
        );

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Ethereum", "Bitcoin", "USD/EUR", "EUR/USD"]);
        assert_eq!(rows[0].kind, RowKind::Asset);
        assert_eq!(rows[1].kind, RowKind::Asset);
        assert_eq!(rows[2].kind, RowKind::CrossRate);
        assert_eq!(rows[3].kind, RowKind::CrossRate);
    }

    #[test]
    fn test_cross_rate_through_bridge_asset() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 50_000.0), ("eur", 46_000.0)]));

        let rows = derive_rows(
            &quotes,
            &assets(&["bitcoin"]),
            &[CurrencyPair::new("usd", "eur")],
        );

        let rate = rows
            .iter()
            .find(|r| r.kind == RowKind::CrossRate)
            .expect("cross-rate row");
        assert!((rate.value - 0.92).abs() < 1e-9);
        assert_eq!(rate.formatted_value, "0.92");
    }

    #[test]
    // The bridge is the first tracked asset carrying both currencies, not
    // merely the first tracked asset.
    fn test_bridge_skips_assets_missing_a_leg() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 50_000.0)]));
        quotes.insert("ethereum".to_string(), quote(&[("usd", 3_000.0), ("brl", 16_500.0)]));

        let rows = derive_rows(
            &quotes,
            &assets(&["bitcoin", "ethereum"]),
            &[CurrencyPair::new("usd", "brl")],
        );

        let rate = rows
            .iter()
            .find(|r| r.kind == RowKind::CrossRate)
            .expect("cross-rate row");
        assert!((rate.value - 5.5).abs() < 1e-9);
    }

    #[test]
    // No asset with both legs: the pair is omitted, nothing crashes.
    fn test_missing_bridge_omits_pair() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 50_000.0)]));

        let rows = derive_rows(
            &quotes,
            &assets(&["bitcoin"]),
            &[CurrencyPair::new("usd", "jpy")],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RowKind::Asset);
    }

    #[test]
    fn test_zero_divisor_omits_pair() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 0.0), ("eur", 46_000.0)]));

        let rows = derive_rows(
            &quotes,
            &assets(&["bitcoin"]),
            &[CurrencyPair::new("usd", "eur")],
        );

        assert!(rows.iter().all(|r| r.kind == RowKind::Asset));
    }

    #[test]
    fn test_untracked_and_absent_assets_are_skipped() {
        let mut quotes = QuoteMap::new();
        quotes.insert("bitcoin".to_string(), quote(&[("usd", 50_000.0)]));

        let rows = derive_rows(&quotes, &assets(&["bitcoin", "dogecoin"]), &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Bitcoin");
    }

    #[test]
    fn test_change_percent_defaults_to_zero() {
        let mut quotes = QuoteMap::new();
        quotes.insert(
            "bitcoin".to_string(),
            quote(&[("usd", 50_000.0), ("usd_24h_change", 1.25)]),
        );
        quotes.insert("ethereum".to_string(), quote(&[("usd", 3_000.0)]));

        let rows = derive_rows(&quotes, &assets(&["bitcoin", "ethereum"]), &[]);
        assert!((rows[0].change_percent - 1.25).abs() < 1e-9);
        assert_eq!(rows[1].change_percent, 0.0);
    }

    #[test]
    fn test_error_row_truncates_message() {
        let long = "x".repeat(200);
        let row = DisplayRow::error(&long);
        assert_eq!(row.kind, RowKind::Error);
        assert_eq!(row.label.chars().count(), ERROR_MESSAGE_MAX_LEN);

        let short = DisplayRow::error("timeout");
        assert_eq!(short.label, "timeout");
    }

    #[test]
    // formatted_value is a pure function of value and kind.
    fn test_formatted_value_is_derived() {
        let row = DisplayRow::asset("Bitcoin".to_string(), 50_000.0, 0.0);
        assert_eq!(row.formatted_value, format_currency(row.value));

        let rate = DisplayRow::cross_rate("USD/EUR".to_string(), 0.92);
        assert_eq!(rate.formatted_value, "0.92");
    }
}
