//! Conversion of ECB reference rate CSV documents into per-currency series.
//!
//! Both the daily and the historical ECB files share one layout: a header row
//! whose first column is the date label followed by currency codes, then one
//! row per business day. Values are parsed leniently: anything that is not a
//! number (the source uses `N/A` for days without a fixing) is skipped on its
//! own, so one bad cell never discards the rest of its row or the document.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

const DATE_FORMATS: [&str; 2] = ["%d %B %Y", "%Y-%m-%d"];

/// Observations per currency code, as parsed from a single document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    codes: Vec<String>,
    series: HashMap<String, Vec<f64>>,
    as_of: Option<String>,
}

/// Splits a CSV line, trimming fields and dropping the empty ones.
///
/// The ECB historical file ends every line with a trailing comma, so positions
/// are counted after empty fields are removed.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

fn normalize_date(raw: &str) -> String {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .map_or_else(|| raw.to_string(), |date| date.format("%Y-%m-%d").to_string())
}

impl RateTable {
    /// Parses raw CSV text. Never fails: malformed content yields fewer observations.
    pub fn parse(data: &str) -> Self {
        let mut table = RateTable::default();
        let mut lines = data.trim().split('\n');

        let header: Vec<String> = match lines.next() {
            Some(line) => split_fields(line)
                .into_iter()
                .skip(1)
                .map(str::to_string)
                .collect(),
            None => return table,
        };

        for code in &header {
            if !table.series.contains_key(code) {
                table.series.insert(code.clone(), Vec::new());
                table.codes.push(code.clone());
            }
        }

        let mut skipped = 0usize;
        for line in lines {
            let fields = split_fields(line);
            let Some((date, values)) = fields.split_first() else {
                continue;
            };

            if table.as_of.is_none() {
                table.as_of = Some(normalize_date(date));
            }

            for (i, code) in header.iter().enumerate() {
                match values.get(i).and_then(|value| value.parse::<f64>().ok()) {
                    Some(rate) => {
                        if let Some(series) = table.series.get_mut(code) {
                            series.push(rate);
                        }
                    }
                    None => skipped += 1,
                }
            }
        }

        debug!(
            "Parsed {} currencies, skipped {} non-numeric or missing values",
            table.codes.len(),
            skipped
        );
        table
    }

    /// Currency codes in header order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn get(&self, code: &str) -> Option<&[f64]> {
        self.series.get(code).map(Vec::as_slice)
    }

    /// Date of the first data row, ISO formatted when recognised.
    pub fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }

    /// First observation for `code`; the most recent one in ECB documents.
    pub fn first(&self, code: &str) -> Option<f64> {
        self.get(code).and_then(|series| series.first().copied())
    }

    /// Mean of all observations for `code`, rounded to 4 decimal places.
    ///
    /// Returns `None` when the code is unknown or has no valid observation.
    pub fn mean(&self, code: &str) -> Option<f64> {
        let series = self.get(code)?;
        if series.is_empty() {
            return None;
        }

        let mean = series.iter().sum::<f64>() / series.len() as f64;
        Some(round_to(mean, 4))
    }
}

/// Rounds the exact binary value of `value` to `decimals` places, exact ties to even.
///
/// Non-finite values and magnitudes with no fractional bits are returned unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() || value.abs() >= 2f64.powi(52) {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
