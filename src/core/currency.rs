//! Currency record produced for each watched code

use std::fmt::Display;

/// A watched currency with its latest and mean historical rate against EUR.
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub code: String,
    pub current_rate: Option<f64>,
    pub mean_rate: Option<f64>,
}

impl Currency {
    pub fn new(code: &str, current_rate: Option<f64>, mean_rate: Option<f64>) -> Self {
        Currency {
            code: code.to_string(),
            current_rate,
            mean_rate,
        }
    }
}

/// Formats an optional rate, `None` is displayed as "N/A".
///
/// Whole numbers keep their fractional part (`2.0`, not `2`).
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map_or("N/A".to_string(), |r| format!("{r:?}"))
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: current={}, mean={}",
            self.code,
            format_rate(self.current_rate),
            format_rate(self.mean_rate)
        )
    }
}
