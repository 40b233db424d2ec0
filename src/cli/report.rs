//! HTML report rendering and display.

use super::ui;
use crate::core::config::ReportConfig;
use crate::core::currency::{Currency, format_rate};
use crate::core::report::{RateReport, build_report};
use crate::core::RateSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ROWS_PLACEHOLDER: &str = "{{ROWS}}";
pub const AS_OF_PLACEHOLDER: &str = "{{AS_OF}}";

/// Escapes text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders one row fragment per currency.
pub fn render_rows(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(|currency| {
            format!(
                r#"
            <div class="row">
                <div class="cell">{}</div>
                <div class="cell">{}</div>
                <div class="cell">{}</div>
            </div>
            "#,
                escape_html(&currency.code),
                format_rate(currency.current_rate),
                format_rate(currency.mean_rate)
            )
        })
        .collect()
}

/// Substitutes the rendered rows, and the fixing date, into `template`.
pub fn render(template: &str, report: &RateReport) -> String {
    let as_of = escape_html(report.as_of.as_deref().unwrap_or("N/A"));
    template
        .replace(ROWS_PLACEHOLDER, &render_rows(&report.currencies))
        .replace(AS_OF_PLACEHOLDER, &as_of)
}

/// Renders `report` into the configured template and writes the output file.
///
/// Returns the path of the written document.
pub fn write_report(report: &RateReport, config: &ReportConfig) -> Result<PathBuf> {
    let template_path = Path::new(&config.template_path);
    let template = fs::read_to_string(template_path).with_context(|| {
        format!(
            "Failed to read report template: {}",
            template_path.display()
        )
    })?;
    if !template.contains(ROWS_PLACEHOLDER) {
        debug!(
            "Template {} has no {} placeholder",
            template_path.display(),
            ROWS_PLACEHOLDER
        );
    }

    let output_path = PathBuf::from(&config.output_path);
    fs::write(&output_path, render(&template, report))
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    Ok(output_path)
}

pub async fn run(
    source: &(dyn RateSource + Send + Sync),
    watch_list: &[String],
    config: &ReportConfig,
    open_report: bool,
) -> Result<PathBuf> {
    let pb = ui::new_progress_bar(2, true);
    pb.set_message("Downloading ECB rates");
    let report = build_report(source, watch_list, &|| pb.inc(1)).await;
    pb.finish_and_clear();

    let output_path = write_report(&report?, config)?;
    println!(
        "Exchange rate report: {}",
        ui::style_text(&output_path.display().to_string(), ui::StyleType::Subtle)
    );

    if open_report {
        debug!("Opening {} in the default viewer", output_path.display());
        open::that(&output_path)
            .with_context(|| format!("Failed to open report: {}", output_path.display()))?;
    }

    Ok(output_path)
}
