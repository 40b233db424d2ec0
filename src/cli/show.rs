use super::ui;
use crate::core::RateSource;
use crate::core::report::{RateReport, build_report};
use anyhow::Result;
use comfy_table::Cell;

impl RateReport {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Current (EUR)"),
            ui::header_cell("Mean (EUR)"),
        ]);

        for currency in &self.currencies {
            table.add_row(vec![
                Cell::new(&currency.code),
                ui::format_optional_cell(currency.current_rate, |r| format!("{r:?}")),
                ui::format_optional_cell(currency.mean_rate, |r| format!("{r:.4}")),
            ]);
        }

        let as_of = self.as_of.as_deref().unwrap_or("N/A");
        format!(
            "{}\n\n{}",
            ui::style_text(
                &format!("ECB reference rates as of {as_of}"),
                ui::StyleType::Title
            ),
            table
        )
    }
}

/// Prints the watched currencies as a terminal table.
pub async fn run(source: &(dyn RateSource + Send + Sync), watch_list: &[String]) -> Result<()> {
    let pb = ui::new_progress_bar(2, false);
    let report = build_report(source, watch_list, &|| pb.inc(1)).await;
    pb.finish_and_clear();

    println!("{}", report?.display_as_table());
    Ok(())
}
