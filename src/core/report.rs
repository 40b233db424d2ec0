//! Assembly of currency records from parsed rate tables.

use crate::core::currency::Currency;
use crate::core::rates::RateTable;
use crate::core::source::RateSource;
use anyhow::Result;
use futures::future::try_join;
use tracing::{debug, info};

/// Currency records for one run, with the date of the daily fixing.
#[derive(Debug, Clone)]
pub struct RateReport {
    pub as_of: Option<String>,
    pub currencies: Vec<Currency>,
}

/// Builds one record per watched code, in watch-list order.
///
/// The current rate comes from the first daily observation and the mean from
/// the whole historical series. Codes missing from either table get `None`.
pub fn assemble(watch_list: &[String], daily: &RateTable, historical: &RateTable) -> Vec<Currency> {
    watch_list
        .iter()
        .map(|code| {
            let currency = Currency::new(code, daily.first(code), historical.mean(code));
            debug!("Assembled {}", currency);
            currency
        })
        .collect()
}

/// Retrieves both documents from `source` and aggregates them for `watch_list`.
///
/// The downloads run concurrently; the first failure aborts the whole report.
/// `update_callback` is invoked once per completed download.
pub async fn build_report(
    source: &(dyn RateSource + Send + Sync),
    watch_list: &[String],
    update_callback: &(dyn Fn()),
) -> Result<RateReport> {
    info!("Fetching daily and historical reference rates");
    let daily = async {
        let text = source.fetch_daily().await?;
        update_callback();
        Ok::<_, anyhow::Error>(text)
    };
    let historical = async {
        let text = source.fetch_historical().await?;
        update_callback();
        Ok::<_, anyhow::Error>(text)
    };
    let (daily, historical) = try_join(daily, historical).await?;

    let daily = RateTable::parse(&daily);
    let historical = RateTable::parse(&historical);
    debug!(
        "Daily table has {} currencies, historical table has {}",
        daily.codes().len(),
        historical.codes().len()
    );

    Ok(RateReport {
        as_of: daily.as_of().map(str::to_string),
        currencies: assemble(watch_list, &daily, &historical),
    })
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::core::source::RateSource;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    /// Serves fixed documents, or fails for a `None` document.
    pub struct MockRateSource {
        pub daily: Option<String>,
        pub historical: Option<String>,
    }

    impl MockRateSource {
        pub fn new(daily: &str, historical: &str) -> Self {
            MockRateSource {
                daily: Some(daily.to_string()),
                historical: Some(historical.to_string()),
            }
        }

        fn serve(document: &Option<String>, name: &str) -> Result<String> {
            document
                .clone()
                .ok_or_else(|| anyhow!("{name} document unavailable"))
        }
    }

    #[async_trait]
    impl RateSource for MockRateSource {
        async fn fetch_daily(&self) -> Result<String> {
            Self::serve(&self.daily, "daily")
        }

        async fn fetch_historical(&self) -> Result<String> {
            Self::serve(&self.historical, "historical")
        }
    }
}
