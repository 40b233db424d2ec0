//! Rate document retrieval abstractions

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// Failures while obtaining a rate document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request failed, timed out or returned a non-success status.
    #[error("Failed to download data from {url}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The payload was not a readable archive holding a UTF-8 document.
    #[error("Failed to extract archive content from {url}")]
    Extraction {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of the raw daily and historical rate documents.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_daily(&self) -> Result<String>;
    async fn fetch_historical(&self) -> Result<String>;
}
