use crate::core::{FetchError, RateSource};
use anyhow::Result;
use async_trait::async_trait;
use std::io::{self, Cursor, Read};
use std::time::Duration;
use tracing::{debug, instrument};

const DAILY_ARCHIVE: &str = "eurofxref.zip";
const HISTORICAL_ARCHIVE: &str = "eurofxref-hist.zip";

/// Fetches the euro reference rate archives published by the ECB.
pub struct EcbProvider {
    base_url: String,
    timeout: Duration,
}

impl EcbProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        EcbProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    #[instrument(name = "EcbArchiveFetch", skip(self))]
    async fn download_and_extract(&self, archive: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, archive);
        debug!("Requesting archive from {}", url);

        let retrieval = |source: reqwest::Error| FetchError::Retrieval {
            url: url.clone(),
            source,
        };

        let client = reqwest::Client::builder()
            .user_agent("fxmean/1.0")
            .timeout(self.timeout)
            .build()
            .map_err(retrieval)?;
        let response = client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(retrieval)?;
        let bytes = response.bytes().await.map_err(retrieval)?;
        debug!("Received {} bytes from {}", bytes.len(), url);

        let document = extract_first_document(&bytes).map_err(|source| FetchError::Extraction {
            url: url.clone(),
            source,
        })?;
        Ok(document)
    }
}

/// Reads the first entry of a zip archive as UTF-8 text.
fn extract_first_document(bytes: &[u8]) -> io::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(io::Error::other)?;
    if archive.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "archive contains no documents",
        ));
    }

    let mut entry = archive.by_index(0).map_err(io::Error::other)?;
    let mut content = Vec::new();
    entry.read_to_end(&mut content)?;
    debug!("Extracted {} ({} bytes)", entry.name(), content.len());

    String::from_utf8(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[async_trait]
impl RateSource for EcbProvider {
    async fn fetch_daily(&self) -> Result<String> {
        self.download_and_extract(DAILY_ARCHIVE).await
    }

    async fn fetch_historical(&self) -> Result<String> {
        self.download_and_extract(HISTORICAL_ARCHIVE).await
    }
}
