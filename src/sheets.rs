//! Optional remote spreadsheet append (feature `sheets`)
//!
//! Posts the same row that goes into the local log to a remote endpoint
//! (e.g. an Apps Script web app backing a spreadsheet). Fire-and-forget:
//! the caller reports failures as warnings and never lets them affect the
//! displayed result.

/// Whether the crate was built with remote append support.
pub fn is_sheets_available() -> bool {
    cfg!(feature = "sheets")
}

/// Environment variable holding the endpoint URL when not set in config.
pub const SHEET_URL_ENV: &str = "CBTI_SHEET_URL";

#[cfg(feature = "sheets")]
pub use client::SheetClient;

#[cfg(feature = "sheets")]
mod client {
    use super::SHEET_URL_ENV;
    use crate::history::LogEntry;
    use anyhow::{Context, Result};
    use std::time::Duration;

    /// Client for appending result rows to a remote spreadsheet endpoint.
    pub struct SheetClient {
        url: String,
        client: reqwest::blocking::Client,
    }

    impl SheetClient {
        pub fn new(url: String) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .context("Failed to build HTTP client")?;
            Ok(Self { url, client })
        }

        /// Resolve the endpoint from config or environment; None disables the append.
        pub fn resolve(config_url: Option<&str>) -> Result<Option<Self>> {
            let url = match config_url {
                Some(url) => Some(url.to_string()),
                None => std::env::var(SHEET_URL_ENV).ok(),
            };
            match url {
                Some(url) => Ok(Some(Self::new(url)?)),
                None => Ok(None),
            }
        }

        /// Append one result row. The endpoint receives the log-entry JSON.
        pub fn append(&self, entry: &LogEntry) -> Result<()> {
            let response = self
                .client
                .post(&self.url)
                .json(entry)
                .send()
                .context("Failed to reach sheet endpoint")?;
            if !response.status().is_success() {
                anyhow::bail!("Sheet endpoint returned {}", response.status());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_matches_feature_flag() {
        assert_eq!(is_sheets_available(), cfg!(feature = "sheets"));
    }
}
