// File: crates/chart-core/src/source.rs
// Summary: Where the waitlist CSV comes from (HTTP URL or local file) and how it is read.

use std::path::PathBuf;

use crate::error::Result;
use crate::record::{read_records_from_path, Record};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` are URLs; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Read a local source. Remote sources need the `fetch` feature.
    pub fn load_local(&self) -> Result<Vec<Record>> {
        match self {
            Self::File(path) => read_records_from_path(path),
            Self::Url(url) => Err(crate::ChartError::load(format!("remote source {url} needs the `fetch` feature"))),
        }
    }

    /// Fetch once and decode. No retry and no timeout beyond the HTTP client's.
    #[cfg(feature = "fetch")]
    pub async fn load(&self) -> Result<Vec<Record>> {
        match self {
            Self::File(_) => self.load_local(),
            Self::Url(url) => {
                tracing::info!(%url, "fetching waitlist csv");
                let body = reqwest::get(url).await?.error_for_status()?.text().await?;
                tracing::debug!(bytes = body.len(), "fetched waitlist csv");
                crate::record::read_records_from_str(&body)
            }
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
