// File: crates/chart-core/src/error.rs
// Summary: Error type shared by loading, configuration and the chart session.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to load data: {message}")]
    Load { message: String },
}

impl ChartError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::Load { message: message.into() }
    }
}
