//! Errors raised while reading page-embedded data

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    /// The embedded value is not valid JSON of the expected shape
    #[error("Malformed page data: {0}")]
    Json(#[from] serde_json::Error),

    /// The host could not hand over the value (missing global, I/O failure)
    #[error("Page data source unavailable: {0}")]
    Source(String),
}

impl ContractError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}
