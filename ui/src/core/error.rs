//! Error types for date parsing and catalog ingestion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid ISO-8601 date: {raw:?}")]
    Invalid { raw: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record #{index} ({name:?}) rejected: {reason}")]
    InvalidRecord {
        index: usize,
        name: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
