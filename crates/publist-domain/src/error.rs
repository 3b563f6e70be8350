//! Errors raised while loading a dataset

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid publication data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
