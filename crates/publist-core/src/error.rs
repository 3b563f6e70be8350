//! Error type for publist operations that touch files

use publist_domain::DomainError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PublistError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset has {0} validation error(s)")]
    InvalidDataset(usize),
}

pub type Result<T> = std::result::Result<T, PublistError>;
