//! Domain types for a researcher's publication list
//!
//! This crate provides the data model the site build emits:
//! - Dataset: ordered year groups, newest first
//! - YearGroup: one year's publications, partitioned by kind
//! - Publication: a journal article, conference paper or thesis
//! - Author: CSL-style given/family name pair
//! - Validation: optional consistency checks for a dataset

pub mod author;
pub mod dataset;
pub mod error;
pub mod publication;
pub mod publication_type;
pub mod validation;
pub mod year_group;

pub use author::*;
pub use dataset::*;
pub use error::*;
pub use publication::*;
pub use publication_type::*;
pub use validation::*;
pub use year_group::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
