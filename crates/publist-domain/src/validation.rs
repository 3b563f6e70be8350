//! Validation for publication datasets
//!
//! Rendering never calls into this module. It exists for build scripts and the
//! CLI to check a dataset before publishing it.

use super::{Dataset, Publication};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity of a validation issue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationIssue {
    pub publication_id: String,
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationIssue {
    fn error(publication: &Publication, field: &str, message: impl Into<String>) -> Self {
        Self {
            publication_id: publication.id.clone(),
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(publication: &Publication, field: &str, message: impl Into<String>) -> Self {
        Self {
            publication_id: publication.id.clone(),
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Validate a single publication and return errors/warnings
pub fn validate_publication(publication: &Publication) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if publication.id.is_empty() {
        issues.push(ValidationIssue::error(publication, "id", "Id is required"));
    }

    if publication.title.is_empty() {
        issues.push(ValidationIssue::error(publication, "title", "Title is required"));
    }

    for (index, author) in publication.authors.iter().enumerate() {
        if author.given.is_empty() {
            issues.push(ValidationIssue::warning(
                publication,
                "authors",
                format!("Author {} has no given name", index + 1),
            ));
        }
        if author.family.is_empty() {
            issues.push(ValidationIssue::warning(
                publication,
                "authors",
                format!("Author {} has no family name", index + 1),
            ));
        }
    }

    // The id becomes a path segment of the PDF link
    if publication.has_pdf && publication.id.contains('/') {
        issues.push(ValidationIssue::warning(
            publication,
            "id",
            "Id contains '/' and cannot be used as a PDF filename",
        ));
    }

    issues
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_publication_ffi(publication: &Publication) -> Vec<ValidationIssue> {
    validate_publication(publication)
}

/// Validate a whole dataset.
///
/// On top of the per-publication checks this reports duplicate ids and
/// publications filed under a year group other than their own year.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, i32> = HashMap::new();

    for group in dataset.years() {
        for (_, publication) in group.iter() {
            issues.extend(validate_publication(publication));

            if publication.year != group.year {
                issues.push(ValidationIssue::warning(
                    publication,
                    "year",
                    format!(
                        "Publication year {} is listed under {}",
                        publication.year, group.year
                    ),
                ));
            }

            if publication.id.is_empty() {
                continue;
            }
            if let Some(first_year) = seen.insert(publication.id.as_str(), group.year) {
                issues.push(ValidationIssue::error(
                    publication,
                    "id",
                    format!("Duplicate id, first seen in {}", first_year),
                ));
            }
        }
    }

    issues
}

/// Check if a dataset is valid (no errors)
pub fn is_valid(dataset: &Dataset) -> bool {
    validate_dataset(dataset)
        .iter()
        .all(|issue| issue.severity != ValidationSeverity::Error)
}
