//! Author representation

use serde::{Deserialize, Serialize};

/// An author as it appears in the publication dataset.
///
/// The dataset uses CSL-style name parts, so the JSON keys are `given` and
/// `family`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Author {
    #[serde(default)]
    pub given: String,
    pub family: String,
}

impl Author {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
        }
    }

    /// First character of the given name, or an empty string when the given
    /// name is empty.
    pub fn initial(&self) -> &str {
        match self.given.chars().next() {
            Some(c) => &self.given[..c.len_utf8()],
            None => "",
        }
    }

    /// Format as "G. Family" for citation lines
    pub fn citation_name(&self) -> String {
        format!("{}. {}", self.initial(), self.family)
    }

    /// Whether this author matches a `(firstname, lastname)` query.
    ///
    /// The family name must be equal; the query's first name only has to be a
    /// prefix of the given name. Comparison is case-sensitive.
    pub fn matches_name(&self, firstname: &str, lastname: &str) -> bool {
        self.family == lastname && self.given.starts_with(firstname)
    }
}
