//! Publication kinds and their display order

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of publication, as keyed in a year group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PublicationType {
    #[serde(rename = "article-journal")]
    Journal,
    #[serde(rename = "paper-conference")]
    Conference,
    #[serde(rename = "thesis")]
    Thesis,
}

impl PublicationType {
    /// Display order within a year: Journals, Conferences, Theses.
    pub const ALL: [PublicationType; 3] = [Self::Journal, Self::Conference, Self::Thesis];

    /// Key used for this kind in the dataset.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Journal => "article-journal",
            Self::Conference => "paper-conference",
            Self::Thesis => "thesis",
        }
    }

    /// Parse a dataset key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "article-journal" => Some(Self::Journal),
            "paper-conference" => Some(Self::Conference),
            "thesis" => Some(Self::Thesis),
            _ => None,
        }
    }

    /// Default section heading.
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Journal => "Journals",
            Self::Conference => "Conferences",
            Self::Thesis => "Theses",
        }
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
