//! Publication domain model

use super::Author;
use serde::{Deserialize, Serialize};

/// Root under which the site serves publication PDFs.
pub const DEFAULT_PDF_ROOT: &str = "/pdf";

/// A publication (journal article, conference paper or thesis)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Publication {
    /// Unique across the dataset. Doubles as the PDF filename stem.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub venue: String,
    pub year: i32,
    #[serde(default)]
    pub has_pdf: bool,
    /// Pre-formatted citation record, passed through verbatim.
    #[serde(default)]
    pub bibtex: String,
}

impl Publication {
    /// Create a new publication with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            venue: String::new(),
            year,
            has_pdf: false,
            bibtex: String::new(),
        }
    }

    /// Builder method to add an author
    pub fn with_author(mut self, given: impl Into<String>, family: impl Into<String>) -> Self {
        self.authors.push(Author::new(given, family));
        self
    }

    /// Builder method to set the venue
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Builder method to mark the PDF as available
    pub fn with_pdf(mut self) -> Self {
        self.has_pdf = true;
        self
    }

    /// Builder method to set the BibTeX record
    pub fn with_bibtex(mut self, bibtex: impl Into<String>) -> Self {
        self.bibtex = bibtex.into();
        self
    }

    /// Link target of the PDF, e.g. `/pdf/smith2021.pdf`.
    pub fn pdf_link(&self) -> Option<String> {
        self.pdf_link_under(DEFAULT_PDF_ROOT)
    }

    /// Link target of the PDF below a custom root.
    pub fn pdf_link_under(&self, root: &str) -> Option<String> {
        if !self.has_pdf {
            return None;
        }
        Some(format!("{}/{}.pdf", root.trim_end_matches('/'), self.id))
    }
}
