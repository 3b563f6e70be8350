//! Author queries for the single-author view.

use publist_domain::{Author, Publication};
use serde::{Deserialize, Serialize};

/// A `(firstname, lastname)` query.
///
/// `lastname` must equal an author's family name and `firstname` must be a
/// prefix of their given name, so `J` matches `John`. There is no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorQuery {
    pub firstname: String,
    pub lastname: String,
}

impl AuthorQuery {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    /// Position of the first matching author.
    pub fn match_index(&self, authors: &[Author]) -> Option<usize> {
        authors
            .iter()
            .position(|author| author.matches_name(&self.firstname, &self.lastname))
    }

    /// Whether any author of the publication matches.
    pub fn matches(&self, publication: &Publication) -> bool {
        self.match_index(&publication.authors).is_some()
    }
}

/// Whether `publication` has an author matching `(firstname, lastname)`.
pub fn matches(publication: &Publication, firstname: &str, lastname: &str) -> bool {
    publication
        .authors
        .iter()
        .any(|author| author.matches_name(firstname, lastname))
}
