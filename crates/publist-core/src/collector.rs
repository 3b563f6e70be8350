//! Collect one author's publications across all years.

use crate::AuthorQuery;
use publist_domain::{Dataset, Publication, PublicationType};
use serde::Serialize;

/// A publication selected by an [`AuthorQuery`], paired with the position of
/// the matched author in its author list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchedPublication<'a> {
    pub publication: &'a Publication,
    pub highlight: usize,
}

/// Matches grouped by kind, each in dataset order (year, then original order).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectedPublications<'a> {
    pub journals: Vec<MatchedPublication<'a>>,
    pub conferences: Vec<MatchedPublication<'a>>,
    pub theses: Vec<MatchedPublication<'a>>,
}

impl<'a> CollectedPublications<'a> {
    pub fn bucket(&self, kind: PublicationType) -> &[MatchedPublication<'a>] {
        match kind {
            PublicationType::Journal => &self.journals,
            PublicationType::Conference => &self.conferences,
            PublicationType::Thesis => &self.theses,
        }
    }

    fn bucket_mut(&mut self, kind: PublicationType) -> &mut Vec<MatchedPublication<'a>> {
        match kind {
            PublicationType::Journal => &mut self.journals,
            PublicationType::Conference => &mut self.conferences,
            PublicationType::Thesis => &mut self.theses,
        }
    }

    pub fn len(&self) -> usize {
        self.journals.len() + self.conferences.len() + self.theses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk the dataset and keep every publication with an author matching `query`.
///
/// The dataset is only borrowed; the highlight index travels with each match.
pub fn collect<'a>(dataset: &'a Dataset, query: &AuthorQuery) -> CollectedPublications<'a> {
    let mut collected = CollectedPublications::default();

    for group in dataset.years() {
        for kind in PublicationType::ALL {
            let matches = group.bucket(kind).iter().filter_map(|publication| {
                query
                    .match_index(&publication.authors)
                    .map(|highlight| MatchedPublication {
                        publication,
                        highlight,
                    })
            });
            collected.bucket_mut(kind).extend(matches);
        }
    }

    tracing::debug!(
        firstname = %query.firstname,
        lastname = %query.lastname,
        journals = collected.journals.len(),
        conferences = collected.conferences.len(),
        theses = collected.theses.len(),
        "collected author publications"
    );

    collected
}
