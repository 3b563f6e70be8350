//! Publications of one calendar year, partitioned by kind

use super::{Publication, PublicationType};
use serde::{Deserialize, Serialize};

/// All publications of one year.
///
/// Missing kinds deserialize to empty lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct YearGroup {
    pub year: i32,
    #[serde(rename = "article-journal", default)]
    pub journals: Vec<Publication>,
    #[serde(rename = "paper-conference", default)]
    pub conferences: Vec<Publication>,
    #[serde(rename = "thesis", default)]
    pub theses: Vec<Publication>,
}

impl YearGroup {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// Publications of one kind, in dataset order.
    pub fn bucket(&self, kind: PublicationType) -> &[Publication] {
        match kind {
            PublicationType::Journal => &self.journals,
            PublicationType::Conference => &self.conferences,
            PublicationType::Thesis => &self.theses,
        }
    }

    fn bucket_mut(&mut self, kind: PublicationType) -> &mut Vec<Publication> {
        match kind {
            PublicationType::Journal => &mut self.journals,
            PublicationType::Conference => &mut self.conferences,
            PublicationType::Thesis => &mut self.theses,
        }
    }

    /// Builder method to append a publication to a bucket
    pub fn with(mut self, kind: PublicationType, publication: Publication) -> Self {
        self.bucket_mut(kind).push(publication);
        self
    }

    /// Iterate `(kind, publication)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PublicationType, &Publication)> + '_ {
        PublicationType::ALL
            .into_iter()
            .flat_map(move |kind| self.bucket(kind).iter().map(move |p| (kind, p)))
    }

    pub fn len(&self) -> usize {
        self.journals.len() + self.conferences.len() + self.theses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_buckets_default_to_empty() {
        let json = r#"{"year": 2020, "thesis": [{"id": "t", "title": "T", "year": 2020}]}"#;
        let group: YearGroup = serde_json::from_str(json).unwrap();
        assert!(group.bucket(PublicationType::Journal).is_empty());
        assert!(group.bucket(PublicationType::Conference).is_empty());
        assert_eq!(group.bucket(PublicationType::Thesis).len(), 1);
    }

    #[test]
    fn test_iter_in_display_order() {
        let group = YearGroup::new(2021)
            .with(PublicationType::Thesis, Publication::new("t", "T", 2021))
            .with(PublicationType::Journal, Publication::new("j1", "J1", 2021))
            .with(PublicationType::Conference, Publication::new("c", "C", 2021))
            .with(PublicationType::Journal, Publication::new("j2", "J2", 2021));

        let ids: Vec<&str> = group.iter().map(|(_, p)| p.id.as_str()).collect();
        assert_eq!(ids, vec!["j1", "j2", "c", "t"]);
        assert_eq!(group.len(), 4);
    }
}
