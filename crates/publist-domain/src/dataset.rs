//! The pre-grouped publication dataset

use super::{DomainError, Publication, PublicationType, YearGroup};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Ordered sequence of year groups.
///
/// Dataset order is display order. The site build emits it newest year first;
/// nothing here re-sorts it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
    years: Vec<YearGroup>,
}

impl Dataset {
    pub fn new(years: Vec<YearGroup>) -> Self {
        Self { years }
    }

    /// Parse the JSON array produced by the site build.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DomainError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn years(&self) -> &[YearGroup] {
        &self.years
    }

    /// Every publication in year order, then kind order, then dataset order.
    pub fn publications(&self) -> impl Iterator<Item = (PublicationType, &Publication)> + '_ {
        self.years.iter().flat_map(|group| group.iter())
    }

    /// Look up a publication by id.
    pub fn find(&self, id: &str) -> Option<&Publication> {
        self.publications()
            .map(|(_, p)| p)
            .find(|p| p.id == id)
    }

    /// Total number of publications.
    pub fn len(&self) -> usize {
        self.years.iter().map(YearGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<YearGroup>> for Dataset {
    fn from(years: Vec<YearGroup>) -> Self {
        Self::new(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "year": 2022,
            "article-journal": [
                {"id": "a2022", "title": "Journal Paper", "year": 2022,
                 "authors": [{"given": "Jane", "family": "Doe"}], "venue": "J. Things"}
            ]
        },
        {
            "year": 2021,
            "paper-conference": [
                {"id": "b2021", "title": "Conf Paper", "year": 2021, "has_pdf": true}
            ],
            "thesis": [
                {"id": "c2021", "title": "Thesis", "year": 2021}
            ]
        }
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let years: Vec<i32> = dataset.years().iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2022, 2021]);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_publications_order() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let ids: Vec<(PublicationType, &str)> = dataset
            .publications()
            .map(|(kind, p)| (kind, p.id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (PublicationType::Journal, "a2022"),
                (PublicationType::Conference, "b2021"),
                (PublicationType::Thesis, "c2021"),
            ]
        );
    }

    #[test]
    fn test_find() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.find("b2021").map(|p| p.has_pdf), Some(true));
        assert!(dataset.find("missing").is_none());
    }

    #[test]
    fn test_invalid_json() {
        let err = Dataset::from_json("{not json").unwrap_err();
        assert!(matches!(err, DomainError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path("/nonexistent/publications.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/publications.json"));
    }

    #[test]
    fn test_json_round_trip() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let json = dataset.to_json().unwrap();
        assert_eq!(Dataset::from_json(&json).unwrap(), dataset);
    }
}
