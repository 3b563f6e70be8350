//! View models for the full listing and the single-author listing.
//!
//! A view borrows the dataset and carries everything a writer needs: section
//! headings, author segments, PDF links and whether each BibTeX block is open.
//! Empty sections never make it into a view.

use publist_domain::{Dataset, Publication, PublicationType};
use serde::Serialize;

use crate::authors::{highlight_authors, AuthorSegment};
use crate::collector::CollectedPublications;
use crate::config::PublistConfig;
use crate::disclosure::DisclosureMap;

/// One publication as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub authors: Vec<AuthorSegment>,
    pub venue: &'a str,
    pub year: i32,
    pub pdf_link: Option<String>,
    pub bibtex: &'a str,
    pub bibtex_open: bool,
}

impl<'a> EntryView<'a> {
    fn new(
        publication: &'a Publication,
        highlight: Option<usize>,
        disclosures: &DisclosureMap,
        config: &PublistConfig,
    ) -> Self {
        Self {
            id: &publication.id,
            title: &publication.title,
            authors: highlight_authors(&publication.authors, highlight),
            venue: &publication.venue,
            year: publication.year,
            pdf_link: publication.pdf_link_under(&config.pdf_root),
            bibtex: &publication.bibtex,
            bibtex_open: disclosures.is_open(&publication.id),
        }
    }
}

/// Publications of one kind under a heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSection<'a> {
    pub kind: PublicationType,
    pub title: String,
    pub entries: Vec<EntryView<'a>>,
}

/// One year of the full listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSection<'a> {
    pub year: i32,
    pub sections: Vec<TypeSection<'a>>,
}

/// Full listing: years in dataset order, kinds in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedView<'a> {
    pub years: Vec<YearSection<'a>>,
}

impl<'a> GroupedView<'a> {
    /// Build the full listing.
    ///
    /// `disclosures` is synced to this listing's publication ids first, so a
    /// map last used for another list starts out all closed.
    pub fn build(
        dataset: &'a Dataset,
        disclosures: &mut DisclosureMap,
        config: &PublistConfig,
    ) -> Self {
        disclosures.sync(dataset.publications().map(|(_, publication)| &publication.id));
        let disclosures: &DisclosureMap = disclosures;

        let years: Vec<YearSection<'a>> = dataset
            .years()
            .iter()
            .map(|group| YearSection {
                year: group.year,
                sections: PublicationType::ALL
                    .into_iter()
                    .filter_map(|kind| {
                        let entries = group
                            .bucket(kind)
                            .iter()
                            .map(|p| EntryView::new(p, None, disclosures, config))
                            .collect();
                        section(kind, entries, config)
                    })
                    .collect(),
            })
            .collect();

        tracing::debug!(
            years = years.len(),
            publications = dataset.len(),
            "built grouped publication view"
        );

        Self { years }
    }

    /// Ids of every entry, in display order.
    pub fn entry_ids(&self) -> Vec<&'a str> {
        self.years
            .iter()
            .flat_map(|year| year.sections.iter())
            .flat_map(|section| section.entries.iter())
            .map(|entry| entry.id)
            .collect()
    }
}

/// Single-author listing: kinds in display order, no year headings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorView<'a> {
    pub sections: Vec<TypeSection<'a>>,
}

impl<'a> AuthorView<'a> {
    /// Build the single-author listing from collected matches, emphasizing the
    /// matched author of each entry.
    pub fn build(
        collected: &CollectedPublications<'a>,
        disclosures: &mut DisclosureMap,
        config: &PublistConfig,
    ) -> Self {
        disclosures.sync(
            PublicationType::ALL
                .into_iter()
                .flat_map(|kind| collected.bucket(kind).iter())
                .map(|matched| &matched.publication.id),
        );
        let disclosures: &DisclosureMap = disclosures;

        let sections: Vec<TypeSection<'a>> = PublicationType::ALL
            .into_iter()
            .filter_map(|kind| {
                let entries = collected
                    .bucket(kind)
                    .iter()
                    .map(|matched| {
                        EntryView::new(
                            matched.publication,
                            Some(matched.highlight),
                            disclosures,
                            config,
                        )
                    })
                    .collect();
                section(kind, entries, config)
            })
            .collect();

        tracing::debug!(
            sections = sections.len(),
            publications = collected.len(),
            "built author publication view"
        );

        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Ids of every entry, in display order.
    pub fn entry_ids(&self) -> Vec<&'a str> {
        self.sections
            .iter()
            .flat_map(|section| section.entries.iter())
            .map(|entry| entry.id)
            .collect()
    }
}

fn section<'a>(
    kind: PublicationType,
    entries: Vec<EntryView<'a>>,
    config: &PublistConfig,
) -> Option<TypeSection<'a>> {
    if entries.is_empty() {
        return None;
    }
    Some(TypeSection {
        kind,
        title: config.sections.title(kind).to_string(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect, AuthorQuery};
    use publist_domain::YearGroup;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            YearGroup::new(2021)
                .with(
                    PublicationType::Journal,
                    Publication::new("smith2021", "Journal 2021", 2021)
                        .with_author("John", "Smith")
                        .with_author("Jane", "Doe")
                        .with_pdf(),
                )
                .with(
                    PublicationType::Thesis,
                    Publication::new("doe2021", "Thesis 2021", 2021).with_author("Jane", "Doe"),
                ),
            YearGroup::new(2020).with(
                PublicationType::Conference,
                Publication::new("smith2020", "Conference 2020", 2020)
                    .with_author("John", "Smith"),
            ),
        ])
    }

    #[test]
    fn test_grouped_view_skips_empty_sections() {
        let data = dataset();
        let mut disclosures = DisclosureMap::new();
        let view = GroupedView::build(&data, &mut disclosures, &PublistConfig::default());

        assert_eq!(view.years.len(), 2);
        let titles: Vec<&str> = view.years[0]
            .sections
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Journals", "Theses"]);
        assert_eq!(view.years[1].sections.len(), 1);
        assert_eq!(view.years[1].sections[0].kind, PublicationType::Conference);
    }

    #[test]
    fn test_grouped_view_entries() {
        let data = dataset();
        let mut disclosures = DisclosureMap::new();
        let view = GroupedView::build(&data, &mut disclosures, &PublistConfig::default());

        let entry = &view.years[0].sections[0].entries[0];
        assert_eq!(entry.pdf_link.as_deref(), Some("/pdf/smith2021.pdf"));
        assert!(entry.authors.iter().all(|a| !a.emphasized));
        assert!(!entry.bibtex_open);
        assert_eq!(view.entry_ids(), vec!["smith2021", "doe2021", "smith2020"]);
    }

    #[test]
    fn test_open_state_survives_rebuild() {
        let data = dataset();
        let config = PublistConfig::default();
        let mut disclosures = DisclosureMap::new();
        GroupedView::build(&data, &mut disclosures, &config);
        disclosures.toggle("doe2021");

        let view = GroupedView::build(&data, &mut disclosures, &config);
        let open: Vec<&str> = view.years[0]
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .filter(|e| e.bibtex_open)
            .map(|e| e.id)
            .collect();
        assert_eq!(open, vec!["doe2021"]);
    }

    #[test]
    fn test_author_view_highlights_match() {
        let data = dataset();
        let collected = collect(&data, &AuthorQuery::new("Jane", "Doe"));
        let mut disclosures = DisclosureMap::new();
        let view = AuthorView::build(&collected, &mut disclosures, &PublistConfig::default());

        let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Journals", "Theses"]);

        let journal = &view.sections[0].entries[0];
        assert!(!journal.authors[0].emphasized);
        assert!(journal.authors[1].emphasized);
    }

    #[test]
    fn test_author_view_empty_for_unknown_author() {
        let data = dataset();
        let collected = collect(&data, &AuthorQuery::new("Nobody", "Known"));
        let mut disclosures = DisclosureMap::new();
        let view = AuthorView::build(&collected, &mut disclosures, &PublistConfig::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_switching_author_resets_disclosures() {
        let data = dataset();
        let config = PublistConfig::default();
        let mut disclosures = DisclosureMap::new();

        let smith = collect(&data, &AuthorQuery::new("John", "Smith"));
        AuthorView::build(&smith, &mut disclosures, &config);
        disclosures.toggle("smith2021");

        let doe = collect(&data, &AuthorQuery::new("Jane", "Doe"));
        let view = AuthorView::build(&doe, &mut disclosures, &config);
        assert!(view
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .all(|e| !e.bibtex_open));
    }

    #[test]
    fn test_custom_titles_and_pdf_root() {
        let data = dataset();
        let mut config = PublistConfig::default();
        config.pdf_root = "/papers/".to_string();
        config.sections.journals = "Articles".to_string();
        let mut disclosures = DisclosureMap::new();
        let view = GroupedView::build(&data, &mut disclosures, &config);

        let section = &view.years[0].sections[0];
        assert_eq!(section.title, "Articles");
        assert_eq!(
            section.entries[0].pdf_link.as_deref(),
            Some("/papers/smith2021.pdf")
        );
    }
}
