//! Publication list rendering
//!
//! Turns a pre-grouped publication dataset into:
//! - a full listing, by year and then by kind (journals, conferences, theses)
//! - a single-author listing with the author emphasized in each citation
//!
//! Each listing owns a [`DisclosureMap`] recording which BibTeX blocks are
//! open. Views are plain data; the [`writer`] module turns them into HTML or
//! text.

pub mod authors;
pub mod collector;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod matcher;
pub mod view;
pub mod writer;

pub use authors::{highlight_authors, join_segments, render_authors, AuthorSegment};
pub use collector::{collect, CollectedPublications, MatchedPublication};
pub use config::{ConfigError, OutputConfig, OutputFormat, PublistConfig, SectionTitles};
pub use disclosure::{Disclosure, DisclosureMap};
pub use error::{PublistError, Result};
pub use matcher::{matches, AuthorQuery};
pub use view::{AuthorView, EntryView, GroupedView, TypeSection, YearSection};

pub use publist_domain::{Author, Dataset, Publication, PublicationType, YearGroup};

/// Render every publication, grouped by year and kind.
pub fn render_all(
    dataset: &Dataset,
    disclosures: &mut DisclosureMap,
    config: &PublistConfig,
) -> String {
    let view = GroupedView::build(dataset, disclosures, config);
    writer::write_grouped(&view, config.output.format)
}

/// Render the publications of one author, emphasizing them in every author line.
pub fn render_author(
    dataset: &Dataset,
    query: &AuthorQuery,
    disclosures: &mut DisclosureMap,
    config: &PublistConfig,
) -> String {
    let collected = collect(dataset, query);
    let view = AuthorView::build(&collected, disclosures, config);
    writer::write_author(&view, config.output.format)
}
