//! Author lines for citations.
//!
//! Authors are written as `"G. Family"`, separated by `", "`, with an Oxford
//! `", and "` before the last one.

use publist_domain::Author;
use serde::Serialize;

/// One author of a rendered author line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSegment {
    /// Text written before the name (`""`, `", "` or `", and "`)
    pub separator: &'static str,
    /// Citation form of the name, e.g. `"J. Smith"`
    pub name: String,
    /// Whether this is the author a filtered view is about
    pub emphasized: bool,
}

fn separator(index: usize, last_index: usize) -> &'static str {
    if index == 0 {
        ""
    } else if index == last_index {
        ", and "
    } else {
        ", "
    }
}

/// Render an author list as plain text.
///
/// ```
/// use publist_core::render_authors;
/// use publist_domain::Author;
///
/// let authors = vec![
///     Author::new("Ada", "Lovelace"),
///     Author::new("Charles", "Babbage"),
///     Author::new("Mary", "Somerville"),
/// ];
/// assert_eq!(
///     render_authors(&authors),
///     "A. Lovelace, C. Babbage, and M. Somerville"
/// );
/// ```
pub fn render_authors(authors: &[Author]) -> String {
    let last_index = authors.len().saturating_sub(1);
    let mut line = String::new();
    for (index, author) in authors.iter().enumerate() {
        line.push_str(separator(index, last_index));
        line.push_str(&author.citation_name());
    }
    line
}

/// Split an author list into segments, emphasizing the author at `highlight`.
///
/// An index of `None`, or one past the end of the list, emphasizes nobody.
pub fn highlight_authors(authors: &[Author], highlight: Option<usize>) -> Vec<AuthorSegment> {
    let last_index = authors.len().saturating_sub(1);
    authors
        .iter()
        .enumerate()
        .map(|(index, author)| AuthorSegment {
            separator: separator(index, last_index),
            name: author.citation_name(),
            emphasized: highlight == Some(index),
        })
        .collect()
}

/// Concatenate segments back into a plain author line.
pub fn join_segments(segments: &[AuthorSegment]) -> String {
    segments
        .iter()
        .map(|segment| format!("{}{}", segment.separator, segment.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[(&str, &str)]) -> Vec<Author> {
        names
            .iter()
            .map(|(given, family)| Author::new(*given, *family))
            .collect()
    }

    #[test]
    fn test_no_authors() {
        assert_eq!(render_authors(&[]), "");
        assert!(highlight_authors(&[], Some(0)).is_empty());
    }

    #[test]
    fn test_single_author() {
        let list = authors(&[("John", "Smith")]);
        assert_eq!(render_authors(&list), "J. Smith");
    }

    #[test]
    fn test_two_authors() {
        let list = authors(&[("John", "Smith"), ("Jane", "Doe")]);
        assert_eq!(render_authors(&list), "J. Smith, and J. Doe");
    }

    #[test]
    fn test_four_authors() {
        let list = authors(&[("A", "One"), ("B", "Two"), ("C", "Three"), ("D", "Four")]);
        assert_eq!(
            render_authors(&list),
            "A. One, B. Two, C. Three, and D. Four"
        );
    }

    #[test]
    fn test_empty_given_name() {
        let list = authors(&[("", "Consortium"), ("Jane", "Doe")]);
        assert_eq!(render_authors(&list), ". Consortium, and J. Doe");
    }

    #[test]
    fn test_highlight_marks_one_author() {
        let list = authors(&[("John", "Smith"), ("Jane", "Doe"), ("Max", "Muster")]);
        let segments = highlight_authors(&list, Some(1));
        let emphasized: Vec<bool> = segments.iter().map(|s| s.emphasized).collect();
        assert_eq!(emphasized, vec![false, true, false]);
        assert_eq!(segments[1].separator, ", ");
        assert_eq!(segments[2].separator, ", and ");
    }

    #[test]
    fn test_highlight_without_index() {
        let list = authors(&[("John", "Smith"), ("Jane", "Doe")]);
        assert!(highlight_authors(&list, None).iter().all(|s| !s.emphasized));
    }

    #[test]
    fn test_highlight_out_of_range() {
        let list = authors(&[("John", "Smith")]);
        assert!(highlight_authors(&list, Some(3)).iter().all(|s| !s.emphasized));
    }

    #[test]
    fn test_joined_segments_match_plain_rendering() {
        let list = authors(&[("John", "Smith"), ("Jane", "Doe"), ("Max", "Muster")]);
        assert_eq!(
            join_segments(&highlight_authors(&list, Some(2))),
            render_authors(&list)
        );
    }
}
