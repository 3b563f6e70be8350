//! Plain text output for terminals

use crate::authors::AuthorSegment;
use crate::view::{AuthorView, EntryView, GroupedView};

/// Write the full listing
pub fn write_grouped(view: &GroupedView<'_>) -> String {
    let mut out = String::new();

    for year in &view.years {
        out.push_str(&format!("== {} ==\n", year.year));
        for section in &year.sections {
            out.push_str(&format!("\n-- {} --\n", section.title));
            for entry in &section.entries {
                out.push_str(&format!("\n{}\n", entry.title));
                out.push_str(&format!("  {}\n", authors(&entry.authors)));
                if !entry.venue.is_empty() {
                    out.push_str(&format!("  {}\n", entry.venue));
                }
                write_links(&mut out, entry);
            }
        }
        out.push('\n');
    }

    out
}

/// Write the single-author listing
pub fn write_author(view: &AuthorView<'_>) -> String {
    let mut out = String::new();

    for section in &view.sections {
        out.push_str(&format!("-- {} --\n", section.title));
        for entry in &section.entries {
            out.push_str(&format!(
                "* {}, \"{},\" in {}, {}\n",
                authors(&entry.authors),
                entry.title,
                entry.venue,
                entry.year
            ));
            write_links(&mut out, entry);
        }
        out.push('\n');
    }

    out
}

fn write_links(out: &mut String, entry: &EntryView<'_>) {
    if let Some(link) = &entry.pdf_link {
        out.push_str(&format!("  PDF: {}\n", link));
    }
    if entry.bibtex_open {
        for line in entry.bibtex.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Emphasized authors are wrapped in asterisks.
fn authors(segments: &[AuthorSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.emphasized {
                format!("{}*{}*", segment.separator, segment.name)
            } else {
                format!("{}{}", segment.separator, segment.name)
            }
        })
        .collect()
}
