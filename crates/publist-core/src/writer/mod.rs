//! Writers turning views into page fragments.

pub mod html;
pub mod text;

use crate::config::OutputFormat;
use crate::view::{AuthorView, GroupedView};

/// Write the full listing in the given format.
pub fn write_grouped(view: &GroupedView<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => html::write_grouped(view),
        OutputFormat::Text => text::write_grouped(view),
    }
}

/// Write the single-author listing in the given format.
pub fn write_author(view: &AuthorView<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => html::write_author(view),
        OutputFormat::Text => text::write_author(view),
    }
}
