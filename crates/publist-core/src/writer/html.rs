//! HTML output
//!
//! Emits the markup skeleton of the publication pages using Infima class
//! names. Styling and icons are left to the site.

use quick_xml::escape::escape;

use crate::authors::AuthorSegment;
use crate::view::{AuthorView, EntryView, GroupedView, TypeSection};

const CARD_BUTTON: &str = "button button--outline button--sm button--secondary";
const LINK_BUTTON: &str = "button button--sm button--link";

/// Write the full listing
pub fn write_grouped(view: &GroupedView<'_>) -> String {
    let mut out = String::new();
    out.push_str("<section>\n<div class=\"container\">\n");

    for year in &view.years {
        out.push_str(&format!("<div data-year=\"{}\">\n", year.year));
        out.push_str(&format!(
            "<div class=\"row\"><div class=\"col col--12\"><h2 class=\"year\">{}</h2></div></div>\n",
            year.year
        ));
        for section in &year.sections {
            write_card_section(&mut out, section);
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</section>\n");
    out
}

fn write_card_section(out: &mut String, section: &TypeSection<'_>) {
    out.push_str(&format!(
        "<div class=\"row\"><div class=\"col col--12\"><h3 class=\"type\">{}</h3></div></div>\n",
        escape(section.title.as_str())
    ));
    out.push_str("<div class=\"row\">\n");
    for entry in &section.entries {
        out.push_str("<div class=\"col col--12 margin-bottom--lg\">\n");
        write_card(out, entry);
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
}

fn write_card(out: &mut String, entry: &EntryView<'_>) {
    out.push_str(&format!(
        "<div class=\"card\" id=\"{}\">\n",
        escape(entry.id)
    ));
    out.push_str(&format!(
        "<div class=\"card__header\"><h4 class=\"paper-title\">{}</h4></div>\n",
        escape(entry.title)
    ));
    out.push_str("<div class=\"card__body\">\n");
    out.push_str(&format!("<p>{}</p>\n", authors(&entry.authors)));
    out.push_str(&escape(entry.venue));
    out.push('\n');
    out.push_str("<div class=\"button-group float-buttons\">\n");
    out.push_str(&bibtex_button(entry, CARD_BUTTON));
    if let Some(link) = &entry.pdf_link {
        out.push_str(&pdf_link(link, CARD_BUTTON));
    }
    out.push_str("</div>\n</div>\n");
    if entry.bibtex_open {
        out.push_str(&format!(
            "<div class=\"card__footer\">{}</div>\n",
            code_block(entry.bibtex)
        ));
    }
    out.push_str("</div>\n");
}

/// Write the single-author listing
pub fn write_author(view: &AuthorView<'_>) -> String {
    let mut out = String::new();

    for section in &view.sections {
        let title = escape(section.title.as_str());
        out.push_str(&format!("<h3 id=\"{}\">{}</h3>\n", title, title));
        out.push_str("<ul>\n");
        for entry in &section.entries {
            write_list_item(&mut out, entry);
        }
        out.push_str("</ul>\n");
    }

    out
}

fn write_list_item(out: &mut String, entry: &EntryView<'_>) {
    out.push_str("<li class=\"margin-bottom--md\">\n");
    out.push_str(&format!(
        "{}, <i>\"{},\"</i> in {}, {}\n",
        authors(&entry.authors),
        escape(entry.title),
        escape(entry.venue),
        entry.year
    ));
    out.push_str("<div class=\"button-group\">\n");
    if let Some(link) = &entry.pdf_link {
        out.push_str(&pdf_link(link, LINK_BUTTON));
    }
    out.push_str(&bibtex_button(entry, LINK_BUTTON));
    out.push_str("</div>\n");
    if entry.bibtex_open {
        out.push_str(&code_block(entry.bibtex));
        out.push('\n');
    }
    out.push_str("</li>\n");
}

fn authors(segments: &[AuthorSegment]) -> String {
    let mut line = String::new();
    for segment in segments {
        line.push_str(segment.separator);
        let name = escape(segment.name.as_str());
        if segment.emphasized {
            line.push_str("<b>");
            line.push_str(&name);
            line.push_str("</b>");
        } else {
            line.push_str(&name);
        }
    }
    line
}

fn bibtex_button(entry: &EntryView<'_>, class: &str) -> String {
    let active = if entry.bibtex_open { " button--active" } else { "" };
    format!(
        "<button class=\"{}{}\" data-publication=\"{}\" aria-expanded=\"{}\">BibTeX</button>\n",
        class,
        active,
        escape(entry.id),
        entry.bibtex_open
    )
}

fn pdf_link(link: &str, class: &str) -> String {
    format!(
        "<a class=\"{}\" target=\"_blank\" href=\"{}\">PDF</a>\n",
        class,
        escape(link)
    )
}

fn code_block(bibtex: &str) -> String {
    format!("<pre><code class=\"language-bibtex\">{}</code></pre>", escape(bibtex))
}
