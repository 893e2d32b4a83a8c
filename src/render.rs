//! Publication page rendering.
//!
//! Assembles the `+++`-fenced TOML front matter document for one record:
//! a fixed-order sequence of key/value lines, a composed publication
//! summary, and a constant tail block expected by the Hugo Academic
//! publication layout.

use crate::bibliography::Record;
use crate::sanitize::{sanitize, split_contributors};

/// Sentinel date for records without a `year` field. Sorts after every
/// real publication.
pub const MISSING_YEAR_DATE: &str = "2999-01-01";

/// Returns the date stamp for a record: `{year}-01-01`, or the far-future
/// sentinel when the year is missing.
pub fn date_stamp(record: &Record) -> String {
    match record.field("year") {
        Some(year) => format!("{}-01-01", year),
        None => MISSING_YEAR_DATE.to_string(),
    }
}

/// Returns the page filename for a record: `{date}_{key}.md`.
///
/// Filenames depend only on the year and the citation key, so re-running
/// over an unchanged bibliography targets the same paths.
pub fn document_filename(record: &Record) -> String {
    format!("{}_{}.md", date_stamp(record), record.key)
}

/// Composes the `publication` summary string for a record.
///
/// The summary is an ordered list of optional fragments, concatenated in
/// order. Each fragment carries its own leading separator, so a missing
/// field drops its fragment without disturbing the rest. The booktitle
/// and journal blocks fire independently; when both are present they
/// concatenate in that order.
pub fn publication_summary(record: &Record) -> String {
    let mut fragments: Vec<Option<String>> = Vec::new();

    if let Some(booktitle) = record.field("booktitle") {
        fragments.push(Some(format!("In: {}", sanitize(booktitle))));
        fragments.push(fragment(record, "publisher", ", ", ""));
        fragments.push(fragment(record, "address", ", ", ""));
        fragments.push(fragment(record, "pages", ", _pp. ", "_"));
    }

    if let Some(journal) = record.field("journal") {
        fragments.push(Some(format!("In: {}", sanitize(journal))));
        fragments.push(fragment(record, "volume", ", (", ")"));
        fragments.push(fragment(record, "number", ", ", ""));
        fragments.push(fragment(record, "pages", ", _pp. ", "_"));
        fragments.push(fragment(record, "doi", ", https://doi.org/", ""));
        fragments.push(fragment(record, "url", ", ", ""));
    }

    fragments.into_iter().flatten().collect()
}

/// One optional summary fragment: `{prefix}{sanitized field}{suffix}` if
/// the field is present, nothing otherwise.
fn fragment(record: &Record, name: &str, prefix: &str, suffix: &str) -> Option<String> {
    record
        .field(name)
        .map(|value| format!("{}{}{}", prefix, sanitize(value), suffix))
}

/// Constant tail of every publication page: always-empty URL slots and
/// layout switches, closed by the `[header]` table.
const CONSTANT_FIELDS: &str = r#"image_preview = ""
selected = false
projects = []
tags = []
url_pdf = ""
url_preprint = ""
url_code = ""
url_dataset = ""
url_project = ""
url_slides = ""
url_video = ""
url_poster = ""
url_source = ""
math = true
highlight = true
[header]
image = ""
caption = ""
"#;

/// Renders the complete front-matter document for one record.
///
/// # Arguments
///
/// * `record` - The record to render
/// * `category` - Its publication category code (see [`crate::classify`])
/// * `include_abstract` - Whether to populate the `abstract` field
///
/// # Returns
///
/// The full document text, `+++` fenced, ending with a newline.
pub fn render_document(record: &Record, category: &str, include_abstract: bool) -> String {
    let mut doc = String::new();

    doc.push_str("+++\n");
    doc.push_str(&format!(
        "title = \"{}\"\n",
        record.field("title").map(sanitize).unwrap_or_default()
    ));
    doc.push_str(&format!("date = \"{}\"\n", date_stamp(record)));
    doc.push_str(&format!("publication_types = [\"{}\"]\n", category));

    // Authors take precedence over editors; with neither, the line is
    // omitted entirely
    if let Some(authors) = record.field("author") {
        doc.push_str(&contributor_line("authors", authors));
    } else if let Some(editors) = record.field("editor") {
        doc.push_str(&contributor_line("editors", editors));
    }

    doc.push_str(&format!(
        "publication = \"{}\"\n",
        publication_summary(record)
    ));

    let abstract_text = if include_abstract {
        record.field("abstract").map(sanitize).unwrap_or_default()
    } else {
        String::new()
    };
    doc.push_str(&format!("abstract = \"{}\"\n", abstract_text));
    doc.push_str("abstract_short = \"\"\n");

    doc.push_str(CONSTANT_FIELDS);
    doc.push_str("+++\n");

    doc
}

/// Formats a contributor array line from a raw BibTeX name string.
fn contributor_line(field: &str, raw: &str) -> String {
    let names: Vec<String> = split_contributors(raw)
        .into_iter()
        .map(|name| format!("\"{}\"", name))
        .collect();
    format!("{} = [{}]\n", field, names.join(", "))
}
