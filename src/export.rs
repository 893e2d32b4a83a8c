//! Standalone citation export.
//!
//! Re-serializes one record as a single-entry BibTeX file, with the
//! derived `category` field filtered out so the classification used by
//! the page renderer never leaks into the export.

use crate::bibliography::Record;
use crate::render::date_stamp;

/// Returns the citation filename for a record: `{date}_{key}.bib`.
///
/// Shares its date stamp with the page filename, so the page and its
/// citation always sort together.
pub fn citation_filename(record: &Record) -> String {
    format!("{}_{}.bib", date_stamp(record), record.key)
}

/// Iterates the fields that belong in a citation export: everything the
/// record was loaded with, minus any `category` field.
pub fn citation_fields(record: &Record) -> impl Iterator<Item = (&str, &str)> {
    record.fields().filter(|(name, _)| *name != "category")
}

/// Re-serializes a record as a single BibTeX entry.
///
/// Fields are written in the record's sorted field order, one per line,
/// brace-delimited. Output is deterministic for a given record.
pub fn render_citation(record: &Record) -> String {
    let mut entry = format!("@{}{{{},\n", record.entry_type, record.key);

    for (name, value) in citation_fields(record) {
        entry.push_str(&format!("  {} = {{{}}},\n", name, value));
    }

    entry.push_str("}\n");
    entry
}
