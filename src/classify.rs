//! Entry type classification.
//!
//! Maps a BibTeX entry type to the single-character publication category
//! used by the Hugo Academic theme.

/// Single source of truth for the category table: (entry types, code).
///
/// Matching is case-insensitive. Entry types absent from the table
/// classify as [`UNCLASSIFIED`].
const CATEGORIES: &[(&[&str], &str)] = &[
    (&["article", "article in press"], "2"),
    (
        &["inproceedings", "proceedings", "conference", "conference paper"],
        "1",
    ),
    (&["mastersthesis", "phdthesis"], "3"),
    (&["manual", "techreport"], "4"),
    (&["book"], "5"),
    (&["incollection", "inbook"], "6"),
];

/// The fall-through category for unknown entry types (including `misc`).
pub const UNCLASSIFIED: &str = "0";

/// Returns the publication category code for an entry type.
///
/// # Arguments
///
/// * `entry_type` - The entry type tag (e.g., "article", "InProceedings")
///
/// # Returns
///
/// One of "0" through "6". Unmatched types fall through to "0"; there is
/// no error case.
pub fn classify(entry_type: &str) -> &'static str {
    let entry_type = entry_type.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(types, _)| types.contains(&entry_type.as_str()))
        .map(|(_, code)| *code)
        .unwrap_or(UNCLASSIFIED)
}
