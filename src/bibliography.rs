//! BibTeX bibliography loading.
//!
//! Handles loading a bibliography file and converting each parsed entry
//! into a [`Record`], the field-map representation the rest of the crate
//! works with. BibTeX grammar parsing itself is delegated to the
//! `biblatex` crate.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use biblatex::{Bibliography, ChunksExt, Entry};
use thiserror::Error;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibliographyError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    ParseError(String),
}

/// One bibliographic entry, reduced to its citation key, entry type, and
/// a plain field map.
///
/// Field values are the verbatim text of the source entry (brace groups
/// resolved, LaTeX commands untouched). Field names and the entry type
/// are lowercased by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The citation key (e.g., "smith20")
    pub key: String,
    /// The lowercased entry type tag (e.g., "article", "inproceedings")
    pub entry_type: String,
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Creates an empty record with the given key and entry type.
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Record {
            key: key.into(),
            entry_type: entry_type.into().to_lowercase(),
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field value, replacing any previous value for that name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into().to_lowercase(), value.into());
    }

    /// Returns the value of a field, or `None` if the field is absent
    /// or blank.
    ///
    /// Absent and explicitly-empty fields are deliberately
    /// indistinguishable: every consumer treats both as "missing".
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Iterates over all fields in sorted name order, blank values included.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&Entry> for Record {
    fn from(entry: &Entry) -> Self {
        let fields = entry
            .fields
            .iter()
            .map(|(name, chunks)| (name.clone(), chunks.format_verbatim()))
            .collect();

        Record {
            key: entry.key.clone(),
            entry_type: entry.entry_type.to_string().to_lowercase(),
            fields,
        }
    }
}

/// Loads all records from a BibTeX file.
///
/// # Arguments
///
/// * `path` - Path to the .bib file
///
/// # Returns
///
/// All records in source order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid BibTeX.
pub fn load_bibliography(path: &Path) -> Result<Vec<Record>, BibliographyError> {
    let content = fs::read_to_string(path)?;
    parse_bibliography(&content)
}

/// Parses BibTeX content into records, preserving source order.
fn parse_bibliography(content: &str) -> Result<Vec<Record>, BibliographyError> {
    let bibliography =
        Bibliography::parse(content).map_err(|e| BibliographyError::ParseError(e.to_string()))?;

    Ok(bibliography.iter().map(Record::from).collect())
}
