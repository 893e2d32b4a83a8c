//! Per-record conversion driver.
//!
//! Turns one record into its output file(s), honoring the overwrite-skip
//! policy: a path that already exists is left untouched unless overwrite
//! is requested, and the skip is decided independently for the page and
//! the citation file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bibliography::Record;
use crate::classify::classify;
use crate::export::{citation_filename, render_citation};
use crate::render::{document_filename, render_document};

/// Errors that can occur while writing conversion outputs.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Conversion settings for one batch run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory for generated publication pages
    pub output_dir: PathBuf,
    /// Directory for per-entry citation files
    pub bib_dir: PathBuf,
    /// Also emit a standalone .bib citation file per record
    pub copy_bib: bool,
    /// Populate the abstract field from the bibliography
    pub include_abstract: bool,
    /// Replace existing output files instead of skipping them
    pub overwrite: bool,
}

/// What happened to one output path.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Wrote(PathBuf),
    Skipped(PathBuf),
}

/// The outcome of converting one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// The publication page
    pub document: Action,
    /// The citation file, when citation copying is enabled
    pub citation: Option<Action>,
}

impl RecordOutcome {
    /// Iterates over all actions taken for this record.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        std::iter::once(&self.document).chain(self.citation.as_ref())
    }
}

/// Converts one record: classifies it, renders its publication page, and
/// optionally its citation file.
///
/// # Errors
///
/// Returns an error if a write fails. A failed write aborts the record
/// (and, in the batch loop, the run); files already written stay in
/// place.
pub fn convert_record(
    record: &Record,
    options: &ConvertOptions,
) -> Result<RecordOutcome, ConvertError> {
    let category = classify(&record.entry_type);

    let document_path = options.output_dir.join(document_filename(record));
    let document = write_unless_present(&document_path, options.overwrite, || {
        render_document(record, category, options.include_abstract)
    })?;

    let citation = if options.copy_bib {
        let citation_path = options.bib_dir.join(citation_filename(record));
        let action = write_unless_present(&citation_path, options.overwrite, || {
            render_citation(record)
        })?;
        Some(action)
    } else {
        None
    };

    Ok(RecordOutcome { document, citation })
}

/// Writes rendered content to a path, unless the path already exists and
/// overwrite is off. The render closure only runs when a write will
/// actually happen.
fn write_unless_present(
    path: &Path,
    overwrite: bool,
    render: impl FnOnce() -> String,
) -> Result<Action, ConvertError> {
    if path.exists() && !overwrite {
        return Ok(Action::Skipped(path.to_path_buf()));
    }

    fs::write(path, render()).map_err(|source| ConvertError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Action::Wrote(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record() -> Record {
        let mut record = Record::new("smith20", "article");
        record.set("author", "John Smith");
        record.set("title", "A Study of Things");
        record.set("journal", "Journal of Stuff");
        record.set("year", "2020");
        record
    }

    fn options(dir: &TempDir, copy_bib: bool, overwrite: bool) -> ConvertOptions {
        ConvertOptions {
            output_dir: dir.path().join("publication"),
            bib_dir: dir.path().join("bib"),
            copy_bib,
            include_abstract: false,
            overwrite,
        }
    }

    fn setup_dirs(options: &ConvertOptions) {
        fs::create_dir_all(&options.output_dir).unwrap();
        fs::create_dir_all(&options.bib_dir).unwrap();
    }

    #[test]
    fn test_convert_record_writes_document() {
        // Given: an empty output directory
        let dir = TempDir::new().unwrap();
        let options = options(&dir, false, false);
        setup_dirs(&options);

        // When: we convert a record
        let outcome = convert_record(&sample_record(), &options).unwrap();

        // Then: the page is written under the deterministic filename
        let expected = options.output_dir.join("2020-01-01_smith20.md");
        assert_eq!(outcome.document, Action::Wrote(expected.clone()));
        assert!(outcome.citation.is_none());
        let content = fs::read_to_string(expected).unwrap();
        assert!(content.starts_with("+++\n"));
    }

    #[test]
    fn test_convert_record_writes_citation_when_enabled() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, true, false);
        setup_dirs(&options);

        let outcome = convert_record(&sample_record(), &options).unwrap();

        let expected = options.bib_dir.join("2020-01-01_smith20.bib");
        assert_eq!(outcome.citation, Some(Action::Wrote(expected.clone())));
        let content = fs::read_to_string(expected).unwrap();
        assert!(content.starts_with("@article{smith20,"));
    }

    #[test]
    fn test_convert_record_skips_existing_without_overwrite() {
        // Given: an output file from a previous run, with other content
        let dir = TempDir::new().unwrap();
        let options = options(&dir, false, false);
        setup_dirs(&options);
        let path = options.output_dir.join("2020-01-01_smith20.md");
        fs::write(&path, "previous content").unwrap();

        // When: we convert again without overwrite
        let outcome = convert_record(&sample_record(), &options).unwrap();

        // Then: the existing file is untouched
        assert_eq!(outcome.document, Action::Skipped(path.clone()));
        assert_eq!(fs::read_to_string(path).unwrap(), "previous content");
    }

    #[test]
    fn test_convert_record_overwrite_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, false, true);
        setup_dirs(&options);
        let path = options.output_dir.join("2020-01-01_smith20.md");
        fs::write(&path, "previous content").unwrap();

        let outcome = convert_record(&sample_record(), &options).unwrap();

        assert_eq!(outcome.document, Action::Wrote(path.clone()));
        assert!(fs::read_to_string(path).unwrap().starts_with("+++\n"));
    }

    #[test]
    fn test_convert_record_skip_is_per_path() {
        // Given: the page exists but the citation does not
        let dir = TempDir::new().unwrap();
        let options = options(&dir, true, false);
        setup_dirs(&options);
        let page = options.output_dir.join("2020-01-01_smith20.md");
        fs::write(&page, "previous content").unwrap();

        // When: we convert with citation copying on
        let outcome = convert_record(&sample_record(), &options).unwrap();

        // Then: the page is skipped but the citation is still written
        assert_eq!(outcome.document, Action::Skipped(page));
        let bib = options.bib_dir.join("2020-01-01_smith20.bib");
        assert_eq!(outcome.citation, Some(Action::Wrote(bib)));
    }

    #[test]
    fn test_convert_record_write_failure_propagates() {
        // Given: an output directory that does not exist
        let dir = TempDir::new().unwrap();
        let options = options(&dir, false, false);
        // no setup_dirs on purpose

        // When: we convert
        let result = convert_record(&sample_record(), &options);

        // Then: the write error propagates
        assert!(matches!(
            result,
            Err(ConvertError::WriteError { .. })
        ));
    }

    #[test]
    fn test_outcome_actions_iterates_both() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, true, false);
        setup_dirs(&options);

        let outcome = convert_record(&sample_record(), &options).unwrap();
        assert_eq!(outcome.actions().count(), 2);
    }
}
