//! bib2academic: CLI for converting BibTeX bibliographies into Hugo Academic publication pages.
//!
//! This library provides functionality to:
//! - Load a BibTeX bibliography into plain field-map records
//! - Classify entry types into publication category codes
//! - Sanitize free-text field values for front matter embedding
//! - Render per-entry publication pages and standalone citation files

pub mod bibliography;
pub mod classify;
pub mod convert;
pub mod export;
pub mod render;
pub mod sanitize;

pub use bibliography::{load_bibliography, Record};
pub use classify::classify;
pub use convert::{convert_record, Action, ConvertOptions, RecordOutcome};
pub use export::{citation_filename, render_citation};
pub use render::{date_stamp, document_filename, publication_summary, render_document};
pub use sanitize::{collapse_whitespace, sanitize, split_contributors, transliterate};
