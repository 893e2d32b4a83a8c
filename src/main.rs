//! CLI for bib2academic - Convert a BibTeX bibliography into Hugo Academic publication pages.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use bib2academic::{
    bibliography::BibliographyError, convert_record, load_bibliography, Action, ConvertOptions,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Convert a BibTeX bibliography into Hugo Academic publication pages
#[derive(Parser)]
#[command(name = "bib2academic")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib2academic publications.bib
  bib2academic publications.bib --copy-bib --include-abstract
  bib2academic publications.bib -o content/publication --overwrite

One page is written per entry, named {year}-01-01_{key}.md (entries
without a year sort last under 2999-01-01). Existing files are skipped
unless --overwrite is given.")]
struct Cli {
    /// Input BibTeX file
    bibfile: PathBuf,

    /// Directory for generated publication pages
    #[arg(short, long, default_value = "publication")]
    output_folder: PathBuf,

    /// Directory for per-entry citation files
    #[arg(short, long, default_value = "bib")]
    bib_folder: PathBuf,

    /// Also emit a standalone .bib citation file per entry
    #[arg(long)]
    copy_bib: bool,

    /// Populate the abstract field from the bibliography
    #[arg(long)]
    include_abstract: bool,

    /// Replace existing output files instead of skipping them
    #[arg(long)]
    overwrite: bool,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — bibliography file not found / unreadable
    InputFile(String),
    /// Exit 11 — bibliography file is not valid BibTeX
    BibFile(String),
    /// Exit 12 — cannot create an output directory
    OutputDir(String),
    /// Exit 13 — a per-record write failed
    WriteFailed(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::BibFile(_) => 11,
            AppError::OutputDir(_) => 12,
            AppError::WriteFailed(_) => 13,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::BibFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be BibTeX (@type{{key, field = {{value}}, ...}})",
                    msg
                )
            }
            AppError::OutputDir(msg) => {
                write!(f, "{}\n  hint: check that the location is writable", msg)
            }
            AppError::WriteFailed(msg) => {
                write!(
                    f,
                    "{}\n  hint: files already written are left in place; re-run once the cause is fixed",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 1. Load the bibliography; nothing is created on disk until it parses
    let records = load_bibliography(&cli.bibfile).map_err(|e| match e {
        BibliographyError::IoError(err) => {
            AppError::InputFile(format!("'{}': {}", cli.bibfile.display(), err))
        }
        BibliographyError::ParseError(msg) => {
            AppError::BibFile(format!("'{}': {}", cli.bibfile.display(), msg))
        }
    })?;

    // 2. Create output directories
    fs::create_dir_all(&cli.output_folder)
        .map_err(|e| AppError::OutputDir(format!("'{}': {}", cli.output_folder.display(), e)))?;
    if cli.copy_bib {
        fs::create_dir_all(&cli.bib_folder)
            .map_err(|e| AppError::OutputDir(format!("'{}': {}", cli.bib_folder.display(), e)))?;
    }

    let options = ConvertOptions {
        output_dir: cli.output_folder,
        bib_dir: cli.bib_folder,
        copy_bib: cli.copy_bib,
        include_abstract: cli.include_abstract,
        overwrite: cli.overwrite,
    };

    // 3. Convert each record in load order, with a linear progress counter
    let total = records.len();
    let mut written = 0;
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        let outcome =
            convert_record(record, &options).map_err(|e| AppError::WriteFailed(e.to_string()))?;

        for action in outcome.actions() {
            match action {
                Action::Wrote(_) => written += 1,
                Action::Skipped(_) => skipped += 1,
            }
        }

        eprintln!("[{}/{}] {}", index + 1, total, record.key);
    }

    // 4. Summary
    eprintln!(
        "converted {} record(s): {} file(s) written, {} skipped",
        total, written, skipped
    );

    Ok(())
}
