//! # pagecheck
//!
//! Consistency validation for page-layout documents.
//!
//! A page-layout document annotates a page image with a tree of regions,
//! text lines, words and glyphs. This library checks that the tree agrees
//! with itself: the text on every level must equal the concatenation of
//! its children's texts, and every element's outline must be a usable
//! polygon fully contained in its parent's outline.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagecheck::{validate_file, ValidatorOptions};
//!
//! fn main() -> pagecheck::Result<()> {
//!     let report = validate_file("page_0001.json", ValidatorOptions::default())?;
//!     if report.is_valid() {
//!         println!("OK");
//!     } else {
//!         println!("{}", report);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Textual consistency**: region, line, word and glyph levels
//! - **Coordinate checks**: outline validity and parent containment
//! - **Baseline checks**: baselines must stay inside their line
//! - **Repair mode**: inconsistent text rewritten from child text
//! - **Parallel batches**: uses Rayon for validating many files

pub mod error;
pub mod geometry;
pub mod model;
pub mod report;
pub mod schema;
pub mod text;
pub mod validator;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Border, Document, Glyph, Metadata, Page, Point, Region, RegionKind, TextEquiv, TextLine, Word,
};
pub use report::{ValidationError, ValidationReport};
pub use text::TextStrategy;
pub use validator::{PageValidator, Strictness, ValidatorOptions};

use std::path::{Path, PathBuf};

use rayon::prelude::*;

/// Validate a document in memory.
///
/// Under [`Strictness::Fix`] inconsistent parent text is overwritten by
/// the concatenation of its children's texts; all other settings leave
/// the document untouched.
///
/// # Example
///
/// ```
/// use pagecheck::{validate_document, Document, Page, ValidatorOptions};
///
/// let mut document = Document::new(Page::new("page_0001.tif", 800, 600));
/// let report = validate_document(&mut document, ValidatorOptions::default());
/// assert!(report.is_valid());
/// ```
pub fn validate_document(document: &mut Document, options: ValidatorOptions) -> ValidationReport {
    PageValidator::new(options).validate(document)
}

/// Read a document from a JSON file and validate it.
///
/// Repairs made under [`Strictness::Fix`] stay in memory; the file on
/// disk is never rewritten.
///
/// # Example
///
/// ```no_run
/// use pagecheck::{validate_file, ValidatorOptions};
///
/// let report = validate_file("page_0001.json", ValidatorOptions::default()).unwrap();
/// println!("{}", report);
/// ```
pub fn validate_file<P: AsRef<Path>>(
    path: P,
    options: ValidatorOptions,
) -> Result<ValidationReport> {
    let mut document = Document::from_json_file(path)?;
    Ok(validate_document(&mut document, options))
}

/// Validate many files in parallel.
///
/// Returns one entry per input path, in input order, pairing the path
/// with the outcome of validating it.
pub fn validate_files(
    paths: &[PathBuf],
    options: ValidatorOptions,
) -> Vec<(PathBuf, Result<ValidationReport>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), validate_file(path, options)))
        .collect()
}
