//! # pagemd
//!
//! Text-shaping engine that turns an extracted page model into clean
//! Markdown.
//!
//! The input is a sequence of pages made of blocks, lines and styled spans,
//! as produced by a PDF or OCR extractor. Fixed-width layout breaks
//! sentences across lines, hyphenates words and repeats running headers on
//! every page; the pipeline undoes all of this without corrupting code
//! fences, tables, lists or headings.
//!
//! ## Quick Start
//!
//! ```
//! use pagemd::{Block, Options, PageText};
//!
//! fn main() -> pagemd::Result<()> {
//!     let page = PageText::from_blocks(vec![Block::from_text_lines(
//!         &["See Fig.", "2 for details."],
//!         11.0,
//!     )]);
//!
//!     let markdown = pagemd::to_markdown(&[page], &Options::default())?;
//!     assert_eq!(markdown, "See Fig. 2 for details.\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Transform**: drop caps, running header/footer removal, body-size baselines
//! - **Render**: heading promotion, list normalization, inline styling
//! - **Unwrap**: hyphenation repair and soft-break reflow, fence-protected
//! - **Finish**: callouts, orphan defragmentation, punctuation tidy

pub mod convert;
pub mod error;
pub mod model;
pub mod observer;
pub mod options;
pub mod render;
pub mod text;
pub mod transform;

// Re-export commonly used types
pub use convert::{document_to_markdown, to_markdown, Converter};
pub use error::{Error, PageError, Result};
pub use model::{Block, Document, ExtractedPage, Line, PageText, Span};
pub use observer::{Callbacks, ConversionObserver, NoopObserver};
pub use options::{OcrMode, Options};
pub use render::{render_document, Conversion, ConversionStats};
pub use text::two_pass_unwrap;
pub use transform::{transform_pages, Transformed};

use std::path::Path;

/// Read a page-model JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = pagemd::read_document("pages.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    Document::from_reader(std::io::BufReader::new(file))
}

/// Read a page-model JSON file and convert it to Markdown.
///
/// # Example
///
/// ```no_run
/// use pagemd::Options;
///
/// let markdown = pagemd::convert_file("pages.json", &Options::default()).unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &Options) -> Result<String> {
    let doc = read_document(path)?;
    document_to_markdown(&doc, options)
}
