//! The conversion pipeline.
//!
//! # Example
//!
//! ```
//! use pagemd::{Block, Converter, Options, PageText};
//!
//! fn main() -> pagemd::Result<()> {
//!     let pages = vec![PageText::from_blocks(vec![
//!         Block::from_text_lines(&["Introduction"], 18.0),
//!         Block::from_text_lines(&["Text that wraps", "across lines."], 11.0),
//!     ])];
//!
//!     let conversion = Converter::new(Options::default())?
//!         .with_progress(|done, total| eprintln!("{}/{}", done, total))
//!         .convert(&pages)?;
//!
//!     assert!(conversion.markdown.starts_with("# Introduction"));
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::model::{Document, PageText};
use crate::observer::{Callbacks, ConversionObserver, NoopObserver};
use crate::options::Options;
use crate::render::{finalize, Conversion, ConversionStats, MarkdownRenderer};
use crate::transform::transform_pages;

/// Forwards events to the installed observer and the closure callbacks.
struct Tee<'x, 'a> {
    observer: &'x mut (dyn ConversionObserver + 'a),
    callbacks: &'x mut Callbacks<'a>,
}

impl ConversionObserver for Tee<'_, '_> {
    fn on_progress(&mut self, done: usize, total: usize) {
        self.observer.on_progress(done, total);
        self.callbacks.on_progress(done, total);
    }

    fn on_log(&mut self, message: &str) {
        log::debug!("{}", message);
        self.observer.on_log(message);
        self.callbacks.on_log(message);
    }
}

/// Converts page models to Markdown.
pub struct Converter<'a> {
    options: Options,
    observer: Box<dyn ConversionObserver + 'a>,
    callbacks: Callbacks<'a>,
}

impl<'a> Converter<'a> {
    /// Create a converter, validating the options.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            observer: Box::new(NoopObserver),
            callbacks: Callbacks::new(),
        })
    }

    /// Install an observer for progress and log events.
    pub fn with_observer(mut self, observer: impl ConversionObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Install a progress callback, called with `(done, total)` per page.
    pub fn with_progress(mut self, f: impl FnMut(usize, usize) + 'a) -> Self {
        self.callbacks = self.callbacks.with_progress(f);
        self
    }

    /// Install a log callback.
    pub fn with_log(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.callbacks = self.callbacks.with_log(f);
        self
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert successfully extracted pages.
    pub fn convert(&mut self, pages: &[PageText]) -> Result<Conversion> {
        self.convert_document(&Document::from_pages(pages.to_vec()))
    }

    /// Convert a document whose page slots may include extraction failures.
    pub fn convert_document(&mut self, doc: &Document) -> Result<Conversion> {
        let options = &self.options;
        let mut events = Tee {
            observer: self.observer.as_mut(),
            callbacks: &mut self.callbacks,
        };

        let total = doc.page_count();
        let failed = doc.failed_count();
        log::info!("Converting {} pages ({} failed upstream)", total, failed);
        log::debug!("OCR mode {:?} is handled by the extractor", options.ocr_mode);

        events.on_log(&format!("Transforming {} pages", total));
        let transformed = transform_pages(&doc.pages, options);
        if let Some(header) = &transformed.header {
            events.on_log(&format!("Removed running header: {}", header));
        }
        if let Some(footer) = &transformed.footer {
            events.on_log(&format!("Removed running footer: {}", footer));
        }

        events.on_log("Rendering pages");
        let rendered = MarkdownRenderer::new(options).render(&transformed, &mut events);

        events.on_log("Unwrapping paragraphs");
        let markdown = finalize(&rendered, options);

        let mut stats = ConversionStats::from_markdown(&markdown);
        stats.page_count = total as u32;
        stats.failed_page_count = failed as u32;
        log::info!(
            "Converted {} pages into {} bytes of Markdown",
            total,
            markdown.len()
        );

        Ok(Conversion {
            markdown,
            header: transformed.header,
            footer: transformed.footer,
            stats,
        })
    }
}

impl std::fmt::Debug for Converter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

/// Convert pages to Markdown with the given options.
pub fn to_markdown(pages: &[PageText], options: &Options) -> Result<String> {
    let mut converter = Converter::new(options.clone())?;
    Ok(converter.convert(pages)?.markdown)
}

/// Convert a document to Markdown with the given options.
pub fn document_to_markdown(doc: &Document, options: &Options) -> Result<String> {
    let mut converter = Converter::new(options.clone())?;
    Ok(converter.convert_document(doc)?.markdown)
}
