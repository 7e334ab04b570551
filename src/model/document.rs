//! Document-level types.

use super::PageText;
use crate::error::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One page slot as delivered by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedPage {
    /// Page text extracted successfully
    Text(PageText),

    /// Extraction of this page failed
    Failed {
        /// Reason reported by the extractor
        error: String,
    },
}

impl ExtractedPage {
    /// The page text, if extraction succeeded.
    pub fn text(&self) -> Option<&PageText> {
        match self {
            ExtractedPage::Text(page) => Some(page),
            ExtractedPage::Failed { .. } => None,
        }
    }

    /// Check if extraction of this page failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractedPage::Failed { .. })
    }
}

impl From<PageText> for ExtractedPage {
    fn from(page: PageText) -> Self {
        ExtractedPage::Text(page)
    }
}

impl From<PageError> for ExtractedPage {
    fn from(err: PageError) -> Self {
        ExtractedPage::Failed { error: err.reason }
    }
}

/// An extracted document: page slots in original page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in original order
    pub pages: Vec<ExtractedPage>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from successfully extracted pages.
    pub fn from_pages(pages: Vec<PageText>) -> Self {
        Self {
            pages: pages.into_iter().map(ExtractedPage::Text).collect(),
        }
    }

    /// Reassemble per-page extraction results, in page order.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = std::result::Result<PageText, PageError>>,
    {
        Self {
            pages: results
                .into_iter()
                .map(|r| match r {
                    Ok(page) => ExtractedPage::Text(page),
                    Err(err) => err.into(),
                })
                .collect(),
        }
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document in JSON form from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a page slot.
    pub fn add_page(&mut self, page: impl Into<ExtractedPage>) {
        self.pages.push(page.into());
    }

    /// Number of page slots, failed ones included.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of failed page slots.
    pub fn failed_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_failed()).count()
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
