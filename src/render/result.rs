//! Conversion result with detected edges and statistics.

use crate::text::{classify, segment, LineKind};
use serde::{Deserialize, Serialize};

/// Result of converting a document, including content and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// The rendered Markdown
    pub markdown: String,

    /// Running header removed from the pages, if any
    pub header: Option<String>,

    /// Running footer removed from the pages, if any
    pub footer: Option<String>,

    /// Conversion statistics
    pub stats: ConversionStats,
}

/// Statistics about the converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Total number of page slots
    pub page_count: u32,

    /// Pages the extractor failed on
    pub failed_page_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of callouts
    pub callout_count: u32,

    /// Number of table rows
    pub table_row_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect structure counts from rendered Markdown.
    pub fn from_markdown(markdown: &str) -> Self {
        let mut stats = Self::new();
        stats.count_text(markdown);

        for seg in segment(markdown) {
            if seg.is_code {
                stats.code_block_count += 1;
                continue;
            }
            let mut prev_kind = LineKind::Blank;
            for line in seg.text.lines() {
                let kind = classify(line);
                match kind {
                    LineKind::Heading => stats.heading_count += 1,
                    LineKind::ListItem => stats.list_item_count += 1,
                    LineKind::TableRow => stats.table_row_count += 1,
                    LineKind::HorizontalRule => stats.horizontal_rule_count += 1,
                    LineKind::Blockquote if line.trim_start().starts_with("> [!") => {
                        stats.callout_count += 1
                    }
                    LineKind::Prose | LineKind::Label if prev_kind == LineKind::Blank => {
                        stats.paragraph_count += 1
                    }
                    _ => {}
                }
                prev_kind = kind;
            }
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.page_count += other.page_count;
        self.failed_page_count += other.failed_page_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_item_count += other.list_item_count;
        self.callout_count += other.callout_count;
        self.table_row_count += other.table_row_count;
        self.code_block_count += other.code_block_count;
        self.horizontal_rule_count += other.horizontal_rule_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
