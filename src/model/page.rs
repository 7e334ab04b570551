//! Block and page types.

use super::{Line, Span};
use serde::{Deserialize, Serialize};

/// A group of lines from the extractor's layout analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block from lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Create a block of single-span lines sharing one size.
    pub fn from_text_lines<S: AsRef<str>>(lines: &[S], size: f32) -> Self {
        Self::from_lines(
            lines
                .iter()
                .map(|l| Line::from_text(l.as_ref(), size))
                .collect(),
        )
    }

    /// Plain text of the block, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over all spans of the block.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.lines.iter().flat_map(|l| l.spans.iter())
    }

    /// Check if the block has no visible text.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(Line::is_blank)
    }
}

/// The text content of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl PageText {
    /// Create a page from blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Iterate over all lines of the page.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    /// Iterate over all spans of the page.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.blocks.iter().flat_map(Block::spans)
    }

    /// Trimmed text of the first non-blank line.
    pub fn first_line_text(&self) -> Option<String> {
        self.lines()
            .map(|l| l.text().trim().to_string())
            .find(|t| !t.is_empty())
    }

    /// Trimmed text of the last non-blank line.
    pub fn last_line_text(&self) -> Option<String> {
        self.blocks
            .iter()
            .rev()
            .flat_map(|b| b.lines.iter().rev())
            .map(|l| l.text().trim().to_string())
            .find(|t| !t.is_empty())
    }

    /// Plain text of the page, blocks separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
