//! Structural classification of a single Markdown line.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[*+\-•◦○·]\s|\d+[.)]\s|[A-Za-z]\)\s|[IVXLCDM]+\.\s)").unwrap()
});
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}#{1,6}\s").unwrap());
static RE_BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}>\s").unwrap());
static RE_CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}(?:`{3,}|~{3,})").unwrap());
static RE_TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|").unwrap());
static RE_HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:-{3,}|_{3,}|\*{3,})\s*$").unwrap());
static RE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}[\w /\-]{0,24}:\s*$").unwrap());

/// Structural kind of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Bulleted, numbered, lettered or roman-numbered item
    ListItem,
    /// ATX heading
    Heading,
    /// Block quote
    Blockquote,
    /// Code fence marker
    CodeFence,
    /// Table row
    TableRow,
    /// Thematic break
    HorizontalRule,
    /// Short `Label:` line
    Label,
    /// Whitespace only
    Blank,
    /// Anything else
    Prose,
}

impl LineKind {
    /// Lines that stand on their own and never absorb the following line.
    pub fn is_whole_line(self) -> bool {
        matches!(
            self,
            LineKind::Heading
                | LineKind::HorizontalRule
                | LineKind::Label
                | LineKind::TableRow
                | LineKind::CodeFence
        )
    }
}

/// Classify a line. The first matching kind in declaration order wins.
pub fn classify(line: &str) -> LineKind {
    if RE_LIST_ITEM.is_match(line) {
        LineKind::ListItem
    } else if RE_HEADING.is_match(line) {
        LineKind::Heading
    } else if RE_BLOCKQUOTE.is_match(line) {
        LineKind::Blockquote
    } else if RE_CODE_FENCE.is_match(line) {
        LineKind::CodeFence
    } else if RE_TABLE_ROW.is_match(line) {
        LineKind::TableRow
    } else if RE_HORIZONTAL_RULE.is_match(line) {
        LineKind::HorizontalRule
    } else if RE_LABEL.is_match(line) {
        LineKind::Label
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Prose
    }
}
