//! Span and line types.

use serde::{Deserialize, Serialize};

/// A run of text with uniform styling, as reported by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Font size in points (0.0 = unknown)
    #[serde(default)]
    pub size: f32,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Font name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
}

impl Span {
    /// Create a plain span with the given size.
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            italic: false,
            font_name: None,
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>, size: f32) -> Self {
        Self {
            bold: true,
            ..Self::new(text, size)
        }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>, size: f32) -> Self {
        Self {
            italic: true,
            ..Self::new(text, size)
        }
    }

    /// Set the font name.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }

    /// Whether the span carries any non-whitespace text.
    pub fn is_visible(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Font size, if known.
    pub fn known_size(&self) -> Option<f32> {
        (self.size.is_finite() && self.size > 0.0).then_some(self.size)
    }
}

/// A physical line: spans in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in reading order
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Create a single-span line.
    pub fn from_text(text: impl Into<String>, size: f32) -> Self {
        Self::new(vec![Span::new(text, size)])
    }

    /// Concatenated span text, untrimmed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the line has no visible text.
    pub fn is_blank(&self) -> bool {
        !self.spans.iter().any(Span::is_visible)
    }
}
