//! Conversion options and configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Abbreviations that never end a sentence, compared case-insensitively.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
    "fig.", "figs.", "eq.", "eqs.", "ref.", "sec.", "no.", "nos.", "art.", "al.", "ca.",
    "approx.", "dept.", "est.", "tab.", "pp.", "p.", "z.b.", "vgl.", "usw.", "nr.", "s.",
    "abb.", "bsp.", "bzw.", "bspw.",
];

/// Callout labels recognized out of the box.
pub const DEFAULT_CALLOUTS: &[&str] = &["note", "tip", "warning", "example", "caution", "info"];

/// OCR mode requested from the extractor.
///
/// The text-shaping engine never performs OCR; the value is carried for
/// the collaborator that produces the page model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrMode {
    /// No OCR
    #[default]
    Off,
    /// OCR only pages without a text layer
    Auto,
    /// Tesseract on every page
    Tesseract,
    /// Run ocrmypdf before extraction
    Ocrmypdf,
}

/// Options controlling the Markdown conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// OCR mode, consumed upstream only
    pub ocr_mode: OcrMode,

    /// Promote all-caps blocks to headings
    pub caps_to_headings: bool,

    /// Minimum block/body size ratio for a heading (> 1.0)
    pub heading_size_ratio: f32,

    /// Maximum length of an orphan line merged into the previous paragraph
    pub orphan_max_len: usize,

    /// Detect and strip repeated running headers and footers
    pub remove_headers_footers: bool,

    /// Insert `---` between pages
    pub insert_page_breaks: bool,

    /// Also join hyphen breaks followed by a capitalized word
    pub aggressive_hyphen: bool,

    /// Never touch the content of fenced code blocks
    pub protect_code_blocks: bool,

    /// Merge short orphan lines into the previous paragraph
    pub defragment_short: bool,

    /// Minimum number of pages a header/footer must repeat on
    pub header_footer_min_pages: usize,

    /// Body size used when a page has too few sized spans
    pub default_body_size: f32,

    /// Abbreviations that do not end a sentence
    pub non_breaking_abbrevs: BTreeSet<String>,

    /// Callout label (lowercase) to callout kind
    pub callout_map: BTreeMap<String, String>,
}

impl Options {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; missing fields take their defaults.
    ///
    /// Malformed JSON is an [`Error::Json`]; well-formed JSON carrying a
    /// value out of range or of the wrong type is an [`Error::InvalidConfig`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let options: Self = serde_json::from_value(value)
            .map_err(|e| Error::InvalidConfig(format!("invalid options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.heading_size_ratio.is_finite() || self.heading_size_ratio <= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "heading_size_ratio must be > 1.0, got {}",
                self.heading_size_ratio
            )));
        }
        if self.orphan_max_len < 1 {
            return Err(Error::InvalidConfig("orphan_max_len must be >= 1".into()));
        }
        if self.header_footer_min_pages < 1 {
            return Err(Error::InvalidConfig(
                "header_footer_min_pages must be >= 1".into(),
            ));
        }
        if !self.default_body_size.is_finite() || self.default_body_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "default_body_size must be > 0, got {}",
                self.default_body_size
            )));
        }
        for (label, kind) in &self.callout_map {
            if label.trim().is_empty() || kind.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "callout labels and kinds must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Check if a token is a configured non-breaking abbreviation.
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.non_breaking_abbrevs
            .iter()
            .any(|a| a.to_lowercase() == token)
    }

    /// Look up the callout kind for a label, case-insensitively.
    pub fn callout_kind(&self, label: &str) -> Option<&str> {
        let label = label.to_lowercase();
        self.callout_map
            .iter()
            .find(|(k, _)| k.to_lowercase() == label)
            .map(|(_, v)| v.as_str())
    }

    /// Set the OCR mode.
    pub fn with_ocr_mode(mut self, mode: OcrMode) -> Self {
        self.ocr_mode = mode;
        self
    }

    /// Enable or disable caps-based heading promotion.
    pub fn with_caps_headings(mut self, enabled: bool) -> Self {
        self.caps_to_headings = enabled;
        self
    }

    /// Set the heading size ratio.
    pub fn with_heading_ratio(mut self, ratio: f32) -> Self {
        self.heading_size_ratio = ratio;
        self
    }

    /// Set the orphan length limit.
    pub fn with_orphan_max_len(mut self, len: usize) -> Self {
        self.orphan_max_len = len;
        self
    }

    /// Enable or disable header/footer removal.
    pub fn with_header_footer_removal(mut self, enabled: bool) -> Self {
        self.remove_headers_footers = enabled;
        self
    }

    /// Set the header/footer page threshold.
    pub fn with_header_footer_min_pages(mut self, pages: usize) -> Self {
        self.header_footer_min_pages = pages;
        self
    }

    /// Enable or disable page-break rules.
    pub fn with_page_breaks(mut self, enabled: bool) -> Self {
        self.insert_page_breaks = enabled;
        self
    }

    /// Enable or disable aggressive hyphen joining.
    pub fn with_aggressive_hyphen(mut self, enabled: bool) -> Self {
        self.aggressive_hyphen = enabled;
        self
    }

    /// Enable or disable fenced-code protection.
    pub fn with_code_protection(mut self, enabled: bool) -> Self {
        self.protect_code_blocks = enabled;
        self
    }

    /// Enable or disable orphan defragmentation.
    pub fn with_defragment(mut self, enabled: bool) -> Self {
        self.defragment_short = enabled;
        self
    }

    /// Set the fallback body size.
    pub fn with_default_body_size(mut self, size: f32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Add a non-breaking abbreviation.
    pub fn with_abbreviation(mut self, abbrev: impl Into<String>) -> Self {
        self.non_breaking_abbrevs.insert(abbrev.into().to_lowercase());
        self
    }

    /// Add or replace a callout mapping.
    pub fn with_callout(mut self, label: impl Into<String>, kind: impl Into<String>) -> Self {
        self.callout_map
            .insert(label.into().to_lowercase(), kind.into());
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ocr_mode: OcrMode::Off,
            caps_to_headings: true,
            heading_size_ratio: 1.15,
            orphan_max_len: 45,
            remove_headers_footers: true,
            insert_page_breaks: false,
            aggressive_hyphen: false,
            protect_code_blocks: true,
            defragment_short: true,
            header_footer_min_pages: 3,
            default_body_size: 11.0,
            non_breaking_abbrevs: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            callout_map: DEFAULT_CALLOUTS
                .iter()
                .map(|s| (s.to_string(), s.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.heading_size_ratio, 1.15);
        assert_eq!(options.orphan_max_len, 45);
        assert!(options.remove_headers_footers);
        assert!(options.caps_to_headings);
        assert!(!options.aggressive_hyphen);
        assert!(options.protect_code_blocks);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_page_breaks(true)
            .with_heading_ratio(1.3)
            .with_callout("Important", "important");

        assert!(options.insert_page_breaks);
        assert_eq!(options.heading_size_ratio, 1.3);
        assert_eq!(options.callout_kind("IMPORTANT"), Some("important"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Options::new().with_heading_ratio(1.0).validate().is_err());
        assert!(Options::new().with_heading_ratio(f32::NAN).validate().is_err());
        assert!(Options::new().with_orphan_max_len(0).validate().is_err());
        assert!(Options::new()
            .with_header_footer_min_pages(0)
            .validate()
            .is_err());
        assert!(Options::new().with_default_body_size(0.0).validate().is_err());
        assert!(Options::new().with_callout("", "x").validate().is_err());
    }

    #[test]
    fn test_abbreviation_lookup() {
        let options = Options::default();
        assert!(options.is_abbreviation("Fig."));
        assert!(options.is_abbreviation("z.B."));
        assert!(!options.is_abbreviation("stop."));
    }

    #[test]
    fn test_from_json_partial() {
        let options =
            Options::from_json(r#"{"insert_page_breaks": true, "ocr_mode": "auto"}"#).unwrap();
        assert!(options.insert_page_breaks);
        assert_eq!(options.ocr_mode, OcrMode::Auto);
        assert_eq!(options.orphan_max_len, 45);

        assert!(Options::from_json(r#"{"heading_size_ratio": 0.5}"#).is_err());
    }

    #[test]
    fn test_from_json_negative_length_is_config_error() {
        assert!(matches!(
            Options::from_json(r#"{"orphan_max_len": -1}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_json(r#"{"header_footer_min_pages": -3}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(Options::from_json("{not json"), Err(Error::Json(_))));
    }
}
