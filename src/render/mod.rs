//! Rendering transformed pages to Markdown.

pub mod heading;
pub mod list;
mod markdown;
mod result;

pub use heading::{heading_level, heading_text, is_all_caps, is_mostly_caps};
pub use list::normalize_list_marker;
pub use markdown::{failure_marker, finalize, render_document, MarkdownRenderer};
pub use result::{Conversion, ConversionStats};
