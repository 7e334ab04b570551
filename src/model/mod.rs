//! Page model types consumed by the text-shaping pipeline.
//!
//! The model mirrors what a layout-aware extractor produces: pages made of
//! blocks, blocks made of lines, lines made of styled spans. It is plain data
//! and flows read-only through every stage.

mod document;
mod line;
mod page;

pub use document::{Document, ExtractedPage};
pub use line::{Line, Span};
pub use page::{Block, PageText};
