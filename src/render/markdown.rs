//! Markdown rendering of transformed pages.

use super::heading::{heading_level, heading_text};
use super::list::normalize_list_marker;
use crate::model::{Block, ExtractedPage, Line};
use crate::observer::{ConversionObserver, NoopObserver};
use crate::options::Options;
use crate::text::inline::{
    escape_line_start, escape_markdown, finish_document, linkify_urls, normalize_punctuation,
    normalize_text, tidy_punctuation, wrap_style,
};
use crate::text::{
    classify, convert_callouts, defragment, two_pass_unwrap, unwrap_hyphens, LineKind,
};
use crate::transform::Transformed;

/// Render transformed pages to Markdown, before document-level passes.
pub fn render_document(transformed: &Transformed, options: &Options) -> String {
    MarkdownRenderer::new(options).render(transformed, &mut NoopObserver)
}

/// Run the document-level passes over rendered Markdown: hyphen and soft
/// break unwrap, callouts, orphan defragmentation and punctuation tidy.
pub fn finalize(markdown: &str, options: &Options) -> String {
    let text = two_pass_unwrap(markdown, options);
    let text = convert_callouts(&text, options);
    let text = if options.defragment_short {
        defragment(&text, options)
    } else {
        text
    };
    let text = tidy_punctuation(&text, options.protect_code_blocks);
    finish_document(&text, options.protect_code_blocks)
}

/// Inline marker for a page the extractor could not convert.
pub fn failure_marker(page_number: usize, reason: &str) -> String {
    format!(
        "*[Page {} could not be converted: {}]*",
        page_number,
        escape_markdown(reason.trim())
    )
}

/// Markdown renderer.
pub struct MarkdownRenderer<'a> {
    options: &'a Options,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new Markdown renderer.
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Render every page slot, reporting one progress tick per slot.
    pub fn render(&self, transformed: &Transformed, observer: &mut dyn ConversionObserver) -> String {
        let total = transformed.pages.len();
        let mut lines: Vec<String> = Vec::new();

        for (i, slot) in transformed.pages.iter().enumerate() {
            match slot {
                ExtractedPage::Text(page) => {
                    let body_size = transformed
                        .body_sizes
                        .get(i)
                        .copied()
                        .unwrap_or(self.options.default_body_size);
                    for block in &page.blocks {
                        lines.extend(self.render_block(block, body_size));
                    }
                }
                ExtractedPage::Failed { error } => {
                    log::warn!("Page {} could not be converted: {}", i + 1, error);
                    observer.on_log(&format!("Page {} failed: {}", i + 1, error));
                    lines.push(failure_marker(i + 1, error));
                    lines.push(String::new());
                }
            }

            if self.options.insert_page_breaks && i + 1 < total {
                lines.push("---".to_string());
                lines.push(String::new());
            }
            observer.on_progress(i + 1, total);
        }

        finish_document(&lines.join("\n"), self.options.protect_code_blocks)
    }

    /// Render one block as a heading or a paragraph, followed by a blank line.
    pub fn render_block(&self, block: &Block, body_size: f32) -> Vec<String> {
        if block.is_blank() {
            return Vec::new();
        }

        if let Some(level) = heading_level(block, body_size, self.options) {
            let text = heading_text(block);
            if !text.is_empty() {
                return vec![format!("{} {}", "#".repeat(level as usize), text), String::new()];
            }
        }

        match self.render_paragraph(block) {
            Some(para) => vec![para, String::new()],
            None => Vec::new(),
        }
    }

    fn render_paragraph(&self, block: &Block) -> Option<String> {
        let rendered: Vec<String> = block
            .lines
            .iter()
            .map(render_line)
            .filter(|l| !l.trim().is_empty())
            .collect();
        if rendered.is_empty() {
            return None;
        }

        let text = unwrap_hyphens(&rendered.join("\n"), self.options.aggressive_hyphen);

        let mut out: Vec<String> = Vec::new();
        // Whether the last output line takes continuation text.
        let mut open = false;
        for line in text.split('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(item) = normalize_list_marker(trimmed) {
                out.push(item);
                open = true;
                continue;
            }
            if classify(trimmed) == LineKind::Label {
                out.push(trimmed.to_string());
                open = false;
                continue;
            }
            match out.last_mut() {
                Some(current) if open => {
                    current.push(' ');
                    current.push_str(trimmed);
                }
                _ => {
                    out.push(escape_line_start(trimmed));
                    open = true;
                }
            }
        }

        let para = normalize_punctuation(&out.join("\n"));
        Some(linkify_urls(&para))
    }
}

/// Assemble a line's spans with escaping and emphasis.
fn render_line(line: &Line) -> String {
    line.spans
        .iter()
        .map(|span| {
            let text = escape_markdown(&normalize_text(&span.text));
            wrap_style(&text, span.bold, span.italic)
        })
        .collect()
}
