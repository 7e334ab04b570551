//! Integration tests for the full conversion pipeline.

use pagemd::observer::ConversionObserver;
use pagemd::{
    to_markdown, Block, Converter, Document, ExtractedPage, Line, Options, PageError, PageText,
    Span,
};

fn page(blocks: Vec<Block>) -> PageText {
    PageText::from_blocks(blocks)
}

fn para(lines: &[&str]) -> Block {
    Block::from_text_lines(lines, 11.0)
}

/// Observer recording every event it receives.
#[derive(Default)]
struct Recorder {
    progress: Vec<(usize, usize)>,
    logs: Vec<String>,
}

impl ConversionObserver for Recorder {
    fn on_progress(&mut self, done: usize, total: usize) {
        self.progress.push((done, total));
    }

    fn on_log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }
}

#[test]
fn test_heading_paragraph_and_list() {
    let pages = vec![page(vec![
        Block::from_text_lines(&["Getting Started"], 20.0),
        para(&["Install the tool", "from the package registry and run it."]),
        para(&["• first step", "• second step"]),
        Block::from_text_lines(&["Configuration"], 14.0),
        para(&["Edit the file."]),
    ])];

    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(
        markdown,
        "# Getting Started\n\n\
         Install the tool from the package registry and run it.\n\n\
         - first step\n- second step\n\n\
         ## Configuration\n\n\
         Edit the file.\n"
    );
}

#[test]
fn test_caps_heading_without_size() {
    let pages = vec![page(vec![para(&["INTRODUCTION"]), para(&["Some body text here."])])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert!(markdown.starts_with("# INTRODUCTION\n\n"));

    let options = Options::default().with_caps_headings(false);
    let markdown = to_markdown(&pages, &options).unwrap();
    assert!(markdown.starts_with("INTRODUCTION"));
}

#[test]
fn test_running_header_removed() {
    let pages: Vec<PageText> = (1..=5)
        .map(|i| {
            page(vec![
                Block::from_text_lines(&["Confidential Report"], 9.0),
                para(&[&format!(
                    "Page {} discusses the quarterly figures in considerable detail.",
                    i
                )]),
                Block::from_text_lines(&[&format!("{}", i)], 9.0),
            ])
        })
        .collect();

    let conversion = Converter::new(Options::default())
        .unwrap()
        .convert(&pages)
        .unwrap();
    assert_eq!(conversion.header.as_deref(), Some("Confidential Report"));
    assert_eq!(conversion.footer, None);
    assert!(!conversion.markdown.contains("Confidential Report"));

    let kept = Converter::new(Options::default().with_header_footer_removal(false))
        .unwrap()
        .convert(&pages)
        .unwrap();
    assert_eq!(kept.header, None);
    assert_eq!(kept.markdown.matches("Confidential Report").count(), 5);
}

#[test]
fn test_blocks_on_separate_pages_stay_apart() {
    let pages = vec![
        page(vec![para(&["The sentence starts on one page and"])]),
        page(vec![para(&["ends on the next one."])]),
    ];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(
        markdown,
        "The sentence starts on one page and\n\nends on the next one.\n"
    );
}

#[test]
fn test_page_breaks() {
    let pages = vec![
        page(vec![para(&["First page text that is long enough to stay."])]),
        page(vec![para(&["Second page text that is long enough to stay."])]),
    ];
    let options = Options::default().with_page_breaks(true);
    let markdown = to_markdown(&pages, &options).unwrap();
    assert_eq!(
        markdown,
        "First page text that is long enough to stay.\n\n---\n\nSecond page text that is long enough to stay.\n"
    );
}

#[test]
fn test_hyphenation_across_lines_in_block() {
    let pages = vec![page(vec![para(&[
        "The measure-",
        "ment was repeated",
        "three times.",
    ])])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(markdown, "The measurement was repeated three times.\n");
}

#[test]
fn test_callout_block() {
    let pages = vec![page(vec![
        para(&["Note:", "Back up your data before upgrading."]),
        para(&["The upgrade itself takes a few minutes to complete."]),
    ])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(
        markdown,
        "> [!note] Note\n> Back up your data before upgrading.\n\n\
         The upgrade itself takes a few minutes to complete.\n"
    );
}

#[test]
fn test_orphan_defragmented() {
    let pages = vec![page(vec![
        para(&["A paragraph that ends without a full stop"]),
        para(&["here"]),
        para(&["Another paragraph that follows the orphan line."]),
    ])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(
        markdown,
        "A paragraph that ends without a full stop here\n\n\
         Another paragraph that follows the orphan line.\n"
    );

    let options = Options::default().with_defragment(false);
    let markdown = to_markdown(&pages, &options).unwrap();
    assert!(markdown.contains("\n\nhere\n\n"));
}

#[test]
fn test_drop_cap_stripped_before_heading_detection() {
    let line = Line::new(vec![
        Span::new("T", 40.0),
        Span::new("he story begins on a quiet morning.", 11.0),
    ]);
    let pages = vec![page(vec![Block::from_lines(vec![line])])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(markdown, "he story begins on a quiet morning.\n");
}

#[test]
fn test_styled_spans() {
    let line = Line::new(vec![
        Span::new("Call ", 11.0),
        Span::bold("run_all", 11.0),
        Span::new(" with ", 11.0),
        Span::italic("care", 11.0),
        Span::new(" , always.", 11.0),
    ]);
    let pages = vec![page(vec![Block::from_lines(vec![line])])];
    let markdown = to_markdown(&pages, &Options::default()).unwrap();
    assert_eq!(markdown, "Call **run\\_all** with *care*, always.\n");
}

#[test]
fn test_failed_pages_render_marker() {
    let doc = Document::from_results(vec![
        Ok(page(vec![para(&["Readable first page with enough words in it."])])),
        Err(PageError::new(2, "OCR timeout")),
        Ok(page(vec![para(&["Readable third page with enough words in it."])])),
    ]);

    let mut recorder = Recorder::default();
    let conversion = Converter::new(Options::default())
        .unwrap()
        .with_observer(&mut recorder)
        .convert_document(&doc)
        .unwrap();

    assert_eq!(
        conversion.markdown,
        "Readable first page with enough words in it.\n\n\
         *[Page 2 could not be converted: OCR timeout]*\n\n\
         Readable third page with enough words in it.\n"
    );
    assert_eq!(conversion.stats.page_count, 3);
    assert_eq!(conversion.stats.failed_page_count, 1);
    assert_eq!(recorder.progress, vec![(1, 3), (2, 3), (3, 3)]);
    assert!(recorder.logs.iter().any(|l| l.contains("Page 2 failed")));
}

#[test]
fn test_failed_page_slot_from_json() {
    let json = r#"{"pages": [{"error": "encrypted"}]}"#;
    let doc = Document::from_json(json).unwrap();
    assert!(matches!(doc.pages[0], ExtractedPage::Failed { .. }));
    let markdown = pagemd::document_to_markdown(&doc, &Options::default()).unwrap();
    assert_eq!(markdown, "*[Page 1 could not be converted: encrypted]*\n");
}

#[test]
fn test_invalid_options() {
    let options = Options::default().with_orphan_max_len(0);
    assert!(to_markdown(&[], &options).is_err());
}

#[test]
fn test_output_is_stable_when_reconverted() {
    let pages = vec![page(vec![
        para(&["Results were consistent, see Fig.", "4 and Tab.", "2 for details."]),
        para(&["Warning:", "Do not exceed the rated load."]),
    ])];
    let options = Options::default();
    let first = to_markdown(&pages, &options).unwrap();
    assert_eq!(pagemd::render::finalize(&first, &options), first);
}
