//! Benchmarks for pagemd conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline over synthetic page models.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagemd::{Block, Options, PageText};

/// Creates synthetic pages with a running header, a heading, wrapped and
/// hyphenated paragraphs, a list and a page-number footer.
fn create_test_pages(page_count: usize) -> Vec<PageText> {
    (0..page_count)
        .map(|i| {
            PageText::from_blocks(vec![
                Block::from_text_lines(&["Annual Report 2024"], 9.0),
                Block::from_text_lines(&[format!("Section {}", i + 1)], 18.0),
                Block::from_text_lines(
                    &[
                        "The committee reviewed the results of the",
                        "previous year and found that the measure-",
                        "ments were consistent with the forecast, see Fig.",
                        "3 and Tab. 2 for the complete break-",
                        "down of the figures.",
                    ],
                    11.0,
                ),
                Block::from_text_lines(
                    &["• revenue grew steadily", "• costs were reduced", "• staff increased"],
                    11.0,
                ),
                Block::from_text_lines(
                    &["Note:", "Figures are unaudited and may change."],
                    11.0,
                ),
                Block::from_text_lines(&[format!("{}", i + 1)], 9.0),
            ])
        })
        .collect()
}

/// Benchmark the full conversion at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let options = Options::default();

    for page_count in [1, 10, 100].iter() {
        let pages = create_test_pages(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| pagemd::to_markdown(black_box(&pages), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the unwrap pass on its own.
fn bench_unwrap(c: &mut Criterion) {
    let options = Options::default();
    let text = "A hyphen-\nated line that wraps\nonto the next one.\n\n".repeat(500);

    c.bench_function("two_pass_unwrap", |b| {
        b.iter(|| pagemd::two_pass_unwrap(black_box(&text), &options));
    });
}

/// Benchmark page-model JSON parsing.
fn bench_json_parsing(c: &mut Criterion) {
    let doc = pagemd::Document::from_pages(create_test_pages(50));
    let json = doc.to_json().unwrap();

    c.bench_function("document_from_json", |b| {
        b.iter(|| pagemd::Document::from_json(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_conversion, bench_unwrap, bench_json_parsing);
criterion_main!(benches);
