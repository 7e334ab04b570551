//! Running header and footer detection.
//!
//! Each page contributes its first and last non-blank line. The most
//! frequent first line becomes the header and the most frequent last line
//! the footer, provided it repeats on enough pages. Ties go to the string
//! seen first. Removal matches whole trimmed lines exactly.

use crate::model::{Block, PageText};

/// Counts strings, remembering the order they were first seen in.
#[derive(Debug, Default)]
struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, text: String) {
        match self.entries.iter_mut().find(|(t, _)| *t == text) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((text, 1)),
        }
    }

    fn winner(self, min_count: usize) -> Option<String> {
        let mut best: Option<(String, usize)> = None;
        for (text, count) in self.entries {
            if best.as_ref().map_or(true, |(_, c)| count > *c) {
                best = Some((text, count));
            }
        }
        best.filter(|(_, c)| *c >= min_count).map(|(t, _)| t)
    }
}

/// Find the repeated header and footer across pages.
pub fn detect_repeating_edges<'a, I>(pages: I, min_pages: usize) -> (Option<String>, Option<String>)
where
    I: IntoIterator<Item = &'a PageText>,
{
    let mut firsts = Tally::default();
    let mut lasts = Tally::default();

    for page in pages {
        if let Some(first) = page.first_line_text() {
            firsts.add(first);
        }
        if let Some(last) = page.last_line_text() {
            lasts.add(last);
        }
    }

    (firsts.winner(min_pages), lasts.winner(min_pages))
}

/// Remove every line equal to the header or footer; drop blocks left blank.
pub fn remove_edges(page: &PageText, header: Option<&str>, footer: Option<&str>) -> PageText {
    let is_edge = |text: &str| {
        let text = text.trim();
        header == Some(text) || footer == Some(text)
    };

    let blocks = page
        .blocks
        .iter()
        .filter_map(|block| {
            let lines: Vec<_> = block
                .lines
                .iter()
                .filter(|l| !is_edge(&l.text()))
                .cloned()
                .collect();
            if lines.len() == block.lines.len() {
                return Some(block.clone());
            }
            let block = Block::from_lines(lines);
            (!block.is_blank()).then_some(block)
        })
        .collect();

    PageText::from_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PageText {
        PageText::from_blocks(vec![Block::from_text_lines(lines, 11.0)])
    }

    #[test]
    fn test_detect_header_and_footer() {
        let pages: Vec<PageText> = (1..=5)
            .map(|i| {
                let body = format!("Body of page {}.", i);
                page(&["Confidential Report", body.as_str(), "ACME Corp"])
            })
            .collect();
        let (header, footer) = detect_repeating_edges(&pages, 3);
        assert_eq!(header.as_deref(), Some("Confidential Report"));
        assert_eq!(footer.as_deref(), Some("ACME Corp"));
    }

    #[test]
    fn test_below_threshold() {
        let pages = vec![page(&["Head", "a"]), page(&["Head", "b"]), page(&["Other", "c"])];
        let (header, footer) = detect_repeating_edges(&pages, 3);
        assert_eq!(header, None);
        assert_eq!(footer, None);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let pages = vec![
            page(&["A", "x"]),
            page(&["B", "x"]),
            page(&["B", "x"]),
            page(&["A", "x"]),
        ];
        let (header, _) = detect_repeating_edges(&pages, 2);
        assert_eq!(header.as_deref(), Some("A"));
    }

    #[test]
    fn test_remove_edges() {
        let p = PageText::from_blocks(vec![
            Block::from_text_lines(&["  Confidential Report "], 9.0),
            Block::from_text_lines(&["Body.", "Confidential Report (draft)"], 11.0),
        ]);
        let out = remove_edges(&p, Some("Confidential Report"), None);
        assert_eq!(out.blocks.len(), 1);
        assert_eq!(out.blocks[0].lines.len(), 2);
    }
}
