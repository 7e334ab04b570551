//! Decorative drop-cap removal.

use crate::model::{Block, Line, PageText};

/// Size ratio between a drop cap and the text that follows it.
pub const DROP_CAP_RATIO: f32 = 1.6;

fn strip_line(line: &Line) -> Line {
    if let [first, second, ..] = line.spans.as_slice() {
        let is_single_char = first.text.trim().chars().count() == 1;
        if let (Some(cap), Some(next)) = (first.known_size(), second.known_size()) {
            if is_single_char && cap >= next * DROP_CAP_RATIO {
                return Line::new(line.spans[1..].to_vec());
            }
        }
    }
    line.clone()
}

/// Drop an oversized single-character first span from every line.
pub fn strip_drop_caps(page: &PageText) -> PageText {
    PageText::from_blocks(
        page.blocks
            .iter()
            .map(|b| Block::from_lines(b.lines.iter().map(strip_line).collect()))
            .collect(),
    )
}
