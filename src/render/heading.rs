//! Heading promotion by font size and capitalization.

use crate::model::Block;
use crate::options::Options;
use crate::text::inline::{escape_markdown, normalize_punctuation, normalize_text};
use crate::transform::median;

/// Size ratio to the body baseline at which a heading becomes level 1.
pub const LEVEL_ONE_RATIO: f32 = 1.6;

/// Share of uppercase letters above which a block counts as capitalized.
pub const MOSTLY_CAPS_THRESHOLD: f32 = 0.75;

/// Whether every ASCII letter in `s` is uppercase (at least one required).
pub fn is_all_caps(s: &str) -> bool {
    let mut letters = s.chars().filter(char::is_ascii_alphabetic).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_ascii_uppercase())
}

/// Whether at least 75% of the alphabetic characters in `s` are uppercase.
pub fn is_mostly_caps(s: &str) -> bool {
    let (upper, total) = s
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(u, t), c| (u + c.is_uppercase() as usize, t + 1));
    total > 0 && upper as f32 / total as f32 >= MOSTLY_CAPS_THRESHOLD
}

/// Median size of the visible spans in a block, or `body_size` if none is known.
pub fn block_size(block: &Block, body_size: f32) -> f32 {
    let sizes: Vec<f32> = block
        .spans()
        .filter(|s| s.is_visible())
        .filter_map(|s| s.known_size())
        .collect();
    median(sizes).unwrap_or(body_size)
}

/// Heading level for a block, or `None` if it is body text.
pub fn heading_level(block: &Block, body_size: f32, options: &Options) -> Option<u8> {
    let size = block_size(block, body_size);
    let flat = block
        .lines
        .iter()
        .map(|l| l.text())
        .collect::<Vec<_>>()
        .join(" ");

    let by_size = size >= body_size * options.heading_size_ratio;
    let by_caps = options.caps_to_headings && (is_all_caps(&flat) || is_mostly_caps(&flat));

    if !(by_size || by_caps) {
        return None;
    }
    if by_caps || size >= body_size * LEVEL_ONE_RATIO {
        Some(1)
    } else {
        Some(2)
    }
}

/// Single-line heading text for a block.
///
/// Lines are joined, whitespace collapsed, surrounding dash and colon
/// punctuation trimmed and quotes/dashes normalized. Styling is dropped.
pub fn heading_text(block: &Block) -> String {
    let joined = block
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| escape_markdown(&normalize_text(&s.text)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(|c: char| matches!(c, ' ' | '-' | ':' | '–' | '—'));
    normalize_punctuation(trimmed)
}
