//! Merging soft line breaks into paragraphs.

use super::classify::{classify, LineKind};
use super::hyphen::normalize_newlines;
use super::sentence::{ends_sentence, forced_join};
use crate::options::Options;

/// Whether the break between `current` and `next` is a hard break.
fn keeps_break(current: &str, next: &str, options: &Options) -> bool {
    let current_kind = classify(current);
    let next_kind = classify(next);

    if current_kind == LineKind::Blank || next_kind == LineKind::Blank {
        return true;
    }
    if next_kind != LineKind::Prose || current_kind.is_whole_line() {
        return true;
    }
    ends_sentence(current, options) && !forced_join(current, next)
}

/// Replace soft line breaks with single spaces.
///
/// Blank lines always survive, as does every break before a structural
/// line or after a sentence end. Input is expected to be free of code
/// fences; see [`super::two_pass_unwrap`] for the fence-aware entry point.
pub fn reflow(text: &str, options: &Options) -> String {
    let text = normalize_newlines(text);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let merge = i > 0 && !keeps_break(lines[i - 1], line, options);
        match out.last_mut() {
            Some(current) if merge => {
                let merged = format!("{} {}", current.trim_end(), line.trim_start());
                *current = merged;
            }
            _ => out.push((*line).to_string()),
        }
    }

    out.join("\n")
}
