//! Folding isolated short lines back into the preceding paragraph.

use super::classify::{classify, LineKind};
use super::fence::map_prose;
use crate::options::Options;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Lines wholly wrapped in emphasis stand alone, like page-failure markers.
fn is_emphasized(trimmed: &str) -> bool {
    trimmed.len() > 1
        && ((trimmed.starts_with('*') && trimmed.ends_with('*'))
            || (trimmed.starts_with('_') && trimmed.ends_with('_')))
}

fn defrag_segment(text: &str, max_len: usize) -> String {
    // A trailing newline terminates the last line; it is not a blank line.
    let (body, newline) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };
    let lines: Vec<&str> = body.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();
        let is_orphan = i > 0
            && i + 1 < lines.len()
            && is_blank(lines[i - 1])
            && is_blank(lines[i + 1])
            && !trimmed.is_empty()
            && !trimmed.starts_with('#')
            && !is_emphasized(trimmed)
            && trimmed.chars().count() <= max_len
            && classify(line) == LineKind::Prose;

        if is_orphan {
            let target = out.iter_mut().rev().find(|l| !is_blank(l));
            if let Some(target) = target {
                if matches!(classify(target), LineKind::Prose | LineKind::ListItem) {
                    let merged = format!("{} {}", target.trim_end(), trimmed);
                    *target = merged;
                    // The blank above is kept; skip the one below.
                    i += 2;
                    continue;
                }
            }
        }

        out.push(line.to_string());
        i += 1;
    }

    format!("{}{}", out.join("\n"), newline)
}

/// Append short lines standing alone between blank lines to the nearest
/// preceding prose or list line.
pub fn defragment(text: &str, options: &Options) -> String {
    map_prose(text, options.protect_code_blocks, |seg| {
        defrag_segment(seg, options.orphan_max_len)
    })
}
