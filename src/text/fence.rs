//! Splitting text into fenced-code and prose segments.
//!
//! A fence opens on a line indented by at most three spaces whose content
//! starts with a run of three or more backticks or tildes. It closes on a
//! line carrying a run of the same character at least as long as the
//! opener, followed by nothing but whitespace. An unterminated fence runs to
//! the end of the input. Concatenating the segments reproduces the input.

/// A contiguous piece of text, either inside a code fence or outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Whether this segment is fenced code (fence lines included)
    pub is_code: bool,
    /// The segment text, line endings included
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    ch: char,
    len: usize,
}

/// Parse the fence marker at the start of a line, if any.
fn fence_marker(line: &str) -> Option<(Fence, &str)> {
    let line = line.trim_end_matches(['\n', '\r']);
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let ch = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == ch).count();
    if len < 3 {
        return None;
    }
    Some((Fence { ch, len }, &rest[len * ch.len_utf8()..]))
}

fn closes(line: &str, open: Fence) -> bool {
    match fence_marker(line) {
        Some((fence, after)) => {
            fence.ch == open.ch && fence.len >= open.len && after.trim().is_empty()
        }
        None => false,
    }
}

/// Split text into alternating prose and code segments.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    let mut open: Option<Fence> = None;

    for line in text.split_inclusive('\n') {
        let line_start = pos;
        pos += line.len();

        match open {
            None => {
                if let Some((fence, _)) = fence_marker(line) {
                    if line_start > start {
                        segments.push(Segment {
                            is_code: false,
                            text: &text[start..line_start],
                        });
                    }
                    start = line_start;
                    open = Some(fence);
                }
            }
            Some(fence) => {
                if closes(line, fence) {
                    segments.push(Segment {
                        is_code: true,
                        text: &text[start..pos],
                    });
                    start = pos;
                    open = None;
                }
            }
        }
    }

    if start < text.len() {
        segments.push(Segment {
            is_code: open.is_some(),
            text: &text[start..],
        });
    }
    segments
}

/// Apply `f` to every prose segment, passing code through untouched.
///
/// With `protect` off the whole text is treated as prose.
pub fn map_prose<F>(text: &str, protect: bool, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    if !protect {
        return f(text);
    }
    let mut out = String::with_capacity(text.len());
    for seg in segment(text) {
        if seg.is_code {
            out.push_str(seg.text);
        } else {
            out.push_str(&f(seg.text));
        }
    }
    out
}
