//! Inline text assembly: normalization, escaping, styling and tidy-up.

use super::fence::map_prose;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s<>()\[\]"]+"#).unwrap());
static RE_SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S)[ \t]+([,.;:?!])").unwrap());
static RE_BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

const ESCAPED: &[char] = &['\\', '`', '*', '_', '[', ']', '|'];

fn expand_ligature(c: char) -> Option<&'static str> {
    Some(match c {
        '\u{FB00}' => "ff",
        '\u{FB01}' => "fi",
        '\u{FB02}' => "fl",
        '\u{FB03}' => "ffi",
        '\u{FB04}' => "ffl",
        '\u{FB05}' | '\u{FB06}' => "st",
        _ => return None,
    })
}

/// NFC-normalize span text and expand Latin ligatures.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfc() {
        match expand_ligature(c) {
            Some(expanded) => out.push_str(expanded),
            None => out.push(c),
        }
    }
    out
}

/// Backslash-escape characters that Markdown would interpret inline.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a leading `#` or `>` so a paragraph line is not read as a
/// heading or quote.
pub fn escape_line_start(line: &str) -> String {
    let body = line.trim_start();
    if body.starts_with('#') || body.starts_with('>') {
        let indent = &line[..line.len() - body.len()];
        format!("{}\\{}", indent, body)
    } else {
        line.to_string()
    }
}

/// Wrap non-blank text in emphasis markers, keeping surrounding whitespace
/// outside the markers.
pub fn wrap_style(text: &str, bold: bool, italic: bool) -> String {
    let core = text.trim();
    if core.is_empty() {
        return text.to_string();
    }
    let marker = match (bold, italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => return text.to_string(),
    };
    let start = text.len() - text.trim_start().len();
    let end = start + core.len();
    format!(
        "{}{}{}{}{}",
        &text[..start],
        marker,
        core,
        marker,
        &text[end..]
    )
}

/// Straighten curly quotes, expand the ellipsis and flatten en/em dashes.
pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => out.push('"'),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

/// Turn bare `http(s)://` URLs into Markdown links.
pub fn linkify_urls(text: &str) -> String {
    RE_URL
        .replace_all(text, |caps: &Captures<'_>| {
            let m = &caps[0];
            let url = m.trim_end_matches(['.', ',', ';', ':', '!', '?', '\'', '*', '_', '\\']);
            format!("[{}]({}){}", url, url, &m[url.len()..])
        })
        .into_owned()
}

/// Remove horizontal whitespace before `, . ; : ? !` outside fenced code.
pub fn tidy_punctuation(text: &str, protect_code: bool) -> String {
    map_prose(text, protect_code, |seg| {
        RE_SPACE_BEFORE_PUNCT.replace_all(seg, "$1$2").into_owned()
    })
}

/// Collapse runs of blank lines outside fenced code and end the text with
/// exactly one newline.
pub fn finish_document(text: &str, protect_code: bool) -> String {
    let collapsed = map_prose(text, protect_code, |seg| {
        RE_BLANK_RUN.replace_all(seg, "\n\n").into_owned()
    });
    let body = collapsed.trim_matches('\n');
    if body.trim().is_empty() {
        String::new()
    } else {
        format!("{}\n", body)
    }
}
