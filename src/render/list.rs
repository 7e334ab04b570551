//! List marker normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[•○◦·\-\x{2010}-\x{2014}]\s+").unwrap());
static RE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)[.)]\s+").unwrap());
static RE_LETTERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[A-Za-z][.)]\s+").unwrap());

/// Rewrite a leading list marker into canonical Markdown.
///
/// Bullet glyphs and hyphen-like dashes become `- `, `3)` and `3.` become
/// `3. `, and lettered items (`a)`, `B.`) are demoted to plain bullets.
/// Returns `None` when the line has no list marker.
pub fn normalize_list_marker(line: &str) -> Option<String> {
    if let Some(m) = RE_BULLET.find(line) {
        return Some(format!("- {}", line[m.end()..].trim_end()));
    }
    if let Some(caps) = RE_NUMBERED.captures(line) {
        let rest = &line[caps[0].len()..];
        return Some(format!("{}. {}", &caps[1], rest.trim_end()));
    }
    if let Some(m) = RE_LETTERED.find(line) {
        return Some(format!("- {}", line[m.end()..].trim_end()));
    }
    None
}
