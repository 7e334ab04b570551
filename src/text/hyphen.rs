//! Rejoining words hyphenated across line breaks.

/// Normalize CRLF, CR and the Unicode line/paragraph separators to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace(['\r', '\u{2028}', '\u{2029}'], "\n")
}

fn is_hyphen(c: char) -> bool {
    c == '-' || ('\u{2010}'..='\u{2014}').contains(&c)
}

/// If `left` ends in `<letter><hyphen>` (plus horizontal whitespace), return
/// the text before the hyphen and the alphabetic fragment preceding it.
fn split_hyphen(left: &str) -> Option<(&str, &str)> {
    let trimmed = left.trim_end_matches([' ', '\t']);
    let hyphen = trimmed.chars().next_back().filter(|c| is_hyphen(*c))?;
    let stem = &trimmed[..trimmed.len() - hyphen.len_utf8()];
    if !stem.chars().next_back().is_some_and(char::is_alphabetic) {
        return None;
    }
    let frag_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map_or(stem.len(), |(i, _)| i);
    Some((stem, &stem[frag_start..]))
}

fn should_join(fragment: &str, next: &str, aggressive: bool) -> bool {
    let mut chars = next.chars();
    match (chars.next(), chars.next()) {
        (Some(a), _) if a.is_lowercase() => true,
        (Some(a), Some(b)) if aggressive && a.is_uppercase() && b.is_lowercase() => {
            let is_acronym =
                fragment.chars().count() >= 2 && fragment.chars().all(char::is_uppercase);
            !is_acronym
        }
        _ => false,
    }
}

/// Join words broken by a hyphen at the end of a line.
///
/// The next line must start directly with a lowercase letter. In aggressive
/// mode a capitalized continuation is joined as well, unless the left
/// fragment is an all-caps acronym. A joined line is tested again against
/// the line after it.
pub fn unwrap_hyphens(text: &str, aggressive: bool) -> String {
    let text = normalize_newlines(text);
    let mut out: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if let Some(prev) = out.last_mut() {
            if let Some((stem, fragment)) = split_hyphen(prev) {
                if should_join(fragment, line, aggressive) {
                    let joined = format!("{}{}", stem, line);
                    *prev = joined;
                    continue;
                }
            }
        }
        out.push(line.to_string());
    }

    out.join("\n")
}
