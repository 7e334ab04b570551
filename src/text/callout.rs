//! Rewriting `Label:` blocks into block-quote callouts.

use super::fence::map_prose;
use crate::options::Options;

/// Capitalize the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The callout kind for a label line such as `Note:`, if configured.
fn callout_label<'a>(line: &'a str, options: &'a Options) -> Option<(&'a str, &'a str)> {
    let label = line.trim_end().strip_suffix(':')?;
    if label.is_empty() || label != capitalize(label) {
        return None;
    }
    options.callout_kind(label).map(|kind| (kind, label))
}

fn convert_segment(text: &str, options: &Options) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some((kind, label)) = callout_label(lines[i], options) {
            let body_end = lines[i + 1..]
                .iter()
                .position(|l| l.trim().is_empty())
                .map_or(lines.len(), |p| i + 1 + p);
            if body_end > i + 1 {
                out.push(format!("> [!{}] {}", kind, label));
                out.extend(lines[i + 1..body_end].iter().map(|l| format!("> {}", l)));
                i = body_end;
                continue;
            }
        }
        out.push(lines[i].to_string());
        i += 1;
    }

    out.join("\n")
}

/// Convert labeled blocks (`Note:` followed by body lines) into callouts.
///
/// Fenced code is left alone when code protection is enabled.
pub fn convert_callouts(text: &str, options: &Options) -> String {
    if options.callout_map.is_empty() {
        return text.to_string();
    }
    map_prose(text, options.protect_code_blocks, |seg| convert_segment(seg, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        convert_callouts(text, &Options::default())
    }

    #[test]
    fn test_basic_callout() {
        assert_eq!(
            run("Note:\nThis matters.\n\n"),
            "> [!note] Note\n> This matters.\n\n"
        );
    }

    #[test]
    fn test_multi_line_body_until_end() {
        assert_eq!(
            run("Warning:\nHot surface.\nDo not touch."),
            "> [!warning] Warning\n> Hot surface.\n> Do not touch."
        );
    }

    #[test]
    fn test_unmatched_labels_unchanged() {
        assert_eq!(run("Remember:\nthis"), "Remember:\nthis");
        assert_eq!(run("NOTE:\nshouting"), "NOTE:\nshouting");
        assert_eq!(run("Note:\n\nno body"), "Note:\n\nno body");
        assert_eq!(run("Note:"), "Note:");
    }

    #[test]
    fn test_custom_map() {
        let options = Options::default().with_callout("Hinweis", "info");
        assert_eq!(
            convert_callouts("Hinweis:\nWichtig.", &options),
            "> [!info] Hinweis\n> Wichtig."
        );
    }

    #[test]
    fn test_fenced_label_untouched() {
        let text = "```\nNote:\ninside code\n```\n";
        assert_eq!(run(text), text);
    }

    #[test]
    fn test_idempotent() {
        let once = run("Tip:\nUse the flag.\n\nAfter.");
        assert_eq!(run(&once), once);
    }
}
