//! Sentence-boundary detection.

use crate::options::Options;
use once_cell::sync::Lazy;
use regex::Regex;

// Emphasis markers wrap terminal punctuation the same way quotes do.
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '›', '»', '*', '_'];
const OPENERS: &[char] = &['"', '\'', '“', '‘', '„', '(', '[', '{', '‹', '«', '*', '_'];
const TERMINALS: &[char] = &['.', '!', '?', '…'];

static RE_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[A-Za-z]\.){2,}$").unwrap());
static RE_LABEL_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Nr|No|S|Fig|Eq|pp|p)\.$").unwrap());

/// Abbreviations that may be split across two lines, e.g. "z.\nB.".
static RE_SPLIT_ABBREV: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bz\.[ \t\x{00A0}\x{202F}]*\n[ \t\x{00A0}\x{202F}]*b\.",
        r"(?i)\bu\.[ \t\x{00A0}\x{202F}]*\n[ \t\x{00A0}\x{202F}]*a\.",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Whether a line ends a sentence.
///
/// The trimmed line must end in terminal punctuation, optionally followed by
/// closing quotes, brackets or emphasis markers. Its last token must not be
/// a non-breaking abbreviation, a dotted acronym or a short label like "Fig.".
pub fn ends_sentence(line: &str, options: &Options) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    let core = trimmed.trim_end_matches(CLOSERS);
    if !core.ends_with(TERMINALS) {
        return false;
    }

    let token = trimmed
        .split_whitespace()
        .next_back()
        .unwrap_or(trimmed)
        .trim_end_matches(CLOSERS)
        .trim_start_matches(OPENERS);

    !(options.is_abbreviation(token) || RE_ACRONYM.is_match(token) || RE_LABEL_DOT.is_match(token))
}

/// Whether an abbreviation is split across `current` and `next`.
pub fn forced_join(current: &str, next: &str) -> bool {
    let joined = format!("{}\n{}", current, next);
    RE_SPLIT_ABBREV.iter().any(|re| re.is_match(&joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(line: &str) -> bool {
        ends_sentence(line, &Options::default())
    }

    #[test]
    fn test_terminal_punctuation() {
        assert!(ends("This is the end."));
        assert!(ends("Really?"));
        assert!(ends("Stop!"));
        assert!(ends("And then…"));
        assert!(ends("He said \"yes.\""));
        assert!(ends("(See below.)"));
        assert!(!ends("no punctuation"));
        assert!(!ends("a comma,"));
        assert!(!ends("   "));
    }

    #[test]
    fn test_abbreviations_do_not_end() {
        assert!(!ends("See Fig."));
        assert!(!ends("as noted by Dr."));
        assert!(!ends("apples, pears, etc."));
        assert!(!ends("(e.g."));
        assert!(!ends("made in the U.S.A."));
        assert!(!ends("see No."));
    }

    #[test]
    fn test_emphasis_wraps_terminal() {
        assert!(ends("**Done.**"));
        assert!(ends("It was *over.*"));
        assert!(ends("_\"Really?\"_"));
        assert!(!ends("**Fig.**"));
        assert!(!ends("**Emphasis** only"));
    }

    #[test]
    fn test_label_dot_is_anchored() {
        assert!(ends("Please stop."));
        assert!(ends("This is a map."));
    }

    #[test]
    fn test_custom_abbreviation() {
        let options = Options::default().with_abbreviation("approx.");
        assert!(!ends_sentence("it costs Approx.", &options));
        let options = Options::default().with_abbreviation("cf.");
        assert!(!ends_sentence("cf.", &options));
    }

    #[test]
    fn test_forced_join() {
        assert!(forced_join("Obst, z.", "B. Äpfel"));
        assert!(forced_join("Birnen u.\u{00A0}", "a. mehr"));
        assert!(forced_join("Z.", "b. so"));
        assert!(!forced_join("Betz.", "B. Mann"));
        assert!(!forced_join("End.", "Begin."));
    }
}
