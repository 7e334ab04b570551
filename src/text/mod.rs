//! The text-shaping engine.
//!
//! Every function here is pure and total: it takes a string and returns a
//! new one, never failing on any input. Stages that rewrite prose are
//! fence-aware and pass fenced code through byte-for-byte when
//! [`Options::protect_code_blocks`] is set.

pub mod callout;
pub mod classify;
pub mod defrag;
pub mod fence;
pub mod hyphen;
pub mod inline;
pub mod reflow;
pub mod sentence;

pub use callout::convert_callouts;
pub use classify::{classify, LineKind};
pub use defrag::defragment;
pub use fence::{map_prose, segment, Segment};
pub use hyphen::unwrap_hyphens;
pub use inline::{linkify_urls, normalize_punctuation};
pub use reflow::reflow;
pub use sentence::{ends_sentence, forced_join};

use crate::options::Options;

/// Repair hyphen breaks, then merge soft line breaks.
///
/// Both passes run per prose segment; fenced code is left untouched when
/// code protection is enabled. Applying this twice gives the same result as
/// applying it once.
pub fn two_pass_unwrap(text: &str, options: &Options) -> String {
    map_prose(text, options.protect_code_blocks, |seg| {
        let unwrapped = unwrap_hyphens(seg, options.aggressive_hyphen);
        reflow(&unwrapped, options)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pass_unwrap() {
        let options = Options::default();
        assert_eq!(
            two_pass_unwrap("A hyphen-\nated word\nspans lines.\n", &options),
            "A hyphenated word spans lines.\n"
        );
    }

    #[test]
    fn test_fence_inviolable() {
        let options = Options::default();
        let text = "wrapped\nline\n```\nkeep-\nthis\nas is\n```\nafter\nthat";
        assert_eq!(
            two_pass_unwrap(text, &options),
            "wrapped line\n```\nkeep-\nthis\nas is\n```\nafter that"
        );
    }

    #[test]
    fn test_without_code_protection() {
        let options = Options::default().with_code_protection(false);
        let text = "```\nkeep-\nthis\n```";
        assert_eq!(two_pass_unwrap(text, &options), "```\nkeepthis\n```");
    }

    #[test]
    fn test_idempotent() {
        let options = Options::default().with_aggressive_hyphen(true);
        let text = "Re-\nsearch shows\nthat z.\nB. this\n\n- item\ncontinues.\nNew line.";
        let once = two_pass_unwrap(text, &options);
        assert_eq!(two_pass_unwrap(&once, &options), once);
    }
}
