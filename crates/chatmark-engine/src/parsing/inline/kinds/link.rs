use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::span::{Span, SpanKind};

/// Link inline type with owned pattern.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex"))
    }

    /// Scans `line` for `[text](url)` spans, left to right.
    ///
    /// The url is captured verbatim; nothing is prefixed or rewritten.
    pub fn scan(line: &str) -> impl Iterator<Item = Span<'_>> {
        Self::pattern().captures_iter(line).map(|caps| {
            let full = caps.get_match();
            let (_, [text, url]) = caps.extract();
            Span {
                start: full.start(),
                end: full.end(),
                kind: SpanKind::Link { url },
                text,
            }
        })
    }
}
