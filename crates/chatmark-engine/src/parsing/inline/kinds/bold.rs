use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::span::{Span, SpanKind};

/// Bold inline type with owned delimiter and pattern.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"))
    }

    /// Scans `line` for bold spans, left to right, resuming after each match.
    ///
    /// An opener whose content hits a stray `*` before the closer is not bold.
    pub fn scan(line: &str) -> impl Iterator<Item = Span<'_>> {
        Self::pattern().captures_iter(line).map(|caps| {
            let full = caps.get_match();
            let (_, [text]) = caps.extract();
            Span {
                start: full.start(),
                end: full.end(),
                kind: SpanKind::Bold,
                text,
            }
        })
    }
}
