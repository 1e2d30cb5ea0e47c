use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs have no line marker: they are the default when no other marker
/// matches. They own the separator that splits a message into paragraph
/// candidates, a run of two or more newlines.
pub struct Paragraph;

impl Paragraph {
    fn separator() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid paragraph separator regex"))
    }

    /// Splits `text` into paragraph candidates, in order, without empty fragments.
    pub fn candidates(text: &str) -> impl Iterator<Item = &str> {
        Self::separator()
            .split(text)
            .filter(|fragment| !fragment.is_empty())
    }
}
