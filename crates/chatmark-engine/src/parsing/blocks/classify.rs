use super::kinds::{Bullet, Heading};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A heading line with its marker stripped.
    Heading { level: u8, content: &'a str },
    /// A bullet line with indentation and marker stripped.
    Bullet { content: &'a str },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else: a line of paragraph text, verbatim.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct ChatLineClassifier;

impl ChatLineClassifier {
    /// Classifies a line (without its newline) into a [`LineClass`].
    ///
    /// Precedence: headings, then bullets, then blank, then text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some((level, content)) = Heading::strip_marker(line) {
            return LineClass::Heading { level, content };
        }
        if let Some(content) = Bullet::strip_marker(line) {
            return LineClass::Bullet { content };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        LineClass::Text(line)
    }
}
