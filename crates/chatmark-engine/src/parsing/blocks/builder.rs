use crate::parsing::inline::{InlineSequence, resolve};

use super::{classify::LineClass, types::Block};

/// Groups classified lines into [`Block`]s.
///
/// Lines are pushed one paragraph candidate at a time; [`BlockBuilder::end_candidate`]
/// closes the candidate. Blank lines are held back until the next non-blank line
/// decides what they become:
///
/// - between two text lines: an empty entry in that paragraph
/// - before a header, a bullet, or the first text line: a [`Block::Blank`]
/// - at the end of the candidate: nothing
pub struct BlockBuilder {
    paragraph: Option<Vec<InlineSequence>>,
    pending_blanks: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            paragraph: None,
            pending_blanks: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            LineClass::Blank => self.pending_blanks += 1,
            LineClass::Text(text) => self.extend_paragraph(text),
            LineClass::Heading { level, content } => {
                self.close_leaf();
                self.out.push(Block::Header {
                    level,
                    content: resolve(content),
                });
            }
            LineClass::Bullet { content } => {
                self.close_leaf();
                self.out.push(Block::BulletItem {
                    content: resolve(content),
                });
            }
        }
    }

    /// Closes the current paragraph candidate, dropping its trailing blank lines.
    pub fn end_candidate(&mut self) {
        self.flush_paragraph();
        self.pending_blanks = 0;
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.end_candidate();
        self.out
    }

    fn close_leaf(&mut self) {
        self.flush_paragraph();
        self.flush_blanks();
    }

    fn extend_paragraph(&mut self, text: &str) {
        if let Some(lines) = self.paragraph.as_mut() {
            // Interior blank lines survive as forced breaks.
            lines.extend(std::iter::repeat_n(
                InlineSequence::new(),
                self.pending_blanks,
            ));
            self.pending_blanks = 0;
            lines.push(resolve(text));
            return;
        }

        self.flush_blanks();
        self.paragraph = Some(vec![resolve(text)]);
    }

    fn flush_paragraph(&mut self) {
        if let Some(lines) = self.paragraph.take() {
            self.out.push(Block::Paragraph { lines });
        }
    }

    fn flush_blanks(&mut self) {
        let n = std::mem::take(&mut self.pending_blanks);
        self.out.extend(std::iter::repeat_n(Block::Blank, n));
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
