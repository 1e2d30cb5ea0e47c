use serde::Serialize;

use crate::parsing::inline::InlineSequence;

/// A top-level structural unit of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A `#`, `##` or `###` heading.
    Header {
        /// 1 to 3, the number of `#` in the marker.
        level: u8,
        content: InlineSequence,
    },
    /// A `- ` bullet line.
    BulletItem { content: InlineSequence },
    /// Consecutive text lines. Each entry is one source line; an empty entry is a
    /// forced line break left by a blank line inside the paragraph.
    Paragraph { lines: Vec<InlineSequence> },
    /// A blank line outside any paragraph.
    Blank,
}
