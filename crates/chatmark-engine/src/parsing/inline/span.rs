use super::types::InlineNode;

/// What a [`Span`] recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind<'a> {
    Bold,
    Link { url: &'a str },
}

/// One recognized markup occurrence before conflict resolution.
///
/// Offsets are a byte range `[start, end)` into the line, covering the
/// delimiters. They always fall on character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    pub kind: SpanKind<'a>,
    /// Inner text with delimiters stripped.
    pub text: &'a str,
}

impl<'a> Span<'a> {
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self.kind, SpanKind::Link { .. })
    }

    /// Whether the two half-open ranges intersect. Touching spans do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Span<'_>) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn into_node(self) -> InlineNode {
        match self.kind {
            SpanKind::Bold => InlineNode::Bold(self.text.to_string()),
            SpanKind::Link { url } => InlineNode::Link {
                text: self.text.to_string(),
                url: url.to_string(),
            },
        }
    }
}
