use super::{
    kinds::{Bold, Link},
    span::Span,
    types::{InlineNode, InlineSequence},
};

/// Resolves one line into a sequence of [`InlineNode`]s.
///
/// # Algorithm
/// 1. Bold and link spans are scanned independently.
/// 2. They are merged by start offset. The sort is stable and bold spans are
///    collected first, so ties keep bold before link.
/// 3. Every bold span that intersects a link span is dropped whole.
/// 4. The survivors are laid over the line; gaps become `PlainText`.
///
/// # Returns
/// Nodes that partition the line in order. An empty line yields an empty
/// sequence; a line without markup yields a single `PlainText`.
pub fn resolve(line: &str) -> InlineSequence {
    let mut spans: Vec<Span<'_>> = Bold::scan(line).chain(Link::scan(line)).collect();
    spans.sort_by_key(|span| span.start);
    drop_bold_overlapping_links(&mut spans);
    emit(line, spans)
}

/// Removes bold spans that intersect any link span.
///
/// Spans of one kind never overlap each other, so this is the only conflict.
fn drop_bold_overlapping_links(spans: &mut Vec<Span<'_>>) {
    let links: Vec<Span<'_>> = spans.iter().filter(|s| s.is_link()).copied().collect();
    if links.is_empty() {
        return;
    }

    spans.retain(|span| {
        if span.is_link() {
            return true;
        }
        match links.iter().find(|link| link.overlaps(span)) {
            Some(link) => {
                log::trace!(
                    "dropping bold {}..{} overlapping link {}..{}",
                    span.start,
                    span.end,
                    link.start,
                    link.end
                );
                false
            }
            None => true,
        }
    });
}

/// Emits nodes for sorted, non-overlapping spans, filling gaps with plain text.
fn emit(line: &str, spans: Vec<Span<'_>>) -> InlineSequence {
    // Helper to flush a gap as a PlainText node
    fn flush_text(out: &mut InlineSequence, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::PlainText(line[start..end].to_string()));
        }
    }

    let mut out = InlineSequence::with_capacity(spans.len() * 2 + 1);
    let mut text_start = 0;

    for span in spans {
        flush_text(&mut out, line, text_start, span.start);
        text_start = span.end;
        out.push(span.into_node());
    }

    flush_text(&mut out, line, text_start, line.len());
    out
}
