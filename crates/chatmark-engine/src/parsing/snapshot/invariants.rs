use crate::parsing::{
    Document,
    blocks::Block,
    inline::{InlineNode, kinds::Bold},
};

/// Rebuilds the source markup of a resolved line.
///
/// Plain text is copied, bold text is wrapped in `**`, links are written back
/// as `[text](url)`. For any line, `reassemble(&resolve(line)) == line`.
pub fn reassemble(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => out.push_str(text),
            InlineNode::Bold(text) => {
                out.push_str(Bold::DELIMITER);
                out.push_str(text);
                out.push_str(Bold::DELIMITER);
            }
            InlineNode::Link { text, url } => {
                out.push('[');
                out.push_str(text);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
            }
        }
    }
    out
}

/// Validates that `nodes` partition `line`.
///
/// # Panics
/// Panics with a descriptive message if the nodes do not cover the line exactly,
/// or if plain text runs are empty or adjacent.
pub fn check_line(line: &str, nodes: &[InlineNode]) {
    assert_eq!(
        reassemble(nodes),
        line,
        "inline nodes do not partition the line: {nodes:?}"
    );
    check_sequence(nodes);
}

/// Validates document-level invariants.
///
/// Asserts that:
/// - Header levels are 1 to 3
/// - No plain text node is empty
/// - No two plain text nodes are adjacent (gaps are emitted as one run)
/// - Paragraphs hold at least one line and do not end with a forced break
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        match block {
            Block::Header { level, content } => {
                assert!(
                    (1..=3).contains(level),
                    "header level out of range: {level}"
                );
                check_sequence(content);
            }
            Block::BulletItem { content } => check_sequence(content),
            Block::Paragraph { lines } => {
                assert!(
                    lines.last().is_some_and(|line| !line.is_empty()),
                    "paragraph is empty or ends with a break: {lines:?}"
                );
                lines.iter().for_each(|line| check_sequence(line));
            }
            Block::Blank => {}
        }
    }
}

fn check_sequence(nodes: &[InlineNode]) {
    for node in nodes {
        if let InlineNode::PlainText(text) = node {
            assert!(!text.is_empty(), "empty plain text node in {nodes:?}");
        }
    }
    for pair in nodes.windows(2) {
        assert!(
            !matches!(
                pair,
                [InlineNode::PlainText(_), InlineNode::PlainText(_)]
            ),
            "adjacent plain text nodes in {nodes:?}"
        );
    }
}
