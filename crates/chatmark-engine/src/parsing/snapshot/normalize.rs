use std::fmt::Write;

use crate::parsing::{Document, blocks::Block, inline::InlineNode};

/// Renders a document as an indented outline, one node per line.
///
/// ```text
/// Header(2)
///   Text "Market "
///   Bold "update"
/// Paragraph
///   line 1
///     Link "news" -> "https://example.com"
///   line 2 (break)
/// ```
pub fn normalize(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Header { level, content } => {
                let _ = writeln!(out, "Header({level})");
                write_nodes(&mut out, content, 1);
            }
            Block::BulletItem { content } => {
                out.push_str("BulletItem\n");
                write_nodes(&mut out, content, 1);
            }
            Block::Paragraph { lines } => {
                out.push_str("Paragraph\n");
                for (i, line) in lines.iter().enumerate() {
                    if line.is_empty() {
                        let _ = writeln!(out, "  line {} (break)", i + 1);
                    } else {
                        let _ = writeln!(out, "  line {}", i + 1);
                        write_nodes(&mut out, line, 2);
                    }
                }
            }
            Block::Blank => out.push_str("Blank\n"),
        }
    }
    out
}

fn write_nodes(out: &mut String, nodes: &[InlineNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        let _ = match node {
            InlineNode::PlainText(text) => writeln!(out, "{indent}Text {text:?}"),
            InlineNode::Bold(text) => writeln!(out, "{indent}Bold {text:?}"),
            InlineNode::Link { text, url } => writeln!(out, "{indent}Link {text:?} -> {url:?}"),
        };
    }
}
