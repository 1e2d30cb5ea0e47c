use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{Document, blocks::Block, inline::InlineNode};

/// Options for [`render_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Class of the wrapping `<div>`.
    pub container_class: String,
    /// Adds `target="_blank"` to links.
    pub open_links_in_new_tab: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            container_class: "markdown-content".to_string(),
            open_links_in_new_tab: true,
        }
    }
}

/// Relationship set on every link so the target page gets no `window.opener`.
pub const LINK_REL: &str = "noopener noreferrer";

/// Renders a document as an HTML fragment.
///
/// Text and attribute values are escaped. Consecutive bullet items share one `<ul>`.
pub fn render_html(doc: &Document, options: &HtmlOptions) -> String {
    let mut out = format!(
        "<div class=\"{}\">",
        encode_double_quoted_attribute(&options.container_class)
    );
    let mut in_list = false;

    for block in &doc.blocks {
        let is_bullet = matches!(block, Block::BulletItem { .. });
        if in_list && !is_bullet {
            out.push_str("</ul>");
            in_list = false;
        }

        match block {
            Block::Header { level, content } => {
                out.push_str(&format!("<h{level}>"));
                push_inline(&mut out, content, options);
                out.push_str(&format!("</h{level}>"));
            }
            Block::BulletItem { content } => {
                if !in_list {
                    out.push_str("<ul>");
                    in_list = true;
                }
                out.push_str("<li>");
                push_inline(&mut out, content, options);
                out.push_str("</li>");
            }
            Block::Paragraph { lines } => {
                out.push_str("<p>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str("<br>");
                    }
                    push_inline(&mut out, line, options);
                }
                out.push_str("</p>");
            }
            Block::Blank => out.push_str("<br>"),
        }
    }

    if in_list {
        out.push_str("</ul>");
    }
    out.push_str("</div>");
    out
}

fn push_inline(out: &mut String, nodes: &[InlineNode], options: &HtmlOptions) {
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => out.push_str(&encode_text(text)),
            InlineNode::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&encode_text(text));
                out.push_str("</strong>");
            }
            InlineNode::Link { url, .. } => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(url));
                out.push('"');
                if options.open_links_in_new_tab {
                    out.push_str(" target=\"_blank\"");
                }
                out.push_str(" rel=\"");
                out.push_str(LINK_REL);
                out.push_str("\">");
                out.push_str(&encode_text(node.display_text()));
                out.push_str("</a>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::segment;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        render_html(&segment(text), &HtmlOptions::default())
    }

    #[test]
    fn empty_document() {
        assert_eq!(render(""), "<div class=\"markdown-content\"></div>");
    }

    #[test]
    fn header_and_paragraph() {
        assert_eq!(
            render("## Risk\nVolatility is **high**"),
            "<div class=\"markdown-content\"><h2>Risk</h2><p>Volatility is <strong>high</strong></p></div>"
        );
    }

    #[test]
    fn paragraph_lines_and_forced_breaks() {
        assert_eq!(
            render("a\n \nb\nc"),
            "<div class=\"markdown-content\"><p>a<br><br>b<br>c</p></div>"
        );
    }

    #[test]
    fn bullets_share_a_list() {
        assert_eq!(
            render("- one\n- two\n\nafter"),
            "<div class=\"markdown-content\"><ul><li>one</li><li>two</li></ul><p>after</p></div>"
        );
    }

    #[test]
    fn blank_block_closes_list() {
        assert_eq!(
            render("- one\n \n- two"),
            "<div class=\"markdown-content\"><ul><li>one</li></ul><br><ul><li>two</li></ul></div>"
        );
    }

    #[test]
    fn link_is_isolated_from_opener() {
        assert_eq!(
            render("[docs](https://example.com)"),
            "<div class=\"markdown-content\"><p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a></p></div>"
        );
    }

    #[test]
    fn link_without_new_tab() {
        let options = HtmlOptions {
            open_links_in_new_tab: false,
            ..HtmlOptions::default()
        };
        assert_eq!(
            render_html(&segment("[d](u)"), &options),
            "<div class=\"markdown-content\"><p><a href=\"u\" rel=\"noopener noreferrer\">d</a></p></div>"
        );
    }

    #[test]
    fn empty_link_text_shows_url() {
        assert!(render("[](http://x)").contains(">http://x</a>"));
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let html = render("<script> & [x\"](http://a?b=1&c=\"2\")");
        assert!(html.contains("&lt;script&gt; &amp; "));
        assert!(html.contains("href=\"http://a?b=1&amp;c=&quot;2&quot;\""));
        assert!(html.contains(">x&quot;</a>") || html.contains(">x\"</a>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn container_class_is_configurable() {
        let options = HtmlOptions {
            container_class: "chat \"msg\"".into(),
            ..HtmlOptions::default()
        };
        assert!(render_html(&segment(""), &options).starts_with("<div class=\"chat &quot;msg&quot;\">"));
    }
}
