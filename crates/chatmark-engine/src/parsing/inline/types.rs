use serde::Serialize;

/// A resolved run of text within one line. Nodes never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineNode {
    /// Text outside any recognized markup, verbatim.
    PlainText(String),
    /// The text between `**` delimiters.
    Bold(String),
    /// A `[text](url)` link. Both fields are kept exactly as written; `text` may be empty.
    Link { text: String, url: String },
}

/// The ordered nodes of one line.
pub type InlineSequence = Vec<InlineNode>;

impl InlineNode {
    /// The literal text this node carries (link text for links, possibly empty).
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            InlineNode::PlainText(text) | InlineNode::Bold(text) => text,
            InlineNode::Link { text, .. } => text,
        }
    }

    /// The text a renderer should show. A link with empty text displays its url.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            InlineNode::Link { text, url } if text.is_empty() => url,
            other => other.text(),
        }
    }
}
