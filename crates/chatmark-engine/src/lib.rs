pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    Document, resolve, segment,
    blocks::Block,
    inline::{InlineNode, InlineSequence},
};
pub use render::html::{HtmlOptions, render_html};
