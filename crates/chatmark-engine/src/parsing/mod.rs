//! # Parsing
//!
//! Turns assistant chat text into a [`Document`] in two stages:
//!
//! 1. **Blocks** (`blocks`): the text is cut into paragraph candidates on blank-line
//!    runs, every line is classified (header, bullet, blank, text) and a
//!    `BlockBuilder` groups the lines into [`Block`]s.
//! 2. **Inline** (`inline`): the content of each block line is resolved into plain,
//!    bold and link nodes.
//!
//! Both stages are total: any input produces a document.

pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{Block, BlockBuilder, ChatLineClassifier, kinds::Paragraph};

pub use inline::resolve;

/// A parsed chat message: blocks in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Splits `text` into a [`Document`]. Never fails; empty or whitespace-only input
/// yields an empty document.
pub fn segment(text: &str) -> Document {
    let classifier = ChatLineClassifier;
    let mut builder = BlockBuilder::new();

    for candidate in Paragraph::candidates(text) {
        for line in candidate.split('\n') {
            builder.push(classifier.classify(line));
        }
        builder.end_candidate();
    }

    let doc = Document {
        blocks: builder.finish(),
    };
    log::debug!(
        "segmented {} bytes into {} blocks",
        text.len(),
        doc.blocks.len()
    );
    doc
}
