//! # Block Parsing
//!
//! Two-phase block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line of a paragraph candidate is
//!    classified into a `LineClass` using only the line itself
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups classified lines
//!    into `Block`s, merging consecutive text lines into one paragraph
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block-specific types owning their markers (Heading, Bullet, Paragraph)
//! - **`classify`**: `ChatLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Header markers are checked longest first (`### ` before `## ` before `# `)
//! - Text lines of one paragraph stay separate entries, never joined
//! - Trailing blank lines of a paragraph candidate never produce output

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{ChatLineClassifier, LineClass};
pub use types::Block;
