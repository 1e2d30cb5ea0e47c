//! # Inline Parsing
//!
//! Scan-then-merge resolution of the two inline constructs, bold and link.
//!
//! ## Architecture
//!
//! Each construct is scanned independently over the whole line, producing
//! transient [`Span`]s. The spans are merged by start offset, conflicts are
//! resolved, and the survivors are laid over the line to emit [`InlineNode`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (PlainText, Bold, Link) and `InlineSequence`
//! - **`span`**: the transient `Span` record
//! - **`kinds`**: inline-specific types owning their patterns (Bold, Link)
//! - **`resolver`**: `resolve()` main entry point
//!
//! ## Overlap Precedence
//!
//! Links win: a bold span touching any part of a link is discarded whole.
//! `**[x](y)**` resolves to the two `**` runs as text around a single Link.

pub mod kinds;
pub mod resolver;
pub mod span;
pub mod types;

pub use resolver::resolve;
pub use span::{Span, SpanKind};
pub use types::{InlineNode, InlineSequence};
