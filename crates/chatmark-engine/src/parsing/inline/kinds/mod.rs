//! # Inline Kinds
//!
//! Inline-specific types that own their patterns.
//!
//! ## Types
//!
//! - **`Bold`**: `**text**`, where text is non-empty and contains no `*`
//! - **`Link`**: `[text](url)`, where text has no `]`, url has no `)`, either may be empty
//!
//! Each kind scans a line on its own and yields non-overlapping [`Span`]s in
//! left-to-right order; the resolver decides between kinds.
//!
//! [`Span`]: super::Span

pub mod bold;
pub mod link;

pub use bold::Bold;
pub use link::Link;
