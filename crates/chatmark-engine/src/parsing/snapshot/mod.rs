//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a [`Document`](crate::parsing::Document) as a stable
//!   text outline for `insta` snapshot testing
//! - **`invariants`**: runtime checks for parser correctness (inline nodes
//!   partition their source line, header levels in range, no empty or split
//!   plain-text runs)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_line, reassemble};
pub use normalize::normalize;
