//! # Rendering
//!
//! Turns a parsed [`Document`](crate::parsing::Document) into output for a host.
//! Link urls come from model output and are untrusted: renderers pass them through
//! unchanged and never let the opened page reach back to the host window.

pub mod html;
