//! # Block Kinds
//!
//! Block-specific types that own their syntax markers. The classifier and
//! segmenter call these; they never hardcode `#`, `- ` or the blank-line separator.

pub mod bullet;
pub mod heading;
pub mod paragraph;

pub use bullet::Bullet;
pub use heading::Heading;
pub use paragraph::Paragraph;
