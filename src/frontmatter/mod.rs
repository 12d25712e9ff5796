//! SKILL.md frontmatter handling
//!
//! A document is a `---`-delimited metadata block followed by a free-form body.
//! Only top-level `key: value` lines of the block are ever rewritten; every
//! other line, and the whole body, is passed through untouched.

mod document;
mod patch;

pub use document::Document;
pub use patch::{Override, Overrides};
