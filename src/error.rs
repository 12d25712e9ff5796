//! Error types and handling for skillpatch
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//! Every variant is fatal: the binary prints it and exits with status 1.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skillpatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillPatchError {
    // Usage errors
    #[error("Invalid override (expected key=value): {argument}")]
    #[diagnostic(
        code(skillpatch::usage::invalid_override),
        help("Overrides are written as key=value, e.g. homepage=https://example.com")
    )]
    InvalidOverride { argument: String },

    // Document errors
    #[error("No frontmatter found in {path}")]
    #[diagnostic(
        code(skillpatch::document::no_frontmatter),
        help("The document must start with a '---' line and close the block with another '---' line")
    )]
    NoFrontmatter { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skillpatch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skillpatch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillPatchError>;
