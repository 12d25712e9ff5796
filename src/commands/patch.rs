//! Patch command implementation
//!
//! Reads the source document in full, patches its frontmatter and writes the
//! result to the destination. The destination is only touched once the
//! source has been read and parsed successfully.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SkillPatchError};
use crate::frontmatter::{Document, Overrides};

fn file_read_error(path: &Path, e: &std::io::Error) -> SkillPatchError {
    SkillPatchError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: &std::io::Error) -> SkillPatchError {
    SkillPatchError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Run patch command
pub fn run(input: &Path, output: &Path, overrides: &Overrides) -> Result<()> {
    let text = std::fs::read_to_string(input).map_err(|e| file_read_error(input, &e))?;
    debug!(path = %input.display(), bytes = text.len(), "read source document");

    let mut document = Document::parse(&text).ok_or_else(|| SkillPatchError::NoFrontmatter {
        path: input.display().to_string(),
    })?;
    debug!(
        lines = document.metadata.len(),
        overrides = overrides.len(),
        "patching frontmatter"
    );

    document.apply(overrides);
    let rendered = document.render();

    std::fs::write(output, &rendered).map_err(|e| file_write_error(output, &e))?;
    debug!(path = %output.display(), bytes = rendered.len(), "wrote patched document");

    Ok(())
}
