//! Split a document into frontmatter lines and body, and reassemble it.

use super::patch::{Overrides, patch};

/// Line that opens and closes the frontmatter block.
const DELIMITER: &str = "---";

/// A SKILL.md document: raw frontmatter lines plus the verbatim body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Lines strictly between the two `---` delimiters, without newlines.
    pub metadata: Vec<String>,
    /// Everything after the closing delimiter line.
    pub body: String,
}

impl Document {
    /// Parse a document. Returns `None` when there is no `---` block.
    pub fn parse(text: &str) -> Option<Self> {
        let (metadata, body) = split(text)?;
        Some(Self {
            metadata: metadata.into_iter().map(str::to_string).collect(),
            body: body.to_string(),
        })
    }

    /// Apply overrides to the frontmatter in place.
    pub fn apply(&mut self, overrides: &Overrides) {
        self.metadata = patch(&self.metadata, overrides);
    }

    pub fn render(&self) -> String {
        render(&self.metadata, &self.body)
    }
}

/// Split text into frontmatter lines and body.
///
/// The text must start with a line of exactly `---`. The block ends at the
/// first later line of exactly `---`, terminated by a newline or by the end of
/// the text. Returns `None` if either delimiter is missing.
pub fn split(text: &str) -> Option<(Vec<&str>, &str)> {
    let rest = text.strip_prefix(DELIMITER)?.strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.strip_suffix('\n').unwrap_or(line) == DELIMITER {
            let metadata = rest[..offset].split_terminator('\n').collect();
            return Some((metadata, &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Reassemble a document from frontmatter lines and body.
///
/// Every frontmatter line, including the last, is terminated by a newline
/// before the closing delimiter.
pub fn render<S: AsRef<str>>(metadata: &[S], body: &str) -> String {
    let capacity = metadata
        .iter()
        .map(|line| line.as_ref().len() + 1)
        .sum::<usize>()
        + body.len()
        + 2 * (DELIMITER.len() + 1);

    let mut out = String::with_capacity(capacity);
    out.push_str(DELIMITER);
    out.push('\n');
    for line in metadata {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(body);
    out
}
