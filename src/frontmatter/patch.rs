//! Key-level overrides for top-level frontmatter fields.

use std::str::FromStr;

use tracing::debug;

use crate::error::SkillPatchError;

/// A single `key=value` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl Override {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether `line` assigns this key at column 0 (`key`, optional
    /// whitespace, then `:`).
    fn matches(&self, line: &str) -> bool {
        line.strip_prefix(self.key.as_str())
            .is_some_and(|rest| rest.trim_start().starts_with(':'))
    }

    /// Canonical `key: value` line. The value is written as-is.
    fn to_line(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

impl FromStr for Override {
    type Err = SkillPatchError;

    /// Split on the first `=`; the value may contain further `=` signs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| SkillPatchError::InvalidOverride {
                argument: s.to_string(),
            })?;
        Ok(Self::new(key, value))
    }
}

/// Ordered set of overrides with unique keys.
///
/// Inserting an existing key replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<Override>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: Override) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => existing.value = entry.value,
            None => self.entries.push(entry),
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Override> {
        self.entries.iter()
    }
}

impl FromIterator<Override> for Overrides {
    fn from_iter<I: IntoIterator<Item = Override>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for entry in iter {
            overrides.insert(entry);
        }
        overrides
    }
}

impl<'a> IntoIterator for &'a Overrides {
    type Item = &'a Override;
    type IntoIter = std::slice::Iter<'a, Override>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Apply overrides to frontmatter lines.
///
/// Each key replaces only the first top-level line assigning it; later
/// duplicates and indented (nested) keys are left alone. Keys that match no
/// line are appended at the end, in insertion order.
pub fn patch<S: AsRef<str>>(metadata: &[S], overrides: &Overrides) -> Vec<String> {
    let mut pending: Vec<&Override> = overrides.iter().collect();
    let mut patched = Vec::with_capacity(metadata.len() + pending.len());

    for line in metadata {
        let line = line.as_ref();
        match pending.iter().position(|o| o.matches(line)) {
            Some(idx) => {
                let entry = pending.remove(idx);
                debug!(key = %entry.key, "replacing existing key");
                patched.push(entry.to_line());
            }
            None => patched.push(line.to_string()),
        }
    }

    for entry in pending {
        debug!(key = %entry.key, "appending missing key");
        patched.push(entry.to_line());
    }

    patched
}
