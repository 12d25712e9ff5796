//! Common test utilities for skillpatch integration tests

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory holding the source and destination documents of a test
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a document, creating parent directories as needed
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real skillpatch binary, run inside `workspace`
#[allow(deprecated)]
pub fn skillpatch_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("skillpatch").expect("Failed to find skillpatch binary");
    cmd.current_dir(workspace.path())
        .env_remove("RUST_LOG")
        .env_remove("SKILLPATCH_VERBOSE");
    cmd
}

/// Parse the frontmatter of a patched document as YAML, to check the output
/// is still consumable downstream
#[allow(dead_code)]
pub fn parse_frontmatter(text: &str) -> serde_yaml::Mapping {
    let rest = text
        .strip_prefix("---\n")
        .expect("Document should start with ---");
    let end = rest
        .find("\n---\n")
        .expect("Document should close its frontmatter");
    serde_yaml::from_str(&rest[..end]).expect("Frontmatter should be a YAML mapping")
}
