//! Shared testing utilities for dirseed CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dirseed` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirseed").expect("Failed to locate dirseed binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Path to the .dirseed directory in the project.
    pub fn dirseed_path(&self) -> PathBuf {
        self.work_dir.join(".dirseed")
    }

    /// Path to the default asset root.
    pub fn assets_path(&self) -> PathBuf {
        self.work_dir.join("Assets")
    }

    /// Write the active folder list.
    pub fn write_folders(&self, folders: &[&str]) {
        self.write_toml_list(&self.dirseed_path().join("folders.toml"), folders);
    }

    /// Write a preset under `.dirseed/presets/`.
    pub fn write_preset(&self, name: &str, folders: &[&str]) {
        let path = self.dirseed_path().join("presets").join(format!("{}.toml", name));
        self.write_toml_list(&path, folders);
    }

    /// Read the active folder list entries.
    pub fn read_folders(&self) -> Vec<String> {
        let content = fs::read_to_string(self.dirseed_path().join("folders.toml"))
            .expect("Failed to read folders.toml");
        let value: toml::Value = toml::from_str(&content).expect("folders.toml should be TOML");
        value
            .get("folders")
            .and_then(|folders| folders.as_array())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect()
    }

    /// Assert that a folder exists under the asset root.
    pub fn assert_asset_dir(&self, relative: &str) {
        let path = self.assets_path().join(relative);
        assert!(path.is_dir(), "Folder should exist at {}", path.display());
    }

    /// Assert that a folder does not exist under the asset root.
    pub fn assert_no_asset_dir(&self, relative: &str) {
        let path = self.assets_path().join(relative);
        assert!(!path.exists(), "Folder should not exist at {}", path.display());
    }

    fn write_toml_list(&self, path: &Path, folders: &[&str]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let entries =
            folders.iter().map(|folder| format!("\"{}\"", folder)).collect::<Vec<_>>().join(", ");
        fs::write(path, format!("folders = [{}]\n", entries)).unwrap();
    }
}
