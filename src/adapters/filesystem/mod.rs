//! Local filesystem adapter for `AssetStorage`.
//!
//! `FilesystemStorage` owns the project root and enforces that every
//! requested path stays beneath it.

mod asset_storage;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed storage rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    root: PathBuf,
}

impl FilesystemStorage {
    /// Create a storage rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a storage rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    /// Resolve a storage path and check it stays within the root.
    fn checked_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.resolve_path(path);
        if !normalize_path(&full_path).starts_with(normalize_path(&self.root)) {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        Ok(full_path)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    pub fn test_storage() -> (TempDir, FilesystemStorage) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let storage = FilesystemStorage::new(dir.path().to_path_buf());
        (dir, storage)
    }

    #[test]
    fn checked_path_prevents_traversal_with_nonexistent_components() {
        let (_dir, storage) = test_storage();

        assert!(storage.checked_path("../result").is_err(), "Should detect simple traversal");
        assert!(
            storage.checked_path("nonexistent/../../outside").is_err(),
            "Should detect traversal even if 'nonexistent' components don't exist"
        );
        assert!(storage.checked_path("Assets/../Assets/Audio").is_ok());
    }

    #[test]
    fn leading_slash_stays_under_root() {
        let (dir, storage) = test_storage();
        let resolved = storage.checked_path("/Assets").unwrap();
        assert_eq!(resolved, dir.path().join("Assets"));
    }

    #[test]
    fn normalize_path_resolves_dots() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    }
}
