//! Storage port for folder materialization and folder-list resources.
//!
//! All `path` arguments are `/`-separated and relative to the storage root.
//! Implementations must reject paths that escape the root boundary.

use crate::domain::{AppError, FolderList, PRESET_EXTENSION, dirseed_paths};

/// Result of a directory creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirCreation {
    Created,
    /// The directory appeared before this call could create it.
    AlreadyExisted,
}

/// Port for the narrow storage surface the materializer and settings need.
pub trait AssetStorage {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a single directory whose parent already exists.
    ///
    /// Must succeed with `AlreadyExisted` when another caller created the
    /// directory first. A path occupied by a non-directory is an error.
    fn create_directory(&self, path: &str) -> Result<DirCreation, AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// List file names (not paths) in a directory that carry `extension`.
    ///
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &str, extension: &str) -> Result<Vec<String>, AppError>;

    /// Load a folder list. A missing resource is `AppError::ConfigNotFound`.
    fn load_folder_list(&self, path: &str) -> Result<FolderList, AppError> {
        if !self.exists(path) {
            return Err(AppError::ConfigNotFound { path: path.to_string() });
        }
        FolderList::parse_toml(&self.read_file(path)?)
    }

    /// Persist a folder list, replacing any previous content.
    fn save_folder_list(&self, path: &str, list: &FolderList) -> Result<(), AppError> {
        self.write_file(path, &list.to_toml()?)
    }

    /// Paths of every folder-list resource under `dir`, sorted.
    fn list_folder_lists(&self, dir: &str) -> Result<Vec<String>, AppError> {
        let mut names = self.list_files(dir, PRESET_EXTENSION)?;
        names.sort();
        Ok(names.iter().map(|name| dirseed_paths::join(dir, name)).collect())
    }
}
