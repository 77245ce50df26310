//! In-memory test double for `AssetStorage`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{AssetStorage, DirCreation};

/// In-memory storage. Directories and files are keyed by storage path.
///
/// The empty path is the storage root and always exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    dirs: Arc<Mutex<BTreeSet<String>>>,
    files: Arc<Mutex<BTreeMap<String, String>>>,
    failing: Arc<Mutex<BTreeSet<String>>>,
    create_calls: Arc<Mutex<Vec<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a directory and all of its ancestors.
    pub fn with_dir(self, path: &str) -> Self {
        self.insert_dirs(path);
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    /// Make `create_directory` fail for this exact path.
    pub fn failing_on(self, path: &str) -> Self {
        self.failing.lock().unwrap().insert(path.to_string());
        self
    }

    /// Sorted snapshot of every directory.
    pub fn dirs(&self) -> Vec<String> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }

    /// Every path passed to `create_directory`, in call order.
    pub fn create_calls(&self) -> Vec<String> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn insert_dirs(&self, path: &str) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            dirs.insert(current.clone());
        }
    }

    fn parent_of(path: &str) -> &str {
        path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
    }
}

impl AssetStorage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        path.is_empty()
            || self.dirs.lock().unwrap().contains(path)
            || self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.dirs.lock().unwrap().contains(path)
    }

    fn create_directory(&self, path: &str) -> Result<DirCreation, AppError> {
        self.create_calls.lock().unwrap().push(path.to_string());

        if self.failing.lock().unwrap().contains(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock permission denied",
            )));
        }
        if self.files.lock().unwrap().contains_key(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Mock path occupied by a file",
            )));
        }
        if !self.is_dir(Self::parent_of(path)) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Mock parent directory missing",
            )));
        }

        if self.dirs.lock().unwrap().insert(path.to_string()) {
            Ok(DirCreation::Created)
        } else {
            Ok(DirCreation::AlreadyExisted)
        }
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.insert_dirs(Self::parent_of(path));
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn list_files(&self, dir: &str, extension: &str) -> Result<Vec<String>, AppError> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let suffix = format!(".{}", extension);
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/') && name.ends_with(&suffix))
            .map(str::to_string)
            .collect())
    }
}
