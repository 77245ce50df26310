//! `AssetStorage` implementation for `FilesystemStorage`.

use std::fs;
use std::io::ErrorKind;

use crate::domain::AppError;
use crate::ports::{AssetStorage, DirCreation};

use super::FilesystemStorage;

impl AssetStorage for FilesystemStorage {
    fn exists(&self, path: &str) -> bool {
        self.checked_path(path).map(|full_path| full_path.exists()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.checked_path(path).map(|full_path| full_path.is_dir()).unwrap_or(false)
    }

    fn create_directory(&self, path: &str) -> Result<DirCreation, AppError> {
        let full_path = self.checked_path(path)?;
        match fs::create_dir(&full_path) {
            Ok(()) => Ok(DirCreation::Created),
            Err(err) if err.kind() == ErrorKind::AlreadyExists && full_path.is_dir() => {
                Ok(DirCreation::AlreadyExisted)
            }
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn list_files(&self, dir: &str, extension: &str) -> Result<Vec<String>, AppError> {
        let full_path = self.checked_path(dir)?;
        if !full_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(full_path)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }
}
