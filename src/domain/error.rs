use std::io;

use thiserror::Error;

use super::SegmentFailure;

/// Library-wide error type for dirseed operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No persisted folder list at the expected location.
    #[error("Folder list not found: {path}")]
    ConfigNotFound { path: String },

    /// One or more folders could not be created.
    #[error("Failed to create {} folder(s): {}", .failures.len(), describe_failures(.failures))]
    DirectoryCreation { failures: Vec<SegmentFailure> },

    /// Preset does not exist in the presets directory.
    #[error("Preset '{0}' not found")]
    PresetNotFound(String),

    /// Preset already exists and overwrite was not requested.
    #[error("Preset '{0}' already exists. Use --force to overwrite.")]
    PresetExists(String),

    /// Preset name is invalid.
    #[error(
        "Invalid preset name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidPresetName(String),

    /// Path escapes the storage root.
    #[error("Path escapes the project root: {0}")]
    PathTraversal(String),

    /// Configuration value is present but unusable.
    #[error("{0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_failures(failures: &[SegmentFailure]) -> String {
    failures
        .iter()
        .map(|failure| format!("{} ({})", failure.path, failure.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Classify the error as the closest `io::ErrorKind`.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound { .. } | AppError::PresetNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::PresetExists(_) => io::ErrorKind::AlreadyExists,
            AppError::InvalidPresetName(_)
            | AppError::PathTraversal(_)
            | AppError::Validation(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::TomlSerialize(_) | AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::DirectoryCreation { .. } => io::ErrorKind::Other,
        }
    }
}
