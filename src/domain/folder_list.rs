use serde::{Deserialize, Serialize};

use super::AppError;

/// Conventional project folders seeded when nothing is persisted yet.
pub const DEFAULT_FOLDERS: [&str; 14] = [
    "Audio",
    "Audio/BGM",
    "Audio/SE",
    "Sprites",
    "Prefabs",
    "Scenes",
    "Animations",
    "Materials",
    "Physics Materials",
    "Fonts",
    "Textures",
    "Resources",
    "Editor",
    "Plugins",
];

/// Ordered list of relative folder paths to materialize.
///
/// Entries use `/` between segments. Order is the creation order, but the
/// resulting tree does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderList {
    #[serde(default)]
    pub folders: Vec<String>,
}

impl FolderList {
    pub fn new(folders: Vec<String>) -> Self {
        Self { folders }
    }

    /// The fixed default folder list.
    pub fn create_default() -> Self {
        Self::new(DEFAULT_FOLDERS.iter().map(|folder| folder.to_string()).collect())
    }

    /// Replace every entry with the entries of `other`. No merging.
    pub fn replace_with(&mut self, other: FolderList) {
        self.folders = other.folders;
    }

    /// Append an entry unless an identical one is already listed.
    ///
    /// Returns whether the list changed.
    pub fn push(&mut self, entry: &str) -> bool {
        if self.folders.iter().any(|existing| existing == entry) {
            return false;
        }
        self.folders.push(entry.to_string());
        true
    }

    /// Remove every entry equal to `entry`. Returns whether the list changed.
    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.folders.len();
        self.folders.retain(|existing| existing != entry);
        self.folders.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(String::as_str)
    }

    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        Ok(toml::to_string(self)?)
    }
}

/// Split a folder entry into its non-empty segments.
///
/// Leading, trailing and doubled slashes produce empty segments, which are
/// skipped.
pub fn segments(entry: &str) -> impl Iterator<Item = &str> {
    entry.split('/').filter(|segment| !segment.is_empty())
}
