//! Project configuration loaded from `.dirseed/config.toml`.

use serde::Deserialize;

use super::dirseed_paths::{self, DEFAULT_ASSET_ROOT};
use super::AppError;

/// Resolved project configuration. Every key is optional on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Materialization root, relative to the project.
    pub root: String,
    /// Location of the active folder list.
    pub settings_path: String,
    /// Directory searched for presets.
    pub presets_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ASSET_ROOT.to_string(),
            settings_path: dirseed_paths::default_settings(),
            presets_dir: dirseed_paths::default_presets_dir(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectConfigDto {
    #[serde(default)]
    folders: FoldersSection,
    #[serde(default)]
    presets: PresetsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FoldersSection {
    root: Option<String>,
    settings: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetsSection {
    dir: Option<String>,
}

impl ProjectConfig {
    /// Parse configuration from TOML content, filling in defaults.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let dto: ProjectConfigDto = toml::from_str(content)?;
        let defaults = ProjectConfig::default();

        let config = ProjectConfig {
            root: dto.folders.root.map(|root| trim_root(&root)).unwrap_or(defaults.root),
            settings_path: dto.folders.settings.unwrap_or(defaults.settings_path),
            presets_dir: dto.presets.dir.unwrap_or(defaults.presets_dir),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the materialization root.
    pub fn with_root(mut self, root: &str) -> Result<Self, AppError> {
        self.root = trim_root(root);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        check_relative("folders.root", &self.root)?;
        check_relative("folders.settings", &self.settings_path)?;
        check_relative("presets.dir", &self.presets_dir)?;
        Ok(())
    }
}

/// Strip surrounding whitespace and trailing separators from a root path.
fn trim_root(root: &str) -> String {
    root.trim().trim_end_matches(['/', '\\']).to_string()
}

fn check_relative(key: &str, value: &str) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} must be a non-empty path.", key)));
    }
    if trimmed.starts_with('/') || trimmed.starts_with('\\') {
        return Err(AppError::validation(format!(
            "{} must be relative to the project: {}",
            key, value
        )));
    }
    if trimmed.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(AppError::validation(format!(
            "{} must stay inside the project: {}",
            key, value
        )));
    }
    Ok(())
}
