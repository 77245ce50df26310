//! Preset discovery, loading and saving.

use tracing::info;

use crate::domain::{AppError, FolderList, PresetName, ProjectConfig, dirseed_paths};
use crate::ports::AssetStorage;

/// Storage path of a preset.
pub fn preset_path(config: &ProjectConfig, name: &PresetName) -> String {
    dirseed_paths::join(&config.presets_dir, &name.file_name())
}

/// Names of every preset in the presets directory, sorted.
///
/// Files whose stem is not a valid preset name are ignored.
pub fn list_presets(
    storage: &impl AssetStorage,
    config: &ProjectConfig,
) -> Result<Vec<PresetName>, AppError> {
    let mut names: Vec<PresetName> = storage
        .list_folder_lists(&config.presets_dir)?
        .iter()
        .filter_map(|path| {
            let file_name = path.rsplit('/').next()?;
            let stem = file_name.strip_suffix(&format!(".{}", crate::domain::PRESET_EXTENSION))?;
            PresetName::new(stem).ok()
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Load a preset by name.
pub fn load_preset(
    storage: &impl AssetStorage,
    config: &ProjectConfig,
    name: &PresetName,
) -> Result<FolderList, AppError> {
    match storage.load_folder_list(&preset_path(config, name)) {
        Err(AppError::ConfigNotFound { .. }) => Err(AppError::PresetNotFound(name.to_string())),
        other => other,
    }
}

/// Store `list` as a named preset.
pub fn save_preset(
    storage: &impl AssetStorage,
    config: &ProjectConfig,
    name: &PresetName,
    list: &FolderList,
    overwrite: bool,
) -> Result<String, AppError> {
    let path = preset_path(config, name);
    if storage.exists(&path) && !overwrite {
        return Err(AppError::PresetExists(name.to_string()));
    }
    storage.save_folder_list(&path, list)?;
    info!(preset = %name, path = %path, "Saved folder preset");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;

    fn name(value: &str) -> PresetName {
        PresetName::new(value).unwrap()
    }

    #[test]
    fn list_presets_sorted_and_filtered() {
        let storage = MemoryStorage::new()
            .with_file(".dirseed/presets/mobile.toml", "")
            .with_file(".dirseed/presets/default.toml", "")
            .with_file(".dirseed/presets/bad name.toml", "")
            .with_file(".dirseed/presets/readme.md", "");

        let names = list_presets(&storage, &ProjectConfig::default()).unwrap();
        assert_eq!(names, vec![name("default"), name("mobile")]);
    }

    #[test]
    fn list_presets_without_directory_is_empty() {
        let names = list_presets(&MemoryStorage::new(), &ProjectConfig::default()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn load_missing_preset_is_not_found() {
        let result = load_preset(&MemoryStorage::new(), &ProjectConfig::default(), &name("x"));
        assert!(matches!(result, Err(AppError::PresetNotFound(n)) if n == "x"));
    }

    #[test]
    fn save_then_load() {
        let storage = MemoryStorage::new();
        let config = ProjectConfig::default();
        let list = FolderList::new(vec!["Levels".into()]);

        let path = save_preset(&storage, &config, &name("levels"), &list, false).unwrap();
        assert_eq!(path, ".dirseed/presets/levels.toml");
        assert_eq!(load_preset(&storage, &config, &name("levels")).unwrap(), list);
    }

    #[test]
    fn save_refuses_overwrite_without_flag() {
        let storage = MemoryStorage::new().with_file(".dirseed/presets/levels.toml", "");
        let config = ProjectConfig::default();
        let list = FolderList::new(vec!["Levels".into()]);

        let result = save_preset(&storage, &config, &name("levels"), &list, false);
        assert!(matches!(result, Err(AppError::PresetExists(_))));

        save_preset(&storage, &config, &name("levels"), &list, true).unwrap();
        assert_eq!(load_preset(&storage, &config, &name("levels")).unwrap(), list);
    }
}
