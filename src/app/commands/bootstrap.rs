//! First-run bootstrap: seed the default preset.

use tracing::info;

use crate::domain::{AppError, DEFAULT_PRESET, FolderList, PresetName, ProjectConfig};
use crate::ports::AssetStorage;

use super::presets::preset_path;

/// Write the default preset if it does not exist yet.
///
/// Returns whether the preset was created. An existing preset is never
/// touched, even if its content differs from the built-in default.
pub fn ensure_default_preset_exists(
    storage: &impl AssetStorage,
    config: &ProjectConfig,
) -> Result<bool, AppError> {
    let name = PresetName::new(DEFAULT_PRESET)?;
    let path = preset_path(config, &name);
    if storage.exists(&path) {
        return Ok(false);
    }

    storage.save_folder_list(&path, &FolderList::create_default())?;
    info!(path = %path, "Default folder preset created");
    Ok(true)
}
