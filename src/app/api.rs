//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Every function takes the project directory explicitly.

use std::path::Path;

use crate::adapters::FilesystemStorage;
use crate::app::AppContext;
use crate::app::commands::{SettingsController, ensure_default_preset_exists, materialize, presets};
use crate::domain::{AppError, FolderList, MaterializationReport, PresetName};

/// What `init` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    pub preset_created: bool,
    pub settings_created: bool,
}

/// Options for [`create_folders`].
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Materialize under this root instead of the configured one.
    pub root: Option<String>,
    /// Materialize this preset instead of the active list. The active list is left as is.
    pub preset: Option<PresetName>,
}

/// Create an `AppContext` for a project and run the first-run bootstrap.
fn open_context(project: &Path) -> Result<AppContext<FilesystemStorage>, AppError> {
    let storage = FilesystemStorage::new(project.to_path_buf());
    let ctx = AppContext::load(storage)?;
    ensure_default_preset_exists(ctx.storage(), ctx.config())?;
    Ok(ctx)
}

/// Seed the default preset and the active folder list if either is missing.
pub fn init(project: &Path) -> Result<InitOutcome, AppError> {
    let storage = FilesystemStorage::new(project.to_path_buf());
    let ctx = AppContext::load(storage)?;
    let preset_created = ensure_default_preset_exists(ctx.storage(), ctx.config())?;

    let mut controller = SettingsController::open(&ctx)?;
    let settings_created = controller.save_if_changed()?;
    Ok(InitOutcome { preset_created, settings_created })
}

/// Create every folder of the active list (or of a preset) under the root.
///
/// The returned report may contain per-entry failures; see
/// [`MaterializationReport::ensure_success`].
pub fn create_folders(
    project: &Path,
    options: CreateOptions,
) -> Result<MaterializationReport, AppError> {
    let mut ctx = open_context(project)?;
    if let Some(root) = options.root.as_deref() {
        ctx.override_root(root)?;
    }

    if let Some(name) = options.preset.as_ref() {
        let list = presets::load_preset(ctx.storage(), ctx.config(), name)?;
        return materialize(ctx.storage(), &list, &ctx.config().root);
    }

    let mut controller = SettingsController::open(&ctx)?;
    controller.save_if_changed()?;
    controller.create_folders()
}

/// The active folder list, or the default list when nothing is persisted.
pub fn list_folders(project: &Path) -> Result<FolderList, AppError> {
    let ctx = open_context(project)?;
    let controller = SettingsController::open(&ctx)?;
    Ok(controller.folders().clone())
}

/// Append entries to the active list. Returns how many were new.
pub fn add_folders(project: &Path, entries: &[String]) -> Result<usize, AppError> {
    edit_folders(project, |controller| Ok(controller.add(entries)))
}

/// Remove entries from the active list. Returns how many were present.
pub fn remove_folders(project: &Path, entries: &[String]) -> Result<usize, AppError> {
    edit_folders(project, |controller| Ok(controller.remove(entries)))
}

/// Empty the active list.
pub fn clear_folders(project: &Path) -> Result<(), AppError> {
    edit_folders(project, |controller| {
        controller.clear();
        Ok(())
    })
}

/// Names of every available preset.
pub fn list_presets(project: &Path) -> Result<Vec<PresetName>, AppError> {
    let ctx = open_context(project)?;
    presets::list_presets(ctx.storage(), ctx.config())
}

/// Replace the active list with a preset. `None` is a no-op returning `false`.
pub fn load_preset(project: &Path, name: Option<&PresetName>) -> Result<bool, AppError> {
    edit_folders(project, |controller| controller.load_preset(name))
}

/// Store the active list as a preset. Returns the preset's storage path.
pub fn save_preset(project: &Path, name: &PresetName, overwrite: bool) -> Result<String, AppError> {
    let ctx = open_context(project)?;
    let controller = SettingsController::open(&ctx)?;
    presets::save_preset(ctx.storage(), ctx.config(), name, controller.folders(), overwrite)
}

fn edit_folders<T, F>(project: &Path, edit: F) -> Result<T, AppError>
where
    F: FnOnce(&mut SettingsController<'_, FilesystemStorage>) -> Result<T, AppError>,
{
    let ctx = open_context(project)?;
    let mut controller = SettingsController::open(&ctx)?;
    let result = edit(&mut controller)?;
    controller.save_if_changed()?;
    Ok(result)
}

