//! Session-scoped owner of the active folder list.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, FolderList, MaterializationReport, PresetName};
use crate::ports::AssetStorage;

use super::{materialize, presets};

/// Holds the active folder list for one editing session.
///
/// Opened from the configured settings location, mutated through its
/// methods, and persisted with [`SettingsController::save_if_changed`].
pub struct SettingsController<'a, S: AssetStorage> {
    ctx: &'a AppContext<S>,
    folders: FolderList,
    changed: bool,
}

impl<'a, S: AssetStorage> SettingsController<'a, S> {
    /// Load the active folder list, falling back to the default list.
    ///
    /// A defaulted list is marked changed so the next save persists it.
    pub fn open(ctx: &'a AppContext<S>) -> Result<Self, AppError> {
        let path = &ctx.config().settings_path;
        match ctx.storage().load_folder_list(path) {
            Ok(folders) => {
                debug!(path = %path, entries = folders.len(), "Loaded folder list");
                Ok(Self { ctx, folders, changed: false })
            }
            Err(AppError::ConfigNotFound { .. }) => {
                info!(path = %path, "No folder list found, using defaults");
                Ok(Self { ctx, folders: FolderList::create_default(), changed: true })
            }
            Err(err) => Err(err),
        }
    }

    pub fn folders(&self) -> &FolderList {
        &self.folders
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Replace the active list with a preset.
    ///
    /// `None` means no preset was chosen and is a no-op returning `false`.
    pub fn load_preset(&mut self, name: Option<&PresetName>) -> Result<bool, AppError> {
        let Some(name) = name else {
            debug!("No preset selected");
            return Ok(false);
        };

        let preset = presets::load_preset(self.ctx.storage(), self.ctx.config(), name)?;
        self.folders.replace_with(preset);
        self.changed = true;
        info!(preset = %name, "Loaded folder preset");
        Ok(true)
    }

    /// Append entries, skipping ones already listed. Returns the number added.
    pub fn add<I, T>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut added = 0;
        for entry in entries {
            if self.folders.push(entry.as_ref()) {
                added += 1;
            }
        }
        self.changed |= added > 0;
        added
    }

    /// Remove entries. Returns the number of requested entries that were present.
    pub fn remove<I, T>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut removed = 0;
        for entry in entries {
            if self.folders.remove(entry.as_ref()) {
                removed += 1;
            }
        }
        self.changed |= removed > 0;
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        if !self.folders.is_empty() {
            self.folders = FolderList::default();
            self.changed = true;
        }
    }

    /// Persist the active list if anything changed since it was opened or last saved.
    pub fn save_if_changed(&mut self) -> Result<bool, AppError> {
        if !self.changed {
            return Ok(false);
        }
        let path = &self.ctx.config().settings_path;
        self.ctx.storage().save_folder_list(path, &self.folders)?;
        self.changed = false;
        debug!(path = %path, "Saved folder list");
        Ok(true)
    }

    /// Materialize the active list under the configured root.
    pub fn create_folders(&self) -> Result<MaterializationReport, AppError> {
        materialize(self.ctx.storage(), &self.folders, &self.ctx.config().root)
    }
}
