//! dirseed: keep a project folder list and materialize it as a directory skeleton.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CreateOptions, InitOutcome, add_folders, clear_folders, create_folders, init, list_folders,
    list_presets, load_preset, remove_folders, save_preset,
};
pub use app::commands::{SettingsController, ensure_default_preset_exists, materialize};
pub use domain::{
    AppError, DEFAULT_FOLDERS, EntryReport, FolderList, MaterializationReport, PresetName,
    ProjectConfig, SegmentFailure, SegmentOutcome, SegmentRecord,
};
pub use ports::{AssetStorage, DirCreation};
