pub mod dirseed_paths;
pub mod error;
pub mod folder_list;
pub mod identifiers;
pub mod materialization;
pub mod project_config;

pub use dirseed_paths::{DEFAULT_ASSET_ROOT, DEFAULT_PRESET, DIRSEED_DIR, PRESET_EXTENSION};
pub use error::AppError;
pub use folder_list::{DEFAULT_FOLDERS, FolderList, segments};
pub use identifiers::PresetName;
pub use materialization::{
    EntryReport, MaterializationReport, SegmentFailure, SegmentOutcome, SegmentRecord,
};
pub use project_config::ProjectConfig;
