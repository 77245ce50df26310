//! Path catalog for the `.dirseed/` control directory.
//!
//! All paths are storage-relative strings using `/` as separator.

/// The `.dirseed/` control directory name.
pub const DIRSEED_DIR: &str = ".dirseed";

/// Extension used for folder-list resources (active list and presets).
pub const PRESET_EXTENSION: &str = "toml";

/// Stem of the preset seeded by the first-run bootstrap.
pub const DEFAULT_PRESET: &str = "default";

/// Default materialization root.
pub const DEFAULT_ASSET_ROOT: &str = "Assets";

/// `.dirseed/config.toml`
pub fn project_config() -> String {
    join(DIRSEED_DIR, "config.toml")
}

/// `.dirseed/folders.toml`
pub fn default_settings() -> String {
    join(DIRSEED_DIR, "folders.toml")
}

/// `.dirseed/presets`
pub fn default_presets_dir() -> String {
    join(DIRSEED_DIR, "presets")
}

/// Join two storage-relative paths with `/`, tolerating empty sides.
pub fn join(base: &str, child: &str) -> String {
    let base = base.trim_end_matches('/');
    let child = child.trim_start_matches('/');
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{}/{}", base, child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_single_separator() {
        assert_eq!(join("Assets", "Audio"), "Assets/Audio");
        assert_eq!(join("Assets/", "/Audio"), "Assets/Audio");
    }

    #[test]
    fn join_with_empty_side() {
        assert_eq!(join("", "Audio"), "Audio");
        assert_eq!(join("Assets", ""), "Assets");
    }

    #[test]
    fn control_paths() {
        assert_eq!(project_config(), ".dirseed/config.toml");
        assert_eq!(default_settings(), ".dirseed/folders.toml");
        assert_eq!(default_presets_dir(), ".dirseed/presets");
    }
}
