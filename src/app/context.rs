use crate::domain::{AppError, ProjectConfig, dirseed_paths};
use crate::ports::AssetStorage;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: AssetStorage> {
    storage: S,
    config: ProjectConfig,
}

impl<S: AssetStorage> AppContext<S> {
    /// Create a new application context.
    pub fn new(storage: S, config: ProjectConfig) -> Self {
        Self { storage, config }
    }

    /// Create a context whose configuration comes from `.dirseed/config.toml`.
    ///
    /// A missing configuration file means all defaults.
    pub fn load(storage: S) -> Result<Self, AppError> {
        let path = dirseed_paths::project_config();
        let config = if storage.exists(&path) {
            ProjectConfig::parse_toml(&storage.read_file(&path)?)?
        } else {
            ProjectConfig::default()
        };
        Ok(Self::new(storage, config))
    }

    /// Get a reference to the storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a reference to the project configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Replace the materialization root for this context.
    pub fn override_root(&mut self, root: &str) -> Result<(), AppError> {
        self.config = self.config.clone().with_root(root)?;
        Ok(())
    }
}
