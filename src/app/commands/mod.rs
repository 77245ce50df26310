pub mod bootstrap;
pub mod materialize;
pub mod presets;
pub mod settings;

pub use bootstrap::ensure_default_preset_exists;
pub use materialize::materialize;
pub use settings::SettingsController;
