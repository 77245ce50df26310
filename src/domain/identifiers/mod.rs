pub mod preset_name;
pub mod validation;

pub use preset_name::PresetName;
