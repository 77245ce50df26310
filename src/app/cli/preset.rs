//! Preset subcommands.

use std::io::{ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Select};

use crate::app::api;
use crate::domain::{AppError, PresetName};

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List available presets
    #[clap(visible_alias = "ls")]
    List,
    /// Replace the active folder list with a preset
    Load {
        /// Preset name (prompts when omitted)
        name: Option<String>,
    },
    /// Save the active folder list as a preset
    Save {
        /// Preset name
        name: String,
        /// Overwrite an existing preset
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run_preset(project: PathBuf, command: PresetCommands) -> Result<(), AppError> {
    match command {
        PresetCommands::List => run_list(&project),
        PresetCommands::Load { name } => run_load(&project, name),
        PresetCommands::Save { name, force } => {
            let name = PresetName::new(&name)?;
            let path = api::save_preset(&project, &name, force)?;
            println!("✅ Saved preset '{}' to {}", name, path);
            Ok(())
        }
    }
}

fn run_list(project: &Path) -> Result<(), AppError> {
    let names = api::list_presets(project)?;
    if names.is_empty() {
        println!("ℹ️ No presets found");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn run_load(project: &Path, name: Option<String>) -> Result<(), AppError> {
    let selected = match name {
        Some(value) => Some(PresetName::new(&value)?),
        None => prompt_preset(&api::list_presets(project)?)?,
    };

    if api::load_preset(project, selected.as_ref())? {
        if let Some(name) = selected {
            println!("✅ Loaded preset '{}'", name);
        }
    } else {
        println!("ℹ️ No preset selected");
    }
    Ok(())
}

fn prompt_preset(names: &[PresetName]) -> Result<Option<PresetName>, AppError> {
    if names.is_empty() || !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let items: Vec<&str> = names.iter().map(PresetName::as_str).collect();
    match Select::new().with_prompt("Select preset").items(&items).default(0).interact_opt() {
        Ok(selection) => Ok(selection.map(|index| names[index].clone())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::validation(format!("Failed to select preset: {}", err))),
    }
}
