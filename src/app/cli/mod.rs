//! CLI Adapter.

mod create;
mod preset;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{api, tracing_setup};
use crate::domain::{AppError, FolderList};

#[derive(Parser)]
#[command(name = "dirseed")]
#[command(version)]
#[command(
    about = "Keep a project folder list and create it as a directory skeleton",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the default preset and the active folder list
    #[clap(visible_alias = "i")]
    Init,
    /// Create every listed folder under the asset root
    #[clap(visible_alias = "c")]
    Create {
        /// Asset root relative to the project (overrides .dirseed/config.toml)
        #[arg(short, long)]
        root: Option<String>,
        /// Create the folders of this preset instead of the active list
        #[arg(short, long)]
        preset: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = create::OutputFormat::Text)]
        format: create::OutputFormat,
    },
    /// Print the active folder list
    #[clap(visible_alias = "ls")]
    List {
        /// Print the built-in default list instead
        #[arg(long)]
        defaults: bool,
    },
    /// Add folder paths to the active list
    Add {
        /// Relative folder paths, using '/' between segments
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Remove folder paths from the active list
    #[clap(visible_alias = "rm")]
    Remove {
        /// Entries to remove, exactly as listed
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Remove every entry from the active list
    Clear,
    /// Manage folder presets
    #[clap(visible_alias = "p")]
    Preset {
        #[command(subcommand)]
        command: preset::PresetCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    tracing_setup::init_global(tracing_setup::level_for(cli.quiet, cli.verbose));

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), AppError> {
    let project = std::env::current_dir()?;

    match command {
        Commands::Init => run_init(project),
        Commands::Create { root, preset, format } => {
            create::run_create(project, root, preset, format)
        }
        Commands::List { defaults } => run_list(project, defaults),
        Commands::Add { paths } => run_add(project, paths),
        Commands::Remove { paths } => run_remove(project, paths),
        Commands::Clear => run_clear(project),
        Commands::Preset { command } => preset::run_preset(project, command),
    }
}

fn run_init(project: PathBuf) -> Result<(), AppError> {
    let outcome = api::init(&project)?;

    if outcome.preset_created {
        println!("✅ Created default preset");
    }
    if outcome.settings_created {
        println!("✅ Created folder list with default folders");
    }
    if !outcome.preset_created && !outcome.settings_created {
        println!("ℹ️ Already initialized");
    }
    Ok(())
}

fn run_list(project: PathBuf, defaults: bool) -> Result<(), AppError> {
    let list = if defaults { FolderList::create_default() } else { api::list_folders(&project)? };

    if list.is_empty() {
        println!("ℹ️ Folder list is empty");
    }
    for entry in list.iter() {
        println!("{}", entry);
    }
    Ok(())
}

fn run_add(project: PathBuf, paths: Vec<String>) -> Result<(), AppError> {
    let added = api::add_folders(&project, &paths)?;
    println!("✅ Added {} folder(s)", added);
    let skipped = paths.len() - added;
    if skipped > 0 {
        println!("ℹ️ {} already listed", skipped);
    }
    Ok(())
}

fn run_remove(project: PathBuf, paths: Vec<String>) -> Result<(), AppError> {
    let removed = api::remove_folders(&project, &paths)?;
    println!("✅ Removed {} folder(s)", removed);
    let missing = paths.len() - removed;
    if missing > 0 {
        println!("ℹ️ {} not listed", missing);
    }
    Ok(())
}

fn run_clear(project: PathBuf) -> Result<(), AppError> {
    api::clear_folders(&project)?;
    println!("✅ Cleared folder list");
    Ok(())
}
