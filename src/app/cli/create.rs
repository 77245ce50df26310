//! Create command implementation.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::app::api::{self, CreateOptions};
use crate::domain::{AppError, MaterializationReport, PresetName, SegmentOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run_create(
    project: PathBuf,
    root: Option<String>,
    preset: Option<String>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let preset = preset.as_deref().map(PresetName::new).transpose()?;
    let report = api::create_folders(&project, CreateOptions { root, preset })?;

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    report.ensure_success().map(|_| ())
}

fn print_text(report: &MaterializationReport) {
    for entry in &report.entries {
        for record in &entry.segments {
            match record.outcome {
                SegmentOutcome::Created => println!("  + {}", record.path),
                SegmentOutcome::AlreadyPresent => println!("  = {}", record.path),
            }
        }
        if let Some(failure) = &entry.failure {
            println!("  ! {} ({})", failure.path, failure.message);
        }
    }

    let created = report.created_count();
    let present = report.already_present().len();
    let failed = report.failures().len();
    if failed > 0 {
        println!(
            "⚠️ {} folder(s) could not be created under {}/ ({} created)",
            failed, report.root, created
        );
    } else if created == 0 {
        println!("✅ All folders already exist under {}/ ({} checked)", report.root, present);
    } else {
        println!("✅ Created {} folder(s) under {}/", created, report.root);
    }
}
