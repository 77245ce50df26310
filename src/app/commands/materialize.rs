//! Idempotent hierarchical folder materialization.

use tracing::{debug, info, warn};

use crate::domain::{
    AppError, EntryReport, FolderList, MaterializationReport, SegmentFailure, SegmentOutcome,
    SegmentRecord, dirseed_paths, segments,
};
use crate::ports::{AssetStorage, DirCreation};

/// Ensure every entry of `list`, and every ancestor along it, exists under `root`.
///
/// Only missing directories are created; nothing is removed, renamed or
/// overwritten, so running the same list twice leaves the tree unchanged.
/// A segment that cannot be created aborts the rest of its entry and is
/// recorded in the report; later entries are still processed.
///
/// Returns `Err` only when the root itself cannot be ensured; the error names
/// the root segment that failed.
pub fn materialize(
    storage: &impl AssetStorage,
    list: &FolderList,
    root: &str,
) -> Result<MaterializationReport, AppError> {
    ensure_root(storage, root)?;

    let mut report = MaterializationReport::new(root);
    for entry in list.iter() {
        report.entries.push(materialize_entry(storage, entry, root));
    }

    info!(
        root,
        created = report.created_count(),
        failed = report.failures().len(),
        "Folder materialization finished"
    );
    Ok(report)
}

fn ensure_root(storage: &impl AssetStorage, root: &str) -> Result<(), AppError> {
    let mut current = String::new();
    for segment in segments(root) {
        current = dirseed_paths::join(&current, segment);
        if storage.is_dir(&current) {
            continue;
        }
        match storage.create_directory(&current) {
            Ok(DirCreation::Created) => info!(path = %current, "Created root folder"),
            Ok(DirCreation::AlreadyExisted) => {}
            Err(err) => {
                warn!(path = %current, error = %err, "Failed to create root folder");
                return Err(AppError::DirectoryCreation {
                    failures: vec![SegmentFailure {
                        entry: root.to_string(),
                        segment: segment.to_string(),
                        path: current,
                        message: err.to_string(),
                    }],
                });
            }
        }
    }
    Ok(())
}

fn materialize_entry(storage: &impl AssetStorage, entry: &str, root: &str) -> EntryReport {
    let mut report = EntryReport::new(entry);
    let mut current = root.to_string();

    for segment in segments(entry) {
        current = dirseed_paths::join(&current, segment);

        let outcome = if storage.is_dir(&current) {
            SegmentOutcome::AlreadyPresent
        } else {
            match storage.create_directory(&current) {
                Ok(DirCreation::Created) => SegmentOutcome::Created,
                Ok(DirCreation::AlreadyExisted) => SegmentOutcome::AlreadyPresent,
                Err(err) => {
                    warn!(path = %current, error = %err, "Failed to create folder");
                    report.failure = Some(SegmentFailure {
                        entry: entry.to_string(),
                        segment: segment.to_string(),
                        path: current,
                        message: err.to_string(),
                    });
                    return report;
                }
            }
        };

        match outcome {
            SegmentOutcome::Created => info!(path = %current, "Created folder"),
            SegmentOutcome::AlreadyPresent => debug!(path = %current, "Folder already exists"),
        }
        report.segments.push(SegmentRecord { path: current.clone(), outcome });
    }

    report
}
