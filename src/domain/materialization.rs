//! Outcome records produced by folder materialization.

use serde::Serialize;

use super::AppError;

/// What happened to a single accumulated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOutcome {
    Created,
    AlreadyPresent,
}

/// One accumulated path visited while walking an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRecord {
    /// Storage-relative path, including the materialization root.
    pub path: String,
    pub outcome: SegmentOutcome,
}

/// A segment that could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentFailure {
    /// Folder-list entry being processed.
    pub entry: String,
    /// Segment whose creation failed.
    pub segment: String,
    /// Accumulated path at the time of failure.
    pub path: String,
    pub message: String,
}

/// Per-entry result. A failure aborts the remaining segments of this entry only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub entry: String,
    pub segments: Vec<SegmentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SegmentFailure>,
}

impl EntryReport {
    pub fn new(entry: &str) -> Self {
        Self { entry: entry.to_string(), segments: Vec::new(), failure: None }
    }
}

/// Everything a materialization run did, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializationReport {
    pub root: String,
    pub entries: Vec<EntryReport>,
}

impl MaterializationReport {
    pub fn new(root: &str) -> Self {
        Self { root: root.to_string(), entries: Vec::new() }
    }

    /// Paths newly created during this run, without duplicates.
    pub fn created(&self) -> Vec<&str> {
        self.paths_with(SegmentOutcome::Created)
    }

    /// Paths that were already present, without duplicates.
    pub fn already_present(&self) -> Vec<&str> {
        self.paths_with(SegmentOutcome::AlreadyPresent)
    }

    pub fn created_count(&self) -> usize {
        self.created().len()
    }

    pub fn failures(&self) -> Vec<&SegmentFailure> {
        self.entries.iter().filter_map(|entry| entry.failure.as_ref()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.entries.iter().all(|entry| entry.failure.is_none())
    }

    /// Turn recorded failures into `AppError::DirectoryCreation`.
    pub fn ensure_success(self) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }
        let failures = self.failures().into_iter().cloned().collect();
        Err(AppError::DirectoryCreation { failures })
    }

    fn paths_with(&self, outcome: SegmentOutcome) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for record in self.entries.iter().flat_map(|entry| &entry.segments) {
            if record.outcome == outcome && !paths.contains(&record.path.as_str()) {
                paths.push(&record.path);
            }
        }
        paths
    }
}
