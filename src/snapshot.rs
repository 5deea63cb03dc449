// ABOUTME: JSON practice snapshot: catalog, per-pose history, and session logs for one practitioner
// ABOUTME: Read-only data source with the window filtering the engines expect callers to apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Practice Snapshot
//!
//! A finite, immutable snapshot handed to the engines:
//!
//! ```json
//! {
//!   "catalog": [{ "id": 1, "english_name": "Mountain", "category": "STANDING", "difficulty": 1 }],
//!   "history": [],
//!   "logs": []
//! }
//! ```
//!
//! All three sections default to empty.

use chrono::{DateTime, Duration, Utc};
use practice_core::errors::{AppError, AppResult};
use practice_core::models::{Pose, PoseHistoryRecord, PoseId, PracticeLog};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::logging::EngineLogger;

/// Catalog and history for one practitioner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeSnapshot {
    /// Pose catalog
    #[serde(default)]
    pub catalog: Vec<Pose>,
    /// Aggregated per-pose practice history
    #[serde(default)]
    pub history: Vec<PoseHistoryRecord>,
    /// Individual practice sessions
    #[serde(default)]
    pub logs: Vec<PracticeLog>,
}

impl PracticeSnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON and `InvalidInput` when the
    /// catalog repeats a pose id
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`]
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read snapshot {}", path.display())).with_source(e)
        })?;
        let snapshot = Self::from_json_str(&contents)?;
        EngineLogger::log_snapshot_loaded(
            &path.display().to_string(),
            snapshot.catalog.len(),
            snapshot.history.len(),
            snapshot.logs.len(),
        );
        Ok(snapshot)
    }

    fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.catalog.len());
        for pose in &self.catalog {
            if !seen.insert(pose.id) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate pose id {} in catalog",
                    pose.id
                ))
                .with_details(json!({ "pose_id": pose.id })));
            }
        }
        Ok(())
    }

    /// Find a catalog pose by id or by name, ignoring case
    #[must_use]
    pub fn pose_by_reference(&self, reference: &str) -> Option<&Pose> {
        self.catalog
            .iter()
            .find(|pose| pose.matches_reference(reference))
    }

    /// Resolve a list of references to pose ids
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` naming the first reference with no catalog match
    pub fn resolve_ids<S: AsRef<str>>(&self, references: &[S]) -> AppResult<Vec<PoseId>> {
        references
            .iter()
            .map(|reference| {
                let reference = reference.as_ref();
                self.pose_by_reference(reference)
                    .map(|pose| pose.id)
                    .ok_or_else(|| AppError::not_found(format!("Pose '{reference}'")))
            })
            .collect()
    }

    /// History records practiced within `window_days` before `as_of`
    #[must_use]
    pub fn history_within(&self, window_days: u32, as_of: DateTime<Utc>) -> Vec<PoseHistoryRecord> {
        let records: Vec<PoseHistoryRecord> = self
            .history
            .iter()
            .filter(|record| within_window(record.last_practiced, window_days, as_of))
            .cloned()
            .collect();
        debug!(
            window_days,
            kept = records.len(),
            total = self.history.len(),
            "Filtered history window"
        );
        records
    }

    /// Logs of sessions within `days` before `as_of`
    #[must_use]
    pub fn logs_within(&self, days: u32, as_of: DateTime<Utc>) -> Vec<PracticeLog> {
        let logs: Vec<PracticeLog> = self
            .logs
            .iter()
            .filter(|log| within_window(log.practiced_at, days, as_of))
            .cloned()
            .collect();
        debug!(
            days,
            kept = logs.len(),
            total = self.logs.len(),
            "Filtered log window"
        );
        logs
    }
}

/// Whether `at` falls in the `days` before `as_of`, inclusive at both ends
///
/// A window reaching past the earliest representable time keeps everything
/// up to `as_of`.
fn within_window(at: DateTime<Utc>, days: u32, as_of: DateTime<Utc>) -> bool {
    let cutoff = as_of.checked_sub_signed(Duration::days(i64::from(days)));
    at <= as_of && cutoff.is_none_or(|cutoff| at >= cutoff)
}
