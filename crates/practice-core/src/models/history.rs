// ABOUTME: Practice history records consumed by the body map and recovery engines
// ABOUTME: Per-pose aggregated history and per-session practice logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::pose::PoseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated practice history of one pose, joined with its catalog regions
///
/// The caller is responsible for restricting records to the analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseHistoryRecord {
    /// Pose this record aggregates
    pub pose_id: PoseId,
    /// Display name of the pose
    pub pose_name: String,
    /// Free-text target regions copied from the catalog
    #[serde(default)]
    pub target_regions: Vec<String>,
    /// Number of times practiced within the window
    pub practice_count: u32,
    /// Total minutes spent in the pose within the window
    #[serde(default)]
    pub total_duration_minutes: f64,
    /// Most recent practice
    pub last_practiced: DateTime<Utc>,
}

/// One practice session as logged by the practitioner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeLog {
    /// When the session took place
    pub practiced_at: DateTime<Utc>,
    /// Session length in minutes
    pub duration_minutes: f64,
    /// Pose names or catalog ids practiced in this session
    #[serde(default)]
    pub poses: Vec<String>,
}

impl PracticeLog {
    /// Create a log entry
    #[must_use]
    pub fn new<I, S>(practiced_at: DateTime<Utc>, duration_minutes: f64, poses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            practiced_at,
            duration_minutes,
            poses: poses.into_iter().map(Into::into).collect(),
        }
    }

    /// Duration with negative and non-finite values clamped to zero
    #[must_use]
    pub fn clamped_duration(&self) -> f64 {
        if self.duration_minutes.is_finite() {
            self.duration_minutes.max(0.0)
        } else {
            0.0
        }
    }
}
