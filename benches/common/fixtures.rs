// ABOUTME: Benchmark fixtures generating deterministic pose catalogs and practice history
// ABOUTME: Sized batches so engine timings are comparable between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic practice data for benchmarks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use practice_personalization::models::{
    Pose, PoseCategory, PoseHistoryRecord, PoseId, PracticeLog,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small studio library
    Small,
    /// Typical full catalog
    Medium,
    /// Stress test
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 25,
            Self::Medium => 150,
            Self::Large => 1000,
        }
    }
}

const REGION_TAGS: &[&str] = &[
    "hamstrings",
    "hips",
    "back",
    "core",
    "shoulders",
    "legs",
    "chest",
    "wrists",
    "neck",
    "full body",
    "ankles",
    "spine",
];

/// Fixed reference time so generated windows never drift
#[must_use]
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Generate a catalog cycling through every category, difficulty, and region tag
#[must_use]
pub fn generate_catalog(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|index| {
            let category = PoseCategory::ALL[index % PoseCategory::ALL.len()];
            let difficulty = (index % 10) as u8 + 1;
            let first = REGION_TAGS[index % REGION_TAGS.len()];
            let second = REGION_TAGS[(index * 7 + 3) % REGION_TAGS.len()];
            Pose::new(
                u32::try_from(index + 1).unwrap_or(u32::MAX),
                format!("Pose {index}"),
                category,
                difficulty,
            )
            .with_target_regions([first, second])
        })
        .collect()
}

/// One history record per catalog pose
#[must_use]
pub fn generate_history(catalog: &[Pose]) -> Vec<PoseHistoryRecord> {
    let base = reference_time();
    catalog
        .iter()
        .enumerate()
        .map(|(index, pose)| PoseHistoryRecord {
            pose_id: pose.id,
            pose_name: pose.english_name.clone(),
            target_regions: pose.target_regions.clone(),
            practice_count: (index % 17) as u32 + 1,
            total_duration_minutes: ((index % 13) + 2) as f64,
            last_practiced: base - Duration::days((index % 30) as i64),
        })
        .collect()
}

/// A week of sessions, each naming a handful of catalog poses
#[must_use]
pub fn generate_logs(catalog: &[Pose], sessions: usize) -> Vec<PracticeLog> {
    let base = reference_time();
    (0..sessions)
        .map(|index| {
            let poses: Vec<String> = (0..8)
                .filter_map(|offset| catalog.get((index * 5 + offset * 3) % catalog.len().max(1)))
                .map(|pose| pose.english_name.clone())
                .collect();
            PracticeLog::new(
                base - Duration::hours((index * 20) as i64),
                45.0 + (index % 4) as f64 * 10.0,
                poses,
            )
        })
        .collect()
}

/// Session prefix of `length` poses drawn from the catalog
#[must_use]
pub fn session_poses(catalog: &[Pose], length: usize) -> Vec<PoseId> {
    catalog.iter().step_by(3).take(length).map(|pose| pose.id).collect()
}
