// ABOUTME: Recovery analyzer scoring a week of practice logs for load and rest needs
// ABOUTME: Produces a practice analysis and a tiered rest or recovery recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recovery Analyzer
//!
//! Turns recent practice logs into a [`PracticeAnalysis`] and then into a
//! [`RecoveryRecommendation`].
//!
//! Each logged pose reference is resolved against the catalog by id or by
//! case-insensitive name; unresolved references are skipped. A resolved pose
//! adds its category intensity weight to the session load and credits each
//! of its recovery regions once (full-count fan-out).
//!
//! ## Intensity score
//!
//! ```text
//! intensity = (load / (sessions * 5)) * 20
//!           + (minutes / 7) * 0.5
//!           + (sessions / 7) * 30          capped at 100
//! ```
//!
//! ## Recommendation tiers
//!
//! `rest` when rest is needed or the score exceeds 80, then `restorative`
//! above 60, `gentle` above 40, otherwise `active_recovery`.

use crate::category_affinity::intensity_weight;
use crate::config::{PersonalizationConfig, RecoveryConfig};
use crate::recovery_regions::{RecoveryRegion, GENERAL_RESTORATIVE_POSES};
use chrono::{DateTime, Utc};
use practice_core::constants::intensity::{
    FREQUENCY_FACTOR, LOAD_FACTOR, LOAD_NORMALIZER, MAX_INTENSITY_SCORE, VOLUME_FACTOR,
    WINDOW_DAYS,
};
use practice_core::constants::limits::{MAX_RECOVERY_REGIONS, MAX_SUGGESTED_POSES};
use practice_core::constants::scoring::PERCENT_MAX;
use practice_core::constants::time_periods::NO_PRACTICE_SENTINEL_DAYS;
use practice_core::models::{Pose, PoseCategory, PracticeLog};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Activity of one recovery region across the analyzed logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionActivity {
    /// Region in the recovery vocabulary
    pub region: RecoveryRegion,
    /// Resolved poses that worked this region
    pub count: u32,
    /// Count relative to the most active region (0-100)
    pub intensity: u32,
}

/// Summary of recent practice load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeAnalysis {
    /// Logged sessions
    pub total_sessions: u32,
    /// Sum of session durations in minutes
    pub total_minutes: f64,
    /// Mean session duration in minutes (0 without sessions)
    pub average_session_length: f64,
    /// Whole days between the latest session and the analysis time, 999 without sessions
    pub days_since_last_practice: i64,
    /// Region activity, most active first
    pub region_activity: Vec<RegionActivity>,
    /// Resolved poses per category
    pub category_distribution: BTreeMap<PoseCategory, u32>,
    /// Sum of category intensity weights over resolved poses
    pub total_load: u32,
    /// Weekly intensity heuristic (0-100)
    pub intensity_score: u32,
    /// Whether a rest day is required
    pub needs_rest: bool,
    /// Conditions that argued for rest
    pub rest_reasons: Vec<String>,
}

/// Kind of recovery the practitioner should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryType {
    /// Full rest day
    Rest,
    /// Light, easy flow
    Gentle,
    /// Supported, long-hold restorative practice
    Restorative,
    /// Ordinary practice at moderate effort
    ActiveRecovery,
}

impl RecoveryType {
    /// Identifier used in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Gentle => "gentle",
            Self::Restorative => "restorative",
            Self::ActiveRecovery => "active_recovery",
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Rest => "Full Rest Day",
            Self::Gentle => "Gentle Flow",
            Self::Restorative => "Restorative Practice",
            Self::ActiveRecovery => "Active Recovery",
        }
    }

    const fn description(&self) -> &'static str {
        match self {
            Self::Rest => {
                "Your body has carried a heavy load this week. Take the day off, or keep to a few minutes of easy breathing and supported poses."
            }
            Self::Restorative => {
                "Practice has been demanding lately. Choose supported poses with long holds and let the nervous system settle."
            }
            Self::Gentle => {
                "A moderate week. Move through an easy flow with low-effort poses and skip the peak work."
            }
            Self::ActiveRecovery => {
                "Your load is light. A regular practice at comfortable effort keeps you moving without adding strain."
            }
        }
    }
}

impl fmt::Display for RecoveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rest or recovery guidance derived from a [`PracticeAnalysis`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRecommendation {
    /// Recommendation tier
    #[serde(rename = "type")]
    pub recovery_type: RecoveryType,
    /// Display title
    pub title: String,
    /// Short explanation for the practitioner
    pub description: String,
    /// Up to eight pose names, counter-poses for overworked regions first
    pub suggested_poses: Vec<String>,
    /// Suggested session length in minutes
    pub suggested_duration_minutes: u32,
    /// Lightly worked regions worth attention
    pub focus_areas: Vec<RecoveryRegion>,
    /// Heavily worked regions to give a break
    pub avoid_areas: Vec<RecoveryRegion>,
}

/// Analyzes practice load and recommends recovery
pub struct RecoveryAnalyzer {
    config: RecoveryConfig,
}

impl Default for RecoveryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryAnalyzer {
    /// Create an analyzer with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PersonalizationConfig::global().recovery.clone())
    }

    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn with_config(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Analyze logs already filtered to the recovery window
    #[must_use]
    pub fn analyze(
        &self,
        logs: &[PracticeLog],
        catalog: &[Pose],
        as_of: DateTime<Utc>,
    ) -> PracticeAnalysis {
        let mut total_load: u32 = 0;
        let mut total_minutes = 0.0;
        let mut unresolved = 0_usize;
        let mut category_distribution: BTreeMap<PoseCategory, u32> = BTreeMap::new();
        let mut region_counts: HashMap<RecoveryRegion, u32> = HashMap::new();

        for log in logs {
            total_minutes += log.clamped_duration();
            for reference in &log.poses {
                let Some(pose) = resolve_pose(catalog, reference) else {
                    unresolved += 1;
                    continue;
                };
                total_load = total_load.saturating_add(intensity_weight(pose.category));
                *category_distribution.entry(pose.category).or_insert(0) += 1;
                for region in recovery_regions(pose) {
                    *region_counts.entry(region).or_insert(0) += 1;
                }
            }
        }

        let total_sessions = u32::try_from(logs.len()).unwrap_or(u32::MAX);
        let average_session_length = if total_sessions == 0 {
            0.0
        } else {
            total_minutes / f64::from(total_sessions)
        };
        let days_since_last_practice = logs
            .iter()
            .map(|log| log.practiced_at)
            .max()
            .map_or(NO_PRACTICE_SENTINEL_DAYS, |latest| {
                (as_of - latest).num_days().max(0)
            });

        let region_activity = region_activity(region_counts);
        let intensity_score = intensity_score(total_load, total_sessions, total_minutes);
        let rest_reasons = self.rest_reasons(
            total_sessions,
            total_minutes,
            &region_activity,
            intensity_score,
        );
        let needs_rest = rest_reasons.len() >= self.config.min_rest_reasons
            || intensity_score > self.config.forced_rest_score;

        debug!(
            total_sessions,
            total_load,
            intensity_score,
            needs_rest,
            unresolved,
            "Analyzed practice load"
        );

        PracticeAnalysis {
            total_sessions,
            total_minutes,
            average_session_length,
            days_since_last_practice,
            region_activity,
            category_distribution,
            total_load,
            intensity_score,
            needs_rest,
            rest_reasons,
        }
    }

    /// Choose a recovery tier and fill in poses, duration, and regions
    #[must_use]
    pub fn recommend_recovery(&self, analysis: &PracticeAnalysis) -> RecoveryRecommendation {
        let recovery_type = self.recovery_type(analysis);

        let focus_areas: Vec<RecoveryRegion> = analysis
            .region_activity
            .iter()
            .filter(|activity| {
                activity.intensity > 0 && activity.intensity < self.config.focus_max_intensity
            })
            .take(MAX_RECOVERY_REGIONS)
            .map(|activity| activity.region)
            .collect();
        let avoid_areas: Vec<RecoveryRegion> = analysis
            .region_activity
            .iter()
            .filter(|activity| activity.intensity > self.config.avoid_min_intensity)
            .take(MAX_RECOVERY_REGIONS)
            .map(|activity| activity.region)
            .collect();

        let durations = &self.config.durations;
        let suggested_duration_minutes = match recovery_type {
            RecoveryType::Rest => durations.rest,
            RecoveryType::Restorative => durations.restorative,
            RecoveryType::Gentle => durations.gentle,
            RecoveryType::ActiveRecovery => durations.active_recovery,
        };

        RecoveryRecommendation {
            recovery_type,
            title: recovery_type.title().to_owned(),
            description: recovery_type.description().to_owned(),
            suggested_poses: suggested_poses(&avoid_areas),
            suggested_duration_minutes,
            focus_areas,
            avoid_areas,
        }
    }

    fn recovery_type(&self, analysis: &PracticeAnalysis) -> RecoveryType {
        let score = analysis.intensity_score;
        if analysis.needs_rest || score > self.config.forced_rest_score {
            RecoveryType::Rest
        } else if score > self.config.restorative_score {
            RecoveryType::Restorative
        } else if score > self.config.gentle_score {
            RecoveryType::Gentle
        } else {
            RecoveryType::ActiveRecovery
        }
    }

    fn rest_reasons(
        &self,
        total_sessions: u32,
        total_minutes: f64,
        region_activity: &[RegionActivity],
        intensity_score: u32,
    ) -> Vec<String> {
        let triggers = &self.config.rest_triggers;
        let mut reasons = Vec::new();

        if total_sessions >= triggers.session_count {
            reasons.push(format!(
                "{total_sessions} sessions this week leave little time to recover"
            ));
        }
        if total_minutes >= triggers.total_minutes {
            reasons.push(format!(
                "{total_minutes:.0} minutes of practice this week is a high volume"
            ));
        }
        let loaded = region_activity
            .iter()
            .filter(|activity| activity.intensity > triggers.region_intensity)
            .count();
        if loaded >= triggers.loaded_region_count {
            reasons.push(format!("{loaded} body regions are under heavy load"));
        }
        if intensity_score > self.config.high_intensity_score {
            reasons.push(format!("Weekly intensity score of {intensity_score} is high"));
        }
        reasons
    }
}

fn resolve_pose<'c>(catalog: &'c [Pose], reference: &str) -> Option<&'c Pose> {
    catalog.iter().find(|pose| pose.matches_reference(reference))
}

/// Recovery regions of a pose, each at most once
fn recovery_regions(pose: &Pose) -> Vec<RecoveryRegion> {
    let mut regions = Vec::new();
    for region in pose
        .target_regions
        .iter()
        .filter_map(|tag| RecoveryRegion::from_tag(tag))
    {
        if !regions.contains(&region) {
            regions.push(region);
        }
    }
    regions
}

fn region_activity(counts: HashMap<RecoveryRegion, u32>) -> Vec<RegionActivity> {
    let max_count = counts.values().copied().max().unwrap_or(0).max(1);
    let mut activity: Vec<RegionActivity> = counts
        .into_iter()
        .map(|(region, count)| RegionActivity {
            region,
            count,
            intensity: (f64::from(count) / f64::from(max_count) * PERCENT_MAX).round() as u32,
        })
        .collect();
    activity.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.region.cmp(&b.region)));
    activity
}

fn intensity_score(total_load: u32, total_sessions: u32, total_minutes: f64) -> u32 {
    let load_denominator = if total_sessions == 0 {
        1.0
    } else {
        f64::from(total_sessions) * LOAD_NORMALIZER
    };
    let sessions = f64::from(total_sessions);
    let raw = (f64::from(total_load) / load_denominator) * LOAD_FACTOR
        + (total_minutes / WINDOW_DAYS) * VOLUME_FACTOR
        + (sessions / WINDOW_DAYS) * FREQUENCY_FACTOR;
    (raw.round().max(0.0) as u32).min(MAX_INTENSITY_SCORE)
}

fn suggested_poses(avoid_areas: &[RecoveryRegion]) -> Vec<String> {
    let mut poses: Vec<String> = Vec::with_capacity(MAX_SUGGESTED_POSES);
    let counter_poses = avoid_areas
        .iter()
        .flat_map(|region| region.counter_poses().iter().copied());
    for name in counter_poses.chain(GENERAL_RESTORATIVE_POSES.iter().copied()) {
        if poses.len() >= MAX_SUGGESTED_POSES {
            break;
        }
        if !poses.iter().any(|existing| existing == name) {
            poses.push(name.to_owned());
        }
    }
    poses
}
