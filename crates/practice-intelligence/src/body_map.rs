// ABOUTME: Body focus aggregator turning practice history into per-region coverage
// ABOUTME: Full-count fan-out over the canonical taxonomy, front/back balance, and guidance text
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Body-Focus Aggregator
//!
//! Aggregates a window of per-pose history records into a coverage report
//! over the 16 canonical regions.
//!
//! ## Fan-out policy
//!
//! A record's **full** practice count is credited to every canonical region
//! its pose maps to. A pose targeting `back` and `core` with 10 practices
//! credits 10 to `upper_back`, 10 to `lower_back` and 10 to `core`, while
//! `total_practices` grows by 10. Region percentages are therefore not
//! constrained to sum to 100. This policy is fixed and not configurable.
//!
//! ## Balance
//!
//! Front-side regions feed a front total, back-side regions a back total,
//! and regions spanning both sides split their count evenly. The balance
//! score is `100 - |front_focus - back_focus|`.

use crate::body_regions::{BodyRegionTaxonomy, BodySide, BodyZone, CanonicalRegion};
use crate::config::{BodyMapConfig, PersonalizationConfig};
use chrono::{DateTime, Utc};
use practice_core::constants::limits::{MAX_BODY_MAP_RECOMMENDATIONS, TOP_CONTRIBUTING_POSES};
use practice_core::constants::scoring::{DEFAULT_FOCUS_PERCENT, PERCENT_MAX};
use practice_core::models::{PoseHistoryRecord, PoseId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A pose's contribution to one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseContribution {
    /// Contributing pose
    pub pose_id: PoseId,
    /// Display name of the pose
    pub pose_name: String,
    /// Practice count credited by this pose
    pub count: u32,
}

/// Coverage of one canonical region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFocus {
    /// Region this entry describes
    pub region: CanonicalRegion,
    /// Side of the body the region belongs to
    pub side: BodySide,
    /// Practices credited to the region
    pub count: u32,
    /// Share of total practices (0-100); regions overlap, so shares need not sum to 100
    pub percentage: u32,
    /// Count relative to the most-practiced region (0-100)
    pub intensity: u32,
    /// Most recent practice of any contributing pose
    pub last_practiced: Option<DateTime<Utc>>,
    /// Up to three poses with the highest contribution
    pub top_poses: Vec<PoseContribution>,
}

impl RegionFocus {
    fn empty(region: CanonicalRegion) -> Self {
        Self {
            region,
            side: region.side(),
            count: 0,
            percentage: 0,
            intensity: 0,
            last_practiced: None,
            top_poses: Vec::new(),
        }
    }
}

/// Per-region coverage report for a practice window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMapReport {
    /// Window the caller filtered the history to
    pub window_days: u32,
    /// Coverage of all 16 canonical regions
    pub regions: BTreeMap<CanonicalRegion, RegionFocus>,
    /// Sum of practice counts across records (not across regions)
    pub total_practices: u32,
    /// Sum of minutes across records
    pub total_duration_minutes: f64,
    /// 100 when front and back work are perfectly even
    pub balance_score: u32,
    /// Share of side-attributed work on the front of the body
    pub front_focus: u32,
    /// Share of side-attributed work on the back of the body
    pub back_focus: u32,
    /// Region counts summed over upper-body regions
    pub upper_body_total: u32,
    /// Region counts summed over lower-body regions
    pub lower_body_total: u32,
    /// Up to three guidance strings, most important first
    pub recommendations: Vec<String>,
}

impl BodyMapReport {
    /// Coverage of one region
    #[must_use]
    pub fn region(&self, region: CanonicalRegion) -> Option<&RegionFocus> {
        self.regions.get(&region)
    }
}

/// Front/back split of region counts
struct SideBalance {
    front_focus: f64,
    back_focus: f64,
}

impl SideBalance {
    fn score(&self) -> f64 {
        PERCENT_MAX - (self.front_focus - self.back_focus).abs()
    }
}

/// Aggregates practice history into a [`BodyMapReport`]
pub struct BodyFocusAggregator<'t> {
    config: BodyMapConfig,
    taxonomy: &'t BodyRegionTaxonomy,
}

impl Default for BodyFocusAggregator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyFocusAggregator<'static> {
    /// Create an aggregator with the global configuration and built-in taxonomy
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PersonalizationConfig::global().body_map.clone())
    }

    /// Create an aggregator with explicit configuration and the built-in taxonomy
    #[must_use]
    pub fn with_config(config: BodyMapConfig) -> Self {
        Self {
            config,
            taxonomy: BodyRegionTaxonomy::standard(),
        }
    }
}

impl<'t> BodyFocusAggregator<'t> {
    /// Create an aggregator over a caller-supplied taxonomy
    #[must_use]
    pub const fn with_taxonomy(config: BodyMapConfig, taxonomy: &'t BodyRegionTaxonomy) -> Self {
        Self { config, taxonomy }
    }

    /// Aggregate records already filtered to the last `window_days` days
    #[must_use]
    pub fn analyze_body_map(&self, records: &[PoseHistoryRecord], window_days: u32) -> BodyMapReport {
        let mut regions: BTreeMap<CanonicalRegion, RegionFocus> = CanonicalRegion::ALL
            .into_iter()
            .map(|region| (region, RegionFocus::empty(region)))
            .collect();
        let mut contributions: BTreeMap<CanonicalRegion, Vec<PoseContribution>> = BTreeMap::new();
        let mut total_practices: u32 = 0;
        let mut total_duration_minutes = 0.0;
        let mut unmapped_records = 0_usize;

        for record in records {
            total_practices = total_practices.saturating_add(record.practice_count);
            if record.total_duration_minutes.is_finite() {
                total_duration_minutes += record.total_duration_minutes.max(0.0);
            }

            let mapped = self.taxonomy.resolve(&record.target_regions);
            if mapped.is_empty() {
                unmapped_records += 1;
            }
            for region in mapped {
                let Some(focus) = regions.get_mut(&region) else {
                    continue;
                };
                focus.count = focus.count.saturating_add(record.practice_count);
                focus.last_practiced = focus.last_practiced.max(Some(record.last_practiced));
                add_contribution(contributions.entry(region).or_default(), record);
            }
        }

        let max_count = regions.values().map(|focus| focus.count).max().unwrap_or(0);
        for focus in regions.values_mut() {
            focus.percentage = if total_practices == 0 {
                0
            } else {
                percent_of(focus.count, total_practices)
            };
            focus.intensity = percent_of(focus.count, max_count.max(1));
            if let Some(mut poses) = contributions.remove(&focus.region) {
                poses.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pose_id.cmp(&b.pose_id)));
                poses.truncate(TOP_CONTRIBUTING_POSES);
                focus.top_poses = poses;
            }
        }

        let balance = side_balance(&regions);
        let upper_body_total = zone_total(&regions, BodyZone::Upper);
        let lower_body_total = zone_total(&regions, BodyZone::Lower);
        let recommendations =
            self.recommendations(&regions, &balance, upper_body_total, lower_body_total);

        debug!(
            records = records.len(),
            unmapped_records,
            total_practices,
            window_days,
            "Aggregated body focus"
        );

        BodyMapReport {
            window_days,
            regions,
            total_practices,
            total_duration_minutes,
            balance_score: round_percent(balance.score()),
            front_focus: round_percent(balance.front_focus),
            back_focus: round_percent(balance.back_focus),
            upper_body_total,
            lower_body_total,
            recommendations,
        }
    }

    /// Guidance text in priority order: imbalance, neglect, overwork, upper/lower
    fn recommendations(
        &self,
        regions: &BTreeMap<CanonicalRegion, RegionFocus>,
        balance: &SideBalance,
        upper_total: u32,
        lower_total: u32,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();
        let threshold = self.config.imbalance_threshold_percent;

        if balance.front_focus > threshold {
            recommendations.push(format!(
                "Your practice leans toward the front body ({}%). Add back-body work such as Locust or Bridge to rebalance.",
                round_percent(balance.front_focus)
            ));
        } else if balance.back_focus > threshold {
            recommendations.push(format!(
                "Your practice leans toward the back body ({}%). Add front-body openers such as Camel or Low Lunge to rebalance.",
                round_percent(balance.back_focus)
            ));
        }

        let neglected: Vec<String> = regions
            .values()
            .filter(|focus| focus.intensity > 0 && focus.intensity < self.config.neglected_intensity)
            .map(|focus| focus.region.label())
            .collect();
        if (1..=self.config.max_neglected_regions).contains(&neglected.len()) {
            recommendations.push(format!(
                "These areas are getting little attention: {}. Consider adding poses that target them.",
                neglected.join(", ")
            ));
        }

        let mut overworked: Vec<&RegionFocus> = regions
            .values()
            .filter(|focus| focus.intensity > self.config.overworked_intensity)
            .collect();
        if !overworked.is_empty() {
            overworked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.region.cmp(&b.region)));
            let names: Vec<String> = overworked
                .iter()
                .take(MAX_BODY_MAP_RECOMMENDATIONS)
                .map(|focus| focus.region.label())
                .collect();
            recommendations.push(format!(
                "You've been giving a lot of attention to your {}. Great consistency; pair it with counter-poses and rest days.",
                names.join(", ")
            ));
        }

        let ratio = self.config.upper_lower_ratio;
        if f64::from(upper_total) > ratio * f64::from(lower_total) {
            recommendations.push(format!(
                "Your upper body gets over {ratio:.0}x the attention of your lower body. Add standing and hip-opening poses."
            ));
        } else if f64::from(lower_total) > ratio * f64::from(upper_total) {
            recommendations.push(format!(
                "Your lower body gets over {ratio:.0}x the attention of your upper body. Add shoulder and arm work such as Dolphin or Plank."
            ));
        }

        recommendations.truncate(MAX_BODY_MAP_RECOMMENDATIONS);
        recommendations
    }
}

fn add_contribution(poses: &mut Vec<PoseContribution>, record: &PoseHistoryRecord) {
    if let Some(existing) = poses.iter_mut().find(|p| p.pose_id == record.pose_id) {
        existing.count = existing.count.saturating_add(record.practice_count);
    } else {
        poses.push(PoseContribution {
            pose_id: record.pose_id,
            pose_name: record.pose_name.clone(),
            count: record.practice_count,
        });
    }
}

fn side_balance(regions: &BTreeMap<CanonicalRegion, RegionFocus>) -> SideBalance {
    let (front_total, back_total) =
        regions
            .values()
            .fold((0.0_f64, 0.0_f64), |(front, back), focus| {
                let count = f64::from(focus.count);
                match focus.side {
                    BodySide::Front => (front + count, back),
                    BodySide::Back => (front, back + count),
                    BodySide::Both => (front + count / 2.0, back + count / 2.0),
                }
            });

    let sided = front_total + back_total;
    if sided <= 0.0 {
        let even = f64::from(DEFAULT_FOCUS_PERCENT);
        return SideBalance {
            front_focus: even,
            back_focus: even,
        };
    }
    SideBalance {
        front_focus: front_total / sided * PERCENT_MAX,
        back_focus: back_total / sided * PERCENT_MAX,
    }
}

fn zone_total(regions: &BTreeMap<CanonicalRegion, RegionFocus>, zone: BodyZone) -> u32 {
    regions
        .values()
        .filter(|focus| focus.region.zone() == zone)
        .fold(0_u32, |total, focus| total.saturating_add(focus.count))
}

fn percent_of(part: u32, whole: u32) -> u32 {
    round_percent(f64::from(part) / f64::from(whole.max(1)) * PERCENT_MAX)
}

fn round_percent(value: f64) -> u32 {
    value.round().clamp(0.0, PERCENT_MAX) as u32
}
