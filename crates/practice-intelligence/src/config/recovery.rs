// ABOUTME: Recovery analyzer configuration
// ABOUTME: Rest-trigger thresholds, recommendation tiers, and suggested durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recovery Analyzer Configuration
//!
//! Thresholds that turn a week of practice logs into a rest decision and a
//! recovery recommendation tier.

use serde::{Deserialize, Serialize};

/// Recovery analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Conditions that each count as one rest reason
    pub rest_triggers: RestTriggers,
    /// Score above which the intensity-score reason fires
    pub high_intensity_score: u32,
    /// Score above which rest is forced regardless of the reason count
    pub forced_rest_score: u32,
    /// Number of reasons that together require rest
    pub min_rest_reasons: usize,
    /// Score above which a restorative practice is recommended
    pub restorative_score: u32,
    /// Score above which a gentle practice is recommended
    pub gentle_score: u32,
    /// Regions with intensity strictly between 0 and this value become focus areas
    pub focus_max_intensity: u32,
    /// Regions with intensity above this value become avoid areas
    pub avoid_min_intensity: u32,
    /// Suggested session lengths per recommendation type
    pub durations: RecoveryDurations,
}

/// Individual rest-reason thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestTriggers {
    /// Sessions in the window at or above which frequency is a reason
    pub session_count: u32,
    /// Minutes in the window at or above which volume is a reason
    pub total_minutes: f64,
    /// Region intensity above which a region counts as heavily loaded
    pub region_intensity: u32,
    /// Heavily loaded regions at or above which region load is a reason
    pub loaded_region_count: usize,
}

/// Suggested duration in minutes for each recommendation type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryDurations {
    /// Full rest day
    pub rest: u32,
    /// Restorative practice
    pub restorative: u32,
    /// Gentle practice
    pub gentle: u32,
    /// Active recovery
    pub active_recovery: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            rest_triggers: RestTriggers::default(),
            high_intensity_score: 70,
            forced_rest_score: 80,
            min_rest_reasons: 2,
            restorative_score: 60,
            gentle_score: 40,
            focus_max_intensity: 30,
            avoid_min_intensity: 60,
            durations: RecoveryDurations::default(),
        }
    }
}

impl Default for RestTriggers {
    fn default() -> Self {
        Self {
            session_count: 6,
            total_minutes: 300.0,
            region_intensity: 70,
            loaded_region_count: 3,
        }
    }
}

impl Default for RecoveryDurations {
    fn default() -> Self {
        Self {
            rest: 10,
            restorative: 25,
            gentle: 30,
            active_recovery: 20,
        }
    }
}
