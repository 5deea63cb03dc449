// ABOUTME: Body focus aggregator configuration
// ABOUTME: Thresholds that trigger imbalance, neglect, overwork, and upper/lower text
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// Body focus aggregator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMapConfig {
    /// Front or back focus percentage above which an imbalance warning is emitted
    pub imbalance_threshold_percent: f64,
    /// Regions with intensity strictly between 0 and this value count as neglected
    pub neglected_intensity: u32,
    /// Neglect notice is only emitted when at most this many regions are neglected
    pub max_neglected_regions: usize,
    /// Regions with intensity above this value count as overworked
    pub overworked_intensity: u32,
    /// Upper/lower ratio above which a zone imbalance warning is emitted
    pub upper_lower_ratio: f64,
}

impl Default for BodyMapConfig {
    fn default() -> Self {
        Self {
            imbalance_threshold_percent: 65.0,
            neglected_intensity: 10,
            max_neglected_regions: 3,
            overworked_intensity: 80,
            upper_lower_ratio: 2.0,
        }
    }
}
