// ABOUTME: Sequence recommendation scorer configuration
// ABOUTME: Factor weights, session phase thresholds, variety decay, and result limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequence Scorer Configuration
//!
//! Weights for the four sub-scores and the thresholds that decide how the
//! difficulty target moves through a session.

use practice_core::constants::limits;
use serde::{Deserialize, Serialize};

/// Sequence recommendation scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceScoringConfig {
    /// Weights of the four sub-scores
    pub weights: SequenceWeights,
    /// Progress below which the session is still building (target = current + 1)
    pub early_session_progress: f64,
    /// Progress above which the session is winding down (target = cooldown difficulty)
    pub late_session_progress: f64,
    /// Difficulty targeted when there is no current pose
    pub start_target_difficulty: u8,
    /// Difficulty targeted late in the session, regardless of the current pose
    pub cooldown_target_difficulty: u8,
    /// Flat bonus for STANDING/SEATED candidates when there is no current pose
    pub start_category_bonus: f64,
    /// Variety score of a pose used immediately before
    pub repeat_penalty: f64,
    /// Poses after which a repeated pose's variety score recovers to 1.0
    pub repeat_recovery_poses: usize,
    /// Number of recommendations when the caller does not choose
    pub default_limit: usize,
}

/// Weights for combining sub-scores; must sum to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceWeights {
    /// Category-flow weight
    pub flow: f64,
    /// Difficulty-progression weight
    pub difficulty: f64,
    /// Variety weight
    pub variety: f64,
    /// Goal-affinity weight
    pub goal: f64,
}

impl SequenceWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.flow + self.difficulty + self.variety + self.goal
    }
}

impl Default for SequenceScoringConfig {
    fn default() -> Self {
        Self {
            weights: SequenceWeights::default(),
            early_session_progress: 0.5,
            late_session_progress: 0.7,
            start_target_difficulty: 1,
            cooldown_target_difficulty: 1,
            start_category_bonus: 0.1,
            repeat_penalty: 0.3,
            repeat_recovery_poses: 10,
            default_limit: limits::DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl Default for SequenceWeights {
    fn default() -> Self {
        Self {
            flow: 0.35,
            difficulty: 0.30,
            variety: 0.20,
            goal: 0.15,
        }
    }
}
