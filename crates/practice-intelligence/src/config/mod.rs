// ABOUTME: Personalization engine configuration aggregate with validation and env overrides
// ABOUTME: Process-wide read-only singleton plus explicit construction for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Personalization Configuration
//!
//! Tunable weights and thresholds for the three engines. The fixed tables
//! (category affinity, intensity weights, region mappings, counter-pose
//! lists) and the full-count fan-out policy are deliberately not part of
//! this configuration.
//!
//! # Module Structure
//!
//! - `sequence` - sequence scorer weights and session phase thresholds
//! - `body_map` - body focus recommendation thresholds
//! - `recovery` - rest triggers and recommendation tiers

pub mod body_map;
pub mod error;
pub mod recovery;
pub mod sequence;

pub use body_map::BodyMapConfig;
pub use error::ConfigError;
pub use recovery::{RecoveryConfig, RecoveryDurations, RestTriggers};
pub use sequence::{SequenceScoringConfig, SequenceWeights};

use practice_core::constants::difficulty::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PERSONALIZATION_CONFIG: OnceLock<PersonalizationConfig> = OnceLock::new();

/// Tolerance when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Sequence recommendation scorer
    pub sequence: SequenceScoringConfig,
    /// Body focus aggregator
    pub body_map: BodyMapConfig,
    /// Recovery analyzer
    pub recovery: RecoveryConfig,
}

impl PersonalizationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PERSONALIZATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load personalization config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_sequence()?;
        self.validate_body_map()?;
        self.validate_recovery()
    }

    fn validate_sequence(&self) -> Result<(), ConfigError> {
        let seq = &self.sequence;
        let weights = [
            seq.weights.flow,
            seq.weights.difficulty,
            seq.weights.variety,
            seq.weights.goal,
        ];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ConfigError::ValueOutOfRange(
                "Sequence weights must each be within 0.0-1.0",
            ));
        }
        if (seq.weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Sequence weights must sum to 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&seq.early_session_progress)
            || !(0.0..=1.0).contains(&seq.late_session_progress)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Session progress thresholds must be within 0.0-1.0",
            ));
        }
        if seq.early_session_progress > seq.late_session_progress {
            return Err(ConfigError::InvalidRange(
                "early_session_progress must be <= late_session_progress",
            ));
        }
        let difficulty_range = MIN_DIFFICULTY..=MAX_DIFFICULTY;
        if !difficulty_range.contains(&seq.start_target_difficulty)
            || !difficulty_range.contains(&seq.cooldown_target_difficulty)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Target difficulties must be within 1-10",
            ));
        }
        if !(0.0..=1.0).contains(&seq.repeat_penalty)
            || !(0.0..=1.0).contains(&seq.start_category_bonus)
        {
            return Err(ConfigError::ValueOutOfRange(
                "repeat_penalty and start_category_bonus must be within 0.0-1.0",
            ));
        }
        if seq.repeat_recovery_poses == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "repeat_recovery_poses must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_body_map(&self) -> Result<(), ConfigError> {
        let body = &self.body_map;
        if !(50.0..=100.0).contains(&body.imbalance_threshold_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "imbalance_threshold_percent must be within 50-100",
            ));
        }
        if body.neglected_intensity > 100 || body.overworked_intensity > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Body map intensity thresholds must be within 0-100",
            ));
        }
        if body.neglected_intensity >= body.overworked_intensity {
            return Err(ConfigError::InvalidRange(
                "neglected_intensity must be < overworked_intensity",
            ));
        }
        if body.upper_lower_ratio <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "upper_lower_ratio must be greater than 1.0",
            ));
        }
        Ok(())
    }

    fn validate_recovery(&self) -> Result<(), ConfigError> {
        let rec = &self.recovery;
        if rec.gentle_score >= rec.restorative_score
            || rec.restorative_score >= rec.forced_rest_score
        {
            return Err(ConfigError::InvalidRange(
                "Recovery tiers must ascend: gentle < restorative < forced rest",
            ));
        }
        if rec.forced_rest_score > 100 || rec.high_intensity_score > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Recovery score thresholds must be within 0-100",
            ));
        }
        if rec.focus_max_intensity >= rec.avoid_min_intensity {
            return Err(ConfigError::InvalidRange(
                "focus_max_intensity must be < avoid_min_intensity",
            ));
        }
        if rec.min_rest_reasons == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_rest_reasons must be at least 1",
            ));
        }
        if rec.rest_triggers.total_minutes <= 0.0 || rec.rest_triggers.session_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Rest trigger volume thresholds must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let seq = &mut self.sequence;
        Self::apply_env_var("PRACTICE_FLOW_WEIGHT", &mut seq.weights.flow)?;
        Self::apply_env_var("PRACTICE_DIFFICULTY_WEIGHT", &mut seq.weights.difficulty)?;
        Self::apply_env_var("PRACTICE_VARIETY_WEIGHT", &mut seq.weights.variety)?;
        Self::apply_env_var("PRACTICE_GOAL_WEIGHT", &mut seq.weights.goal)?;
        Self::apply_env_var(
            "PRACTICE_EARLY_SESSION_PROGRESS",
            &mut seq.early_session_progress,
        )?;
        Self::apply_env_var(
            "PRACTICE_LATE_SESSION_PROGRESS",
            &mut seq.late_session_progress,
        )?;
        Self::apply_env_var("PRACTICE_DEFAULT_LIMIT", &mut seq.default_limit)?;

        Self::apply_env_var(
            "PRACTICE_IMBALANCE_THRESHOLD",
            &mut self.body_map.imbalance_threshold_percent,
        )?;

        let triggers = &mut self.recovery.rest_triggers;
        Self::apply_env_var("PRACTICE_REST_SESSION_THRESHOLD", &mut triggers.session_count)?;
        Self::apply_env_var("PRACTICE_REST_MINUTES_THRESHOLD", &mut triggers.total_minutes)?;

        Ok(self)
    }
}
