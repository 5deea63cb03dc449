// ABOUTME: Fixed numeric constants shared by the personalization engines
// ABOUTME: Difficulty bounds, sentinels, analysis windows, and intensity heuristic coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants that are part of the engine's contract rather than tunable
//! configuration. Tunable thresholds live in `practice_intelligence::config`.

/// Pose difficulty scale
pub mod difficulty {
    /// Easiest difficulty on the catalog scale
    pub const MIN_DIFFICULTY: u8 = 1;

    /// Hardest difficulty on the catalog scale
    pub const MAX_DIFFICULTY: u8 = 10;

    /// Width of the difficulty scale, used to normalize difficulty distance
    pub const DIFFICULTY_SPAN: f64 = (MAX_DIFFICULTY - MIN_DIFFICULTY) as f64;
}

/// Score and percentage ranges
pub mod scoring {
    /// Neutral sub-score used when a factor carries no signal
    pub const NEUTRAL_SCORE: f64 = 0.5;

    /// Upper bound of percentage-style values (focus, intensity, balance)
    pub const PERCENT_MAX: f64 = 100.0;

    /// Front/back focus reported when no practice has been recorded
    pub const DEFAULT_FOCUS_PERCENT: u32 = 50;

    /// Decimal places kept on recommendation scores
    pub const SCORE_DECIMALS: i32 = 3;
}

/// Time windows and sentinels
pub mod time_periods {
    /// Days in the recovery analysis window
    pub const RECOVERY_WINDOW_DAYS: u32 = 7;

    /// Default body map window when the caller does not choose one
    pub const DEFAULT_BODY_MAP_WINDOW_DAYS: u32 = 30;

    /// Reported as days-since-last-practice when there are no logs
    pub const NO_PRACTICE_SENTINEL_DAYS: i64 = 999;
}

/// Coefficients of the weekly practice intensity heuristic
///
/// `intensity = (load / (sessions * LOAD_NORMALIZER)) * LOAD_FACTOR
///            + (minutes / WINDOW_DAYS) * VOLUME_FACTOR
///            + (sessions / WINDOW_DAYS) * FREQUENCY_FACTOR`, capped at 100.
pub mod intensity {
    /// Maximum category weight a single session is normalized against
    pub const LOAD_NORMALIZER: f64 = 5.0;

    /// Multiplier applied to average per-session load
    pub const LOAD_FACTOR: f64 = 20.0;

    /// Multiplier applied to average daily minutes
    pub const VOLUME_FACTOR: f64 = 0.5;

    /// Multiplier applied to average daily sessions
    pub const FREQUENCY_FACTOR: f64 = 30.0;

    /// Days the volume and frequency terms are averaged over
    pub const WINDOW_DAYS: f64 = 7.0;

    /// Upper bound of the intensity score
    pub const MAX_INTENSITY_SCORE: u32 = 100;
}

/// Output size limits
pub mod limits {
    /// Default number of sequence recommendations
    pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

    /// Reasons rendered per recommendation
    pub const MAX_REASONS: usize = 2;

    /// Contributing poses tracked per region
    pub const TOP_CONTRIBUTING_POSES: usize = 3;

    /// Generated body map recommendation strings
    pub const MAX_BODY_MAP_RECOMMENDATIONS: usize = 3;

    /// Poses suggested in a recovery recommendation
    pub const MAX_SUGGESTED_POSES: usize = 8;

    /// Focus or avoid regions in a recovery recommendation
    pub const MAX_RECOVERY_REGIONS: usize = 3;
}
