// ABOUTME: Sequence recommendation scorer ranking candidate poses for "what comes next"
// ABOUTME: Weighted blend of category flow, difficulty progression, variety, and goal affinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sequence Recommendation Scorer
//!
//! Every catalog pose except the current one is a candidate. Each candidate
//! receives four sub-scores in 0.0-1.0:
//!
//! - **flow**: affinity of the current category to the candidate category
//!   (neutral 0.5 with no current pose, plus a flat opening bonus for
//!   STANDING/SEATED candidates)
//! - **difficulty**: closeness to a target difficulty that climbs early in
//!   the session, holds mid-session, and drops during the wind-down
//! - **variety**: 1.0 for unused poses, a penalty for repeats that recovers
//!   as more poses are practiced after the repeat
//! - **goal**: 1.0 when the pose serves one of the practitioner's goals,
//!   otherwise neutral
//!
//! The weighted average is clamped to 0.0-1.0. Results are sorted by score,
//! descending, with ties broken by ascending pose id.

use crate::category_affinity::{flow_affinity, is_cooldown_category, is_opening_category};
use crate::config::{PersonalizationConfig, SequenceScoringConfig};
use crate::goals::matching_goal;
use practice_core::constants::difficulty::{DIFFICULTY_SPAN, MAX_DIFFICULTY};
use practice_core::constants::limits::MAX_REASONS;
use practice_core::constants::scoring::{NEUTRAL_SCORE, SCORE_DECIMALS};
use practice_core::models::{Pose, PoseId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest difficulty a cool-down pose may have
const COOLDOWN_MAX_DIFFICULTY: u8 = 2;

/// State of the practice the next pose is being chosen for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Pose the practitioner is in now
    #[serde(default)]
    pub current_pose: Option<Pose>,
    /// Poses already practiced this session, oldest first
    #[serde(default)]
    pub session_poses: Vec<PoseId>,
    /// Fraction of the planned session completed (clamped into 0.0-1.0)
    #[serde(default)]
    pub session_progress: f64,
    /// Goal keywords such as `flexibility` or `strength`
    #[serde(default)]
    pub user_goals: Vec<String>,
}

impl SessionContext {
    /// Context for choosing the pose after `current`
    #[must_use]
    pub fn after(current: Pose) -> Self {
        Self {
            current_pose: Some(current),
            ..Self::default()
        }
    }

    /// Set the poses practiced so far
    #[must_use]
    pub fn with_session_poses(mut self, poses: Vec<PoseId>) -> Self {
        self.session_poses = poses;
        self
    }

    /// Set the session progress
    #[must_use]
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.session_progress = progress;
        self
    }

    /// Set the goal keywords
    #[must_use]
    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_goals = goals.into_iter().map(Into::into).collect();
        self
    }

    /// Session progress clamped into 0.0-1.0; NaN counts as the start
    #[must_use]
    pub fn clamped_progress(&self) -> f64 {
        if self.session_progress.is_nan() {
            0.0
        } else {
            self.session_progress.clamp(0.0, 1.0)
        }
    }
}

/// The four sub-scores behind a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Category-flow sub-score
    pub flow: f64,
    /// Difficulty-progression sub-score
    pub difficulty: f64,
    /// Variety sub-score
    pub variety: f64,
    /// Goal-affinity sub-score
    pub goal: f64,
    /// Flat bonus for opening categories when there is no current pose
    pub opening_bonus: f64,
}

/// A ranked candidate for the next pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended pose
    pub pose: Pose,
    /// Combined score (0.0-1.0)
    pub score: f64,
    /// Up to two human-readable reasons, strongest first
    pub reasons: Vec<String>,
    /// Sub-scores behind `score`
    pub breakdown: ScoreBreakdown,
}

/// Which sub-score a reason is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScoreFactor {
    Flow,
    Difficulty,
    Variety,
    Goal,
}

/// Whether opening categories earn the start bonus when there is no current pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opening {
    Bonus,
    NoBonus,
}

/// Ranks candidate poses for insertion into an in-progress sequence
pub struct SequenceRecommender {
    config: SequenceScoringConfig,
}

impl Default for SequenceRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceRecommender {
    /// Create a recommender using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PersonalizationConfig::global().sequence.clone(),
        }
    }

    /// Create a recommender with explicit configuration
    #[must_use]
    pub const fn with_config(config: SequenceScoringConfig) -> Self {
        Self { config }
    }

    /// Number of recommendations returned when the caller does not choose
    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.config.default_limit
    }

    /// Rank every catalog pose except the current one
    ///
    /// An empty catalog, or one holding only the current pose, yields an
    /// empty list.
    #[must_use]
    pub fn recommend(
        &self,
        catalog: &[Pose],
        context: &SessionContext,
        limit: usize,
    ) -> Vec<Recommendation> {
        let excluded = context.current_pose.as_ref().map(|pose| pose.id);
        self.rank(catalog, context, excluded, Opening::Bonus, limit)
    }

    /// Rank opening poses for a practice that has not started
    #[must_use]
    pub fn recommend_start(&self, catalog: &[Pose], limit: usize) -> Vec<Recommendation> {
        self.recommend(catalog, &SessionContext::default(), limit)
    }

    /// Rank gentle closing poses following the last pose of `session_poses`
    ///
    /// Only poses of difficulty 2 or lower in the SUPINE, SEATED or
    /// FORWARD_BEND categories are eligible, and the last session pose is
    /// never recommended. The opening bonus never applies, even when the
    /// session is empty or its last pose is not in the catalog.
    #[must_use]
    pub fn recommend_cooldown(
        &self,
        catalog: &[Pose],
        session_poses: &[PoseId],
        limit: usize,
    ) -> Vec<Recommendation> {
        let last_id = session_poses.last().copied();
        let current_pose = last_id.and_then(|id| catalog.iter().find(|pose| pose.id == id));

        let eligible: Vec<Pose> = catalog
            .iter()
            .filter(|pose| {
                pose.difficulty <= COOLDOWN_MAX_DIFFICULTY && is_cooldown_category(pose.category)
            })
            .cloned()
            .collect();

        let context = SessionContext {
            current_pose: current_pose.cloned(),
            session_poses: session_poses.to_vec(),
            session_progress: 1.0,
            user_goals: Vec::new(),
        };

        debug!(
            eligible = eligible.len(),
            last_pose = ?last_id,
            "Ranking cool-down poses"
        );
        self.rank(&eligible, &context, last_id, Opening::NoBonus, limit)
    }

    fn rank(
        &self,
        catalog: &[Pose],
        context: &SessionContext,
        excluded: Option<PoseId>,
        opening: Opening,
        limit: usize,
    ) -> Vec<Recommendation> {
        let progress = context.clamped_progress();
        if (progress - context.session_progress).abs() > f64::EPSILON {
            debug!(
                requested = context.session_progress,
                clamped = progress,
                "Clamped out-of-range session progress"
            );
        }
        let target = self.target_difficulty(context.current_pose.as_ref(), progress);

        let mut ranked: Vec<Recommendation> = catalog
            .par_iter()
            .filter(|pose| Some(pose.id) != excluded)
            .map(|pose| self.score_candidate(pose, context, target, opening))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.pose.id.cmp(&b.pose.id))
        });
        ranked.truncate(limit);

        debug!(
            candidates = catalog.len(),
            returned = ranked.len(),
            progress,
            target_difficulty = target,
            "Ranked sequence candidates"
        );
        ranked
    }

    /// Difficulty the next pose should aim for
    fn target_difficulty(&self, current: Option<&Pose>, progress: f64) -> u8 {
        if progress > self.config.late_session_progress {
            return self.config.cooldown_target_difficulty;
        }
        match current {
            None => self.config.start_target_difficulty,
            Some(pose) if progress < self.config.early_session_progress => {
                (pose.clamped_difficulty() + 1).min(MAX_DIFFICULTY)
            }
            Some(pose) => pose.clamped_difficulty(),
        }
    }

    fn score_candidate(
        &self,
        candidate: &Pose,
        context: &SessionContext,
        target: u8,
        opening: Opening,
    ) -> Recommendation {
        let current = context.current_pose.as_ref();

        let flow = current.map_or(NEUTRAL_SCORE, |pose| {
            flow_affinity(pose.category, candidate.category)
        });
        let opening_bonus = if opening == Opening::Bonus
            && current.is_none()
            && is_opening_category(candidate.category)
        {
            self.config.start_category_bonus
        } else {
            0.0
        };
        let difficulty = Self::difficulty_score(candidate, target);
        let variety = self.variety_score(candidate.id, &context.session_poses);
        let goal_match = matching_goal(&context.user_goals, candidate);
        let goal = if goal_match.is_some() {
            1.0
        } else {
            NEUTRAL_SCORE
        };

        let breakdown = ScoreBreakdown {
            flow,
            difficulty,
            variety,
            goal,
            opening_bonus,
        };
        let score = round_score(self.combine(&breakdown));
        let reasons = Self::reasons(&breakdown, current.is_some(), goal_match);

        Recommendation {
            pose: candidate.clone(),
            score,
            reasons,
            breakdown,
        }
    }

    fn combine(&self, breakdown: &ScoreBreakdown) -> f64 {
        let weights = &self.config.weights;
        let total_weight = weights.total();
        let weighted = breakdown.flow.mul_add(
            weights.flow,
            breakdown.difficulty.mul_add(
                weights.difficulty,
                breakdown
                    .variety
                    .mul_add(weights.variety, breakdown.goal * weights.goal),
            ),
        );
        let average = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            NEUTRAL_SCORE
        };
        (average + breakdown.opening_bonus).clamp(0.0, 1.0)
    }

    fn difficulty_score(candidate: &Pose, target: u8) -> f64 {
        let distance = f64::from(candidate.clamped_difficulty().abs_diff(target));
        (1.0 - distance / DIFFICULTY_SPAN).clamp(0.0, 1.0)
    }

    fn variety_score(&self, candidate: PoseId, session_poses: &[PoseId]) -> f64 {
        let Some(last_use) = session_poses.iter().rposition(|id| *id == candidate) else {
            return 1.0;
        };
        let poses_since = session_poses.len() - 1 - last_use;
        let recovered =
            (poses_since as f64 / self.config.repeat_recovery_poses as f64).min(1.0);
        let penalty = self.config.repeat_penalty;
        (1.0 - penalty).mul_add(recovered, penalty)
    }

    /// Render the two strongest above-neutral factors as reasons
    fn reasons(
        breakdown: &ScoreBreakdown,
        has_current: bool,
        goal_match: Option<&str>,
    ) -> Vec<String> {
        let mut factors = [
            (ScoreFactor::Flow, breakdown.flow + breakdown.opening_bonus),
            (ScoreFactor::Difficulty, breakdown.difficulty),
            (ScoreFactor::Variety, breakdown.variety),
            (ScoreFactor::Goal, breakdown.goal),
        ];
        // stable: equal values keep factor order
        factors.sort_by(|a, b| b.1.total_cmp(&a.1));

        factors
            .iter()
            .filter(|(_, value)| *value > NEUTRAL_SCORE)
            .take(MAX_REASONS)
            .map(|(factor, _)| match factor {
                ScoreFactor::Flow if has_current => "Flows well from your last pose".to_owned(),
                ScoreFactor::Flow => "A natural way to begin your practice".to_owned(),
                ScoreFactor::Difficulty => {
                    "Right challenge for this point in your session".to_owned()
                }
                ScoreFactor::Variety if breakdown.variety >= 1.0 => "New pose to try".to_owned(),
                ScoreFactor::Variety => "Haven't practiced this one in a while".to_owned(),
                ScoreFactor::Goal => format!(
                    "Matches your {} goal",
                    goal_match.map_or_else(String::new, goal_label)
                ),
            })
            .collect()
    }
}

fn goal_label(goal: &str) -> String {
    goal.trim().to_lowercase().replace('_', " ")
}

fn round_score(score: f64) -> f64 {
    let factor = 10_f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}
