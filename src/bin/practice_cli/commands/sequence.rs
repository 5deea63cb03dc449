// ABOUTME: Sequence recommendation commands for practice-cli
// ABOUTME: Next, opening, and cool-down pose rankings over the snapshot catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::helpers::display::print_json;
use practice_personalization::errors::{AppError, AppResult};
use practice_personalization::intelligence::{SequenceRecommender, SessionContext};
use practice_personalization::logging::EngineLogger;
use practice_personalization::snapshot::PracticeSnapshot;
use std::time::Instant;

/// Rank poses to follow `current`
pub fn next(
    snapshot: &PracticeSnapshot,
    current: Option<&str>,
    session: &[String],
    progress: f64,
    goals: Vec<String>,
    limit: Option<usize>,
) -> AppResult<()> {
    let current_pose = current
        .map(|reference| {
            snapshot
                .pose_by_reference(reference)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("Pose '{reference}'")))
        })
        .transpose()?;

    let context = SessionContext {
        current_pose,
        session_poses: snapshot.resolve_ids(session)?,
        session_progress: progress,
        user_goals: goals,
    };

    let recommender = SequenceRecommender::new();
    let limit = limit.unwrap_or_else(|| recommender.default_limit());
    let started = Instant::now();
    let recommendations = recommender.recommend(&snapshot.catalog, &context, limit);
    EngineLogger::log_engine_run(
        "sequence",
        snapshot.catalog.len(),
        recommendations.len(),
        elapsed_ms(started),
    );
    print_json(&recommendations)
}

/// Rank opening poses
pub fn start(snapshot: &PracticeSnapshot, limit: Option<usize>) -> AppResult<()> {
    let recommender = SequenceRecommender::new();
    let limit = limit.unwrap_or_else(|| recommender.default_limit());
    let started = Instant::now();
    let recommendations = recommender.recommend_start(&snapshot.catalog, limit);
    EngineLogger::log_engine_run(
        "sequence_start",
        snapshot.catalog.len(),
        recommendations.len(),
        elapsed_ms(started),
    );
    print_json(&recommendations)
}

/// Rank cool-down poses after the session's last pose
pub fn cooldown(
    snapshot: &PracticeSnapshot,
    session: &[String],
    limit: Option<usize>,
) -> AppResult<()> {
    let session_poses = snapshot.resolve_ids(session)?;
    let recommender = SequenceRecommender::new();
    let limit = limit.unwrap_or_else(|| recommender.default_limit());
    let started = Instant::now();
    let recommendations = recommender.recommend_cooldown(&snapshot.catalog, &session_poses, limit);
    EngineLogger::log_engine_run(
        "sequence_cooldown",
        snapshot.catalog.len(),
        recommendations.len(),
        elapsed_ms(started),
    );
    print_json(&recommendations)
}

/// Milliseconds since `started`
pub fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
