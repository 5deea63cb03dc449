// ABOUTME: Practice analysis commands for practice-cli
// ABOUTME: Body focus report and recovery recommendation over snapshot windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::sequence::elapsed_ms;
use crate::helpers::display::print_json;
use chrono::{DateTime, Utc};
use practice_personalization::errors::AppResult;
use practice_personalization::intelligence::{
    BodyFocusAggregator, PracticeAnalysis, RecoveryAnalyzer, RecoveryRecommendation,
};
use practice_personalization::logging::EngineLogger;
use practice_personalization::snapshot::PracticeSnapshot;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
struct RecoveryReport {
    analysis: PracticeAnalysis,
    recommendation: RecoveryRecommendation,
}

/// Print the body focus report for the last `window_days`
pub fn body_map(
    snapshot: &PracticeSnapshot,
    window_days: u32,
    as_of: DateTime<Utc>,
) -> AppResult<()> {
    let records = snapshot.history_within(window_days, as_of);
    let started = Instant::now();
    let report = BodyFocusAggregator::new().analyze_body_map(&records, window_days);
    EngineLogger::log_engine_run(
        "body_map",
        records.len(),
        report.recommendations.len(),
        elapsed_ms(started),
    );
    print_json(&report)
}

/// Print the practice analysis and recovery recommendation for the last `days`
pub fn recovery(snapshot: &PracticeSnapshot, days: u32, as_of: DateTime<Utc>) -> AppResult<()> {
    let logs = snapshot.logs_within(days, as_of);
    let analyzer = RecoveryAnalyzer::new();
    let started = Instant::now();
    let analysis = analyzer.analyze(&logs, &snapshot.catalog, as_of);
    let recommendation = analyzer.recommend_recovery(&analysis);
    EngineLogger::log_engine_run(
        "recovery",
        logs.len(),
        recommendation.suggested_poses.len(),
        elapsed_ms(started),
    );
    print_json(&RecoveryReport {
        analysis,
        recommendation,
    })
}
