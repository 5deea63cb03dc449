// ABOUTME: End-to-end tests running all three engines over the bundled demo snapshot
// ABOUTME: Snapshot loading, window filtering, engine outputs, and JSON serialization together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use chrono::{DateTime, TimeZone, Utc};
use practice_personalization::intelligence::config::{
    BodyMapConfig, RecoveryConfig, SequenceScoringConfig,
};
use practice_personalization::intelligence::{
    BodyFocusAggregator, CanonicalRegion, RecoveryAnalyzer, RecoveryRegion, RecoveryType,
    SequenceRecommender, SessionContext,
};
use practice_personalization::models::PoseId;
use practice_personalization::snapshot::PracticeSnapshot;
use std::path::PathBuf;

fn demo_snapshot() -> PracticeSnapshot {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/practice.json");
    PracticeSnapshot::from_path(path).unwrap()
}

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
}

#[test]
fn test_next_pose_over_demo_catalog() {
    let snapshot = demo_snapshot();
    let current = snapshot.pose_by_reference("Warrior II").cloned().unwrap();
    let context = SessionContext::after(current)
        .with_session_poses(snapshot.resolve_ids(&["Mountain", "Warrior II"]).unwrap())
        .with_progress(0.3)
        .with_goals(["flexibility"]);

    let recommender = SequenceRecommender::with_config(SequenceScoringConfig::default());
    let recommendations = recommender.recommend(&snapshot.catalog, &context, 5);

    assert_eq!(recommendations.len(), 5);
    assert!(recommendations.iter().all(|rec| rec.pose.id != PoseId(4)));
    assert!(recommendations.iter().all(|rec| rec.reasons.len() <= 2));

    let json = serde_json::to_value(&recommendations).unwrap();
    assert!(json[0]["pose"]["category"].is_string());
    assert!(json[0]["breakdown"]["flow"].is_number());
}

#[test]
fn test_body_map_over_demo_window() {
    let snapshot = demo_snapshot();
    let records = snapshot.history_within(30, as_of());
    assert_eq!(records.len(), 3);

    let report = BodyFocusAggregator::with_config(BodyMapConfig::default())
        .analyze_body_map(&records, 30);

    assert_eq!(report.total_practices, 26);
    let hamstrings = report.region(CanonicalRegion::Hamstrings).unwrap();
    assert_eq!(hamstrings.count, 23);
    assert_eq!(hamstrings.intensity, 100);
    let hips = report.region(CanonicalRegion::Hips).unwrap();
    assert_eq!(hips.count, 17);
    let contributors: Vec<PoseId> = hips.top_poses.iter().map(|p| p.pose_id).collect();
    assert_eq!(contributors, vec![PoseId(3), PoseId(8)]);
    assert!(report.recommendations.len() <= 3);
}

#[test]
fn test_recovery_over_demo_week() {
    let snapshot = demo_snapshot();
    let logs = snapshot.logs_within(7, as_of());
    assert_eq!(logs.len(), 3);

    let analyzer = RecoveryAnalyzer::with_config(RecoveryConfig::default());
    let analysis = analyzer.analyze(&logs, &snapshot.catalog, as_of());

    assert_eq!(analysis.total_sessions, 3);
    assert_eq!(analysis.total_load, 30);
    assert_eq!(analysis.days_since_last_practice, 1);
    assert_eq!(analysis.rest_reasons.len(), 1);
    assert!(!analysis.needs_rest);
    assert!((61..=70).contains(&analysis.intensity_score));

    let recommendation = analyzer.recommend_recovery(&analysis);
    assert_eq!(recommendation.recovery_type, RecoveryType::Restorative);
    assert_eq!(recommendation.suggested_duration_minutes, 25);
    assert_eq!(
        recommendation.avoid_areas,
        vec![RecoveryRegion::Hips, RecoveryRegion::Back, RecoveryRegion::Legs]
    );
    assert_eq!(
        recommendation.focus_areas,
        vec![
            RecoveryRegion::Hamstrings,
            RecoveryRegion::Shoulders,
            RecoveryRegion::Core
        ]
    );
    assert_eq!(recommendation.suggested_poses.len(), 8);
    assert_eq!(recommendation.suggested_poses[0], "Reclined Bound Angle");
}
