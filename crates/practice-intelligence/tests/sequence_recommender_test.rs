// ABOUTME: Integration tests for the sequence recommendation scorer
// ABOUTME: Ordering, limits, exclusions, cool-down filtering, flow bias, and goal affinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::cast_possible_truncation)]

use practice_core::models::{Pose, PoseCategory, PoseId};
use practice_intelligence::category_affinity::is_cooldown_category;
use practice_intelligence::config::SequenceScoringConfig;
use practice_intelligence::{Recommendation, SequenceRecommender, SessionContext};

fn recommender() -> SequenceRecommender {
    SequenceRecommender::with_config(SequenceScoringConfig::default())
}

fn flow_catalog() -> Vec<Pose> {
    vec![
        Pose::new(1, "Mountain", PoseCategory::Standing, 1),
        Pose::new(2, "Tree", PoseCategory::Balance, 2).with_target_regions(["ankles", "core"]),
        Pose::new(3, "Warrior I", PoseCategory::Standing, 2).with_target_regions(["hips", "legs"]),
        Pose::new(4, "Headstand", PoseCategory::Inversion, 5)
            .with_target_regions(["shoulders", "core"]),
    ]
}

fn full_catalog() -> Vec<Pose> {
    vec![
        Pose::new(1, "Mountain", PoseCategory::Standing, 1),
        Pose::new(2, "Easy Seat", PoseCategory::Seated, 1).with_target_regions(["hips"]),
        Pose::new(3, "Cobra", PoseCategory::Prone, 3).with_target_regions(["lower back", "chest"]),
        Pose::new(4, "Reclined Twist", PoseCategory::Supine, 1).with_target_regions(["spine"]),
        Pose::new(5, "Headstand", PoseCategory::Inversion, 7).with_target_regions(["shoulders"]),
        Pose::new(6, "Crow", PoseCategory::Balance, 6).with_target_regions(["wrists", "core"]),
        Pose::new(7, "Revolved Chair", PoseCategory::Twist, 5).with_target_regions(["core"]),
        Pose::new(8, "Seated Forward Fold", PoseCategory::ForwardBend, 2)
            .with_target_regions(["hamstrings"]),
        Pose::new(9, "Wheel", PoseCategory::BackBend, 8).with_target_regions(["chest", "spine"]),
        Pose::new(10, "Savasana", PoseCategory::Supine, 1),
        Pose::new(11, "Bound Angle", PoseCategory::Seated, 2).with_target_regions(["hips"]),
        Pose::new(12, "Warrior II", PoseCategory::Standing, 3).with_target_regions(["legs"]),
    ]
}

fn score_of(recommendations: &[Recommendation], id: u32) -> f64 {
    recommendations
        .iter()
        .find(|rec| rec.pose.id == PoseId(id))
        .map(|rec| rec.score)
        .unwrap()
}

fn assert_sorted(recommendations: &[Recommendation]) {
    for pair in recommendations.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.pose.id < b.pose.id),
            "{} ({}) must precede {} ({})",
            a.pose.english_name,
            a.score,
            b.pose.english_name,
            b.score
        );
    }
}

#[test]
fn test_flow_bias_prefers_standing_family_over_inversion() {
    let catalog = flow_catalog();
    let context = SessionContext::after(catalog[0].clone())
        .with_session_poses(vec![PoseId(1)])
        .with_progress(0.2);

    let recommendations = recommender().recommend(&catalog, &context, 5);

    let headstand = score_of(&recommendations, 4);
    assert!(score_of(&recommendations, 3) > headstand);
    assert!(score_of(&recommendations, 2) > headstand);
    let leaders: Vec<&str> = recommendations[..2]
        .iter()
        .map(|rec| rec.pose.english_name.as_str())
        .collect();
    assert_eq!(leaders, vec!["Tree", "Warrior I"]);
    assert_eq!(recommendations[0].score, 0.925);
    assert_eq!(recommendations[1].score, 0.925);
}

#[test]
fn test_properties_hold_across_contexts() {
    let catalog = full_catalog();
    let engine = recommender();

    for (index, current) in catalog.iter().enumerate() {
        let session: Vec<PoseId> = catalog[..=index].iter().map(|p| p.id).collect();
        for progress in [-0.5, 0.0, 0.3, 0.6, 0.9, 1.0, 2.0] {
            for limit in [0, 1, 3, 5, 20] {
                let context = SessionContext::after(current.clone())
                    .with_session_poses(session.clone())
                    .with_progress(progress)
                    .with_goals(["strength"]);

                let recommendations = engine.recommend(&catalog, &context, limit);

                assert!(recommendations.len() <= limit);
                assert!(recommendations.iter().all(|rec| rec.pose.id != current.id));
                for rec in &recommendations {
                    assert!((0.0..=1.0).contains(&rec.score));
                    assert!(rec.reasons.len() <= 2);
                }
                assert_sorted(&recommendations);
            }
        }
    }
}

#[test]
fn test_ties_break_by_ascending_id() {
    let catalog = vec![
        Pose::new(30, "Low Lunge C", PoseCategory::Standing, 2),
        Pose::new(10, "Low Lunge A", PoseCategory::Standing, 2),
        Pose::new(20, "Low Lunge B", PoseCategory::Standing, 2),
    ];
    let recommendations = recommender().recommend_start(&catalog, 3);

    let ids: Vec<PoseId> = recommendations.iter().map(|rec| rec.pose.id).collect();
    assert_eq!(ids, vec![PoseId(10), PoseId(20), PoseId(30)]);
}

#[test]
fn test_empty_catalog_and_current_only_catalog() {
    let engine = recommender();
    let mountain = Pose::new(1, "Mountain", PoseCategory::Standing, 1);

    assert!(engine.recommend(&[], &SessionContext::default(), 5).is_empty());
    let only_current = vec![mountain.clone()];
    assert!(engine
        .recommend(&only_current, &SessionContext::after(mountain), 5)
        .is_empty());
}

#[test]
fn test_start_favors_opening_categories_and_low_difficulty() {
    let recommendations = recommender().recommend_start(&full_catalog(), 3);

    assert_eq!(recommendations.len(), 3);
    for rec in &recommendations {
        assert!(matches!(
            rec.pose.category,
            PoseCategory::Standing | PoseCategory::Seated
        ));
        assert!(rec.breakdown.opening_bonus > 0.0);
    }
    assert_eq!(recommendations[0].pose.english_name, "Mountain");
}

#[test]
fn test_cooldown_only_gentle_categories_and_excludes_last_pose() {
    let catalog = full_catalog();
    let session = vec![PoseId(9), PoseId(4)];

    let recommendations = recommender().recommend_cooldown(&catalog, &session, 10);

    assert!(!recommendations.is_empty());
    for rec in &recommendations {
        assert!(rec.pose.difficulty <= 2);
        assert!(is_cooldown_category(rec.pose.category));
        assert_ne!(rec.pose.id, PoseId(4));
    }
    assert_sorted(&recommendations);
}

#[test]
fn test_cooldown_with_empty_session() {
    let recommendations = recommender().recommend_cooldown(&full_catalog(), &[], 10);
    let ids: Vec<PoseId> = recommendations.iter().map(|rec| rec.pose.id).collect();
    assert_eq!(ids.len(), 5);
    assert!(!ids.contains(&PoseId(1)));
    assert!(recommendations
        .iter()
        .all(|rec| rec.breakdown.opening_bonus == 0.0));
}

#[test]
fn test_cooldown_after_unknown_pose_skips_opening_bonus() {
    let engine = recommender();
    let catalog = full_catalog();

    let recommendations = engine.recommend_cooldown(&catalog, &[PoseId(99)], 10);

    assert_eq!(recommendations.len(), 5);
    assert!(recommendations
        .iter()
        .all(|rec| rec.breakdown.opening_bonus == 0.0));
    let start = engine.recommend_start(&catalog, 12);
    let seated_start = start.iter().find(|rec| rec.pose.id == PoseId(11)).unwrap();
    let seated_cooldown = recommendations
        .iter()
        .find(|rec| rec.pose.id == PoseId(11))
        .unwrap();
    assert!(seated_start.breakdown.opening_bonus > 0.0);
    assert!(seated_cooldown.score < seated_start.score);
}

#[test]
fn test_flexibility_goal_surfaces_matching_pose() {
    let catalog = full_catalog();
    let context = SessionContext::after(catalog[2].clone())
        .with_session_poses(vec![PoseId(3)])
        .with_progress(0.6)
        .with_goals(["flexibility"]);

    let recommendations = recommender().recommend(&catalog, &context, 5);

    let matched = recommendations.iter().find(|rec| {
        rec.pose.category == PoseCategory::ForwardBend
            || rec
                .pose
                .target_regions
                .iter()
                .any(|tag| tag.contains("hamstring") || tag.contains("hip"))
    });
    let matched = matched.expect("a flexibility pose should be recommended");
    assert_eq!(matched.breakdown.goal, 1.0);
    assert!(matched
        .reasons
        .iter()
        .any(|reason| reason == "Matches your flexibility goal"));
}

#[test]
fn test_recently_repeated_pose_is_penalized() {
    let catalog = full_catalog();
    let current = catalog[0].clone();
    let fresh = SessionContext::after(current.clone())
        .with_session_poses(vec![PoseId(1)])
        .with_progress(0.6);
    let repeated = SessionContext::after(current)
        .with_session_poses(vec![PoseId(12), PoseId(1)])
        .with_progress(0.6);

    let engine = recommender();
    let fresh_recs = engine.recommend(&catalog, &fresh, 20);
    let repeated_recs = engine.recommend(&catalog, &repeated, 20);

    let fresh_variety = fresh_recs.iter().find(|r| r.pose.id == PoseId(12)).unwrap();
    let repeated_variety = repeated_recs
        .iter()
        .find(|r| r.pose.id == PoseId(12))
        .unwrap();
    assert_eq!(fresh_variety.breakdown.variety, 1.0);
    assert!(repeated_variety.breakdown.variety < 0.5);
    assert!(repeated_variety.score < fresh_variety.score);
}

#[test]
fn test_late_session_targets_low_difficulty() {
    let catalog = full_catalog();
    let wheel = catalog[8].clone();
    let context = SessionContext::after(wheel)
        .with_session_poses(vec![PoseId(9)])
        .with_progress(0.95);

    let recommendations = recommender().recommend(&catalog, &context, 20);
    let savasana = recommendations
        .iter()
        .find(|rec| rec.pose.id == PoseId(10))
        .unwrap();
    let headstand = recommendations
        .iter()
        .find(|rec| rec.pose.id == PoseId(5))
        .unwrap();
    assert_eq!(savasana.breakdown.difficulty, 1.0);
    assert!(headstand.breakdown.difficulty < savasana.breakdown.difficulty);
}

#[test]
fn test_out_of_range_progress_is_clamped() {
    let catalog = full_catalog();
    let current = catalog[0].clone();
    let engine = recommender();

    let over = engine.recommend(
        &catalog,
        &SessionContext::after(current.clone()).with_progress(7.0),
        20,
    );
    let at_end = engine.recommend(
        &catalog,
        &SessionContext::after(current).with_progress(1.0),
        20,
    );
    assert_eq!(over, at_end);
}
