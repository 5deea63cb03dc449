// ABOUTME: Practice goal keywords and the pose traits each goal favors
// ABOUTME: Fixed keyword table matched against pose category and target-region tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::body_regions::normalize_tag;
use practice_core::models::{Pose, PoseCategory};

/// A goal and the categories or region fragments that serve it
struct GoalAffinity {
    keywords: &'static [&'static str],
    categories: &'static [PoseCategory],
    /// Substrings matched against normalized target-region tags
    region_fragments: &'static [&'static str],
}

const GOAL_AFFINITIES: &[GoalAffinity] = &[
    GoalAffinity {
        keywords: &["flexibility"],
        categories: &[PoseCategory::ForwardBend],
        region_fragments: &["hamstring", "hip"],
    },
    GoalAffinity {
        keywords: &["strength"],
        categories: &[PoseCategory::Standing, PoseCategory::Balance],
        region_fragments: &["core", "arm", "shoulder", "glute", "quad"],
    },
    GoalAffinity {
        keywords: &["balance"],
        categories: &[PoseCategory::Balance],
        region_fragments: &["ankle", "feet", "foot"],
    },
    GoalAffinity {
        keywords: &["relaxation", "stress_relief", "calm"],
        categories: &[PoseCategory::Supine, PoseCategory::ForwardBend],
        region_fragments: &[],
    },
    GoalAffinity {
        keywords: &["back_health", "back_pain", "posture"],
        categories: &[PoseCategory::BackBend, PoseCategory::Twist],
        region_fragments: &["back", "spine"],
    },
    GoalAffinity {
        keywords: &["energy"],
        categories: &[PoseCategory::BackBend, PoseCategory::Standing],
        region_fragments: &[],
    },
    GoalAffinity {
        keywords: &["core"],
        categories: &[],
        region_fragments: &["core", "abs", "abdominal", "oblique"],
    },
    GoalAffinity {
        keywords: &["hips", "hip_opening"],
        categories: &[],
        region_fragments: &["hip", "groin", "glute"],
    },
];

impl GoalAffinity {
    fn serves(&self, pose: &Pose) -> bool {
        self.categories.contains(&pose.category)
            || pose.target_regions.iter().any(|tag| {
                let tag = normalize_tag(tag);
                self.region_fragments
                    .iter()
                    .any(|fragment| tag.contains(fragment))
            })
    }
}

/// First user goal the pose serves, if any; unknown goal keywords are ignored
#[must_use]
pub fn matching_goal<'g, S: AsRef<str>>(goals: &'g [S], pose: &Pose) -> Option<&'g str> {
    goals.iter().map(|goal| goal.as_ref()).find(|goal| {
        let keyword = normalize_tag(goal);
        GOAL_AFFINITIES
            .iter()
            .filter(|affinity| affinity.keywords.contains(&keyword.as_str()))
            .any(|affinity| affinity.serves(pose))
    })
}
