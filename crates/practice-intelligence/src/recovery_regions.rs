// ABOUTME: Flat region vocabulary used by the recovery analyzer
// ABOUTME: Maps pose region tags to coarse recovery regions and their counter-pose lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recovery Region Vocabulary
//!
//! A coarser vocabulary than [`crate::body_regions`]: nine regions chosen for
//! counter-pose lookup rather than coverage reporting. Tags are normalized
//! with the same rule as the body taxonomy; tags outside this vocabulary are
//! dropped.

use crate::body_regions::normalize_tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region in the recovery vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryRegion {
    /// Whole back and spine
    Back,
    /// Hips, glutes, groin
    Hips,
    /// Hamstrings
    Hamstrings,
    /// Quads, calves, ankles
    Legs,
    /// Shoulders and arms
    Shoulders,
    /// Abdominals
    Core,
    /// Neck
    Neck,
    /// Wrists
    Wrists,
    /// Chest
    Chest,
}

impl RecoveryRegion {
    /// Identifier used in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Hips => "hips",
            Self::Hamstrings => "hamstrings",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Core => "core",
            Self::Neck => "neck",
            Self::Wrists => "wrists",
            Self::Chest => "chest",
        }
    }

    /// Map one free-text tag into the vocabulary
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let region = match normalize_tag(tag).as_str() {
            "back" | "upper_back" | "lower_back" | "spine" | "lats" => Self::Back,
            "hips" | "hip" | "hip_flexors" | "glutes" | "groin" | "psoas" | "inner_thighs" => {
                Self::Hips
            }
            "hamstrings" | "hamstring" => Self::Hamstrings,
            "legs" | "quads" | "quadriceps" | "thighs" | "calves" | "ankles" | "feet" => {
                Self::Legs
            }
            "shoulders" | "shoulder" | "arms" | "triceps" | "biceps" => Self::Shoulders,
            "core" | "abs" | "abdominals" | "obliques" => Self::Core,
            "neck" => Self::Neck,
            "wrists" | "wrist" => Self::Wrists,
            "chest" | "pecs" => Self::Chest,
            _ => return None,
        };
        Some(region)
    }

    /// Poses that relieve this region, in preference order
    #[must_use]
    pub const fn counter_poses(&self) -> &'static [&'static str] {
        match self {
            Self::Back => &["Child's Pose", "Supine Spinal Twist", "Cat-Cow"],
            Self::Hips => &["Reclined Bound Angle", "Happy Baby", "Supported Pigeon"],
            Self::Hamstrings => &["Legs Up the Wall", "Reclined Hand-to-Big-Toe", "Child's Pose"],
            Self::Legs => &["Legs Up the Wall", "Supported Bridge", "Reclined Bound Angle"],
            Self::Shoulders => &["Thread the Needle", "Puppy Pose", "Eagle Arms"],
            Self::Core => &["Supported Bridge", "Supine Spinal Twist", "Savasana"],
            Self::Neck => &["Seated Neck Release", "Child's Pose", "Savasana"],
            Self::Wrists => &["Wrist Release", "Seated Forward Fold", "Savasana"],
            Self::Chest => &["Supported Fish", "Child's Pose", "Thread the Needle"],
        }
    }
}

impl fmt::Display for RecoveryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General restorative poses used to fill a recovery suggestion
pub const GENERAL_RESTORATIVE_POSES: &[&str] = &[
    "Child's Pose",
    "Legs Up the Wall",
    "Supported Bridge",
    "Reclined Bound Angle",
    "Supine Spinal Twist",
    "Seated Forward Fold",
    "Happy Baby",
    "Cat-Cow",
    "Savasana",
];
