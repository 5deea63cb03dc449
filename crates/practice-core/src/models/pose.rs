// ABOUTME: Pose catalog model with categories, difficulty, and free-text target regions
// ABOUTME: Reference data supplied read-only by the catalog collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::difficulty::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseId(pub u32);

impl fmt::Display for PoseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PoseId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Category of pose
///
/// Declaration order is significant: it indexes the category affinity matrix
/// and the intensity weight table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoseCategory {
    /// Standing poses for strength and grounding
    #[default]
    Standing,
    /// Seated poses for hip opening and forward folds
    Seated,
    /// Lying face-down
    Prone,
    /// Lying face-up
    Supine,
    /// Head below heart
    Inversion,
    /// Single-leg or arm balance poses
    Balance,
    /// Spinal rotation poses
    Twist,
    /// Forward folds
    ForwardBend,
    /// Spinal extension poses
    BackBend,
}

impl PoseCategory {
    /// Every category, in index order
    pub const ALL: [Self; 9] = [
        Self::Standing,
        Self::Seated,
        Self::Prone,
        Self::Supine,
        Self::Inversion,
        Self::Balance,
        Self::Twist,
        Self::ForwardBend,
        Self::BackBend,
    ];

    /// Position of this category in fixed lookup tables
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standing => "STANDING",
            Self::Seated => "SEATED",
            Self::Prone => "PRONE",
            Self::Supine => "SUPINE",
            Self::Inversion => "INVERSION",
            Self::Balance => "BALANCE",
            Self::Twist => "TWIST",
            Self::ForwardBend => "FORWARD_BEND",
            Self::BackBend => "BACK_BEND",
        }
    }

    /// Parse a category label leniently (`forward_bend`, `Forward Bend`, `FORWARD-BEND`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }
}

impl fmt::Display for PoseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pose in the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Catalog identifier
    pub id: PoseId,
    /// English name of the pose
    pub english_name: String,
    /// Sanskrit name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanskrit_name: Option<String>,
    /// Category of pose
    pub category: PoseCategory,
    /// Difficulty on the 1-10 scale
    pub difficulty: u8,
    /// Free-text body regions the pose works
    #[serde(default)]
    pub target_regions: Vec<String>,
}

impl Pose {
    /// Create a pose without target regions or a Sanskrit name
    #[must_use]
    pub fn new(
        id: impl Into<PoseId>,
        english_name: impl Into<String>,
        category: PoseCategory,
        difficulty: u8,
    ) -> Self {
        Self {
            id: id.into(),
            english_name: english_name.into(),
            sanskrit_name: None,
            category,
            difficulty,
            target_regions: Vec::new(),
        }
    }

    /// Set the target regions
    #[must_use]
    pub fn with_target_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the Sanskrit name
    #[must_use]
    pub fn with_sanskrit_name(mut self, name: impl Into<String>) -> Self {
        self.sanskrit_name = Some(name.into());
        self
    }

    /// Difficulty clamped into the catalog scale
    #[must_use]
    pub fn clamped_difficulty(&self) -> u8 {
        self.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
    }

    /// Whether `reference` names this pose, by id or by either name, ignoring case
    #[must_use]
    pub fn matches_reference(&self, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }
        if reference == self.id.to_string() {
            return true;
        }
        let reference = reference.to_lowercase();
        reference == self.english_name.to_lowercase()
            || self
                .sanskrit_name
                .as_deref()
                .is_some_and(|name| reference == name.to_lowercase())
    }
}
