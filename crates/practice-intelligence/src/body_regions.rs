// ABOUTME: Canonical body-region taxonomy used for coverage reporting
// ABOUTME: Normalizes free-text pose region tags into 16 canonical regions with side and zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Body-Region Taxonomy
//!
//! Poses carry free-text target-region tags entered by hand ("Hip Flexors",
//! "back", "quads"). This module normalizes a tag (lowercase, every
//! non-alphanumeric character replaced by `_`) and maps it to zero or more
//! of 16 canonical regions. Unmapped tags resolve to nothing; they are a
//! tolerated data-quality gap, not an error.
//!
//! A tag may fan out: `back` maps to both `upper_back` and `lower_back`.
//! Consumers credit the full weight to every mapped region.
//!
//! This taxonomy is independent of the flat vocabulary in
//! [`crate::recovery_regions`]; the two serve different purposes and are not
//! reconciled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Canonical body region used by the body focus report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalRegion {
    /// Neck
    Neck,
    /// Shoulders and rotator cuff
    Shoulders,
    /// Chest
    Chest,
    /// Upper back
    UpperBack,
    /// Arms
    Arms,
    /// Wrists
    Wrists,
    /// Abdominals and obliques
    Core,
    /// Lower back
    LowerBack,
    /// Spine
    Spine,
    /// Hips and hip flexors
    Hips,
    /// Glutes
    Glutes,
    /// Hamstrings
    Hamstrings,
    /// Quadriceps
    Quadriceps,
    /// Calves
    Calves,
    /// Ankles
    Ankles,
    /// Feet
    Feet,
}

/// Which side of the body a region sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    /// Front of the body
    Front,
    /// Back of the body
    Back,
    /// Spans both sides; counted half to each
    Both,
}

/// Vertical zone of a region, used for upper/lower balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyZone {
    /// Above the trunk
    Upper,
    /// Trunk; counted toward neither upper nor lower
    Core,
    /// Pelvis and below
    Lower,
}

impl CanonicalRegion {
    /// Every canonical region, in report order
    pub const ALL: [Self; 16] = [
        Self::Neck,
        Self::Shoulders,
        Self::Chest,
        Self::UpperBack,
        Self::Arms,
        Self::Wrists,
        Self::Core,
        Self::LowerBack,
        Self::Spine,
        Self::Hips,
        Self::Glutes,
        Self::Hamstrings,
        Self::Quadriceps,
        Self::Calves,
        Self::Ankles,
        Self::Feet,
    ];

    /// Identifier used in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::Shoulders => "shoulders",
            Self::Chest => "chest",
            Self::UpperBack => "upper_back",
            Self::Arms => "arms",
            Self::Wrists => "wrists",
            Self::Core => "core",
            Self::LowerBack => "lower_back",
            Self::Spine => "spine",
            Self::Hips => "hips",
            Self::Glutes => "glutes",
            Self::Hamstrings => "hamstrings",
            Self::Quadriceps => "quadriceps",
            Self::Calves => "calves",
            Self::Ankles => "ankles",
            Self::Feet => "feet",
        }
    }

    /// Human-readable label for generated text
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Side of the body this region belongs to
    #[must_use]
    pub const fn side(&self) -> BodySide {
        match self {
            Self::Chest | Self::Wrists | Self::Core | Self::Quadriceps => BodySide::Front,
            Self::UpperBack
            | Self::LowerBack
            | Self::Spine
            | Self::Glutes
            | Self::Hamstrings
            | Self::Calves => BodySide::Back,
            Self::Neck | Self::Shoulders | Self::Arms | Self::Hips | Self::Ankles | Self::Feet => {
                BodySide::Both
            }
        }
    }

    /// Vertical zone of this region
    #[must_use]
    pub const fn zone(&self) -> BodyZone {
        match self {
            Self::Neck
            | Self::Shoulders
            | Self::Chest
            | Self::UpperBack
            | Self::Arms
            | Self::Wrists => BodyZone::Upper,
            Self::Core | Self::LowerBack | Self::Spine => BodyZone::Core,
            Self::Hips
            | Self::Glutes
            | Self::Hamstrings
            | Self::Quadriceps
            | Self::Calves
            | Self::Ankles
            | Self::Feet => BodyZone::Lower,
        }
    }
}

impl fmt::Display for CanonicalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a free-text tag: lowercase, non-alphanumeric characters become `_`
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

use CanonicalRegion as R;

/// Normalized tag to canonical regions
const REGION_TAG_MAPPINGS: &[(&str, &[CanonicalRegion])] = &[
    ("neck", &[R::Neck]),
    ("shoulders", &[R::Shoulders]),
    ("shoulder", &[R::Shoulders]),
    ("deltoids", &[R::Shoulders]),
    ("rotator_cuff", &[R::Shoulders]),
    ("chest", &[R::Chest]),
    ("pectorals", &[R::Chest]),
    ("pecs", &[R::Chest]),
    ("upper_back", &[R::UpperBack]),
    ("lats", &[R::UpperBack]),
    ("rhomboids", &[R::UpperBack]),
    ("trapezius", &[R::UpperBack]),
    ("traps", &[R::UpperBack]),
    ("back", &[R::UpperBack, R::LowerBack]),
    ("lower_back", &[R::LowerBack]),
    ("spine", &[R::Spine]),
    ("arms", &[R::Arms]),
    ("arm", &[R::Arms]),
    ("biceps", &[R::Arms]),
    ("triceps", &[R::Arms]),
    ("forearms", &[R::Arms]),
    ("wrists", &[R::Wrists]),
    ("wrist", &[R::Wrists]),
    ("core", &[R::Core]),
    ("abs", &[R::Core]),
    ("abdominals", &[R::Core]),
    ("obliques", &[R::Core]),
    ("side_body", &[R::Core]),
    ("hips", &[R::Hips]),
    ("hip", &[R::Hips]),
    ("hip_flexors", &[R::Hips]),
    ("psoas", &[R::Hips]),
    ("groin", &[R::Hips]),
    ("inner_thighs", &[R::Hips]),
    ("adductors", &[R::Hips]),
    ("pelvis", &[R::Hips]),
    ("glutes", &[R::Glutes]),
    ("gluteus", &[R::Glutes]),
    ("buttocks", &[R::Glutes]),
    ("hamstrings", &[R::Hamstrings]),
    ("hamstring", &[R::Hamstrings]),
    ("quadriceps", &[R::Quadriceps]),
    ("quads", &[R::Quadriceps]),
    ("quad", &[R::Quadriceps]),
    ("thighs", &[R::Quadriceps, R::Hamstrings]),
    ("legs", &[R::Quadriceps, R::Hamstrings, R::Calves]),
    ("calves", &[R::Calves]),
    ("calf", &[R::Calves]),
    ("ankles", &[R::Ankles]),
    ("ankle", &[R::Ankles]),
    ("feet", &[R::Feet]),
    ("foot", &[R::Feet]),
    (
        "full_body",
        &[R::Shoulders, R::Core, R::Hips, R::Hamstrings, R::Quadriceps],
    ),
];

/// Lookup table from normalized tags to canonical regions
#[derive(Debug, Clone)]
pub struct BodyRegionTaxonomy {
    mappings: HashMap<&'static str, &'static [CanonicalRegion]>,
}

impl BodyRegionTaxonomy {
    /// The built-in taxonomy, initialized once per process
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<BodyRegionTaxonomy> = OnceLock::new();
        STANDARD.get_or_init(|| Self::from_mappings(REGION_TAG_MAPPINGS))
    }

    /// Build a taxonomy from `(normalized tag, regions)` pairs
    #[must_use]
    pub fn from_mappings(mappings: &'static [(&'static str, &'static [CanonicalRegion])]) -> Self {
        Self {
            mappings: mappings.iter().copied().collect(),
        }
    }

    /// Canonical regions for one free-text tag; empty when unmapped
    #[must_use]
    pub fn regions_for_tag(&self, tag: &str) -> &'static [CanonicalRegion] {
        self.mappings
            .get(normalize_tag(tag).as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Distinct canonical regions for a list of tags, in first-seen order
    ///
    /// A region reached through several tags of the same pose is listed once.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S]) -> Vec<CanonicalRegion> {
        let mut regions = Vec::new();
        for tag in tags {
            for region in self.regions_for_tag(tag.as_ref()) {
                if !regions.contains(region) {
                    regions.push(*region);
                }
            }
        }
        regions
    }
}
