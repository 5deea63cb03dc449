// ABOUTME: Category affinity model: transition quality between pose categories
// ABOUTME: Fixed asymmetric flow matrix and per-category intensity weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Category Affinity Model
//!
//! Two fixed tables indexed by [`PoseCategory::index`]:
//!
//! - the flow matrix, read as `FLOW_AFFINITY[from][to]`, scoring in 0.0-1.0
//!   how naturally a candidate category follows the current one. It is not
//!   symmetric: coming down from an inversion into a forward bend flows well,
//!   jumping from standing straight into an inversion does not.
//! - the intensity weight of each category (1 = restful, 4 = demanding),
//!   used as the per-pose load by the recovery analyzer.

use practice_core::models::PoseCategory;

/// Rows are the current category, columns the candidate category.
///
/// Column order: STANDING, SEATED, PRONE, SUPINE, INVERSION, BALANCE, TWIST,
/// FORWARD_BEND, BACK_BEND.
const FLOW_AFFINITY: [[f64; 9]; 9] = [
    // STANDING
    [1.0, 0.6, 0.4, 0.3, 0.25, 1.0, 1.0, 1.0, 0.7],
    // SEATED
    [0.4, 1.0, 0.6, 0.8, 0.3, 0.3, 1.0, 1.0, 0.5],
    // PRONE
    [0.3, 0.7, 1.0, 0.6, 0.4, 0.3, 0.6, 0.7, 1.0],
    // SUPINE
    [0.2, 0.7, 0.5, 1.0, 0.6, 0.2, 1.0, 0.6, 0.8],
    // INVERSION
    [0.5, 0.7, 0.5, 0.8, 0.6, 0.4, 0.5, 0.9, 0.5],
    // BALANCE
    [1.0, 0.4, 0.3, 0.3, 0.4, 0.8, 0.7, 0.8, 0.6],
    // TWIST
    [0.7, 0.8, 0.5, 0.7, 0.3, 0.6, 0.6, 1.0, 0.6],
    // FORWARD_BEND
    [0.8, 0.8, 0.5, 0.7, 0.7, 0.6, 0.9, 0.7, 0.6],
    // BACK_BEND
    [0.5, 0.6, 0.8, 0.7, 0.4, 0.4, 0.9, 1.0, 0.7],
];

/// Load contributed by one pose of each category, in category index order
const INTENSITY_WEIGHTS: [u32; 9] = [3, 2, 2, 1, 4, 4, 2, 2, 4];

/// How well `to` follows `from` in a sequence (0.0-1.0)
#[must_use]
pub const fn flow_affinity(from: PoseCategory, to: PoseCategory) -> f64 {
    FLOW_AFFINITY[from.index()][to.index()]
}

/// Intensity weight of a category (1-4)
#[must_use]
pub const fn intensity_weight(category: PoseCategory) -> u32 {
    INTENSITY_WEIGHTS[category.index()]
}

/// Categories that receive the opening bonus when a practice has no current pose
#[must_use]
pub const fn is_opening_category(category: PoseCategory) -> bool {
    matches!(category, PoseCategory::Standing | PoseCategory::Seated)
}

/// Categories eligible for a cool-down recommendation
#[must_use]
pub const fn is_cooldown_category(category: PoseCategory) -> bool {
    matches!(
        category,
        PoseCategory::Supine | PoseCategory::Seated | PoseCategory::ForwardBend
    )
}
