// ABOUTME: Practice personalization engines: sequence scoring, body focus, and recovery analysis
// ABOUTME: Pure, stateless functions over a caller-supplied catalog and history snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Practice Intelligence
//!
//! Three sibling engines sharing only fixed, read-only tables:
//!
//! - [`SequenceRecommender`] ranks catalog poses for the next slot of a
//!   practice, from category flow, difficulty progression, variety, and goals.
//! - [`BodyFocusAggregator`] turns per-pose history into per-region coverage
//!   over the 16-region [`BodyRegionTaxonomy`].
//! - [`RecoveryAnalyzer`] scores recent practice load and recommends rest or
//!   recovery using the coarser [`RecoveryRegion`] vocabulary.
//!
//! None of the engines perform I/O or return errors. Data-quality gaps
//! (unknown region tags, unresolved pose names) are dropped, degenerate
//! input yields well-defined defaults, and out-of-range numbers are clamped.

/// Body focus aggregation over canonical regions
pub mod body_map;

/// Canonical body-region taxonomy and tag normalization
pub mod body_regions;

/// Category flow matrix and intensity weights
pub mod category_affinity;

/// Tunable engine configuration
pub mod config;

/// Goal keyword to pose trait table
pub mod goals;

/// Practice load analysis and recovery recommendation
pub mod recovery_analyzer;

/// Flat region vocabulary and counter-pose lists used for recovery
pub mod recovery_regions;

/// Next-pose recommendation scoring
pub mod sequence_recommender;

pub use body_map::{BodyFocusAggregator, BodyMapReport, PoseContribution, RegionFocus};
pub use body_regions::{BodyRegionTaxonomy, BodySide, BodyZone, CanonicalRegion};
pub use config::{ConfigError, PersonalizationConfig};
pub use recovery_analyzer::{
    PracticeAnalysis, RecoveryAnalyzer, RecoveryRecommendation, RecoveryType, RegionActivity,
};
pub use recovery_regions::RecoveryRegion;
pub use sequence_recommender::{Recommendation, ScoreBreakdown, SequenceRecommender, SessionContext};
