// ABOUTME: Main library entry point for the practice personalization engine
// ABOUTME: Re-exports the engine crates and owns logging and the practice snapshot loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Practice Personalization
//!
//! Personalization for a yoga practice: what pose comes next, which parts of
//! the body a practitioner has been working, and whether it is time to rest.
//!
//! ## Architecture
//!
//! - **`practice_core`**: pose catalog and history models, error codes, constants
//! - **`practice_intelligence`**: the sequence, body focus, and recovery engines
//! - **snapshot**: JSON snapshot loading and caller-side window filtering
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use practice_personalization::errors::AppResult;
//! use practice_personalization::intelligence::RecoveryAnalyzer;
//! use practice_personalization::snapshot::PracticeSnapshot;
//!
//! fn main() -> AppResult<()> {
//!     let snapshot = PracticeSnapshot::from_path("practice.json")?;
//!     let now = Utc::now();
//!     let analyzer = RecoveryAnalyzer::new();
//!     let analysis = analyzer.analyze(&snapshot.logs_within(7, now), &snapshot.catalog, now);
//!     println!("{:?}", analyzer.recommend_recovery(&analysis).recovery_type);
//!     Ok(())
//! }
//! ```

/// Structured logging setup
pub mod logging;

/// Practice snapshot loading and window filtering
pub mod snapshot;

/// Unified error handling from the core crate
pub use practice_core::errors;

/// Pose catalog and history models
pub use practice_core::models;

/// Fixed engine constants
pub use practice_core::constants;

/// Personalization engines and their configuration
pub use practice_intelligence as intelligence;
