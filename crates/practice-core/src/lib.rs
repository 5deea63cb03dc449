// ABOUTME: Core types and constants for the practice personalization engine
// ABOUTME: Foundation crate with error handling, data models, and fixed constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Practice Core
//!
//! Foundation crate shared by the personalization engines and the outer
//! application layer. It changes infrequently, so the engine crate and the
//! root package can compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the serializable error response
//! - **constants**: difficulty scale, sentinels, intensity heuristic coefficients
//! - **models**: `Pose`, `PoseCategory`, `PoseHistoryRecord`, `PracticeLog`

/// Unified error handling with standard error codes
pub mod errors;

/// Fixed constants organized by domain
pub mod constants;

/// Pose catalog and practice history models
pub mod models;
