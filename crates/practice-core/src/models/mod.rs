// ABOUTME: Core data models for the pose catalog and practice history
// ABOUTME: Re-exports pose and history types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Practice history and session logs
pub mod history;
/// Pose catalog model
pub mod pose;

pub use history::{PoseHistoryRecord, PracticeLog};
pub use pose::{Pose, PoseCategory, PoseId};
