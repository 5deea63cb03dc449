// ABOUTME: Re-exports command modules for practice-cli
// ABOUTME: Provides sequence recommendation and practice analysis commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod analysis;
pub mod sequence;
