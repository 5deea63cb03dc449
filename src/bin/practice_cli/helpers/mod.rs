// ABOUTME: Helper modules for practice-cli
// ABOUTME: Output formatting shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod display;
