// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable practice data generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common benchmark utilities and fixtures.

pub mod fixtures;
