// ABOUTME: Output formatting helpers for practice-cli
// ABOUTME: Pretty JSON on stdout; logs stay on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use practice_personalization::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a result record as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Report a failed command on stderr as a JSON error document
pub fn print_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(e) => eprintln!("{}: {e}", response.error.message),
    }
}
