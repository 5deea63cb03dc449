// ABOUTME: Practice CLI - command-line front end for the personalization engines
// ABOUTME: Loads a practice snapshot and prints recommendations and analyses as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//!
//! Usage:
//! ```bash
//! # Next pose after Warrior II, a third of the way through the session
//! practice-cli --snapshot practice.json next --current "Warrior II" --session "Mountain,Warrior II" --progress 0.3
//!
//! # Opening poses
//! practice-cli --snapshot practice.json start --limit 3
//!
//! # Cool-down after the last pose of the session
//! practice-cli --snapshot practice.json cooldown --session "Mountain,Camel"
//!
//! # Body focus over the last 30 days
//! practice-cli --snapshot practice.json body-map --window-days 30
//!
//! # Rest or recovery recommendation for the last week
//! practice-cli --snapshot practice.json recovery
//! ```

mod commands;
mod helpers;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use practice_personalization::constants::time_periods::{
    DEFAULT_BODY_MAP_WINDOW_DAYS, RECOVERY_WINDOW_DAYS,
};
use practice_personalization::errors::AppResult;
use practice_personalization::logging::LoggingConfig;
use practice_personalization::snapshot::PracticeSnapshot;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "practice-cli",
    about = "Practice personalization CLI",
    long_about = "Rank next poses, map body focus, and recommend recovery from a JSON practice snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Practice snapshot file (JSON with catalog, history, and logs)
    #[arg(long, global = true, default_value = "practice.json")]
    snapshot: PathBuf,

    /// Analysis time in RFC 3339 (defaults to now)
    #[arg(long, global = true)]
    as_of: Option<DateTime<Utc>>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank poses to follow the current one
    Next {
        /// Current pose, by id or name
        #[arg(long)]
        current: Option<String>,

        /// Poses practiced so far this session, comma-separated
        #[arg(long, value_delimiter = ',')]
        session: Vec<String>,

        /// Fraction of the session completed (0.0-1.0)
        #[arg(long, default_value = "0.0")]
        progress: f64,

        /// Practice goals, comma-separated (e.g. flexibility,strength)
        #[arg(long, value_delimiter = ',')]
        goals: Vec<String>,

        /// Number of recommendations
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rank opening poses
    Start {
        /// Number of recommendations
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rank cool-down poses after the session's last pose
    Cooldown {
        /// Poses practiced this session, comma-separated
        #[arg(long, value_delimiter = ',')]
        session: Vec<String>,

        /// Number of recommendations
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Per-region body focus report
    BodyMap {
        /// Days of history to include
        #[arg(long, default_value_t = DEFAULT_BODY_MAP_WINDOW_DAYS)]
        window_days: u32,
    },

    /// Practice load analysis and recovery recommendation
    Recovery {
        /// Days of logs to include
        #[arg(long, default_value_t = RECOVERY_WINDOW_DAYS)]
        days: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            helpers::display::print_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let snapshot = PracticeSnapshot::from_path(&cli.snapshot)?;
    let as_of = cli.as_of.unwrap_or_else(Utc::now);
    debug!(as_of = %as_of, "Running practice command");

    match cli.command {
        Command::Next {
            current,
            session,
            progress,
            goals,
            limit,
        } => commands::sequence::next(
            &snapshot,
            current.as_deref(),
            &session,
            progress,
            goals,
            limit,
        ),
        Command::Start { limit } => commands::sequence::start(&snapshot, limit),
        Command::Cooldown { session, limit } => {
            commands::sequence::cooldown(&snapshot, &session, limit)
        }
        Command::BodyMap { window_days } => {
            commands::analysis::body_map(&snapshot, window_days, as_of)
        }
        Command::Recovery { days } => commands::analysis::recovery(&snapshot, days, as_of),
    }
}
