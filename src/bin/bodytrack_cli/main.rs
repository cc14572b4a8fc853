// ABOUTME: Bodytrack CLI - catalog listing, derived metrics, load suggestions and evolution
// ABOUTME: Reads profiles and assessments as JSON files and prints JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List measurement groups and their definitions
//! bodytrack-cli catalog
//!
//! # Derived metrics for one assessment
//! bodytrack-cli metrics --profile student.json --assessment assessment.json
//!
//! # Starting-load suggestion
//! bodytrack-cli load --weight 80 --tier intermediate --body-fat 30
//!
//! # Weight evolution over a history file
//! bodytrack-cli evolution --profile student.json --assessments history.json --metric weight
//!
//! # Evolution of a catalog measurement
//! bodytrack-cli evolution --profile student.json --assessments history.json \
//!     --metric measurement --group "Body Measurements" --measurement Waist
//! ```

mod commands;

use bodytrack::errors::AppResult;
use bodytrack::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "bodytrack-cli",
    about = "Bodytrack assessment CLI",
    long_about = "Inspect the measurement catalog and compute body-composition metrics, starting loads and trends from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the measurement catalog
    Catalog,

    /// Derived metrics (BMI, body fat, lean and fat mass) for one assessment
    Metrics {
        /// Student profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Assessment JSON file
        #[arg(long)]
        assessment: PathBuf,
    },

    /// Starting-load suggestion for a new exercise
    Load {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Experience tier (beginner, intermediate, advanced)
        #[arg(long)]
        tier: String,

        /// Body fat percentage (assumes the default when omitted)
        #[arg(long)]
        body_fat: Option<f64>,
    },

    /// Trend of one metric across a student's assessments
    Evolution {
        /// Student profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// JSON file holding an array of assessments
        #[arg(long)]
        assessments: PathBuf,

        /// weight, bmi, body_fat, lean_mass, fat_mass or measurement
        #[arg(long)]
        metric: String,

        /// Group name (with --metric measurement)
        #[arg(long)]
        group: Option<String>,

        /// Measurement name (with --metric measurement)
        #[arg(long)]
        measurement: Option<String>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging initialization failed: {e}");
    }

    let result = match cli.command {
        Command::Catalog => commands::catalog(),
        Command::Metrics {
            profile,
            assessment,
        } => commands::metrics(&profile, &assessment),
        Command::Load {
            weight,
            tier,
            body_fat,
        } => commands::load(weight, &tier, body_fat),
        Command::Evolution {
            profile,
            assessments,
            metric,
            group,
            measurement,
        } => commands::evolution(&profile, &assessments, &metric, group, measurement),
    };

    if let Err(ref e) = result {
        warn!(code = %e.code, "Command failed: {e}");
    }
    result
}
