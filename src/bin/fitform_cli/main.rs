// ABOUTME: fitform CLI - client assessment, lead export, and message templates
// ABOUTME: Parses arguments, initializes logging and config, dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors
//!
//! Usage:
//! ```bash
//! # Assess a client and print the estimates
//! fitform-cli assess --sex male --age 30 --height-cm 175 --weight-kg 70 \
//!     --activity moderate --goal lose
//!
//! # Include posture landmarks, write a report and store the lead
//! fitform-cli assess --sex female --age 41 --height-cm 162 --weight-kg 58 \
//!     --activity light --goal maintain --name "Aiko" --allergies "shrimp, nuts" \
//!     --landmarks pose.json --report exports/aiko.md --save
//!
//! # Export stored leads and assessments
//! fitform-cli export --leads exports/leads.csv --assessments exports/assessments.csv
//!
//! # Print the lead-to-booking message sequence
//! fitform-cli template --name Aiko
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitform::config::{AppConfig, EstimationConfig};
use fitform::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "fitform-cli",
    about = "Personal trainer client intake",
    long_about = "Computes BMR/TDEE/PFC estimates, screens posture landmarks, stores leads and exports reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute estimates for one client
    Assess(commands::assess::AssessArgs),

    /// Export stored leads and assessments as CSV or XLSX
    Export {
        /// Leads CSV path (defaults to <export dir>/leads.csv)
        #[arg(long)]
        leads: Option<PathBuf>,

        /// Assessments CSV path
        #[arg(long)]
        assessments: Option<PathBuf>,

        /// Workbook path with Leads and Assessments sheets
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Print or write the lead-to-booking message sequence
    Template {
        /// Client name to substitute
        #[arg(long, default_value = "")]
        name: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = AppConfig::from_env()?;
    let database_url = cli
        .database_url
        .unwrap_or_else(|| config.database.to_connection_string());
    debug!(environment = %config.environment, %database_url, "Configuration loaded");

    // Resolve estimation constants once, before any command runs
    let estimation = EstimationConfig::global();
    debug!(
        calorie_floor_kcal = estimation.goal_adjustment.calorie_floor_kcal,
        "Estimation config ready"
    );

    match cli.command {
        Command::Assess(args) => {
            commands::assess::run(&args, &database_url).await?;
        }
        Command::Export {
            leads,
            assessments,
            xlsx,
        } => {
            let leads = leads.unwrap_or_else(|| config.export_dir.join("leads.csv"));
            commands::export::run(
                &database_url,
                &leads,
                assessments.as_deref(),
                xlsx.as_deref(),
            )
            .await?;
        }
        Command::Template { name, out } => {
            commands::template::run(&name, out.as_deref())?;
        }
    }

    info!("Done");
    Ok(())
}
