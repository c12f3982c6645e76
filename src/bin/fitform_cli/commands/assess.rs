// ABOUTME: Assessment command for fitform-cli
// ABOUTME: Builds a profile from flags, runs estimation and posture, writes report, stores lead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use crate::helpers::display::{display_assessment, display_saved_lead};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use fitform::database::Database;
use fitform::export::{write_report, AssessmentBundle};
use fitform::intelligence::meal_plan::{generate_meal_plan, generate_meal_template};
use fitform::intelligence::posture::{
    run_posture_check, LandmarkFileDetector, PostureReport, PostureThresholds,
};
use fitform::intelligence::estimate;
use fitform::logging::AppLogger;
use fitform::models::{ClientContact, ClientProfile};
use std::path::PathBuf;
use tracing::info;

/// Flags for `assess`
#[derive(Args)]
pub struct AssessArgs {
    /// Sex (male/female)
    #[arg(long)]
    sex: String,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long)]
    activity: String,

    /// Goal (lose, maintain, gain)
    #[arg(long)]
    goal: String,

    /// Client name
    #[arg(long, default_value = "")]
    name: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Dietary preferences
    #[arg(long, default_value = "")]
    prefs: String,

    /// Comma-separated allergens to avoid
    #[arg(long, default_value = "")]
    allergies: String,

    /// Pose landmark JSON produced by an external detector
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Write a Markdown report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Store the lead and assessment in the database
    #[arg(long)]
    save: bool,
}

impl AssessArgs {
    fn profile(&self) -> Result<ClientProfile> {
        Ok(ClientProfile {
            sex: self.sex.parse()?,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity.parse()?,
            goal: self.goal.parse()?,
        })
    }

    fn contact(&self) -> ClientContact {
        ClientContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            dietary_prefs: self.prefs.clone(),
            allergies: self.allergies.clone(),
        }
    }
}

/// Run a full assessment
pub async fn run(args: &AssessArgs, database_url: &str) -> Result<()> {
    let profile = args.profile()?;
    let contact = args.contact();

    let result = estimate(&profile)?;
    let meal_plan = generate_meal_plan(&profile, &result, &contact);
    let template = generate_meal_template(&result, profile.goal);

    let posture = args.landmarks.as_deref().map_or_else(
        || PostureReport::skipped("No landmark file supplied; posture analysis not run"),
        |path| run_posture_check(&LandmarkFileDetector, path, &PostureThresholds::default()),
    );

    AppLogger::log_assessment(profile.goal.as_str(), result.target_kcal, posture.is_analyzed());
    display_assessment(&profile, &result, &meal_plan, &posture);

    if let Some(path) = &args.report {
        let bundle = AssessmentBundle {
            profile,
            contact: contact.clone(),
            result,
            meal_plan,
            posture: posture.clone(),
            generated_at: Utc::now(),
        };
        write_report(path, &bundle)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    if args.save {
        info!("Connecting to database: {}", database_url);
        let database = Database::new(database_url).await?;
        let lead_id = database
            .insert_lead_and_assessment(&profile, &contact, &result, &template, Some(&posture))
            .await?;
        display_saved_lead(lead_id, database.count_leads().await?);
    }

    Ok(())
}
