// ABOUTME: Spreadsheet export command for fitform-cli
// ABOUTME: Dumps stored leads and assessments as CSV files and an optional XLSX workbook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use anyhow::Result;
use fitform::database::Database;
use fitform::export::csv::{write_assessments_csv, write_leads_csv};
use fitform::export::write_workbook;
use std::path::Path;
use tracing::info;

/// Export leads, plus assessments and a workbook when their paths are given
pub async fn run(
    database_url: &str,
    leads_path: &Path,
    assessments_path: Option<&Path>,
    xlsx_path: Option<&Path>,
) -> Result<()> {
    info!("Connecting to database: {}", database_url);
    let database = Database::new(database_url).await?;

    let leads = database.list_leads().await?;
    let written = write_leads_csv(leads_path, &leads)?;
    println!("{written} leads written to {}", leads_path.display());

    if assessments_path.is_none() && xlsx_path.is_none() {
        return Ok(());
    }
    let assessments = database.list_assessments().await?;

    if let Some(path) = assessments_path {
        let written = write_assessments_csv(path, &assessments)?;
        println!("{written} assessments written to {}", path.display());
    }

    if let Some(path) = xlsx_path {
        let (lead_rows, assessment_rows) = write_workbook(path, &leads, &assessments)?;
        println!(
            "Workbook written to {} ({lead_rows} leads, {assessment_rows} assessments)",
            path.display()
        );
    }

    Ok(())
}
