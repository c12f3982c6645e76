// ABOUTME: CSV export of stored leads and assessments
// ABOUTME: UTF-8 with BOM so spreadsheet applications open non-ASCII names correctly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use super::{create_output, UTF8_BOM};
use crate::database::{Lead, StoredAssessment};
use crate::logging::AppLogger;
use fitform_core::errors::AppResult;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Column order of the leads table
pub const LEAD_HEADERS: [&str; 13] = [
    "id",
    "name",
    "email",
    "phone",
    "age",
    "gender",
    "height_cm",
    "weight_kg",
    "activity_level",
    "goal",
    "dietary_prefs",
    "allergies",
    "created_at",
];

/// One leads-table row, shared with the workbook export
#[derive(Serialize)]
pub(super) struct LeadRow<'a> {
    pub(super) id: i64,
    pub(super) name: &'a str,
    pub(super) email: &'a str,
    pub(super) phone: &'a str,
    pub(super) age: u32,
    pub(super) gender: &'static str,
    pub(super) height_cm: f64,
    pub(super) weight_kg: f64,
    pub(super) activity_level: &'static str,
    pub(super) goal: &'static str,
    pub(super) dietary_prefs: &'a str,
    pub(super) allergies: &'a str,
    pub(super) created_at: String,
}

impl<'a> From<&'a Lead> for LeadRow<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            id: lead.id,
            name: &lead.contact.name,
            email: &lead.contact.email,
            phone: &lead.contact.phone,
            age: lead.profile.age,
            gender: lead.profile.sex.as_str(),
            height_cm: lead.profile.height_cm,
            weight_kg: lead.profile.weight_kg,
            activity_level: lead.profile.activity_level.as_str(),
            goal: lead.profile.goal.as_str(),
            dietary_prefs: &lead.contact.dietary_prefs,
            allergies: &lead.contact.allergies,
            created_at: lead.created_at.to_rfc3339(),
        }
    }
}

/// Column order of the assessments table
pub const ASSESSMENT_HEADERS: [&str; 13] = [
    "id",
    "lead_id",
    "lead_name",
    "bmi",
    "bmr",
    "tdee",
    "target_calories",
    "protein_g",
    "fat_g",
    "carbs_g",
    "notes",
    "posture_findings",
    "created_at",
];

/// One assessments-table row, shared with the workbook export
#[derive(Serialize)]
pub(super) struct AssessmentRow<'a> {
    pub(super) id: i64,
    pub(super) lead_id: i64,
    pub(super) lead_name: &'a str,
    pub(super) bmi: f64,
    pub(super) bmr: f64,
    pub(super) tdee: f64,
    pub(super) target_calories: f64,
    pub(super) protein_g: f64,
    pub(super) fat_g: f64,
    pub(super) carbs_g: f64,
    pub(super) notes: &'a str,
    pub(super) posture_findings: &'a str,
    pub(super) created_at: String,
}

impl<'a> From<&'a StoredAssessment> for AssessmentRow<'a> {
    fn from(a: &'a StoredAssessment) -> Self {
        Self {
            id: a.id,
            lead_id: a.lead_id,
            lead_name: &a.lead_name,
            bmi: a.result.bmi,
            bmr: a.result.bmr_kcal,
            tdee: a.result.tdee_kcal,
            target_calories: a.result.target_kcal,
            protein_g: a.result.protein_g,
            fat_g: a.result.fat_g,
            carbs_g: a.result.carb_g,
            notes: &a.notes,
            posture_findings: a.posture_findings.as_deref().unwrap_or(""),
            created_at: a.created_at.to_rfc3339(),
        }
    }
}

fn write_rows<T: Serialize>(
    path: &Path,
    headers: &[&str],
    rows: impl Iterator<Item = T>,
) -> AppResult<usize> {
    let mut out = create_output(path)?;
    out.write_all(UTF8_BOM)?;

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    // Headers are written explicitly so an empty table still gets a header row
    writer.write_record(headers)?;
    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write leads to `path` as CSV, returning the number of data rows
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written
pub fn write_leads_csv(path: &Path, leads: &[Lead]) -> AppResult<usize> {
    let count = write_rows(path, &LEAD_HEADERS, leads.iter().map(LeadRow::from))?;
    AppLogger::log_export("leads_csv", &path.display().to_string(), count);
    Ok(count)
}

/// Write assessments to `path` as CSV, returning the number of data rows
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written
pub fn write_assessments_csv(path: &Path, assessments: &[StoredAssessment]) -> AppResult<usize> {
    let count = write_rows(path, &ASSESSMENT_HEADERS, assessments.iter().map(AssessmentRow::from))?;
    AppLogger::log_export("assessments_csv", &path.display().to_string(), count);
    Ok(count)
}
